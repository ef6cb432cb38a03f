use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hextrace_core::{load_schema_file, read_hex_file, run, sample_schema};

fn main() -> ExitCode {
    if let Err(err) = run_all() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run_all() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if !path.join("input.txt").exists() {
            continue;
        }
        regenerate_one(&path)?;
    }

    Ok(())
}

fn regenerate_one(dir: &Path) -> Result<(), String> {
    let schema_path = dir.join("schema.json");
    let schema = if schema_path.exists() {
        load_schema_file(&schema_path)
            .map_err(|err| format!("failed to load {}: {}", schema_path.display(), err))?
    } else {
        sample_schema()
    };
    let input = dir.join("input.txt");
    let dump = read_hex_file(&input)
        .map_err(|err| format!("failed to read {}: {}", input.display(), err))?;
    let trace = run(&schema, &dump.bytes)
        .map_err(|err| format!("trace failed for {}: {}", input.display(), err))?;
    let output = dir.join("expected_trace.txt");
    fs::write(&output, trace.render())
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
