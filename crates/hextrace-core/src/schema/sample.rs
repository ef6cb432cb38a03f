use super::primitive::{INT8_T, INT16_T, INT32_T, UINT8_T, UINT16_T, UINT32_T};
use super::tree::Schema;

/// Built-in schema used when no schema file is given: one of each integer
/// width, signed and unsigned, under a `Test` heading.
pub fn sample_schema() -> Schema {
    Schema::new()
        .label("Test")
        .indent()
        .field("test_uint32_t_string", UINT32_T)
        .field("test_int32_t_string", INT32_T)
        .field("test_uint16_t_string", UINT16_T)
        .field("test_int16_t_string", INT16_T)
        .field("test_uint8_t_string", UINT8_T)
        .field("test_int8_t_string", INT8_T)
        .unindent()
}
