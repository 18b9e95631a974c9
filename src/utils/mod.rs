pub mod json_util;
pub mod string_util;
