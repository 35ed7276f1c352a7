// helper utility functions

use std::fmt::Display;

// convert any displayable value to a string
pub fn as_str<T: Display>(value: T) -> String {
    value.to_string()
}

// render a sequence of values as one space-separated line
pub fn join_values<T: Display>(values: &[T]) -> String {
    values.iter().map(as_str).collect::<Vec<_>>().join(" ")
}
