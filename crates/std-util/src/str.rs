//! Case conversions between database identifiers and source identifiers.
//!
//! All helpers accept any casing as input; word boundaries are detected on
//! `_`, `-`, whitespace and lower-to-upper transitions.

use heck::{ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// `order_item` -> `orderItem`
pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

/// `order_item` -> `OrderItem`
pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

/// `OrderItem` -> `order_item`
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Lower-cases the first character, leaving the rest untouched.
pub fn lower_first(src: &str) -> String {
    let mut chars = src.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
