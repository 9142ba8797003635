//! Shared utility functions for code generation.

use heck::ToSnakeCase;

/// Convert a string to snake_case (e.g., "CreatedAt" -> "created_at", "ID" -> "id")
pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// Check that `s` is an ASCII identifier: a letter or underscore followed by
/// letters, digits or underscores.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && s != "_"
        }
        _ => false,
    }
}
