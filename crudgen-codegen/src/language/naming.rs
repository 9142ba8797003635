//! Naming conventions for target languages.

/// How a target language spells field names and handles reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a declared field name to the language's field name.
    pub field_to_name: fn(&str) -> String,
    /// Keywords that can still be used once escaped.
    pub reserved_words: &'static [&'static str],
    /// Keywords that no escape makes usable, e.g. `self` in Rust.
    pub forbidden_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name cannot be used at all.
    pub fn is_forbidden(&self, name: &str) -> bool {
        self.forbidden_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed)
    }

    /// Transform a field name without escaping, e.g. for a storage column.
    pub fn raw_field_name(&self, name: &str) -> String {
        (self.field_to_name)(name)
    }
}
