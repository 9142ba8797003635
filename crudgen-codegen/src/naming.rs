//! Derived names for a model: plurals, variable names, paths and tables.

use crudgen_core::to_snake_case;
use indexmap::IndexMap;

/// Rules that derive every secondary name of a model from its identifier.
///
/// Only [`pluralize`](NamingPolicy::pluralize) is required; the other names
/// are built on top of it.
pub trait NamingPolicy {
    /// Plural form of `identifier`.
    fn pluralize(&self, identifier: &str) -> String;

    /// Variable name: the whole identifier lowercased.
    ///
    /// Not case-boundary aware, so `UserProfile` becomes `userprofile`.
    fn var_name(&self, identifier: &str) -> String {
        identifier.to_lowercase()
    }

    /// Plural variable name.
    fn var_name_plural(&self, identifier: &str) -> String {
        self.pluralize(&self.var_name(identifier))
    }

    /// URL path segment for the model's route group.
    fn path_segment(&self, identifier: &str) -> String {
        self.pluralize(identifier).to_lowercase()
    }

    /// Storage table used when a schema does not name one.
    fn table_name(&self, identifier: &str) -> String {
        self.pluralize(&to_snake_case(identifier))
    }
}

/// English pluralization without exceptions: a trailing `y` becomes `ies`,
/// anything else gets an `s`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaivePlural;

impl NamingPolicy for NaivePlural {
    fn pluralize(&self, identifier: &str) -> String {
        match identifier.strip_suffix('y') {
            Some(stem) => format!("{}ies", stem),
            None => format!("{}s", identifier),
        }
    }
}

/// Irregular plurals layered over another policy.
///
/// Lookups ignore case. A lowercase identifier gets a lowercase plural, so
/// `Person = "People"` yields `people` for the variable name and table.
#[derive(Debug, Clone, Default)]
pub struct IrregularPlurals<P = NaivePlural> {
    inner: P,
    overrides: IndexMap<String, String>,
}

impl IrregularPlurals<NaivePlural> {
    /// Overrides on top of [`NaivePlural`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: NamingPolicy> IrregularPlurals<P> {
    /// Overrides on top of an arbitrary policy.
    pub fn with_inner(inner: P) -> Self {
        Self {
            inner,
            overrides: IndexMap::new(),
        }
    }

    /// Register `singular -> plural`.
    pub fn insert(&mut self, singular: &str, plural: impl Into<String>) {
        self.overrides
            .insert(singular.to_lowercase(), plural.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, singular: &str, plural: impl Into<String>) -> Self {
        self.insert(singular, plural);
        self
    }

    /// Number of registered overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Whether no overrides are registered.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl<P: NamingPolicy> NamingPolicy for IrregularPlurals<P> {
    fn pluralize(&self, identifier: &str) -> String {
        match self.overrides.get(&identifier.to_lowercase()) {
            Some(plural) if identifier.chars().all(|c| !c.is_uppercase()) => {
                plural.to_lowercase()
            }
            Some(plural) => plural.clone(),
            None => self.inner.pluralize(identifier),
        }
    }

    /// An override is snake-cased as a whole, so `SalesPerson = "SalesPeople"`
    /// gives `sales_people`.
    fn table_name(&self, identifier: &str) -> String {
        match self.overrides.get(&identifier.to_lowercase()) {
            Some(plural) => to_snake_case(plural),
            None => self.inner.table_name(identifier),
        }
    }
}

impl<P, K, V> FromIterator<(K, V)> for IrregularPlurals<P>
where
    P: NamingPolicy + Default,
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut plurals = Self::with_inner(P::default());
        for (singular, plural) in iter {
            plurals.insert(singular.as_ref(), plural);
        }
        plurals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_pluralize() {
        assert_eq!(NaivePlural.pluralize("category"), "categories");
        assert_eq!(NaivePlural.pluralize("post"), "posts");
        assert_eq!(NaivePlural.pluralize("User"), "Users");
        assert_eq!(NaivePlural.pluralize("box"), "boxs");
    }

    #[test]
    fn test_var_names() {
        assert_eq!(NaivePlural.var_name("UserProfile"), "userprofile");
        assert_eq!(NaivePlural.var_name_plural("User"), "users");
        assert_eq!(NaivePlural.var_name_plural("Category"), "categories");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(NaivePlural.path_segment("User"), "users");
        assert_eq!(NaivePlural.path_segment("UserProfile"), "userprofiles");
    }

    #[test]
    fn test_table_name_uses_snake_case() {
        assert_eq!(NaivePlural.table_name("UserProfile"), "user_profiles");
        assert_eq!(NaivePlural.table_name("Category"), "categories");
    }

    #[test]
    fn test_irregular_overrides() {
        let policy = IrregularPlurals::new().with("Person", "People");

        assert_eq!(policy.pluralize("Person"), "People");
        assert_eq!(policy.pluralize("person"), "people");
        assert_eq!(policy.var_name_plural("Person"), "people");
        assert_eq!(policy.path_segment("Person"), "people");
        assert_eq!(policy.table_name("Person"), "people");
        assert_eq!(policy.pluralize("Post"), "Posts");
    }

    #[test]
    fn test_multi_word_override_reaches_table() {
        let policy = IrregularPlurals::new().with("SalesPerson", "SalesPeople");

        assert_eq!(policy.var_name_plural("SalesPerson"), "salespeople");
        assert_eq!(policy.path_segment("SalesPerson"), "salespeople");
        assert_eq!(policy.table_name("SalesPerson"), "sales_people");
        assert_eq!(policy.table_name("UserProfile"), "user_profiles");
    }

    #[test]
    fn test_irregular_from_iter() {
        let policy: IrregularPlurals =
            [("Mouse", "Mice"), ("Child", "Children")].into_iter().collect();

        assert_eq!(policy.len(), 2);
        assert_eq!(policy.pluralize("child"), "children");
        assert_eq!(policy.pluralize("Mouse"), "Mice");
    }
}
