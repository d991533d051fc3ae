//! Event names, namespaces and namespace matching.

use std::fmt;

/// Name of the bucket whose listeners are matched for every event name.
pub const WILDCARD: &str = "*";

/// An event or hook name split into its name and optional namespace.
///
/// Only the first `.` separates the two parts, so a namespace may itself
/// contain dots:
///
/// ```rust
/// use hookline_core::EventName;
///
/// let parsed = EventName::parse("change.myext.core");
/// assert_eq!(parsed.name(), "change");
/// assert_eq!(parsed.namespace(), Some("myext.core"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EventName {
    name: String,
    namespace: Option<String>,
}

impl EventName {
    /// Parse `"name"` or `"name.namespace"`.
    ///
    /// Never fails; an empty input yields an empty name and no namespace.
    pub fn parse(input: &str) -> Self {
        match input.split_once('.') {
            Some((name, namespace)) => Self {
                name: name.to_owned(),
                namespace: Some(namespace.to_owned()),
            },
            None => Self {
                name: input.to_owned(),
                namespace: None,
            },
        }
    }

    /// The unqualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The namespace, if one was given.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Whether this addresses the wildcard bucket.
    pub fn is_wildcard(&self) -> bool {
        self.name == WILDCARD
    }

    /// The namespace as a filter, for storing alongside a registration.
    pub fn filter(&self) -> NamespaceFilter {
        NamespaceFilter(self.namespace.clone())
    }

    /// Split into owned parts.
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.name, self.namespace)
    }

    pub(crate) fn set_namespace(&mut self, namespace: &str) {
        self.namespace = Some(namespace.to_owned());
    }
}

impl From<&str> for EventName {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for EventName {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}.{}", self.name, namespace),
            None => f.write_str(&self.name),
        }
    }
}

/// Plain string-prefix matcher over namespaces.
///
/// A filter is either absent ([`NamespaceFilter::any`]) or a prefix. There
/// is no segment awareness: the prefix `"lo"` matches the namespace
/// `"local"`, and `"local"` matches `"localization"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NamespaceFilter(Option<String>);

impl NamespaceFilter {
    /// The absent filter.
    pub const fn any() -> Self {
        Self(None)
    }

    /// A filter matching namespaces that start with `prefix`.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self(Some(prefix.into()))
    }

    /// The stored prefix, if any.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether this is the absent filter.
    pub fn is_any(&self) -> bool {
        self.0.is_none()
    }

    /// Delivery rule: does a registration carrying this filter receive a
    /// firing with `namespace`?
    ///
    /// True whenever either side is absent; otherwise the firing namespace
    /// must start with the filter.
    pub fn matches(&self, namespace: Option<&str>) -> bool {
        match (self.as_str(), namespace) {
            (Some(filter), Some(namespace)) => namespace.starts_with(filter),
            _ => true,
        }
    }

    /// Removal rule: does removing with this filter select a registration
    /// stored under `stored`?
    ///
    /// The absent filter selects everything. A prefix selects only
    /// registrations whose stored namespace starts with it; registrations
    /// stored without a namespace are kept.
    pub fn selects(&self, stored: Option<&str>) -> bool {
        match (self.as_str(), stored) {
            (None, _) => true,
            (Some(filter), Some(stored)) => stored.starts_with(filter),
            (Some(_), None) => false,
        }
    }
}

impl From<Option<String>> for NamespaceFilter {
    fn from(namespace: Option<String>) -> Self {
        Self(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let parsed = EventName::parse("MoneyAdded");
        assert_eq!(parsed.name(), "MoneyAdded");
        assert_eq!(parsed.namespace(), None);
    }

    #[test]
    fn test_parse_splits_on_first_dot() {
        let parsed = EventName::parse("a.b.c");
        assert_eq!(parsed.into_parts(), ("a".to_string(), Some("b.c".to_string())));
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = EventName::parse("");
        assert_eq!(parsed.name(), "");
        assert_eq!(parsed.namespace(), None);
    }

    #[test]
    fn test_parse_trailing_dot_gives_empty_namespace() {
        let parsed = EventName::parse("save.");
        assert_eq!(parsed.name(), "save");
        assert_eq!(parsed.namespace(), Some(""));
    }

    #[test]
    fn test_display_roundtrips_input() {
        assert_eq!(EventName::parse("change.myext.core").to_string(), "change.myext.core");
        assert_eq!(EventName::parse("change").to_string(), "change");
    }

    #[test]
    fn test_wildcard_detection() {
        assert!(EventName::parse("*.audit").is_wildcard());
        assert!(!EventName::parse("save").is_wildcard());
    }

    #[test]
    fn test_matches_is_vacuous_when_either_side_absent() {
        assert!(NamespaceFilter::any().matches(None));
        assert!(NamespaceFilter::any().matches(Some("local")));
        assert!(NamespaceFilter::prefix("local").matches(None));
    }

    #[test]
    fn test_matches_plain_prefix() {
        let filter = NamespaceFilter::prefix("local");
        assert!(filter.matches(Some("local")));
        assert!(filter.matches(Some("local.sub")));
        assert!(filter.matches(Some("localization")));
        assert!(!filter.matches(Some("remote")));
        assert!(!filter.matches(Some("loc")));
    }

    #[test]
    fn test_matches_short_prefix_boundary() {
        assert!(NamespaceFilter::prefix("lo").matches(Some("local")));
    }

    #[test]
    fn test_selects_for_removal() {
        assert!(NamespaceFilter::any().selects(None));
        assert!(NamespaceFilter::any().selects(Some("ext")));
        assert!(NamespaceFilter::prefix("ext").selects(Some("ext.core")));
        assert!(!NamespaceFilter::prefix("ext").selects(Some("core")));
        assert!(!NamespaceFilter::prefix("ext").selects(None));
    }
}
