//! Per-object event configuration.

/// Nested dispatch limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Settings for one object's event handling.
///
/// # Example
/// ```rust
/// use hookline_std::EventsConfig;
///
/// let config = EventsConfig::new()
///     .with_default_namespace("app")
///     .with_max_depth(8);
/// assert_eq!(config.default_namespace(), Some("app"));
/// assert_eq!(config.max_depth(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsConfig {
    default_namespace: Option<String>,
    max_depth: usize,
    warn_unbound: bool,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsConfig {
    /// Default settings: no default namespace, depth limit of
    /// [`DEFAULT_MAX_DEPTH`], unbound handlers reported as warnings.
    pub fn new() -> Self {
        Self {
            default_namespace: None,
            max_depth: DEFAULT_MAX_DEPTH,
            warn_unbound: true,
        }
    }

    /// Namespace given to events fired without one.
    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = Some(namespace.into());
        self
    }

    /// Maximum nesting of dispatches started from inside listeners.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether a missing conventional handler is logged at `warn` (default)
    /// or only at `debug`.
    pub fn with_warn_unbound(mut self, warn: bool) -> Self {
        self.warn_unbound = warn;
        self
    }

    /// Namespace given to events fired without one.
    pub fn default_namespace(&self) -> Option<&str> {
        self.default_namespace.as_deref()
    }

    /// Maximum dispatch nesting.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether unbound handlers are reported at `warn`.
    pub fn warn_unbound(&self) -> bool {
        self.warn_unbound
    }
}
