//! Converter state and options
//!
//! A [`Converter`] binds the command registry and the conversion options.
//! Each conversion method builds into its own output buffer, so one
//! converter can be shared freely between calls.

use crate::data::registry::Registry;

/// Default ceiling on element nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

// =============================================================================
// Conversion Options
// =============================================================================

/// Options for tree conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Deepest element nesting that is walked. Subtrees below this depth
    /// are omitted from the output and a warning is logged.
    /// Default: 512
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConvertOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

// =============================================================================
// Converter
// =============================================================================

/// Tree converter bound to a command registry.
#[derive(Debug, Clone)]
pub struct Converter<'r> {
    pub(crate) registry: &'r Registry,
    pub(crate) options: ConvertOptions,
}

impl Converter<'static> {
    /// Converter over the builtin commands only
    pub fn new() -> Self {
        Self::with_registry(Registry::builtin())
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Converter<'r> {
    /// Converter resolving command ids through `registry`
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self {
            registry,
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Fresh depth guard for one top-level conversion call.
    pub(crate) fn depth_guard(&self) -> DepthGuard {
        DepthGuard {
            max_depth: self.options.max_depth,
            omitted: 0,
        }
    }
}

// =============================================================================
// Depth Guard
// =============================================================================

/// Tracks subtrees cut off by the nesting ceiling during one call.
#[derive(Debug)]
pub(crate) struct DepthGuard {
    max_depth: usize,
    omitted: usize,
}

impl DepthGuard {
    /// Check the ceiling before descending into an element at `depth`.
    pub(crate) fn admit(&mut self, depth: usize) -> bool {
        if depth <= self.max_depth {
            return true;
        }
        self.omitted += 1;
        false
    }

    pub(crate) fn omitted(&self) -> usize {
        self.omitted
    }

    /// Warn once if anything was omitted.
    pub(crate) fn finish(self) {
        if self.omitted > 0 {
            log::warn!(
                "element nesting exceeds {} levels, {} subtrees omitted",
                self.max_depth,
                self.omitted
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::new();
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(opts.with_max_depth(3).max_depth, 3);
    }

    #[test]
    fn test_converter_uses_builtin_registry() {
        let converter = Converter::new();
        assert_eq!(converter.registry().user_command_count(), 0);
        assert_eq!(converter.options(), &ConvertOptions::default());
    }

    #[test]
    fn test_depth_guard() {
        let converter = Converter::new().with_options(ConvertOptions::new().with_max_depth(2));
        let mut guard = converter.depth_guard();
        assert!(guard.admit(0));
        assert!(guard.admit(2));
        assert_eq!(guard.omitted(), 0);
        assert!(!guard.admit(3));
        assert!(!guard.admit(7));
        assert_eq!(guard.omitted(), 2);
        guard.finish();
    }
}
