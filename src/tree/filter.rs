//! Name-based exclusion of directory entries

use glob::Pattern;
use tracing::warn;

/// Excludes entries whose name equals one of the configured names or matches
/// one of the configured glob patterns.
///
/// Names are compared literally, so a name such as `[id]` only ever excludes an
/// entry called `[id]`. Glob syntax is honoured only for patterns.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    names: Vec<String>,
    patterns: Vec<Pattern>,
}

impl ExcludeFilter {
    pub fn new(names: &[String], patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!(pattern = %p, error = %e, "ignoring invalid exclude pattern");
                    None
                }
            })
            .collect();
        Self {
            names: names.to_vec(),
            patterns,
        }
    }

    /// Check if an entry with this name should be skipped.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name) || self.patterns.iter().any(|p| p.matches(name))
    }
}
