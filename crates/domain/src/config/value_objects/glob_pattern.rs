use globset::{Glob, GlobMatcher};
use quality_probe_shared_kernel::{DomainError, DomainResult};

/// Compiled glob matched against record paths (always `/`-separated strings).
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> DomainResult<Self> {
        let glob = Glob::new(pattern).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.kind().to_string(),
        })?;
        Ok(Self {
            original: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn matches(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.original == other.original
    }
}
