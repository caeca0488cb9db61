//! Candidate path filters
//!
//! Repositories carry optional accept and reject filters applied to every
//! candidate path string before pattern matching. A filter is a glob, a
//! regex, or an arbitrary predicate supplied in code.

use crate::Result;
use glob::Pattern as Glob;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// A filter over candidate path strings.
#[derive(Clone)]
pub enum PathFilter {
    /// Glob match against the full candidate path.
    Glob(Glob),
    /// Regex match against the full candidate path.
    Regex(Regex),
    /// Arbitrary predicate over the candidate path.
    Predicate(Arc<dyn Fn(&str) -> bool>),
}

impl PathFilter {
    /// Build a glob filter.
    pub fn glob(pattern: &str) -> Result<Self> {
        Ok(PathFilter::Glob(Glob::new(pattern)?))
    }

    /// Build a regex filter.
    pub fn regex(pattern: &str) -> Result<Self> {
        Ok(PathFilter::Regex(Regex::new(pattern)?))
    }

    /// Build a predicate filter.
    pub fn predicate(predicate: impl Fn(&str) -> bool + 'static) -> Self {
        PathFilter::Predicate(Arc::new(predicate))
    }

    /// Whether the candidate path matches this filter.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            PathFilter::Glob(glob) => glob.matches(candidate),
            PathFilter::Regex(regex) => regex.is_match(candidate),
            PathFilter::Predicate(predicate) => predicate(candidate),
        }
    }
}

impl fmt::Debug for PathFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathFilter::Glob(glob) => f.debug_tuple("Glob").field(&glob.as_str()).finish(),
            PathFilter::Regex(regex) => f.debug_tuple("Regex").field(&regex.as_str()).finish(),
            PathFilter::Predicate(_) => f.debug_tuple("Predicate").finish(),
        }
    }
}

/// Apply accept and reject filters to a candidate path. A candidate is
/// admitted when it matches `accept` (or no accept filter is set) and does
/// not match `reject`.
pub fn admitted(
    accept: Option<&PathFilter>,
    reject: Option<&PathFilter>,
    candidate: &str,
) -> bool {
    if let Some(accept) = accept {
        if !accept.matches(candidate) {
            return false;
        }
    }
    if let Some(reject) = reject {
        if reject.matches(candidate) {
            return false;
        }
    }
    true
}
