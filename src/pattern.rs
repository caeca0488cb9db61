//! Search pattern compilation
//!
//! User search terms are joined into a single glob which every repository
//! matches candidate names against. Compilation never fails: malformed
//! bracket expressions fall back to literal matching.

use glob::{MatchOptions, Pattern as Glob};
use tracing::debug;

/// A compiled search pattern, reusable across repository scans.
#[derive(Debug, Clone)]
pub struct Pattern {
    glob: Glob,
    options: MatchOptions,
}

impl Pattern {
    /// Compile search terms into a glob pattern.
    ///
    /// Terms are joined with `*` and a trailing `*` is appended unless the
    /// joined string already ends in one, so `["foo", "bar"]` becomes
    /// `foo*bar*`. Supported syntax is `*`, `?` and `[...]` character
    /// classes. An empty term list compiles to `*`.
    pub fn compile<S: AsRef<str>>(terms: &[S], case_insensitive: bool) -> Self {
        let mut joined = terms
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join("*");
        if !joined.ends_with('*') {
            joined.push('*');
        }

        let glob = match Glob::new(&joined) {
            Ok(glob) => glob,
            Err(_) => Self::fallback(&joined),
        };

        let options = MatchOptions {
            case_sensitive: !case_insensitive,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };

        Pattern { glob, options }
    }

    /// Degrade a malformed glob to a literal match. An unclosed bracket is
    /// the common case, so `[` is neutralized first; if the result still
    /// does not compile, every metacharacter is escaped.
    fn fallback(joined: &str) -> Glob {
        debug!("Malformed glob {:?}, degrading to literal match", joined);
        let bracket_literal = joined.replace('[', "[[]");
        if let Ok(glob) = Glob::new(&bracket_literal) {
            return glob;
        }
        let mut escaped = Glob::escape(joined.trim_end_matches('*'));
        escaped.push('*');
        Glob::new(&escaped).unwrap_or_default()
    }

    /// Match a candidate name against the compiled pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.glob.matches_with(candidate, self.options)
    }

    /// The glob string this pattern was compiled to.
    pub fn as_str(&self) -> &str {
        self.glob.as_str()
    }
}
