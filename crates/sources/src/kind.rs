//! Path-kind heuristic for the ambiguous positional argument
//!
//! The second CLI argument is either a metric name or a packrat log
//! directory; when no explicit flag says which, this guess decides.

/// What the ambiguous argument looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Looks like a metric name (`stats.gauges.foo`)
    MetricPath,

    /// Looks like a packrat log directory (`/var/log/packrat/web-1`)
    PackratLog,

    /// Neither threshold met; the caller must ask for an explicit flag
    Unknown,
}

impl PathKind {
    /// Guess the kind of an ambiguous argument
    ///
    /// More than three `/`-separated pieces reads as a directory path;
    /// otherwise more than three `.`-separated pieces reads as a metric
    /// name. The slash check deliberately runs first: an argument over
    /// both thresholds classifies as a packrat log, and operators depend
    /// on that tie-break.
    pub fn guess(arg: &str) -> Self {
        if arg.split('/').count() > 3 {
            return Self::PackratLog;
        }
        if arg.split('.').count() > 3 {
            return Self::MetricPath;
        }
        Self::Unknown
    }
}
