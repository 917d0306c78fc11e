use crate::types::SkippedRow;

/// Minimal stats reported when a parse completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Number of parsed data rows.
    pub rows: usize,
    /// Number of rows dropped as malformed.
    pub skipped: usize,
}

/// Observer interface for parse events.
///
/// Implementors can record metrics or emit warnings as rows are dropped.
/// All methods have no-op defaults.
pub trait ParseObserver: Send + Sync {
    /// Called once per data row dropped under
    /// [`crate::parsing::MalformedRowPolicy::Skip`].
    fn on_row_skipped(&self, _diagnostic: &SkippedRow) {}

    /// Called when parsing finishes successfully.
    fn on_complete(&self, _stats: ParseStats) {}
}

/// Logs parse events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ParseObserver for StdErrObserver {
    fn on_row_skipped(&self, diagnostic: &SkippedRow) {
        eprintln!("[parse][skip] {diagnostic}");
    }

    fn on_complete(&self, stats: ParseStats) {
        eprintln!("[parse][ok] rows={} skipped={}", stats.rows, stats.skipped);
    }
}
