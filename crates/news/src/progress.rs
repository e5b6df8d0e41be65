//! Progress reporting for paginated searches.
//!
//! `search_all` reports pagination through a [`ProgressObserver`] so callers
//! can surface long fetches however they like. Observers are purely
//! observational: they see the page count and per-page ticks but cannot
//! influence control flow.

/// Observer for pagination progress.
///
/// All methods default to no-ops, so implementations only override what
/// they care about. Observers must be `Send + Sync`; the client calls them
/// from whichever task runs the search.
pub trait ProgressObserver: Send + Sync {
    /// Pagination is starting; `total_units` pages remain after the first.
    fn begin(&self, _total_units: u64) {}

    /// One more page has been fetched and appended.
    fn advance(&self) {}

    /// Pagination stopped, successfully or not.
    fn finish(&self) {}
}

/// Observer that ignores all progress events. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

/// Terminal progress bar backed by `indicatif`.
///
/// The bar stays hidden until `begin` supplies a length.
#[cfg(feature = "indicatif")]
pub struct TerminalProgress {
    bar: indicatif::ProgressBar,
}

#[cfg(feature = "indicatif")]
impl TerminalProgress {
    /// Create a progress bar for paginated searches.
    pub fn new() -> Self {
        let bar = indicatif::ProgressBar::no_length();
        bar.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages ({eta})")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

#[cfg(feature = "indicatif")]
impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "indicatif")]
impl ProgressObserver for TerminalProgress {
    fn begin(&self, total_units: u64) {
        self.bar.set_length(total_units);
        self.bar
            .enable_steady_tick(std::time::Duration::from_millis(100));
    }

    fn advance(&self) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}
