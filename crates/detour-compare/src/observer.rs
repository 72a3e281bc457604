//! Batch observer trait for reporting and data collection.

use crate::{DetourOutcome, DetourResult, TripPair};

/// Callbacks invoked by [`DetourComparator::run`][crate::DetourComparator::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — result printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl DetourObserver for Printer {
///     fn on_result(&mut self, index: usize, _pair: &TripPair, result: &DetourResult) {
///         println!("#{index}: {result}");
///     }
/// }
/// ```
pub trait DetourObserver {
    /// Called once per pair, in input order.
    fn on_result(&mut self, _index: usize, _pair: &TripPair, _result: &DetourResult) {}

    /// Called once after every pair has been compared.
    fn on_batch_end(&mut self, _summary: &BatchSummary) {}
}

/// A [`DetourObserver`] that does nothing.
pub struct NoopObserver;

impl DetourObserver for NoopObserver {}

// ── BatchSummary ──────────────────────────────────────────────────────────────

/// Running tally of a batch of comparisons.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    pub pairs:                 usize,
    pub first_driver_shorter:  usize,
    pub second_driver_shorter: usize,
    pub equal:                 usize,
    /// Sum of [`DetourResult::savings_km`] over the batch.
    pub total_savings_km:      f64,
}

impl BatchSummary {
    pub fn record(&mut self, result: &DetourResult) {
        self.pairs += 1;
        match result.outcome {
            DetourOutcome::FirstDriverShorter  => self.first_driver_shorter += 1,
            DetourOutcome::SecondDriverShorter => self.second_driver_shorter += 1,
            DetourOutcome::Equal               => self.equal += 1,
        }
        self.total_savings_km += result.savings_km();
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pairs: {} driver 1, {} driver 2, {} equal; {:.4} km saved",
            self.pairs,
            self.first_driver_shorter,
            self.second_driver_shorter,
            self.equal,
            self.total_savings_km
        )
    }
}
