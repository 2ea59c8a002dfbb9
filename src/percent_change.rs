//! Percent-change calculators over snapshot pairs.
//!
//! Both variants treat a zero, missing or non-finite comparison value as "no
//! comparison available" (`None`) instead of dividing by zero. Callers render
//! `None` as a blank cell; it never reaches the UI as NaN or infinity.

/// Fractional change between a current value and a single prior value:
/// `(current - prior) / prior`.
///
/// Returns `None` when the prior value is zero, missing or non-finite.
pub fn percent_change(current: f64, prior: Option<f64>) -> Option<f64> {
    let prior = prior?;
    if prior == 0.0 || !prior.is_finite() || !current.is_finite() {
        return None;
    }
    let change = (current - prior) / prior;
    change.is_finite().then_some(change)
}

/// Result of a two-day window comparison: the absolute 24h delta plus the
/// fractional change of that delta against the previous 24h window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowChange {
    /// `current - one_day_ago`; the value accrued over the last window.
    pub delta: f64,
    /// Fractional change of `delta` versus the previous window's delta, or
    /// `None` when the previous delta was zero or degenerate.
    pub change: Option<f64>,
}

/// Two-day window change over cumulative values.
///
/// The inputs are cumulative totals sampled now, one day back and two days
/// back. The delta is always computed when both recent samples exist; only the
/// ratio degrades to `None` when the previous window is empty.
pub fn two_day_window_change(
    current: f64,
    one_day_ago: Option<f64>,
    two_days_ago: Option<f64>,
) -> Option<WindowChange> {
    let one_day_ago = one_day_ago?;
    if !current.is_finite() || !one_day_ago.is_finite() {
        return None;
    }
    let delta = current - one_day_ago;

    let change = two_days_ago
        .filter(|prior| prior.is_finite())
        .map(|prior| one_day_ago - prior)
        .and_then(|previous_delta| {
            if previous_delta == 0.0 {
                return None;
            }
            let ratio = (delta - previous_delta) / previous_delta;
            ratio.is_finite().then_some(ratio)
        });

    Some(WindowChange { delta, change })
}
