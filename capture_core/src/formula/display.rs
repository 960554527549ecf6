//! Display rules for capture chances

/// Highest value shown for a chance that is not mathematically guaranteed
const MAX_UNCERTAIN_DISPLAY: f64 = 99.9;

/// Chance as it should be shown: 100 only when guaranteed, otherwise at most 99.9
pub fn display_probability(probability: f64, guaranteed: bool) -> f64 {
    if guaranteed {
        100.0
    } else {
        probability.clamp(0.0, MAX_UNCERTAIN_DISPLAY)
    }
}

/// Format a chance with one decimal, e.g. "12.3"
pub fn format_probability(probability: f64, guaranteed: bool) -> String {
    format!("{:.1}", display_probability(probability, guaranteed))
}
