//! Shake math - modified rate to rounded shake value to capture chance

use super::constants::{
    MAX_CATCH_RATE, OUT_OF_BATTLE_MODIFIER, SHAKE_CHECKS, SHAKE_EXPONENT,
    SHAKE_PROBABILITY_DIVISOR, SHAKE_RANDOM_BOUND,
};
use super::CaptureInputs;

/// Power as the host computes it: widened to f64, narrowed back to f32
pub fn host_pow(base: f32, exponent: f32) -> f32 {
    (base as f64).powf(exponent as f64) as f32
}

/// Modified catch rate (before conversion to a shake value)
///
/// `((3*max - 2*current) * base * battle_mod * device) / (3*max)`, then
/// scaled by status, level bonus and level penalty.
pub fn modified_catch_rate(inputs: &CaptureInputs) -> f32 {
    let battle_modifier = if inputs.in_battle {
        1.0
    } else {
        OUT_OF_BATTLE_MODIFIER
    };
    let max_hp = if inputs.max_hp > 0.0 { inputs.max_hp } else { 1.0 };

    let hp_component = (3.0 * max_hp - 2.0 * inputs.current_hp) * inputs.base_rate * battle_modifier;
    let mut modified = (hp_component * inputs.device_multiplier) / (3.0 * max_hp);
    modified *= inputs.status_multiplier * inputs.level_bonus * inputs.level_penalty;
    modified
}

/// Unrounded shake probability: `65536 / (255 / rate)^0.1875`
///
/// Non-positive (or NaN) rates yield 0.
pub fn shake_probability(modified_rate: f32) -> f32 {
    if modified_rate.is_nan() || modified_rate <= 0.0 {
        return 0.0;
    }
    SHAKE_PROBABILITY_DIVISOR / host_pow(MAX_CATCH_RATE / modified_rate, SHAKE_EXPONENT)
}

/// Shake value rounded to the nearest integer, as the host does before drawing
pub fn rounded_shake(modified_rate: f32) -> u32 {
    shake_probability(modified_rate).round() as u32
}

/// Whether every shake draw is bound to succeed
pub fn is_guaranteed_by_formula(modified_rate: f32) -> bool {
    rounded_shake(modified_rate) >= SHAKE_RANDOM_BOUND
}

/// Capture chance in percent for a modified rate
pub fn modified_rate_to_percentage(modified_rate: f32) -> f32 {
    let shake = rounded_shake(modified_rate);
    if shake >= SHAKE_RANDOM_BOUND {
        return 100.0;
    }
    let per_shake = shake as f32 / SHAKE_RANDOM_BOUND as f32;
    (host_pow(per_shake, SHAKE_CHECKS as f32) * 100.0).clamp(0.0, 100.0)
}

/// Capture chance in percent for a full set of inputs
pub fn catch_percentage(inputs: &CaptureInputs) -> f32 {
    modified_rate_to_percentage(modified_catch_rate(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modified_rate_full_hp() {
        // (300 - 200) * 45 * 1 = 4500; 4500 * 1 / 300 = 15
        let inputs = CaptureInputs::default();
        assert!((modified_catch_rate(&inputs) - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_modified_rate_out_of_battle_halves() {
        let inputs = CaptureInputs {
            in_battle: false,
            ..CaptureInputs::default()
        };
        assert!((modified_catch_rate(&inputs) - 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_modified_rate_low_hp() {
        // 1 HP left of 100: (300 - 2) * 45 / 300 = 44.7
        let inputs = CaptureInputs {
            current_hp: 1.0,
            ..CaptureInputs::default()
        };
        assert!((modified_catch_rate(&inputs) - 44.7).abs() < 1e-3);
    }

    #[test]
    fn test_zero_max_hp_does_not_divide_by_zero() {
        let inputs = CaptureInputs {
            max_hp: 0.0,
            current_hp: 0.0,
            ..CaptureInputs::default()
        };
        assert!(modified_catch_rate(&inputs).is_finite());
    }

    #[test]
    fn test_shake_probability_non_positive() {
        assert_eq!(shake_probability(0.0), 0.0);
        assert_eq!(shake_probability(-3.0), 0.0);
        assert_eq!(shake_probability(f32::NAN), 0.0);
        assert!((modified_rate_to_percentage(0.0) - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_max_rate_is_not_guaranteed() {
        // 65536 / 1^0.1875 = 65536, one short of the draw bound
        assert_eq!(rounded_shake(255.0), 65536);
        assert!(!is_guaranteed_by_formula(255.0));

        let expected = (65536.0f64 / 65537.0).powi(4) * 100.0;
        let chance = modified_rate_to_percentage(255.0);
        assert!(chance < 100.0);
        assert!((chance as f64 - expected).abs() < 1e-3);
        assert!((chance - 99.994).abs() < 1e-3);
    }

    #[test]
    fn test_rate_above_max_is_guaranteed() {
        assert!(is_guaranteed_by_formula(256.0));
        assert!((modified_rate_to_percentage(256.0) - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_guarantee_threshold_uses_rounded_shake() {
        // 65536.48 rounds down, 65536.97 rounds up to the bound
        assert!(!is_guaranteed_by_formula(255.01));
        assert!(is_guaranteed_by_formula(255.02));
    }

    #[test]
    fn test_reference_chance() {
        // rate 15: 65536 / 17^0.1875 = 38527.49 in host floats
        assert_eq!(rounded_shake(15.0), 38_527);

        let chance = catch_percentage(&CaptureInputs::default());
        assert!((chance - 11.943).abs() < 1e-2, "chance was {chance}");
    }

    #[test]
    fn test_higher_rate_is_better() {
        assert!(modified_rate_to_percentage(60.0) > modified_rate_to_percentage(30.0));
    }
}
