//! Environment helpers - day/night cycle, light and moon phase normalization

/// Length of a full day in host ticks
pub const DAY_LENGTH_TICKS: i64 = 24_000;

/// First tick of the night half of the day
pub const NIGHT_START_TICK: i64 = 12_000;

/// Brightest possible light level
pub const MAX_LIGHT_LEVEL: u8 = 15;

/// Number of moon phases in a lunar cycle
pub const MOON_PHASES: u8 = 8;

/// Whether a day-time tick count falls in the night half of the day
pub fn is_night(day_time: i64) -> bool {
    day_time.rem_euclid(DAY_LENGTH_TICKS) >= NIGHT_START_TICK
}

/// Clamp a raw light reading into [0, 15]
pub fn clamp_light_level(level: i32) -> u8 {
    level.clamp(0, MAX_LIGHT_LEVEL as i32) as u8
}

/// Reduce a raw moon phase into [0, 7]
pub fn normalize_moon_phase(phase: i32) -> u8 {
    phase.rem_euclid(MOON_PHASES as i32) as u8
}
