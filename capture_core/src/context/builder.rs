//! CaptureContextBuilder - Assembles a CaptureContext from host state
//!
//! The builder is the validation boundary of the engine: every malformed
//! value coming from the host is replaced with a safe default here, so the
//! rule engine and the formula never see out-of-range input.

use super::environment::{clamp_light_level, is_night, normalize_moon_phase, MAX_LIGHT_LEVEL};
use super::{normalize_species_id, AllySummary, BattleState, CaptureContext, EnvironmentState, HpReading};
use crate::species::PLACEHOLDER_CATCH_RATE;
use crate::types::{Gender, StatusCondition};
use std::collections::BTreeSet;

/// Builder for [`CaptureContext`]
#[derive(Debug, Clone)]
pub struct CaptureContextBuilder {
    species_id: String,
    level: i32,
    gender: Gender,
    primary_type: String,
    secondary_type: Option<String>,
    weight: u32,
    base_speed: u32,
    labels: BTreeSet<String>,
    aspects: BTreeSet<String>,
    status: Option<StatusCondition>,
    base_rate: i32,
    hp: HpReading,
    light_level: i32,
    is_night: bool,
    moon_phase: i32,
    is_submerged: bool,
    in_battle: bool,
    turn: i32,
    ally: Option<AllySummary>,
    has_caught_species: Option<bool>,
}

impl CaptureContextBuilder {
    fn new(species_id: &str, level: i32, in_battle: bool, turn: i32) -> Self {
        CaptureContextBuilder {
            species_id: normalize_species_id(species_id),
            level,
            gender: Gender::Unknown,
            primary_type: "normal".to_string(),
            secondary_type: None,
            weight: 0,
            base_speed: 0,
            labels: BTreeSet::new(),
            aspects: BTreeSet::new(),
            status: None,
            base_rate: PLACEHOLDER_CATCH_RATE as i32,
            hp: HpReading::default(),
            light_level: MAX_LIGHT_LEVEL as i32,
            is_night: false,
            moon_phase: 0,
            is_submerged: false,
            in_battle,
            turn,
            ally: None,
            has_caught_species: None,
        }
    }

    /// Start a context for a creature met in battle on the given turn
    pub fn battle(species_id: &str, level: i32, turn: i32) -> Self {
        Self::new(species_id, level, true, turn)
    }

    /// Start a context for a creature roaming the world (no battle)
    pub fn free_roam(species_id: &str, level: i32) -> Self {
        Self::new(species_id, level, false, 0)
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn types(mut self, primary: &str, secondary: Option<&str>) -> Self {
        self.primary_type = primary.trim().to_ascii_lowercase();
        self.secondary_type = secondary
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty());
        self
    }

    /// Weight in tenths of a kilogram (the host's native unit)
    pub fn weight(mut self, tenths_of_kg: u32) -> Self {
        self.weight = tenths_of_kg;
        self
    }

    /// Weight in kilograms, converted to tenths
    pub fn weight_kg(mut self, kg: f32) -> Self {
        self.weight = (kg.max(0.0) * 10.0).round() as u32;
        self
    }

    pub fn base_speed(mut self, speed: u32) -> Self {
        self.base_speed = speed;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.labels.insert(label.trim().to_ascii_lowercase());
        self
    }

    pub fn labels<'a>(mut self, labels: impl IntoIterator<Item = &'a str>) -> Self {
        for label in labels {
            self = self.label(label);
        }
        self
    }

    pub fn aspect(mut self, aspect: &str) -> Self {
        self.aspects.insert(aspect.trim().to_ascii_lowercase());
        self
    }

    pub fn aspects<'a>(mut self, aspects: impl IntoIterator<Item = &'a str>) -> Self {
        for aspect in aspects {
            self = self.aspect(aspect);
        }
        self
    }

    /// Status identifier as reported by the host (e.g. "sleep")
    pub fn status(mut self, status: Option<&str>) -> Self {
        self.status = status.and_then(StatusCondition::from_id);
        self
    }

    pub fn status_condition(mut self, status: StatusCondition) -> Self {
        self.status = Some(status);
        self
    }

    /// Species base catch rate; clamped to 1-255 on build
    pub fn base_rate(mut self, rate: i32) -> Self {
        self.base_rate = rate;
        self
    }

    pub fn hp(mut self, reading: HpReading) -> Self {
        self.hp = reading;
        self
    }

    pub fn light_level(mut self, level: i32) -> Self {
        self.light_level = level;
        self
    }

    pub fn night(mut self, is_night: bool) -> Self {
        self.is_night = is_night;
        self
    }

    /// Derive the night flag from the world's day-time tick counter
    pub fn day_time(mut self, ticks: i64) -> Self {
        self.is_night = is_night(ticks);
        self
    }

    pub fn moon_phase(mut self, phase: i32) -> Self {
        self.moon_phase = phase;
        self
    }

    pub fn submerged(mut self, submerged: bool) -> Self {
        self.is_submerged = submerged;
        self
    }

    pub fn ally(mut self, ally: AllySummary) -> Self {
        self.ally = Some(ally);
        self
    }

    /// Authoritative "already caught this species" flag, `None` if not yet known
    pub fn has_caught_species(mut self, caught: Option<bool>) -> Self {
        self.has_caught_species = caught;
        self
    }

    /// Validate and freeze the context
    pub fn build(self) -> CaptureContext {
        let level = if self.level > 0 {
            self.level as u32
        } else {
            log::debug!(
                "{}: level {} out of range, using 1",
                self.species_id,
                self.level
            );
            1
        };

        let base_rate = self.base_rate.clamp(1, 255) as u8;

        let mut hp = self.hp.normalize();
        hp.current = hp.current.clamp(0.0, hp.max);

        let turn = if self.in_battle {
            self.turn.max(1) as u32
        } else {
            self.turn.max(0) as u32
        };

        CaptureContext {
            species_id: self.species_id,
            level,
            gender: self.gender,
            primary_type: self.primary_type,
            secondary_type: self.secondary_type,
            weight: self.weight,
            base_speed: self.base_speed,
            labels: self.labels,
            aspects: self.aspects,
            status: self.status,
            base_rate,
            hp,
            environment: EnvironmentState {
                light_level: clamp_light_level(self.light_level),
                is_night: self.is_night,
                moon_phase: normalize_moon_phase(self.moon_phase),
                is_submerged: self.is_submerged,
            },
            battle: BattleState {
                in_battle: self.in_battle,
                turn,
                ally: self.ally,
            },
            has_caught_species: self.has_caught_species,
        }
    }
}
