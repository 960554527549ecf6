//! CaptureContext - Normalized snapshot of everything a capture rule can read
//!
//! A context is built once per evaluation (see [`CaptureContextBuilder`]) and
//! never mutated afterwards. Each refresh of the host state builds a new one.

mod builder;
pub mod environment;
mod hp;

pub use builder::CaptureContextBuilder;
pub use environment::is_night;
pub use hp::{HpInfo, HpReading};

use crate::types::{Gender, StatusCondition};
use serde::Serialize;
use std::collections::BTreeSet;

/// Summary of the capturing side's active creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllySummary {
    pub species_id: String,
    pub gender: Gender,
    /// 0 when the host could not report a level
    pub level: u32,
}

impl AllySummary {
    pub fn new(species_id: impl Into<String>, gender: Gender, level: u32) -> Self {
        AllySummary {
            species_id: normalize_species_id(&species_id.into()),
            gender,
            level,
        }
    }
}

/// World state around the encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EnvironmentState {
    /// Local light level, 0-15
    pub light_level: u8,
    pub is_night: bool,
    /// Moon phase index, 0-7 (0 = full moon)
    pub moon_phase: u8,
    /// Whether the capturer is underwater
    pub is_submerged: bool,
}

/// Battle state at the moment of the throw
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BattleState {
    pub in_battle: bool,
    /// 1-based turn counter while in battle, 0 outside battle
    pub turn: u32,
    pub ally: Option<AllySummary>,
}

/// Immutable input to the rule engine and the capture formula
#[derive(Debug, Clone, Serialize)]
pub struct CaptureContext {
    // === Identity ===
    pub(crate) species_id: String,
    pub(crate) level: u32,
    pub(crate) gender: Gender,

    // === Typing ===
    pub(crate) primary_type: String,
    pub(crate) secondary_type: Option<String>,

    // === Physical ===
    /// Weight in tenths of a kilogram
    pub(crate) weight: u32,
    pub(crate) base_speed: u32,

    // === Tags ===
    pub(crate) labels: BTreeSet<String>,
    /// Ephemeral aspects such as "fished"
    pub(crate) aspects: BTreeSet<String>,
    pub(crate) status: Option<StatusCondition>,

    // === Capture inputs ===
    /// Species base catch rate, 1-255
    pub(crate) base_rate: u8,
    pub(crate) hp: HpInfo,

    // === Surroundings ===
    pub(crate) environment: EnvironmentState,
    pub(crate) battle: BattleState,

    // === Authoritative overrides ===
    /// `None` until the host's authoritative data has arrived
    pub(crate) has_caught_species: Option<bool>,
}

impl CaptureContext {
    pub fn species_id(&self) -> &str {
        &self.species_id
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn primary_type(&self) -> &str {
        &self.primary_type
    }

    pub fn secondary_type(&self) -> Option<&str> {
        self.secondary_type.as_deref()
    }

    /// Iterate over the creature's types (primary first)
    pub fn types(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_type.as_str()).chain(self.secondary_type.as_deref())
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn base_speed(&self) -> u32 {
        self.base_speed
    }

    pub fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.eq_ignore_ascii_case(label))
    }

    pub fn aspects(&self) -> &BTreeSet<String> {
        &self.aspects
    }

    pub fn has_aspect(&self, aspect: &str) -> bool {
        self.aspects.iter().any(|a| a.eq_ignore_ascii_case(aspect))
    }

    pub fn status(&self) -> Option<&StatusCondition> {
        self.status.as_ref()
    }

    pub fn base_rate(&self) -> u8 {
        self.base_rate
    }

    pub fn hp(&self) -> &HpInfo {
        &self.hp
    }

    pub fn environment(&self) -> &EnvironmentState {
        &self.environment
    }

    pub fn battle(&self) -> &BattleState {
        &self.battle
    }

    pub fn in_battle(&self) -> bool {
        self.battle.in_battle
    }

    pub fn turn(&self) -> u32 {
        self.battle.turn
    }

    pub fn ally(&self) -> Option<&AllySummary> {
        self.battle.ally.as_ref()
    }

    pub fn has_caught_species(&self) -> Option<bool> {
        self.has_caught_species
    }
}

/// Lowercase a species id and drop any `namespace:` prefix
pub(crate) fn normalize_species_id(id: &str) -> String {
    let trimmed = id.trim();
    let name = trimmed.rsplit_once(':').map_or(trimmed, |(_, name)| name);
    name.to_ascii_lowercase()
}
