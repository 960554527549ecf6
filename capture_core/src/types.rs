//! Core types shared by the capture engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a creature or of the active ally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Genderless,
    /// The host did not report a gender (or reported one we could not parse)
    #[default]
    Unknown,
}

impl Gender {
    /// Parse a host gender name, case-insensitive. Anything unrecognized is `Unknown`.
    pub fn parse(name: &str) -> Gender {
        match name.trim().to_ascii_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            "genderless" => Gender::Genderless,
            _ => Gender::Unknown,
        }
    }

    /// Whether this is a real, non-neutral gender (male or female)
    pub fn is_defined(self) -> bool {
        matches!(self, Gender::Male | Gender::Female)
    }

    /// Whether `self` and `other` are a male/female pair
    pub fn is_opposite_of(self, other: Gender) -> bool {
        matches!(
            (self, other),
            (Gender::Male, Gender::Female) | (Gender::Female, Gender::Male)
        )
    }

    /// Short symbol used in reason text
    pub fn symbol(self) -> &'static str {
        match self {
            Gender::Male => "♂",
            Gender::Female => "♀",
            Gender::Genderless | Gender::Unknown => "",
        }
    }
}

/// Status condition afflicting the target creature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCondition {
    Sleep,
    Frozen,
    Paralysis,
    Burn,
    Poison,
    BadlyPoisoned,
    /// Any status the capture formula does not know about
    Other(String),
}

impl StatusCondition {
    /// Parse a host status identifier (e.g. "sleep", "poisonbadly"), case-insensitive.
    ///
    /// Returns `None` for an empty identifier.
    pub fn from_id(id: &str) -> Option<StatusCondition> {
        let lower = id.trim().to_ascii_lowercase();
        let status = match lower.as_str() {
            "" => return None,
            "sleep" => StatusCondition::Sleep,
            "frozen" => StatusCondition::Frozen,
            "paralysis" => StatusCondition::Paralysis,
            "burn" => StatusCondition::Burn,
            "poison" => StatusCondition::Poison,
            "poisonbadly" => StatusCondition::BadlyPoisoned,
            _ => StatusCondition::Other(lower),
        };
        Some(status)
    }

    /// The host identifier for this status
    pub fn id(&self) -> &str {
        match self {
            StatusCondition::Sleep => "sleep",
            StatusCondition::Frozen => "frozen",
            StatusCondition::Paralysis => "paralysis",
            StatusCondition::Burn => "burn",
            StatusCondition::Poison => "poison",
            StatusCondition::BadlyPoisoned => "poisonbadly",
            StatusCondition::Other(id) => id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            StatusCondition::Sleep => "Asleep",
            StatusCondition::Frozen => "Frozen",
            StatusCondition::Paralysis => "Paralyzed",
            StatusCondition::Burn => "Burned",
            StatusCondition::Poison => "Poisoned",
            StatusCondition::BadlyPoisoned => "Badly Poisoned",
            StatusCondition::Other(_) => "None",
        }
    }

    /// Localization key consumed by the host's translation layer
    pub fn translation_key(&self) -> &'static str {
        match self {
            StatusCondition::Sleep => "catchrate.status.asleep",
            StatusCondition::Frozen => "catchrate.status.frozen",
            StatusCondition::Paralysis => "catchrate.status.paralyzed",
            StatusCondition::Burn => "catchrate.status.burned",
            StatusCondition::Poison => "catchrate.status.poisoned",
            StatusCondition::BadlyPoisoned => "catchrate.status.badly_poisoned",
            StatusCondition::Other(_) => "catchrate.status.none",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatusCondition::Sleep => "💤",
            StatusCondition::Frozen => "❄",
            StatusCondition::Paralysis => "⚡",
            StatusCondition::Burn => "🔥",
            StatusCondition::Poison | StatusCondition::BadlyPoisoned => "☠",
            StatusCondition::Other(_) => "●",
        }
    }
}

impl fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
