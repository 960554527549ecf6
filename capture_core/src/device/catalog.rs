//! DeviceCatalog - Resolves device ids to their classification
//!
//! Resolution is a pure function of the id and the catalog's static tables.
//! The memo cache in front of it only saves repeated string matching; losing
//! an insert to a concurrent writer is harmless because both writers computed
//! the same class.

use super::{normalize_device_id, AncientTier, DeviceClass, DeviceKind};
use crate::config::EngineConfig;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// Devices that always capture regardless of configuration
const BUILTIN_GUARANTEED: [&str; 1] = ["ancient_origin_ball"];

/// Built-in rule for a normalized device id
pub fn builtin_kind(id: &str) -> Option<DeviceKind> {
    let kind = match id {
        "quick_ball" => DeviceKind::FirstTurn,
        "timer_ball" => DeviceKind::TurnScaling,
        "ultra_ball" => DeviceKind::Fixed { multiplier: 2.0 },
        "great_ball" | "sport_ball" => DeviceKind::Fixed { multiplier: 1.5 },
        "poke_ball" | "premier_ball" => DeviceKind::Fixed { multiplier: 1.0 },
        "safari_ball" => DeviceKind::OutOfBattle { multiplier: 1.5 },
        "dusk_ball" => DeviceKind::Darkness,
        "dive_ball" => DeviceKind::Submersion,
        "moon_ball" => DeviceKind::MoonPhase,
        "net_ball" => DeviceKind::BugOrWaterType,
        "nest_ball" => DeviceKind::LowLevel,
        "fast_ball" => DeviceKind::HighSpeed,
        "heavy_ball" => DeviceKind::Weight,
        "beast_ball" => DeviceKind::UltraBeast,
        "dream_ball" => DeviceKind::Sleeping,
        "love_ball" => DeviceKind::Affinity,
        "level_ball" => DeviceKind::RelativeLevel,
        "repeat_ball" => DeviceKind::PreviouslyCaught,
        "lure_ball" => DeviceKind::Fished,
        "friend_ball" | "luxury_ball" | "heal_ball" => DeviceKind::NoBonus,
        _ => return None,
    };
    Some(kind)
}

/// Device classification table with a shared memo cache
#[derive(Debug, Default)]
pub struct DeviceCatalog {
    guaranteed: HashSet<String>,
    custom: HashMap<String, DeviceKind>,
    cache: RwLock<HashMap<String, DeviceClass>>,
}

impl DeviceCatalog {
    /// Catalog with only the built-in devices
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in devices with the default configuration
    pub fn with_defaults() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Build a catalog from the engine configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut catalog = Self::new();
        for id in &config.guaranteed_devices {
            catalog = catalog.with_guaranteed(id);
        }
        for device in &config.custom_devices {
            catalog = catalog.with_custom(
                &device.id,
                DeviceKind::Custom {
                    multiplier: device.multiplier,
                    reason: device.reason.clone(),
                },
            );
        }
        catalog
    }

    /// Register an extra always-capture device
    pub fn with_guaranteed(mut self, id: &str) -> Self {
        self.guaranteed.insert(normalize_device_id(id));
        self
    }

    /// Register (or override) a device rule
    pub fn with_custom(mut self, id: &str, kind: DeviceKind) -> Self {
        self.custom.insert(normalize_device_id(id), kind);
        self
    }

    /// Classify a device id (case-insensitive, namespace optional)
    pub fn resolve(&self, id: &str) -> DeviceClass {
        let key = normalize_device_id(id);

        if let Ok(cache) = self.cache.read() {
            if let Some(class) = cache.get(&key) {
                log::trace!("device cache hit: {}", key);
                return class.clone();
            }
        }

        let class = self.classify(&key);
        log::trace!("device cache miss: {} -> {:?}", key, class);

        // A poisoned lock only costs the memo; the computed class is still valid
        if let Ok(mut cache) = self.cache.write() {
            cache.entry(key).or_insert_with(|| class.clone());
        }
        class
    }

    /// Number of memoized ids
    pub fn cached_len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    fn classify(&self, key: &str) -> DeviceClass {
        if key.contains("master")
            || BUILTIN_GUARANTEED.contains(&key)
            || self.guaranteed.contains(key)
        {
            return DeviceClass::Guaranteed;
        }
        if key.starts_with("ancient_") {
            return DeviceClass::Ancient {
                tier: AncientTier::from_id(key),
            };
        }
        if let Some(kind) = self.custom.get(key) {
            return DeviceClass::Standard { kind: kind.clone() };
        }
        match builtin_kind(key) {
            Some(kind) => DeviceClass::Standard { kind },
            None => DeviceClass::Unrecognized,
        }
    }
}
