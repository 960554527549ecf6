//! Species base catch rates
//!
//! The host's synced species registry reports a placeholder rate for every
//! species it failed to sync. Any other registry value is trusted; the
//! placeholder is replaced by a locally known rate when one exists.

use crate::config::{ConfigError, SpeciesConfig};
use crate::context::normalize_species_id;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Rate the host registry reports for unsynced species
pub const PLACEHOLDER_CATCH_RATE: u8 = 45;

/// Subset of a species data file
#[derive(Debug, Deserialize)]
struct SpeciesData {
    #[serde(rename = "catchRate")]
    catch_rate: Option<i64>,
}

/// Local catch rate table keyed by normalized species id
#[derive(Debug, Clone)]
pub struct SpeciesCatchRates {
    placeholder: u8,
    rates: HashMap<String, u8>,
}

impl Default for SpeciesCatchRates {
    fn default() -> Self {
        SpeciesCatchRates {
            placeholder: PLACEHOLDER_CATCH_RATE,
            rates: HashMap::new(),
        }
    }
}

impl SpeciesCatchRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SpeciesConfig) -> Self {
        let mut table = SpeciesCatchRates {
            placeholder: config.default_rate,
            rates: HashMap::new(),
        };
        for (species, rate) in &config.overrides {
            table.insert(species, i64::from(*rate));
        }
        table
    }

    /// Record a local rate, clamped to 1-255
    pub fn insert(&mut self, species_id: &str, rate: i64) {
        self.rates
            .insert(normalize_species_id(species_id), rate.clamp(1, 255) as u8);
    }

    pub fn get(&self, species_id: &str) -> Option<u8> {
        self.rates.get(&normalize_species_id(species_id)).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Effective base rate for a species given what the registry reported
    pub fn resolve(&self, species_id: &str, registry_rate: i32) -> u8 {
        let registry = registry_rate.clamp(1, 255) as u8;
        if registry_rate != i32::from(self.placeholder) {
            return registry;
        }
        match self.get(species_id) {
            Some(local) => {
                if local != registry {
                    log::debug!(
                        "{}: registry rate {} replaced by local rate {}",
                        species_id,
                        registry_rate,
                        local
                    );
                }
                local
            }
            None => registry,
        }
    }

    /// Load every data pack of a game directory
    ///
    /// Scans `datapacks/` first and then `saves/<world>/datapacks/` for each
    /// world, so per-world packs override global ones. Returns the number of
    /// rates read.
    pub fn scan_game_dir(&mut self, game_dir: &Path) -> Result<usize, ConfigError> {
        let mut loaded = self.scan_datapack_dir(&game_dir.join("datapacks"))?;

        let saves = game_dir.join("saves");
        if saves.is_dir() {
            for world in fs::read_dir(&saves)? {
                let world = world?.path();
                if world.is_dir() {
                    loaded += self.scan_datapack_dir(&world.join("datapacks"))?;
                }
            }
        }
        Ok(loaded)
    }

    /// Load every unpacked data pack in a `datapacks` directory
    ///
    /// Only folder packs are read; zipped packs are skipped with a debug record.
    pub fn scan_datapack_dir(&mut self, dir: &Path) -> Result<usize, ConfigError> {
        if !dir.is_dir() {
            return Ok(0);
        }

        let mut packs: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .collect();
        packs.sort();

        let mut loaded = 0;
        for pack in packs {
            if pack.is_dir() {
                loaded += self.scan_species_dir(&pack)?;
            } else if pack.extension().and_then(|ext| ext.to_str()) == Some("zip") {
                log::debug!("skipping zipped data pack {}", pack.display());
            }
        }
        Ok(loaded)
    }

    /// Load every species file of one data pack, `root/data/<namespace>/species/`
    ///
    /// Returns the number of rates read. Unreadable or malformed files are
    /// skipped.
    pub fn scan_species_dir(&mut self, root: &Path) -> Result<usize, ConfigError> {
        let data_dir = root.join("data");
        if !data_dir.is_dir() {
            return Ok(0);
        }

        let mut loaded = 0;
        for namespace in fs::read_dir(&data_dir)? {
            let species_dir = namespace?.path().join("species");
            if species_dir.is_dir() {
                loaded += self.scan_tree(&species_dir);
            }
        }

        if loaded > 0 {
            log::info!("loaded {} catch rate(s) from {}", loaded, root.display());
        }
        Ok(loaded)
    }

    fn scan_tree(&mut self, dir: &Path) -> usize {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("skipping {}: {}", dir.display(), err);
                return 0;
            }
        };

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                loaded += self.scan_tree(&path);
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match read_catch_rate(&path) {
                Ok(Some(rate)) => {
                    self.insert(name, rate);
                    loaded += 1;
                }
                Ok(None) => {}
                Err(err) => log::warn!("skipping species file {}: {}", path.display(), err),
            }
        }
        loaded
    }
}

fn read_catch_rate(path: &Path) -> Result<Option<i64>, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_species_json(&content)
}

/// Extract the `catchRate` field from a species data document
pub fn parse_species_json(content: &str) -> Result<Option<i64>, ConfigError> {
    let data: SpeciesData = serde_json::from_str(content)?;
    Ok(data.catch_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_registry_value_is_trusted() {
        let mut table = SpeciesCatchRates::new();
        table.insert("mewtwo", 3);
        assert_eq!(table.resolve("mewtwo", 190), 190);
    }

    #[test]
    fn test_placeholder_uses_local_rate() {
        let mut table = SpeciesCatchRates::new();
        table.insert("cobblemon:Mewtwo", 3);
        assert_eq!(table.resolve("mewtwo", 45), 3);
        assert_eq!(table.resolve("pikachu", 45), 45);
    }

    #[test]
    fn test_rates_are_clamped() {
        let mut table = SpeciesCatchRates::new();
        table.insert("weird", 999);
        table.insert("broken", -5);
        assert_eq!(table.get("weird"), Some(255));
        assert_eq!(table.get("broken"), Some(1));
        assert_eq!(table.resolve("anything", 0), 1);
    }

    #[test]
    fn test_from_config() {
        let mut config = SpeciesConfig::default();
        config.overrides.insert("Articuno".to_string(), 3);
        let table = SpeciesCatchRates::from_config(&config);
        assert_eq!(table.resolve("articuno", 45), 3);
    }

    #[test]
    fn test_parse_species_json() {
        let rate = parse_species_json(r#"{"name": "Bulbasaur", "catchRate": 45}"#).unwrap();
        assert_eq!(rate, Some(45));
        assert_eq!(parse_species_json(r#"{"name": "Missing"}"#).unwrap(), None);
        assert!(matches!(parse_species_json("not json"), Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_scan_species_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "data/cobblemon/species/generation1/mewtwo.json", r#"{"catchRate": 3}"#);
        write(root, "data/addon/species/custom/fakemon.json", r#"{"catchRate": 120}"#);
        write(root, "data/cobblemon/species/generation1/broken.json", "{ nope");
        write(root, "data/cobblemon/species/generation1/readme.txt", "ignored");
        write(root, "data/cobblemon/loot/mewtwo.json", r#"{"catchRate": 200}"#);

        let mut table = SpeciesCatchRates::new();
        let loaded = table.scan_species_dir(root).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(table.get("mewtwo"), Some(3));
        assert_eq!(table.get("fakemon"), Some(120));
        assert_eq!(table.get("broken"), None);
    }

    #[test]
    fn test_scan_without_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let mut table = SpeciesCatchRates::new();
        assert_eq!(table.scan_species_dir(temp_dir.path()).unwrap(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_scan_game_dir_walks_every_pack() {
        let temp_dir = TempDir::new().unwrap();
        let game = temp_dir.path();
        write(game, "datapacks/legends/data/cobblemon/species/generation1/mewtwo.json", r#"{"catchRate": 3}"#);
        write(game, "datapacks/addons/data/addon/species/fakemon.json", r#"{"catchRate": 120}"#);
        write(game, "datapacks/zipped.zip", "not a real archive");
        write(
            game,
            "saves/world1/datapacks/event/data/cobblemon/species/generation1/mewtwo.json",
            r#"{"catchRate": 10}"#,
        );

        let mut table = SpeciesCatchRates::new();
        let loaded = table.scan_game_dir(game).unwrap();

        assert_eq!(loaded, 3);
        assert_eq!(table.get("fakemon"), Some(120));
        // World packs are read after the global ones
        assert_eq!(table.get("mewtwo"), Some(10));
    }

    #[test]
    fn test_scan_game_dir_without_packs() {
        let temp_dir = TempDir::new().unwrap();
        let mut table = SpeciesCatchRates::new();
        assert_eq!(table.scan_game_dir(temp_dir.path()).unwrap(), 0);
    }
}
