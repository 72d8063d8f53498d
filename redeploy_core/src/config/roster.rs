//! Character roster loading

use super::ConfigError;
use crate::redeploy::CheckpointTable;
use crate::types::Character;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Characters available for selection, plus their redeploy checkpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(rename = "characters")]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub checkpoints: CheckpointTable,
}

impl Roster {
    /// Look up a character by exact name
    pub fn find(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.characters.is_empty() {
            return Err(ConfigError::ValidationError(
                "roster has no characters".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for character in &self.characters {
            character.validate().map_err(|err| {
                ConfigError::ValidationError(format!("{}: {}", character.name, err))
            })?;
            if !seen.insert(character.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate character name: {}",
                    character.name
                )));
            }
        }
        Ok(())
    }
}

/// Load a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let roster: Roster = super::load_toml(path)?;
    roster.validate()?;
    Ok(roster)
}

/// Load a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<Roster, ConfigError> {
    let roster: Roster = super::parse_toml(content)?;
    roster.validate()?;
    Ok(roster)
}

/// Get the bundled roster
pub fn default_roster() -> Roster {
    let toml = include_str!("../../config/roster.toml");
    parse_roster(toml).unwrap_or_else(|err| {
        log::warn!("bundled roster rejected: {}", err);
        Roster {
            characters: Vec::new(),
            checkpoints: CheckpointTable::default(),
        }
    })
}
