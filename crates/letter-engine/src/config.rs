//! Sender identity and bureau address book

use serde::{Deserialize, Serialize};

/// Sender identity placed in every letter's header and signature
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    pub address: String,
}

/// A credit bureau with its mailing address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bureau {
    pub name: String,
    pub address: String,
}

/// Letter generation configuration
///
/// An empty bureau list selects simple mode: one copy per logical
/// letter with no bureau header. A populated list fans each logical
/// letter out once per bureau.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LetterConfig {
    pub sender: Sender,
    #[serde(default)]
    pub bureaus: Vec<Bureau>,
}

impl LetterConfig {
    /// Whether letters are fanned out per bureau
    pub fn fan_out(&self) -> bool {
        !self.bureaus.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_parses_from_toml() {
        let raw = r#"
            [sender]
            name = "Jane Consumer"
            address = "1 Main St, Springfield, IL 62701"

            [[bureaus]]
            name = "Equifax"
            address = "P.O. Box 740256, Atlanta, GA 30374"

            [[bureaus]]
            name = "TransUnion"
            address = "P.O. Box 2000, Chester, PA 19016"
        "#;

        let config: LetterConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.sender.name, "Jane Consumer");
        assert_eq!(config.bureaus.len(), 2);
        assert_eq!(config.bureaus[1].name, "TransUnion");
        assert!(config.fan_out());
    }

    #[test]
    fn test_missing_bureaus_defaults_to_simple_mode() {
        let raw = r#"
            [sender]
            name = "Jane Consumer"
            address = "1 Main St"
        "#;

        let config: LetterConfig = toml::from_str(raw).unwrap();
        assert!(config.bureaus.is_empty());
        assert!(!config.fan_out());
    }
}
