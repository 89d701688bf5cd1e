// src/config/mod.rs
//! User configuration, read from `~/.config/dumpview/config.toml`.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::tag::TagType;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host directory backing the virtual dump folder.
    pub dump_root: PathBuf,
    /// Tag type selected at startup.
    pub tag_type: TagType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dump_root: PathBuf::from("dumps"),
            tag_type: TagType::Mifare1k,
        }
    }
}

fn config_file() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("dumpview")
            .join("config.toml"),
    )
}

impl Config {
    /// Load configuration from file, falling back to defaults on any
    /// failure so a broken config never prevents startup.
    pub fn load() -> Self {
        let Some(path) = config_file() else {
            eprintln!("Warning: could not determine config directory");
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match toml_edit::de::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: could not parse {}: {}", path.display(), e);
                    Config::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: could not read {}: {}", path.display(), e);
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dump_root, PathBuf::from("dumps"));
        assert_eq!(config.tag_type, TagType::Mifare1k);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml_edit::de::from_str(
            r#"
            dump_root = "/data/cards"
            tag_type = "ntag-215"
            "#,
        )
        .unwrap();
        assert_eq!(config.dump_root, PathBuf::from("/data/cards"));
        assert_eq!(config.tag_type, TagType::Ntag215);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml_edit::de::from_str("tag_type = \"mifare-4k\"").unwrap();
        assert_eq!(config.dump_root, PathBuf::from("dumps"));
        assert_eq!(config.tag_type, TagType::Mifare4k);
    }
}
