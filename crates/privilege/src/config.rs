//! Registry configuration loaded from TOML.
//!
//! ```toml
//! # Relations of the global context.
//! [relations]
//! banned = "bad_relation"
//! friend = "low_familiar"
//!
//! # Relations of the `group` context.
//! [contexts.group]
//! same_group = "low_familiar"
//! group_admin = 8
//! ```

use crate::{Context, Error, Privilege, Registry, Relation, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Relations to register on top of the default vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Relations of the global context.
    #[serde(default)]
    pub relations: BTreeMap<Relation, Privilege>,

    /// Relations of named contexts, keyed by context name.
    #[serde(default)]
    pub contexts: BTreeMap<String, BTreeMap<Relation, Privilege>>,
}

impl RegistryConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|e| Error::Parse(e.to_string()))
    }
}

impl Registry {
    /// Build a registry from configuration.
    pub fn from_config(config: RegistryConfig) -> Self {
        let mut registry = Self::new();
        for (relation, privilege) in config.relations {
            registry.register_in(Context::GLOBAL_NAME, relation, privilege);
        }
        for (context, relations) in config.contexts {
            for (relation, privilege) in relations {
                registry.register_in(&context, relation, privilege);
            }
        }
        registry
    }

    /// Load a registry from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        RegistryConfig::load(path).map(Self::from_config)
    }

    /// Parse a registry from a TOML string.
    pub fn parse(toml: &str) -> Result<Self> {
        RegistryConfig::parse(toml).map(Self::from_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[relations]
banned = "bad_relation"
Friend = "low_familiar"

[contexts.group]
same_group = "low_familiar"
group_admin = 8
"#;
        let registry = Registry::parse(toml).unwrap();

        assert_eq!(
            registry.resolve(Context::Global, &"banned".into()).unwrap(),
            Privilege::BAD_RELATION
        );
        assert_eq!(
            registry.resolve(Context::Global, &"FRIEND".into()).unwrap(),
            Privilege::LOW_FAMILIAR
        );

        let group = Context::from(&"group");
        assert_eq!(
            registry.resolve(group, &"group_admin".into()).unwrap(),
            Privilege::LOCAL_ADMIN
        );
        // Defaults still apply inside configured contexts.
        assert_eq!(registry.resolve(group, &"self".into()).unwrap(), Privilege::SELF);
    }

    #[test]
    fn test_relation_keys_are_lower_cased() {
        let config = RegistryConfig::parse("[relations]\nGroupAdmin = 8\n").unwrap();
        assert!(config.relations.contains_key("groupadmin"));

        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("groupadmin = 8"));
    }

    #[test]
    fn test_empty_config_is_default_vocabulary() {
        let registry = Registry::parse("").unwrap();
        assert!(registry.is_open(Context::Global));
        assert!(!registry.is_open(Context::from(&"group")));
    }

    #[test]
    fn test_unknown_privilege_name_fails() {
        let err = RegistryConfig::parse("[relations]\nroot = \"overlord\"\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Registry::load("/nonexistent/privilege.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
