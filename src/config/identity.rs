//! Commenting identity
//!
//! There is no login. Every comment typed in a session is attributed to this
//! fixed identity.

use serde::Deserialize;

/// Author shown on comments written in this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub avatar_url: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: "Iuri Volnistem".to_string(),
            avatar_url: "https://github.com/iurivolnistem.png".to_string(),
        }
    }
}

/// Identity as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileIdentity {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl Identity {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileIdentity>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            name: file
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(defaults.name),
            avatar_url: file.avatar_url.unwrap_or(defaults.avatar_url),
        }
    }
}
