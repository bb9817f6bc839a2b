//! Return mode value object

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which resolvers to include when listing plugins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnMode {
    /// Configured and enabled resolvers (default)
    #[default]
    OnlyActive,
    /// Resolvers with a persisted record, enabled or not
    OnlyConfigured,
    /// Every registered resolver
    All,
}

impl ReturnMode {
    pub fn as_str(&self) -> &str {
        match self {
            ReturnMode::OnlyActive => "active",
            ReturnMode::OnlyConfigured => "configured",
            ReturnMode::All => "all",
        }
    }
}

impl std::fmt::Display for ReturnMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReturnMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" | "only_active" => Ok(ReturnMode::OnlyActive),
            "configured" | "only_configured" => Ok(ReturnMode::OnlyConfigured),
            "all" => Ok(ReturnMode::All),
            _ => Err(format!("Invalid return mode: {}", s)),
        }
    }
}
