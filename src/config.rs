//! Market configuration: every static table the core reads, loadable from a
//! versioned JSON file and validated once at startup.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::costs::CostConfig;
use crate::error::{MarketError, Result};
use crate::matching::{AliasTable, KeywordTables, MatchConfig, RiskConfig, VersionPatterns};

pub const CONFIG_DIR_NAME: &str = "figure-market";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Platform config location, e.g. `~/.config/figure-market/config.json` on Linux.
pub fn default_config_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
    } else {
        PathBuf::from(".figure-market").join(CONFIG_FILE_NAME)
    }
}

// ---------------------------------------------------------------------------
// MarketConfig
// ---------------------------------------------------------------------------

/// All matching and cost tables.
///
/// Every section has built-in defaults, so a config file only needs the
/// sections it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketConfig {
    pub matching: MatchConfig,
    pub risk: RiskConfig,
    pub keywords: KeywordTables,
    pub aliases: AliasTable,
    pub versions: VersionPatterns,
    pub costs: CostConfig,
}

impl MarketConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MarketConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        info!(
            "loaded market config from {} ({} services, {} alias entries)",
            path.display(),
            config.costs.services.len(),
            config.aliases.len()
        );
        Ok(config)
    }

    /// Check cross-field invariants; any failure is a startup error.
    pub fn validate(&self) -> Result<()> {
        self.costs.validate()?;

        let m = &self.matching;
        for (label, profile) in [("interactive", &m.interactive), ("bulk", &m.bulk)] {
            if !profile.threshold.is_finite() || profile.threshold < 0.0 {
                return Err(MarketError::Config(format!(
                    "{label} threshold must be a non-negative number"
                )));
            }
        }
        if m.max_results == 0 {
            return Err(MarketError::Config("maxResults must be at least 1".into()));
        }
        if self.keywords.merch.is_empty() {
            return Err(MarketError::Config("merch keyword table is empty".into()));
        }
        if self.keywords.subtypes.iter().all(|s| s.keywords.is_empty()) {
            return Err(MarketError::Config("subtype keyword table is empty".into()));
        }
        if self.risk.cheap_below > self.risk.premium_above {
            return Err(MarketError::Config(
                "risk cheapBelow exceeds premiumAbove".into(),
            ));
        }
        Ok(())
    }

    /// Serialize to pretty JSON, suitable as a starting config file.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
