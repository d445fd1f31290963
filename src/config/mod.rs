use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::{ExpenseError, Result};
use crate::store::{IdScheme, UnknownIdPolicy};

const APP_DIR: &str = "expense_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "EXPENSE_CORE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub seed_demo_expenses: bool,
    pub unknown_ids: UnknownIdPolicy,
    pub id_scheme: IdScheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            seed_demo_expenses: true,
            unknown_ids: UnknownIdPolicy::Ignore,
            id_scheme: IdScheme::Uuid,
        }
    }
}

impl Config {
    /// Renders an amount with the currency symbol; values too large to
    /// represent print as `out of range`.
    pub fn format_amount(&self, amount: f64) -> String {
        if amount.is_finite() {
            format!("{}{:.2}", self.currency_symbol, amount)
        } else {
            format!("{}(out of range)", self.currency_symbol)
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves the config path from `EXPENSE_CORE_CONFIG` or the platform
    /// config directory.
    pub fn new() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(Self::with_path(PathBuf::from(path)));
        }
        let base = dirs::config_dir().ok_or_else(|| {
            ExpenseError::Config("unable to determine the platform config directory".into())
        })?;
        Ok(Self::with_path(base.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "configuration loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
