use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::models::profile::ShiftProfile;

/// Default recomputation cadence for watch mode, in seconds.
fn default_tick_seconds() -> u64 {
    60
}

fn default_profile_name() -> String {
    "6x1".to_string()
}

fn default_profiles() -> BTreeMap<String, ShiftProfile> {
    let mut profiles = BTreeMap::new();
    profiles.insert("6x1".to_string(), ShiftProfile::six_by_one());
    profiles
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_profile_name")]
    pub default_profile: String,
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,
    #[serde(default = "default_profiles")]
    pub profiles: BTreeMap<String, ShiftProfile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: default_profile_name(),
            tick_seconds: default_tick_seconds(),
            profiles: default_profiles(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("shiftwatch")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftwatch")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftwatch.conf")
    }

    /// Load configuration from the standard location, or return defaults
    /// if no file exists yet.
    pub fn load() -> AppResult<Self> {
        Self::load_from(Self::config_file())
    }

    /// Load configuration from an explicit path (used by --config and tests).
    pub fn load_from(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Resolve a profile by name (or the configured default) and enforce
    /// the engine precondition of a positive work target.
    pub fn profile(&self, name: Option<&str>) -> AppResult<&ShiftProfile> {
        let name = name.unwrap_or(&self.default_profile);
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| AppError::UnknownProfile(name.to_string()))?;

        if profile.work_target_min == 0 {
            return Err(AppError::InvalidProfile(format!(
                "{}: work_target_min must be positive",
                name
            )));
        }

        Ok(profile)
    }

    /// Initialize the configuration directory and write the default catalog.
    pub fn init_all(custom_path: Option<&str>) -> AppResult<()> {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        println!("✅ Config file: {:?}", path);

        Ok(())
    }
}
