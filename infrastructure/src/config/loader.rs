//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROJECT_FILES: [&str; 2] = ["kubereport.toml", ".kubereport.toml"];
const ENV_PREFIX: &str = "KUBEREPORT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `KUBEREPORT_`-prefixed environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./kubereport.toml` or `./.kubereport.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/kubereport/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigValidationError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Merging global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            debug!("Merging project config {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // An explicit path must exist
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigValidationError::NotFound(path.to_path_buf()));
            }
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // e.g. KUBEREPORT_OUTPUT__FORMAT=tap
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment.extract().map_err(Box::new)?)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("kubereport").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./kubereport.toml or ./.kubereport.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Env:     {}OUTPUT__<KEY>", ENV_PREFIX);
        println!("  [     ] Default: built-in defaults");
    }
}
