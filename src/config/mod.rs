use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::Validation;
use crate::geometry::{DEFAULT_SMOOTH_ITERATIONS, EARTH_RADIUS_M};

/// Failures loading an explicitly named config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn default_tolerance() -> f64 {
    1.0
}
fn default_smooth_iterations() -> usize {
    DEFAULT_SMOOTH_ITERATIONS
}
fn default_circle_vertices() -> usize {
    64
}
fn default_earth_radius() -> f64 {
    EARTH_RADIUS_M
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct FileConfig {
    /// Reject malformed polygons instead of processing them best-effort
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub simplify: SimplifyConfig,
    #[serde(default)]
    pub smooth: SmoothConfig,
    #[serde(default)]
    pub circle: CircleConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimplifyConfig {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub highest_quality: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            highest_quality: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SmoothConfig {
    #[serde(default = "default_smooth_iterations")]
    pub iterations: usize,
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self {
            iterations: default_smooth_iterations(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CircleConfig {
    #[serde(default = "default_circle_vertices")]
    pub vertices: usize,
    #[serde(default = "default_earth_radius")]
    pub earth_radius_m: f64,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            vertices: default_circle_vertices(),
            earth_radius_m: default_earth_radius(),
        }
    }
}

impl FileConfig {
    /// First parseable config file on the search path, if any
    pub fn load() -> Option<Self> {
        Self::load_first(&get_config_paths())
    }

    fn load_first(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!("failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load a config file named on the command line; unlike `load`, a
    /// missing or malformed file is an error
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validation(&self) -> Validation {
        Validation::from_strict(self.strict)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("geopoly.toml"));
    paths.push(PathBuf::from(".geopoly.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("geopoly").join("config.toml"));
        paths.push(config_dir.join("geopoly.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".geopoly.toml"));
        paths.push(home.join(".config").join("geopoly").join("config.toml"));
    }

    paths
}
