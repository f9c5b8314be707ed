//! Configuration for svlt.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SVLT_HOME, SVLT_STORAGE, SVLT_LATENCY_MS)
//! 2. Config file (.svlt/config.yaml)
//! 3. Defaults (~/.svlt, ~/.svlt/storage.json, 2000ms latency)
//!
//! Config file discovery:
//! - Searches current directory and parents for .svlt/config.yaml
//! - Paths in config file are relative to the project root (parent of .svlt/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_LATENCY_MS: u64 = 2000;
const STORAGE_FILE: &str = "storage.json";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Storage file (relative to the project root)
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    /// Simulated processing delay in milliseconds
    pub latency_ms: Option<u64>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// svlt home directory
    pub home: PathBuf,
    /// Key-value storage file
    pub storage_path: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    pub generator: GeneratorSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub latency_ms: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

impl GeneratorSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Values read from the environment
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    home: Option<PathBuf>,
    storage: Option<PathBuf>,
    latency_ms: Option<u64>,
}

impl EnvOverrides {
    fn from_env() -> Result<Self> {
        let latency_ms = match std::env::var("SVLT_LATENCY_MS") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid SVLT_LATENCY_MS: {}", raw))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            home: std::env::var("SVLT_HOME").ok().map(PathBuf::from),
            storage: std::env::var("SVLT_STORAGE").ok().map(PathBuf::from),
            latency_ms,
        })
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".svlt").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Merge environment, config file and defaults
fn resolve(
    env: EnvOverrides,
    file: Option<(PathBuf, ConfigFile)>,
    default_home: PathBuf,
) -> ResolvedConfig {
    let home = env.home.unwrap_or(default_home);

    let (config_file, file_storage, file_latency) = match file {
        Some((config_path, config)) => {
            // Base directory is the parent of .svlt/ (i.e., grandparent of config.yaml)
            let base_dir = config_path
                .parent()
                .and_then(|p| p.parent())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            let storage = config
                .storage
                .path
                .as_deref()
                .map(|p| resolve_path(&base_dir, p));
            (Some(config_path), storage, config.generator.latency_ms)
        }
        None => (None, None, None),
    };

    let storage_path = env
        .storage
        .or(file_storage)
        .unwrap_or_else(|| home.join(STORAGE_FILE));

    let generator = GeneratorSettings {
        latency_ms: env
            .latency_ms
            .or(file_latency)
            .unwrap_or(DEFAULT_LATENCY_MS),
    };

    ResolvedConfig {
        home,
        storage_path,
        config_file,
        generator,
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".svlt");

    let file = match find_config_file() {
        Some(path) => {
            let config = load_config_file(&path)?;
            Some((path, config))
        }
        None => None,
    };

    Ok(resolve(EnvOverrides::from_env()?, file, default_home))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (bypasses the cache)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

/// Get the svlt home directory
pub fn svlt_home() -> Result<PathBuf> {
    Ok(config()?.home.clone())
}

/// Get the storage file path
pub fn storage_path() -> Result<PathBuf> {
    Ok(config()?.storage_path.clone())
}
