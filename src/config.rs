//! Configuration management for picklist.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default upload directory name.
const UPLOADS_SUBDIR: &str = "uploads";

/// Default maximum upload size in megabytes.
const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;

/// Default bind address for the web server.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "picklist.toml";

/// Environment variable naming an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "PICKLIST_CONFIG";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory where uploads are staged before extraction.
    pub upload_dir: PathBuf,
    /// Maximum accepted upload size in bytes.
    pub max_file_size_bytes: u64,
    /// File extensions accepted for upload, lowercase, without dots.
    pub allowed_extensions: Vec<String>,
    /// Default bind address for the web server.
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(UPLOADS_SUBDIR),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024,
            allowed_extensions: vec!["pdf".to_string()],
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Settings {
    /// Load settings, looking for a config file at `config_path`, then at
    /// `$PICKLIST_CONFIG`, then at `./picklist.toml`. Missing files fall back
    /// to defaults; unreadable or malformed files are errors.
    pub fn load(config_path: Option<&Path>) -> Result<Self, String> {
        let explicit = config_path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));

        let path = match explicit {
            Some(path) => path,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILENAME);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let config = Config::load_from_path(&path)?;
        let base_dir = config
            .base_dir()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let mut settings = Self::default();
        config.apply_to_settings(&mut settings, &base_dir);
        Ok(settings)
    }

    /// Check an upload filename against the accepted extensions.
    pub fn is_allowed_extension(&self, filename: &str) -> bool {
        let Some((_, ext)) = filename.rsplit_once('.') else {
            return false;
        };
        let ext = ext.to_lowercase();
        self.allowed_extensions.iter().any(|allowed| *allowed == ext)
    }

    /// Upload size cap for the HTTP body limit layer.
    pub fn body_limit(&self) -> usize {
        usize::try_from(self.max_file_size_bytes).unwrap_or(usize::MAX)
    }

    /// Ensure the upload directory exists.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.upload_dir)
    }
}

/// Configuration file contents. Every field is optional; anything absent
/// keeps its default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Directory for staged uploads.
    #[serde(default)]
    pub upload_dir: Option<String>,
    /// Maximum upload size in megabytes.
    #[serde(default)]
    pub max_file_size_mb: Option<u64>,
    /// Accepted upload extensions.
    #[serde(default)]
    pub allowed_extensions: Option<Vec<String>>,
    /// Bind address for the web server.
    #[serde(default)]
    pub bind: Option<String>,
    /// Path to the config file this was loaded from (not part of the file).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse TOML config {}: {}", path.display(), e))?;

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Get the base directory for resolving relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    /// `base_dir` is used to resolve relative paths.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref upload_dir) = self.upload_dir {
            settings.upload_dir = self.resolve_path(upload_dir, base_dir);
        }
        if let Some(max_mb) = self.max_file_size_mb {
            settings.max_file_size_bytes = max_mb * 1024 * 1024;
        }
        if let Some(ref extensions) = self.allowed_extensions {
            settings.allowed_extensions = extensions.iter().map(|e| e.to_lowercase()).collect();
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
    }
}
