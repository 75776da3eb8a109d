use crate::error::{Result, SiteError};
use crate::paths;
use crate::store::ContentStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// SiteSection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Public origin used for sitemap and robots links.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_site_name() -> String {
    "Quezt Labs".to_string()
}

fn default_base_url() -> String {
    "https://queztlabs.tech".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

// ---------------------------------------------------------------------------
// ServerSection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// ContentSection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    /// YAML file replacing the built-in content. Relative to the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub content: ContentSection,
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(SiteError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Like [`Config::load`], but an uninitialized root gets the defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(SiteError::NotInitialized) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Build the content store this config points at.
    pub fn content_store(&self, root: &Path) -> Result<ContentStore> {
        match &self.content.path {
            Some(p) => ContentStore::load(&paths::content_path(root, p)),
            None => ContentStore::seed(),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let base = &self.site.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("site.base_url '{base}' must start with http:// or https://"),
            });
        } else if base.ends_with('/') {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("site.base_url '{base}' has a trailing slash; it is ignored"),
            });
        }

        if self.site.name.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "site.name is empty".to_string(),
            });
        }

        if let Some(p) = &self.content.path {
            let full = paths::content_path(root, p);
            if !full.exists() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("content.path '{}' does not exist", full.display()),
                });
            } else if let Err(e) = ContentStore::load(&full) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("content.path '{}' is invalid: {e}", full.display()),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
