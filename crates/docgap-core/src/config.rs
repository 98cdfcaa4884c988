use crate::normalize::{Normalizer, DEFAULT_BASE_PREFIX, DEFAULT_ROOT_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// URL list filename looked up inside the docs directory when none is configured.
pub const DEFAULT_URL_LIST: &str = "Platform.txt";

/// Global configuration loaded from `~/.config/docgap/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocgapConfig {
    /// Base URL stripped from every listed URL before folding.
    #[serde(default = "default_base_prefix")]
    pub base_prefix: String,
    /// Filename stem for the bare base URL.
    #[serde(default = "default_root_name")]
    pub root_name: String,
    /// URL list to read; defaults to `Platform.txt` inside `docs_dir`.
    #[serde(default)]
    pub url_list: Option<PathBuf>,
    /// Directory holding converted `.md` files; defaults to the current directory.
    #[serde(default)]
    pub docs_dir: Option<PathBuf>,
}

fn default_base_prefix() -> String {
    DEFAULT_BASE_PREFIX.to_string()
}

fn default_root_name() -> String {
    DEFAULT_ROOT_NAME.to_string()
}

impl Default for DocgapConfig {
    fn default() -> Self {
        Self {
            base_prefix: default_base_prefix(),
            root_name: default_root_name(),
            url_list: None,
            docs_dir: None,
        }
    }
}

impl DocgapConfig {
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.base_prefix.clone(), &self.root_name)
    }

    /// Resolves `(url_list, docs_dir)`: explicit arguments win over config,
    /// config wins over defaults (`cwd`, then `Platform.txt` inside the docs dir).
    pub fn resolve_paths(
        &self,
        url_list: Option<&Path>,
        docs_dir: Option<&Path>,
        cwd: &Path,
    ) -> (PathBuf, PathBuf) {
        let docs_dir = docs_dir
            .or(self.docs_dir.as_deref())
            .unwrap_or(cwd)
            .to_path_buf();
        let url_list = url_list
            .or(self.url_list.as_deref())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| docs_dir.join(DEFAULT_URL_LIST));
        (url_list, docs_dir)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docgap")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("create config directory under XDG_CONFIG_HOME")
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<DocgapConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DocgapConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocgapConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, writing defaults there if it does not exist.
pub fn load_or_init_at(path: &Path) -> Result<DocgapConfig> {
    if !path.exists() {
        let default_cfg = DocgapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config {}", path.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("create config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Like [`load_or_init`], but an unusable config location only costs a warning:
/// the run continues with built-in defaults.
pub fn load_or_default() -> DocgapConfig {
    or_default(load_or_init())
}

/// Like [`load_or_init_at`], falling back to defaults on failure.
pub fn load_or_default_at(path: &Path) -> DocgapConfig {
    or_default(load_or_init_at(path))
}

fn or_default(loaded: Result<DocgapConfig>) -> DocgapConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("config unavailable, using defaults: {:#}", err);
        DocgapConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DocgapConfig::default();
        assert_eq!(cfg.base_prefix, "https://docs.apify.com/platform");
        assert_eq!(cfg.root_name, "platform");
        assert!(cfg.url_list.is_none());
        assert!(cfg.docs_dir.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DocgapConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DocgapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: DocgapConfig = toml::from_str(r#"docs_dir = "/srv/docs""#).unwrap();
        assert_eq!(cfg.base_prefix, DEFAULT_BASE_PREFIX);
        assert_eq!(cfg.root_name, DEFAULT_ROOT_NAME);
        assert_eq!(cfg.docs_dir.as_deref(), Some(Path::new("/srv/docs")));
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            base_prefix = "https://docs.apify.com/academy"
            root_name = "academy"
            url_list = "/tmp/Academy.txt"
        "#;
        let cfg: DocgapConfig = toml::from_str(toml).unwrap();
        let n = cfg.normalizer();
        assert_eq!(n.candidate_filename("https://docs.apify.com/academy"), "academy.md");
        assert_eq!(
            n.candidate_filename("https://docs.apify.com/academy/web-scraping-for-beginners"),
            "web-scraping-for-beginners.md"
        );
        assert_eq!(cfg.url_list.as_deref(), Some(Path::new("/tmp/Academy.txt")));
    }

    #[test]
    fn resolve_paths_defaults_to_cwd() {
        let cfg = DocgapConfig::default();
        let (list, dir) = cfg.resolve_paths(None, None, Path::new("/work"));
        assert_eq!(dir, Path::new("/work"));
        assert_eq!(list, Path::new("/work/Platform.txt"));
    }

    #[test]
    fn resolve_paths_args_override_config() {
        let cfg = DocgapConfig {
            url_list: Some(PathBuf::from("/cfg/list.txt")),
            docs_dir: Some(PathBuf::from("/cfg/docs")),
            ..DocgapConfig::default()
        };
        let (list, dir) = cfg.resolve_paths(None, None, Path::new("/work"));
        assert_eq!(list, Path::new("/cfg/list.txt"));
        assert_eq!(dir, Path::new("/cfg/docs"));

        let (list, dir) =
            cfg.resolve_paths(Some(Path::new("l.txt")), Some(Path::new("d")), Path::new("/work"));
        assert_eq!(list, Path::new("l.txt"));
        assert_eq!(dir, Path::new("d"));
    }

    #[test]
    fn resolve_paths_list_follows_docs_dir_override() {
        let cfg = DocgapConfig::default();
        let (list, _) = cfg.resolve_paths(None, Some(Path::new("/docs")), Path::new("/work"));
        assert_eq!(list, Path::new("/docs/Platform.txt"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "root_name = \"home\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.root_name, "home");
        assert!(load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn load_or_init_at_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docgap").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, DocgapConfig::default());
        assert_eq!(load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn unusable_config_dir_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("docgap");
        fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("config.toml");

        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("create config"));
        assert!(format!("{:#}", err).contains("config.toml"));
    }

    #[test]
    fn unusable_config_dir_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("docgap");
        fs::write(&blocker, "not a directory").unwrap();

        let cfg = load_or_default_at(&blocker.join("config.toml"));
        assert_eq!(cfg, DocgapConfig::default());
        assert_eq!(
            cfg.normalizer()
                .candidate_filename("https://docs.apify.com/platform/x"),
            "x.md"
        );
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "root_name = [unterminated").unwrap();
        assert!(load_or_init_at(&path).is_err());
        assert_eq!(load_or_default_at(&path), DocgapConfig::default());
    }
}
