//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["quill.toml", ".quill.toml"];

/// Prefix of environment overrides, e.g. `QUILL_CHAT__MODEL`
pub const ENV_PREFIX: &str = "QUILL_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables `QUILL_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./quill.toml` or `./.quill.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/quill/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Path::new("."),
            config_path,
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// File-based sources, without environment overrides.
    fn figment(global: Option<&Path>, project_dir: &Path, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(path) = Self::project_config_in(project_dir) {
            figment = figment.merge(Toml::file(path));
        }

        // Explicit path is the highest priority file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/quill/config.toml` on Linux, the platform
    /// equivalent elsewhere.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quill").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {ENV_PREFIX}<SECTION>__<KEY>");

        if let Some(path) = config_path {
            let marker = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{marker:<5}] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./quill.toml or ./.quill.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_domain::{Model, OutputFormat};
    use std::fs;

    fn extract(global: Option<&Path>, project_dir: &Path, explicit: Option<&Path>) -> FileConfig {
        ConfigLoader::figment(global, project_dir, explicit)
            .extract()
            .unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.chat.model.is_none());
        assert_eq!(config.provider.timeout_seconds, 60);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.ends_with("quill/config.toml"));
    }

    #[test]
    fn test_no_files_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(extract(None, dir.path(), None), FileConfig::default());
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        fs::write(
            &global,
            "[chat]\nmodel = \"gemini-1.5-pro\"\ntemperature = 0.3\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("quill.toml"),
            "[chat]\nmodel = \"gemini-2.5-pro\"\n",
        )
        .unwrap();

        let config = extract(Some(&global), dir.path(), None);

        assert_eq!(config.chat.parse_model(), Some(Model::Gemini25Pro));
        // Keys not set by the project file survive from the global file
        assert_eq!(config.chat.temperature, Some(0.3));
    }

    #[test]
    fn test_hidden_project_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".quill.toml"),
            "[repl]\nshow_progress = false\n",
        )
        .unwrap();

        let config = extract(None, dir.path(), None);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_explicit_path_has_highest_file_priority() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("quill.toml"),
            "[provider]\ntimeout_seconds = 10\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[provider]\ntimeout_seconds = 90\n").unwrap();

        let config = extract(None, dir.path(), Some(&explicit));
        assert_eq!(config.provider.timeout_seconds, 90);
    }

    #[test]
    fn test_invalid_value_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("quill.toml"),
            "[provider]\ntimeout_seconds = \"soon\"\n",
        )
        .unwrap();

        let result = ConfigLoader::figment(None, dir.path(), None).extract::<FileConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "quill.toml",
                "[chat]\nmodel = \"gemini-1.5-pro\"\n\n[provider]\ntimeout_seconds = 10\n\n[repl]\nshow_progress = false\n",
            )?;
            jail.set_env("QUILL_CHAT__MODEL", "gemini-2.5-pro");
            jail.set_env("QUILL_PROVIDER__TIMEOUT_SECONDS", "45");
            jail.set_env("QUILL_OUTPUT__FORMAT", "json");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;

            assert_eq!(config.chat.parse_model(), Some(Model::Gemini25Pro));
            assert_eq!(config.provider.timeout_seconds, 45);
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            // Keys without an override keep the project value
            assert!(!config.repl.show_progress);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[generator]\nmodel = \"gemini-1.5-pro\"\n")?;
            jail.set_env("QUILL_GENERATOR__MODEL", "my-tuned-model");

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;

            assert_eq!(
                config.generator.parse_model(),
                Some(Model::Custom("my-tuned-model".to_string()))
            );
            Ok(())
        });
    }
}
