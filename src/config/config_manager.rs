use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::{GitscribeError, GitscribeResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join("gitscribe/config.toml"))
            .unwrap_or_default()
    }

    pub fn load() -> GitscribeResult<Config> {
        let path = Self::config_path();
        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            return Self::load_from(&path);
        }
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> GitscribeResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| GitscribeError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| GitscribeError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;
        Ok(config)
    }

    pub fn create_sample_config() -> GitscribeResult<()> {
        let sample_config = r#"# gitscribe configuration

[github]
# Environment variable holding the GitHub API token
token_env = "GITHUB_TOKEN"

# Include forked repositories in listings
include_forks = false

[ai]
provider = "gemini"
model = "gemini-1.5-pro"
api_key_env = "GOOGLE_AI_API_KEY"
max_output_tokens = 8192
temperature = 0.7

[deployment]
# Probe Vercel for production deployment URLs
enabled = true
token_env = "VERCEL_TOKEN"

[analysis]
# Structure sampling bounds
max_tree_depth = 2
max_entries_per_dir = 25

# Files fetched for the security content scan
max_scanned_files = 12

[server]
# Dashboard port
port = 8080
"#;
        let config_dir = dirs::home_dir()
            .map(|d| d.join("gitscribe"))
            .ok_or_else(|| GitscribeError::system_error("create config", "home directory unavailable"))?;
        let config_path = config_dir.join("config.toml");

        fs::create_dir_all(&config_dir)?;
        fs::write(&config_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> GitscribeResult<()> {
        if config.ai.provider != "gemini" {
            return Err(GitscribeError::config_error(
                "Unsupported AI provider",
                Some("ai.provider"),
                Some("Only 'gemini' is currently supported"),
            ));
        }
        if config.analysis.max_tree_depth > 5 {
            return Err(GitscribeError::config_error(
                "Structure depth too large",
                Some("analysis.max_tree_depth"),
                Some("Use a depth of 5 or less to bound API usage"),
            ));
        }
        Ok(())
    }

    /// Reads the token named by `env_name`; `None` when unset or empty.
    pub fn token_from_env(env_name: &str) -> Option<String> {
        env::var(env_name).ok().filter(|value| !value.is_empty())
    }

    /// Like `token_from_env`, but missing credentials are a configuration
    /// error naming the variable.
    pub fn require_token(env_name: &str, purpose: &str) -> GitscribeResult<String> {
        Self::token_from_env(env_name).ok_or_else(|| {
            GitscribeError::config_error(
                &format!("{} token is required", purpose),
                Some(env_name),
                Some(&format!("Set the {} environment variable", env_name)),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_parses_partial_config_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[github]\ninclude_forks = true\n\n[server]\nport = 9001").unwrap();

        let config = ConfigManager::load_from(file.path()).unwrap();
        assert!(config.github.include_forks);
        assert_eq!(config.server.port, 9001);
        // Untouched sections fall back to defaults.
        assert_eq!(config.ai.provider, "gemini");
        assert_eq!(config.analysis.max_tree_depth, 2);
    }

    #[test]
    fn load_from_reports_broken_config_distinctly() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[github\nbroken").unwrap();

        let error = ConfigManager::load_from(file.path()).unwrap_err();
        assert!(matches!(error, GitscribeError::ConfigurationFileError { .. }));
    }

    #[test]
    fn validate_rejects_unknown_provider() {
        let mut config = Config::default();
        config.ai.provider = "frontier".to_string();
        assert!(ConfigManager::validate_config(&config).is_err());
    }
}
