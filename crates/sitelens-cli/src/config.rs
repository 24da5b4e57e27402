//! Configuration loading: `sitelens.toml` overlaid with CLI flags.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use sitelens_llm::OllamaConfig;

const CONFIG_FILE: &str = "sitelens.toml";

/// Partial settings as they appear in the config file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
}

/// Resolve the effective client settings.
///
/// Precedence: CLI flag > config file > built-in default. An explicitly
/// given config path must exist; the implicit `./sitelens.toml` is optional.
pub fn config_from(
    path: Option<&Path>,
    endpoint: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
) -> Result<OllamaConfig> {
    let file = match path {
        Some(path) => load_file(path)?,
        None if Path::new(CONFIG_FILE).exists() => load_file(Path::new(CONFIG_FILE))?,
        None => FileConfig::default(),
    };

    Ok(merge(file, endpoint, model, max_tokens))
}

fn merge(
    file: FileConfig,
    endpoint: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
) -> OllamaConfig {
    let defaults = OllamaConfig::default();
    OllamaConfig {
        endpoint: endpoint.or(file.endpoint).unwrap_or(defaults.endpoint),
        model: model.or(file.model).unwrap_or(defaults.model),
        max_tokens: max_tokens.or(file.max_tokens).unwrap_or(defaults.max_tokens),
    }
}

fn load_file(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Invalid config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_given() {
        let config = merge(FileConfig::default(), None, None, None);
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.model, "mistral");
        assert_eq!(config.max_tokens, 500);
    }

    #[test]
    fn test_flag_overrides_file() {
        let file = FileConfig {
            endpoint: Some("http://ollama.internal:11434".to_string()),
            model: Some("llama3".to_string()),
            max_tokens: Some(800),
        };
        let config = merge(file, None, Some("qwen".to_string()), None);
        assert_eq!(config.endpoint, "http://ollama.internal:11434");
        assert_eq!(config.model, "qwen");
        assert_eq!(config.max_tokens, 800);
    }

    #[test]
    fn test_toml_parse() {
        let file: FileConfig = toml::from_str("model = \"llama3\"\nmax_tokens = 256\n").unwrap();
        assert_eq!(file.model.as_deref(), Some("llama3"));
        assert_eq!(file.max_tokens, Some(256));
        assert!(file.endpoint.is_none());
    }
}
