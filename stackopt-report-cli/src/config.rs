//! Configuration loading and parsing
//!
//! Every table and key of `config.toml` is optional; command-line flags take
//! precedence over the file, and the file over the built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::ReportFormat;

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub pairing: PairingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub file: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PairingConfig {
    /// Suffix naming the optimized variant (default: "$STACKOPT")
    pub suffix: Option<String>,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if let Some(suffix) = &config.pairing.suffix {
        anyhow::ensure!(
            !suffix.is_empty(),
            "Invalid config file {:?}: pairing.suffix must not be empty",
            path
        );
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            file = "results/perf.csv"

            [output]
            file = "results/report.txt"
            format = "txt"
            title = "Nightly"

            [pairing]
            suffix = "@OPT"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.file, Some(PathBuf::from("results/perf.csv")));
        assert_eq!(config.output.format, Some(ReportFormat::Txt));
        assert_eq!(config.output.title.as_deref(), Some("Nightly"));
        assert_eq!(config.pairing.suffix.as_deref(), Some("@OPT"));
    }

    #[test]
    fn test_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.input.file.is_none());
        assert!(config.output.format.is_none());
        assert!(config.pairing.suffix.is_none());
    }

    #[test]
    fn test_load_rejects_empty_suffix() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pairing]\nsuffix = \"\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("pairing.suffix"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("no/such/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
