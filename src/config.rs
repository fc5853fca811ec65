// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Root holding one subdirectory per department.
    pub root_dir: PathBuf,
    /// File extension without the leading dot, matched case-sensitively.
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SanitizerConfig {
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            extra_stopwords: Vec::new(),
            snippet_chars: default_snippet_chars(),
        }
    }
}

fn default_extension() -> String {
    "pdf".to_string()
}

fn default_true() -> bool {
    true
}

fn default_snippet_chars() -> usize {
    200
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, Self::environment())
    }

    /// `PDF_CORPUS__SECTION__KEY` overrides; `sanitizer.extra_stopwords` is
    /// read as a comma-separated list.
    fn environment() -> config::Environment {
        config::Environment::with_prefix("PDF_CORPUS")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("sanitizer.extra_stopwords")
    }

    fn load_with_env(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(environment);

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            input: InputConfig {
                root_dir: PathBuf::from("./departments"),
                extension: default_extension(),
            },
            output: OutputConfig {
                path: PathBuf::from("output.json"),
                pretty: true,
            },
            sanitizer: SanitizerConfig::default(),
        }
    }

    /// The suffix a file name must end with to be picked up, e.g. `.pdf`.
    pub fn pdf_suffix(&self) -> String {
        format!(".{}", self.input.extension.trim_start_matches('.'))
    }

    pub fn validate(&self) -> Result<()> {
        let extension = self.input.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(PipelineError::Config(
                "input.extension must not be empty".to_string(),
            ));
        }

        if self.sanitizer.snippet_chars == 0 {
            return Err(PipelineError::Config(
                "sanitizer.snippet_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
