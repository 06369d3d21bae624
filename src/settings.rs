//! Run settings, resolved once at startup.
//!
//! Precedence, lowest first: built-in defaults, the YAML settings file,
//! the `VERBOSE` and `LOG_FORMAT` environment variables, command line flags.

use crate::artifacts::compare::comparison_config::ComparisonConfig;
use crate::artifacts::compare::comparison_error::CompareResult;
use crate::artifacts::script::output_target::OutputTarget;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = ".creepymatrix.yaml";
pub const DEFAULT_OUTPUT: &str = "compare_files.sh";
pub const DEFAULT_IGNORE_PATTERNS: [&str; 6] = [
    ".git",
    "go.mod",
    "go.sum",
    "make_txtar.sh",
    "node_modules",
    "README.md",
];

const VERBOSE_ENV: &str = "VERBOSE";
const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("unknown log format '{}', expected text or json", other),
        }
    }
}

/// Contents of a settings file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SettingsFile {
    pub verbose: Option<u8>,
    pub log_format: Option<LogFormat>,
    pub source: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub output: Option<String>,
    pub ignore: Option<Vec<String>>,
    pub regular_files_only: Option<bool>,
}

impl SettingsFile {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(SettingsFile::default());
        }

        serde_yaml::from_str(content).context("invalid settings file")
    }

    /// Reads `explicit` when given, otherwise `$HOME/.creepymatrix.yaml` if it
    /// exists. Returns the path that was read alongside its contents.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, Self)>> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match dirs::home_dir().map(|home| home.join(SETTINGS_FILE_NAME)) {
                Some(path) if path.is_file() => path,
                _ => return Ok(None),
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::parse(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;

        Ok(Some((path, settings)))
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub verbose: Option<u8>,
    pub log_format: Option<LogFormat>,
    pub source: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub output: Option<String>,
    pub ignore: Option<Vec<String>>,
    pub regular_files_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub verbose: u8,
    pub log_format: LogFormat,
    pub source: PathBuf,
    pub target: PathBuf,
    pub output: OutputTarget,
    pub ignore: Vec<String>,
    pub regular_files_only: bool,
    pub settings_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(
        file: Option<(PathBuf, SettingsFile)>,
        env: impl Fn(&str) -> Option<String>,
        overrides: Overrides,
    ) -> anyhow::Result<Self> {
        let (settings_file, file) = match file {
            Some((path, file)) => (Some(path), file),
            None => (None, SettingsFile::default()),
        };

        let env_verbose = env(VERBOSE_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                value
                    .trim()
                    .parse::<u8>()
                    .with_context(|| format!("invalid {} value '{}'", VERBOSE_ENV, value))
            })
            .transpose()?;
        let env_log_format = env(LOG_FORMAT_ENV)
            .map(|value| LogFormat::parse(&value))
            .transpose()
            .with_context(|| format!("invalid {} value", LOG_FORMAT_ENV))?;

        let Ok(output) = overrides
            .output
            .or(file.output)
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT)
            .parse::<OutputTarget>();

        Ok(Settings {
            verbose: overrides.verbose.or(env_verbose).or(file.verbose).unwrap_or(0),
            log_format: overrides
                .log_format
                .or(env_log_format)
                .or(file.log_format)
                .unwrap_or_default(),
            source: overrides.source.or(file.source).unwrap_or_default(),
            target: overrides.target.or(file.target).unwrap_or_default(),
            output,
            ignore: overrides.ignore.or(file.ignore).unwrap_or_else(|| {
                DEFAULT_IGNORE_PATTERNS
                    .iter()
                    .map(|pattern| pattern.to_string())
                    .collect()
            }),
            regular_files_only: overrides
                .regular_files_only
                .or(file.regular_files_only)
                .unwrap_or(false),
            settings_file,
        })
    }

    pub fn comparison_config(&self) -> CompareResult<ComparisonConfig> {
        ComparisonConfig::try_new(&self.source, &self.target, self.ignore.clone())
            .map(|config| config.with_regular_files_only(self.regular_files_only))
    }
}
