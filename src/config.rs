//! Configuration for encode runs

use std::str::FromStr;
use thiserror::Error;

/// Message encoded when none is given on the command line
pub const DEFAULT_MESSAGE: &str = "Test message";

/// Parity symbols appended when `--parity` is not given
pub const DEFAULT_PARITY_LEN: usize = 12;

/// Errors turning command line values into an [`EncodeConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid parity length: {0:?}")]
    InvalidParityLength(String),

    #[error("Parity length must not be negative, got {0}")]
    NegativeParityLength(i64),

    #[error("Invalid thread count: {0:?}")]
    InvalidThreads(String),

    #[error("Unknown output format {0:?} (expected decimal, binary or both)")]
    UnknownFormat(String),
}

/// How codewords are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Decimal,
    Binary,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn shows_decimal(self) -> bool {
        matches!(self, OutputFormat::Decimal | OutputFormat::Both)
    }

    pub fn shows_binary(self) -> bool {
        matches!(self, OutputFormat::Binary | OutputFormat::Both)
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "decimal" | "dec" => Ok(OutputFormat::Decimal),
            "binary" | "bin" => Ok(OutputFormat::Binary),
            "both" => Ok(OutputFormat::Both),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Configuration for one invocation of the encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Messages to encode, each into its own codeword
    pub messages: Vec<String>,
    /// Parity symbols per codeword
    pub parity_len: usize,
    pub format: OutputFormat,
    /// Threads for batch encoding (0 = auto-detect)
    pub threads: usize,
    pub verbose: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            messages: vec![DEFAULT_MESSAGE.to_string()],
            parity_len: DEFAULT_PARITY_LEN,
            format: OutputFormat::default(),
            threads: 0,
            verbose: false,
        }
    }
}

impl EncodeConfig {
    pub fn new(messages: Vec<String>, parity_len: usize) -> Self {
        Self {
            messages,
            parity_len,
            ..Self::default()
        }
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let messages = matches
            .get_many::<String>("messages")
            .map(|values| values.cloned().collect())
            .unwrap_or(defaults.messages);

        let parity_len = match matches.get_one::<String>("parity") {
            Some(raw) => parse_parity_len(raw)?,
            None => defaults.parity_len,
        };

        let format = match matches.get_one::<String>("format") {
            Some(raw) => raw.parse()?,
            None => defaults.format,
        };

        let threads = match matches.get_one::<String>("threads") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidThreads(raw.clone()))?,
            None => defaults.threads,
        };

        Ok(Self {
            messages,
            parity_len,
            format,
            threads,
            verbose: matches.get_flag("verbose"),
        })
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match self.threads {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            n => n,
        }
    }
}

fn parse_parity_len(raw: &str) -> Result<usize, ConfigError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidParityLength(raw.to_string()))?;
    usize::try_from(value).map_err(|_| ConfigError::NegativeParityLength(value))
}
