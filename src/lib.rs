pub mod args;
pub mod binary;
pub mod config;
pub mod reed_solomon;

pub use args::parse_args;
pub use binary::{format_binary, format_decimal, to_binary_digits};
pub use config::{ConfigError, EncodeConfig, OutputFormat};
pub use reed_solomon::{Codeword, GaloisField, Polynomial, RsError, SystematicEncoder};
