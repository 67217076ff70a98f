use reedsol::args::command;
use reedsol::config::{DEFAULT_MESSAGE, DEFAULT_PARITY_LEN};
use reedsol::{ConfigError, EncodeConfig, OutputFormat};

fn config_from(args: &[&str]) -> Result<EncodeConfig, ConfigError> {
    let matches = command()
        .try_get_matches_from(std::iter::once("reedsol").chain(args.iter().copied()))
        .unwrap();
    EncodeConfig::from_args(&matches)
}

#[test]
fn test_default_config() {
    let config = EncodeConfig::default();
    assert_eq!(config.messages, vec![DEFAULT_MESSAGE.to_string()]);
    assert_eq!(config.parity_len, 12);
    assert_eq!(config.format, OutputFormat::Both);
    assert_eq!(config.threads, 0);
    assert!(!config.verbose);
}

#[test]
fn test_new_config() {
    let config = EncodeConfig::new(vec!["abc".to_string()], 4);
    assert_eq!(config.messages, vec!["abc".to_string()]);
    assert_eq!(config.parity_len, 4);
    assert_eq!(config.format, OutputFormat::Both);
}

#[test]
fn test_no_args_uses_defaults() {
    assert_eq!(config_from(&[]).unwrap(), EncodeConfig::default());
}

#[test]
fn test_all_args() {
    let config = config_from(&["one", "two", "-n", "8", "-f", "binary", "-t", "3", "-v"]).unwrap();
    assert_eq!(config.messages, vec!["one".to_string(), "two".to_string()]);
    assert_eq!(config.parity_len, 8);
    assert_eq!(config.format, OutputFormat::Binary);
    assert_eq!(config.threads, 3);
    assert!(config.verbose);
}

#[test]
fn test_long_flags() {
    let config = config_from(&["--parity", "0", "--format", "decimal"]).unwrap();
    assert_eq!(config.parity_len, 0);
    assert_eq!(config.format, OutputFormat::Decimal);
    assert_eq!(config.messages, vec![DEFAULT_MESSAGE.to_string()]);
}

#[test]
fn test_negative_parity_rejected() {
    assert_eq!(
        config_from(&["--parity=-3"]),
        Err(ConfigError::NegativeParityLength(-3))
    );
}

#[test]
fn test_garbage_parity_rejected() {
    assert_eq!(
        config_from(&["-n", "twelve"]),
        Err(ConfigError::InvalidParityLength("twelve".to_string()))
    );
}

#[test]
fn test_bad_threads_rejected() {
    assert_eq!(
        config_from(&["-t", "many"]),
        Err(ConfigError::InvalidThreads("many".to_string()))
    );
}

#[test]
fn test_unknown_format_rejected() {
    assert_eq!(
        config_from(&["-f", "hex"]),
        Err(ConfigError::UnknownFormat("hex".to_string()))
    );
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("DECIMAL".parse(), Ok(OutputFormat::Decimal));
    assert_eq!("bin".parse(), Ok(OutputFormat::Binary));
    assert_eq!("both".parse(), Ok(OutputFormat::Both));
    assert!(OutputFormat::Both.shows_decimal() && OutputFormat::Both.shows_binary());
    assert!(!OutputFormat::Decimal.shows_binary());
    assert!(!OutputFormat::Binary.shows_decimal());
}

#[test]
fn test_effective_threads() {
    let mut config = EncodeConfig::default();
    assert!(config.effective_threads() >= 1);
    config.threads = 6;
    assert_eq!(config.effective_threads(), 6);
}

#[test]
fn test_default_parity_constant() {
    assert_eq!(DEFAULT_PARITY_LEN, 12);
}
