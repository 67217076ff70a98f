//! `reedsol` binary - encode messages and print their codewords

use anyhow::{Context, Result};
use log::{debug, warn};
use reedsol::reed_solomon::text_to_message;
use reedsol::{format_binary, format_decimal, EncodeConfig, SystematicEncoder};

fn main() -> Result<()> {
    let matches = reedsol::parse_args();
    let config = EncodeConfig::from_args(&matches).context("Invalid arguments")?;

    let mut logger = env_logger::Builder::from_default_env();
    logger
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if config.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let threads = config.effective_threads();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .unwrap_or_else(|_| {
            warn!("Could not set thread count to {}, using default", threads);
        });

    let messages = config
        .messages
        .iter()
        .map(|text| {
            text_to_message(text).with_context(|| format!("Cannot encode message {:?}", text))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("{:?}", config);

    let encoder = SystematicEncoder::default();
    let codewords = encoder.encode_batch(&messages, config.parity_len);

    for (text, codeword) in config.messages.iter().zip(&codewords) {
        if config.messages.len() > 1 {
            println!("{}:", text);
        }
        if config.format.shows_decimal() {
            println!("decimal: {}", format_decimal(codeword.as_bytes()));
        }
        if config.format.shows_binary() {
            println!("binary:  [{}]", format_binary(codeword.as_bytes()).join(", "));
        }
    }

    Ok(())
}
