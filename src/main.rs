// src/main.rs

//! `simd-lanes`: print the lane views of a register given on the command line.
//!
//! Usage: `simd-lanes <word0> [word1 ...]`
//!
//! Words are 64-bit, least-significant first, in hex (`0x...`) or decimal.
//! Two, four or eight words select a 128, 256 or 512-bit register.

use anyhow::Context;
use log::{debug, info, warn};

use simd_lanes::config::{CONFIG, CONFIG_ENV_VAR};
use simd_lanes::register::parse_word;
use simd_lanes::render::render_set;
use simd_lanes::decompose_words;

fn main() -> anyhow::Result<()> {
    let config = &CONFIG.config;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.default_filter.as_str()),
    )
    .format_timestamp_micros()
    .init();

    if let Some(e) = &CONFIG.ignored {
        warn!("Ignoring configuration from {}: {}", CONFIG_ENV_VAR, e);
    }
    debug!("Configuration: {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        println!("usage: simd-lanes <word0> [word1 ...]");
        println!("  2, 4 or 8 64-bit words (hex with 0x prefix, or decimal), least-significant first");
        return Ok(());
    }

    let words = args
        .iter()
        .map(|arg| parse_word(arg))
        .collect::<Result<Vec<u64>, _>>()
        .context("Failed to parse register words")?;
    debug!("Parsed {} words: {:x?}", words.len(), words);

    let lanes = decompose_words(&words).context("Failed to decompose register")?;
    if !config.display.allows(lanes.width()) {
        anyhow::bail!(
            "{}-bit registers are disabled by configuration",
            lanes.width().bits()
        );
    }
    info!("Decomposed {}-bit register", lanes.width().bits());

    println!("{}", render_set(&lanes, &config.display));
    Ok(())
}
