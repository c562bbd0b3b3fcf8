//! Zeta PRNG command-line driver
//!
//! Thin wrapper around `zeta_prng_core::generate`: resolves the seed and
//! config, generates, and prints the sequence.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use zeta_prng_core::{generate_with_config, GeneratorConfig, Seed};

#[derive(Parser, Debug)]
#[command(
    name = "zeta-prng",
    author,
    version,
    about = "Deterministic integers from Riemann zeta zeros and SHA-256 (not for cryptographic use)"
)]
struct Cli {
    /// Seed text, used verbatim in every hash key
    #[arg(long, default_value = "12345")]
    seed: String,

    /// Number of values to generate [default: 10]
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Exclusive upper bound on values [default: 4294967296]
    #[arg(long, allow_negative_numbers = true)]
    modulus: Option<i128>,

    /// JSON file with `count` and `modulus`; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the sequence as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(modulus) = self.modulus {
            config.modulus = modulus;
        }
        Ok(config)
    }
}

/// Render values the way the original driver printed them: `[a, b, c]`
fn format_sequence(values: &[u128]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn run(cli: &Cli) -> Result<String> {
    let config = cli.resolve_config()?;
    debug!(
        seed = %cli.seed,
        count = config.count,
        modulus = %config.modulus,
        config_hash = %config.config_hash()?,
        "resolved configuration"
    );

    let values = generate_with_config(Seed::from(cli.seed.as_str()), &config)
        .context("generation failed")?;
    info!(count = values.len(), "generated sequence");

    if cli.json {
        Ok(serde_json::to_string(&values)?)
    } else {
        Ok(format!("Generated Random Numbers: {}", format_sequence(&values)))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let output = run(&cli)?;
    println!("{}", output);
    Ok(())
}
