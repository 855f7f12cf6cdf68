//! Bech32 CLI
//!
//! Command-line interface for encoding, decoding and checking Bech32 strings.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bech32_codec::{decode, decode_checked, encode, from_base32, strip_unknown_chars, to_base32, verify};
use bech32_core::HrpAndDp;

/// Bech32 - BIP-0173 encoder, decoder and checksum verifier
#[derive(Parser)]
#[command(name = "bech32")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a human-readable part and data values into a Bech32 string
    Encode {
        /// Human-readable part
        #[arg(long, env = "BECH32_HRP")]
        hrp: String,
        /// Data values, each in 0..=31
        #[arg(conflicts_with = "hex", required_unless_present = "hex")]
        values: Vec<u8>,
        /// Arbitrary bytes (hex), regrouped into 5-bit values before encoding
        #[arg(long)]
        hex: Option<String>,
    },

    /// Decode a Bech32 string into its human-readable part and data values
    Decode {
        /// Bech32 string
        input: String,
        /// Treat a checksum mismatch as an error
        #[arg(long)]
        strict: bool,
        /// Also regroup the data values into bytes
        #[arg(long)]
        bytes: bool,
    },

    /// Check whether a Bech32 string carries a valid checksum
    Verify {
        /// Bech32 string
        input: String,
    },

    /// Drop every character that cannot appear in a Bech32 string
    Strip {
        /// Text to sanitize
        input: String,
    },
}

#[derive(Serialize)]
struct EncodeOutput {
    encoded: String,
}

#[derive(Serialize)]
struct DecodeOutput {
    #[serde(flatten)]
    pair: HrpAndDp,
    checksum_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<String>,
}

#[derive(Serialize)]
struct VerifyOutput {
    valid: bool,
}

#[derive(Serialize)]
struct StripOutput {
    stripped: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json);

    match cli.command {
        Commands::Encode { hrp, values, hex } => cmd_encode(&hrp, values, hex.as_deref(), cli.json),
        Commands::Decode { input, strict, bytes } => cmd_decode(&input, strict, bytes, cli.json),
        Commands::Verify { input } => cmd_verify(&input, cli.json),
        Commands::Strip { input } => cmd_strip(&input, cli.json),
    }
}

/// Logs go to stderr, as JSON lines when results are printed as JSON.
fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        "bech32_codec=debug,bech32_cli=debug,info"
    } else {
        "warn"
    };

    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }
}

/// Resolve the data part from either explicit values or hex bytes.
fn data_values(values: Vec<u8>, hex_input: Option<&str>) -> Result<Vec<u8>> {
    match hex_input {
        Some(h) => {
            let bytes = hex::decode(h.strip_prefix("0x").unwrap_or(h)).context("Invalid hex input")?;
            debug!(bytes = bytes.len(), "regrouping hex input into 5-bit values");
            Ok(to_base32(&bytes))
        }
        None => Ok(values),
    }
}

/// Encode command
fn cmd_encode(hrp: &str, values: Vec<u8>, hex_input: Option<&str>, json: bool) -> Result<()> {
    let dp = data_values(values, hex_input)?;
    let encoded = encode(hrp, &dp).context("Failed to encode")?;

    if json {
        print_json(&EncodeOutput { encoded })
    } else {
        println!("{}", encoded.green().bold());
        Ok(())
    }
}

fn decode_output(input: &str, strict: bool, bytes: bool) -> Result<DecodeOutput> {
    let pair = if strict {
        decode_checked(input).context("Failed to decode")?
    } else {
        decode(input).context("Failed to decode")?
    };

    let bytes = if bytes && !pair.is_empty() {
        let raw = from_base32(&pair.dp).context("Data part does not regroup into bytes")?;
        Some(hex::encode(raw))
    } else {
        None
    };

    Ok(DecodeOutput {
        checksum_valid: !pair.is_empty(),
        pair,
        bytes,
    })
}

/// Decode command
fn cmd_decode(input: &str, strict: bool, bytes: bool, json: bool) -> Result<()> {
    let out = decode_output(input, strict, bytes)?;

    if json {
        return print_json(&out);
    }

    if !out.checksum_valid {
        println!("{}", "Checksum mismatch: no data recovered".yellow().bold());
        return Ok(());
    }

    println!("{} {}", "HRP:".dimmed(), out.pair.hrp.cyan());
    let values: Vec<String> = out.pair.dp.iter().map(u8::to_string).collect();
    println!("{} [{}]", "Data:".dimmed(), values.join(", "));
    if let Some(b) = &out.bytes {
        println!("{} {}", "Bytes:".dimmed(), b);
    }

    Ok(())
}

/// Verify command
fn cmd_verify(input: &str, json: bool) -> Result<()> {
    let valid = verify(input).context("Malformed Bech32 string")?;

    if json {
        print_json(&VerifyOutput { valid })?;
    } else if valid {
        println!("{}", "Checksum valid".green().bold());
    } else {
        println!("{}", "Checksum invalid".red().bold());
    }

    if !valid {
        bail!("checksum verification failed for {input}");
    }
    Ok(())
}

/// Strip command
fn cmd_strip(input: &str, json: bool) -> Result<()> {
    let stripped = strip_unknown_chars(input);

    if json {
        print_json(&StripOutput { stripped })
    } else {
        println!("{stripped}");
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
