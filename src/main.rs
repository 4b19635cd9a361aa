//! Command-line front end: reads text, normalises it and prints the
//! enciphered result.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use enigma::{alphabet, parse_settings, MachineBuilder, Plugboard, RotorCatalog};

/// Three-rotor cipher machine. Enciphering and deciphering are the same
/// operation with the same settings.
#[derive(Debug, Parser)]
#[command(name = "enigma", version, about)]
struct Cli {
    /// Left, middle and right rotors, comma separated.
    #[arg(long, default_value = "I,II,III", value_delimiter = ',')]
    rotors: Vec<String>,

    /// Reflector name.
    #[arg(long, default_value = "B")]
    reflector: String,

    /// Ring settings as three letters.
    #[arg(long, default_value = "AAA")]
    rings: String,

    /// Starting positions as three letters.
    #[arg(long, default_value = "AAA")]
    positions: String,

    /// Plugboard pairs, e.g. "AB CD EF".
    #[arg(long, default_value = "")]
    plugs: String,

    /// Reject malformed wirings and reused plug letters before running.
    #[arg(long)]
    strict: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Text to encipher; read from stdin when omitted.
    text: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let rotors: Vec<String> = cli
        .rotors
        .iter()
        .map(|r| r.trim().to_ascii_uppercase())
        .collect();
    let [left, middle, right] = <[String; 3]>::try_from(rotors)
        .map_err(|names| anyhow::anyhow!("expected three rotors, got {}", names.len()))?;

    let rings = parse_settings(&cli.rings.to_ascii_uppercase()).context("invalid --rings")?;
    let positions =
        parse_settings(&cli.positions.to_ascii_uppercase()).context("invalid --positions")?;
    let plugs =
        Plugboard::parse_pairs(&cli.plugs.to_ascii_uppercase()).context("invalid --plugs")?;

    let builder = MachineBuilder::with_catalog(RotorCatalog::standard())
        .rotors(&left, &middle, &right)
        .reflector(&cli.reflector.to_ascii_uppercase())
        .rings(rings)
        .positions(positions)
        .plugs(&plugs);

    if cli.strict {
        builder.validate().context("configuration rejected")?;
    }
    let mut machine = builder.build().context("failed to build machine")?;

    let raw = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let normalized = alphabet::normalize(&raw);
    if normalized.is_empty() {
        println!("No valid text (A-Z) found.");
        return Ok(());
    }

    info!("enciphering {} letters from {}", normalized.len(), machine.window());
    let ciphertext = machine.encrypt_text(&normalized);
    println!("Normalized text (A-Z): {}", normalized);
    println!("Ciphertext:            {}", ciphertext);
    Ok(())
}
