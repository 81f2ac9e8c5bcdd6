mod config;

use base_x::{AlphabetsConfig, decode, encode};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use config::load_config;

#[derive(Parser)]
#[command(name = "base-x")]
#[command(version)]
#[command(about = "Encode and decode binary data with arbitrary-base alphabets", long_about = None)]
struct Cli {
    /// Alphabet to use for encoding/decoding
    #[arg(short, long, default_value = "base58")]
    alphabet: String,

    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// Treat encode input as hex text; print decoded output as hex
    #[arg(long)]
    hex: bool,

    /// Extra alphabets file, merged after the user and local overrides
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// List available alphabets
    #[arg(short, long)]
    list: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    if cli.list {
        list_alphabets(&config);
        return Ok(());
    }

    let alphabet = config.alphabet(&cli.alphabet)?;

    let input_data = if let Some(file_path) = &cli.file {
        fs::read(file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    if cli.decode {
        let input_str = String::from_utf8(input_data)
            .map_err(|_| "Input must be valid UTF-8 for decoding")?;
        // Whitespace that is part of the alphabet is data, not framing
        let trimmed = input_str
            .trim_matches(|c: char| c.is_whitespace() && alphabet.decode_char(c).is_none());
        let decoded = decode(trimmed, &alphabet)?;
        if cli.hex {
            println!("{}", hex::encode(&decoded));
        } else {
            io::stdout().write_all(&decoded)?;
        }
    } else {
        let data = if cli.hex {
            let text = String::from_utf8(input_data)
                .map_err(|_| "Hex input must be valid UTF-8")?;
            hex::decode(text.trim()).map_err(|e| format!("Invalid hex input: {}", e))?
        } else {
            input_data
        };
        println!("{}", encode(&data, &alphabet));
    }

    Ok(())
}

fn list_alphabets(config: &AlphabetsConfig) {
    println!("Available alphabets:\n");

    for name in config.names() {
        let Some(alphabet_config) = config.get_alphabet(&name) else {
            continue;
        };
        let char_count = alphabet_config.chars.chars().count();
        let preview: String = alphabet_config.chars.chars().take(20).collect();
        let suffix = if char_count > 20 { "..." } else { "" };
        println!("  {:<15} base-{:<3}  {}{}", name, char_count, preview, suffix);
    }
}
