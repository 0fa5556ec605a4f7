//! Command-line interface for the facekid block cipher and digest.

#![forbid(unsafe_code)]

mod logging;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cipher_core::{Block, BlockCipher, CipherKey, Profile};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

/// facekid cipher and digest CLI.
#[derive(Parser)]
#[command(
    name = "facekid",
    version,
    author,
    about = "Single-block 128-bit cipher and 128-bit message digest"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        /// Cipher key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Round structure to use.
        #[arg(long, value_enum, default_value_t = ProfileArg::Reduced)]
        profile: ProfileArg,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// Cipher key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Round structure to use.
        #[arg(long, value_enum, default_value_t = ProfileArg::Reduced)]
        profile: ProfileArg,
    },
    /// Print the 128-bit digest of a string or file.
    Digest {
        /// Message text.
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        text: Option<String>,
        /// File whose contents are digested.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Encrypt and decrypt a random block, then digest the plaintext.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Round structure to use.
        #[arg(long, value_enum, default_value_t = ProfileArg::Reduced)]
        profile: ProfileArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    /// Key used once, no column mixing.
    Reduced,
    /// Standard AES-128.
    Fips197,
}

impl From<ProfileArg> for Profile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Reduced => Profile::REDUCED,
            ProfileArg::Fips197 => Profile::FIPS197,
        }
    }
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            block_hex,
            profile,
        } => cmd_enc(&key_hex, &block_hex, profile),
        Commands::Dec {
            key_hex,
            block_hex,
            profile,
        } => cmd_dec(&key_hex, &block_hex, profile),
        Commands::Digest { text, input } => cmd_digest(text, input),
        Commands::Demo { seed, profile } => cmd_demo(seed, profile),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str, profile: ProfileArg) -> Result<()> {
    let cipher = BlockCipher::with_profile(&parse_key_hex(key_hex)?, profile.into());
    let block = parse_block_hex(block_hex)?;
    debug!(?profile, "encrypting block");
    println!("{}", hex::encode(cipher.encrypt_block(&block)));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str, profile: ProfileArg) -> Result<()> {
    let cipher = BlockCipher::with_profile(&parse_key_hex(key_hex)?, profile.into());
    let block = parse_block_hex(block_hex)?;
    debug!(?profile, "decrypting block");
    println!("{}", hex::encode(cipher.decrypt_block(&block)));
    Ok(())
}

fn cmd_digest(text: Option<String>, input: Option<PathBuf>) -> Result<()> {
    let message = match (text, input) {
        (Some(text), _) => text.into_bytes(),
        (None, Some(path)) => {
            fs::read(&path).with_context(|| format!("read {}", path.display()))?
        }
        (None, None) => bail!("either --text or --input is required"),
    };
    debug!(len = message.len(), "digesting message");
    let hash = digest_core::digest(&message).context("compute digest")?;
    println!("{hash}");
    Ok(())
}

fn cmd_demo(seed: Option<u64>, profile: ProfileArg) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let cipher = BlockCipher::with_profile(&CipherKey::from(key_bytes), profile.into());
    let ciphertext = cipher.encrypt_block(&block);
    let decrypted = cipher.decrypt_block(&ciphertext);
    let hash = digest_core::digest(&block).context("digest plaintext")?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    println!("plaintext digest: {hash}");
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    info!(?profile, "demo roundtrip succeeded");
    Ok(())
}

fn parse_hex16(label: &str, hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {label} hex"))?;
    let Ok(array) = <[u8; 16]>::try_from(bytes.as_slice()) else {
        bail!(
            "{label} must be 16 bytes (32 hex characters), got {}",
            bytes.len()
        );
    };
    Ok(array)
}

fn parse_key_hex(hex_str: &str) -> Result<CipherKey> {
    parse_hex16("key", hex_str).map(CipherKey::from)
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    parse_hex16("block", hex_str)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
