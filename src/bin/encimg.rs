//! encimg CLI
//!
//! Usage:
//!   encimg encrypt <input> <key_file> <output>
//!   encimg decrypt <input> <key_file> <output>
//!   encimg generate-ecc-key [--out-dir <dir>] [--seed-file <file>]
//!   encimg generate-rsa-key [--out-dir <dir>]
//!   encimg inspect <input>

use clap::{Parser, Subcommand};
use encimg_rs::keys::load_device_seed;
use encimg_rs::{
    decrypt_file, encrypt_file, generate_ecc_keypair, generate_rsa_keypair, inspect_file,
    EncImgError, EncryptOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Encrypted firmware image tool (RSA-3072 or ECC-256 + AES-256-GCM)
#[derive(Parser)]
#[command(name = "encimg")]
#[command(version)]
#[command(about = "Encrypt and decrypt firmware images in the pre-encrypted OTA format", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a binary; the scheme follows the key type
    Encrypt {
        /// Input file to encrypt
        input: PathBuf,
        /// Recipient key (PEM, public or private, RSA-3072 or P-256)
        key_file: PathBuf,
        /// Output file for the encrypted image
        output: PathBuf,
    },
    /// Decrypt an encrypted image
    Decrypt {
        /// Encrypted image
        input: PathBuf,
        /// Private key (PEM)
        key_file: PathBuf,
        /// Output file for the decrypted binary
        output: PathBuf,
    },
    /// Generate an ECC-256 device key pair and its seed
    GenerateEccKey {
        /// Directory for the key files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Existing 32-byte device seed instead of a random one
        #[arg(long)]
        seed_file: Option<PathBuf>,
    },
    /// Generate an RSA-3072 key pair
    GenerateRsaKey {
        /// Directory for the key files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the header of an encrypted image
    Inspect {
        /// Encrypted image
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("encimg=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Commands) -> Result<(), EncImgError> {
    match command {
        Commands::Encrypt {
            input,
            key_file,
            output,
        } => {
            tracing::info!(input = %input.display(), "encrypting image");
            let summary = encrypt_file(&input, Some(&key_file), &output, &EncryptOptions::new())?;
            tracing::info!(
                scheme = %summary.scheme,
                container_len = summary.container_len,
                "wrote {}",
                output.display()
            );
            println!("Done");
        }
        Commands::Decrypt {
            input,
            key_file,
            output,
        } => {
            tracing::info!(input = %input.display(), "decrypting image");
            let summary = decrypt_file(&input, &key_file, &output)?;
            println!("Binary size: {}", summary.plaintext_len);
            println!("Done");
        }
        Commands::GenerateEccKey { out_dir, seed_file } => {
            let seed = seed_file.as_deref().map(load_device_seed).transpose()?;
            let files = generate_ecc_keypair(&out_dir, seed)?;
            println!("{}", files.private_key.display());
            println!("{}", files.public_key.display());
            if let Some(seed) = files.seed {
                println!("{}", seed.display());
            }
            println!("Key generation completed successfully");
        }
        Commands::GenerateRsaKey { out_dir } => {
            let files = generate_rsa_keypair(&out_dir)?;
            println!("{}", files.private_key.display());
            println!("{}", files.public_key.display());
            println!("Key generation completed successfully");
        }
        Commands::Inspect { input } => {
            let header = inspect_file(&input)?;
            println!("{header}");
        }
    }
    Ok(())
}
