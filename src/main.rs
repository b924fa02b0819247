//! otpin - TOTP authenticator CLI tool
//!
//! A command-line tool for minting authenticator secrets and for
//! generating and verifying the matching time-based one-time pins.

use clap::{Parser, Subcommand};
use otpin_core::{error::OtpinError, init_logging};

mod cli;

#[derive(Parser)]
#[command(name = "otpin")]
#[command(about = "Generate and verify TOTP authenticator pins")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save default account and issuer settings
    Setup,
    /// Mint a new secret and print its Base32 form and provisioning URI
    New {
        /// Secret length in characters
        #[arg(long)]
        length: Option<usize>,
    },
    /// Print the current 6-digit pin for a secret
    Pin {
        /// Base32-encoded secret (prompted for when omitted)
        secret: Option<String>,
        /// Treat the secret as raw ASCII instead of Base32
        #[arg(long)]
        ascii: bool,
    },
    /// Check a pin against the current one for a secret
    Verify {
        /// The 6-digit pin to check
        pin: String,
        /// Base32-encoded secret (prompted for when omitted)
        secret: Option<String>,
        /// Treat the secret as raw ASCII instead of Base32
        #[arg(long)]
        ascii: bool,
    },
    /// Print the otpauth:// provisioning URI for a secret
    Uri {
        /// Base32-encoded secret (prompted for when omitted)
        secret: Option<String>,
        /// Treat the secret as raw ASCII instead of Base32
        #[arg(long)]
        ascii: bool,
        /// Account label (defaults to the configured account)
        #[arg(long)]
        account: Option<String>,
        /// Issuer label (defaults to the configured issuer)
        #[arg(long)]
        issuer: Option<String>,
    },
}

fn main() {
    // Initialize logging
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup => cli::setup::run_setup(),
        Commands::New { length } => cli::new::run_new(length),
        Commands::Pin { secret, ascii } => cli::pin::run_pin(secret.as_deref(), ascii),
        Commands::Verify { pin, secret, ascii } => {
            cli::verify::run_verify(&pin, secret.as_deref(), ascii)
        }
        Commands::Uri {
            secret,
            ascii,
            account,
            issuer,
        } => cli::uri::run_uri(secret.as_deref(), ascii, account.as_deref(), issuer.as_deref()),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration and input errors (exit code 2)
                OtpinError::Config(_) | OtpinError::Toml(_) | OtpinError::TomlSerialize(_) => 2,
                OtpinError::Codec(_) | OtpinError::Otp(_) => 2,
                // IO errors (exit code 1 - runtime)
                OtpinError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
