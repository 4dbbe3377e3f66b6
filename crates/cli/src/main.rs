//! ContaLeve CLI - Document validation and formatting tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate a CPF or CNPJ (dispatches on digit count)
//! cl-cli doc validate "111.444.777-35"
//!
//! # Print the canonical mask of a document
//! cl-cli doc format 11222333000181
//!
//! # Format contact fields
//! cl-cli contact cep 01310930
//! cl-cli contact phone 11999998888
//!
//! # Monetary amounts
//! cl-cli amount mask 12345        # -> 123,45
//! cl-cli amount parse "1.234,56"  # -> 1234.56
//! cl-cli amount format 1234.56    # -> 1.234,56
//! ```
//!
//! # Commands
//!
//! - `doc` - Validate and format tax documents
//! - `contact` - Validate and format CEP and phone fields
//! - `amount` - Mask, parse, and format monetary amounts

#![cfg_attr(not(test), forbid(unsafe_code))]
// Command output belongs on stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cl-cli")]
#[command(author, version, about = "ContaLeve CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and format tax documents (CPF/CNPJ)
    Doc {
        #[command(subcommand)]
        action: DocAction,
    },
    /// Validate and format contact fields (CEP, phone)
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },
    /// Mask, parse, and format monetary amounts
    Amount {
        #[command(subcommand)]
        action: AmountAction,
    },
}

#[derive(Subcommand)]
enum DocAction {
    /// Validate a CPF or CNPJ (dispatches on digit count)
    Validate {
        /// Document value, with or without punctuation
        value: String,
    },
    /// Print the canonical mask of a valid document
    Format {
        /// Document value, with or without punctuation
        value: String,
    },
}

#[derive(Subcommand)]
enum ContactAction {
    /// Validate and format a CEP
    Cep {
        /// Postal code, with or without punctuation
        value: String,
    },
    /// Validate and format a phone number
    Phone {
        /// Phone number, with or without punctuation
        value: String,
    },
}

#[derive(Subcommand)]
enum AmountAction {
    /// Run the keystroke currency mask over raw input
    Mask {
        /// Raw field input (digits are read as centavos)
        value: String,
    },
    /// Parse a localized amount into its canonical decimal
    Parse {
        /// Localized amount, e.g. "1.234,56"
        value: String,
    },
    /// Render a canonical decimal in localized form
    Format {
        /// Canonical decimal, e.g. "1234.56"
        value: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Doc { action } => match action {
            DocAction::Validate { value } => println!("{}", commands::doc::validate(&value)?),
            DocAction::Format { value } => println!("{}", commands::doc::format(&value)?),
        },
        Commands::Contact { action } => match action {
            ContactAction::Cep { value } => println!("{}", commands::contact::cep(&value)?),
            ContactAction::Phone { value } => println!("{}", commands::contact::phone(&value)?),
        },
        Commands::Amount { action } => match action {
            AmountAction::Mask { value } => println!("{}", commands::amount::mask(&value)),
            AmountAction::Parse { value } => println!("{}", commands::amount::parse(&value)),
            AmountAction::Format { value } => println!("{}", commands::amount::format(&value)?),
        },
    }
    Ok(())
}
