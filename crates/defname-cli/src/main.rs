//! defname CLI - canonical schema-definition names from the command line.

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;
mod output;

use commands::{name, parse, register};
use config::PolicyArgs;

#[derive(Parser)]
#[command(name = "defname")]
#[command(about = "Canonical schema-definition names for type descriptors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical name of a type descriptor
    Name {
        /// Type descriptor, e.g. `[]encoding/json.RawMessage`
        descriptor: String,
        /// Package the top-level type is declared in
        #[arg(long, default_value = "")]
        home: String,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Output name and reference as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the parsed tree of a type descriptor as JSON
    Parse {
        /// Type descriptor
        descriptor: String,
    },
    /// Build a definitions object from a JSON list of types and schemas
    Register {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        #[command(flatten)]
        policy: PolicyArgs,
    },
}

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Warning: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Name {
            descriptor,
            home,
            policy,
            json,
        } => name::run(descriptor, home, policy, json),
        Commands::Parse { descriptor } => parse::run(descriptor),
        Commands::Register { input, policy } => register::run(input, policy),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
