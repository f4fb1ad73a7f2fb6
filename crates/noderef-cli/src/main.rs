//! noderef CLI - encode and decode opaque global object identifiers.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{decode, encode};

#[derive(Parser)]
#[command(name = "noderef")]
#[command(about = "Encode and decode opaque global object identifiers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce the identifier string for a (type, id) pair
    Encode {
        /// Entity type name
        type_name: String,
        /// Local, type-scoped key
        id: String,
        /// Return the bare local key instead of a global token
        #[arg(long)]
        local: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a global token back into its type and id
    Decode {
        /// Opaque global token
        token: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            type_name,
            id,
            local,
            json,
        } => encode::run(type_name, id, local, json),
        Commands::Decode { token, json } => decode::run(token, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
