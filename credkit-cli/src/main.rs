//! credkit - Main Entry Point
//!
//! Command line access to the credential codec: namespace storage slots,
//! schema hashes and field-element string chunks.
//!
//! Usage:
//!     credkit slot anonaadhaar.storage.AnonAadhaarBalanceCredentialIssuer
//!     credkit schema --url https://example.com/ctx.jsonld --type ExampleCredential
//!     credkit decode --order le 452723500356

mod commands;

use clap::{Parser, Subcommand};
use commands::OrderArg;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "credkit")]
#[command(about = "Storage slots, schema hashes and field-element chunks for credential issuers")]
#[command(version)]
struct Args {
    /// Log level (debug, info, warn, error); RUST_LOG overrides it
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Print results as a JSON object
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Keccak-256 of a UTF-8 string
    Keccak { text: String },

    /// ABI-encode one uint256 (decimal or 0x hex) as a 32-byte word
    EncodeUint { value: String },

    /// Storage slot for a contract namespace
    Slot { namespace: String },

    /// Schema hash for a JSON-LD context URL and credential type
    Schema {
        /// JSON-LD context URL
        #[arg(long)]
        url: String,

        /// Credential type name
        #[arg(long = "type")]
        type_name: String,
    },

    /// Decode field-element chunks (decimal or 0x hex) into a string
    Decode {
        /// Byte order inside each chunk
        #[arg(long, value_enum, default_value_t = OrderArg::Be)]
        order: OrderArg,

        chunks: Vec<String>,
    },

    /// Pack a string into field-element chunks, one per line
    Pack {
        /// Byte order inside each chunk
        #[arg(long, value_enum, default_value_t = OrderArg::Be)]
        order: OrderArg,

        text: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: credkit panicked");
        eprintln!(
            "  Location: {}",
            panic_info
                .location()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );
        eprintln!(
            "  Message: {}",
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .unwrap_or(&"<no message>")
        );
    }));

    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&args.log_level)));

    // stdout carries results only
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    debug!("credkit {}", env!("CARGO_PKG_VERSION"));

    let output = match args.command {
        Command::Keccak { text } => commands::keccak_text(&text, args.json),
        Command::EncodeUint { value } => commands::encode_uint(&value, args.json)?,
        Command::Slot { namespace } => commands::slot(&namespace, args.json),
        Command::Schema { url, type_name } => commands::schema(&url, &type_name, args.json),
        Command::Decode { order, chunks } => commands::decode(&chunks, order, args.json)?,
        Command::Pack { order, text } => commands::pack(&text, order, args.json)?,
    };

    println!("{output}");
    Ok(())
}

/// Filter directive for `--log-level`; unknown levels fall back to warn.
fn default_directive(log_level: &str) -> &'static str {
    match log_level {
        "debug" => "debug",
        "info" => "info",
        "error" => "error",
        _ => "warn",
    }
}
