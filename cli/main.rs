use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use veilpack::{config, pack::Packer};

/// VeilPack - Compress and obfuscate binaries into opaque blobs
#[derive(Parser)]
#[command(name = "veilpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "veilpack.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compress and encrypt a binary into an opaque blob
    Pack {
        /// Input file to pack
        input: PathBuf,

        /// Output blob path
        output: PathBuf,
    },

    /// Decrypt and decompress a blob back into the original binary
    Unpack {
        /// Input blob to unpack
        input: PathBuf,

        /// Output file path
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging
    // Use RUST_LOG environment variable to control log level (e.g., RUST_LOG=info,veilpack=debug)
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();
    info!(command = ?cli.command, "VeilPack starting");

    let cfg = config::Config::load_with_env(Some(&cli.config))?;
    let packer = Packer::new(cfg.passphrase);

    match cli.command {
        Commands::Pack { input, output } => cmd_pack(&packer, &input, &output).await,
        Commands::Unpack { input, output } => cmd_unpack(&packer, &input, &output).await,
    }
}

/// Create a spinner for indeterminate operations
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Pack a file into an opaque blob
async fn cmd_pack(packer: &Packer, input: &PathBuf, output: &PathBuf) -> Result<()> {
    let spinner = create_spinner(&format!("Packing {}...", input.display()));

    let summary = packer.pack_file(input, output).await?;

    spinner.finish_with_message(format!(
        "Packed {} bytes -> {} bytes",
        summary.input_bytes, summary.output_bytes
    ));
    println!("  {} -> {}", input.display(), output.display());
    Ok(())
}

/// Unpack a blob back into the original file
async fn cmd_unpack(packer: &Packer, input: &PathBuf, output: &PathBuf) -> Result<()> {
    let spinner = create_spinner(&format!("Unpacking {}...", input.display()));

    let summary = packer.unpack_file(input, output).await?;

    spinner.finish_with_message(format!(
        "Unpacked {} bytes -> {} bytes",
        summary.input_bytes, summary.output_bytes
    ));
    println!("  {} -> {}", input.display(), output.display());
    Ok(())
}
