use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use pcm_core::events::{PcmEvent, PcmObserver};
use pcm_core::{checksum, identify, key, registry};

#[derive(Parser, Debug)]
#[command(author, version, about = "GM PCM image tool", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Identify an image and report its operating system
    Info {
        /// Path to the .bin image
        image: String,
    },
    /// Validate an image's checksums
    Checksum {
        /// Path to the .bin image
        image: String,
    },
    /// Compute the unlock key for a seed
    Key {
        /// Seed/key algorithm number
        #[arg(long)]
        algorithm: u16,

        /// Seed reported by the module, e.g. 0x1234
        #[arg(long, value_parser = parse_seed)]
        seed: u16,
    },
}

fn parse_seed(text: &str) -> Result<u16, String> {
    let digits = text.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(digits, 16).map_err(|e| format!("bad seed {text:?}: {e}"))
}

/// Prints user-facing report lines to stdout; diagnostics go through
/// tracing like everything else.
struct ConsoleObserver;

impl PcmObserver for ConsoleObserver {
    fn on_event(&self, event: &PcmEvent) {
        match event {
            PcmEvent::UserMessage { message } => println!("{message}"),
            PcmEvent::DebugMessage { message } => tracing::debug!("{message}"),
            PcmEvent::Activity { description } => {
                tracing::info!(activity = %description, "Status");
            }
            _ => {}
        }
    }
}

fn main() {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(if args.verbose {
                    tracing::Level::DEBUG.into()
                } else {
                    tracing::Level::INFO.into()
                })
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(e) = run(&args.command) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Info { image } => info_command(image),
        Commands::Checksum { image } => checksum_command(image),
        Commands::Key { algorithm, seed } => {
            println!("{:04X}", key::compute_key(*algorithm, *seed));
            Ok(())
        }
    }
}

fn info_command(path: &str) -> Result<()> {
    let image = std::fs::read(path).with_context(|| format!("reading {path}"))?;
    let observer = ConsoleObserver;

    let pcm_type = identify::identify(&image, &observer);
    let osid = identify::read_osid(&image, pcm_type);
    let info = registry::lookup(osid);

    println!("File:          {path}");
    println!("Size:          {} bytes", image.len());
    println!("Hardware:      {pcm_type}");
    println!("OSID:          {osid}");
    println!("Description:   {}", info.description);
    println!("Key algorithm: {}", info.profile.key_algorithm);
    println!(
        "Supported:     {}",
        if info.profile.is_supported { "yes" } else { "no" }
    );
    Ok(())
}

fn checksum_command(path: &str) -> Result<()> {
    let image = std::fs::read(path).with_context(|| format!("reading {path}"))?;
    let observer = ConsoleObserver;

    let pcm_type = identify::identify(&image, &observer);
    let report = checksum::validate(&image, pcm_type, &observer);

    if report.is_valid() {
        println!("All checksums are good.");
        Ok(())
    } else {
        anyhow::bail!("checksum validation failed");
    }
}
