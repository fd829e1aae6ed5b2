use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use anyhow::Result;
use apiref_flatten::FlattenOptions;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use itertools::Itertools;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

// Use mimalloc for better performance on allocation-heavy runs; large
// reflection documents deserialize into many small strings.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Turn typedoc reflection JSON into the flattened entry list the API
/// reference pages render.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten a reflection document into documentation entries
    ///
    /// Reads the documentation generator's JSON output and produces a
    /// JSON array of renderable entries in declaration order.
    Flatten {
        /// Path to the reflection JSON document
        schema_path: String,

        /// Output file path (writes to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// Skip members inherited from base classes
        #[arg(long)]
        own_members: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize structured logging. Output goes to stderr so JSON output
    // on stdout remains clean for piping. Default to warn, allowlist our crates.
    const CRATES: &[&str] = &["apiref", "apiref_flatten", "apiref_schemas"];
    let level = cli.verbose.tracing_level_filter();
    let allowlist = CRATES.iter().map(|c| format!("{c}={level}")).join(",");
    let filter = EnvFilter::new(format!("warn,{allowlist}"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
        .init();

    match cli.command {
        Commands::Flatten {
            schema_path,
            output,
            own_members,
        } => {
            let input = BufReader::new(File::open(schema_path)?);

            // Lock stdout once up front rather than on each write call.
            // Stdout must outlive the lock, so we bind it here first.
            let stdout = std::io::stdout();
            let mut writer: Box<dyn Write> = match output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(stdout.lock()),
            };

            let options = FlattenOptions {
                own_members_only: own_members,
            };
            apiref_flatten::run(input, &mut *writer, &options)?;
            Ok(())
        }
    }
}
