//! Command-line interface for qti-mapper

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use qti_mapper::config::MapperConfig;
#[cfg(feature = "cli")]
use qti_mapper::entities::{Question, QuestionType};
#[cfg(feature = "cli")]
use qti_mapper::export::{to_qti_xml, LongtextMapper};
#[cfg(feature = "cli")]
use qti_mapper::mapping::ItemMapper;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "qti-mapper")]
#[command(author, version, about = "Map QTI 2.x assessment items to items and questions", long_about = None)]
struct Cli {
    /// Log debug output (overridden by QTI_MAPPER_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Map a QTI assessment item to JSON
    Import {
        /// Path to the QTI item file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Mapper configuration as JSON
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a longtext question (JSON) to an extendedTextInteraction
    #[command(name = "export-longtext")]
    ExportLongtext {
        /// Path to the question JSON file
        #[arg(value_name = "JSON")]
        file: PathBuf,

        /// Response identifier (defaults to the question reference)
        #[arg(short, long)]
        identifier: Option<String>,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Import {
            file,
            config,
            pretty,
            output,
        } => cmd_import(file, config, pretty, output),
        Commands::ExportLongtext { file, identifier } => cmd_export_longtext(file, identifier),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("QTI_MAPPER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {}", e))?;
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_import(
    file: PathBuf,
    config: Option<PathBuf>,
    pretty: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => MapperConfig::from_file(path)?,
        None => MapperConfig::default(),
    };

    let mapping = ItemMapper::new().with_config(config).parse_file(&file)?;

    let json = if pretty {
        serde_json::to_string_pretty(&mapping)?
    } else {
        serde_json::to_string(&mapping)?
    };

    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_export_longtext(
    file: PathBuf,
    identifier: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&file)?;
    let question: Question = serde_json::from_str(&content)?;

    let QuestionType::Longtext(longtext) = &question.data else {
        return Err(format!(
            "Expected a longtext question, got {}",
            question.data.type_name()
        )
        .into());
    };

    let identifier = identifier.unwrap_or_else(|| question.reference.clone());
    let (interaction, _, _) = LongtextMapper::new().convert(longtext, &identifier, &question.reference)?;
    println!("{}", to_qti_xml(&interaction)?);
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
