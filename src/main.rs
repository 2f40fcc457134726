use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use classes_from_data::{DiagramOptions, Direction};

/// Generate a PlantUML class diagram from the structure of a JSON or XML file
#[derive(Debug, clap::Parser)]
#[command(name = "classes-from-data", version)]
struct Cli {
    /// Input document (.json or .xml)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory, created if it does not exist
    #[arg(short, long)]
    output: PathBuf,

    /// Direction of the connections: up, down, left or right
    #[arg(short, long)]
    direction: Option<Direction>,

    /// Add a mirrored copy of every nested class
    #[arg(short, long)]
    mirror: bool,

    /// Also write the log to a file in this directory
    #[arg(long)]
    log_directory: Option<PathBuf>,
}

fn setup_logging(log_directory: Option<&Path>) -> anyhow::Result<flexi_logger::LoggerHandle> {
    let logger = flexi_logger::Logger::try_with_env_or_str("warn,classes_from_data=info")?;
    let logger = match log_directory {
        Some(directory) => logger
            .log_to_file(
                flexi_logger::FileSpec::default()
                    .directory(directory)
                    .basename("classes-from-data")
                    .use_timestamp(false),
            )
            .duplicate_to_stderr(flexi_logger::Duplicate::All)
            .format_for_files(flexi_logger::detailed_format),
        None => logger.log_to_stderr(),
    };
    let handle = logger
        .format_for_stderr(flexi_logger::colored_detailed_format)
        .set_palette("b1;3;2;4;6".to_string())
        .start()?;
    Ok(handle)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = setup_logging(cli.log_directory.as_deref())?;
    log::debug!("Starting classes-from-data!");

    let options = DiagramOptions {
        direction: cli.direction.unwrap_or_default(),
        mirror: cli.mirror,
    };
    let written = classes_from_data::convert(&cli.input, &cli.output, &options)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    let name = written.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("Successfully created {} in {}", name, cli.output.display());
    Ok(())
}
