//! dtrlog - DTR change logs and development component references
//!
//! Binary entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use dtrlog::changelog::{ChangeLogParser, ChangeLogWriter};
use dtrlog::config::AppConfig;
use dtrlog::dcupdater::{
    ComponentConfigurationReader, LineConfigurationReader, XmlConfigurationReader,
};
use dtrlog::model::BuildHandle;
use dtrlog::report;

#[derive(Debug, Parser)]
#[command(name = "dtrlog", version, about)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Job the change log belongs to
    #[arg(long, global = true, default_value = "build")]
    job: String,

    /// Build number the change log belongs to
    #[arg(long, global = true, default_value_t = 0)]
    build: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a persisted change log
    Show { changelog: PathBuf },

    /// Parse a persisted change log and write it to another file
    Copy { input: PathBuf, output: PathBuf },

    /// List the public part references a development component declares
    Refs {
        /// Base directory of the development component
        component: PathBuf,

        /// Format of the configuration file
        #[arg(long, value_enum, default_value_t = Format::Xml)]
        format: Format,

        /// Configuration file location relative to the component base
        #[arg(long)]
        location: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Xml,
    Line,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = AppConfig::load();
    init_tracing(cli.verbose, &config.log_filter);
    run(cli, &config)
}

fn init_tracing(verbose: bool, log_filter: &str) {
    let filter = if verbose { "debug" } else { log_filter };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, config: &AppConfig) -> color_eyre::Result<()> {
    let build = BuildHandle::new(cli.job, cli.build);

    match cli.command {
        Command::Show { changelog } => {
            let change_log = ChangeLogParser::parse(build, &changelog)
                .wrap_err_with(|| format!("Failed to read {}", changelog.display()))?;
            print!("{}", report::render_change_log(&change_log));
        }
        Command::Copy { input, output } => {
            let change_log = ChangeLogParser::parse(build, &input)
                .wrap_err_with(|| format!("Failed to read {}", input.display()))?;
            ChangeLogWriter::create(&output)?
                .write(&change_log)
                .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
        }
        Command::Refs {
            component,
            format,
            location,
        } => {
            let references = match format {
                Format::Xml => XmlConfigurationReader::new(
                    location.unwrap_or_else(|| config.xml_location.clone()),
                )
                .read(&component),
                Format::Line => LineConfigurationReader::new(
                    location.unwrap_or_else(|| config.line_location.clone()),
                )
                .read(&component),
            };
            print!("{}", report::render_references(&references));
        }
    }

    Ok(())
}
