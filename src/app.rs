use std::error::Error;
use std::path::PathBuf;

use clap::{error::ErrorKind, Parser, ValueEnum};

use crate::activity::FixedActivityType;
use crate::metrics::conversion_totals;
use crate::pipeline::{Converter, ValidationPolicy};
use crate::transport::{read_source_records, write_projects};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Silent,
    Warn,
}

impl From<PolicyArg> for ValidationPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Silent => ValidationPolicy::Silent,
            PolicyArg::Warn => ValidationPolicy::Warn,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "storymap-convert",
    disable_help_subcommand = true,
    about = "Convert a legacy spreadsheet export into normalized story-map projects",
    long_about = "Read a flat JSON export (numbered column suffixes for artworks and poems), \
normalize it into the canonical array-based schema, and write pretty-printed JSON in input order.",
    after_help = "On success a summary of project/artwork/poem/activity totals is printed to stdout. \
Any fatal error aborts the whole batch without writing output and exits non-zero."
)]
struct ConvertCli {
    #[arg(value_name = "INPUT", help = "Path to the legacy JSON export")]
    input: PathBuf,
    #[arg(value_name = "OUTPUT", help = "Path for the normalized JSON output")]
    output: PathBuf,
    #[arg(
        long,
        value_enum,
        default_value = "warn",
        help = "How per-record data problems are handled"
    )]
    validation: PolicyArg,
    #[arg(
        long = "activity-type",
        value_name = "LABEL",
        help = "Type label assigned to derived activities (defaults to the legacy 'Workshop' placeholder)"
    )]
    activity_type: Option<String>,
    #[arg(long, help = "Skip the human-readable summary printed on success")]
    quiet: bool,
}

/// Run the converter with the given command-line arguments (program name
/// excluded). Returns `Err` on any fatal failure so the binary can exit
/// non-zero.
pub fn run<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<ConvertCli, _>(
        std::iter::once("storymap-convert".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let classifier = match cli.activity_type {
        Some(label) => FixedActivityType::new(label),
        None => FixedActivityType::default(),
    };
    let converter = Converter::new()
        .with_policy(cli.validation.into())
        .with_classifier(classifier);

    let records = read_source_records(&cli.input)?;
    let output = converter.convert_batch(&records);

    for warning in &output.warnings {
        eprintln!(
            "warning: record #{}: {}",
            warning.record_index, warning.message
        );
    }

    write_projects(&cli.output, &output.projects)?;

    if !cli.quiet {
        let totals = conversion_totals(&output.projects);
        println!("=== conversion summary ===");
        println!("projects  : {}", totals.projects);
        println!("artworks  : {}", totals.artworks);
        println!("poems     : {}", totals.poems);
        println!("activities: {}", totals.activities);
        if !output.warnings.is_empty() {
            println!("warnings  : {}", output.warnings.len());
        }
        println!("wrote {}", cli.output.display());
    }

    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
