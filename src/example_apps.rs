//! Reusable demo runners shared by the demo binaries.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum, error::ErrorKind};
use serde_json::Value;

use crate::config::{ExtractorConfig, MalformedPropertiesPolicy, MissingValuePolicy};
use crate::constants::extract::DEFAULT_PROPERTY_KEY;
use crate::document::Document;
use crate::extract::{Extractor, find_feature, property_keys};
use crate::render::render_values;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MissingArg {
    Skip,
    Null,
    Fail,
}

impl From<MissingArg> for MissingValuePolicy {
    fn from(value: MissingArg) -> Self {
        match value {
            MissingArg::Skip => MissingValuePolicy::Skip,
            MissingArg::Null => MissingValuePolicy::Null,
            MissingArg::Fail => MissingValuePolicy::Fail,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MalformedArg {
    Skip,
    Fail,
}

impl From<MalformedArg> for MalformedPropertiesPolicy {
    fn from(value: MalformedArg) -> Self {
        match value {
            MalformedArg::Skip => MalformedPropertiesPolicy::Skip,
            MalformedArg::Fail => MalformedPropertiesPolicy::Fail,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "extract_demo",
    disable_help_subcommand = true,
    about = "Extract one property value per feature from a GeoJSON document",
    long_about = "Load a GeoJSON feature collection, walk its features in order, and print the values found under one property key as a JSON array.",
    after_help = "Set RUST_LOG=geoprops=debug to see per-feature skip diagnostics."
)]
struct ExtractDemoCli {
    #[arg(long, value_name = "PATH", help = "Feature-collection file to read")]
    input: PathBuf,
    #[arg(
        long,
        default_value = DEFAULT_PROPERTY_KEY,
        help = "Property key to extract from each feature"
    )]
    key: String,
    #[arg(
        long,
        value_enum,
        default_value_t = MissingArg::Skip,
        help = "Disposition for features without the key (or without a properties object)"
    )]
    missing: MissingArg,
    #[arg(
        long = "malformed-properties",
        value_enum,
        default_value_t = MalformedArg::Skip,
        help = "Disposition for features whose properties value is not an object"
    )]
    malformed_properties: MalformedArg,
    #[arg(
        long,
        help = "List property keys seen across features instead of extracting"
    )]
    list_keys: bool,
    #[arg(
        long,
        value_name = "VALUE",
        help = "Print the index of the first feature whose key equals VALUE"
    )]
    find: Option<String>,
}

/// Run the extraction demo over `args_iter` (program name excluded).
pub fn run_extract_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<ExtractDemoCli, _>(
        std::iter::once("extract_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let document = Document::from_path(&cli.input)?;

    if cli.list_keys {
        for (key, count) in property_keys(&document) {
            println!("{key}\t{count}");
        }
        return Ok(());
    }

    if let Some(raw) = cli.find {
        let needle = Value::String(raw.clone());
        match find_feature(&document, &cli.key, &needle) {
            Some(index) => println!("{index}"),
            None => println!("no feature with {}={raw}", cli.key),
        }
        return Ok(());
    }

    let config = ExtractorConfig::new(cli.key)
        .with_missing_policy(cli.missing.into())
        .with_malformed_properties_policy(cli.malformed_properties.into());
    let (values, report) = Extractor::new(config).extract_report(&document)?;
    tracing::debug!(
        features = report.features,
        extracted = report.extracted,
        skipped = report.skipped(),
        "extraction pass completed"
    );
    println!("{}", render_values(&values));
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
