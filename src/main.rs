use anyhow::{Context, Result, bail};
use esg_analytics::data::load_table_with;
use esg_analytics::logging::init_tracing;
use esg_analytics::session::AnalyticsSession;
use esg_analytics::settings::{AnalyticsSettings, default_settings_path};
use esg_analytics::types::{AxisSelection, ChartData, ColumnClassification};
use serde::Serialize;
use std::path::PathBuf;

const USAGE: &str =
    "usage: esg-analytics <file.csv|file.tsv|file.json> [--x COL] [--y COL] [--settings PATH]";

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    file: PathBuf,
    x: Option<String>,
    y: Option<String>,
    settings: Option<PathBuf>,
}

impl Args {
    fn parse(mut raw: impl Iterator<Item = String>) -> Result<Self> {
        let mut args = Args::default();
        let mut file = None;
        while let Some(arg) = raw.next() {
            match arg.as_str() {
                "--x" => args.x = Some(raw.next().context("--x needs a column name")?),
                "--y" => args.y = Some(raw.next().context("--y needs a column name")?),
                "--settings" => {
                    args.settings = Some(raw.next().context("--settings needs a path")?.into())
                }
                "-h" | "--help" => bail!(USAGE),
                other if other.starts_with("--") => bail!("unknown option {}\n{}", other, USAGE),
                other => file = Some(PathBuf::from(other)),
            }
        }
        args.file = file.context(USAGE)?;
        Ok(args)
    }
}

/// JSON report printed to stdout
#[derive(Serialize)]
struct Report<'a> {
    columns: &'a [ColumnClassification],
    axes: &'a AxisSelection,
    chart: ChartData,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse(std::env::args().skip(1))?;

    let settings_path = args.settings.clone().or_else(default_settings_path);
    let settings = match settings_path.as_deref() {
        Some(path) => AnalyticsSettings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => AnalyticsSettings::default(),
    };

    let table = load_table_with(&args.file, &settings)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let mut session = AnalyticsSession::new(settings);
    session
        .load(table)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    if let Some(x) = args.x.as_deref() {
        session.set_x_axis(x)?;
    }
    if let Some(y) = args.y.as_deref() {
        session.set_y_axis(Some(y))?;
    }

    let chart = session.chart_data()?;
    if let Some(message) = chart.omitted_rows_message() {
        tracing::info!("{}", message);
    }

    let report = Report {
        columns: session.classifications()?,
        axes: session.axes()?,
        chart,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
