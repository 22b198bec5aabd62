//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::model::{DEFAULT_PERIOD, DEFAULT_SEED};
use crate::core::paths::DASHBOARD_FILE;
use crate::core::period::parse_period;
use crate::core::render::{OutputFormat, RenderConfig, Renderer, Report};
use crate::flows::generate::FlowGenerator;

/// supplyflow - generate a synthetic supply-chain flow dataset and render it as a dashboard.
#[derive(Parser, Debug)]
#[command(name = "supplyflow")]
#[command(
    author,
    version,
    about,
    long_about = r#"supplyflow models product flow from suppliers to categories to sales
channels, exports it as two CSV tables and renders a dashboard from them.

Layout under ROOT:
- data/supply_chain_flow.csv: source,target,value,period (15 rows)
- data/sales_by_channel.csv: Channel,Category,Total Sales,Period (6 rows)
- outputs/golden_image.html: flow diagram + sales table

Examples:
    supplyflow run
    supplyflow generate --seed 7 --period Q2-2025
    supplyflow validate --format md
    supplyflow render --output q1.html
"#
)]
pub struct Cli {
    /// Project root holding data/ and outputs/.
    #[arg(
        long,
        global = true,
        default_value = ".",
        env = "SUPPLYFLOW_ROOT",
        value_name = "ROOT",
        long_help = "Project root (defaults to the current directory).\n\n\
Tables are written to ROOT/data and the dashboard to ROOT/outputs. Paths in the\n\
console report are relative to it."
    )]
    pub root: PathBuf,

    /// Report format (text/json/md).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        value_parser = parse_format,
        long_help = "Select the console report format.\n\n\
Supported values:\n\
- text (default)\n\
- json\n\
- md (markdown)"
    )]
    pub format: OutputFormat,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the flow and sales tables and validate conservation.
    #[command(
        long_about = "Generate 9 supplier → category edges and 6 category → channel edges,\n\
derive the channel × category sales summary, export both tables under ROOT/data\n\
and print the per-category conservation check.\n\n\
The same seed always produces the same tables.\n\n\
Examples:\n\
  supplyflow generate\n\
  supplyflow generate --seed 7 --period Q3-2025\n"
    )]
    Generate {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Check conservation against the exported flow table.
    #[command(
        long_about = "Load ROOT/data/supply_chain_flow.csv and compare, for each category,\n\
inbound volume from suppliers with outbound volume to channels.\n\n\
A mismatch is reported as a warning; the command still succeeds.\n"
    )]
    Validate,

    /// Render the dashboard from the exported tables.
    #[command(
        long_about = "Load both tables from ROOT/data and write a single self-contained HTML\n\
document with the flow diagram and the sales table.\n\n\
Examples:\n\
  supplyflow render\n\
  supplyflow render --output q1/dashboard.html\n"
    )]
    Render {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate the tables, then render the dashboard.
    Run {
        #[command(flatten)]
        dataset: DatasetArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Debug)]
pub struct DatasetArgs {
    /// Random seed for edge volumes.
    #[arg(long, default_value_t = DEFAULT_SEED, value_name = "N")]
    pub seed: u64,

    /// Reporting period tag.
    #[arg(
        long,
        default_value = DEFAULT_PERIOD,
        value_name = "TAG",
        value_parser = parse_period,
        long_help = "Reporting period tag written to every row, as Q<1-4>-<YYYY>.\n\n\
Example: --period Q2-2025"
    )]
    pub period: String,
}

impl DatasetArgs {
    fn generator(&self) -> FlowGenerator {
        FlowGenerator::new(self.seed, self.period.clone())
    }
}

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Dashboard file, relative to ROOT/outputs unless absolute.
    #[arg(long, default_value = DASHBOARD_FILE, value_name = "FILE")]
    pub output: PathBuf,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let render_config = RenderConfig::with_pretty(cli.format, cli.pretty);

    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let report = execute(&root, cli.command)?;

    let renderer = Renderer::with_config(render_config);
    renderer
        .render_to(&report, std::io::stdout().lock())
        .context("Failed to write report")?;
    Ok(())
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value.parse()
}

fn execute(root: &Path, command: Commands) -> Result<Report> {
    match command {
        Commands::Generate { dataset } => {
            crate::flows::run::generate_tables(root, &dataset.generator())
        }

        Commands::Validate => crate::flows::run::validate_table(root),

        Commands::Render { output } => crate::dashboard::render_tables(root, &output.output),

        Commands::Run { dataset, output } => {
            let mut report = crate::flows::run::generate_tables(root, &dataset.generator())?;
            report.merge(crate::dashboard::render_tables(root, &output.output)?);
            Ok(report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["supplyflow", "generate"]).unwrap();
        match cli.command {
            Commands::Generate { dataset } => {
                assert_eq!(dataset.seed, 42);
                assert_eq!(dataset.period, "Q1-2025");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_run_options() {
        let cli = Cli::try_parse_from([
            "supplyflow",
            "run",
            "--seed",
            "7",
            "--period",
            "Q3-2024",
            "--output",
            "board.html",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { dataset, output } => {
                assert_eq!(dataset.seed, 7);
                assert_eq!(dataset.period, "Q3-2024");
                assert_eq!(output.output, PathBuf::from("board.html"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_period() {
        let result = Cli::try_parse_from(["supplyflow", "generate", "--period", "2025"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = Cli::try_parse_from(["supplyflow", "--format", "jsonl", "validate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_format_aliases() {
        let cli = Cli::try_parse_from(["supplyflow", "--format", "markdown", "validate"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["supplyflow", "validate", "--format", "json", "-v"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }
}
