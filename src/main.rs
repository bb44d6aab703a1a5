use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use impulse_rs::export::{export_cypher_dump, export_graph_json};
use impulse_rs::logging::init_logging;
use impulse_rs::{Attribute, Dashboard, DashboardConfig, MissingValuePolicy};

#[derive(Parser)]
#[command(name = "impulse")]
#[command(about = "IMPULSE dashboard views: partner charts, category graphs, survey heatmap")]
#[command(version)]
struct Cli {
    /// JSON configuration file (defaults reproduce the IMPULSE dashboard)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Screening catalogue CSV, overrides the configured path
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Survey workbook or CSV export, overrides the configured path
    #[arg(long, global = true)]
    survey: Option<PathBuf>,

    /// Debug logging for this crate
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List partner institutes
    Sites,
    /// Screening overview for one partner
    Overview {
        #[arg(long)]
        site: String,
        /// Also break down one attribute: "Assay format", "Cell type" or "Model organism"
        #[arg(long)]
        attribute: Option<String>,
    },
    /// Category graph: whole catalogue, or one partner with --site
    Graph {
        #[arg(long)]
        site: Option<String>,
        /// Output format: json or cypher
        #[arg(long, default_value = "json")]
        format: String,
        /// Missing values: skip or unspecified
        #[arg(long)]
        missing: Option<String>,
    },
    /// Survey yes/no heatmap
    Heatmap,
}

fn load_config(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(path) = &cli.catalog {
        config.catalog_path = path.clone();
    }
    if let Some(path) = &cli.survey {
        config.survey_path = Some(path.clone());
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Views over an unknown site are empty; say so on stderr.
fn warn_unknown_site(dashboard: &Dashboard, site: &str) {
    if !dashboard.sites().contains(&site) {
        warn!(site = %site, "site not present in catalogue");
    }
}

#[derive(Serialize)]
struct OverviewOutput {
    overview: impulse_rs::PartnerOverview,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<impulse_rs::AttributeBreakdown>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(&cli)?;
    // Only the heatmap needs the survey.
    if !matches!(cli.command, Commands::Heatmap) {
        config.survey_path = None;
    }
    if let Commands::Graph { missing: Some(policy), .. } = &cli.command {
        config.missing_values = policy.parse::<MissingValuePolicy>()?;
    }

    let dashboard = Dashboard::open(config).context("loading dashboard data")?;
    info!(rows = dashboard.catalog().len(), "dashboard ready");

    match &cli.command {
        Commands::Sites => print_json(&dashboard.sites())?,
        Commands::Overview { site, attribute } => {
            warn_unknown_site(&dashboard, site);
            let breakdown = match attribute {
                Some(name) => {
                    let attribute: Attribute = name.parse()?;
                    Some(dashboard.attribute_breakdown(site, attribute)?)
                }
                None => None,
            };
            print_json(&OverviewOutput {
                overview: dashboard.partner_overview(site),
                breakdown,
            })?;
        }
        Commands::Graph { site, format, .. } => {
            let (graph, layout) = match site {
                Some(site) => {
                    warn_unknown_site(&dashboard, site);
                    (dashboard.partner_graph(site), &dashboard.config().partner.layout)
                }
                None => (dashboard.overview_graph(), &dashboard.config().overview.layout),
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            match format.as_str() {
                "json" => export_graph_json(&graph, layout, &mut out)?,
                "cypher" => export_cypher_dump(&graph, &mut out)?,
                other => bail!("unknown graph format '{other}' (expected json or cypher)"),
            }
        }
        Commands::Heatmap => print_json(&dashboard.survey_heatmap()?)?,
    }

    Ok(())
}
