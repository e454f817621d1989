//! confgraph CLI: build and inspect conference keyword similarity graphs

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use confgraph::source::MySqlSourceConfig;
use confgraph::{
    is_linked, jaccard_percent, normalize_keywords, open_source, shared_keywords, DocumentEmitter,
    GraphDocument, GraphSummary, JobConfig, NodeLevel, PairingStrategy, SimilarityJob,
    SourceConfig,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "confgraph", version, about = "Conference keyword similarity graph builder")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Debug logging for confgraph crates
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, clap::ValueEnum)]
enum StrategyArg {
    Exhaustive,
    InvertedIndex,
}

impl From<StrategyArg> for PairingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => PairingStrategy::Exhaustive,
            StrategyArg::InvertedIndex => PairingStrategy::InvertedIndex,
        }
    }
}

#[derive(clap::Args)]
struct BuildArgs {
    /// YAML configuration file
    #[arg(long, env = "CONFGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Link threshold in percent
    #[arg(long, env = "CONFGRAPH_THRESHOLD")]
    threshold: Option<f64>,

    /// Conference short title; repeat to select several
    #[arg(long = "conference")]
    conferences: Vec<String>,

    /// Output document path
    #[arg(long, env = "CONFGRAPH_OUTPUT")]
    output: Option<PathBuf>,

    /// Read rows from a JSON export instead of the database
    #[arg(long, conflicts_with = "database_url")]
    source_json: Option<PathBuf>,

    /// MySQL connection URL
    #[arg(long, env = "CONFGRAPH_DATABASE_URL")]
    database_url: Option<String>,

    /// Candidate pair enumeration
    #[arg(long)]
    strategy: Option<StrategyArg>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the similarity graph and write the document
    Build(BuildArgs),
    /// Score two keyword strings against each other
    Score {
        /// First keyword string, e.g. "graph; AI"
        first: String,
        /// Second keyword string
        second: String,
        /// Link threshold in percent
        #[arg(long, default_value_t = default_threshold())]
        threshold: f64,
    },
    /// Summarize an existing graph document
    Inspect {
        /// Document path
        file: PathBuf,
        /// Number of most connected articles to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

fn default_threshold() -> f64 {
    JobConfig::default().threshold
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Build(args) => run_build(args, &cli.format).await,
        Commands::Score {
            first,
            second,
            threshold,
        } => run_score(&first, &second, threshold, &cli.format),
        Commands::Inspect { file, top } => run_inspect(&file, top, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "info,confgraph=debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(args: BuildArgs) -> anyhow::Result<JobConfig> {
    let mut config = match &args.config {
        Some(path) => JobConfig::load(path)
            .with_context(|| format!("failed to load configuration from {:?}", path))?,
        None => JobConfig::default(),
    };

    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if !args.conferences.is_empty() {
        config.conferences = args.conferences;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy.into();
    }

    if let Some(path) = args.source_json {
        config.source = SourceConfig::Json { path };
    } else if let Some(url) = args.database_url {
        match &mut config.source {
            SourceConfig::Mysql(mysql) => mysql.url = url,
            other => {
                *other = SourceConfig::Mysql(MySqlSourceConfig {
                    url,
                    ..MySqlSourceConfig::default()
                })
            }
        }
    }

    Ok(config)
}

async fn run_build(args: BuildArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    let job = SimilarityJob::new(config).context("invalid configuration")?;
    let source = open_source(&job.config().source).context("failed to open data source")?;

    let summary = job
        .run(source.as_ref())
        .await
        .context("similarity graph build failed")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Table => {
            println!("{}", summary_table(&summary));
            println!("Written to {:?}", job.config().output_path);
        }
    }
    Ok(())
}

fn run_score(
    first: &str,
    second: &str,
    threshold: f64,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let a = normalize_keywords(Some(first));
    let b = normalize_keywords(Some(second));
    let score = jaccard_percent(&a, &b);
    let shared = shared_keywords(&a, &b);
    let linked = is_linked(score, threshold);

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "score": score,
                "linked": linked,
                "threshold": threshold,
                "shared": shared,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("Score:     {:.2}%", score);
            println!("Linked:    {} (threshold {}%)", linked, threshold);
            println!("Shared:    {}", shared.join(", "));
        }
    }
    Ok(())
}

fn run_inspect(file: &Path, top: usize, format: &OutputFormat) -> anyhow::Result<()> {
    let document = DocumentEmitter::load(file)
        .with_context(|| format!("failed to read graph document {:?}", file))?;

    let mut ranked: Vec<_> = document.articles.iter().collect();
    ranked.sort_by(|a, b| b.degree().cmp(&a.degree()).then(a.id.cmp(&b.id)));
    ranked.truncate(top);

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "articles": document.articles.len(),
                "sections": document.sections.len(),
                "conferences": document.conferences.len(),
                "edges": document.edge_count(),
                "top": ranked.iter().map(|n| serde_json::json!({
                    "id": n.id,
                    "label": n.num_text,
                    "section": n.sector_name,
                    "degree": n.degree(),
                })).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("{}", level_table(&document));
            println!("{} similarity link(s)", document.edge_count());

            if ranked.is_empty() {
                println!("(no articles)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["id", "label", "section", "links"]);
            for node in ranked {
                table.add_row(vec![
                    node.id.as_usize().to_string(),
                    node.num_text.clone(),
                    node.sector_name.clone(),
                    node.degree().to_string(),
                ]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn summary_table(summary: &GraphSummary) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["articles", "sections", "conferences", "links", "pairs scored"]);
    table.add_row(vec![
        summary.articles.to_string(),
        summary.sections.to_string(),
        summary.conferences.to_string(),
        summary.edges.to_string(),
        summary.pairs_evaluated.to_string(),
    ]);
    table
}

fn level_table(document: &GraphDocument) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["level", "nodes", "articles covered"]);
    for level in [NodeLevel::Article, NodeLevel::Section, NodeLevel::Conference] {
        let nodes = document.level(level);
        let covered: usize = nodes.iter().map(|n| n.sec_length).sum();
        table.add_row(vec![
            format!("{} ({})", level.as_u8(), level),
            nodes.len().to_string(),
            covered.to_string(),
        ]);
    }
    table
}
