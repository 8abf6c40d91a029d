//! CLI entry point for `sql2tests`.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sql2tests::ai::completion::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use sql2tests::ai::{self, OllamaClient, OllamaConfig};
use sql2tests::extractor;
use sql2tests::generator::Strategy;
use sql2tests::output::{formatter, HybridOutput};
use sql2tests::parser::sql_parser::{self, DEFAULT_DIALECT};

#[derive(Parser)]
#[command(
    name = "sql2tests",
    about = "Generate positive, negative, and boundary test scenarios from a SQL query"
)]
struct Cli {
    /// Input SQL file
    #[arg(required_unless_present = "sql")]
    input: Option<PathBuf>,

    /// SQL text given inline instead of a file
    #[arg(long, conflicts_with = "input")]
    sql: Option<String>,

    /// SQL dialect understood by the parser
    #[arg(long, default_value = DEFAULT_DIALECT)]
    dialect: String,

    /// Scenario strategy: `category` or `operator-table`
    #[arg(long, default_value = "category")]
    strategy: Strategy,

    /// Output directory
    #[arg(long, default_value = "sql2tests-output")]
    output_dir: PathBuf,

    /// Print the JSON output instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Also ask the completion service for free-text scenarios
    #[arg(long)]
    with_ai: bool,

    /// Completion endpoint
    #[arg(long, env = "OLLAMA_URL", default_value = DEFAULT_ENDPOINT)]
    ollama_url: String,

    /// Completion model name
    #[arg(long, env = "OLLAMA_MODEL", default_value = DEFAULT_MODEL)]
    ollama_model: String,

    /// Completion request timeout in seconds
    #[arg(long, env = "OLLAMA_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    ollama_timeout_secs: u64,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(2);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> sql2tests::Result<()> {
    let sql = match (&cli.sql, &cli.input) {
        (Some(sql), _) => sql.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => unreachable!("clap requires either an input file or --sql"),
    };

    let dialect = sql_parser::dialect_by_name(&cli.dialect)?;
    let model = extractor::extract_from_sql(&sql, dialect.as_ref())?;
    if model.is_empty() {
        warn!("query has no supported conditions, no scenarios will be generated");
    }
    let scenarios = cli.strategy.generate(&model)?;
    info!(
        strategy = %cli.strategy,
        scenarios = scenarios.len(),
        "generated scenarios"
    );

    let ai_supplement = if cli.with_ai {
        let client = OllamaClient::new(OllamaConfig {
            endpoint: cli.ollama_url.clone(),
            model: cli.ollama_model.clone(),
            timeout: Duration::from_secs(cli.ollama_timeout_secs),
        })?;
        info!(
            endpoint = %client.config().endpoint,
            model = %client.config().model,
            "requesting AI supplement"
        );
        Some(ai::generate_ai_scenarios(&client, &sql)?)
    } else {
        None
    };

    let output = HybridOutput::new(&model, scenarios, ai_supplement);

    if cli.stdout {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let name = cli
        .input
        .as_ref()
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("query");
    formatter::write_output(&cli.output_dir, name, &output)?;
    info!(dir = %cli.output_dir.display(), "wrote output");
    Ok(())
}
