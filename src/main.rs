use anyhow::Context;
use clap::Parser;

use founder_finder::{company, Config};

#[derive(Parser)]
#[command(name = "founder-finder")]
#[command(about = "Extract founder names from company websites", long_about = None)]
struct Cli {
    /// Input file, one `Company Name (https://domain.com/)` per line
    #[arg(default_value = "companies.txt")]
    input: String,

    /// Output JSON file
    #[arg(short, long, default_value = "founders.json")]
    output: String,

    /// Seconds to wait between consecutive requests
    #[arg(long, default_value_t = 0.8)]
    delay: f32,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Maximum pages scanned per company (at most 6)
    #[arg(long, default_value_t = founder_finder::MAX_PAGES)]
    max_pages: usize,

    /// Candidate page path, repeatable; replaces the default path list
    #[arg(long = "path")]
    paths: Vec<String>,

    /// Do not fetch or obey robots.txt
    #[arg(long)]
    ignore_robots: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::default();
        config.input_path = self.input;
        config.output_path = self.output;
        config.download_delay = self.delay;
        config.timeout_secs = self.timeout;
        config.max_pages = self.max_pages;
        config.robotstxt_obey = !self.ignore_robots;
        if !self.paths.is_empty() {
            config.paths = self.paths;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = cli.into_config();
    let input_path = config.input_path.clone();
    let output_path = config.output_path.clone();

    let companies = company::read_companies(&input_path)
        .with_context(|| format!("cannot load companies from {}", input_path))?;
    let mut engine = founder_finder::engine(config).context("invalid configuration")?;
    let results = engine.start(&companies).await?;
    results
        .write(&output_path)
        .with_context(|| format!("cannot write results to {}", output_path))?;
    Ok(())
}
