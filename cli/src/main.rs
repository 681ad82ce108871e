mod collect;
mod config;
mod report;

use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;
use thiserror::Error;
use vacancy_scraper::{headhunter, Site};

use crate::config::Config;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Environment variable {0} not set")]
    MissingEnv(&'static str),
    #[error(transparent)]
    Scrape(#[from] vacancy_scraper::api::Error),
    #[error("Failed to serialize report: '{0}'")]
    Json(#[from] serde_json::Error),
}

/// Average salaries of programmers in Moscow, by programming language
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job sites to collect vacancies from (hh, sj), all of them if omitted
    #[clap(long)]
    site: Vec<Site>,

    /// Pause before each hh.ru request, in milliseconds
    #[clap(long, default_value_t = headhunter::DEFAULT_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Print the statistics as JSON instead of tables
    #[clap(long)]
    json: bool,
}

impl Cli {
    /// Requested sites in order, without duplicates
    fn sites(&self) -> Vec<Site> {
        if self.site.is_empty() {
            return Site::ALL.to_vec();
        }
        let mut sites = Vec::with_capacity(self.site.len());
        for site in &self.site {
            if !sites.contains(site) {
                sites.push(*site);
            }
        }
        sites
    }
}

async fn run(args: Cli) -> Result<()> {
    let sites = args.sites();
    let config = Config::from_env(&sites, Duration::from_millis(args.delay_ms))?;

    let mut results = Vec::with_capacity(sites.len());
    for site in sites {
        let result = collect::collect(site, &config).await?;
        results.push((site, result));
    }

    if args.json {
        let reports = results
            .iter()
            .map(|(site, result)| (site.title(), result))
            .collect::<Vec<_>>();
        println!("{}", report::render_json(&reports)?);
        return Ok(());
    }
    for (site, result) in &results {
        println!("{}", report::render_table(site.title(), result));
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
