use vacancy_scraper::{headhunter, stats::SourceResult, superjob, Site};

use crate::config::Config;
use crate::Result;

/// Collect statistics of every language from one site
pub async fn collect(site: Site, config: &Config) -> Result<SourceResult> {
    log::info!("Collecting vacancies from {}", site);
    let result = match site {
        Site::HeadHunter => {
            let client = headhunter::Client::new()?;
            headhunter::collect_all(&client, config.headhunter_delay).await?
        }
        Site::SuperJob => {
            let client = superjob::Client::new(config.superjob_key()?.to_owned())?;
            superjob::collect_all(&client).await?
        }
    };
    log::info!("Finished collecting {} languages from {}", result.len(), site);
    Ok(result)
}
