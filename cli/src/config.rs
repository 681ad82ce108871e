use std::time::Duration;

use vacancy_scraper::Site;

use crate::{Error, Result};

/// Environment variable holding the superjob.ru application key
pub const SUPERJOB_KEY_VAR: &str = "SECRET_KEY_SJ";

#[derive(Debug, Clone)]
pub struct Config {
    /// Only present when superjob is one of the requested sites
    superjob_key: Option<String>,
    pub headhunter_delay: Duration,
}

impl Config {
    pub fn from_env(sites: &[Site], headhunter_delay: Duration) -> Result<Self> {
        Self::load(sites, headhunter_delay, |name| std::env::var(name).ok())
    }

    /// Build the config, reading variables through `lookup`
    pub fn load<L>(sites: &[Site], headhunter_delay: Duration, lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let superjob_key = if sites.contains(&Site::SuperJob) {
            let key = lookup(SUPERJOB_KEY_VAR)
                .filter(|key| !key.trim().is_empty())
                .ok_or(Error::MissingEnv(SUPERJOB_KEY_VAR))?;
            Some(key)
        } else {
            None
        };
        Ok(Self {
            superjob_key,
            headhunter_delay,
        })
    }

    pub fn superjob_key(&self) -> Result<&str> {
        self.superjob_key
            .as_deref()
            .ok_or(Error::MissingEnv(SUPERJOB_KEY_VAR))
    }
}
