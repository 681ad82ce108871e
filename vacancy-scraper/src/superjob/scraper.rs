use async_trait::async_trait;

use crate::api::{ensure_success, PageFetcher, Result};
use crate::stats::{LanguageStats, SalaryAccumulator, SourceResult};
use crate::superjob::types::{VacanciesPage, Vacancy};
use crate::{search_query, PROGRAMMING_LANGUAGES};

const BASE_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const API_KEY_HEADER: &str = "X-Api-App-Id";
/// superjob.ru town id of Moscow
const MOSCOW_TOWN: u32 = 4;
/// Vacancies per page returned by superjob.ru when no `count` is sent
pub const PAGE_SIZE: u64 = 20;

pub struct Client {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl Client {
    pub fn new(secret_key: String) -> Result<Self> {
        Self::with_base_url(secret_key, BASE_URL)
    }

    pub fn with_base_url(secret_key: String, base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            secret_key,
        })
    }
}

#[async_trait]
impl PageFetcher<VacanciesPage> for Client {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesPage> {
        log::debug!(
            "requesting vacancies from superjob.ru, page: {}, search: {}",
            page,
            query
        );
        let resp = self
            .client
            .get(&self.base_url)
            .header(API_KEY_HEADER, &self.secret_key)
            .query(&[("keywords", query)])
            .query(&[("town", MOSCOW_TOWN), ("page", page)])
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let vacancies: VacanciesPage = resp.json().await?;
        log::debug!(
            "retrieved {} vacancies for page: {}, search: {}",
            vacancies.objects.len(),
            page,
            query
        );
        Ok(vacancies)
    }
}

/// Number of pages holding `total` vacancies
pub fn page_count(total: u64) -> u32 {
    u32::try_from(total.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

/// Walk all result pages of one language.
/// The page count comes from the first page and pages `0..=pages` are requested,
/// so one page past the computed count is always fetched.
pub async fn collect_language<F>(fetcher: &F, language: &str) -> Result<LanguageStats>
where
    F: PageFetcher<VacanciesPage> + Sync,
{
    let query = search_query(language);
    let mut salaries = SalaryAccumulator::new();
    let first_page = fetcher.fetch_page(&query, 0).await?;
    let vacancies_found = first_page.total;
    let pages = page_count(vacancies_found);
    salaries.extend(first_page.objects.iter().map(Vacancy::predict_rub_salary));
    for page in 1..=pages {
        let vacancies = fetcher.fetch_page(&query, page).await?;
        salaries.extend(vacancies.objects.iter().map(Vacancy::predict_rub_salary));
    }
    Ok(salaries.finish(vacancies_found))
}

pub async fn collect_all<F>(fetcher: &F) -> Result<SourceResult>
where
    F: PageFetcher<VacanciesPage> + Sync,
{
    let mut result = SourceResult::new();
    for language in PROGRAMMING_LANGUAGES {
        let stats = collect_language(fetcher, language).await?;
        log::info!(
            "superjob.ru: {} vacancies found for {}, {} processed",
            stats.vacancies_found,
            language,
            stats.vacancies_processed
        );
        result.insert(language, stats);
    }
    Ok(result)
}
