use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::api::{ensure_success, PageFetcher, Result};
use crate::headhunter::types::{VacanciesPage, Vacancy};
use crate::stats::{LanguageStats, SalaryAccumulator, SourceResult};
use crate::{search_query, PROGRAMMING_LANGUAGES};

const BASE_URL: &str = "https://api.hh.ru/vacancies";
const USER_AGENT: &str = concat!("vacancy-scraper/", env!("CARGO_PKG_VERSION"));
/// hh.ru area id of Moscow
const MOSCOW_AREA: u32 = 1;
/// Upper limit of pages requested per query, in case `pages` keeps growing
const MAX_PAGES: u32 = 100;
/// Pause before each request, hh.ru rejects clients that query too fast
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl PageFetcher<VacanciesPage> for Client {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesPage> {
        log::debug!(
            "requesting vacancies from hh.ru, page: {}, search: {}",
            page,
            query
        );
        let resp = self
            .client
            .get(&self.base_url)
            .header("Accept", "application/json")
            .query(&[("text", query)])
            .query(&[("area", MOSCOW_AREA), ("page", page)])
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let vacancies: VacanciesPage = resp.json().await?;
        log::debug!(
            "retrieved {} vacancies for page: {}, search: {}",
            vacancies.items.len(),
            page,
            query
        );
        Ok(vacancies)
    }
}

/// Walk all result pages of one language.
/// `vacancies_found` is taken from the last page fetched.
pub async fn collect_language<F>(fetcher: &F, language: &str, delay: Duration) -> Result<LanguageStats>
where
    F: PageFetcher<VacanciesPage> + Sync,
{
    let query = search_query(language);
    let mut salaries = SalaryAccumulator::new();
    let mut page = 0;
    let vacancies_found = loop {
        sleep(delay).await;
        let vacancies = fetcher.fetch_page(&query, page).await?;
        salaries.extend(vacancies.items.iter().map(Vacancy::predict_rub_salary));
        let last_page = vacancies.pages.saturating_sub(1);
        if page >= last_page || page + 1 >= MAX_PAGES {
            break vacancies.found;
        }
        page += 1;
    };
    Ok(salaries.finish(vacancies_found))
}

pub async fn collect_all<F>(fetcher: &F, delay: Duration) -> Result<SourceResult>
where
    F: PageFetcher<VacanciesPage> + Sync,
{
    let mut result = SourceResult::new();
    for language in PROGRAMMING_LANGUAGES {
        let stats = collect_language(fetcher, language, delay).await?;
        log::info!(
            "hh.ru: {} vacancies found for {}, {} processed",
            stats.vacancies_found,
            language,
            stats.vacancies_processed
        );
        result.insert(language, stats);
    }
    Ok(result)
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use mockito::Matcher;
    use serde_json::{json, Value};

    use super::*;
    use crate::api::Error;

    /// Serves prepared pages and records which page indices were requested
    struct FakeSite {
        pages: Vec<VacanciesPage>,
        requested: Mutex<Vec<(String, u32)>>,
    }

    impl FakeSite {
        fn new(pages: Vec<Value>) -> Self {
            let pages = pages
                .into_iter()
                .map(|page| serde_json::from_value(page).unwrap())
                .collect();
            Self {
                pages,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested_pages(&self) -> Vec<u32> {
            self.requested
                .lock()
                .unwrap()
                .iter()
                .map(|(_, page)| *page)
                .collect()
        }
    }

    #[async_trait]
    impl PageFetcher<VacanciesPage> for FakeSite {
        async fn fetch_page(&self, query: &str, page: u32) -> Result<VacanciesPage> {
            self.requested.lock().unwrap().push((query.to_owned(), page));
            let index = (page as usize).min(self.pages.len() - 1);
            Ok(self.pages[index].clone())
        }
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn rub(from: Option<u32>, to: Option<u32>) -> Value {
        json!({"salary": {"from": from, "to": to, "currency": "RUR"}})
    }

    #[tokio::test]
    async fn test_collect_two_pages() {
        init_logger();
        let site = FakeSite::new(vec![
            json!({
                "items": [rub(Some(80000), Some(120000)), rub(Some(100000), None)],
                "found": 40,
                "pages": 2,
            }),
            json!({
                "items": [{"salary": null}, rub(None, Some(80000))],
                "found": 41,
                "pages": 2,
            }),
        ]);
        let stats = collect_language(&site, "Python", Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(site.requested_pages(), vec![0, 1]);
        assert_eq!(
            stats,
            LanguageStats {
                vacancies_found: 41,
                vacancies_processed: 3,
                average_salary: 94_666,
            }
        );
        let queries = site.requested.lock().unwrap();
        assert!(queries.iter().all(|(query, _)| query == "Программист Python"));
    }

    #[tokio::test]
    async fn test_collect_empty_result() {
        init_logger();
        let site = FakeSite::new(vec![json!({"items": [], "found": 0, "pages": 0})]);
        let stats = collect_language(&site, "Ruby", Duration::ZERO).await.unwrap();
        assert_eq!(site.requested_pages(), vec![0]);
        assert_eq!(stats, LanguageStats::default());
    }

    #[tokio::test]
    async fn test_collect_stops_at_page_ceiling() {
        init_logger();
        let site = FakeSite::new(vec![json!({
            "items": [{"salary": {"from": 50000, "to": null, "currency": "USD"}}],
            "found": 100000,
            "pages": 5000,
        })]);
        let stats = collect_language(&site, "Java", Duration::ZERO).await.unwrap();
        assert_eq!(site.requested_pages(), (0..MAX_PAGES).collect::<Vec<_>>());
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
        assert_eq!(stats.vacancies_found, 100000);
    }

    #[tokio::test]
    async fn test_collect_all_languages_in_order() {
        init_logger();
        let site = FakeSite::new(vec![json!({
            "items": [rub(Some(200000), Some(300000))],
            "found": 1,
            "pages": 1,
        })]);
        let result = collect_all(&site, Duration::ZERO).await.unwrap();
        let languages = result.iter().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(languages, PROGRAMMING_LANGUAGES.to_vec());
        assert!(result.iter().all(|(_, stats)| stats.average_salary == 250_000));
        assert_eq!(site.requested_pages().len(), PROGRAMMING_LANGUAGES.len());
    }

    #[tokio::test]
    async fn test_fetch_page() {
        init_logger();
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "items": [rub(Some(100000), Some(200000))],
            "found": 1,
            "pages": 1,
            "page": 0,
            "per_page": 20,
        });
        let mock = server
            .mock("GET", "/vacancies")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("text".into(), "Программист Go".into()),
                Matcher::UrlEncoded("area".into(), "1".into()),
                Matcher::UrlEncoded("page".into(), "3".into()),
            ]))
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = Client::with_base_url(format!("{}/vacancies", server.url())).unwrap();
        let page = client.fetch_page("Программист Go", 3).await.unwrap();
        mock.assert_async().await;
        assert_eq!(page.found, 1);
        assert_eq!(page.items[0].predict_rub_salary(), Some(150_000.0));
    }

    #[tokio::test]
    async fn test_fetch_page_not_ok() {
        init_logger();
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/vacancies")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"errors": [{"type": "forbidden"}]}"#)
            .create_async()
            .await;

        let client = Client::with_base_url(format!("{}/vacancies", server.url())).unwrap();
        let result = collect_language(&client, "PHP", Duration::ZERO).await;
        assert!(matches!(
            result,
            Err(Error::RequestNotOk { status, .. }) if status == reqwest::StatusCode::FORBIDDEN
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_before_each_request() {
        init_logger();
        let site = FakeSite::new(vec![json!({"items": [], "found": 60, "pages": 3})]);
        let delay = Duration::from_millis(500);
        let start = tokio::time::Instant::now();
        collect_language(&site, "C", delay).await.unwrap();
        assert_eq!(site.requested_pages(), vec![0, 1, 2]);
        assert_eq!(start.elapsed(), delay * 3);
    }

    #[tokio::test]
    async fn test_missing_found_aborts() {
        init_logger();
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/vacancies")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"items": [], "pages": 1}"#)
            .create_async()
            .await;

        let client = Client::with_base_url(format!("{}/vacancies", server.url())).unwrap();
        let result = collect_language(&client, "Go", Duration::ZERO).await;
        assert!(matches!(result, Err(Error::Request(e)) if e.is_decode()));
    }
}
