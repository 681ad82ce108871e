pub mod scraper;
pub mod types;

pub use scraper::{collect_all, collect_language, Client, DEFAULT_DELAY};
