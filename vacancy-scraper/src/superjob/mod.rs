pub mod scraper;
pub mod types;

pub use scraper::{collect_all, collect_language, page_count, Client, PAGE_SIZE};
