pub mod api;
pub mod headhunter;
pub mod salary;
pub mod stats;
pub mod superjob;

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Languages statistics are collected for, in report order
pub const PROGRAMMING_LANGUAGES: [&str; 9] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
];

/// Search text sent to every site for a single language
pub fn search_query(language: &str) -> String {
    format!("Программист {}", language)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    SuperJob,
    HeadHunter,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::SuperJob, Site::HeadHunter];

    pub fn title(&self) -> &'static str {
        match self {
            Site::SuperJob => "SuperJob Moscow",
            Site::HeadHunter => "HeadHunter Moscow",
        }
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown site: '{0}'")]
pub struct UnknownSite(pub String);

impl FromStr for Site {
    type Err = UnknownSite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sj" | "superjob" => Ok(Site::SuperJob),
            "hh" | "headhunter" => Ok(Site::HeadHunter),
            _ => Err(UnknownSite(s.to_owned())),
        }
    }
}
