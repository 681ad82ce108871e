use serde::ser::{Serialize, SerializeMap, Serializer};

/// Salary statistics of one programming language on one site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Running count and sum of salary estimates for a single language
#[derive(Debug, Default)]
pub struct SalaryAccumulator {
    processed: u64,
    sum: f64,
}

impl SalaryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an estimate, returns false if it was absent or not positive
    pub fn add(&mut self, estimate: Option<f64>) -> bool {
        match estimate {
            Some(salary) if salary > 0.0 => {
                self.processed += 1;
                self.sum += salary;
                true
            }
            _ => false,
        }
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Mean of the counted estimates truncated to an integer, 0 without estimates
    pub fn average(&self) -> u64 {
        if self.processed == 0 {
            return 0;
        }
        (self.sum / self.processed as f64) as u64
    }

    pub fn finish(self, vacancies_found: u64) -> LanguageStats {
        LanguageStats {
            vacancies_found,
            vacancies_processed: self.processed,
            average_salary: self.average(),
        }
    }
}

impl Extend<Option<f64>> for SalaryAccumulator {
    fn extend<I: IntoIterator<Item = Option<f64>>>(&mut self, estimates: I) {
        for estimate in estimates {
            self.add(estimate);
        }
    }
}

/// Statistics of every language collected from one site, in collection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceResult {
    languages: Vec<(String, LanguageStats)>,
}

impl SourceResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert stats for a language, replacing earlier stats without changing its position
    pub fn insert(&mut self, language: impl Into<String>, stats: LanguageStats) {
        let language = language.into();
        match self.languages.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = stats,
            None => self.languages.push((language, stats)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.languages
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Serialize for SourceResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.languages.len()))?;
        for (language, stats) in &self.languages {
            map.serialize_entry(language, stats)?;
        }
        map.end()
    }
}
