use serde::Deserialize;

use crate::salary::SalaryRange;

/// Only salaries paid in roubles are estimated
const TARGET_CURRENCY: &str = "RUR";

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: Option<String>,
    pub name: Option<String>,
    pub salary: Option<Salary>,
}

impl Vacancy {
    /// Salary estimate in roubles, none for vacancies without a rouble salary
    pub fn predict_rub_salary(&self) -> Option<f64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(TARGET_CURRENCY) {
            return None;
        }
        SalaryRange::from_bounds(salary.from, salary.to).estimate()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct VacanciesPage {
    pub items: Vec<Vacancy>,
    pub found: u64,
    pub pages: u32,
}
