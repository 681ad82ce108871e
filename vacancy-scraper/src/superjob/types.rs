use serde::Deserialize;

use crate::salary::SalaryRange;

/// Only salaries paid in roubles are estimated
const TARGET_CURRENCY: &str = "rub";

#[derive(Deserialize, Debug, Clone)]
pub struct Vacancy {
    pub id: Option<u64>,
    pub profession: Option<String>,
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}

impl Vacancy {
    /// Salary estimate in roubles, superjob reports a missing bound as `0`
    pub fn predict_rub_salary(&self) -> Option<f64> {
        if self.currency.as_deref() != Some(TARGET_CURRENCY) {
            return None;
        }
        SalaryRange::from_bounds(self.payment_from, self.payment_to).estimate()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct VacanciesPage {
    pub objects: Vec<Vacancy>,
    pub total: u64,
}
