use serde::Serialize;
use vacancy_scraper::stats::SourceResult;

use crate::Result;

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

#[derive(Serialize)]
struct Report<'a> {
    site: &'a str,
    languages: &'a SourceResult,
}

/// Render the stats as an ascii table with `title` embedded in its top border
pub fn render_table(title: &str, result: &SourceResult) -> String {
    let mut rows = vec![HEADER.map(String::from)];
    rows.extend(result.iter().map(|(language, stats)| {
        [
            language.to_owned(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats.average_salary.to_string(),
        ]
    }));

    let mut widths = [0; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = border(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(titled_border(&separator, title));
    for (i, row) in rows.iter().enumerate() {
        lines.push(table_row(&widths, row));
        if i == 0 {
            lines.push(separator.clone());
        }
    }
    lines.push(separator);
    lines.join("\n")
}

/// Render the stats of every site as a single JSON array
pub fn render_json(results: &[(&str, &SourceResult)]) -> Result<String> {
    let reports = results
        .iter()
        .map(|(title, result)| Report {
            site: *title,
            languages: *result,
        })
        .collect::<Vec<_>>();
    Ok(serde_json::to_string_pretty(&reports)?)
}

fn border(widths: &[usize]) -> String {
    let segments = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>();
    format!("+{}+", segments.join("+"))
}

/// Overwrite the start of the border with the title, the title is dropped if it doesn't fit
fn titled_border(border: &str, title: &str) -> String {
    let inner = &border[1..border.len() - 1];
    let title_len = title.chars().count();
    if title_len > inner.len() {
        return border.to_owned();
    }
    format!("+{}{}+", title, &inner[title_len..])
}

fn table_row(widths: &[usize], row: &[String]) -> String {
    let cells = widths
        .iter()
        .zip(row)
        .map(|(width, cell)| format!(" {:<width$} ", cell, width = width))
        .collect::<Vec<_>>();
    format!("|{}|", cells.join("|"))
}
