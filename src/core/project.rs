//! Projection of the dataset and selection into a render-ready row/column
//! structure shared by the terminal table and the spreadsheet export.

use crate::core::normalize::{self, NormalizedValue};
use crate::core::rates::RateSet;
use crate::core::selection::Selection;
use chrono::NaiveDate;

pub const DATE_HEADER: &str = "Date";
pub const LEGAL_BASIS_HEADER: &str = "Dasar Hukum";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

#[derive(Debug)]
pub struct Projection {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Projection {
    /// Rows for the rendered table: one per date present in the dataset,
    /// ascending, with the no-data marker substituted downstream for
    /// missing values.
    pub fn for_display(rates: &RateSet, selection: &Selection) -> Projection {
        let rows = rates
            .iter()
            .map(|(date, daily)| {
                let mut row = vec![
                    Cell::Text(date.format("%Y-%m-%d").to_string()),
                    Cell::Text(daily.legal_basis.clone()),
                ];
                for code in selection.codes() {
                    row.push(value_cell(daily.value(code), code));
                }
                row
            })
            .collect();

        Projection {
            header: header_for(selection),
            rows,
        }
    }

    /// Rows for the workbook: one per originally requested date, so dates
    /// whose fetch failed still appear with a blank legal basis and values.
    /// Dates use day/month/year display form.
    pub fn for_export(
        rates: &RateSet,
        selection: &Selection,
        requested: &[NaiveDate],
    ) -> Projection {
        let rows = requested
            .iter()
            .map(|date| {
                let daily = rates.get(*date);
                let mut row = vec![
                    Cell::Text(date.format("%d/%m/%Y").to_string()),
                    daily
                        .map(|d| Cell::Text(d.legal_basis.clone()))
                        .unwrap_or(Cell::Missing),
                ];
                for code in selection.codes() {
                    row.push(value_cell(daily.and_then(|d| d.value(code)), code));
                }
                row
            })
            .collect();

        Projection {
            header: header_for(selection),
            rows,
        }
    }
}

fn header_for(selection: &Selection) -> Vec<String> {
    let mut header = vec![DATE_HEADER.to_string(), LEGAL_BASIS_HEADER.to_string()];
    header.extend(selection.codes().iter().cloned());
    header
}

fn value_cell(raw: Option<&str>, code: &str) -> Cell {
    match raw.and_then(|r| normalize::normalize(r, code)) {
        Some(NormalizedValue::Text(text)) => Cell::Text(text),
        Some(NormalizedValue::Number(number)) => Cell::Number(number),
        None => Cell::Missing,
    }
}
