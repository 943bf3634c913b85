//! The user's view filter over the available currency codes.

use crate::core::rates::LEGAL_BASIS_FIELD;

/// Ordered set of selected currency codes, most recently added first.
///
/// The selection has its own lifecycle: it survives a dataset reload and is
/// only meaningful once a dataset is present.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    codes: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `code` to the front of the selection, or removes it. The legal
    /// basis pseudo-field is never selectable.
    pub fn toggle(&mut self, code: &str, included: bool) {
        self.codes.retain(|c| c != code);
        if included && code != LEGAL_BASIS_FIELD {
            self.codes.insert(0, code.to_string());
        }
    }

    /// Replaces the selection with every available code.
    pub fn select_all<'a>(&mut self, available: impl IntoIterator<Item = &'a str>) {
        self.codes = available
            .into_iter()
            .filter(|code| *code != LEGAL_BASIS_FIELD)
            .map(String::from)
            .collect();
    }

    pub fn clear(&mut self) {
        self.codes.clear();
    }

    /// Selected codes in display order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether every available code is selected. Compares against the actual
    /// available set rather than a fixed supported-currency count.
    pub fn is_all_selected<'a>(&self, available: impl IntoIterator<Item = &'a str>) -> bool {
        let available: Vec<&str> = available
            .into_iter()
            .filter(|code| *code != LEGAL_BASIS_FIELD)
            .collect();
        self.codes.len() == available.len()
            && available
                .iter()
                .all(|code| self.codes.iter().any(|c| c == code))
    }
}
