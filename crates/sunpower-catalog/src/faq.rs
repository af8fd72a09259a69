//! # FAQ Accordion
//!
//! At most one answer is expanded at a time. Clicking the open question
//! collapses it, clicking any other question moves the expansion there.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CatalogResult;
use crate::validation::validate_index;

/// A question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        FaqEntry {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

const BUILTIN_FAQ: [(&str, &str); 4] = [
    (
        "What services does Sun PowerTech provide?",
        "We provide comprehensive power management solutions including Power Filtration, Power Conditioning, Power Protection, Energy Management Systems, and SCADA solutions for industrial and commercial applications.",
    ),
    (
        "How can I get a quote for my project?",
        "You can contact us through our website form, email us at amittiwari@sunpowertech.net, or call us directly. Our team will assess your requirements and provide a customized quote.",
    ),
    (
        "Do you provide installation and maintenance services?",
        "Yes, we offer complete turnkey solutions including installation, commissioning, and ongoing maintenance support with 24/7 technical assistance.",
    ),
    (
        "What industries do you serve?",
        "We serve various industries including Manufacturing, IT & Data Centers, Healthcare, Commercial Buildings, Pharmaceuticals, and more.",
    ),
];

/// Accordion state over a fixed list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    entries: Vec<FaqEntry>,
    open_index: Option<usize>,
}

impl FaqAccordion {
    /// Creates an accordion. With `open_first`, the first entry (if any)
    /// starts expanded.
    pub fn new(entries: Vec<FaqEntry>, open_first: bool) -> Self {
        let open_index = if open_first && !entries.is_empty() {
            Some(0)
        } else {
            None
        };
        FaqAccordion {
            entries,
            open_index,
        }
    }

    /// The site's FAQ, first answer expanded.
    pub fn builtin() -> Self {
        FaqAccordion::new(
            BUILTIN_FAQ
                .iter()
                .map(|(question, answer)| FaqEntry::new(*question, *answer))
                .collect(),
            true,
        )
    }

    #[inline]
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    #[inline]
    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    #[inline]
    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index)
    }

    /// Toggles entry `index` and returns the new open index.
    ///
    /// ## Errors
    /// `CatalogError::IndexOutOfRange` if there is no such entry.
    pub fn toggle(&mut self, index: usize) -> CatalogResult<Option<usize>> {
        let index = validate_index(index, self.entries.len())?;
        self.open_index = if self.is_open(index) { None } else { Some(index) };
        Ok(self.open_index)
    }

    pub fn collapse_all(&mut self) {
        self.open_index = None;
    }
}

impl Default for FaqAccordion {
    fn default() -> Self {
        FaqAccordion::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_builtin_starts_with_first_open() {
        let faq = FaqAccordion::builtin();
        assert_eq!(faq.entries().len(), 4);
        assert_eq!(faq.open_index(), Some(0));
    }

    #[test]
    fn test_toggle_same_entry_twice_restores() {
        let mut faq = FaqAccordion::builtin();
        assert_eq!(faq.toggle(2).unwrap(), Some(2));
        assert_eq!(faq.toggle(2).unwrap(), None);
        assert_eq!(faq.toggle(2).unwrap(), Some(2));
    }

    #[test]
    fn test_opening_one_closes_other() {
        let mut faq = FaqAccordion::builtin();
        faq.toggle(3).unwrap();
        assert!(faq.is_open(3));
        assert!(!faq.is_open(0));
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut faq = FaqAccordion::builtin();
        assert_eq!(
            faq.toggle(4),
            Err(CatalogError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(faq.open_index(), Some(0));
    }

    #[test]
    fn test_empty_accordion_never_opens() {
        let faq = FaqAccordion::new(Vec::new(), true);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn test_collapse_all() {
        let mut faq = FaqAccordion::builtin();
        faq.collapse_all();
        assert_eq!(faq.open_index(), None);
    }
}
