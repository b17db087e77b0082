use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Result;

/// One selectable entry: the label the user sees and the value the
/// caller gets back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opt {
    pub label: String,
    pub value: String,
}

/// Ordered option list with unique labels.
///
/// Insertion order drives display order, 1-based numbering, and
/// menu-letter assignment. Construction fails on empty or duplicate
/// labels; user-input mistakes are handled later by the prompt loop,
/// this is a caller-side contract.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    options: Vec<Opt>,
}

impl OptionSet {
    /// Build from plain labels; each label doubles as its value.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_pairs(labels.into_iter().map(|label| {
            let label = label.into();
            (label.clone(), label)
        }))
    }

    /// Build from (label, value) pairs, order preserved.
    pub fn from_pairs<I, L, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        let mut options: Vec<Opt> = Vec::new();
        for (label, value) in pairs {
            let label = label.into();
            if label.trim().is_empty() {
                return Err(Error::Config("option label cannot be empty".to_string()));
            }
            if options
                .iter()
                .any(|o| o.label.eq_ignore_ascii_case(&label))
            {
                return Err(Error::Config(format!("duplicate option label: {label}")));
            }
            options.push(Opt {
                label,
                value: value.into(),
            });
        }
        Ok(Self { options })
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Opt> {
        self.options.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Opt> {
        self.options.get(index)
    }

    /// Case-insensitive label lookup.
    pub fn find_by_label(&self, token: &str) -> Option<&Opt> {
        self.options
            .iter()
            .find(|o| o.label.eq_ignore_ascii_case(token))
    }

    /// Exact value lookup. Labels win over values at the call site since
    /// labels are what the user saw.
    pub fn find_by_value(&self, token: &str) -> Option<&Opt> {
        self.options.iter().find(|o| o.value == token)
    }

    /// Assign one selection letter per option, in insertion order.
    ///
    /// For each label the first alphanumeric character (lowercased) not
    /// already taken wins; a label with no unused character falls back to
    /// the first unused letter of `a..=z`, and `?` once even those are
    /// gone. Deterministic for any input.
    pub fn menu_letters(&self) -> Vec<char> {
        let mut taken: Vec<char> = Vec::with_capacity(self.options.len());
        for opt in &self.options {
            let pick = opt
                .label
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .map(|c| c.to_ascii_lowercase())
                .find(|c| !taken.contains(c))
                .or_else(|| ('a'..='z').find(|c| !taken.contains(c)))
                .unwrap_or('?');
            taken.push(pick);
        }
        taken
    }
}
