use crate::domain::{phone_match_key, ContactRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Phone numbers keyed by their digits, so `+573001112233` and
/// `573001112233` are the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneSet {
    keys: HashSet<String>,
}

impl PhoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the value holds no digits or is already present.
    pub fn insert(&mut self, phone: &str) -> bool {
        match phone_match_key(phone) {
            Some(key) => self.keys.insert(key),
            None => false,
        }
    }

    pub fn contains_phone(&self, phone: &str) -> bool {
        phone_match_key(phone).is_some_and(|key| self.keys.contains(&key))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PhoneSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for phone in iter {
            set.insert(phone.as_ref());
        }
        set
    }
}

/// How the loaded number list is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// The list holds reachable numbers; everything else is removed.
    #[default]
    Allow,
    /// The list holds unreachable numbers; those are removed.
    Deny,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub kept: Vec<ContactRecord>,
    pub removed: Vec<ContactRecord>,
}

/// Splits records by membership in `numbers`, keeping input order on both
/// sides.
pub fn partition_by_validity(
    records: Vec<ContactRecord>,
    numbers: &PhoneSet,
    mode: ListMode,
) -> Partition {
    let (kept, removed) = records.into_par_iter().partition(|record| {
        let listed = numbers.contains_phone(&record.phone);
        match mode {
            ListMode::Allow => listed,
            ListMode::Deny => !listed,
        }
    });
    Partition { kept, removed }
}
