//! In-memory contact directory keyed by contact name.

use crate::domain::DATE_FORMAT;
use crate::models::Record;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Date of the next birthday (not the date of birth)
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The next birthday rendered as `DD.MM.YYYY`.
    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(DATE_FORMAT))
    }
}

/// All contacts of the current session.
///
/// Names are unique. Enumeration follows the order in which names were
/// first added; overwriting a record keeps its position.
#[derive(Debug, Default)]
pub struct ContactDirectory {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let slot = *self.index.get(name)?;
        self.records.get_mut(slot)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record, in insertion order. Each call starts a fresh pass.
    pub fn list_all(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    /// Contacts whose next birthday is between `today` and `today + window_days`,
    /// both ends included, ordered by that date and then by name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let date = record.birthday()?.next_occurrence(today)?;
                let days = (date - today).num_days();
                (0..=window).contains(&days).then(|| UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        upcoming
    }
}
