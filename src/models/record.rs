//! Contact record: one person with their phones and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{AssistantError, AssistantResult};
use chrono::NaiveDate;
use serde::Serialize;

/// A contact in the directory.
///
/// The name is fixed at creation and is the record's identity. Phones keep
/// insertion order and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: ContactName,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `value`, returning how many were removed.
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != value);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with a phone built from `new`.
    ///
    /// # Errors
    ///
    /// - `Validation` if `new` is not a valid phone; the record is unchanged.
    /// - `PhoneNotFound` if no phone equals `old`.
    pub fn change_phone(&mut self, old: &str, new: &str) -> AssistantResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| AssistantError::PhoneNotFound(old.to_string()))?;
        *slot = replacement;
        Ok(())
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Set the birthday, replacing any earlier one.
    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days from `today` to the next birthday, or `None` without a birthday.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }

    /// Phones joined with `", "` for display.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
