//! Command handlers.
//!
//! Each handler validates its arguments, works on the directory and returns
//! the reply line, or an [`AssistantError`] that the session shows instead.

use crate::directory::ContactDirectory;
use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{AssistantError, AssistantResult};
use crate::models::Record;
use chrono::NaiveDate;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Ensure at least `count` arguments were given.
fn require<'a>(
    args: &'a [String],
    count: usize,
    usage: &'static str,
) -> AssistantResult<&'a [String]> {
    if args.len() < count {
        return Err(AssistantError::MissingArguments { usage });
    }
    Ok(&args[..count])
}

fn existing<'a>(directory: &'a ContactDirectory, name: &str) -> AssistantResult<&'a Record> {
    directory
        .find(name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
}

fn existing_mut<'a>(
    directory: &'a mut ContactDirectory,
    name: &str,
) -> AssistantResult<&'a mut Record> {
    directory
        .find_mut(name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
pub fn add_contact(args: &[String], directory: &mut ContactDirectory) -> AssistantResult<String> {
    let args = require(args, 2, "add <name> <phone>")?;
    let name = ContactName::new(args[0].as_str())?;
    let phone = PhoneNumber::new(args[1].as_str())?;

    match directory.find_mut(name.as_str()) {
        Some(record) => {
            record.add_phone(phone);
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name);
            record.add_phone(phone);
            directory.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(
    args: &[String],
    directory: &mut ContactDirectory,
) -> AssistantResult<String> {
    let args = require(args, 3, "change <name> <old phone> <new phone>")?;
    let name = args[0].as_str();
    existing_mut(directory, name)?.change_phone(&args[1], &args[2])?;
    Ok(format!("Phone number updated for {}.", name))
}

/// `remove-phone <name> <phone>`: drop every matching phone.
pub fn remove_phone(args: &[String], directory: &mut ContactDirectory) -> AssistantResult<String> {
    let args = require(args, 2, "remove-phone <name> <phone>")?;
    let name = args[0].as_str();
    let phone = args[1].as_str();
    if existing_mut(directory, name)?.remove_phone(phone) == 0 {
        return Err(AssistantError::PhoneNotFound(phone.to_string()));
    }
    Ok(format!("Phone number removed for {}.", name))
}

/// `phone <name>`
pub fn show_phones(args: &[String], directory: &ContactDirectory) -> AssistantResult<String> {
    let args = require(args, 1, "phone <name>")?;
    let record = existing(directory, &args[0])?;
    Ok(format!("{}: {}", record.name(), record.phones_display()))
}

/// `all`: one `name: phones` line per contact.
pub fn show_all(directory: &ContactDirectory) -> String {
    if directory.is_empty() {
        return "No contacts saved.".to_string();
    }
    directory
        .list_all()
        .map(|record| format!("{}: {}", record.name(), record.phones_display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], directory: &mut ContactDirectory) -> AssistantResult<String> {
    let args = require(args, 2, "add-birthday <name> <DD.MM.YYYY>")?;
    let name = args[0].as_str();
    let record = existing_mut(directory, name)?;
    record.add_birthday(Birthday::new(&args[1])?);
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], directory: &ContactDirectory) -> AssistantResult<String> {
    let args = require(args, 1, "show-birthday <name>")?;
    let record = existing(directory, &args[0])?;
    let birthday = record
        .birthday()
        .ok_or_else(|| AssistantError::BirthdayNotSet(record.name().to_string()))?;
    Ok(format!("{}'s birthday is {}", record.name(), birthday))
}

/// `birthdays`: upcoming birthdays within `window_days` of `today`.
pub fn upcoming_birthdays(
    directory: &ContactDirectory,
    today: NaiveDate,
    window_days: u32,
) -> String {
    let upcoming = directory.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return match window_days {
            7 => "No birthdays in the upcoming week.".to_string(),
            1 => "No birthdays in the next day.".to_string(),
            n => format!("No birthdays in the next {} days.", n),
        };
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_contact_then_update() {
        let mut dir = ContactDirectory::new();
        assert_eq!(
            add_contact(&args(&["John", "1234567890"]), &mut dir).unwrap(),
            "Contact added."
        );
        assert_eq!(
            add_contact(&args(&["John", "0987654321"]), &mut dir).unwrap(),
            "Contact updated."
        );
        assert_eq!(
            dir.find("John").unwrap().phones_display(),
            "1234567890, 0987654321"
        );
    }

    #[test]
    fn test_add_contact_invalid_phone_creates_nothing() {
        let mut dir = ContactDirectory::new();
        let err = add_contact(&args(&["John", "123"]), &mut dir).unwrap_err();
        assert_eq!(
            err,
            AssistantError::Validation(ValidationError::InvalidPhone("123".to_string()))
        );
        assert!(dir.is_empty());
    }

    #[test]
    fn test_add_contact_empty_name_rejected() {
        let mut dir = ContactDirectory::new();
        let err = add_contact(&args(&["", "1234567890"]), &mut dir).unwrap_err();
        assert_eq!(err, AssistantError::Validation(ValidationError::EmptyName));
    }

    #[test]
    fn test_missing_arguments() {
        let mut dir = ContactDirectory::new();
        let err = add_contact(&args(&["John"]), &mut dir).unwrap_err();
        assert_eq!(
            err,
            AssistantError::MissingArguments {
                usage: "add <name> <phone>"
            }
        );
        assert!(matches!(
            change_contact(&args(&["John", "1234567890"]), &mut dir),
            Err(AssistantError::MissingArguments { .. })
        ));
        assert!(matches!(
            show_phones(&[], &dir),
            Err(AssistantError::MissingArguments { .. })
        ));
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let mut dir = ContactDirectory::new();
        add_contact(&args(&["John", "1234567890", "extra"]), &mut dir).unwrap();
        assert_eq!(dir.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_change_contact() {
        let mut dir = ContactDirectory::new();
        add_contact(&args(&["John", "1112223333"]), &mut dir).unwrap();

        let reply = change_contact(&args(&["John", "1112223333", "4445556666"]), &mut dir);
        assert_eq!(reply.unwrap(), "Phone number updated for John.");
        assert_eq!(
            show_phones(&args(&["John"]), &dir).unwrap(),
            "John: 4445556666"
        );

        let err = change_contact(&args(&["John", "1112223333", "4445556666"]), &mut dir);
        assert_eq!(
            err.unwrap_err(),
            AssistantError::PhoneNotFound("1112223333".to_string())
        );

        let err = change_contact(&args(&["Jane", "1112223333", "4445556666"]), &mut dir);
        assert_eq!(
            err.unwrap_err(),
            AssistantError::ContactNotFound("Jane".to_string())
        );
    }

    #[test]
    fn test_remove_phone() {
        let mut dir = ContactDirectory::new();
        add_contact(&args(&["John", "1112223333"]), &mut dir).unwrap();
        add_contact(&args(&["John", "4445556666"]), &mut dir).unwrap();

        assert_eq!(
            remove_phone(&args(&["John", "1112223333"]), &mut dir).unwrap(),
            "Phone number removed for John."
        );
        assert_eq!(dir.find("John").unwrap().phones_display(), "4445556666");
        assert_eq!(
            remove_phone(&args(&["John", "1112223333"]), &mut dir).unwrap_err(),
            AssistantError::PhoneNotFound("1112223333".to_string())
        );
    }

    #[test]
    fn test_show_phones_unknown_contact() {
        let dir = ContactDirectory::new();
        assert_eq!(
            show_phones(&args(&["Ghost"]), &dir).unwrap_err(),
            AssistantError::ContactNotFound("Ghost".to_string())
        );
    }

    #[test]
    fn test_show_all() {
        let mut dir = ContactDirectory::new();
        assert_eq!(show_all(&dir), "No contacts saved.");

        add_contact(&args(&["John", "1234567890"]), &mut dir).unwrap();
        add_contact(&args(&["Jane", "0987654321"]), &mut dir).unwrap();
        assert_eq!(show_all(&dir), "John: 1234567890\nJane: 0987654321");
    }

    #[test]
    fn test_birthday_handlers() {
        let mut dir = ContactDirectory::new();
        add_contact(&args(&["John", "1234567890"]), &mut dir).unwrap();

        assert_eq!(
            show_birthday(&args(&["John"]), &dir).unwrap_err(),
            AssistantError::BirthdayNotSet("John".to_string())
        );
        assert_eq!(
            add_birthday(&args(&["John", "25.12.1990"]), &mut dir).unwrap(),
            "Birthday added for John."
        );
        assert_eq!(
            show_birthday(&args(&["John"]), &dir).unwrap(),
            "John's birthday is 25.12.1990"
        );

        let err = add_birthday(&args(&["John", "1990-12-25"]), &mut dir).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY.");
        assert_eq!(
            show_birthday(&args(&["John"]), &dir).unwrap(),
            "John's birthday is 25.12.1990"
        );

        assert_eq!(
            add_birthday(&args(&["Jane", "25.12.1990"]), &mut dir).unwrap_err(),
            AssistantError::ContactNotFound("Jane".to_string())
        );
    }

    #[test]
    fn test_upcoming_birthdays_reply() {
        let mut dir = ContactDirectory::new();
        let today = date(2024, 12, 20);
        assert_eq!(
            upcoming_birthdays(&dir, today, 7),
            "No birthdays in the upcoming week."
        );
        assert_eq!(
            upcoming_birthdays(&dir, today, 30),
            "No birthdays in the next 30 days."
        );

        add_contact(&args(&["John", "1234567890"]), &mut dir).unwrap();
        add_contact(&args(&["Jane", "0987654321"]), &mut dir).unwrap();
        add_birthday(&args(&["John", "25.12.1990"]), &mut dir).unwrap();
        add_birthday(&args(&["Jane", "22.12.1985"]), &mut dir).unwrap();

        assert_eq!(
            upcoming_birthdays(&dir, today, 7),
            "Jane: 22.12.2024\nJohn: 25.12.2024"
        );
    }
}
