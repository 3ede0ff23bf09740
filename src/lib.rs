//! Contact Assistant - an interactive command-line contact manager.
//!
//! Contacts live in memory for the duration of one session. Each contact has
//! a name, any number of phone numbers and an optional birthday; the assistant
//! can list who has a birthday coming up.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: The contact record
//! - **directory**: The in-memory collection of records and birthday queries
//! - **commands**: Line parsing and command handlers
//! - **session**: The interactive read-dispatch-print loop
//! - **clock**: Source of today's date
//! - **config**: Optional settings from the environment
//! - **error**: Error types shown to the user

pub mod clock;
pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use directory::{ContactDirectory, UpcomingBirthday};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{AssistantError, AssistantResult, ConfigError};
pub use models::Record;
pub use session::{Outcome, Session};
