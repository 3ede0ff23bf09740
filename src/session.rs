//! Interactive session: the read-dispatch-print loop.
//!
//! A [`Session`] owns the contact directory for the lifetime of one run.
//! Handler errors are rendered as reply text; only an exit command, end of
//! input or an I/O failure ends the loop.

use crate::clock::{Clock, SystemClock};
use crate::commands::handlers::{self, FAREWELL, GREETING, INVALID_COMMAND};
use crate::commands::{Command, ParsedLine};
use crate::config::Config;
use crate::directory::ContactDirectory;
use crate::error::AssistantResult;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next line.
    Continue(String),
    /// Print the reply and stop.
    Exit(String),
}

impl Outcome {
    pub fn reply(&self) -> &str {
        match self {
            Self::Continue(reply) | Self::Exit(reply) => reply,
        }
    }
}

/// One interactive run of the assistant.
pub struct Session<C: Clock = SystemClock> {
    directory: ContactDirectory,
    config: Config,
    clock: C,
}

impl Session<SystemClock> {
    /// A session using the machine's local date.
    pub fn with_system_clock(config: Config) -> Self {
        Self::new(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn new(config: Config, clock: C) -> Self {
        Self {
            directory: ContactDirectory::new(),
            config,
            clock,
        }
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    /// Handle one line of input.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let ParsedLine { command, args } = ParsedLine::parse(line);
        debug!(?command, arg_count = args.len(), "Dispatching command");

        let result: AssistantResult<String> = match command {
            Command::Exit => return Outcome::Exit(FAREWELL.to_string()),
            Command::Hello => Ok(GREETING.to_string()),
            Command::Add => handlers::add_contact(&args, &mut self.directory),
            Command::Change => handlers::change_contact(&args, &mut self.directory),
            Command::Phone => handlers::show_phones(&args, &self.directory),
            Command::RemovePhone => handlers::remove_phone(&args, &mut self.directory),
            Command::All => Ok(handlers::show_all(&self.directory)),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.directory),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.directory),
            Command::Birthdays => Ok(handlers::upcoming_birthdays(
                &self.directory,
                self.clock.today(),
                self.config.birthday_window_days,
            )),
            Command::Unknown(token) => {
                debug!(token = %token, "Unknown command");
                Ok(INVALID_COMMAND.to_string())
            }
        };

        match result {
            Ok(reply) => Outcome::Continue(reply),
            Err(e) => {
                warn!(error = %e, "Command failed");
                Outcome::Continue(e.to_string())
            }
        }
    }

    /// Run the prompt loop until an exit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                info!("End of input, closing session");
                writeln!(output)?;
                break;
            }

            match self.execute(&line) {
                Outcome::Continue(reply) => writeln!(output, "{}", reply)?,
                Outcome::Exit(reply) => {
                    writeln!(output, "{}", reply)?;
                    info!(contacts = self.directory.len(), "Session closed by user");
                    break;
                }
            }
        }

        output.flush()
    }
}
