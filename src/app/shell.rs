use crate::core::manager::LibraryManager;
use crate::utils::error::{AppError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit): ";
pub const TITLE_PROMPT: &str = "Enter book title: ";
pub const AUTHOR_PROMPT: &str = "Enter book author: ";
pub const YEAR_PROMPT: &str = "Enter book year: ";
pub const REMOVE_PROMPT: &str = "Enter book title to remove: ";
pub const INVALID_COMMAND_NOTICE: &str = "Invalid command. Please try again.";
pub const FAREWELL_NOTICE: &str = "Exiting the program. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Show,
    Exit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Command::Add),
            "remove" => Ok(Command::Remove),
            "show" => Ok(Command::Show),
            "exit" => Ok(Command::Exit),
            _ => Err(AppError::InvalidCommand {
                input: s.to_string(),
            }),
        }
    }
}

/// Line-oriented driver: prompts on `output`, reads answers from `input`.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `exit` or end of input. Only I/O failures surface as errors.
    pub fn run(&mut self, manager: &mut LibraryManager<'_>) -> Result<()> {
        while let Some(line) = self.prompt(COMMAND_PROMPT)? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    tracing::debug!("{}", e);
                    manager.notify(INVALID_COMMAND_NOTICE);
                    continue;
                }
            };
            tracing::debug!("Dispatching {:?}", command);

            match command {
                Command::Add => {
                    let Some(title) = self.prompt(TITLE_PROMPT)? else {
                        break;
                    };
                    let Some(author) = self.prompt(AUTHOR_PROMPT)? else {
                        break;
                    };
                    let Some(year) = self.prompt(YEAR_PROMPT)? else {
                        break;
                    };
                    manager.add_book(&title, &author, &year);
                }
                Command::Remove => {
                    let Some(title) = self.prompt(REMOVE_PROMPT)? else {
                        break;
                    };
                    manager.remove_book(&title);
                }
                Command::Show => manager.show_books(),
                Command::Exit => break,
            }
        }

        manager.notify(FAREWELL_NOTICE);
        Ok(())
    }

    /// Writes `text` and reads one trimmed line; `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("Input closed");
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fall through to the invalid-command path.
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
