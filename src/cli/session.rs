//! Session: the interactive prompt loop.

use super::console::Console;
use super::input::{parse_line, Command};
use crate::config::FieldConfig;
use crate::error::CliError;
use crate::field::{Field, Point};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const PROMPT: &str =
    "To add barren land, input 4 integers. Otherwise, press ENTER to see results.";

/// An interactive barren land analysis over one field.
///
/// Reads rectangles line by line until a blank line or end of input, then
/// prints the fertile areas. Bad lines are reported and the user is asked
/// again; nothing short of an I/O failure ends the session early.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    console: Console<W>,
    field: Field,
    config: FieldConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Build a session. Fails if the configured dimensions are invalid.
    pub fn new(config: FieldConfig, input: R, console: Console<W>) -> Result<Self, CliError> {
        let field = Field::new(config.width, config.height)?;
        Ok(Self {
            input,
            console,
            field,
            config,
        })
    }

    /// The field being edited.
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// Print the banner and instructions.
    pub fn welcome(&mut self) -> Result<(), CliError> {
        let FieldConfig { width, height } = self.config;
        self.console.line("WELCOME TO THE BARREN LAND ANALYSIS")?;
        self.console.line(&format!(
            "The farm field is {width} x {height}. Please enter rectangles of barren land."
        ))?;
        self.console.line(
            "Rectangles are four integers separated by spaces. The first two are the \
             bottom left corner and the last two are the top right corner.",
        )?;
        self.console.line(&format!(
            "Valid x values range from 0 to {} and valid y values range from 0 to {}.",
            self.config.max_x(),
            self.config.max_y()
        ))?;
        self.console.line(
            "Press ENTER after each rectangle. When all barren land is added, press ENTER again.",
        )?;
        self.console.blank()?;
        Ok(())
    }

    /// Prompt for rectangles until the user is done, then analyse.
    ///
    /// Returns the sorted fertile areas that were printed.
    pub fn run(&mut self) -> Result<Vec<usize>, CliError> {
        self.welcome()?;
        while self.read_barren_land()? {}

        self.console.line("Calculating . . .")?;
        self.console.blank()?;
        let areas = self.field.fertile_areas();
        self.console.areas(&areas)?;
        self.console.flush()?;
        Ok(areas)
    }

    /// Handle one prompt. Returns `false` once the user is done.
    fn read_barren_land(&mut self) -> Result<bool, CliError> {
        self.console.line(PROMPT)?;
        self.console.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(false);
        }

        match parse_line(&line) {
            Ok(Command::Analyse) => Ok(false),
            Ok(Command::Barren { bottom, top }) => {
                self.add_barren_land(bottom, top)?;
                Ok(true)
            }
            Err(err) => {
                debug!(%err, line = line.trim(), "rejected input");
                self.console.error(&err.to_string())?;
                Ok(true)
            }
        }
    }

    fn add_barren_land(&mut self, bottom: Point, top: Point) -> Result<(), CliError> {
        match self.field.mark_barren(bottom, top) {
            Ok(()) => self
                .console
                .success("Barren land was successfully added to the farm field.")?,
            Err(err) => {
                warn!(%err, "barren land outside the field");
                self.console.error(&format!(
                    "Your coordinates did not fall within the boundary of the farm field. \
                     X coordinates should be from 0 to {}. Y coordinates should be from 0 to {}.",
                    self.config.max_x(),
                    self.config.max_y()
                ))?;
            }
        }
        Ok(())
    }

    /// Unwrap the console.
    pub fn into_console(self) -> Console<W> {
        self.console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run(config: FieldConfig, input: &str) -> (Vec<usize>, String) {
        let console = Console::new(Vec::new(), false);
        let mut session = Session::new(config, Cursor::new(input.to_string()), console).unwrap();
        let areas = session.run().unwrap();
        let out = String::from_utf8(session.into_console().into_inner()).unwrap();
        (areas, out)
    }

    #[test]
    fn test_session_single_strip() {
        let (areas, out) = run(FieldConfig::default(), "0 292 399 307\n\n");
        assert_eq!(areas, vec![116_800, 116_800]);
        assert!(out.contains("Barren land was successfully added"));
        assert!(out.ends_with("116800 116800\n"));
    }

    #[test]
    fn test_session_four_rectangles() {
        let input = "48 192 351 207\n48 392 351 407\n120 52 135 547\n260 52 275 547\n\n";
        let (areas, out) = run(FieldConfig::default(), input);
        assert_eq!(areas, vec![22_816, 192_608]);
        assert!(out.ends_with("22816 192608\n"));
    }

    #[test]
    fn test_session_end_of_input_analyses() {
        let (areas, _) = run(FieldConfig::default(), "");
        assert_eq!(areas, vec![240_000]);
    }

    #[test]
    fn test_session_recovers_from_bad_lines() {
        let config = FieldConfig {
            width: 30,
            height: 30,
        };
        let input = "1 2 3\nfoo 1 2 3\n28 2 20 7\n0 0 30 0\n3 4 8 29\n\n";
        let (areas, out) = run(config, input);

        // only the last rectangle is applied
        assert_eq!(areas, vec![900 - 6 * 26]);
        assert!(out.contains("You entered 3 token(s)"));
        assert!(out.contains("was not an integer"));
        assert!(out.contains("bottom corner is either above or to the right"));
        assert!(out.contains("X coordinates should be from 0 to 29"));
        assert_eq!(out.matches("successfully added").count(), 1);
    }

    #[test]
    fn test_session_stops_at_blank_line() {
        let config = FieldConfig {
            width: 10,
            height: 10,
        };
        let (areas, _) = run(config, "0 0 9 4\n\n0 5 9 9\n");
        assert_eq!(areas, vec![50]);
    }

    #[test]
    fn test_session_invalid_dimensions() {
        let config = FieldConfig {
            width: 0,
            height: 600,
        };
        let console = Console::new(Vec::new(), false);
        let result = Session::new(config, Cursor::new(String::new()), console);
        assert!(matches!(result, Err(CliError::Field(_))));
    }

    #[test]
    fn test_session_welcome_names_ranges() {
        let (_, out) = run(FieldConfig::default(), "\n");
        assert!(out.starts_with("WELCOME TO THE BARREN LAND ANALYSIS\n"));
        assert!(out.contains("The farm field is 400 x 600"));
        assert!(out.contains("from 0 to 399"));
        assert!(out.contains("from 0 to 599"));
    }
}
