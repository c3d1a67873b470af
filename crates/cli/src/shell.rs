//! Interactive menu over a loaded dataset.
//!
//! The shell reads from any `BufRead` and writes to any `Write`, so tests
//! drive it with an in-memory script instead of a terminal.

use crate::render;
use anyhow::Result;
use colored::Colorize;
use query_engine::QueryEngine;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: [&str; 4] = [
    "1. Show movies released in the specified year",
    "2. Show highest rated movie for each year",
    "3. Show the title and year of release of all movies in a specific language",
    "4. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ByYear,
    HighestRated,
    ByLanguage,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::ByYear),
            2 => Some(Self::HighestRated),
            3 => Some(Self::ByLanguage),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Shell<'d, R, W> {
    engine: QueryEngine<'d>,
    input: R,
    output: W,
    color: bool,
}

impl<'d, R: BufRead, W: Write> Shell<'d, R, W> {
    pub fn new(engine: QueryEngine<'d>, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            color: false,
        }
    }

    /// Color the menu and prompts (default: off)
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Run the menu loop until the user picks Exit or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed, leaving the menu");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::ByYear) => self.movies_by_year_flow()?,
                Some(MenuChoice::HighestRated) => {
                    let best = self.engine.highest_rated_per_year();
                    render::write_highest_rated(&mut self.output, &best)?;
                }
                Some(MenuChoice::ByLanguage) => self.movies_by_language_flow()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting program...")?;
                    break;
                }
                None => {
                    debug!("Rejected menu input {:?}", line.trim());
                    let message = self.error_text("You entered an incorrect choice. Try again.");
                    writeln!(self.output, "{}", message)?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for entry in MENU {
            writeln!(self.output, "{}", entry)?;
        }
        let prompt = self.prompt_text("Enter a choice from 1 to 4: ");
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    fn movies_by_year_flow(&mut self) -> Result<()> {
        let prompt = self.prompt_text("Enter the year for which you want to see movies: ");
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        match line.trim().parse::<i32>() {
            Ok(year) => {
                let titles = self.engine.movies_by_year(year);
                render::write_movies_by_year(&mut self.output, year, &titles)?;
            }
            Err(_) => {
                let message =
                    self.error_text(&format!("{:?} is not a valid year.", line.trim()));
                writeln!(self.output, "{}", message)?;
            }
        }
        Ok(())
    }

    fn movies_by_language_flow(&mut self) -> Result<()> {
        let prompt = self.prompt_text("Enter the language for which you want to see movies: ");
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let language = line.trim();
        let matches = self.engine.movies_by_language(language);
        render::write_movies_by_language(&mut self.output, language, &matches)?;
        Ok(())
    }

    /// `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt_text(&self, text: &str) -> String {
        if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn error_text(&self, text: &str) -> String {
        if self.color {
            format!("{} {}", "✗".red(), text.red())
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Dataset, LoaderConfig};
    use std::io::Cursor;

    const MOVIES: &str = "title,year,languages,rating
Inception,2010,[English;Japanese],8.8
Parasite,2019,[Korean],8.6
Tangled,2010,[English],7.7
";

    fn run_script(script: &str) -> String {
        let dataset = Dataset::parse_str(MOVIES, &LoaderConfig::default()).unwrap();
        let engine = QueryEngine::new(&dataset);
        let mut output = Vec::new();

        Shell::new(engine, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1\n"), Some(MenuChoice::ByYear));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("two"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_movies_by_year_flow() {
        let output = run_script("1\n2010\n1\n1995\n4\n");
        assert!(output
            .contains("Enter the year for which you want to see movies: Inception\nTangled\n"));
        assert!(output.contains("No data about movies released in the year 1995\n"));
        assert!(output.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_highest_rated_flow() {
        let output = run_script("2\n4\n");
        assert!(output.contains("2010 8.8 Inception\n2019 8.6 Parasite\n"));
    }

    #[test]
    fn test_movies_by_language_flow() {
        let output = run_script("3\nEnglish\n3\nKlingon\n4\n");
        assert!(output.contains("2010 Inception\n2010 Tangled\n"));
        assert!(output.contains("No data about movies released in Klingon\n"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let output = run_script("7\nhello\n4\n");
        assert_eq!(
            output.matches("You entered an incorrect choice. Try again.").count(),
            2
        );
        assert_eq!(output.matches("Enter a choice from 1 to 4: ").count(), 3);
    }

    #[test]
    fn test_invalid_year_returns_to_menu() {
        let output = run_script("1\nnineteen\n4\n");
        assert!(output.contains("\"nineteen\" is not a valid year."));
        assert!(output.ends_with("Exiting program...\n"));
    }

    #[test]
    fn test_end_of_input_stops_the_loop() {
        let output = run_script("2\n");
        assert!(output.contains("2019 8.6 Parasite"));
        assert!(!output.contains("Exiting program..."));

        // A prompt cut off by end of input is not an error either
        run_script("1\n");
        run_script("3");
    }
}
