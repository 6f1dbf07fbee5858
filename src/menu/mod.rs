//! Interactive console menu over any line reader and writer
//!
//! Colors go through `colored` and follow its global switch
//! (`colored::control::set_override`).

pub mod choice;

pub use choice::{MenuChoice, MenuInput};

use colored::{ColoredString, Colorize};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, BufRead, Write};

use crate::domain::{City, CityCatalog};
use crate::geometry::LengthUnit;

const INVALID_INPUT: &str = "You entered an invalid input. Exiting to main menu.";

/// Menu headings, listings and results
fn body(text: &str) -> ColoredString {
    text.white()
}

/// Prompts waiting for a line of input
fn prompt(text: &str) -> ColoredString {
    text.yellow()
}

/// Feedback on rejected input
fn notice(text: &str) -> ColoredString {
    text.magenta()
}

/// Drives the list/distance menu until the user quits or input ends
pub struct Menu<'a, R, W> {
    catalog: &'a CityCatalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a CityCatalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Run the menu loop
    ///
    /// Text that is neither an integer nor an exact entry name redisplays the
    /// menu. Integers without an entry select nothing. End of input counts as Quit.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(
                self.output,
                "{}",
                body("Please choose from the following menu options")
            )?;
            for choice in MenuChoice::ALL {
                let entry = format!("[{}] {}", choice.index(), choice);
                writeln!(self.output, "{}", body(&entry))?;
            }
            write!(self.output, "{}", prompt("Your choice: "))?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed at main menu");
                writeln!(self.output)?;
                break;
            };

            let Some(input) = MenuInput::parse(&line) else {
                tracing::debug!(input = %line, "unrecognized menu choice");
                continue;
            };
            tracing::debug!(?input, "menu choice");

            match input {
                MenuInput::Choice(MenuChoice::DisplayCities) => self.display_cities()?,
                MenuInput::Choice(MenuChoice::CityDistances) => self.city_distances()?,
                MenuInput::Choice(MenuChoice::Quit) | MenuInput::Unlisted(_) => {}
            }
            writeln!(self.output)?;

            if input == MenuInput::Choice(MenuChoice::Quit) {
                break;
            }
        }

        write!(self.output, "{}", body("Press <Enter> to quit..."))?;
        self.read_line()?;
        self.output.flush()
    }

    /// Print the listing header and one row per city
    pub fn display_cities(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", body(&City::format_header()))?;
        for city in self.catalog {
            writeln!(self.output, "{}", body(&city.format()))?;
        }
        Ok(())
    }

    /// Ask for two cities and a unit, then print the distance between them
    pub fn city_distances(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", body("City List:"))?;
        for (i, city) in self.catalog.iter().enumerate() {
            let entry = format!("{}. {}", i, city.name());
            writeln!(self.output, "{}", body(&entry))?;
        }

        let Some(first) = self.prompt_city("Enter first city number:")? else {
            return self.invalid_input();
        };
        let Some(second) = self.prompt_city("Enter second city number:")? else {
            return self.invalid_input();
        };

        writeln!(self.output, "{}", body("Please select a unit of measurement"))?;
        for (i, unit) in LengthUnit::ALL.iter().enumerate() {
            let entry = format!("[{}] {}", i, unit);
            writeln!(self.output, "{}", body(&entry))?;
        }

        let unit = self
            .read_line()?
            .and_then(|line| line.parse::<usize>().ok())
            .and_then(LengthUnit::from_index);
        let Some(unit) = unit else {
            return self.invalid_input();
        };

        let distance = first.distance_to_in(Some(second), unit);
        tracing::debug!(from = first.name(), to = second.name(), %unit, %distance, "computed distance");

        let sentence = distance_sentence(first, second, distance, unit);
        writeln!(self.output, "{}", body(&sentence))
    }

    fn prompt_city(&mut self, text: &str) -> io::Result<Option<&'a City>> {
        let catalog = self.catalog;
        write!(self.output, "{}", prompt(text))?;

        Ok(self
            .read_line()?
            .and_then(|line| line.parse::<usize>().ok())
            .and_then(|index| catalog.get(index)))
    }

    fn invalid_input(&mut self) -> io::Result<()> {
        tracing::debug!("invalid input, returning to main menu");
        writeln!(self.output, "{}", notice(INVALID_INPUT))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// `The distance between A and B is 459.6 Miles`
pub fn distance_sentence(from: &City, to: &City, distance: Decimal, unit: LengthUnit) -> String {
    format!(
        "The distance between {} and {} is {} {}",
        from.name(),
        to.name(),
        format_distance(distance),
        unit
    )
}

/// One decimal place, rounded half away from zero, at least two integer digits
pub fn format_distance(distance: Decimal) -> String {
    let rounded = distance.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.1}", rounded);

    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let integer_len = digits.find('.').unwrap_or(digits.len());
    let padding = "0".repeat(2usize.saturating_sub(integer_len));

    format!("{}{}{}", sign, padding, digits)
}
