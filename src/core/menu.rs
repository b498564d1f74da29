//! Interactive menu loop.
//!
//! `MenuSession` is generic over its reader, writer, and rate source so the
//! whole loop can be driven from scripted input in tests. Every feature
//! error is caught at the dispatch boundary, reported on the output stream,
//! and the loop continues; only the exit choice or end-of-input stops it.

use crate::core::expr::{self, EvalMode};
use crate::core::units;
use crate::domain::model::{Category, MenuChoice, RateQuery};
use crate::domain::ports::RateSource;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::normalize_currency_code;
use std::io::{BufRead, Write};

const MENU: &str = "Options: 1. Basic Calc  2. Scientific Calc  3. Currency  4. Units  5. Exit";

/// Whether a feature ran to completion or hit end-of-input mid-prompt.
enum Step {
    Done,
    Eof,
}

pub struct MenuSession<R, W, S> {
    input: R,
    output: W,
    rates: S,
}

impl<R: BufRead, W: Write, S: RateSource> MenuSession<R, W, S> {
    pub fn new(input: R, output: W, rates: S) -> Self {
        Self {
            input,
            output,
            rates,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU)?;
            let line = match self.prompt("Choose: ")? {
                Some(line) => line,
                None => break,
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };
            tracing::debug!(?choice, "dispatching menu choice");

            let step = match choice {
                MenuChoice::BasicCalc => self.run_calculator(EvalMode::Basic),
                MenuChoice::ScientificCalc => self.run_calculator(EvalMode::Scientific),
                MenuChoice::Currency => self.run_currency().await,
                MenuChoice::Units => self.run_units(),
                MenuChoice::Exit => break,
            };

            match step {
                Ok(Step::Done) => {}
                Ok(Step::Eof) => break,
                Err(e) => self.report(&e)?,
            }
        }
        Ok(())
    }

    fn run_calculator(&mut self, mode: EvalMode) -> Result<Step> {
        let banner = match mode {
            EvalMode::Basic => "Basic Calculator: enter expression (e.g., 2+3*4)",
            EvalMode::Scientific => {
                "Scientific Calculator: enter expression (supports sin, cos, tan, log, exp, sqrt, ^, pi)"
            }
        };
        writeln!(self.output, "{}", banner)?;
        let line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(Step::Eof),
        };
        let value = expr::evaluate(&line, mode)?;
        writeln!(self.output, "Result: {}", value)?;
        Ok(Step::Done)
    }

    async fn run_currency(&mut self) -> Result<Step> {
        let amount_text = match self.prompt("Amount: ")? {
            Some(line) => line,
            None => return Ok(Step::Eof),
        };
        let amount: f64 = amount_text
            .trim()
            .parse()
            .map_err(|_| CalcError::InvalidNumber {
                input: amount_text.trim().to_string(),
            })?;

        let from = match self.prompt("From currency (e.g., USD): ")? {
            Some(line) => line,
            None => return Ok(Step::Eof),
        };
        let to = match self.prompt("To currency (e.g., EUR): ")? {
            Some(line) => line,
            None => return Ok(Step::Eof),
        };
        let query = RateQuery {
            from: normalize_currency_code(&from)?,
            to: normalize_currency_code(&to)?,
            amount,
        };

        tracing::debug!(from = %query.from, to = %query.to, "fetching exchange rate");
        let rate = self.rates.fetch_rate(&query.from, &query.to).await?;
        writeln!(self.output, "Result: {:.2} {}", query.amount * rate, query.to)?;
        Ok(Step::Done)
    }

    fn run_units(&mut self) -> Result<Step> {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        writeln!(self.output, "Categories: {}", names.join(", "))?;
        let category_text = match self.prompt("Category: ")? {
            Some(line) => line,
            None => return Ok(Step::Eof),
        };
        let category = Category::parse(&category_text)?;
        writeln!(
            self.output,
            "Units: {}",
            units::unit_names(category).join(", ")
        )?;

        let value_text = match self.prompt("Value: ")? {
            Some(line) => line,
            None => return Ok(Step::Eof),
        };
        let value: f64 = value_text
            .trim()
            .parse()
            .map_err(|_| CalcError::InvalidNumber {
                input: value_text.trim().to_string(),
            })?;

        let from_unit = match self.prompt("From unit: ")? {
            Some(line) => line,
            None => return Ok(Step::Eof),
        };
        let to_unit = match self.prompt("To unit: ")? {
            Some(line) => line,
            None => return Ok(Step::Eof),
        };

        let result = units::convert_between(category, value, from_unit.trim(), to_unit.trim())?;
        writeln!(
            self.output,
            "Result: {:.2} {}",
            result,
            to_unit.trim().to_uppercase()
        )?;
        Ok(Step::Done)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, error: &CalcError) -> Result<()> {
        tracing::debug!(%error, "feature reported an error");
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }
}
