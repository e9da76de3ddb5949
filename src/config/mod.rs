// src/config/mod.rs
pub mod prompt;

use crate::fasta::SelectionCriterion;
use crate::utils::AppError;
use prompt::{Prompter, INPUT_PROMPT, OUTPUT_PROMPT, SELECT_PROMPT};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Everything one extraction run needs, fixed before the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub criterion: SelectionCriterion,
    pub report: Option<PathBuf>,
}

/// Values supplied on the command line; anything `None` must be asked for.
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub input: Option<String>,
    pub output: Option<String>,
    pub select: Option<String>,
    pub report: Option<PathBuf>,
}

/// Result of resolving the configuration
#[derive(Debug, PartialEq, Eq)]
pub enum Setup {
    Ready(RunConfig),
    /// Neither `all` nor any identifier was given
    Cancelled,
}

impl RawConfig {
    fn is_complete(&self) -> bool {
        self.input.is_some() && self.output.is_some() && self.select.is_some()
    }

    /// Fills missing values from `prompter`, or fails if prompting is disabled (`None`).
    pub fn resolve<R: BufRead, W: Write>(
        self,
        prompter: Option<&mut Prompter<R, W>>,
    ) -> Result<Setup, AppError> {
        let complete = self.is_complete();
        let RawConfig { input, output, select, report } = self;

        let (input, output, select) = match prompter {
            Some(prompter) => {
                if !complete {
                    prompter.banner("FASTA Converter Setup")?;
                }
                (
                    answer(input, prompter, INPUT_PROMPT)?,
                    answer(output, prompter, OUTPUT_PROMPT)?,
                    answer(select, prompter, SELECT_PROMPT)?,
                )
            }
            None => (
                input.ok_or_else(|| missing("--input"))?,
                output.ok_or_else(|| missing("--output"))?,
                select.ok_or_else(|| missing("--select"))?,
            ),
        };

        // Cancellation wins over any path problem
        let criterion = match SelectionCriterion::parse(&select) {
            Some(criterion) => criterion,
            None => return Ok(Setup::Cancelled),
        };

        let input = required_path(input, "input CSV")?;
        let output = required_path(output, "output FASTA")?;

        tracing::debug!(
            "Resolved configuration: input={}, output={}, selection={:?}",
            input.display(),
            output.display(),
            criterion
        );

        Ok(Setup::Ready(RunConfig { input, output, criterion, report }))
    }
}

fn answer<R: BufRead, W: Write>(
    given: Option<String>,
    prompter: &mut Prompter<R, W>,
    question: &str,
) -> Result<String, AppError> {
    match given {
        Some(value) => Ok(value),
        None => Ok(prompter.ask(question)?),
    }
}

fn missing(flag: &str) -> AppError {
    AppError::Config(format!("{} is required when prompting is disabled", flag))
}

fn required_path(value: String, what: &str) -> Result<PathBuf, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Config(format!("No {} filepath was given", what)));
    }
    Ok(PathBuf::from(value))
}
