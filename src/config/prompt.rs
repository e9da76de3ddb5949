// src/config/prompt.rs
use std::io::{self, BufRead, Write};

pub const INPUT_PROMPT: &str = "Enter your input CSV filepath (e.g., data/database.csv): ";
pub const OUTPUT_PROMPT: &str = "Enter your desired output FASTA filepath (e.g., output.fasta): ";
pub const SELECT_PROMPT: &str =
    "Which IDs would you like to extract? (Use commas to separate multiple, or type 'all'): ";

/// Asks questions on `output` and reads one trimmed line per answer from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// An exhausted input (EOF) answers with an empty string.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "\n--- {} ---", text)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
