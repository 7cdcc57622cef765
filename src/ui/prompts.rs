//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! every query parameter must come from a flag or the configuration, or the
//! run fails with a clear error message.
//!
//! A prompt lists the valid values and keeps asking until the answer
//! matches one of them. Matching is case-insensitive, an exact match wins.
//! End of input cancels the prompt.

use std::io::{self, BufRead, Stderr, Write};

use thiserror::Error;

use crate::core::types::{StationName, TrainColor};
use crate::core::vocabulary::Vocabulary;
use crate::route::{Query, QueryError, QuerySource};

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::IoError(e.to_string())
    }
}

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    interactive: bool,
}

impl Prompter<io::StdinLock<'static>, Stderr> {
    /// Prompter reading stdin and writing prompts to stderr.
    pub fn stdio(interactive: bool) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), interactive)
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, interactive: bool) -> Self {
        Self {
            reader,
            writer,
            interactive,
        }
    }

    /// Ask for one of `options` until a valid answer is given.
    ///
    /// Returns the index of the selected option.
    ///
    /// # Example
    ///
    /// ```
    /// use forkroute::ui::prompts::Prompter;
    ///
    /// let input = b"purple\ngreen\n";
    /// let mut output = Vec::new();
    /// let mut prompter = Prompter::new(&input[..], &mut output, true);
    ///
    /// let index = prompter.select("train color", &["RED", "GREEN"]).unwrap();
    /// assert_eq!(index, 1);
    /// ```
    pub fn select<T: AsRef<str>>(&mut self, label: &str, options: &[T]) -> Result<usize, PromptError> {
        if !self.interactive {
            return Err(PromptError::NotInteractive);
        }

        let listing = options
            .iter()
            .map(|o| o.as_ref())
            .collect::<Vec<&str>>()
            .join(" - ");

        loop {
            write!(self.writer, "Enter {} [ Valid values: {} ] : ", label, listing)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PromptError::Cancelled);
            }

            if let Some(index) = match_option(line.trim(), options) {
                return Ok(index);
            }
            writeln!(self.writer, "Invalid value! Try again!")?;
        }
    }
}

fn match_option<T: AsRef<str>>(answer: &str, options: &[T]) -> Option<usize> {
    options
        .iter()
        .position(|o| o.as_ref() == answer)
        .or_else(|| {
            options
                .iter()
                .position(|o| o.as_ref().eq_ignore_ascii_case(answer))
        })
}

/// Query source that takes parameters from flags and prompts for the rest.
pub struct QueryPrompt<R, W> {
    prompter: Prompter<R, W>,
    from: Option<String>,
    to: Option<String>,
    color: Option<String>,
    default_color: Option<TrainColor>,
}

impl<R: BufRead, W: Write> QueryPrompt<R, W> {
    pub fn new(prompter: Prompter<R, W>) -> Self {
        Self {
            prompter,
            from: None,
            to: None,
            color: None,
            default_color: None,
        }
    }

    /// Preset answers from command-line flags.
    pub fn with_flags(
        mut self,
        from: Option<String>,
        to: Option<String>,
        color: Option<String>,
    ) -> Self {
        self.from = from;
        self.to = to;
        self.color = color;
        self
    }

    /// Color used when no flag is given, instead of prompting.
    pub fn with_default_color(mut self, color: Option<TrainColor>) -> Self {
        self.default_color = color;
        self
    }

    fn station(
        &mut self,
        label: &str,
        given: Option<String>,
        vocabulary: &Vocabulary,
    ) -> Result<StationName, QueryError> {
        if let Some(input) = given {
            return vocabulary
                .resolve_station(&input)
                .cloned()
                .ok_or(QueryError::UnknownStation(input));
        }

        let index = self.prompter.select(label, vocabulary.station_labels().as_slice())?;
        Ok(vocabulary.stations()[index].clone())
    }

    fn color(
        &mut self,
        given: Option<String>,
        vocabulary: &Vocabulary,
    ) -> Result<TrainColor, QueryError> {
        if let Some(input) = given {
            return vocabulary
                .resolve_color(&input)
                .ok_or(QueryError::UnknownColor(input));
        }
        if let Some(color) = self.default_color {
            return Ok(color);
        }

        let index = self
            .prompter
            .select("train color", vocabulary.color_labels().as_slice())?;
        Ok(vocabulary.colors()[index])
    }
}

impl<R: BufRead, W: Write> QuerySource for QueryPrompt<R, W> {
    fn query(&mut self, vocabulary: &Vocabulary) -> Result<Query, QueryError> {
        let from = self.from.take();
        let to = self.to.take();
        let color = self.color.take();

        let from = self.station("initial station", from, vocabulary)?;
        let to = self.station("final station", to, vocabulary)?;
        let color = self.color(color, vocabulary)?;

        Ok(Query::new(from, to, color))
    }
}
