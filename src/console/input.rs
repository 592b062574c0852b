//! Line-oriented input over any reader.

use parlor_games::{GameError, InputProvider};
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{BufRead, StdinLock, Stdout, Write};
use std::rc::Rc;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Console handle shared by the human participant and the session prompts.
pub type SharedConsole<R, W> = Rc<RefCell<ConsoleInput<R, W>>>;

/// Joins choices the way a person would list them: "a, b, or c".
pub fn join_or<T: Display>(items: &[T]) -> String {
    let names: Vec<String> = items.iter().map(ToString::to_string).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

/// Prompts on a writer and reads answers from a reader, re-asking until
/// the answer is acceptable.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates a console over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Gives back the writer, mostly so tests can inspect the transcript.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, text: &str) -> Result<(), GameError> {
        write!(self.writer, "{}", text)
            .and_then(|_| self.writer.flush())
            .map_err(|e| GameError::Input(format!("Failed to write prompt: {}", e)))
    }

    fn read_answer(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| GameError::Input(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(GameError::Input("End of input".to_string()));
        }
        Ok(line.trim().to_lowercase())
    }

    /// Asks a yes/no style question.
    ///
    /// Answers are matched case-insensitively against `yes` and `no`.
    #[instrument(skip(self, yes, no))]
    pub fn confirm(&mut self, prompt: &str, yes: &[&str], no: &[&str]) -> Result<bool, GameError> {
        loop {
            self.say(prompt)?;
            let answer = self.read_answer()?;
            if yes.contains(&answer.as_str()) {
                return Ok(true);
            }
            if no.contains(&answer.as_str()) {
                return Ok(false);
            }
            debug!(%answer, "Unrecognized answer");
            self.say("Sorry, invalid choice.\n")?;
        }
    }
}

impl<M, R, W> InputProvider<M> for ConsoleInput<R, W>
where
    M: FromStr + Display + PartialEq,
    R: BufRead,
    W: Write,
{
    fn request_move(&mut self, legal: &[M]) -> Result<M, GameError> {
        let prompt = format!("Choose {}: ", join_or(legal));
        loop {
            self.say(&prompt)?;
            let answer = self.read_answer()?;
            match answer.parse::<M>() {
                Ok(mv) if legal.contains(&mv) => return Ok(mv),
                _ => {
                    debug!(%answer, "Rejected move input");
                    self.say("Sorry, invalid choice.\n")?;
                }
            }
        }
    }
}
