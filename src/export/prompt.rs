//! Operator decision sources for the curation pass.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::error::Result;
use crate::models::ZoneTag;

/// Where curation answers come from: a live terminal, a scripted sequence
/// for tests, or any other policy a caller plugs in.
pub trait DecisionSource {
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Blocking terminal prompts: prompt on stdout, one answer line from stdin.
///
/// An unanswered prompt blocks indefinitely; there is no cancellation.
pub struct TerminalPrompt;

impl DecisionSource for TerminalPrompt {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Canned answers consumed in order; once exhausted, every further prompt
/// receives the empty string, i.e. the documented default.
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// A source that answers every prompt with the default.
    pub fn all_defaults() -> Self {
        Self {
            answers: VecDeque::new(),
        }
    }
}

impl DecisionSource for ScriptedAnswers {
    fn ask(&mut self, _prompt: &str) -> Result<String> {
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Inclusion answers default to yes: the affirmative set is exactly
/// `{"y", "yes", ""}` (case-insensitive); anything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes" | "")
}

/// Three-way classification answer; unrecognized text means no tag.
pub fn zone_choice(answer: &str) -> Option<ZoneTag> {
    match answer.to_lowercase().as_str() {
        "s" | "safety" => Some(ZoneTag::Safety),
        "f" | "forbidden" => Some(ZoneTag::Forbidden),
        _ => None,
    }
}
