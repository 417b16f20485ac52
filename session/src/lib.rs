use std::collections::BTreeMap;
use std::fmt::Display;

use tracing::{debug, info, warn};

pub use message::Question;

pub mod input;
pub mod results;

pub use input::parse_question_count;
pub use results::{QuestionResult, Score};

/// The only message shown to the user when a quiz could not be generated.
pub const GENERATION_FAILED: &str = "Error generating quiz data";

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("answers were already submitted")]
    Submitted,
    #[error("there is no quiz to submit")]
    NoQuiz,
    #[error("question {index} does not exist (quiz has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },
    #[error("{option:?} is not an option of question {index}")]
    UnknownOption { index: usize, option: String },
    #[error("Number of questions must be a positive integer, got {0:?}")]
    InvalidQuestionCount(String),
}

/// Id of one issued fetch. Only the latest one may change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// What happened to the session when a fetch resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Loaded(usize),
    Failed,
    Stale,
}

/// State of one quiz widget: the received questions, the user's selections
/// and the loading/submitted/error flags.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    // Sparse: a missing entry is an unanswered question.
    answers: BTreeMap<usize, String>,
    submitted: bool,
    loading: bool,
    error: Option<String>,
    latest: u64,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the fetch stage and returns the id the result must be
    /// delivered with.
    pub fn begin_generate(&mut self) -> Generation {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        self.submitted = false;

        debug!(generation = self.latest, "Quiz generation started");

        Generation(self.latest)
    }

    pub fn finish_generate<E>(
        &mut self,
        generation: Generation,
        result: std::result::Result<Vec<Question>, E>,
    ) -> Resolution
    where
        E: Display,
    {
        if generation.0 != self.latest {
            debug!(
                generation = generation.0,
                latest = self.latest,
                "Discarding stale quiz response"
            );
            return Resolution::Stale;
        }

        self.loading = false;

        match result {
            Ok(questions) => {
                info!(count = questions.len(), "Quiz loaded");
                let n = questions.len();
                self.questions = questions;
                self.answers.clear();
                self.submitted = false;
                Resolution::Loaded(n)
            }
            Err(err) => {
                warn!(%err, "Quiz generation failed");
                self.error = Some(GENERATION_FAILED.to_owned());
                Resolution::Failed
            }
        }
    }

    pub fn record_answer(&mut self, index: usize, option: &str) -> Result<()> {
        if self.submitted {
            return Err(SessionError::Submitted);
        }

        let Some(question) = self.questions.get(index) else {
            return Err(SessionError::QuestionOutOfRange {
                index,
                len: self.questions.len(),
            });
        };

        if !question.has_option(option) {
            return Err(SessionError::UnknownOption {
                index,
                option: option.to_owned(),
            });
        }

        self.answers.insert(index, option.to_owned());
        Ok(())
    }

    pub fn submit(&mut self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(SessionError::NoQuiz);
        }

        self.submitted = true;
        debug!(answered = self.answers.len(), "Answers submitted");
        Ok(())
    }

    /// Exact string comparison against the correct answer. Unanswered
    /// questions are never correct.
    pub fn is_correct(&self, index: usize) -> bool {
        match (self.answers.get(&index), self.questions.get(index)) {
            (Some(answer), Some(question)) => *answer == question.correct_answer,
            _ => false,
        }
    }

    /// Shows an input problem caught before any request was made.
    pub fn reject_input(&mut self, err: impl Display) {
        self.error = Some(err.to_string());
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn has_quiz(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
pub(crate) fn question(text: &str, options: &[&str], correct: &str) -> Question {
    Question {
        text: text.to_owned(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_owned(),
    }
}

#[cfg(test)]
pub(crate) fn space_quiz() -> Vec<Question> {
    vec![
        question("Closest planet to the sun?", &["Mercury", "Venus"], "Mercury"),
        question("Largest planet?", &["Saturn", "Jupiter", "Neptune"], "Jupiter"),
        question("Our galaxy?", &["Andromeda", "Milky Way"], "Milky Way"),
    ]
}
