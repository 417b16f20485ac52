use std::fmt::{self, Debug};

use async_trait::async_trait;

use message::{GenerateQuiz, Question};

pub mod controller;
pub mod http;

pub use controller::QuizController;
pub use http::{ClientConfig, HttpQuizService, DEFAULT_ENDPOINT};

pub type Result<T> = std::result::Result<T, Error>;

/// Why a quiz could not be generated. Every variant is shown to the user as
/// the same message; the variant only shows up in logs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("quiz service responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed quiz payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Bearer credential handed in by the host.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// A remote quiz generator: one request in, one ordered question list out.
#[async_trait(?Send)]
pub trait QuizService {
    async fn generate(&self, request: &GenerateQuiz<'_>, token: &Token) -> Result<Vec<Question>>;
}
