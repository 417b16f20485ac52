use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::{debug, instrument};

use message::{GenerateQuiz, Question, QuizResponse};

use crate::{Error, QuizService, Result, Token};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/generate-story";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

/// Talks to the quiz generation service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpQuizService {
    config: ClientConfig,
    client: Client,
}

impl HttpQuizService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl Default for HttpQuizService {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[async_trait(?Send)]
impl QuizService for HttpQuizService {
    #[instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    async fn generate(&self, request: &GenerateQuiz<'_>, token: &Token) -> Result<Vec<Question>> {
        debug!(
            prompt = request.prompt,
            num_questions = request.num_questions,
            "Sending quiz request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, token.bearer())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        // Error bodies are never parsed; only a success body is decoded.
        let body = response.text().await?;
        let quiz: QuizResponse = serde_json::from_str(&body)?;

        debug!(count = quiz.data.questions.len(), "Received quiz");

        Ok(quiz.data.questions)
    }
}
