use std::fmt::{self, Display};

use crate::QuizSession;

/// Read-only view of one question after submission.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionResult<'a> {
    pub text: &'a str,
    /// `None` when the question was not answered.
    pub chosen: Option<&'a str>,
    pub correct_answer: &'a str,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} correct", self.correct, self.total)
    }
}

impl QuizSession {
    pub fn results(&self) -> Vec<QuestionResult<'_>> {
        self.questions()
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionResult {
                text: &q.text,
                chosen: self.answer(i),
                correct_answer: &q.correct_answer,
                correct: self.is_correct(i),
            })
            .collect()
    }

    pub fn score(&self) -> Score {
        let total = self.questions().len();
        let correct = (0..total).filter(|&i| self.is_correct(i)).count();
        Score { correct, total }
    }
}

#[cfg(test)]
mod tests {
    use crate::{space_quiz, QuizSession};

    #[test]
    fn test_partial_answers() {
        let mut session = QuizSession::new();
        let gen = session.begin_generate();
        session.finish_generate::<String>(gen, Ok(space_quiz()));

        session.record_answer(0, "Mercury").unwrap();
        session.record_answer(2, "Andromeda").unwrap();
        session.submit().unwrap();

        let results = session.results();
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].chosen, Some("Mercury"));
        assert!(results[0].correct);

        assert_eq!(results[1].chosen, None);
        assert_eq!(results[1].correct_answer, "Jupiter");
        assert!(!results[1].correct);

        assert_eq!(results[2].chosen, Some("Andromeda"));
        assert_eq!(results[2].correct_answer, "Milky Way");
        assert!(!results[2].correct);

        assert_eq!(session.score().to_string(), "1/3 correct");
    }

    #[test]
    fn test_empty_session() {
        let session = QuizSession::new();
        assert!(session.results().is_empty());
        assert_eq!(session.score().to_string(), "0/0 correct");
    }
}
