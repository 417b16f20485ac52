use serde::{Deserialize, Serialize};

/// Body of the request sent to the quiz generation service.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuiz<'a> {
    pub prompt: &'a str,
    pub num_questions: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub data: QuizData,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuizData {
    // A payload without questions renders as an empty quiz.
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_keys() {
        let req = GenerateQuiz {
            prompt: "space",
            num_questions: 3,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "prompt": "space", "numQuestions": 3 }));
    }

    #[test]
    fn test_response_nested_questions() {
        let body = r#"{
            "data": {
                "questions": [
                    { "text": "Closest planet to the sun?", "options": ["Mercury", "Venus"], "correctAnswer": "Mercury" }
                ]
            }
        }"#;
        let resp: QuizResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data.questions.len(), 1);
        assert_eq!(resp.data.questions[0].correct_answer, "Mercury");
        assert!(resp.data.questions[0].has_option("Venus"));
        assert!(!resp.data.questions[0].has_option("venus"));
    }

    #[test]
    fn test_response_without_questions_is_empty() {
        let resp: QuizResponse = serde_json::from_str(r#"{ "data": {} }"#).unwrap();
        assert!(resp.data.questions.is_empty());
    }

    #[test]
    fn test_response_without_data_is_rejected() {
        let res = serde_json::from_str::<QuizResponse>(r#"{ "questions": [] }"#);
        assert!(res.is_err());
    }
}
