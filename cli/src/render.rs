use message::Question;
use session::QuizSession;

pub const NOT_ANSWERED: &str = "Not answered";

/// What the user typed for one question.
#[derive(Debug, PartialEq)]
pub enum Choice<'a> {
    Skip,
    Pick(&'a str),
    Invalid,
}

/// Options are numbered from 1. A blank line leaves the question unanswered.
pub fn parse_choice<'a>(line: &str, question: &'a Question) -> Choice<'a> {
    let line = line.trim();
    if line.is_empty() {
        return Choice::Skip;
    }

    match line.parse::<usize>() {
        Ok(n) if n >= 1 && n <= question.options.len() => Choice::Pick(&question.options[n - 1]),
        _ => Choice::Invalid,
    }
}

pub fn question_block(index: usize, question: &Question) -> String {
    let mut out = format!("{}. {}\n", index + 1, question.text);
    for (i, option) in question.options.iter().enumerate() {
        out.push_str(&format!("   {}) {}\n", i + 1, option));
    }
    out
}

pub fn results(session: &QuizSession) -> String {
    let mut out = String::new();
    for (i, result) in session.results().iter().enumerate() {
        let verdict = if result.correct { "Correct!" } else { "Incorrect." };
        out.push_str(&format!(
            "{}. {}\n   Your answer: {}\n   Correct answer: {}\n   {}\n",
            i + 1,
            result.text,
            result.chosen.unwrap_or(NOT_ANSWERED),
            result.correct_answer,
            verdict,
        ));
    }
    out.push_str(&format!("Score: {}\n", session.score()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, options: &[&str], correct: &str) -> Question {
        Question {
            text: text.to_owned(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_owned(),
        }
    }

    fn space_session() -> QuizSession {
        let mut session = QuizSession::new();
        let gen = session.begin_generate();
        session.finish_generate::<String>(
            gen,
            Ok(vec![
                question("Closest planet to the sun?", &["Mercury", "Venus"], "Mercury"),
                question("Largest planet?", &["Saturn", "Jupiter"], "Jupiter"),
                question("Our galaxy?", &["Andromeda", "Milky Way"], "Milky Way"),
            ]),
        );
        session
    }

    #[test]
    fn test_parse_choice() {
        let q = question("Largest planet?", &["Saturn", "Jupiter"], "Jupiter");

        assert_eq!(parse_choice("2\n", &q), Choice::Pick("Jupiter"));
        assert_eq!(parse_choice(" 1 ", &q), Choice::Pick("Saturn"));
        assert_eq!(parse_choice("", &q), Choice::Skip);
        assert_eq!(parse_choice("0", &q), Choice::Invalid);
        assert_eq!(parse_choice("3", &q), Choice::Invalid);
        assert_eq!(parse_choice("Jupiter", &q), Choice::Invalid);
    }

    #[test]
    fn test_question_block() {
        let q = question("Largest planet?", &["Saturn", "Jupiter"], "Jupiter");
        assert_eq!(
            question_block(1, &q),
            "2. Largest planet?\n   1) Saturn\n   2) Jupiter\n"
        );
    }

    #[test]
    fn test_results_marks_unanswered() {
        let mut session = space_session();
        session.record_answer(0, "Mercury").unwrap();
        session.record_answer(2, "Andromeda").unwrap();
        session.submit().unwrap();

        let out = results(&session);

        assert_eq!(
            out,
            "1. Closest planet to the sun?\n\
             \x20  Your answer: Mercury\n\
             \x20  Correct answer: Mercury\n\
             \x20  Correct!\n\
             2. Largest planet?\n\
             \x20  Your answer: Not answered\n\
             \x20  Correct answer: Jupiter\n\
             \x20  Incorrect.\n\
             3. Our galaxy?\n\
             \x20  Your answer: Andromeda\n\
             \x20  Correct answer: Milky Way\n\
             \x20  Incorrect.\n\
             Score: 1/3 correct\n"
        );
    }
}
