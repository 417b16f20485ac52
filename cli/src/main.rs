use std::cell::RefCell;
use std::env;
use std::io::Write;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use quiz_client::{ClientConfig, HttpQuizService, QuizController, Token, DEFAULT_ENDPOINT};
use session::{parse_question_count, QuizSession, Resolution};

mod render;

use render::Choice;

const TOKEN_VAR: &str = "QUIZ_TOKEN";

#[derive(Parser, Debug)]
#[command(version, about = "Generate a multiple-choice quiz and answer it in the terminal")]
struct Args {
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(short, long, help = "Topic of the first quiz")]
    topic: Option<String>,

    #[arg(short, long, default_value = "3", help = "Default number of questions")]
    count: String,
}

type Input = Lines<BufReader<Stdin>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    let token = env::var(TOKEN_VAR)
        .with_context(|| format!("{TOKEN_VAR} must hold the bearer token for the quiz service"))?;

    info!(endpoint = %args.endpoint, "Using quiz service");

    let service = Rc::new(HttpQuizService::new(ClientConfig {
        endpoint: args.endpoint,
    }));
    let session = Rc::new(RefCell::new(QuizSession::new()));
    let controller = QuizController::new(service, Token::new(token), session);

    let mut input = BufReader::new(stdin()).lines();
    let mut first_topic = args.topic;

    loop {
        let topic = match first_topic.take() {
            Some(topic) => topic,
            None => match ask(&mut input, "Topic: ").await? {
                Some(topic) => topic,
                None => break,
            },
        };

        let prompt = format!("Number of questions [{}]: ", args.count);
        let Some(count_text) = ask(&mut input, &prompt).await? else {
            break;
        };
        let count_text = if count_text.trim().is_empty() {
            args.count.clone()
        } else {
            count_text
        };

        let count = match parse_question_count(&count_text) {
            Ok(count) => count,
            Err(err) => {
                controller.reject_input(err);
                print_error(&controller);
                continue;
            }
        };

        println!("Generating...");
        let resolution = controller.generate_quiz(&topic, count).await;
        debug!(?resolution, "Generation resolved");

        if resolution == Resolution::Failed {
            print_error(&controller);
        }

        let answerable = should_answer(resolution, &controller.session());
        if answerable {
            if !answer_quiz(&controller, &mut input).await? {
                break;
            }
            controller.submit_answers()?;
            println!();
            print!("{}", render::results(&controller.session()));
        }

        match ask(&mut input, "\nGenerate another quiz? [y/N]: ").await? {
            Some(reply) if reply.trim().eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    Ok(())
}

/// Collects one selection per question. Returns false when input ends.
async fn answer_quiz<S>(controller: &QuizController<S>, input: &mut Input) -> anyhow::Result<bool>
where
    S: quiz_client::QuizService,
{
    let questions = controller.session().questions().to_vec();

    for (index, question) in questions.iter().enumerate() {
        println!();
        print!("{}", render::question_block(index, question));

        loop {
            let Some(line) = ask(input, "Your choice (blank to skip): ").await? else {
                return Ok(false);
            };

            match render::parse_choice(&line, question) {
                Choice::Skip => break,
                Choice::Pick(option) => {
                    controller.record_answer(index, option)?;
                    break;
                }
                Choice::Invalid => {
                    println!("Pick a number between 1 and {}", question.options.len())
                }
            }
        }
    }

    Ok(true)
}

async fn ask(input: &mut Input, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}

fn print_error<S>(controller: &QuizController<S>)
where
    S: quiz_client::QuizService,
{
    if let Some(err) = controller.session().error() {
        eprintln!("* {err}");
    }
}

/// Only a freshly loaded, non-empty quiz is answered. After a failure the old
/// quiz still sits in the session with its answers.
fn should_answer(resolution: Resolution, session: &QuizSession) -> bool {
    matches!(resolution, Resolution::Loaded(_)) && session.has_quiz()
}

#[cfg(test)]
mod tests {
    use message::Question;

    use super::*;

    fn quiz() -> Vec<Question> {
        vec![
            Question {
                text: "Closest planet to the sun?".to_owned(),
                options: vec!["Mercury".to_owned(), "Venus".to_owned()],
                correct_answer: "Mercury".to_owned(),
            },
            Question {
                text: "Largest planet?".to_owned(),
                options: vec!["Saturn".to_owned(), "Jupiter".to_owned()],
                correct_answer: "Jupiter".to_owned(),
            },
        ]
    }

    #[test]
    fn test_answer_fresh_quiz() {
        let mut session = QuizSession::new();
        let gen = session.begin_generate();
        let resolution = session.finish_generate::<String>(gen, Ok(quiz()));

        assert!(should_answer(resolution, &session));
    }

    #[test]
    fn test_failed_retry_skips_old_quiz() {
        let mut session = QuizSession::new();
        let gen = session.begin_generate();
        session.finish_generate::<String>(gen, Ok(quiz()));
        session.record_answer(0, "Venus").unwrap();
        session.submit().unwrap();

        let gen = session.begin_generate();
        let resolution = session.finish_generate(gen, Err("HTTP 500"));

        // The old quiz and its answer are still there, but must not be
        // answered again.
        assert!(session.has_quiz());
        assert_eq!(session.answer(0), Some("Venus"));
        assert!(!should_answer(resolution, &session));
    }

    #[test]
    fn test_empty_quiz_is_not_answered() {
        let mut session = QuizSession::new();
        let gen = session.begin_generate();
        let resolution = session.finish_generate::<String>(gen, Ok(Vec::new()));

        assert_eq!(resolution, Resolution::Loaded(0));
        assert!(!should_answer(resolution, &session));
    }

    #[test]
    fn test_failure_without_quiz() {
        let mut session = QuizSession::new();
        let gen = session.begin_generate();
        let resolution = session.finish_generate(gen, Err("connection refused"));

        assert!(!should_answer(resolution, &session));
    }
}
