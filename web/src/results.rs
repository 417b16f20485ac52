use yew::prelude::*;

use session::QuizSession;

/// Read-only summary shown in place of the inputs once answers are submitted.
pub fn results_view(session: &QuizSession) -> Html {
    html! {
        <div class="results">
            {for session.results().into_iter().map(|result| html! {
                <div class="result">
                    <h3>{result.text.to_owned()}</h3>
                    <p>{format!("Your answer: {}", result.chosen.unwrap_or("Not answered"))}</p>
                    <p>{format!("Correct answer: {}", result.correct_answer)}</p>
                    if result.correct {
                        <p class="correct">{"Correct!"}</p>
                    } else {
                        <p class="incorrect">{"Incorrect."}</p>
                    }
                </div>
            })}
            <p class="score">{session.score().to_string()}</p>
        </div>
    }
}
