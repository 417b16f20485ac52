use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use message::Question;
use quiz_client::{ClientConfig, HttpQuizService, QuizController, Token, DEFAULT_ENDPOINT};
use session::{parse_question_count, QuizSession};

use crate::results::results_view;

#[derive(Properties, PartialEq)]
pub struct QuizGeneratorProperties {
    pub token: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_ENDPOINT))]
    pub endpoint: AttrValue,
}

#[function_component(QuizGenerator)]
pub fn quiz_generator(props: &QuizGeneratorProperties) -> Html {
    let topic = use_state(String::new);
    let count = use_state(|| String::from("3"));

    let session = use_mut_ref(QuizSession::new);
    let update = use_force_update();
    let service = use_memo(props.endpoint.clone(), |endpoint| {
        HttpQuizService::new(ClientConfig {
            endpoint: endpoint.to_string(),
        })
    });

    let controller = QuizController::new(
        service,
        Token::new(props.token.to_string()),
        session.clone(),
    )
    .on_change(move || update.force_update());

    let on_topic = {
        let topic = topic.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            topic.set(input.value());
        })
    };

    let on_count = {
        let count = count.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            count.set(input.value());
        })
    };

    let on_generate = {
        let controller = controller.clone();
        let topic = topic.clone();
        let count = count.clone();

        Callback::from(move |_: MouseEvent| {
            let count = match parse_question_count(&count) {
                Ok(count) => count,
                Err(err) => {
                    controller.reject_input(err);
                    return;
                }
            };

            // The request keeps the topic it was started with.
            let topic = (*topic).clone();
            let controller = controller.clone();
            spawn_local(async move {
                let resolution = controller.generate_quiz(&topic, count).await;
                web_sys::console::log_1(&format!("Quiz generation: {resolution:?}").into());
            });
        })
    };

    let on_select = {
        let controller = controller.clone();
        Callback::from(move |(index, option): (usize, String)| {
            if let Err(e) = controller.record_answer(index, &option) {
                web_sys::console::error_1(&e.to_string().into());
            }
        })
    };

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = controller.submit_answers() {
                web_sys::console::error_1(&e.to_string().into());
            }
        })
    };

    let state = session.borrow();
    let loading = state.is_loading();
    let error = state.error().map(str::to_owned);
    let has_quiz = state.has_quiz();
    let quiz = if state.is_submitted() {
        results_view(&state)
    } else {
        html! {
            <>
                {for state.questions().iter().enumerate().map(|(index, question)| html! {
                    <QuestionBlock
                        key={index}
                        {index}
                        question={question.clone()}
                        selected={state.answer(index).map(|a| AttrValue::from(a.to_owned()))}
                        onselect={on_select.clone()}
                    />
                })}
                <button onclick={on_submit}>{"Submit Answers"}</button>
            </>
        }
    };
    drop(state);

    html! {
        <div class="quiz-generator">
            <h1>{"Quiz Generator"}</h1>
            <div>
                <label>
                    {"Topic:"}
                    <input
                        type="text"
                        value={(*topic).clone()}
                        oninput={on_topic}
                        placeholder="Enter topic"
                    />
                </label>
            </div>
            <div>
                <label>
                    {"Number of Questions:"}
                    <input
                        type="number"
                        min="1"
                        value={(*count).clone()}
                        oninput={on_count}
                    />
                </label>
            </div>
            <button onclick={on_generate} disabled={loading}>
                {if loading { "Generating..." } else { "Generate Quiz" }}
            </button>
            if let Some(error) = error {
                <p class="error">{error}</p>
            }
            if has_quiz {
                <div class="quiz-display">{quiz}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct QuestionBlockProperties {
    index: usize,
    question: Question,
    selected: Option<AttrValue>,
    onselect: Callback<(usize, String)>,
}

#[function_component(QuestionBlock)]
fn question_block(props: &QuestionBlockProperties) -> Html {
    let index = props.index;

    html! {
        <div class="quiz-question">
            <h3>{props.question.text.clone()}</h3>
            <ul>
                {for props.question.options.iter().enumerate().map(|(idx, option)| {
                    let id = format!("q{index}o{idx}");
                    let checked = props.selected.as_deref() == Some(option.as_str());
                    let onchange = {
                        let onselect = props.onselect.clone();
                        let option = option.clone();
                        Callback::from(move |_: Event| onselect.emit((index, option.clone())))
                    };

                    html! {
                        <li key={idx}>
                            <input
                                type="radio"
                                id={id.clone()}
                                name={format!("q{index}")}
                                value={option.clone()}
                                {checked}
                                {onchange}
                            />
                            <label for={id}>{option.clone()}</label>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
