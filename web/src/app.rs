use yew::prelude::*;

use crate::quiz::QuizGenerator;

const TOKEN_KEY: &str = "token";

#[function_component(App)]
pub fn app() -> Html {
    // The page shell owns storage access; the widget only sees the token.
    let token = use_memo((), |_| stored_token());

    html! {
        <main class="container">
            <QuizGenerator token={(*token).clone()} />
        </main>
    }
}

fn stored_token() -> AttrValue {
    let token = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten());

    match token {
        Some(token) => AttrValue::from(token),
        None => {
            web_sys::console::warn_1(&"No auth token in local storage".into());
            AttrValue::from("")
        }
    }
}
