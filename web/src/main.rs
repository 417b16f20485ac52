mod app;
mod quiz;
mod results;

use quiz_client::DEFAULT_ENDPOINT;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&format!("Quiz service: {DEFAULT_ENDPOINT}").into());
    yew::Renderer::<App>::new().render();
}
