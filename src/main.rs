mod app;
mod backend;
mod config;
mod error;
mod host;
mod logging;
mod note_format;
mod session;
mod source;

use app::*;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init_logging(option_env!("NOTESAGE_LOG").unwrap_or("info")) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    mount_to_body(|| {
        view! {
            <App/>
        }
    })
}
