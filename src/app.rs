use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::HttpNoteBackend;
use crate::config::PopupConfig;
use crate::host::{ChromeStorage, ChromeTabs};
use crate::note_format::{format_note, render_html};
use crate::session::{NoteSession, Status};

const POPUP_THEME: &str = "--accent-color: #6366f1; --bg-primary: #ffffff; --text-primary: #1a1a1a; --text-muted: #6b7280; --border-color: #e5e7eb; --radius-md: 6px;";

type PopupSession = NoteSession<ChromeTabs, ChromeStorage, HttpNoteBackend>;

async fn open_session() -> PopupSession {
    let config = PopupConfig::load(&ChromeStorage).await;
    NoteSession::new(ChromeTabs, ChromeStorage, HttpNoteBackend::new(config))
}

#[component]
pub fn App() -> impl IntoView {
    let (status, set_status) = signal(Status::default());
    let (note, set_note) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            let session = open_session().await;
            if let Some(text) = session.restore(move |s| set_status.set(s)).await {
                set_note.set(text);
            }
        });
    });

    let generate_note = move |_: MouseEvent| {
        set_note.set(String::new());
        spawn_local(async move {
            let session = open_session().await;
            if let Some(text) = session.generate(move |s| set_status.set(s)).await {
                set_note.set(text);
            }
        });
    };

    let rendered_note = move || note.with(|text| render_html(&format_note(text)));
    let loading_style = move || {
        if status.with(|s| s.loading) {
            "display: inline-block; width: 12px; height: 12px; border: 2px solid var(--border-color); border-top-color: var(--accent-color); border-radius: 50%; animation: spin 0.8s linear infinite;"
        } else {
            "display: none;"
        }
    };

    let popup_style = format!("{POPUP_THEME} width: 360px; padding: 1rem; display: flex; flex-direction: column; gap: 0.75rem; background: var(--bg-primary); color: var(--text-primary); font-size: 0.9rem;");

    view! {
        <style>"@keyframes spin { to { transform: rotate(360deg); } } #ai-suggestion h3 { margin: 0.75rem 0 0.25rem; } #ai-suggestion ul { padding-left: 1.25rem; }"</style>
        <main class="popup" style=popup_style>
            <header style="display: flex; align-items: center; justify-content: space-between; font-weight: 600; color: var(--accent-color);">
                <span>"NoteSage"</span>
            </header>
            <button
                id="generate-note"
                on:click=generate_note
                style="padding: 0.5rem 0.75rem; border: none; border-radius: var(--radius-md); background: var(--accent-color); color: white; cursor: pointer;"
            >
                "Generate AI Note"
            </button>
            <div class="status" style="display: flex; align-items: center; gap: 0.5rem; color: var(--text-muted);">
                <span id="loading-indicator" style=loading_style></span>
                <span id="status-message">{move || status.with(|s| s.message.clone())}</span>
            </div>
            <div
                id="ai-suggestion"
                class="note"
                style="max-height: 420px; overflow-y: auto; line-height: 1.5;"
                inner_html=rendered_note
            ></div>
        </main>
    }
}
