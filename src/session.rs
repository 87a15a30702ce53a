use crate::backend::NoteBackend;
use crate::error::PopupError;
use crate::host::{KeyValueStore, TabQuery};
use crate::source::{youtube_video_id, UrlSource};

/// Status line shown under the generate button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub loading: bool,
}

impl Status {
    pub fn idle(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            loading: false,
        }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            loading: true,
        }
    }

    pub fn failed(err: &PopupError) -> Self {
        Self::idle(format!(
            "Error: {err}. Make sure your backend is running and properly configured."
        ))
    }
}

/// The two popup flows, wired to whichever tab, storage and backend
/// capabilities the caller provides.
pub struct NoteSession<T, S, B> {
    tabs: T,
    store: S,
    backend: B,
}

impl<T, S, B> NoteSession<T, S, B>
where
    T: TabQuery,
    S: KeyValueStore,
    B: NoteBackend,
{
    pub fn new(tabs: T, store: S, backend: B) -> Self {
        Self {
            tabs,
            store,
            backend,
        }
    }

    /// Looks up the note cached for the active tab. Pages without a URL stay
    /// silent.
    pub async fn restore(&self, report: impl Fn(Status)) -> Option<String> {
        let url = match self.tabs.active_tab_url().await {
            Ok(Some(url)) => url,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("active tab lookup failed: {err}");
                return None;
            }
        };

        match self.store.get(&url).await {
            Ok(Some(note)) if !note.is_empty() => {
                report(Status::idle("Existing note found for this page."));
                Some(note)
            }
            Ok(_) => {
                report(Status::idle(
                    "No existing note. Click \"Generate AI Note\" to create one.",
                ));
                None
            }
            Err(err) => {
                log::warn!("reading cached note for {url} failed: {err}");
                report(Status::idle(
                    "No existing note. Click \"Generate AI Note\" to create one.",
                ));
                None
            }
        }
    }

    /// Requests a fresh note for the active tab and caches its raw text.
    pub async fn generate(&self, report: impl Fn(Status)) -> Option<String> {
        let url = match self.tabs.active_tab_url().await {
            Ok(Some(url)) => url,
            Ok(None) => {
                report(Status::idle(PopupError::NoActiveUrl.to_string()));
                return None;
            }
            Err(err) => {
                log::error!("active tab lookup failed: {err}");
                report(Status::idle(PopupError::NoActiveUrl.to_string()));
                return None;
            }
        };

        let source = UrlSource::classify(&url);
        if let Some(video_id) = youtube_video_id(&url) {
            log::debug!("generating note for video {video_id}");
        }
        report(Status::loading(format!(
            "Generating note from {}...",
            source.label()
        )));

        let note = match self.backend.generate(&url).await {
            Ok(note) => note,
            Err(err) => {
                log::error!("note generation for {url} failed: {err}");
                report(Status::failed(&err));
                return None;
            }
        };

        if let Err(err) = self.store.set(&url, &note).await {
            log::warn!("note for {url} was not cached: {err}");
        }
        report(Status::idle("Note generated successfully!"));
        Some(note)
    }
}
