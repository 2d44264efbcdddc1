use super::ports::{ExportArtifact, Platform};
use crate::shared::export::{download_text, JSON_MIME};

/// `Platform` backed by the current browser window
#[derive(Clone, Copy, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn download(&self, artifact: &ExportArtifact) -> Result<(), String> {
        download_text(&artifact.content, JSON_MIME, &artifact.file_name)
    }

    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}
