//! Best-effort clipboard writes. Failures never reach the user.

use arboard::Clipboard;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard, opened lazily and kept alive so copied text outlives the call on X11.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.inner.is_none() {
            self.inner = Some(Clipboard::new().map_err(|err| err.to_string())?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|err| err.to_string()),
            None => Err("clipboard unavailable".to_string()),
        }
    }
}

pub fn copy_to_clipboard(sink: &mut impl ClipboardSink, text: &str) {
    match sink.set_text(text) {
        Ok(()) => tracing::debug!("copied {} bytes to clipboard", text.len()),
        Err(err) => tracing::debug!("clipboard write skipped: {err}"),
    }
}
