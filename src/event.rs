use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};

/// Non-blocking reader over the terminal's input queue.
pub struct EventHandler {
    reader: EventStream,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            reader: EventStream::new(),
        }
    }

    /// Returns the next buffered key press, or `None` when nothing is waiting.
    ///
    /// Non-key events (resize, mouse, focus) and key releases are discarded.
    /// Never waits for input.
    pub fn try_next_key(&mut self) -> Option<KeyEvent> {
        loop {
            match self.reader.next().now_or_never() {
                Some(Some(Ok(CrosstermEvent::Key(key)))) if key.kind == KeyEventKind::Press => {
                    return Some(key);
                }
                Some(Some(Ok(_))) => continue,
                Some(Some(Err(err))) => {
                    tracing::warn!(error = %err, "terminal input error");
                    return None;
                }
                Some(None) | None => return None,
            }
        }
    }
}
