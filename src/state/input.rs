use tokio::sync::watch;

/// Current contents of the search box.
pub struct InputState {
    text: watch::Sender<String>,
}

impl InputState {
    pub fn new() -> Self {
        let (text, _) = watch::channel(String::new());
        Self { text }
    }

    pub fn update(&self, text: impl Into<String>) {
        self.text.send_replace(text.into());
    }

    #[allow(dead_code)]
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    #[allow(dead_code)]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text.subscribe()
    }

    /// Take the current text as a query and clear the box.
    /// Empty input is never submitted.
    pub fn submit(&self) -> Option<String> {
        if self.text.borrow().is_empty() {
            return None;
        }
        Some(self.text.send_replace(String::new()))
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(InputState::new().text(), "");
    }

    #[test]
    fn test_submit_returns_text_and_clears() {
        let input = InputState::new();
        input.update("octocat");
        assert_eq!(input.submit().as_deref(), Some("octocat"));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let input = InputState::new();
        assert_eq!(input.submit(), None);
    }

    #[test]
    fn test_whitespace_is_submitted_verbatim() {
        let input = InputState::new();
        input.update("  rust ");
        assert_eq!(input.submit().as_deref(), Some("  rust "));
    }

    #[test]
    fn test_subscribers_observe_updates() {
        let input = InputState::new();
        let rx = input.subscribe();
        input.update("tok");
        input.update("tokio");
        assert_eq!(*rx.borrow(), "tokio");
    }
}
