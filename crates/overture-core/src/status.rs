//! Status-text rotation during the loading animation.
//!
//! Cycles through a fixed ordered list of short messages at the configured
//! interval, parking on the last one. It never loops back and never
//! re-yields the final message.

/// The fixed loading messages, shown in order.
pub const STATUS_MESSAGES: [&str; 4] = [
    "Loading experience...",
    "Preparing content...",
    "Almost ready...",
    "Welcome!",
];

/// Cursor over [`STATUS_MESSAGES`].
///
/// Starts on the first message; each [`advance`](StatusRotation::advance)
/// steps forward and yields the new message until the last is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRotation {
    index: usize,
}

impl StatusRotation {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// The message currently on display.
    pub fn current(&self) -> &'static str {
        STATUS_MESSAGES[self.index]
    }

    /// Step to the next message, yielding it, or `None` once parked on the
    /// last message.
    pub fn advance(&mut self) -> Option<&'static str> {
        if self.index + 1 < STATUS_MESSAGES.len() {
            self.index += 1;
            Some(STATUS_MESSAGES[self.index])
        } else {
            None
        }
    }

    /// Whether the rotation has reached the final message.
    pub fn is_done(&self) -> bool {
        self.index + 1 == STATUS_MESSAGES.len()
    }

    /// Number of advances still to come.
    pub fn remaining(&self) -> usize {
        STATUS_MESSAGES.len() - 1 - self.index
    }
}

impl Default for StatusRotation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_messages_in_order() {
        let mut rotation = StatusRotation::new();
        assert_eq!(rotation.current(), "Loading experience...");
        assert_eq!(rotation.advance(), Some("Preparing content..."));
        assert_eq!(rotation.advance(), Some("Almost ready..."));
        assert_eq!(rotation.advance(), Some("Welcome!"));
    }

    #[test]
    fn test_parks_on_last_message() {
        let mut rotation = StatusRotation::new();
        while rotation.advance().is_some() {}
        assert!(rotation.is_done());
        // Further advances never loop or repeat
        assert_eq!(rotation.advance(), None);
        assert_eq!(rotation.advance(), None);
        assert_eq!(rotation.current(), "Welcome!");
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut rotation = StatusRotation::new();
        assert_eq!(rotation.remaining(), 3);
        rotation.advance();
        assert_eq!(rotation.remaining(), 2);
    }
}
