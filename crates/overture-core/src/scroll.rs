//! Scroll-lock policy for the intro.
//!
//! While the intro plays, every input that would scroll the page is
//! suppressed: the classic key-code set plus wheel and touch-drag gestures.
//! Unlocking restores everything; nothing is suppressed afterwards.

/// Legacy key codes that scroll a page: space, page up/down, end, home,
/// and the four arrows.
pub const SCROLL_KEY_CODES: [u32; 9] = [32, 33, 34, 35, 36, 37, 38, 39, 40];

/// Suppression state for scroll input.
///
/// `lock`/`unlock` are idempotent; the predicates answer "should this
/// event be prevented right now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    /// New lock, initially disengaged.
    pub fn new() -> Self {
        Self { locked: false }
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a keydown with this legacy key code should be prevented.
    pub fn suppresses_key(&self, key_code: u32) -> bool {
        self.locked && SCROLL_KEY_CODES.contains(&key_code)
    }

    /// Whether wheel and touch-drag gestures should be prevented.
    pub fn suppresses_gesture(&self) -> bool {
        self.locked
    }
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_suppresses_all_scroll_keys() {
        let mut lock = ScrollLock::new();
        lock.lock();
        for code in SCROLL_KEY_CODES {
            assert!(lock.suppresses_key(code), "key {} not suppressed", code);
        }
        assert!(lock.suppresses_gesture());
    }

    #[test]
    fn test_locked_passes_other_keys() {
        let mut lock = ScrollLock::new();
        lock.lock();
        // Enter, Escape, 'a'
        for code in [13, 27, 65] {
            assert!(!lock.suppresses_key(code));
        }
    }

    #[test]
    fn test_unlocked_suppresses_nothing() {
        let lock = ScrollLock::new();
        for code in SCROLL_KEY_CODES {
            assert!(!lock.suppresses_key(code));
        }
        assert!(!lock.suppresses_gesture());
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let mut lock = ScrollLock::new();
        lock.lock();
        lock.unlock();
        lock.unlock();
        assert!(!lock.is_locked());
        assert!(!lock.suppresses_gesture());
    }
}
