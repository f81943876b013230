//! Hidden keyword matching over recent keystrokes.

use std::collections::VecDeque;

use crate::config;

/// Words that wake the easter egg when typed anywhere on the page.
pub const TRIGGER_WORDS: &[&str] = &["nereus", "o2"];

/// Rolling window of the most recent key names, lowercased.
///
/// Multi-character key names such as `Shift` or `ArrowDown` enter the
/// buffer like any other key; they simply never complete a trigger word.
#[derive(Debug)]
pub struct KeyBuffer {
    keys: VecDeque<String>,
    capacity: usize,
}

impl Default for KeyBuffer {
    fn default() -> Self {
        Self::new(config::KEY_BUFFER_LEN)
    }
}

impl KeyBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Records one keystroke. Returns the matched trigger word if the
    /// buffer now ends with one, clearing the buffer so held-down keys
    /// cannot re-fire the match.
    pub fn push(&mut self, key: &str) -> Option<&'static str> {
        self.keys.push_back(key.to_lowercase());
        while self.keys.len() > self.capacity {
            self.keys.pop_front();
        }
        let joined: String = self.keys.iter().map(String::as_str).collect();
        for trigger in TRIGGER_WORDS {
            if joined.ends_with(trigger) {
                self.keys.clear();
                return Some(trigger);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(buffer: &mut KeyBuffer, word: &str) -> Option<&'static str> {
        let mut fired = None;
        for ch in word.chars() {
            fired = buffer.push(&ch.to_string());
        }
        fired
    }

    #[test]
    fn typing_a_trigger_word_fires_once() {
        let mut buffer = KeyBuffer::default();
        assert_eq!(type_word(&mut buffer, "nereus"), Some("nereus"));
        // The buffer was cleared, so the suffix is gone.
        assert!(buffer.is_empty());
        assert_eq!(buffer.push("s"), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut buffer = KeyBuffer::default();
        assert_eq!(type_word(&mut buffer, "NeReUs"), Some("nereus"));
    }

    #[test]
    fn trigger_matches_as_a_suffix_of_recent_keys() {
        let mut buffer = KeyBuffer::default();
        assert_eq!(type_word(&mut buffer, "xxo2"), Some("o2"));
    }

    #[test]
    fn old_keys_fall_out_of_the_window() {
        let mut buffer = KeyBuffer::new(4);
        // Five keystrokes overflow a four-key window and drop the "n",
        // so the word can no longer complete.
        assert_eq!(type_word(&mut buffer, "nereu"), None);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.push("s"), None);
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn window_capacity_matches_config() {
        let mut buffer = KeyBuffer::default();
        for _ in 0..25 {
            assert_eq!(buffer.push("q"), None);
        }
        assert_eq!(buffer.len(), config::KEY_BUFFER_LEN);
    }

    #[test]
    fn modifier_key_names_break_the_sequence_window() {
        let mut buffer = KeyBuffer::default();
        type_word(&mut buffer, "nere");
        assert_eq!(buffer.push("Shift"), None);
        // "shift" consumed buffer slots but the suffix "us" no longer
        // completes the word directly after it.
        assert_eq!(buffer.push("u"), None);
        assert_eq!(buffer.push("s"), None);
    }

    #[test]
    fn interleaved_noise_prevents_a_match() {
        let mut buffer = KeyBuffer::default();
        assert_eq!(type_word(&mut buffer, "nerexus"), None);
    }
}
