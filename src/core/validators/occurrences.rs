//! Insertion-ordered accumulator from an observed value to the tracks declaring it

use std::collections::HashMap;

/// Maps each observed key to the tracks where it was seen, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Occurrences {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl Occurrences {
    /// Record that `track` declares `key`
    pub fn record(&mut self, key: impl Into<String>, track: impl Into<String>) {
        let key = key.into();
        let track = track.into();
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].1.push(track);
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, vec![track]));
        }
    }

    /// Whether `key` was recorded at least once
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Every key with its tracks
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, tracks)| (k.as_str(), tracks.as_slice()))
    }

    /// Keys recorded more than once, with their tracks
    pub fn collisions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(_, tracks)| tracks.len() > 1)
    }
}
