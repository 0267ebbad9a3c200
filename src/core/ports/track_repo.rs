//! Track repository port
//!
//! Defines the interface for discovering and loading tracks.

use super::super::models::{TrackBundle, TrackName};

/// Source of tracks for a validation or reporting run
///
/// Implementations read tracks from a CTF repository on disk, or from
/// memory in tests.
pub trait TrackRepository {
    /// Names of every available track, sorted
    fn track_names(&self) -> anyhow::Result<Vec<String>>;

    /// Load one track with its posts, files and scanned files
    fn load(&self, name: &str) -> anyhow::Result<TrackBundle>;

    /// Load every available track
    fn load_all(&self) -> anyhow::Result<Vec<TrackBundle>> {
        self.track_names()?.iter().map(|name| self.load(name)).collect()
    }

    /// Load the selected tracks, or every track when `selection` is empty
    ///
    /// Selected names that match no track are skipped with a warning.
    fn load_selected(&self, selection: &[TrackName]) -> anyhow::Result<Vec<TrackBundle>> {
        if selection.is_empty() {
            return self.load_all();
        }

        let available = self.track_names()?;
        for wanted in selection {
            if !available.iter().any(|name| name == wanted.as_str()) {
                log::warn!("Track not found: {wanted}");
            }
        }

        available
            .iter()
            .filter(|name| selection.iter().any(|wanted| wanted.as_str() == name.as_str()))
            .map(|name| self.load(name))
            .collect()
    }
}
