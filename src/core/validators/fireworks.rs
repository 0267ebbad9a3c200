//! Fireworks assets validator
//!
//! A flag's `ui_sound` and `ui_gif` tags name files the scoreboard plays when
//! the flag is submitted. The file may live in any track's bundle, under
//! `files/askgod/sounds/` or `files/askgod/gifs/`. Tag values are glob patterns.

use glob::{MatchOptions, Pattern};

use super::{Occurrences, Validator};
use crate::core::models::{ErrorKind, TrackBundle, UI_GIF_TAG, UI_SOUND_TAG, ValidationError};
use crate::paths;

/// Flags `ui_sound`/`ui_gif` tags without a matching asset file
#[derive(Debug, Clone, Default)]
pub struct FireworksValidator {
    sounds: Occurrences,
    gifs: Occurrences,
    assets: Vec<String>,
}

/// `*` and `?` stay inside one directory, as when globbing the filesystem
const ASSET_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

impl FireworksValidator {
    fn asset_exists(&self, dir: &str, tag: &str) -> bool {
        let Ok(pattern) = Pattern::new(&format!("{dir}/{tag}")) else {
            return false;
        };
        self.assets.iter().any(|asset| pattern.matches_with(asset, ASSET_MATCH))
    }

    fn missing(
        &self,
        tags: &Occurrences,
        dir: &str,
        tag_key: &str,
        name: &str,
    ) -> Vec<ValidationError> {
        let location = format!("{}/*/{}/{dir}", paths::CHALLENGES_DIR, paths::FILES_DIR);
        tags.iter()
            .filter(|(tag, _)| !self.asset_exists(dir, tag))
            .map(|(tag, tracks)| {
                ValidationError::new(
                    ErrorKind::MissingAsset,
                    name,
                    format!(
                        "The \"{tag_key}\" tag should have an associated file in \"{location}/\" which could not be found."
                    ),
                )
                .in_tracks(tracks)
                .with_detail(format!("\"{tag_key}\" tag"), tag)
            })
            .collect()
    }
}

impl Validator for FireworksValidator {
    fn name(&self) -> &'static str {
        "fireworks"
    }

    fn validate(&mut self, track: &TrackBundle) -> Vec<ValidationError> {
        for flag in &track.track.flags {
            if let Some(sound) = flag.tag(UI_SOUND_TAG) {
                self.sounds.record(sound, &track.name);
            }
            if let Some(gif) = flag.tag(UI_GIF_TAG) {
                self.gifs.record(gif, &track.name);
            }
        }

        self.assets.extend(
            track
                .files
                .iter()
                .filter(|f| {
                    f.starts_with(paths::SOUNDS_ASSET_DIR) || f.starts_with(paths::GIFS_ASSET_DIR)
                })
                .cloned(),
        );
        Vec::new()
    }

    fn finalize(&mut self) -> Vec<ValidationError> {
        let mut errors = self.missing(
            &self.sounds,
            paths::SOUNDS_ASSET_DIR,
            UI_SOUND_TAG,
            "Fireworks sound file not found",
        );
        errors.extend(self.missing(
            &self.gifs,
            paths::GIFS_ASSET_DIR,
            UI_GIF_TAG,
            "Fireworks gif file not found",
        ));
        errors
    }
}
