//! Domain models for ctf
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Track`] - A challenge described by `track.yaml`
//! - [`DiscoursePost`] - A forum post, possibly released by a flag
//! - [`TrackBundle`] - A loaded track with its files and posts
//! - [`ValidationError`] - A finding reported by a validator

mod bundle;
mod error;
mod post;
mod track;

pub use bundle::{ScannedFile, ScannedFileKind, TrackBundle};
pub use error::{Details, ErrorKind, ValidationError};
pub use post::{DiscoursePost, FLAG_TRIGGER, PostKind, Trigger};
pub use track::{
    Contacts, DISCOURSE_TAG, Flag, Service, TRACK_NAME_PATTERN, Track, TrackName, TrackNameError,
    UI_GIF_TAG, UI_SOUND_TAG,
};
