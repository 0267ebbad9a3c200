//! Print the flags of the selected tracks

use anyhow::Context as _;

use ctf::context::Context;
use ctf::core::models::TrackName;
use ctf::core::ports::TrackRepository;
use ctf::output::{FlagFormat, FlagsResult};

/// Print every flag of `tracks` (every track when empty) in `format`
pub fn flags(ctx: &Context, tracks: &[TrackName], format: FlagFormat) -> anyhow::Result<()> {
    let bundles = ctx.repository().load_selected(tracks).context("failed to load tracks")?;
    for bundle in bundles.iter().filter(|b| b.track.flags.is_empty()) {
        log::debug!("No flag in track {}. Skipping...", bundle.name);
    }

    let result = FlagsResult::from_bundles(&bundles);
    if result.flags.is_empty() {
        log::warn!("No flag found...");
        return Ok(());
    }
    result.render(format)
}
