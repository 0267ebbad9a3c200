//! Print the services of the selected tracks

use anyhow::Context as _;

use ctf::context::Context;
use ctf::core::models::TrackName;
use ctf::core::ports::TrackRepository;
use ctf::output::{OutputMode, ServicesResult};

/// Print every service of `tracks` (every track when empty)
pub fn services(ctx: &Context, tracks: &[TrackName], mode: OutputMode) -> anyhow::Result<()> {
    let bundles = ctx.repository().load_selected(tracks).context("failed to load tracks")?;
    for bundle in bundles.iter().filter(|b| b.track.services.is_empty()) {
        log::debug!("No service in track {}. Skipping...", bundle.name);
    }

    ServicesResult::from_bundles(&bundles).render(mode);
    Ok(())
}
