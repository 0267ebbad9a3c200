//! Print statistics about the selected tracks

use anyhow::Context as _;

use ctf::context::Context;
use ctf::core::models::TrackName;
use ctf::core::ports::TrackRepository;
use ctf::core::services::compute_stats;
use ctf::output::render_stats;

/// Print statistics about `tracks` (every track when empty) as JSON
pub fn stats(ctx: &Context, tracks: &[TrackName]) -> anyhow::Result<()> {
    let bundles = ctx.repository().load_selected(tracks).context("failed to load tracks")?;
    render_stats(&compute_stats(&bundles));
    Ok(())
}
