//! List tracks and their contacts

use anyhow::Context as _;

use ctf::context::Context;
use ctf::core::ports::TrackRepository;
use ctf::output::{OutputMode, TrackListResult};

/// Print one row per track
pub fn list(ctx: &Context, mode: OutputMode) -> anyhow::Result<()> {
    let tracks = ctx.repository().load_all().context("failed to load tracks")?;
    TrackListResult::from_bundles(&tracks).render(mode);
    Ok(())
}
