//! Repository statistics
//!
//! Counts tracks, flags, points, services and people across a set of loaded
//! tracks.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::models::TrackBundle;

/// Per-track values, serialized as a JSON object in ascending value order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerTrack<V>(Vec<(String, V)>);

impl<V> Default for PerTrack<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V: Ord + Copy> PerTrack<V> {
    fn sorted(mut entries: Vec<(String, V)>) -> Self {
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        Self(entries)
    }

    /// Value recorded for `track`
    #[must_use]
    pub fn get(&self, track: &str) -> Option<V> {
        self.0.iter().find(|(name, _)| name == track).map(|(_, v)| *v)
    }
}

impl<V: Serialize> Serialize for PerTrack<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (track, value) in &self.0 {
            map.serialize_entry(track, value)?;
        }
        map.end()
    }
}

/// Statistics over a set of tracks
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackStats {
    /// Tracks counted
    pub number_of_tracks: usize,
    /// Tracks whose posts are part of the scenario
    pub number_of_tracks_integrated_with_scenario: usize,
    /// Flags across all tracks
    pub number_of_flags: usize,
    /// Highest single flag value
    pub highest_value_flag: i64,
    /// Largest number of flags in one track
    pub most_flags_in_a_track: usize,
    /// Sum of every flag value, saturating
    pub total_flags_value: i64,
    /// Services across all tracks
    pub number_of_services: usize,
    /// Top-level entries of every track's `files/` directory
    pub number_of_files: usize,
    /// Median flag value
    pub median_flag_value: f64,
    /// Mean flag value, rounded to two decimals
    pub mean_flag_value: f64,
    /// Services per listening port
    pub number_of_services_per_port: BTreeMap<u16, usize>,
    /// Flags per point value
    pub flag_count_per_value: BTreeMap<i64, usize>,
    /// Distinct challenge designers (case-insensitive)
    pub number_of_challenge_designers: usize,
    /// Flags per track, ascending
    pub number_of_flags_per_track: PerTrack<usize>,
    /// Points per track, ascending
    pub number_of_points_per_track: PerTrack<i64>,
    /// Tracks whose posts are not part of the scenario
    pub not_integrated_with_scenario: Vec<String>,
    /// Tracks whose QA list names nobody besides the designers
    pub qa_not_done: Vec<String>,
    /// Distinct challenge designers, lowercase and sorted
    pub challenge_designers: Vec<String>,
}

/// Compute statistics over `tracks`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(tracks: &[TrackBundle]) -> TrackStats {
    let mut stats = TrackStats {
        number_of_tracks: tracks.len(),
        ..TrackStats::default()
    };
    let mut designers = BTreeSet::new();
    let mut values = Vec::new();
    let mut flags_per_track = Vec::new();
    let mut points_per_track = Vec::new();

    for bundle in tracks {
        let track = &bundle.track;
        if track.integrated_with_scenario {
            stats.number_of_tracks_integrated_with_scenario += 1;
        } else {
            stats.not_integrated_with_scenario.push(bundle.name.clone());
        }

        stats.number_of_flags += track.flags.len();
        stats.most_flags_in_a_track = stats.most_flags_in_a_track.max(track.flags.len());
        stats.number_of_services += track.services.len();

        let mut points: i64 = 0;
        for flag in &track.flags {
            values.push(flag.value);
            points = points.saturating_add(flag.value);
            stats.highest_value_flag = stats.highest_value_flag.max(flag.value);
            *stats.flag_count_per_value.entry(flag.value).or_default() += 1;
        }
        stats.total_flags_value = stats.total_flags_value.saturating_add(points);
        flags_per_track.push((bundle.name.clone(), track.flags.len()));
        points_per_track.push((bundle.name.clone(), points));

        for service in &track.services {
            *stats.number_of_services_per_port.entry(service.port).or_default() += 1;
        }

        let track_designers: HashSet<String> =
            track.contacts.dev.iter().map(|d| d.to_lowercase()).collect();
        designers.extend(track_designers.iter().cloned());
        let qa_besides_designers =
            track.contacts.qa.iter().any(|q| !track_designers.contains(&q.to_lowercase()));
        if !qa_besides_designers {
            stats.qa_not_done.push(bundle.name.clone());
        }

        stats.number_of_files += bundle.file_entries.len();
    }

    stats.median_flag_value = median(&mut values);
    if !values.is_empty() {
        let mean = stats.total_flags_value as f64 / values.len() as f64;
        stats.mean_flag_value = (mean * 100.0).round() / 100.0;
    }
    stats.number_of_challenge_designers = designers.len();
    stats.challenge_designers = designers.into_iter().collect();
    stats.number_of_flags_per_track = PerTrack::sorted(flags_per_track);
    stats.number_of_points_per_track = PerTrack::sorted(points_per_track);
    stats.not_integrated_with_scenario.sort();
    stats.qa_not_done.sort();
    stats
}

#[allow(clippy::cast_precision_loss)]
fn median(values: &mut [i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (i128::from(values[mid - 1]) + i128::from(values[mid])) as f64 / 2.0
    } else {
        values[mid] as f64
    }
}
