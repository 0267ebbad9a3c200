//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. It is the only place in the
//! crate that prints.

use colored::Colorize;
use serde::Serialize;

use crate::adapters::schema::SchemaViolation;
use crate::core::models::{Flag, PostKind, TrackBundle, ValidationError};
use crate::core::services::{TrackStats, ValidationReport};

/// Column width description cells are wrapped at
pub const DESCRIPTION_WIDTH: usize = 50;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Serialization format of `ctf flags`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FlagFormat {
    /// Pretty-printed JSON list
    #[default]
    Json,
    /// YAML list
    Yaml,
    /// CSV with a header row, one row per flag
    Csv,
}

/// Result of a validation run
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    /// Whether no validation error was found
    pub passed: bool,
    /// Number of tracks validated
    pub tracks: usize,
    /// Every validation error, in emission order
    pub errors: Vec<ValidationError>,
}

impl From<ValidationReport> for ValidationResult {
    fn from(report: ValidationReport) -> Self {
        Self {
            passed: report.passed(),
            tracks: report.tracks,
            errors: report.errors,
        }
    }
}

impl ValidationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.errors.is_empty() {
            return format!("{}\n", "No error found!".green().bold());
        }

        let mut table = Table::new(&["Track", "Error", "Description", "Details"]);
        for error in &self.errors {
            let details = error
                .details()
                .iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(vec![
                error.track().to_string(),
                error.name().to_string(),
                wrap(error.description(), DESCRIPTION_WIDTH),
                details,
            ]);
        }

        let title = format!("Found {} validation error(s)", self.errors.len());
        format!("{}\n{}", title.red().bold(), table.render(&[Style::Cyan, Style::Magenta]))
    }
}

/// Result of a failed JSON Schema gate
#[derive(Debug, Serialize)]
pub struct SchemaResult {
    /// Always false: the gate only reports when something failed
    pub passed: bool,
    /// Every violation found
    pub schema_errors: Vec<SchemaViolation>,
}

impl SchemaResult {
    /// Wrap the violations of a failed gate
    #[must_use]
    pub const fn new(schema_errors: Vec<SchemaViolation>) -> Self {
        Self {
            passed: false,
            schema_errors,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut table = Table::new(&["File", "Error"]);
        for violation in &self.schema_errors {
            table.add_row(vec![violation.file.clone(), wrap(&violation.message, DESCRIPTION_WIDTH)]);
        }
        let title = format!("Found {} JSON Schema error(s)", self.schema_errors.len());
        format!("{}\n{}", title.red().bold(), table.render(&[Style::Cyan, Style::Magenta]))
    }
}

/// One row of `ctf list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRow {
    /// Track name from `track.yaml`
    pub name: String,
    /// Title of the track's discourse topic
    pub discourse_topic: Option<String>,
    /// Challenge designers
    pub dev: Vec<String>,
    /// On-call support
    pub support: Vec<String>,
    /// Quality assurance reviewers
    pub qa: Vec<String>,
}

impl TrackRow {
    /// Summarize a loaded track
    #[must_use]
    pub fn from_bundle(bundle: &TrackBundle) -> Self {
        let discourse_topic = bundle
            .posts
            .iter()
            .filter(|post| post.kind == PostKind::Topic)
            .find_map(|post| post.title.clone());
        let contacts = &bundle.track.contacts;
        Self {
            name: bundle.track.name.clone(),
            discourse_topic,
            dev: contacts.dev.clone(),
            support: contacts.support.clone(),
            qa: contacts.qa.clone(),
        }
    }
}

/// Result of `ctf list`
#[derive(Debug, Serialize)]
pub struct TrackListResult {
    /// Tracks, sorted case-insensitively by name
    pub tracks: Vec<TrackRow>,
}

impl TrackListResult {
    /// Summarize and sort loaded tracks
    #[must_use]
    pub fn from_bundles(bundles: &[TrackBundle]) -> Self {
        let mut tracks: Vec<TrackRow> = bundles.iter().map(TrackRow::from_bundle).collect();
        tracks.sort_by_key(|row| row.name.to_lowercase());
        Self { tracks }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(&self.tracks),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut table = Table::new(&["Internal track name", "Discourse topic name", "Dev", "Support", "QA"]);
        for row in &self.tracks {
            table.add_row(vec![
                row.name.clone(),
                row.discourse_topic.clone().unwrap_or_default(),
                row.dev.join(", "),
                row.support.join(", "),
                row.qa.join(", "),
            ]);
        }
        format!("{}\n{}", "Tracks".bold(), table.render(&[Style::Cyan, Style::Magenta]))
    }
}

/// A flag with the track declaring it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagEntry {
    /// Track directory name
    pub track: String,
    /// The flag as declared in `track.yaml`
    #[serde(flatten)]
    pub flag: Flag,
}

/// Result of `ctf flags`
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct FlagsResult {
    /// Every flag of the selected tracks, track by track
    pub flags: Vec<FlagEntry>,
}

impl FlagsResult {
    /// Collect the flags of loaded tracks
    #[must_use]
    pub fn from_bundles(bundles: &[TrackBundle]) -> Self {
        let flags = bundles
            .iter()
            .flat_map(|bundle| {
                bundle.track.flags.iter().map(|flag| FlagEntry {
                    track: bundle.name.clone(),
                    flag: flag.clone(),
                })
            })
            .collect();
        Self { flags }
    }

    /// Serialize the flags in `format`
    pub fn to_format(&self, format: FlagFormat) -> anyhow::Result<String> {
        Ok(match format {
            FlagFormat::Json => serde_json::to_string_pretty(self)? + "\n",
            FlagFormat::Yaml => serde_yaml::to_string(self)?,
            FlagFormat::Csv => self.to_csv()?,
        })
    }

    fn to_csv(&self) -> anyhow::Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["track", "flag", "value", "description", "return_string", "tags"])?;
        for entry in &self.flags {
            let flag = &entry.flag;
            let tags = flag
                .tags
                .keys()
                .map(|key| format!("{key}={}", flag.tag(key).unwrap_or_default()))
                .collect::<Vec<_>>()
                .join(";");
            let value = flag.value.to_string();
            writer.write_record([
                entry.track.as_str(),
                flag.flag.as_str(),
                value.as_str(),
                flag.description.as_deref().unwrap_or_default(),
                flag.return_string.as_deref().unwrap_or_default(),
                tags.as_str(),
            ])?;
        }
        Ok(String::from_utf8(writer.into_inner()?)?)
    }

    /// Print the flags in `format`
    pub fn render(&self, format: FlagFormat) -> anyhow::Result<()> {
        print!("{}", self.to_format(format)?);
        Ok(())
    }
}

/// One service of `ctf services`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRow {
    /// Track directory name
    pub track: String,
    /// Instance hosting the service
    pub instance: String,
    /// Service name
    pub name: String,
    /// Track support contacts
    pub contacts: Vec<String>,
    /// Network address
    pub address: String,
    /// Health-check descriptor
    pub check: String,
    /// Listening port
    pub port: u16,
}

impl ServiceRow {
    fn line(&self) -> String {
        format!(
            "{}/{}/{} {} {} {} {}",
            self.track,
            self.instance,
            self.name,
            self.contacts.join(","),
            self.address,
            self.check,
            self.port
        )
    }
}

/// Result of `ctf services`
#[derive(Debug, Serialize)]
pub struct ServicesResult {
    /// Every service of the selected tracks, track by track
    pub services: Vec<ServiceRow>,
}

impl ServicesResult {
    /// Collect the services of loaded tracks
    #[must_use]
    pub fn from_bundles(bundles: &[TrackBundle]) -> Self {
        let services = bundles
            .iter()
            .flat_map(|bundle| {
                bundle.track.services.iter().map(|service| ServiceRow {
                    track: bundle.name.clone(),
                    instance: service.instance.clone(),
                    name: service.name.clone(),
                    contacts: bundle.track.contacts.support.clone(),
                    address: service.address.clone(),
                    check: service.check.clone(),
                    port: service.port,
                })
            })
            .collect();
        Self { services }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(&self.services),
        }
    }

    /// One line per service
    #[must_use]
    pub fn to_human(&self) -> String {
        self.services.iter().map(|s| s.line() + "\n").collect()
    }
}

/// Print repository statistics (always JSON)
pub fn render_stats(stats: &TrackStats) {
    print_json(stats);
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Greedy word wrap of `text` at `width` columns
///
/// Words longer than `width` are kept whole on their own line. Existing line
/// breaks are preserved.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines.join("\n")
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Cyan,
    Magenta,
}

/// Plain text table with multi-line cells
#[derive(Debug)]
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let cell_width = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell_width);
                }
            }
        }
        widths
    }

    /// Render with the leading columns styled by `styles`
    fn render(&self, styles: &[Style]) -> String {
        let widths = self.widths();
        let separator = widths.iter().map(|w| "-".repeat(w + 2)).collect::<Vec<_>>().join("+");

        let mut out = String::new();
        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!(" {} ", pad(h, *w).bold()))
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(header.trim_end());
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<Vec<&str>> = row.iter().map(|c| c.lines().collect()).collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
            for line in 0..height {
                let rendered = widths
                    .iter()
                    .enumerate()
                    .map(|(i, w)| {
                        let text = cells.get(i).and_then(|c| c.get(line)).copied().unwrap_or("");
                        let padded = pad(text, *w);
                        let styled = match styles.get(i) {
                            Some(Style::Cyan) => padded.cyan().to_string(),
                            Some(Style::Magenta) => padded.magenta().to_string(),
                            None => padded,
                        };
                        format!(" {styled} ")
                    })
                    .collect::<Vec<_>>()
                    .join("|");
                out.push_str(rendered.trim_end());
                out.push('\n');
            }
            out.push_str(&separator);
            out.push('\n');
        }
        out
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}
