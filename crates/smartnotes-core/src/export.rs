//! Export rendering: plain text, Markdown, and JSON dumps of the store.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::CoreError;
use crate::notes::json::to_pretty_json;
use crate::notes::{Note, NoteStoreError};
use crate::timestamp;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Markdown,
    Json,
}

impl ExportFormat {
    /// File extension, also the name used on the command line.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = NoteStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(NoteStoreError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// `notes_export_YYYYMMDD_HHMMSS.<ext>`
pub fn default_file_name(format: ExportFormat) -> Result<String, CoreError> {
    let stamp = timestamp::now_file_stamp()?;
    Ok(format!("notes_export_{stamp}.{}", format.extension()))
}

/// Render `notes` in the given format. Notes are written in the order given.
pub fn render(
    format: ExportFormat,
    notes: &[&Note],
    generated_at: &str,
) -> Result<String, CoreError> {
    match format {
        ExportFormat::Text => Ok(render_text(notes, generated_at)),
        ExportFormat::Markdown => Ok(render_markdown(notes, generated_at)),
        ExportFormat::Json => to_pretty_json(notes),
    }
}

fn join_tags(note: &Note) -> String {
    note.tags.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

// Writing into a `String` is infallible.

fn render_text(notes: &[&Note], generated_at: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SmartNotes Export - {generated_at}");
    let _ = writeln!(out, "{}\n", "=".repeat(RULE_WIDTH));

    for note in notes {
        let _ = writeln!(out, "Note #{}", note.id);
        let _ = writeln!(out, "Created: {}", timestamp::display(&note.created));
        if !note.tags.is_empty() {
            let _ = writeln!(out, "Tags: {}", join_tags(note));
        }
        let _ = writeln!(out, "\n{}", note.content);
        let _ = writeln!(out, "\n{}\n", "-".repeat(RULE_WIDTH));
    }
    out
}

fn render_markdown(notes: &[&Note], generated_at: &str) -> String {
    let mut out = String::new();
    out.push_str("# SmartNotes Export\n\n");
    let _ = writeln!(out, "*Generated: {generated_at}*\n");
    out.push_str("---\n\n");

    for note in notes {
        let _ = writeln!(out, "## Note #{}\n", note.id);
        let _ = writeln!(out, "**Created:** {}  ", timestamp::display(&note.created));
        if !note.tags.is_empty() {
            let tags = note
                .tags
                .iter()
                .map(|t| format!("`#{t}`"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "**Tags:** {tags}  ");
        }
        let _ = writeln!(out, "\n{}\n", note.content);
        out.push_str("---\n\n");
    }
    out
}
