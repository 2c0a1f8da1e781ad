//! Terminal formatting for store results.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use smartnotes_core::timestamp;
use smartnotes_core::{Note, NoteStats};

/// Longest content shown per note in listings.
const PREVIEW_CHARS: usize = 80;

fn join_tags(note: &Note) -> String {
    note.tags.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Shorten `content` to [`PREVIEW_CHARS`] characters, ending in `...`.
pub fn preview(content: &str) -> String {
    if content.chars().count() <= PREVIEW_CHARS {
        return content.to_string();
    }
    let kept: String = content.chars().take(PREVIEW_CHARS - 3).collect();
    format!("{kept}...")
}

pub fn note_list(notes: &[&Note]) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let mut out = format!("\n[{} note(s) found]\n\n", notes.len());
    for note in notes {
        let _ = writeln!(out, "#{} | {}", note.id, timestamp::display(&note.created));
        let _ = writeln!(out, "    {}", preview(&note.content));
        if !note.tags.is_empty() {
            let _ = writeln!(out, "    Tags: {}", join_tags(note));
        }
        out.push('\n');
    }
    out
}

pub fn note_detail(note: &Note) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "Note #{}", note.id);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "\nCreated:  {}", timestamp::display(&note.created));
    let _ = writeln!(out, "Modified: {}", timestamp::display(&note.modified));
    let _ = writeln!(out, "\nContent:\n{}", note.content);
    if !note.tags.is_empty() {
        let _ = writeln!(out, "\nTags: {}", join_tags(note));
    }
    let _ = writeln!(out, "\n{rule}\n");
    out
}

pub fn tag_counts(counts: &BTreeMap<String, usize>) -> String {
    if counts.is_empty() {
        return "No tags found.\n".to_string();
    }

    let mut out = format!("\n[{} unique tag(s)]\n\n", counts.len());
    for (tag, count) in counts {
        let _ = writeln!(out, "  #{tag} ({count} note(s))");
    }
    out.push('\n');
    out
}

pub fn stats(stats: &NoteStats) -> String {
    let rule = "=".repeat(40);
    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "  SmartNotes Statistics");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Total notes:      {}", stats.total_notes);
    let _ = writeln!(out, "Total tags:       {}", stats.total_tags);
    let _ = writeln!(out, "Average length:   {} characters", stats.average_length);
    let _ = writeln!(
        out,
        "Most recent:      {}",
        timestamp::display(&stats.most_recent.created)
    );
    let _ = writeln!(out, "Storage location: {}", stats.storage_path.display());
    let _ = writeln!(out, "{rule}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u64, content: &str, tags: &[&str]) -> Note {
        Note {
            id,
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created: "2026-03-04T05:06:07.000001".to_string(),
            modified: "2026-03-05T05:06:07.000001".to_string(),
        }
    }

    #[test]
    fn preview_keeps_short_content() {
        assert_eq!(preview("short"), "short");
        assert_eq!(preview(&"x".repeat(80)), "x".repeat(80));
    }

    #[test]
    fn preview_truncates_long_content_by_characters() {
        let long = "é".repeat(100);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), 80);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn empty_list_says_no_notes() {
        assert_eq!(note_list(&[]), "No notes found.\n");
    }

    #[test]
    fn list_shows_header_id_and_tags() {
        let n = note(2, "hello world", &["greeting"]);
        let out = note_list(&[&n]);
        assert!(out.contains("[1 note(s) found]"));
        assert!(out.contains("#2 | 2026-03-04T05:06:07\n    hello world\n    Tags: greeting\n"));
    }

    #[test]
    fn detail_shows_both_timestamps() {
        let out = note_detail(&note(9, "body", &[]));
        assert!(out.contains("Note #9"));
        assert!(out.contains("Created:  2026-03-04T05:06:07"));
        assert!(out.contains("Modified: 2026-03-05T05:06:07"));
        assert!(out.contains("Content:\nbody\n"));
        assert!(!out.contains("Tags:"));
    }

    #[test]
    fn tag_counts_are_listed_in_order() {
        let counts = BTreeMap::from([("alpha".to_string(), 1), ("work".to_string(), 3)]);
        let out = tag_counts(&counts);
        assert!(out.contains("[2 unique tag(s)]"));
        let alpha = out.find("#alpha (1 note(s))").expect("alpha listed");
        let work = out.find("#work (3 note(s))").expect("work listed");
        assert!(alpha < work);
        assert_eq!(tag_counts(&BTreeMap::new()), "No tags found.\n");
    }
}
