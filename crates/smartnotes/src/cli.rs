use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SmartNotes — quick, searchable, tagged note-taking from the command line.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    after_help = "Examples:
  smartnotes add \"Remember to call Bob tomorrow #important\"
  smartnotes add \"Python tip: use list comprehensions\" --tags python coding
  smartnotes list --tag important
  smartnotes search \"Python\"
  smartnotes export --format md --output my_notes.md"
)]
pub struct Cli {
    /// Directory holding notes.json and config.json [default: ~/.smartnotes].
    #[arg(long, global = true, env = "SMARTNOTES_HOME")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a new note.
    Add {
        /// Note content.
        content: String,

        /// Additional tags.
        #[arg(long, num_args = 1..)]
        tags: Vec<String>,
    },

    /// List all notes, newest first.
    List {
        /// Only notes carrying this tag.
        #[arg(long)]
        tag: Option<String>,

        /// Maximum number of notes to show.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search note content (case-insensitive).
    Search {
        term: String,

        /// Maximum number of notes to show.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show a note in full.
    Show { id: u64 },

    /// Replace a note's content.
    Edit { id: u64, content: String },

    /// Delete a note.
    Delete { id: u64 },

    /// Add tags to a note.
    Tag {
        id: u64,

        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// List all tags with note counts.
    Tags,

    /// Export all notes to a file.
    Export {
        /// Export format: txt, md, or json.
        #[arg(long, default_value = "txt")]
        format: String,

        /// Output file [default: notes_export_<timestamp>.<format>].
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show statistics about your notes.
    Stats,
}
