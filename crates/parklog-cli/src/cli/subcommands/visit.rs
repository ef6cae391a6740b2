use clap::Subcommand;

/// Visit commands. Every visit belongs to a park, named first.
#[derive(Clone, Debug, Subcommand)]
pub enum VisitCommands {
    /// List a park's visits one page at a time.
    List {
        park: String,
        #[arg(long)]
        page: Option<String>,
    },
    /// Record a visit.
    Add {
        park: String,
        /// Date visited (YYYY-MM-DD).
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Edit a visit. Omitted fields keep their current value; `--note ""` clears the note.
    Edit {
        park: String,
        id: i64,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a visit.
    Delete { park: String, id: i64 },
}
