use clap::{Subcommand, ValueEnum};

/// Column for `parklog park sorted`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum SortKey {
    #[default]
    Name,
    State,
    /// Date established.
    Year,
    Area,
}

/// Park commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ParkCommands {
    /// List parks one page at a time, with visit counts.
    List {
        /// Page number; out-of-range pages are clamped.
        #[arg(long)]
        page: Option<String>,
    },
    /// List every park ordered by a column.
    Sorted {
        #[arg(long, value_enum, default_value_t)]
        by: SortKey,
    },
    /// Add a park.
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        state: String,
        /// Date established (YYYY-MM-DD).
        #[arg(long, default_value = "")]
        established: String,
        /// Area in square kilometres.
        #[arg(long, default_value = "")]
        area: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Edit a park. Omitted fields keep their current value.
    Edit {
        /// Current park name.
        park: String,
        #[arg(long = "name")]
        new_name: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        established: Option<String>,
        #[arg(long)]
        area: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a park and all of its visits.
    Delete { park: String },
}
