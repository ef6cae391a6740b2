use clap::Subcommand;

use crate::cli::subcommands::{ParkCommands, UserCommands, VisitCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create `.parklog/` and the park database in the current directory.
    Init,
    /// Parks.
    Park {
        #[command(subcommand)]
        action: ParkCommands,
    },
    /// Visits to a park.
    Visit {
        #[command(subcommand)]
        action: VisitCommands,
    },
    /// Accounts.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Sign in for this project.
    Signin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out.
    Signout,
}

impl Commands {
    /// Short description of the invocation, remembered when a sign-in is
    /// required so it can be suggested again afterwards.
    #[must_use]
    pub fn request_line(&self) -> String {
        use crate::cli::subcommands::{ParkCommands as P, UserCommands as U, VisitCommands as V};

        match self {
            Self::Init => "init".into(),
            Self::Park { action } => match action {
                P::List { .. } => "park list".into(),
                P::Sorted { .. } => "park sorted".into(),
                P::Add { name, .. } => format!("park add --name {name:?}"),
                P::Edit { park, .. } => format!("park edit {park:?}"),
                P::Delete { park } => format!("park delete {park:?}"),
            },
            Self::Visit { action } => match action {
                V::List { park, .. } => format!("visit list {park:?}"),
                V::Add { park, date, .. } => format!("visit add {park:?} --date {date}"),
                V::Edit { park, id, .. } => format!("visit edit {park:?} {id}"),
                V::Delete { park, id } => format!("visit delete {park:?} {id}"),
            },
            Self::User { action } => match action {
                U::Add { username, .. } => format!("user add --username {username:?}"),
            },
            Self::Signin { .. } => "signin".into(),
            Self::Signout => "signout".into(),
        }
    }
}
