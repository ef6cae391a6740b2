use clap::Subcommand;

/// Account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create an account. Requires a sign-in once any account exists.
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}
