//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod config;
pub mod serve;

use clap::{ArgGroup, Args, Subcommand};

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config and `PORT`).
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the browse command.
#[derive(Args)]
#[command(group(ArgGroup::new("auth").args(["login", "register"])))]
pub struct BrowseArgs {
    /// Title search text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category to show ("All" for every category).
    #[arg(long)]
    pub category: Option<String>,

    /// Add one unit of a book to the cart. Repeat to add more.
    #[arg(long, value_name = "ID")]
    pub add: Vec<i64>,

    /// Remove one unit of a book from the cart, after all adds.
    #[arg(long, value_name = "ID")]
    pub remove: Vec<i64>,

    /// Show the detail view of a book.
    #[arg(long, value_name = "ID")]
    pub details: Option<i64>,

    /// Sign in with this email.
    #[arg(long, value_name = "EMAIL")]
    pub login: Option<String>,

    /// Register with this display name.
    #[arg(long, value_name = "NAME", requires = "email")]
    pub register: Option<String>,

    /// Email used with --register.
    #[arg(long, requires = "register")]
    pub email: Option<String>,

    /// Password for --login or --register.
    #[arg(long, requires = "auth")]
    pub password: Option<String>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Write a default shelf.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },

    /// Print the path of the config file in use.
    Path,
}
