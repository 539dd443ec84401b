use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medichat")]
#[command(about = "Multilingual medical assistant in your terminal")]
#[command(version)]
pub struct Args {
    /// Backend base URL (overrides MEDICHAT_API_URL and the config file)
    #[arg(short = 'u', long, global = true)]
    pub api_url: Option<String>,

    /// Interface language for this run (english, french, ewondo, douala, bassa)
    #[arg(short = 'l', long, global = true)]
    pub lang: Option<String>,

    /// Disable the translation cache
    #[arg(short = 'n', long, global = true)]
    pub no_cache: bool,

    /// Only print conversation output and errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print diagnostic logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat with the assistant (default)
    Chat,
    /// Send one message from a file or stdin and print the answer
    Ask {
        /// File containing the message (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Send the text as-is, without translating it to English first
        #[arg(long)]
        no_translate: bool,
    },
    /// List saved conversations
    History,
    /// Print a saved conversation
    Show {
        /// Session id, as listed by `medichat history`
        id: i64,
    },
    /// Delete a saved conversation
    Delete {
        /// Session id, as listed by `medichat history`
        id: i64,

        /// Do not ask for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Translate text between supported languages
    Translate {
        /// Source language
        #[arg(short = 'f', long)]
        from: String,

        /// Target language
        #[arg(short = 't', long)]
        to: String,

        /// File to translate (reads from stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Sign in to the MediChat backend
    Login {
        /// Account email (prompted if not provided)
        #[arg(long)]
        email: Option<String>,
    },
    /// Create a MediChat account
    Register,
    /// Forget the stored sign-in token
    Logout,
    /// Show the signed-in account
    Whoami,
    /// List supported languages
    Languages {
        /// Ask the backend which languages it translates
        #[arg(long)]
        remote: bool,
    },
    /// Configure medichat defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
