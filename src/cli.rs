use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "profilegen",
    about = "Offline generator for CPU/GPU downclock mimicry profile tables",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of the system/user ones
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the profile table and write it to disk
    Generate {
        /// Output file path (default: resources/profiles.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a generated profile table against all schema invariants
    Validate {
        /// Path to the document (default: the configured output path)
        path: Option<PathBuf>,
    },

    /// Resolve a hardware name string against the built-in tables
    Match {
        /// Free-text hardware identification string, e.g. "ryzen 5 5600x"
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (auto-detected if omitted)
        shell: Option<Shell>,
    },
}

/// Print shell completions to stdout.
pub fn print_completions(shell: Option<Shell>) {
    let shell = shell.or_else(Shell::from_env).unwrap_or_else(|| {
        eprintln!(
            "Could not detect shell. Specify one: profilegen completions bash|zsh|fish|elvish|powershell"
        );
        std::process::exit(1);
    });
    clap_complete::generate(
        shell,
        &mut Cli::command(),
        "profilegen",
        &mut std::io::stdout(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn match_collects_free_text() {
        let cli = Cli::parse_from(["profilegen", "match", "ryzen", "5", "5600x"]);
        match cli.command {
            Command::Match { name } => assert_eq!(name.join(" "), "ryzen 5 5600x"),
            _ => panic!("wrong command"),
        }
    }
}
