// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Global flags configure the GitHub client; each subcommand is one view:
// - serve:  run the HTTP API for the web front-end
// - tree:   render one repository's file tree
// - repos:  list the signed-in user's repositories
// - whoami: show who the token belongs to
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates all the parsing code
// - Doc comments (///) on fields become the --help text
// - Enums with fields: each subcommand carries its own arguments
// =============================================================================

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_ADDR, DEFAULT_API_URL, DEFAULT_PER_PAGE};

// The whole command line: global flags plus exactly one subcommand
#[derive(Parser, Debug)]
#[command(
    name = "code-sketch",
    version,
    about = "Render a GitHub repository's file tree as an ASCII diagram",
    long_about = "code-sketch lists your GitHub repositories and draws the file tree of any of them \
                  as plain text you can paste into a README. It can also serve the same data over HTTP."
)]
pub struct Cli {
    // global = true lets these flags appear before or after the subcommand
    // env = "..." is the fallback when the flag is not given

    /// GitHub access token (OAuth or personal access token)
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Log debug output (each GitHub request) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    // Holds whichever variant of Commands the user typed
    #[command(subcommand)]
    pub command: Commands,
}

// Each variant is one subcommand; its fields become that subcommand's arguments
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve POST /api/repo and POST /api/repos
    ///
    /// Example: code-sketch serve --addr 0.0.0.0:8080
    Serve {
        /// Address to listen on
        #[arg(long, env = "CODE_SKETCH_ADDR", default_value = DEFAULT_ADDR)]
        addr: String,
    },

    /// Render the file tree of a repository
    ///
    /// Example: code-sketch tree rust-lang rustlings --search exercises
    /// Example: code-sketch tree https://github.com/rust-lang/rustlings
    Tree {
        // Positional arguments: no #[arg(long)], so they are given by position

        /// Repository owner, or "owner/repo", or a GitHub URL
        target: String,

        /// Repository name (when TARGET is just the owner)
        repo: Option<String>,

        /// Only show lines containing this text (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,

        /// Print the raw tree as JSON instead of the diagram
        #[arg(long)]
        json: bool,

        /// Copy the diagram to the clipboard (not available with --search)
        #[arg(long, conflicts_with = "search")]
        copy: bool,

        /// Read search queries from stdin, one per line, after rendering
        #[arg(long, short, conflicts_with = "json")]
        interactive: bool,
    },

    /// List your repositories
    ///
    /// Example: code-sketch repos --search api --page 2
    /// Example: code-sketch repos --interactive
    Repos {
        /// Only show repositories whose name contains this text
        #[arg(long, short)]
        search: Option<String>,

        /// Page to show (clamped to the available pages)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Repositories per page
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: usize,

        /// Output the (filtered, unpaginated) list as JSON
        #[arg(long)]
        json: bool,

        /// Page through the list from stdin: n, p, <number>, << or >>, /search
        #[arg(long, short, conflicts_with = "json")]
        interactive: bool,
    },

    /// Show the user the token belongs to
    Whoami,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `Option<String>` for --token but `String` for --api-url?
//    - --api-url always has a value (default_value), so it is never missing
//    - --token may be absent entirely, and None means "anonymous requests"
//
// 2. Why `try_parse_from` in the tests?
//    - `parse()` exits the process on bad input; `try_parse_from` returns
//      an Err we can assert on
// -----------------------------------------------------------------------------
