// src/main.rs
// =============================================================================
// Entry point of the code-sketch binary.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Build the GitHub client from the global flags
// 3. Dispatch to the subcommand handler
// 4. Exit with proper code (0 = success, 1 = fetch failed, 2 = error)
//
// Output discipline: the tree / list / JSON goes to stdout, everything a
// person reads while waiting (loading and error messages, logs) to stderr.
//
// Rust concepts used:
// - async/await: every GitHub request is awaited one after the other
// - Result<T, E> with `?`: local failures bubble up to main as exit code 2
// - match: one arm per subcommand
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - flags + env -> Config
mod error;    // src/error.rs - FetchError and its kinds
mod github;   // src/github/ - GitHub REST API client and fetchers
mod logging;  // src/logging.rs - tracing setup
mod server;   // src/server/ - the internal HTTP API
mod tree;     // src/tree/ - ASCII rendering and search
mod view;     // src/view/ - loading/error states, messages, paging

use std::io::IsTerminal; // is_terminal() on stdout, to decide on ANSI bold

use anyhow::{anyhow, bail, Result};
use clap::Parser; // Parser trait enables the parse() method
use tokio::io::{AsyncBufReadExt, BufReader};

use cli::{Cli, Commands};
use config::Config;
use github::{GitHubClient, RepoRef, RepositorySummary, Session};
use view::{
    PagerCommand, Pagination, RandomPicker, RepoPager, View, ViewState, LIST_LOADING_MESSAGES,
    TREE_LOADING_MESSAGES,
};

// #[tokio::main] builds the runtime and runs our async main inside it
#[tokio::main]
async fn main() {
    // Run the application and turn its outcome into an exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole anyhow context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = done
//   Ok(1) = GitHub request failed (friendly message already shown)
//   Err   = bad input or local failure
async fn run() -> Result<i32> {
    // --help and --version are handled (and exit) inside parse()
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;

    // Global flags are shared by every subcommand
    let config = Config::from_args(cli.api_url, cli.token, cli.timeout_secs);
    let client = GitHubClient::new(&config)?;

    match cli.command {
        Commands::Serve { addr } => {
            let addr = config::parse_addr(&addr)?;
            server::serve(addr, client).await?;
            Ok(0)
        }
        Commands::Tree {
            target,
            repo,
            search,
            json,
            copy,
            interactive,
        } => {
            let options = TreeOptions {
                search,
                json,
                copy,
                interactive,
            };
            // "tree octo hello" or "tree octo/hello" or "tree https://github.com/..."
            let target = match repo {
                Some(repo) => RepoRef { owner: target, repo },
                None => RepoRef::parse(&target)?,
            };
            handle_tree(&client, &config, &target.owner, &target.repo, options).await
        }
        Commands::Repos {
            search,
            page,
            per_page,
            json,
            interactive,
        } => {
            let options = ReposOptions {
                search,
                page,
                per_page,
                json,
                interactive,
            };
            handle_repos(&client, &config, options).await
        }
        Commands::Whoami => handle_whoami(&client, &config).await,
    }
}

// Flags of the 'tree' subcommand, so the handler signature stays short
struct TreeOptions {
    search: Option<String>,
    json: bool,
    copy: bool,
    interactive: bool,
}

// Flags of the 'repos' subcommand
struct ReposOptions {
    search: Option<String>,
    page: usize,
    per_page: usize,
    json: bool,
    interactive: bool,
}

// Handles the 'tree' subcommand
// Parameters:
//   owner, repo: which repository to walk
//   options: what to do with the rendered tree
async fn handle_tree(
    client: &GitHubClient,
    config: &Config,
    owner: &str,
    repo: &str,
    options: TreeOptions,
) -> Result<i32> {
    // The view picks its loading and error message once, right here
    let mut view = View::new(TREE_LOADING_MESSAGES, &mut RandomPicker::new());
    eprintln!("⏳ {}", view.loading_message());

    let ticket = view.begin();
    let result = github::fetch_tree(client, owner, repo, "", config.token.as_deref()).await;
    view.complete(ticket, result);

    if let ViewState::Error(message) = view.state() {
        return Ok(report_failure(message, &view, options.json));
    }
    let descriptors = view
        .into_success()
        .ok_or_else(|| anyhow!("Fetch for {}/{} never completed", owner, repo))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(0);
    }

    // Always render the full tree; searching only ever filters this text
    let structure = tree::format_tree(&descriptors);
    let query = options.search.as_deref().unwrap_or("");

    println!("{}", repo);
    print_block(&tree::filter_lines(query, &structure));

    // Copying is only offered for the unfiltered tree
    if options.copy && view::can_copy(options.search.as_deref()) {
        view::copy_to_clipboard(&structure)?;
        eprintln!("📋 Copied!");
    }

    if options.interactive {
        search_interactively(&structure).await?;
    }

    Ok(0)
}

// Re-filters the full tree for every line typed on stdin until EOF.
async fn search_interactively(structure: &str) -> Result<()> {
    eprintln!("🔍 Type to search (empty line shows everything, Ctrl-D to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(query) = lines.next_line().await? {
        print_block(&tree::filter_lines(&query, structure));
    }
    Ok(())
}

// Handles the 'repos' subcommand
async fn handle_repos(client: &GitHubClient, config: &Config, options: ReposOptions) -> Result<i32> {
    // Listing "your" repositories needs to know who you are
    if config.token.is_none() {
        bail!("Sign in first: pass --token or set GITHUB_TOKEN");
    }

    let mut view = View::new(LIST_LOADING_MESSAGES, &mut RandomPicker::new());
    eprintln!("⏳ {}", view.loading_message());

    let ticket = view.begin();
    let result = github::list_repositories(client, config.token.as_deref()).await;
    view.complete(ticket, result);

    if let ViewState::Error(message) = view.state() {
        return Ok(report_failure(message, &view, options.json));
    }
    let repos = view
        .into_success()
        .ok_or_else(|| anyhow!("Repository list never completed"))?;

    let query = options.search.as_deref().unwrap_or("");
    let mut pager = RepoPager::new(&repos, query, options.per_page, options.page);

    if options.json {
        // JSON gets every match; paging is a terminal concern
        println!("{}", serde_json::to_string_pretty(pager.matches())?);
        return Ok(0);
    }

    let bold = std::io::stdout().is_terminal();
    print_repo_page(&pager, bold);

    if options.interactive {
        eprintln!("📖 n / p: next / previous, <number>: go to page, << / >>: jump, /text: search, Ctrl-D to quit");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            pager.apply(PagerCommand::parse(&line));
            print_repo_page(&pager, bold);
        }
    }

    Ok(0)
}

// Handles the 'whoami' subcommand
async fn handle_whoami(client: &GitHubClient, config: &Config) -> Result<i32> {
    let token = config
        .token
        .as_deref()
        .ok_or_else(|| anyhow!("Sign in first: pass --token or set GITHUB_TOKEN"))?;

    match Session::resolve(client, token).await {
        Ok(session) => {
            println!("Signed in as {} ({})", session.user.name, session.user.initials());
            if let Some(image) = &session.user.image {
                println!("Avatar: {}", image);
            }
            // Never print the token itself
            println!("Token: {}", session.masked_token());
            Ok(0)
        }
        Err(e) => {
            tracing::warn!(kind = e.kind().as_str(), error = %e, "could not resolve session");
            eprintln!("❌ {}", e);
            Ok(1)
        }
    }
}

// Shows the view's friendly message; with --json also emits the cause.
fn report_failure<T>(message: &str, view: &View<T>, json: bool) -> i32 {
    eprintln!("❌ {}", message);
    if json {
        let body = serde_json::json!({
            "error": message,
            "kind": view.error_kind(),
        });
        println!("{}", body);
    }
    1
}

// Prints text that may or may not end in a newline, ending with exactly one.
fn print_block(text: &str) {
    if text.is_empty() {
        return;
    }
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

// One page of repository cards plus the page bar under it
fn print_repo_page(pager: &RepoPager, bold: bool) {
    if pager.matches().is_empty() {
        println!("No repositories match '{}'", pager.query());
        return;
    }

    for repo in pager.visible() {
        print_repo(repo, pager.query(), bold);
    }
    print_pages(pager.pages());
}

fn print_repo(repo: &RepositorySummary, query: &str, bold: bool) {
    // Matched parts of the name in bold, when stdout is a terminal
    let name: String = tree::highlight(&repo.name, query)
        .into_iter()
        .map(|segment| {
            if segment.matched && bold {
                format!("\x1b[1m{}\x1b[0m", segment.text)
            } else {
                segment.text.to_string()
            }
        })
        .collect();

    println!("{}  [{}]", name, capitalize_words(&repo.visibility));
    println!(
        "   ⭐ {}  🍴 {}  👀 {}",
        repo.stargazers_count, repo.forks_count, repo.watchers_count
    );
    println!("   → code-sketch tree {} {}", repo.owner.login, repo.name);
    println!();
}

// ‹ prev … 4 5 [6] 7 8 … next ›
fn print_pages(pages: &Pagination) {
    let window = pages.window();
    let mut parts = vec!["‹ prev".to_string()];
    if window.leading_ellipsis.is_some() {
        parts.push("…".to_string());
    }
    for page in &window.pages {
        if *page == pages.current() {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.trailing_ellipsis.is_some() {
        parts.push("…".to_string());
    }
    parts.push("next ›".to_string());

    println!("{}", parts.join(" "));
    println!("Page {} of {}", pages.current(), pages.page_count());
}

// "public" -> "Public", "internal only" -> "Internal Only"
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does `run` return `Result<i32>` instead of calling exit itself?
//    - `std::process::exit` skips destructors, so it only happens in main
//    - Handlers return the code; `?` turns any local error into exit code 2
//
// 2. Why does `RepoPager` borrow `repos` instead of owning it?
//    - The pager keeps `Vec<&RepositorySummary>` for the current matches
//    - Borrowing the full list means a new search never clones a summary
//
// 3. Why `BufReader::new(tokio::io::stdin()).lines()`?
//    - tokio's stdin is async, so waiting for input never blocks the runtime
//    - `next_line()` yields Ok(None) on EOF (Ctrl-D), which ends the loop
// -----------------------------------------------------------------------------
