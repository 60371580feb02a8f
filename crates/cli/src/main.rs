use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use catalog::{Catalog, PostSummary, Profile};
use pipeline::{CombinationMode, MatchCase, SearchSession};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use suggest::{Suggestion, SuggestionRanker, DEFAULT_SUGGESTION_LIMIT};

mod repl;

use repl::{parse_command, ReplCommand};

/// Folio - browse portfolio posts by category keyword
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Keyword suggestions and category filtering for a portfolio post listing", long_about = None)]
struct Cli {
    /// Path to the post listing JSON (the /api/posts response)
    #[arg(short, long, global = true, default_value = "data/posts.json")]
    posts: PathBuf,

    /// Path to the profile listing JSON (the /api/user response)
    #[arg(long, global = true, default_value = "data/profile.json")]
    profile: PathBuf,

    /// Maximum number of suggestions to show
    #[arg(long, global = true, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    limit: usize,

    /// Match keywords against category names ignoring case
    #[arg(long, global = true)]
    ignore_case: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Any,
    All,
}

impl From<ModeArg> for CombinationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Any => CombinationMode::Any,
            ModeArg::All => CombinationMode::All,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, optionally filtered by category keywords
    Posts {
        /// Keyword to filter by (repeatable, substring of a category name)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// How multiple keywords combine
        #[arg(long, value_enum, default_value = "any")]
        mode: ModeArg,

        /// Print the matching posts as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Suggest category names close to a query
    Suggest {
        /// Free text to match against category names
        #[arg(long)]
        query: String,
    },

    /// List distinct category names
    Categories,

    /// Show each category name with the details recorded for it
    Skills,

    /// Show a single post
    Show {
        /// Post ID to display
        #[arg(long)]
        id: String,
    },

    /// Interactive session: type to get suggestions, pick them as keywords
    Browse,

    /// Show the site owner's profile
    Profile,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    // The profile lives in its own listing; no need to index posts for it
    if let Commands::Profile = cli.command {
        let profile = Profile::load_from_file(&cli.profile)
            .with_context(|| format!("Failed to load profile from {}", cli.profile.display()))?;
        handle_profile(&profile);
        return Ok(());
    }

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.posts)
        .with_context(|| format!("Failed to load post listing from {}", cli.posts.display()))?;
    tracing::info!("Catalog ready in {:?}", start.elapsed());

    let match_case = if cli.ignore_case {
        MatchCase::Insensitive
    } else {
        MatchCase::Sensitive
    };
    let session = SearchSession::new()
        .with_ranker(SuggestionRanker::new().with_limit(cli.limit))
        .with_match_case(match_case);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Posts {
            keywords,
            mode,
            json,
        } => handle_posts(&catalog, session, keywords, mode.into(), json)?,
        Commands::Suggest { query } => handle_suggest(&catalog, session, query),
        Commands::Categories => handle_categories(&catalog),
        Commands::Skills => handle_skills(&catalog),
        Commands::Show { id } => handle_show(&catalog, &id)?,
        Commands::Browse => handle_browse(&catalog, session)?,
        Commands::Profile => unreachable!("handled before the catalog is loaded"),
    }

    Ok(())
}

/// Handle the 'posts' command
fn handle_posts(
    catalog: &Catalog,
    mut session: SearchSession,
    keywords: Vec<String>,
    mode: CombinationMode,
    json: bool,
) -> Result<()> {
    for keyword in keywords {
        session.select(keyword);
    }
    session.set_mode(mode);

    let results = session.results(catalog.posts())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_posts(&results, &session);
    }
    Ok(())
}

/// Handle the 'suggest' command
fn handle_suggest(catalog: &Catalog, mut session: SearchSession, query: String) {
    session.set_query(query);
    let suggestions = session.suggestions(catalog.category_universe());
    println!("{}", format!("Suggestions for '{}':", session.query()).bold().blue());
    print_suggestions(&suggestions);
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    println!("{}", "Categories:".bold().blue());
    for name in catalog.category_universe() {
        let count = catalog.get_posts_by_category(name).len();
        println!("{}{} ({} posts)", "• ".green(), name, count);
    }
}

/// Handle the 'skills' command
fn handle_skills(catalog: &Catalog) {
    println!("{}", "Skills:".bold().blue());
    for skill in catalog.skills() {
        println!("{}", skill.name.bold());
        for category in &skill.categories {
            println!("  {}{}", "- ".cyan(), category.detail);
        }
    }
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, id: &str) -> Result<()> {
    let post = catalog
        .get_post(id)
        .ok_or_else(|| anyhow!("Post {} not found", id))?;

    println!("{}", post.title.bold().blue());
    println!("{}Created: {}", "• ".green(), display_date(&post.created_at));
    println!("{}Repository: {}", "• ".green(), post.repository);
    println!("{}App: {}", "• ".green(), post.app_url);
    println!("{}", "Categories:".bold());
    for category in &post.categories {
        println!("  - {}: {}", category.name, category.detail);
    }
    Ok(())
}

/// Handle the 'profile' command
fn handle_profile(profile: &Profile) {
    println!("{}", profile.name.bold().blue());
    println!("{}Country: {}", "• ".green(), profile.country);
    println!("{}Age: {}", "• ".green(), profile.age);
    println!("{}Affiliation: {}", "• ".green(), profile.affiliation);
    if !profile.links.is_empty() {
        println!("{}", "Links:".bold());
        for link in &profile.links {
            println!("  - {}", link.url);
        }
    }
}

/// Handle the 'browse' command
fn handle_browse(catalog: &Catalog, mut session: SearchSession) -> Result<()> {
    let universe = catalog.category_universe();
    println!(
        "{} posts, {} categories. Type to search, :help for commands, :q to quit",
        catalog.posts().len(),
        universe.len()
    );

    let stdin = io::stdin();
    let mut suggestions = session.suggestions(universe);
    let mut line = String::new();
    loop {
        print!("{} ", ">".green());
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {}", "!".red(), e);
                continue;
            }
        };

        match command {
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                println!("{}", repl::HELP);
                continue;
            }
            ReplCommand::Query(query) => {
                session.set_query(query);
                suggestions = session.suggestions(universe);
                print_suggestions(&suggestions);
                continue;
            }
            ReplCommand::Pick(n) => match suggestions.get(n - 1) {
                Some(suggestion) => {
                    session.select(suggestion.name.clone());
                    suggestions = session.suggestions(universe);
                }
                None => {
                    println!("{} no suggestion {}", "!".red(), n);
                    continue;
                }
            },
            ReplCommand::Add(keyword) => {
                session.select(keyword);
            }
            ReplCommand::Remove(keyword) => {
                if !session.deselect(&keyword) {
                    println!("{} {} is not an active keyword", "!".red(), keyword);
                    continue;
                }
            }
            ReplCommand::Mode(mode) => session.set_mode(mode),
            ReplCommand::Clear => session.clear_keywords(),
        }

        let results = session.results(catalog.posts())?;
        print_posts(&results, &session);
    }
    Ok(())
}

/// Helper function to print ranked suggestions
fn print_suggestions(suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("  (no categories)");
        return;
    }
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "  {}. {} (score {:.2})",
            (i + 1).to_string().green(),
            suggestion.name,
            suggestion.score
        );
    }
}

/// Helper function to format and print a filtered post list
fn print_posts(posts: &[PostSummary], session: &SearchSession) {
    let keywords: Vec<&str> = session.keywords().iter().collect();
    let header = if keywords.is_empty() {
        "Posts:".to_string()
    } else {
        let mode = match session.mode() {
            CombinationMode::Any => "any",
            CombinationMode::All => "all",
        };
        format!("Posts matching {} of [{}]:", mode, keywords.join(", "))
    };
    println!("{}", header.bold().blue());

    if posts.is_empty() {
        println!("  (none)");
    }
    for post in posts {
        let categories = post.category_names().collect::<Vec<_>>().join(", ");
        println!(
            "{}  {} [{}] {}",
            display_date(&post.created_at),
            post.title.bold(),
            categories,
            format!("({})", post.id).dimmed()
        );
    }
}

/// YYYY-MM-DD part of an ISO timestamp, or the raw value if it's shorter
fn display_date(created_at: &str) -> &str {
    created_at.get(..10).unwrap_or(created_at)
}
