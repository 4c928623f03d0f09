use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use hacker_term::{Entry, PageData, SortKey};

#[derive(Parser)]
#[command(name = "hacker_term", about = "Browse a scraped Hacker News front page")]
struct Cli {
    /// Page JSON file ("-" reads stdin)
    path: PathBuf,
    /// Order to show stories in: score, comments, rank or title
    #[arg(short, long, default_value = "rank")]
    sort: SortKey,
    /// Max rows to display
    #[arg(short = 'n', long)]
    limit: Option<usize>,
    /// Print normalized stories as JSON
    #[arg(long)]
    json: bool,
    /// Print mean, median and mode of scores
    #[arg(long)]
    stats: bool,
    /// Open the top story in the browser
    #[arg(long, value_enum)]
    open: Option<OpenTarget>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OpenTarget {
    Article,
    Comments,
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read page data from stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_row(entry: &Entry) {
    println!(
        "{:>3}. {} [{} pts, {} comments] {}",
        entry.rank + 1,
        entry.title,
        entry.score,
        entry.comments,
        entry.url
    );
}

fn open_link(url: &str) {
    if let Err(e) = open::that(url) {
        eprintln!("Failed to open URL: {}", e);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = read_source(&cli.path)?;
    let mut page = PageData::new(&raw)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;
    page.sort_on(cli.sort);

    let limit = cli.limit.unwrap_or(page.len());
    let rows = &page.data()[..limit.min(page.len())];

    if cli.json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        if page.is_empty() {
            println!("No stories on this page.");
        }
        for entry in rows {
            print_row(entry);
        }
    }

    if cli.stats {
        println!(
            "Scores: mean {:.2}, median {:.1}, mode {}",
            page.mean_score(),
            page.median_score(),
            page.mode_score()
        );
    }

    match cli.open {
        Some(OpenTarget::Article) => match page.selected_url() {
            Some(url) => open_link(url),
            None => eprintln!("No story to open"),
        },
        Some(OpenTarget::Comments) => match page.selected_comments_url() {
            Some(url) => open_link(&url),
            None => eprintln!("Top story has no comments page"),
        },
        None => {}
    }

    Ok(())
}
