mod extract;
mod sitemap;
mod table;
mod url;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

const WORDS_CSV: &str = "norwegianWords.csv";
const STORIES_CSV: &str = "norwegianStories.csv";
const OUTPUT_FILE: &str = "sitemap.xml";

#[derive(Parser)]
#[command(
    name = "norsk_sitemap",
    about = "Generate sitemap.xml for the Norwegian learning site"
)]
struct Cli {
    /// Print the URL list to stdout instead of writing sitemap.xml
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let words = word_urls(Path::new(WORDS_CSV))?;
    let stories = story_urls(Path::new(STORIES_CSV))?;
    let counts = UrlCounts {
        words: words.len(),
        stories: stories.len(),
    };

    // Words first, then stories, each in source-row order.
    let mut urls = words;
    urls.extend(stories);

    if urls.is_empty() {
        warn!("No URLs generated, nothing to write. Check the input tables.");
        return Ok(());
    }

    if cli.dry_run {
        for u in &urls {
            println!("{}", u);
        }
        return Ok(());
    }

    sitemap::write_file(Path::new(OUTPUT_FILE), &urls)?;
    counts.print();
    Ok(())
}

struct UrlCounts {
    words: usize,
    stories: usize,
}

impl UrlCounts {
    fn print(&self) {
        println!(
            "Wrote {} with {} URLs ({} words, {} stories).",
            OUTPUT_FILE,
            self.words + self.stories,
            self.words,
            self.stories,
        );
    }
}

/// Words table → word URLs. A missing file skips the source with a warning;
/// an unreadable one aborts the run.
fn word_urls(path: &Path) -> Result<Vec<String>> {
    let Some(records) = table::read_records(path)? else {
        warn!("Missing {}, skipping words.", path.display());
        return Ok(Vec::new());
    };
    Ok(records
        .iter()
        .filter_map(extract::word_entry)
        .map(|e| url::word_url(&e))
        .collect())
}

/// Stories table → story URLs, same skip-on-missing policy.
fn story_urls(path: &Path) -> Result<Vec<String>> {
    let Some(records) = table::read_records(path)? else {
        warn!("Missing {}, skipping stories.", path.display());
        return Ok(Vec::new());
    };
    Ok(records
        .iter()
        .filter_map(extract::story_entry)
        .map(|e| url::story_url(&e))
        .collect())
}
