use crate::client::{ArticleClient, ArticleSource, FileSource};
use crate::config::{parse_param, ClientConfig};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use log::debug;
use slotpress_core::view::{build_page_view, PageView};
use slotpress_core::ResultSet;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Endpoint path, relative to the base URL (or to --offline)
    #[arg(value_name = "ENDPOINT")]
    pub endpoint: String,

    /// Base URL of the article API (falls back to SLOTPRESS_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Query parameter as key=value; repeat for more
    #[arg(short = 'q', long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Page number (0-indexed); negative values land on the first page
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub page: i64,

    /// Number of articles per page
    #[arg(long, env = "SLOTPRESS_PER_PAGE", default_value = "10")]
    pub per_page: NonZeroUsize,

    /// Maximum number of page links in the pager
    #[arg(long, env = "SLOTPRESS_WINDOW", default_value = "5")]
    pub window: usize,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Read responses from this directory instead of the network
    #[arg(long, value_name = "DIR")]
    pub offline: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let view = match &options.offline {
        Some(dir) => {
            if global.verbose {
                eprintln!("Reading {} from {}", options.endpoint, dir.display());
            }
            search_data(&FileSource::new(dir), &options).await?
        }
        None => {
            let client = ArticleClient::new(client_config(&options)?)?;
            if global.verbose {
                eprintln!("Fetching {}", client.url_for(&options.endpoint));
            }
            search_data(&client, &options).await?
        }
    };

    if options.json {
        output_json(&view)?;
    } else {
        output_formatted(&view);
    }

    Ok(())
}

fn client_config(options: &SearchOptions) -> Result<ClientConfig> {
    let config = match &options.base_url {
        Some(url) => ClientConfig::new(url.as_str())?,
        None => ClientConfig::from_env()?,
    };

    Ok(match options.timeout {
        Some(secs) => config.with_timeout(Duration::from_secs(secs)),
        None => config,
    })
}

/// Fetch, paginate and return the requested page as view state
pub async fn search_data<S: ArticleSource>(source: &S, options: &SearchOptions) -> Result<PageView> {
    let raw = source.fetch(&options.endpoint, &options.params).await?;

    let mut results = ResultSet::new(options.per_page);
    results.ingest_raw(raw);
    debug!(
        "{} article(s) over {} page(s)",
        results.item_count(),
        results.page_count()
    );

    let items = results.page(options.page).to_vec();
    if items.is_empty() {
        debug!("page {} is empty", options.page);
    }

    Ok(build_page_view(
        &items,
        &results,
        options.window,
        &command_base(options),
    ))
}

/// Command prefix used for navigation hints
fn command_base(options: &SearchOptions) -> String {
    let mut command = f!("slotpress search {}", options.endpoint);
    for (key, value) in &options.params {
        command.push_str(&f!(" --param {key}={value}"));
    }
    if options.per_page.get() != 10 {
        command.push_str(&f!(" --per-page {}", options.per_page));
    }
    if let Some(dir) = &options.offline {
        command.push_str(&f!(" --offline {}", dir.display()));
    }
    command
}

fn format_page_json(view: &PageView) -> Result<String> {
    serde_json::to_string_pretty(view).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Pager line such as `‹ 1 2 [3] 4 5 ›` (page numbers shown 1-based)
fn format_pager(view: &PageView) -> String {
    let info = &view.pagination;
    let Some(window) = info.window else {
        return String::new();
    };

    let mut parts = Vec::new();
    if info.prev_page_command.is_some() {
        parts.push("‹".to_string());
    }
    for page in window.pages() {
        if page == info.current_page {
            parts.push(f!("[{}]", page + 1));
        } else {
            parts.push((page + 1).to_string());
        }
    }
    if info.next_page_command.is_some() {
        parts.push("›".to_string());
    }
    parts.join(" ")
}

fn format_page_text(view: &PageView) -> String {
    let info = &view.pagination;
    let mut result = String::new();

    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!(
        "{}\n",
        f!(
            "RESULTS (Page {} of {}, {} total)",
            info.current_page + 1,
            info.total_pages.max(1),
            info.total_items
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    if view.items.is_empty() {
        result.push_str(&f!("\n{}\n", "No articles on this page.".yellow()));
    } else {
        let offset = info.current_page * info.per_page;
        for (idx, article) in view.items.iter().enumerate() {
            let title = article.title().unwrap_or("(No title)");
            result.push_str(&f!(
                "\n{} {}\n",
                f!("[{}]", offset + idx + 1).yellow().bold(),
                title.white().bold()
            ));
            if let Some(id) = &article.id {
                result.push_str(&f!("    {}: {}\n", "ID".green(), id.to_string().bright_white()));
            }
        }
    }

    let pager = format_pager(view);
    if !pager.is_empty() {
        result.push_str(&f!("\n{}\n", pager.bright_white()));
    }

    result.push_str(&f!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(next) = &info.next_page_command {
        result.push_str(&f!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &info.prev_page_command {
        result.push_str(&f!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }

    result.push('\n');
    result
}

fn output_json(view: &PageView) -> Result<()> {
    let json = format_page_json(view)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(view: &PageView) {
    print!("{}", format_page_text(view));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(endpoint: &str, page: i64, per_page: usize) -> SearchOptions {
        SearchOptions {
            endpoint: endpoint.to_string(),
            base_url: None,
            params: vec![],
            page,
            per_page: NonZeroUsize::new(per_page).unwrap(),
            window: 5,
            timeout: None,
            offline: None,
            json: false,
        }
    }

    /// Writes nine articles into `search.json` under a temp dir
    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let articles: Vec<_> = (0..9)
            .map(|i| json!({"ID": i, "content": {"title": format!("Story {i}")}}))
            .collect();
        std::fs::write(
            dir.path().join("search.json"),
            json!({"articles": articles}).to_string(),
        )
        .unwrap();
        dir
    }

    #[tokio::test]
    async fn test_search_data_first_page() {
        let dir = fixture_dir();
        let source = FileSource::new(dir.path());

        let view = search_data(&source, &options("search.json", 0, 5)).await.unwrap();

        assert_eq!(view.items.len(), 5);
        assert_eq!(view.pagination.total_pages, 2);
        assert_eq!(view.pagination.total_items, 9);
        assert!(view.pagination.next_page_command.is_some());
    }

    #[tokio::test]
    async fn test_search_data_negative_page() {
        let dir = fixture_dir();
        let source = FileSource::new(dir.path());

        let view = search_data(&source, &options("search.json", -1, 5)).await.unwrap();

        assert_eq!(view.pagination.current_page, 0);
        assert_eq!(view.items[0].id, Some(json!(0)));
        assert_eq!(view.items.len(), 5);
    }

    #[tokio::test]
    async fn test_search_data_past_end() {
        let dir = fixture_dir();
        let source = FileSource::new(dir.path());

        let view = search_data(&source, &options("search.json", 4, 5)).await.unwrap();

        assert!(view.items.is_empty());
        assert_eq!(view.pagination.current_page, 0);
    }

    #[test]
    fn test_command_base() {
        let mut opts = options("articles", 0, 10);
        assert_eq!(command_base(&opts), "slotpress search articles");

        opts.params = vec![("q".to_string(), "rust".to_string())];
        opts.per_page = NonZeroUsize::new(5).unwrap();
        assert_eq!(
            command_base(&opts),
            "slotpress search articles --param q=rust --per-page 5"
        );
    }

    #[tokio::test]
    async fn test_format_page_text() {
        colored::control::set_override(false);
        let dir = fixture_dir();
        let source = FileSource::new(dir.path());
        let view = search_data(&source, &options("search.json", 1, 5)).await.unwrap();

        let text = format_page_text(&view);

        assert!(text.contains("RESULTS (Page 2 of 2, 9 total)"));
        assert!(text.contains("[6] Story 5"));
        assert!(text.contains("‹ 1 [2]"));
        assert!(text.contains("Previous page"));
        assert!(!text.contains("Next page"));
    }

    #[tokio::test]
    async fn test_format_page_json() {
        let dir = fixture_dir();
        let source = FileSource::new(dir.path());
        let view = search_data(&source, &options("search.json", 0, 5)).await.unwrap();

        let json = format_page_json(&view).unwrap();

        assert!(json.contains("\"current_page\": 0"));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"ID\": 0"));
    }
}
