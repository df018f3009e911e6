use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use log::{info, warn};
use serde_json::{Map, Value};
use slotpress_core::edit::ArticleEditor;
use slotpress_core::raw::{articles_from_body, collection_from_value, slot_index_from_str};
use slotpress_core::view::{build_stack_view, StackView};
use slotpress_core::{Article, Placement, SlotError, Stack};
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Parser)]
#[command(name = "layout")]
#[command(about = "Inspect and edit a layout stack file")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show every slot of a layout
    #[clap(name = "show")]
    Show(ShowOptions),

    /// Put an article into a slot; a taken slot pushes the rest one slot later
    #[clap(name = "push")]
    Push(PushOptions),

    /// Merge new content into the article in a slot
    #[clap(name = "edit")]
    Edit(EditOptions),

    /// Empty a slot without moving any other article
    #[clap(name = "remove")]
    Remove(RemoveOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ShowOptions {
    /// Layout file (JSON with an `articles` collection)
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct PushOptions {
    /// Layout file (JSON with an `articles` collection)
    pub file: PathBuf,

    /// Slot index
    #[arg(allow_hyphen_values = true)]
    pub index: String,

    /// Article as a JSON object, e.g. '{"ID": 7, "content": {"title": "..."}}'
    pub article: String,

    /// Print the resulting layout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct EditOptions {
    /// Layout file (JSON with an `articles` collection)
    pub file: PathBuf,

    /// Slot index
    #[arg(allow_hyphen_values = true)]
    pub index: String,

    /// Content to merge, as a JSON object
    pub content: String,

    /// Print the resulting layout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct RemoveOptions {
    /// Layout file (JSON with an `articles` collection)
    pub file: PathBuf,

    /// Slot index
    #[arg(allow_hyphen_values = true)]
    pub index: String,

    /// Print the resulting layout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// A layout document on disk and the stack decoded from it
///
/// Fields other than `articles` are carried through untouched on save.
#[derive(Debug, Clone)]
pub struct LayoutFile {
    path: PathBuf,
    document: Map<String, Value>,
    pub stack: Stack,
}

impl LayoutFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| layout_error(path, e))?;
        let value: Value = serde_json::from_str(&text).map_err(|e| layout_error(path, e))?;

        let (document, raw) = match value {
            Value::Object(mut document) if document.contains_key("articles") => {
                let articles = document.remove("articles").unwrap_or(Value::Null);
                (document, collection_from_value(articles).map_err(Error::from)?)
            }
            other => (Map::new(), articles_from_body(other).map_err(Error::from)?),
        };

        Ok(Self {
            path: path.to_path_buf(),
            document,
            stack: Stack::from_raw(raw),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn to_json_string(&self) -> Result<String> {
        let mut document = self.document.clone();
        document.insert("articles".to_string(), serde_json::to_value(self.stack.to_raw())?);
        Ok(serde_json::to_string_pretty(&Value::Object(document))?)
    }

    pub fn save(&self) -> Result<()> {
        let mut text = self.to_json_string()?;
        text.push('\n');
        std::fs::write(&self.path, text).map_err(|e| layout_error(&self.path, e))?;
        Ok(())
    }
}

fn layout_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::LayoutFile {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Show(options) => show(options),
        Commands::Push(options) => {
            let mut layout = LayoutFile::load(&options.file)?;
            let placement = push_article(&mut layout.stack, &options.index, &options.article)?;
            if global.verbose {
                eprintln!("{:?} at slot {}", placement, options.index);
            }
            finish(&layout, options.dry_run)
        }
        Commands::Edit(options) => {
            let mut layout = LayoutFile::load(&options.file)?;
            edit_article(&mut layout.stack, &options.index, &options.content)?;
            finish(&layout, options.dry_run)
        }
        Commands::Remove(options) => {
            let mut layout = LayoutFile::load(&options.file)?;
            let removed = remove_article(&mut layout.stack, &options.index)?;
            if global.verbose {
                eprintln!("Removed article {}", describe(&removed));
            }
            finish(&layout, options.dry_run)
        }
    }
}

fn show(options: ShowOptions) -> Result<()> {
    let layout = LayoutFile::load(&options.file)?;
    let view = build_stack_view(&layout.stack);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        output_formatted(&view, layout.path());
    }

    Ok(())
}

fn finish(layout: &LayoutFile, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{}", layout.to_json_string()?);
        return Ok(());
    }

    layout.save()?;
    info!("wrote {}", layout.path().display());
    output_formatted(&build_stack_view(&layout.stack), layout.path());
    Ok(())
}

/// Push an article given as JSON text into the slot named by `index`
pub fn push_article(stack: &mut Stack, index: &str, article: &str) -> Result<Placement> {
    let index = slot_index_from_str(index).map_err(Error::from)?;
    let value: Value = serde_json::from_str(article).context("Article is not valid JSON")?;
    let article = Article::from_value(value).ok_or_else(|| eyre!("Article must be a JSON object"))?;

    let placement = stack.push(index, article).map_err(|e| {
        warn!("push into slot {index} rejected: {e}");
        Error::from(e)
    })?;
    info!("pushed into slot {index}: {placement:?}");
    Ok(placement)
}

/// Merge content given as JSON text into the slot named by `index`
pub fn edit_article(stack: &mut Stack, index: &str, content: &str) -> Result<()> {
    let index = slot_index_from_str(index).map_err(Error::from)?;
    let value: Value = serde_json::from_str(content).context("Content is not valid JSON")?;

    let Value::Object(content) = value else {
        warn!("edit of slot {index} rejected: content is not an object");
        return Err(Error::from(SlotError::MalformedPayload(index)).into());
    };

    ArticleEditor::new(stack, index)
        .set_article(content)
        .map_err(|e| {
            warn!("edit of slot {index} rejected: {e}");
            Error::from(e)
        })?;
    Ok(())
}

/// Empty the slot named by `index`
pub fn remove_article(stack: &mut Stack, index: &str) -> Result<Article> {
    let index = slot_index_from_str(index).map_err(Error::from)?;

    let removed = stack.remove(index).map_err(|e| {
        warn!("removal of slot {index} rejected: {e}");
        Error::from(e)
    })?;
    Ok(removed)
}

fn describe(article: &Article) -> String {
    match (&article.id, article.title()) {
        (Some(id), Some(title)) => f!("{id} ({title})"),
        (Some(id), None) => id.to_string(),
        (None, Some(title)) => title.to_string(),
        (None, None) => "(untitled)".to_string(),
    }
}

fn output_formatted(view: &StackView, path: &Path) {
    println!(
        "\n{} {}\n",
        path.display().to_string().bright_cyan().bold(),
        f!("({} slots, {} filled)", view.len, view.occupied).bright_black()
    );

    let mut table = new_table();
    table.add_row(prettytable::row!["SLOT", "ID", "TITLE"]);
    for slot in &view.slots {
        if slot.occupied {
            let id = slot.id.as_ref().map(Value::to_string).unwrap_or_default();
            let title = slot.title.clone().unwrap_or_else(|| "(No title)".to_string());
            table.add_row(prettytable::row![slot.index, id, title]);
        } else {
            table.add_row(prettytable::row![slot.index, "-", "(empty)"]);
        }
    }
    table.printstd();
    println!();
}
