//! Headless front end for the folio reader core.
//!
//! Opens a directory in a tab and prints the full spread sequence under
//! the requested layout mode, or lists the book library. This is the same
//! API surface a GUI presentation layer would consume.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use folio::library;
use folio::models::{ImageRef, ModeFlag};
use folio::reader;
use folio::scanner;
use folio::settings::{SettingsStore, BOOKS_PATH_KEY};
use folio::tabs::TabManager;

#[derive(Parser)]
#[command(name = "folio", about = "Tabbed image gallery/reader")]
struct Args {
    /// Directory of images to open.
    dir: Option<PathBuf>,

    /// Two-page spread layout.
    #[arg(long)]
    two_side: bool,

    /// Left-to-right reading direction (default is right-to-left).
    #[arg(long)]
    left_to_right: bool,

    /// Duplicate the first page into both slots (two-side only).
    #[arg(long)]
    dup_first: bool,

    /// Show only GIF images.
    #[arg(long)]
    gifs_only: bool,

    /// Label pages by number instead of file name.
    #[arg(long)]
    page_numbers: bool,

    /// List the book library instead of opening a directory.
    #[arg(long)]
    books: bool,

    /// Set the library root (persisted as the books.path setting).
    #[arg(long)]
    set_books_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=info".parse().expect("valid directive")),
        )
        .init();

    let args = Args::parse();

    if let Some(root) = &args.set_books_path {
        let store = SettingsStore::open_default()?;
        store.set(BOOKS_PATH_KEY, &root.to_string_lossy())?;
        println!("Library root set to {}", root.display());
        return Ok(());
    }

    if args.books {
        return print_books();
    }

    let dir = args
        .dir
        .clone()
        .context("expected a directory to open (or --books)")?;
    print_spreads(&args, &dir).await
}

/// Opens `dir` in a fresh tab and prints every spread from the start.
async fn print_spreads(args: &Args, dir: &PathBuf) -> Result<()> {
    let mut manager = TabManager::new();

    // Enumeration failures surface as an empty gallery, not a crash.
    let images = match scanner::scan(dir).await {
        Ok(images) => images,
        Err(e) => {
            warn!("Failed to open {:?}: {}", dir, e);
            Vec::new()
        }
    };

    let tab = manager.active_mut();
    tab.title = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "New Tab".to_string());
    tab.gallery.load(images);
    tab.gallery.set_flag(ModeFlag::TwoSide, args.two_side);
    tab.gallery.set_flag(ModeFlag::RightToLeft, !args.left_to_right);
    tab.gallery.set_flag(ModeFlag::DupFirst, args.dup_first);
    tab.gallery.set_flag(ModeFlag::ShowGifsOnly, args.gifs_only);
    tab.gallery
        .set_flag(ModeFlag::ShowPageNumbers, args.page_numbers);

    let gallery = &mut manager.active_mut().gallery;
    if gallery.filtered_len() == 0 {
        println!("(no images)");
        return Ok(());
    }

    loop {
        {
            let filtered = reader::filtered(gallery);
            let slots = reader::resolve_slots(gallery);
            let describe = |image: &ImageRef| {
                let index = filtered
                    .iter()
                    .position(|i| std::ptr::eq(*i, image))
                    .unwrap_or(gallery.current_index());
                reader::label(image, index, gallery)
            };

            match (slots.slot_a, slots.slot_b) {
                (Some(a), Some(b)) if slots.right_is_slot_a => {
                    println!("[{} | {}]", describe(b), describe(a));
                }
                (Some(a), Some(b)) => {
                    println!("[{} | {}]", describe(a), describe(b));
                }
                (Some(a), None) => println!("[{}]", describe(a)),
                _ => {}
            }
        }

        let before = gallery.current_index();
        reader::step_next(gallery);
        if gallery.current_index() == before {
            break;
        }
    }

    Ok(())
}

/// Prints the book library from the configured root.
fn print_books() -> Result<()> {
    let store = SettingsStore::open_default()?;
    let root = store
        .get(BOOKS_PATH_KEY)?
        .context("no library root configured; use --set-books-path first")?;

    let books = match library::list_books(PathBuf::from(&root).as_path()) {
        Ok(books) => books,
        Err(e) => {
            warn!("Failed to list books under {:?}: {}", root, e);
            Vec::new()
        }
    };

    if books.is_empty() {
        println!("(no books)");
        return Ok(());
    }

    for book in books {
        match &book.preview {
            Some(preview) => println!("{}  (preview: {})", book.name, preview.display()),
            None => println!("{}  (no preview)", book.name),
        }
    }
    Ok(())
}
