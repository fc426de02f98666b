//! Bookstock CLI - book inventory management against a live backend

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstock_client::{
    api::books::HttpBooksApi,
    config::ClientConfig,
    form,
    models::book::BookDraft,
    store::BookStore,
};

const USAGE: &str = "\
usage: bookstock-client <command>

commands:
  list                                      list all books
  show <id>                                 show one book
  add <title> <author> <price> <qty>        add a book
  update <id> <title> <author> <price> <qty>  update a book
  delete <id>                               delete a book";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ClientConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookstock_client={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Bookstock client v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.backend.base_url
    );

    let mut store = BookStore::new(HttpBooksApi::new(&config.backend.base_url));

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.split_first() {
        None => list(&mut store).await,
        Some((command, rest)) => match command.as_str() {
            "list" => list(&mut store).await,
            "show" => {
                let id = parse_id(rest)?;
                store.fetch_book_by_id(id).await;
                if let Some(message) = store.error() {
                    bail!("{message}");
                }
                match store.book_loaded() {
                    Some(book) => println!("{}", serde_json::to_string_pretty(book)?),
                    None => bail!("Book Not Found"),
                }
                Ok(())
            }
            "add" => {
                let draft = draft_from_args(rest)?;
                check_draft(&draft)?;
                let book = store.add_book(&draft).await?;
                println!("added book {}", book.id);
                Ok(())
            }
            "update" => {
                let (id_arg, fields) = rest
                    .split_first()
                    .context("expected: update <id> <title> <author> <price> <qty>")?;
                let id: i64 = id_arg.parse().context("invalid id")?;
                let draft = draft_from_args(fields)?;
                check_draft(&draft)?;
                let book = store.update_book(id, &draft).await?;
                println!("updated book {}", book.id);
                Ok(())
            }
            "delete" => {
                let id = parse_id(rest)?;
                store.delete_book(id).await;
                if let Some(message) = store.error() {
                    bail!("{message}");
                }
                println!("deleted book {id}");
                Ok(())
            }
            other => {
                eprintln!("unknown command: {other}\n\n{USAGE}");
                std::process::exit(2);
            }
        },
    }
}

async fn list(store: &mut BookStore<HttpBooksApi>) -> anyhow::Result<()> {
    store.fetch_books().await;
    if let Some(message) = store.error() {
        bail!("{message}");
    }
    println!("{} book(s)", store.books_count());
    for book in store.books() {
        println!(
            "{:>4}  {} by {} ({} at {})",
            book.id, book.title, book.author, book.qty, book.price
        );
    }
    Ok(())
}

fn parse_id(args: &[String]) -> anyhow::Result<i64> {
    match args {
        [id] => id.parse().context("invalid id"),
        _ => bail!("expected: <id>"),
    }
}

fn draft_from_args(args: &[String]) -> anyhow::Result<BookDraft> {
    match args {
        [title, author, price, qty] => Ok(BookDraft {
            title: title.clone(),
            author: author.clone(),
            price: price.clone(),
            qty: qty.clone(),
        }),
        _ => bail!("expected: <title> <author> <price> <qty>"),
    }
}

/// Gate submission on validation, the way the form does: an invalid draft
/// never reaches the store.
fn check_draft(draft: &BookDraft) -> anyhow::Result<()> {
    let errors = form::validate(draft);
    if errors.is_empty() {
        return Ok(());
    }
    for (field, message) in errors.iter() {
        eprintln!("{field}: {message}");
    }
    bail!("invalid book data");
}
