use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use guide_core::model::ChecklistSeed;
use services::{ProgressStore, SearchIndex};
use storage::repository::Storage;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingOperand { what: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingOperand { what } => write!(f, "missing {what}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- render   [--out <dir>]");
    eprintln!("  cargo run -p app -- progress [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- toggle <item_id> [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- reset    [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- search <query>");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:guide.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GUIDE_DB_URL");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Render,
    Progress,
    Toggle,
    Reset,
    Search,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "render" => Some(Self::Render),
            "progress" => Some(Self::Progress),
            "toggle" => Some(Self::Toggle),
            "reset" => Some(Self::Reset),
            "search" => Some(Self::Search),
            _ => None,
        }
    }
}

struct Args {
    db_url: String,
    out_dir: Option<PathBuf>,
    operand: Option<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("GUIDE_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://guide.sqlite3".into(), normalize_sqlite_url);
        let mut out_dir = None;
        let mut operand = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--out" => {
                    let value = require_value(args, "--out")?;
                    out_dir = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ if arg.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ if operand.is_none() => operand = Some(arg),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            out_dir,
            operand,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn seed() -> Result<ChecklistSeed, Box<dyn std::error::Error>> {
    Ok(content::checklist_seed()?)
}

async fn open_store(db_url: &str) -> Result<ProgressStore, Box<dyn std::error::Error>> {
    // Open + migrate SQLite here so services stay free of bootstrap concerns.
    prepare_sqlite_file(db_url)?;
    let storage = Storage::sqlite(db_url).await?;
    Ok(ProgressStore::load(seed()?, Arc::clone(&storage.kv)).await?)
}

fn run_render(out_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let sessions = content::sessions();
    let glossary = content::glossary();

    match out_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            for session in &sessions {
                let file = dir.join(format!("session-{}.html", session.id));
                std::fs::write(&file, render::render_session(session))?;
                println!("wrote {}", file.display());
            }
            let file = dir.join("glossary.html");
            std::fs::write(&file, render::render_glossary(&glossary))?;
            println!("wrote {}", file.display());
        }
        None => {
            for session in &sessions {
                print!("{}", render::render_session(session));
            }
            print!("{}", render::render_glossary(&glossary));
        }
    }
    Ok(())
}

async fn run_progress(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(db_url).await?;
    println!(
        "Overall: {}/{} ({}%)",
        store.completed_count(),
        store.total_count(),
        store.percentage()
    );
    for session in content::sessions() {
        let progress = store.session_progress(session.id);
        println!(
            "Session {} ({}): {}/{} ({}%)",
            session.id, session.title, progress.completed, progress.total, progress.percentage
        );
    }
    for item in store.items() {
        let mark = if item.completed { "x" } else { " " };
        println!("  [{mark}] {}  {}", item.id, item.label);
    }
    Ok(())
}

async fn run_toggle(db_url: &str, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(db_url).await?;
    store.toggle(id).await?;
    match store.items().iter().find(|item| item.id == id) {
        Some(item) => println!(
            "{}: {}",
            item.id,
            if item.completed { "completed" } else { "not completed" }
        ),
        None => println!("{id}: no such checklist item (nothing changed)"),
    }
    Ok(())
}

async fn run_reset(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(db_url).await?;
    store.reset().await?;
    println!("progress reset ({} items)", store.total_count());
    Ok(())
}

fn run_search(query: &str) {
    let index = SearchIndex::build(&content::sessions(), &content::glossary());
    let hits = index.search(query);
    if hits.is_empty() {
        println!("no results for {query:?}");
        return;
    }
    for hit in hits {
        println!("{}  #{}", hit.title, hit.section_id);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None | Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownCommand(first.to_string())
        })?,
    };
    argv.remove(0);

    let mut iter = argv.into_iter();
    // Usage goes out here; the error itself is reported once, by main.
    let args = Args::parse(&mut iter).map_err(|e| {
        print_usage();
        e
    })?;

    match cmd {
        Command::Render => run_render(args.out_dir.as_deref()),
        Command::Progress => run_progress(&args.db_url).await,
        Command::Toggle => {
            let id = args.operand.ok_or(ArgsError::MissingOperand {
                what: "checklist item id",
            })?;
            run_toggle(&args.db_url, &id).await
        }
        Command::Reset => run_reset(&args.db_url).await,
        Command::Search => {
            let query = args
                .operand
                .ok_or(ArgsError::MissingOperand { what: "search query" })?;
            run_search(&query);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter)
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(parse(&["--bogus"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn db_flag_requires_a_value() {
        assert!(matches!(
            parse(&["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
    }

    #[test]
    fn second_positional_is_rejected() {
        assert!(matches!(parse(&["one", "two"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn unknown_subcommand_has_no_matching_command() {
        assert_eq!(Command::from_arg("frob"), None);
    }

    #[test]
    fn errors_render_single_line_messages() {
        assert_eq!(
            ArgsError::UnknownCommand("frob".into()).to_string(),
            "unknown subcommand: frob"
        );
        assert_eq!(
            ArgsError::MissingValue { flag: "--out" }.to_string(),
            "--out requires a value"
        );
    }
}
