use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use biblio_core::config::Config;
use biblio_core::library::LibraryData;
use biblio_core::pages::PageId;
use biblio_notify::journal::DownloadJournal;
use tracing_subscriber::EnvFilter;

mod ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Some(first) = args.first() {
        match first.as_str() {
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            "--version" | "-V" | "version" => {
                println!("biblio {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {}
        }
    }
    let cli = parse_args(args)?;

    init_logging();
    let config = load_config();

    let data = match cli.data.or(config.data.path.clone()) {
        Some(path) => LibraryData::load(&path)?,
        None => LibraryData::builtin()?,
    };

    let journal = open_journal(cli.journal.or(config.journal.path.clone()));

    let theme = match config.ui.theme.as_deref() {
        Some("light") => ui::UiTheme::Light,
        _ => ui::UiTheme::Dark,
    };

    let start_page = match cli.page.as_deref() {
        Some(name) => PageId::from_str(name)
            .ok_or_else(|| format!("unknown page: {name} (try 'home' or 'syllabi')"))?,
        None => PageId::Home,
    };

    ui::run(data, journal, theme, start_page)
}

struct CliArgs {
    data: Option<PathBuf>,
    journal: Option<PathBuf>,
    page: Option<String>,
}

fn parse_args(args: Vec<String>) -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut data = None;
    let mut journal = None;
    let mut page = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--data requires a path".into());
                };
                data = Some(PathBuf::from(value));
                i += 2;
            }
            "--journal" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--journal requires a path".into());
                };
                journal = Some(PathBuf::from(value));
                i += 2;
            }
            "--page" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--page requires a page name".into());
                };
                page = Some(value.clone());
                i += 2;
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(CliArgs {
        data,
        journal,
        page,
    })
}

/// Log to a file; the terminal belongs to the UI. Logging is optional, so
/// setup failures are swallowed.
fn init_logging() {
    let Some(dir) = dirs::data_dir().map(|dir| dir.join("biblio")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("biblio.log"))
    else {
        return;
    };
    let filter = EnvFilter::try_from_env("BIBLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn load_config() -> Config {
    let Some(path) = dirs::config_dir().map(|dir| dir.join("biblio").join("config.toml")) else {
        return Config::default();
    };
    let Ok(text) = fs::read_to_string(&path) else {
        return Config::default();
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring malformed config");
            Config::default()
        }
    }
}

fn open_journal(path: Option<PathBuf>) -> Option<DownloadJournal> {
    let path = path.or_else(|| {
        dirs::data_dir().map(|dir| dir.join("biblio").join("downloads.jsonl"))
    })?;
    match DownloadJournal::open(&path) {
        Ok(journal) => Some(journal),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "running without a download journal");
            None
        }
    }
}

fn print_help() {
    println!("biblio {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  biblio [--data PATH] [--journal PATH] [--page NAME]");
    println!("  biblio --help");
    println!("  biblio --version");
    println!();
    println!("Options:");
    println!("  --data PATH     load a library dataset (.yaml, .yml or .json)");
    println!("  --journal PATH  write download requests to this JSONL file");
    println!("  --page NAME     open on a page (home, about, rules, syllabi, ...)");
}
