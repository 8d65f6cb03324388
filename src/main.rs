use chrono::Local;
use clap::Parser;
use scribe::application::{
    edit_entry, BackupScheduler, ConfigService, EntryChanges, JournalStore, SearchQuery,
};
use scribe::cli::{format_entry, format_entry_list, format_tag_list, Cli, Commands, Menu};
use scribe::domain::ExportFormat;
use scribe::error::{Result, ScribeError};
use scribe::infrastructure::Config;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr only when SCRIBE_LOG is set (e.g. SCRIBE_LOG=debug).
fn init_logging() {
    let Ok(log_level) = std::env::var("SCRIBE_LOG") else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("scribe={}", log_level)))
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load config and open the journal it points at.
fn open_journal(home: &Path, recover: bool) -> Result<(Config, JournalStore)> {
    let config = Config::load_from_dir(home)?;
    let path = config.storage_path(home);

    let store = if recover {
        JournalStore::recover(&path)?
    } else {
        JournalStore::load(&path)?
    };
    tracing::debug!(
        "opened {} ({} entries)",
        store.path().display(),
        store.len()
    );

    Ok((config, store))
}

fn run(cli: Cli) -> Result<()> {
    let home = Config::home_dir()?;
    let recover = cli.recover;

    let Some(command) = cli.command else {
        println!("scribe - Personal journal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Add { content, tags } => {
            let (_, store) = open_journal(&home, recover)?;
            let entry = store.add(content, tags)?;
            println!("Added entry {}", entry.id);
        }
        Commands::List => {
            let (_, store) = open_journal(&home, recover)?;
            println!("{}", format_entry_list(&store.all()).trim_end());
        }
        Commands::Search {
            keyword,
            tags,
            from,
            to,
        } => {
            let query = SearchQuery::from_args(
                keyword,
                tags,
                from.as_deref(),
                to.as_deref(),
                Local::now().date_naive(),
            )?;
            let (_, store) = open_journal(&home, recover)?;
            println!("{}", format_entry_list(&query.execute(&store)).trim_end());
        }
        Commands::Show { id } => {
            let (_, store) = open_journal(&home, recover)?;
            let entry = store.get_by_id(id).ok_or(ScribeError::EntryNotFound(id))?;
            print!("{}", format_entry(&entry));
        }
        Commands::Edit {
            id,
            content,
            tags,
            clear_tags,
        } => {
            let tags = if clear_tags {
                Some(Vec::new())
            } else if tags.is_empty() {
                None
            } else {
                Some(tags)
            };
            let (_, store) = open_journal(&home, recover)?;
            let entry = edit_entry(&store, id, EntryChanges { content, tags })?;
            println!("Updated entry {}", entry.id);
        }
        Commands::Delete { id } => {
            let (_, store) = open_journal(&home, recover)?;
            if !store.delete(id)? {
                return Err(ScribeError::EntryNotFound(id));
            }
            println!("Deleted entry {}", id);
        }
        Commands::Tags => {
            let (_, store) = open_journal(&home, recover)?;
            println!("{}", format_tag_list(&store.tags()).trim_end());
        }
        Commands::Export { path, format } => {
            // Reject unknown formats before anything is opened or written
            let format = match format {
                Some(name) => name.parse::<ExportFormat>()?,
                None => ExportFormat::from_path(&path)?,
            };
            let (_, store) = open_journal(&home, recover)?;
            store.export(&path, format)?;
            println!(
                "Exported {} entries to {} ({})",
                store.len(),
                path.display(),
                format
            );
        }
        Commands::Backup { to, watch } => {
            let (config, store) = open_journal(&home, recover)?;
            let target = to.unwrap_or_else(|| config.backup_path(&home));
            let count = store.backup(&target)?;
            println!("Backed up {} entries to {}", count, target.display());

            if watch {
                println!(
                    "Backing up every {}s, press Ctrl-C to stop",
                    config.backup_interval_secs
                );
                BackupScheduler::start(Arc::new(store), target, config.backup_interval())
                    .wait();
            }
        }
        Commands::Config { key, value, list } => {
            run_config(ConfigService::new(home), key, value, list)?;
        }
        Commands::Menu => {
            let (_, store) = open_journal(&home, recover)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Menu::new(&store, stdin.lock(), stdout.lock()).run()?;
        }
    }

    Ok(())
}

fn run_config(
    service: ConfigService,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<()> {
    if list {
        let config = service.list()?;
        println!("storage = {}", config.storage_file.display());
        println!("backup = {}", config.backup_file.display());
        println!("backup_interval = {}", config.backup_interval_secs);
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
    } else {
        println!("Usage: scribe config [--list | <key> [<value>]]");
        println!("Valid keys: storage, backup, backup_interval");
    }
    Ok(())
}
