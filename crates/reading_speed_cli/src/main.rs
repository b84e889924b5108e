pub mod files;

use std::{path::PathBuf, process::ExitCode, rc::Rc};

use clap::{Parser, Subcommand, ValueEnum};
use reading_speed::{
    ContentItem, Estimator, EstimatorOptions, HookRegistry, ItemId, MetadataStore, ReadingSpeed,
    ShortcodeMatching, SqliteStore, WordCounting, META_KEY,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the metadata database
    #[arg(short, long, global = true, default_value = "./reading_speed.sqlite3")]
    database: PathBuf,
    /// How shortcodes are removed before counting
    #[arg(long, global = true, value_enum, default_value_t = Shortcodes::Greedy)]
    shortcodes: Shortcodes,
    /// How words are counted
    #[arg(long, global = true, value_enum, default_value_t = Words::Whitespace)]
    words: Words,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate files and directories without touching the database
    Estimate {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print a JSON array instead of tab separated lines
        #[arg(long)]
        json: bool,
    },
    /// Fire the save event for an article and store its estimate
    Save {
        #[arg(long)]
        id: ItemId,
        file: PathBuf,
    },
    /// Print the stored estimate, computing it when missing
    Get {
        #[arg(long)]
        id: ItemId,
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Shortcodes {
    Greedy,
    PerShortcode,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Words {
    Whitespace,
    StrWordCount,
    Unicode,
}

impl Args {
    fn estimator(&self) -> Estimator {
        Estimator::new(EstimatorOptions {
            shortcodes: match self.shortcodes {
                Shortcodes::Greedy => ShortcodeMatching::Greedy,
                Shortcodes::PerShortcode => ShortcodeMatching::PerShortcode,
            },
            words: match self.words {
                Words::Whitespace => WordCounting::Whitespace,
                Words::StrWordCount => WordCounting::StrWordCount,
                Words::Unicode => WordCounting::Unicode,
            },
        })
    }
}

#[derive(Serialize, Debug)]
struct Report {
    path: String,
    words: usize,
    minutes: f64,
}

fn main() -> ExitCode {
    #[cfg(debug_assertions)]
    let mut logger;
    #[cfg(not(debug_assertions))]
    let logger;

    logger = tracing_subscriber::fmt().with_writer(std::io::stderr);
    #[cfg(debug_assertions)]
    {
        logger = logger.with_max_level(tracing::Level::TRACE);
    }
    logger.init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let estimator = args.estimator();

    match &args.command {
        Command::Estimate { paths, json } => estimate(&estimator, paths, *json),
        Command::Save { id, file } => {
            let store = Rc::new(SqliteStore::open(&args.database)?);
            let reading_speed = ReadingSpeed::with_estimator(store.clone(), estimator);

            let mut registry = HookRegistry::new();
            reading_speed.init(|priority, hook| registry.add_save_hook(priority, hook));

            let item = ContentItem::new(*id, files::read_body(file)?);
            registry.dispatch_save(*id, &item)?;

            println!("{}", store.get(*id, META_KEY)?.unwrap_or_default());
            Ok(())
        }
        Command::Get { id, file } => {
            let store = SqliteStore::open(&args.database)?;
            let reading_speed = ReadingSpeed::with_estimator(store, estimator);

            let item = ContentItem::new(*id, files::read_body(file)?);
            println!("{}", reading_speed.get_or_compute(&item)?);
            Ok(())
        }
    }
}

fn estimate(estimator: &Estimator, paths: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let mut reports = Vec::new();
    for path in files::collect_files_for_processing(paths)? {
        let body = files::read_body(&path)?;
        reports.push(Report {
            path: path.display().to_string(),
            words: estimator.word_count(&body),
            minutes: estimator.estimate(&body),
        });
    }

    tracing::info!("Estimated {} files.", reports.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!("{}\t{}\t{}", report.path, report.words, report.minutes);
    }

    Ok(())
}
