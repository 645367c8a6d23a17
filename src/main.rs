use chrono::{Local, NaiveDate};
use clap::Parser;
use discipline::application::{init::init, ConfigService, Tracker};
use discipline::cli::{format_habit_list, format_week_grid, prompt, Cli, Commands, ExportFormat};
use discipline::domain::{iso_date, TimeReference, UuidIds};
use discipline::error::DisciplineError;
use discipline::infrastructure::logging::{init_logging, level_for_verbosity};
use discipline::infrastructure::{
    Config, DirectorySink, ExportSink, FileSystemRepository, TrackerRepository,
};
use std::fs;

fn main() {
    let cli = Cli::parse();

    let logger = match init_logging(level_for_verbosity(cli.verbose)) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    let code = match run(cli) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            e.exit_code()
        }
    };

    drop(logger);
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<(), DisciplineError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized discipline tracker at {}", path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("export_dir = {}", config.export_dir.display());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: discipline config [--list | <key> [<value>]]");
                println!("Valid keys: export_dir, created");
                Ok(())
            }
        }
        Some(Commands::Show { week }) => {
            let session = Session::open()?;
            let week = week.resolve(session.today)?;
            let totals = session.tracker.totals(&week);
            print!("{}", format_week_grid(session.tracker.state(), &week, &totals));
            Ok(())
        }
        Some(Commands::List) => {
            let session = Session::open()?;
            println!("{}", format_habit_list(session.tracker.habits()).trim_end());
            Ok(())
        }
        Some(Commands::Add { name }) => {
            let mut session = Session::open()?;
            // blank names are skipped without complaint
            if let Some(habit) = session.tracker.add_habit(&name.join(" ")) {
                println!("Added '{}' ({})", habit.name, habit.id);
            }
            Ok(())
        }
        Some(Commands::Rename { habit, name }) => {
            let mut session = Session::open()?;
            let id = session.tracker.resolve_habit(&habit)?.id.clone();
            if let Some(renamed) = session.tracker.rename_habit(&id, &name.join(" "))? {
                println!("Renamed to '{}'", renamed.name);
            }
            Ok(())
        }
        Some(Commands::Remove { habit, yes }) => {
            let mut session = Session::open()?;
            let target = session.tracker.resolve_habit(&habit)?.clone();
            if !yes && !prompt::confirm(&format!("Delete '{}'?", target.name))? {
                println!("Cancelled");
                return Ok(());
            }
            session.tracker.remove_habit(&target.id);
            println!("Removed '{}'", target.name);
            Ok(())
        }
        Some(Commands::Toggle { habit, day }) => {
            let mut session = Session::open()?;
            let date = TimeReference::parse(&day)?.resolve(session.today);
            let target = session.tracker.resolve_habit(&habit)?.clone();
            let checked = session.tracker.toggle(&target.id, date);
            println!(
                "{} '{}' on {}",
                if checked { "Checked" } else { "Unchecked" },
                target.name,
                iso_date(date)
            );
            Ok(())
        }
        Some(Commands::Export {
            format,
            week,
            output,
        }) => {
            let session = Session::open()?;
            let export = match format {
                ExportFormat::Csv => session.tracker.export_csv(&week.resolve(session.today)?),
                ExportFormat::Json => session.tracker.export_json()?,
            };
            let dir = output.unwrap_or_else(|| session.config.export_path(session.repo.root()));
            let path = DirectorySink::new(dir).deliver(&export)?;
            println!("Exported {}", path.display());
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let mut session = Session::open()?;
            let bytes = fs::read(&file)?;
            session.tracker.import_json(bytes)?;
            println!(
                "Imported {} habits from {}",
                session.tracker.habits().len(),
                file.display()
            );
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            let mut session = Session::open()?;
            if !yes && !prompt::confirm("Clear all data? This cannot be undone.")? {
                println!("Cancelled");
                return Ok(());
            }
            session.tracker.clear();
            println!("Cleared all data");
            Ok(())
        }
        None => {
            println!("discipline - Weekly habit tracking grid");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Discovered tracker root with its config and loaded state
struct Session {
    repo: FileSystemRepository,
    config: Config,
    tracker: Tracker<FileSystemRepository>,
    today: NaiveDate,
}

impl Session {
    fn open() -> Result<Self, DisciplineError> {
        let repo = FileSystemRepository::discover()?;
        let config = repo.load_config()?;
        let tracker = Tracker::open(repo.clone(), Box::new(UuidIds));

        Ok(Session {
            repo,
            config,
            tracker,
            today: Local::now().date_naive(),
        })
    }
}
