use clap::Parser;
use std::io;
use tasklist_cli::cli::{Action, Cli};
use tasklist_cli::input::read_description;
use tasklist_cli::render::{render_json, render_table};
use tasklist_core::config::Config;
use tasklist_core::error::AppError;
use tasklist_core::storage::json_store;
use tasklist_core::task_api;
use tasklist_core::task_list::TaskList;
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn resolve_config(cli: &Cli) -> Result<Config, AppError> {
    let overrides = cli.overrides()?;
    let config = Config::load().unwrap_or_else(|err| {
        warn!("ignoring configuration: {err}");
        Config::default()
    });
    Ok(config.with_overrides(&overrides))
}

fn print_tasks(list: &TaskList, cli: &Cli) -> Result<(), AppError> {
    if cli.json {
        println!("{}", render_json(list)?);
    } else {
        println!("{}", render_table(list)?);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(&cli)?;
    let path = json_store::store_path(config.store_path.as_deref());
    let action = cli.action();
    debug!(path = %path.display(), ?action, "dispatching");

    let list = match action {
        Action::Add => {
            let description = read_description(&mut io::stdin().lock(), &cli.words)?;
            task_api::add_task(&path, &description)?
        }
        Action::Delete(position) => task_api::delete_task(&path, position)?,
        Action::Complete(position) => {
            task_api::complete_task(&path, position, config.recomplete)?
        }
        Action::List => task_api::list_tasks(&path)?,
        Action::Invalid => {
            // A broken store still fails the invocation.
            task_api::list_tasks(&path)?;
            println!("Invalid command.");
            return Ok(());
        }
    };

    print_tasks(&list, &cli)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
