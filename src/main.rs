mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::TaskList;
use logging::LogTarget;
use persistence::error::StoreError;
use persistence::{
    ensure_dir, init_local_dir, load_config, load_state, resolve_data_dir, save_state, AppConfig,
    FileStore, KeyValueStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "focus-clock")]
#[command(about = "A floating terminal focus timer with a task list and daily stats", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .focus-clock, then ~/.focus-clock
    #[arg(long, global = true, env = "FOCUS_CLOCK_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .focus-clock directory in the current directory
    Init,
    #[command(flatten)]
    Data(DataCommand),
}

/// Subcommands that work on an existing data directory
#[derive(Subcommand)]
enum DataCommand {
    /// Add a task to the list
    Add {
        /// Task description
        text: String,
    },
    /// List tasks with their numbers
    List,
    /// Toggle completion of a task by its number from `list`
    Toggle {
        index: usize,
    },
    /// Print daily focus statistics
    Stats {
        /// Number of most recent active days to show. Defaults to the config value.
        #[arg(short, long)]
        days: Option<usize>,
    },
    /// Generate a markdown focus report
    Report {
        /// Number of most recent active days to include. Defaults to the config value.
        #[arg(short, long)]
        days: Option<usize>,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(Commands::Init) => return run_init(cli.log_level),
        Some(Commands::Data(command)) => Some(command),
        None => None,
    };

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    ensure_dir(&data_dir)?;

    // Reported after the subscriber exists
    let (config, config_error) = match load_config(&data_dir) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let level = logging::choose_level(
        cli.log_level,
        std::env::var_os("RUST_LOG").is_some(),
        config.log_level.clone(),
    );

    match command {
        None => {
            let log_path = data_dir.join(logging::LOG_FILE_NAME);
            logging::setup_logging(level.as_deref(), LogTarget::File(&log_path))?;
            warn_config_fallback(&data_dir, config_error.as_ref());
            run_tui(&data_dir, config)
        }
        Some(command) => {
            logging::setup_logging(level.as_deref(), LogTarget::Stderr)?;
            warn_config_fallback(&data_dir, config_error.as_ref());
            run_command(command, &data_dir, &config)
        }
    }
}

fn warn_config_fallback(data_dir: &Path, error: Option<&StoreError>) {
    if let Some(e) = error {
        let path = data_dir.join(persistence::config::CONFIG_FILE_NAME);
        warn!(path = %path.display(), error = %e, "invalid config, using defaults");
    }
}

fn run_init(log_level: Option<String>) -> Result<()> {
    logging::setup_logging(log_level.as_deref(), LogTarget::Stderr)?;

    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let dir = init_local_dir(&current_dir)?;
    println!("Initialized focus-clock directory: {}", dir.display());
    println!();
    println!("focus-clock will now use this local directory for tasks and sessions.");
    println!("Run 'focus-clock' to start a focus session.");
    Ok(())
}

fn run_command(command: DataCommand, data_dir: &Path, config: &AppConfig) -> Result<()> {
    let mut store = FileStore::new(data_dir);

    match command {
        DataCommand::Add { text } => println!("{}", add_task(&mut store, &text)?),
        DataCommand::List => {
            let tasks = TaskList::new(load_state(&store).tasks);
            if tasks.is_empty() {
                println!("No tasks yet. Add one with 'focus-clock add <TEXT>'.");
                return Ok(());
            }
            for (i, task) in tasks.tasks().iter().enumerate() {
                let mark = if task.completed { "✓" } else { "○" };
                println!("{:>3}. {} {}", i + 1, mark, task.text);
            }
            println!();
            println!("{} of {} completed", tasks.completed_count(), tasks.len());
        }
        DataCommand::Toggle { index } => println!("{}", toggle_task(&mut store, index)?),
        DataCommand::Stats { days } => {
            let sessions = load_state(&store).sessions;
            let days = days.unwrap_or(config.stats_days);
            let stats = report::compute_daily_stats(&sessions);
            let window = report::last_days(&stats, days);
            if window.is_empty() {
                println!("No focus sessions recorded.");
                return Ok(());
            }
            println!("{:<12} {:>7} {:>10} {:>11}", "Date", "Hours", "Completed", "Efficiency");
            for day in window {
                println!(
                    "{:<12} {:>7.1} {:>10} {:>11.2}",
                    day.date, day.total_hours, day.completed_tasks, day.efficiency
                );
            }
            let minutes: u32 = window.iter().map(|d| d.total_minutes).sum();
            println!();
            println!("Total focus: {}", report::format_minutes(minutes));
        }
        DataCommand::Report { days, output } => {
            let sessions = load_state(&store).sessions;
            let days = days.unwrap_or(config.stats_days);
            let today = chrono::Local::now().date_naive();
            let content = report::render_report(&sessions, days, today);
            let path = output.unwrap_or_else(|| {
                store
                    .dir()
                    .join(format!("report-{}.md", today.format("%Y-%m-%d")))
            });
            persistence::files::atomic_write(&path, &content)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report generated");
            println!("Report generated: {}", path.display());
        }
    }

    Ok(())
}

/// Append a task and save. Returns the message to print.
fn add_task(store: &mut dyn KeyValueStore, text: &str) -> Result<String> {
    let state = load_state(store);
    let mut tasks = TaskList::new(state.tasks);

    if !tasks.add_task(text) {
        return Ok("Nothing to add: task text is empty.".to_string());
    }
    save_state(store, tasks.tasks(), &state.sessions).context("Failed to save tasks")?;
    info!(count = tasks.len(), "task added");
    Ok(format!("Added task {}: {}", tasks.len(), text))
}

/// Toggle a task by its 1-based number from `list` and save.
/// Returns the message to print.
fn toggle_task(store: &mut dyn KeyValueStore, index: usize) -> Result<String> {
    let state = load_state(store);
    let mut tasks = TaskList::new(state.tasks);

    let Some(i) = index.checked_sub(1).filter(|&i| i < tasks.len()) else {
        anyhow::bail!("No task number {} (have {})", index, tasks.len());
    };
    tasks.toggle_task(i);
    save_state(store, tasks.tasks(), &state.sessions).context("Failed to save tasks")?;

    let task = &tasks.tasks()[i];
    let status = if task.completed { "completed" } else { "open" };
    Ok(format!("Task {} is now {}: {}", index, status, task.text))
}

fn run_tui(data_dir: &Path, config: AppConfig) -> Result<()> {
    info!(dir = %data_dir.display(), "starting focus-clock");

    let mut store = FileStore::new(data_dir);
    let mut app = AppState::new(load_state(&store), config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Save on exit, only if something changed
    if let Err(e) = app.save_if_dirty(&mut store) {
        eprintln!("Error saving state: {:#}", e);
    }

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    store: &mut FileStore,
) -> Result<()> {
    let poll_rate = ticker::poll_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key, Instant::now())? {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        app.tick(Instant::now());

        // Autosave; a failed write is retried after the next change
        if let Err(e) = app.save_if_dirty(store) {
            warn!("failed to save state: {:#}", e);
            app.needs_save = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::error::Result as StoreResult;
    use persistence::MemoryStore;
    use std::sync::{Arc, Mutex};

    /// Store that reads like `MemoryStore` but refuses every write
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    fn store_with_task(text: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        add_task(&mut store, text).unwrap();
        store
    }

    #[test]
    fn test_cli_routes_init_apart_from_data_commands() {
        let cli = Cli::try_parse_from(["focus-clock", "init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init)));

        let cli = Cli::try_parse_from(["focus-clock", "toggle", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Data(DataCommand::Toggle { index: 2 }))
        ));

        let cli = Cli::try_parse_from(["focus-clock"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_task_command() {
        let mut store = MemoryStore::new();
        assert_eq!(add_task(&mut store, "Write report").unwrap(), "Added task 1: Write report");
        assert_eq!(
            add_task(&mut store, "   ").unwrap(),
            "Nothing to add: task text is empty."
        );
        assert_eq!(load_state(&store).tasks.len(), 1);
    }

    #[test]
    fn test_toggle_task_command_uses_list_numbers() {
        let mut store = store_with_task("Write report");

        let message = toggle_task(&mut store, 1).unwrap();
        assert_eq!(message, "Task 1 is now completed: Write report");
        assert!(load_state(&store).tasks[0].completed);

        assert!(toggle_task(&mut store, 0).is_err());
        assert!(toggle_task(&mut store, 2).is_err());
    }

    #[test]
    fn test_toggle_task_command_reports_failed_save() {
        let mut store = ReadOnlyStore(store_with_task("Write report"));

        // No success message when the write fails
        assert!(toggle_task(&mut store, 1).is_err());
        assert!(!load_state(&store).tasks[0].completed);
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_corrupt_config_warning_reaches_subscriber() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(persistence::config::CONFIG_FILE_NAME),
            "{broken",
        )
        .unwrap();

        // Loaded before logging starts, as in main
        let error = load_config(temp_dir.path()).err();
        assert!(error.is_some());

        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            warn_config_fallback(temp_dir.path(), error.as_ref());
        });

        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("invalid config, using defaults"));
        assert!(output.contains("config.json"));
    }
}
