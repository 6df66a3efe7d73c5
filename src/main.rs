//! # Account Selector CLI Entry Point
//!
//! Runs the account selector in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in demo accounts
//! account-selector
//!
//! # Accounts from a JSON file
//! account-selector --accounts ./accounts.json
//!
//! # Print the derived view and exit
//! account-selector --accounts ./accounts.json --dump
//! ```
//!
//! ## Key Bindings
//!
//! ### Collapsed
//! - `Enter` / `Space` - Open the account list
//! - `t` - Next theme (saved to the config file)
//! - `i` - Show/hide info modal
//! - `q` - Quit
//!
//! ### Open list
//! - `j` / `Down`, `k` / `Up` - Move the cursor
//! - `Space` - Toggle the account under the cursor
//! - `Enter` - Show only the account under the cursor (again: all accounts)
//! - `m` - Add or manage connections
//! - `Esc` - Close the list
//!
//! The mouse works too: click the header to open or close, an icon to
//! toggle, a row to select.
//!
//! ## Logging
//!
//! Logs go to a daily file under the platform data directory, never to the
//! terminal. Set `RUST_LOG` to change the filter.

use account_selector::account::{self, Account};
use account_selector::selector::AccountSelector;
use account_selector::ui::{self, config::Config, theme::Theme, App};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Account selector - view and toggle financial accounts and their balances
#[derive(Parser, Debug)]
#[command(name = "account-selector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "View and toggle financial accounts and their balances", long_about = None)]
struct Args {
    /// JSON file with the account list (defaults to built-in demo accounts)
    #[arg(short, long, value_name = "FILE")]
    accounts: Option<PathBuf>,

    /// Theme for this session, without saving it
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the selector view and exit
    #[arg(long)]
    dump: bool,
}

/// Initialize file logging. The returned guard must live until exit.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = ui::config::project_dirs()
        .ok()?
        .data_local_dir()
        .join("logs");
    std::fs::create_dir_all(&logs_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "account-selector.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,account_selector=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    if let Err(ref e) = result {
        tracing::error!("exiting with error: {:#}", e);
    }
    result
}

fn load_account_list(path: Option<&PathBuf>) -> Result<Vec<Account>> {
    match path {
        Some(path) => account::load_accounts(path),
        None => Ok(account::demo_accounts()),
    }
}

/// Pick the session theme: `--theme` wins, then the config file, then the default.
fn resolve_theme(requested: Option<&str>, config: &Config) -> Result<Theme> {
    if let Some(name) = requested {
        return match Theme::by_name(name) {
            Some(theme) => Ok(theme.clone()),
            None => bail!("Unknown theme '{}'. Available: {}", name, Theme::names()),
        };
    }

    match Theme::by_name(&config.theme) {
        Some(theme) => Ok(theme.clone()),
        None => {
            warn!(theme = %config.theme, "unknown theme in config, using default");
            Ok(Theme::default_theme().clone())
        }
    }
}

async fn run_application(args: Args) -> Result<()> {
    let accounts = load_account_list(args.accounts.as_ref())?;
    info!(count = accounts.len(), "starting account selector");

    if args.dump {
        print!("{}", AccountSelector::new(accounts).view());
        return Ok(());
    }

    let mut config = Config::load();
    let theme = resolve_theme(args.theme.as_deref(), &config)?;
    let persist_theme = args.theme.is_none();

    let selector = AccountSelector::with_observer(accounts, |selected| {
        let ids: Vec<&str> = selected.iter().map(|a| a.id.as_str()).collect();
        info!(?ids, "selected accounts");
    });
    let mut app = App::new(selector, theme);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &mut event_reader,
        persist_theme.then_some(&mut config),
    )
    .await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    mut config: Option<&mut Config>,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = match event_reader.read_event(Duration::from_millis(250))? {
            Some(e) => e,
            None => continue,
        };

        let theme_before = app.theme.name;

        match event {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }

        if app.theme.name != theme_before {
            if let Some(config) = config.as_deref_mut() {
                config.theme = app.theme.name.to_string();
                if let Err(e) = config.save() {
                    warn!("failed to save config: {:#}", e);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_mock_event_reader() {
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Enter),
            key_event(KeyCode::Char('q')),
        ]);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_load_account_list_defaults_to_demo() {
        let accounts = load_account_list(None).unwrap();
        assert_eq!(accounts, account::demo_accounts());
    }

    #[tokio::test]
    async fn test_run_application_missing_accounts_file() {
        let args = Args {
            accounts: Some(PathBuf::from("/nonexistent/accounts.json")),
            theme: None,
            dump: true,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read accounts file"));
    }

    #[tokio::test]
    async fn test_run_application_dump_succeeds() {
        let args = Args {
            accounts: None,
            theme: None,
            dump: true,
        };

        assert!(run_application(args).await.is_ok());
    }

    #[test]
    fn test_resolve_theme_prefers_argument() {
        let config = Config {
            theme: "Nord".to_string(),
        };
        let theme = resolve_theme(Some("dracula"), &config).unwrap();
        assert_eq!(theme.name, "Dracula");
    }

    #[test]
    fn test_resolve_theme_from_config() {
        let config = Config {
            theme: "Nord".to_string(),
        };
        assert_eq!(resolve_theme(None, &config).unwrap().name, "Nord");
    }

    #[test]
    fn test_resolve_theme_unknown_argument_errors() {
        let err = resolve_theme(Some("neon"), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown theme 'neon'"));
    }

    #[test]
    fn test_resolve_theme_unknown_config_falls_back() {
        let config = Config {
            theme: "Missing".to_string(),
        };
        assert_eq!(
            resolve_theme(None, &config).unwrap().name,
            Theme::default_theme().name
        );
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["account-selector", "-a", "accounts.json", "--dump"]);
        assert_eq!(args.accounts, Some(PathBuf::from("accounts.json")));
        assert!(args.dump);
        assert!(args.theme.is_none());
    }
}
