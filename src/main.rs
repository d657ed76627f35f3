mod app;
mod config;
mod confetti;
mod notify;
mod theme;
mod ui;
mod verdict;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::AppConfig;
use theme::Theme;
use verdict::Assessment;

/// How long to wait for input when nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "golfcheck")]
#[command(version)]
#[command(about = "Find out if you're good at golf")]
struct Args {
    /// Check a name and print the result instead of starting the TUI
    #[arg(short, long)]
    name: Option<String>,

    /// With --name, print the result as JSON
    #[arg(short, long, requires = "name")]
    json: bool,

    /// Skip the confetti
    #[arg(long)]
    no_confetti: bool,

    /// Use this config file instead of the default
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Where log lines go. The TUI owns the terminal, so it logs to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

fn log_target(args: &Args) -> LogTarget {
    if args.name.is_some() {
        return LogTarget::Stderr;
    }

    match dirs::cache_dir() {
        Some(dir) => LogTarget::File(dir.join("golfcheck").join("golfcheck.log")),
        None => LogTarget::Off,
    }
}

fn open_log(path: &Path) -> io::Result<std::fs::File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::OpenOptions::new().create(true).append(true).open(path)
}

fn init_logging(target: LogTarget) {
    let filter = tracing_subscriber::EnvFilter::from_default_env();

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init(),
        LogTarget::File(path) => match open_log(&path) {
            Ok(file) => tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter)
                .init(),
            // Never fall back to stderr here, it would draw over the TUI
            Err(_) => tracing_subscriber::registry().with(filter).init(),
        },
        LogTarget::Off => tracing_subscriber::registry().with(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(log_target(&args));

    // Handle CLI-only commands
    if let Some(name) = args.name.as_deref() {
        return print_verdict(name, args.json);
    }

    let mut config = match args.config.as_deref() {
        Some(path) => AppConfig::load_or_init(path),
        None => AppConfig::load(),
    };
    if args.no_confetti {
        config.confetti = false;
    }

    // Run TUI
    run_tui(config).await
}

fn print_verdict(name: &str, json: bool) -> Result<()> {
    println!("{}", render_verdict(name, json)?);
    Ok(())
}

/// One-shot output for `--name`
fn render_verdict(name: &str, json: bool) -> Result<String> {
    let Some(assessment) = Assessment::of(name) else {
        anyhow::bail!("Name must not be blank");
    };

    if json {
        return Ok(serde_json::to_string(&assessment)?);
    }

    let message = assessment.message();
    Ok(format!(
        "{}  {}\n{}\n{}",
        message.icon, message.headline, message.line, message.subline
    ))
}

async fn run_tui(config: AppConfig) -> Result<()> {
    ui::init_theme(Theme::load(&config.theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config, theme::confetti_palette());

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Redraw at frame rate while confetti is flying
        let timeout = if app.is_animating() {
            app.config.frame_interval()
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }

        app.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_an_error() {
        assert!(render_verdict("   ", false).is_err());
        assert!(render_verdict("", true).is_err());
    }

    #[test]
    fn test_text_output() {
        let out = render_verdict("Sam", false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "⛳  NOT QUITE...",
                "Sam, golf might not be your calling",
                "But hey, there's always mini golf!",
            ]
        );
    }

    #[test]
    fn test_json_output() {
        let out = render_verdict("Charlie", true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["name"], "Charlie");
        assert_eq!(json["verdict"], "yes");
        assert_eq!(json["variant"], "celebratory");
    }

    #[test]
    fn test_tui_never_logs_to_stderr() {
        let one_shot = Args::parse_from(["golfcheck", "--name", "Sam"]);
        assert_eq!(log_target(&one_shot), LogTarget::Stderr);

        let tui = Args::parse_from(["golfcheck"]);
        assert_ne!(log_target(&tui), LogTarget::Stderr);
    }

    #[test]
    fn test_json_requires_name() {
        assert!(Args::try_parse_from(["golfcheck", "--json"]).is_err());
    }
}
