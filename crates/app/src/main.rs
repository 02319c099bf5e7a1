mod logging;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ConfigError, ContentClient, HttpContentClient, StudyBotConfig};
use tracing::info;
use ui::context::build_app_context;
use ui::{App, UiApp};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_number(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<u64, ArgsError> {
    let raw = require_value(args, flag)?;
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    client: Arc<HttpContentClient>,
    feedback_window: Duration,
}

impl UiApp for DesktopApp {
    fn content_client(&self) -> Arc<dyn ContentClient> {
        self.client.clone()
    }

    fn feedback_window(&self) -> Duration {
        self.feedback_window
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api <url>] [--timeout <secs>] [--feedback-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api http://localhost:3000/api");
    eprintln!("  --timeout 60");
    eprintln!("  --feedback-ms 1200");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDYBOT_API_BASE_URL, STUDYBOT_TIMEOUT_SECS, STUDYBOT_FEEDBACK_MS");
    eprintln!("  STUDYBOT_LOG (falls back to RUST_LOG)");
}

#[derive(Debug)]
enum Command {
    Launch(StudyBotConfig),
    Help,
}

/// Apply command-line overrides on top of `config`.
fn parse_args(
    args: &mut impl Iterator<Item = String>,
    mut config: StudyBotConfig,
) -> Result<Command, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api" => {
                let value = require_value(args, "--api")?;
                config = config.with_api_base(&value)?;
            }
            "--timeout" => {
                let secs = require_number(args, "--timeout")?;
                config = config.with_timeout_secs(secs)?;
            }
            "--feedback-ms" => {
                let millis = require_number(args, "--feedback-ms")?;
                config = config.with_feedback_ms(millis)?;
            }
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Command::Launch(config))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StudyBotConfig::from_env()?;
    let mut argv = std::env::args().skip(1);
    let config = match parse_args(&mut argv, config).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Launch(config) => config,
    };

    logging::init_logging();
    info!(
        api = %config.api_base(),
        timeout_secs = config.request_timeout().as_secs(),
        feedback_ms = config.feedback_window().as_millis(),
        "starting StudyBot"
    );

    let feedback_window = config.feedback_window();
    let app = DesktopApp {
        client: Arc::new(HttpContentClient::new(config)?),
        feedback_window,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("StudyBot")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        parse_args(&mut iter, StudyBotConfig::default())
    }

    #[test]
    fn no_args_keeps_config() {
        let Command::Launch(config) = parse(&[]).unwrap() else {
            panic!("expected launch");
        };
        assert_eq!(config, StudyBotConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let Command::Launch(config) = parse(&[
            "--api",
            "https://example.com/v1",
            "--timeout",
            "15",
            "--feedback-ms",
            "400",
        ])
        .unwrap() else {
            panic!("expected launch");
        };
        assert_eq!(config.endpoint("quiz"), "https://example.com/v1/quiz");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.feedback_window(), Duration::from_millis(400));
    }

    #[test]
    fn bad_args_are_reported() {
        assert!(matches!(
            parse(&["--api"]),
            Err(ArgsError::MissingValue { flag: "--api" })
        ));
        assert!(matches!(
            parse(&["--timeout", "soon"]),
            Err(ArgsError::InvalidNumber { flag: "--timeout", .. })
        ));
        assert!(matches!(
            parse(&["--feedback-ms", "0"]),
            Err(ArgsError::Config(ConfigError::Zero(_)))
        ));
        assert!(matches!(parse(&["--db"]), Err(ArgsError::UnknownArg(_))));
        assert!(matches!(parse(&["-h"]), Ok(Command::Help)));
    }
}
