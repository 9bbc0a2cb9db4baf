use clap::{Parser, Subcommand};
use sast_core::navigation::NavigationOutcome;
use sast_core::pages::{FriendPage, Page, PageId};
use sast_core::shell::{Chrome, Palette, Shell, TitleBar};
use sast_core::theme::ThemeChoice;
use sast_core::types::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Filter directive variable; falls back to `info`.
const LOG_ENV: &str = "SAST_LOG";

#[derive(Parser)]
#[command(name = "sast", version, about = "Theme and page navigation shell")]
struct Cli {
    /// Per-user data root holding `SastCSharpTest/settings.json`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory holding bundled resources such as `res/data.json`.
    #[arg(long, global = true)]
    app_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the stored theme and the resolved appearance.
    Show,
    /// Select a theme: light, dark, system or acrylic.
    Theme { choice: ThemeChoice },
    /// Switch between light and dark.
    Toggle,
    /// List the friend directory.
    Friends,
    /// Visit pages in order. `back` returns to the previous page.
    Visit {
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

/// Logs what a real window would draw.
struct LoggingChrome;

impl Chrome for LoggingChrome {
    fn apply_palette(&mut self, palette: &Palette) {
        debug!(
            background = %palette.window_background,
            foreground = %palette.window_foreground,
            acrylic = palette.acrylic,
            "palette"
        );
    }

    fn apply_title_bar(&mut self, title_bar: &TitleBar) {
        debug!(
            inset = title_bar.left_inset(),
            color = %title_bar.title_color(),
            "title bar"
        );
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::resolve(cli.data_dir, cli.app_dir) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "cannot resolve directories");
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {
            let shell = Shell::start(config, LoggingChrome);
            print_appearance(&shell);
            ExitCode::SUCCESS
        }
        Command::Theme { choice } => {
            let mut shell = Shell::start(config, LoggingChrome);
            let saved = shell.select_theme(choice).is_saved();
            print_appearance(&shell);
            exit_code(saved)
        }
        Command::Toggle => {
            let mut shell = Shell::start(config, LoggingChrome);
            let saved = shell.toggle_theme().is_saved();
            print_appearance(&shell);
            exit_code(saved)
        }
        Command::Friends => list_friends(&config),
        Command::Visit { steps } => visit(config, &steps),
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_appearance(shell: &Shell<LoggingChrome>) {
    let theme = shell.theme();
    let palette = shell.palette();
    println!("theme:      {}", theme.choice().label());
    println!("variant:    {}", theme.effective_theme());
    println!("dark:       {}", palette.dark);
    println!("background: {}", palette.window_background);
    println!("settings:   {}", theme.settings_path().display());
}

fn list_friends(config: &Config) -> ExitCode {
    let page = match FriendPage::load(config) {
        Ok(page) => page,
        Err(e) => {
            error!(path = %config.friends_path().display(), error = %e, "cannot load friends");
            return ExitCode::FAILURE;
        }
    };
    for friend in page.friends() {
        println!("{}: {}", friend.name, friend.description);
    }
    ExitCode::SUCCESS
}

fn visit(config: Config, steps: &[String]) -> ExitCode {
    let mut shell = Shell::start(config, LoggingChrome);
    let mut failed = false;

    for step in steps {
        let outcome = if step == "back" {
            shell.back()
        } else {
            match step.parse::<PageId>() {
                Ok(id) => shell.navigate(id),
                Err(e) => {
                    warn!(error = %e, "skipping step");
                    failed = true;
                    continue;
                }
            }
        };

        match outcome {
            NavigationOutcome::Navigated => {}
            NavigationOutcome::Skipped(reason) => {
                info!(step = step.as_str(), ?reason, "nothing to do")
            }
            NavigationOutcome::Failed(e) => {
                error!(step = step.as_str(), error = %e, "navigation failed");
                failed = true;
            }
        }
        println!("{}", describe(&shell));
    }

    exit_code(!failed)
}

fn describe(shell: &Shell<LoggingChrome>) -> String {
    let depth = shell.navigator().history_len();
    match shell.current_page() {
        Some(Page::Friend(page)) => format!(
            "friend ({}) [history {depth}]",
            page.selected().map_or("nobody", |friend| friend.name.as_str())
        ),
        Some(page) => format!("{} [history {depth}]", page.id()),
        None => format!("(empty) [history {depth}]"),
    }
}
