use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use socialhub_core::{Action, Screen, Tab, ViewController};
use tracing::info;

mod logging;
mod settings;
mod text;

use logging::init_logging;
use settings::{OutputFormat, Settings};

#[derive(Debug, Parser)]
#[command(name = "socialhub-cli", version, about = "Превью экранов SocialHub в терминале")]
struct Cli {
    /// Формат вывода (по умолчанию из SOCIALHUB_FORMAT или text).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Показать вкладку после переключения лайков.
    Show {
        /// Вкладка: feed, friends, create, notifications, profile.
        #[arg(long)]
        tab: Option<Tab>,
        /// Переключить лайк поста (можно несколько раз, применяется по порядку).
        #[arg(long = "like", value_name = "ID")]
        likes: Vec<i64>,
    },
    /// Применить последовательность действий и показать итоговый экран.
    ///
    /// Действия: `tab=<slug>` или `like=<id>`.
    Replay {
        #[arg(required = true, value_name = "ACTION")]
        actions: Vec<Action>,
    },
    /// Список вкладок.
    Tabs,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::from_env().context("некорректная конфигурация")?;
    init_logging(&settings.log_level)?;

    let format = cli.format.unwrap_or(settings.format);

    match cli.command {
        Command::Show { tab, likes } => {
            let controller = preview(tab.unwrap_or(settings.default_tab), &likes);
            print_screen(&controller.render(), format)?;
        }
        Command::Replay { actions } => {
            let controller = replay(&actions);
            print_screen(&controller.render(), format)?;
        }
        Command::Tabs => {
            println!("{}", text::render_tabs(ViewController::new().active_tab()));
        }
    }

    Ok(())
}

fn preview(tab: Tab, likes: &[i64]) -> ViewController {
    let mut controller = ViewController::new();
    for &post_id in likes {
        controller.toggle_like(post_id);
    }
    controller.select_tab(tab);
    controller
}

fn replay(actions: &[Action]) -> ViewController {
    let mut controller = ViewController::new();
    for &action in actions {
        controller.dispatch(action);
    }
    info!(
        actions = actions.len(),
        tab = %controller.active_tab(),
        "replay finished"
    );
    controller
}

fn print_screen(screen: &Screen, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text::render_screen(screen)),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(screen).context("не удалось сериализовать экран")?;
            println!("{json}");
        }
    }
    Ok(())
}
