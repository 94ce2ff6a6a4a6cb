mod commands;
mod terminal;

use std::io::Write;
use std::sync::Arc;

use symptom_view::{HttpBackend, UiEvent, ViewController};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::terminal::TerminalSurface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url = std::env::var("SYMPTOM_BACKEND_URL")
        .unwrap_or_else(|_| "http://localhost:5000".to_string());
    info!("Using symptom checker backend at {}", base_url);

    let backend = Arc::new(HttpBackend::new(base_url));
    let surface = Arc::new(TerminalSurface::new());
    let controller = ViewController::new(backend, surface);

    println!("Symptom checker console. Type 'help' for commands.");
    controller.start().await;

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match commands::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", commands::HELP),
            Ok(Command::Nothing) => {}
            Ok(command) => run(&controller, command).await,
            Err(message) => println!("{message}"),
        }
    }

    Ok(())
}

async fn run(controller: &ViewController, command: Command) {
    match command {
        Command::Analyze(query) => {
            controller.dispatch(UiEvent::AnalyzeClicked { query }).await;
        }
        Command::Temperature(value) => {
            controller.dispatch(UiEvent::TemperatureChanged(value)).await;
        }
        Command::TopK(value) => {
            controller.dispatch(UiEvent::TopKChanged(value)).await;
        }
        Command::Select(path) => match commands::load_file(&path) {
            Ok(file) => controller.dispatch(UiEvent::FileChosen(file)).await,
            Err(err) => println!("cannot read {}: {err}", path.display()),
        },
        Command::Drop(path) => match commands::load_file(&path) {
            Ok(file) => {
                controller.dispatch(UiEvent::DragOver).await;
                controller.dispatch(UiEvent::FileDropped(file)).await;
            }
            Err(err) => println!("cannot read {}: {err}", path.display()),
        },
        Command::Index => controller.dispatch(UiEvent::IndexClicked).await,
        Command::History => controller.dispatch(UiEvent::HistoryToggleClicked).await,
        Command::Open(index) => {
            controller
                .dispatch(UiEvent::HistoryRowClicked { index })
                .await;
        }
        Command::Clear => controller.dispatch(UiEvent::ClearHistoryClicked).await,
        Command::Close => controller.dispatch(UiEvent::SidebarCloseClicked).await,
        // Handled by the caller before dispatch.
        Command::Help | Command::Quit | Command::Nothing => {}
    }
}
