pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod resilience;
pub mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use app::events::{AppEvent, RefreshTimer, input_stream};
use app::refresh::Refresher;
use app::state::AppState;
use cli::Cli;
use config::Config;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let config = Config::from_env().context("failed to load configuration")?;
    let refresher = Arc::new(Refresher::new(&config, &cli));

    if cli.one_shot {
        let snapshot = refresher.run_cycle(cli.postal_code.as_deref()).await;
        println!("{}", snapshot.render_plain());
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &cli, refresher).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    cli: &Cli,
    refresher: Arc<Refresher>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);
    let input = input_stream();
    tokio::pin!(input);

    let mut app = AppState::new(cli, refresher);
    let timer = RefreshTimer::start(tx.clone(), cli.refresh_interval);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input.next() => {
                if let Some(event) = maybe_input {
                    app.handle_event(AppEvent::Input(event), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;
    }

    timer.stop();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
