use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::app::events::AppEvent;
use crate::app::refresh::Refresher;
use crate::cli::Cli;
use crate::domain::display::{DisplayState, DisplayStatus};
use crate::resilience::freshness::{FreshnessState, evaluate_freshness};

/// Postal-code entry line.
#[derive(Debug, Clone, Default)]
pub struct PostalEntry {
    pub editing: bool,
    pub buffer: String,
    /// Last committed code; used by every subsequent refresh.
    pub committed: Option<String>,
}

/// When refreshes last ran and how they went. Never influences control flow,
/// only the freshness badge.
#[derive(Debug, Clone, Default)]
pub struct RefreshMetadata {
    pub last_attempt: Option<DateTime<Utc>>,
    pub last_success: Option<DateTime<Utc>>,
    pub consecutive_failures: u32,
}

impl RefreshMetadata {
    pub fn mark_success(&mut self) {
        let now = Utc::now();
        self.last_attempt = Some(now);
        self.last_success = Some(now);
        self.consecutive_failures = 0;
    }

    pub fn mark_failure(&mut self) {
        self.last_attempt = Some(Utc::now());
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    #[must_use]
    pub fn freshness(&self) -> FreshnessState {
        evaluate_freshness(self.last_success, self.consecutive_failures)
    }
}

pub struct AppState {
    pub running: bool,
    /// A cycle is in flight; further triggers are dropped until it finishes.
    pub refreshing: bool,
    pub display: DisplayState,
    pub postal: PostalEntry,
    pub refresh_meta: RefreshMetadata,
    refresher: Arc<Refresher>,
}

impl AppState {
    pub fn new(cli: &Cli, refresher: Arc<Refresher>) -> Self {
        Self {
            running: true,
            refreshing: false,
            display: DisplayState::loading(),
            postal: PostalEntry {
                editing: false,
                buffer: String::new(),
                committed: cli.postal_code.clone(),
            },
            refresh_meta: RefreshMetadata::default(),
            refresher,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap | AppEvent::TickRefresh => self.start_refresh(tx).await?,
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::RefreshStarted => {
                self.display = DisplayState::loading();
            }
            AppEvent::RefreshFinished(snapshot) => {
                self.refreshing = false;
                if snapshot.status == DisplayStatus::Failed {
                    self.refresh_meta.mark_failure();
                } else {
                    self.refresh_meta.mark_success();
                }
                self.display = snapshot;
            }
            AppEvent::Quit => self.running = false,
        }
        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if self.postal.editing {
            return self.handle_postal_key(key, tx).await;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => tx.send(AppEvent::Quit).await?,
            KeyCode::Char('r') => self.start_refresh(tx).await?,
            KeyCode::Char('p') => {
                self.postal.editing = true;
                self.postal.buffer = self.postal.committed.clone().unwrap_or_default();
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_postal_key(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.postal.editing = false;
                self.postal.buffer.clear();
            }
            KeyCode::Enter => {
                let entered = self.postal.buffer.trim().to_string();
                self.postal.committed = (!entered.is_empty()).then_some(entered);
                self.postal.editing = false;
                self.postal.buffer.clear();
                self.start_refresh(tx).await?;
            }
            KeyCode::Backspace => {
                self.postal.buffer.pop();
            }
            KeyCode::Char(ch) if is_postal_char(ch) => self.postal.buffer.push(ch),
            _ => {}
        }
        Ok(())
    }

    /// Kick off a refresh cycle unless one is already in flight.
    async fn start_refresh(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if self.refreshing {
            return Ok(());
        }
        self.refreshing = true;
        tx.send(AppEvent::RefreshStarted).await?;

        let refresher = Arc::clone(&self.refresher);
        let postal = self.postal.committed.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let snapshot = refresher.run_cycle(postal.as_deref()).await;
            let _ = tx2.send(AppEvent::RefreshFinished(snapshot)).await;
        });
        Ok(())
    }
}

fn is_postal_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == ' '
}
