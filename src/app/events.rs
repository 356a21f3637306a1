use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

use crate::domain::display::DisplayState;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickRefresh,
    Input(Event),
    RefreshStarted,
    RefreshFinished(DisplayState),
    Quit,
}

pub fn input_stream() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Recurring refresh trigger with an explicit lifecycle: started once at
/// bootstrap, aborted on shutdown. One ticker task exists at a time, so the
/// next refresh is always scheduled exactly once.
#[derive(Debug)]
pub struct RefreshTimer {
    handle: JoinHandle<()>,
}

impl RefreshTimer {
    pub fn start(tx: mpsc::Sender<AppEvent>, interval_secs: u64) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(interval_secs.max(10)));
            // The interval's first tick fires immediately; bootstrap already
            // triggers the first refresh, so it is consumed here.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::TickRefresh).await.is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_interval_and_not_before() {
        let (tx, mut rx) = mpsc::channel(8);
        let timer = RefreshTimer::start(tx, 60);
        settle().await;

        tokio::time::advance(Duration::from_secs(30)).await;
        settle().await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_secs(31)).await;
        settle().await;
        assert!(matches!(rx.try_recv(), Ok(AppEvent::TickRefresh)));
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;
        assert!(matches!(rx.try_recv(), Ok(AppEvent::TickRefresh)));

        timer.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_timer_never_ticks_again() {
        let (tx, mut rx) = mpsc::channel(8);
        let timer = RefreshTimer::start(tx, 60);
        settle().await;

        timer.stop();
        settle().await;

        tokio::time::advance(Duration::from_secs(600)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }
}
