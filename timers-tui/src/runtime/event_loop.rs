use crate::api::TimerGateway;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use super::action_queue::channel;
use super::actions::{run_action, Dispatcher};
use super::refresh::RefreshScheduler;
use super::views::handle_view_key;

/// Redraw cadence while a timer is running, so the elapsed clock stays live.
const RUNNING_TICK: Duration = Duration::from_millis(50);
const IDLE_TICK: Duration = Duration::from_millis(250);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    gateway: Arc<dyn TimerGateway>,
    refresh_interval: Duration,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let dispatcher = Dispatcher::new(gateway, action_tx.clone());

    let mut scheduler = RefreshScheduler::new(refresh_interval, action_tx.clone());
    scheduler.start();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.refresh_in_flight.is_some() {
            app.throbber_state.calc_next();
        }

        let tick = tick_for(app);

        // crossterm polling blocks the thread, so yield it to spawned requests.
        let polled = tokio::task::block_in_place(|| event::poll(tick))?;
        if polled {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, &dispatcher);
        }

        if !app.running {
            break;
        }
    }

    scheduler.stop();
    // Let queued writes reach the server before the runtime shuts down.
    dispatcher.close().await;
    Ok(())
}

/// How long to wait for input before the next redraw.
fn tick_for(app: &App) -> Duration {
    if app.store.any_running() {
        RUNNING_TICK
    } else {
        IDLE_TICK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Command;
    use crate::types::{Timer, TimerId};

    #[test]
    fn tick_speeds_up_only_while_a_timer_runs() {
        let mut app = App::new();
        assert_eq!(tick_for(&app), IDLE_TICK);

        let ticket = app.begin_refresh();
        app.apply_refresh(
            ticket,
            vec![Timer {
                id: TimerId::new("a"),
                title: "t".to_string(),
                project: "p".to_string(),
                elapsed: 0,
                running_since: None,
            }],
            0,
        );
        assert_eq!(tick_for(&app), IDLE_TICK);

        app.execute(Command::Start(TimerId::new("a")), 10);
        assert_eq!(tick_for(&app), RUNNING_TICK);

        app.execute(Command::Stop(TimerId::new("a")), 20);
        assert_eq!(tick_for(&app), IDLE_TICK);
    }
}
