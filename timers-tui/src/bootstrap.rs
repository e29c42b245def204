use crate::api::TimerGateway;
use crate::app::App;
use crate::time_utils::now_millis;

/// Load the first snapshot before the UI takes over the terminal.
pub async fn initialize_app_state(app: &mut App, gateway: &dyn TimerGateway) {
    app.is_loading = true;

    let ticket = app.begin_refresh();
    match gateway.get_timers().await {
        Ok(timers) => {
            tracing::info!(count = timers.len(), "loaded timers");
            app.apply_refresh(ticket, timers, now_millis());
        }
        Err(e) => {
            app.finish_refresh(ticket);
            tracing::warn!(error = %e, "initial load failed");
            eprintln!("Warning: Could not load timers: {}", e);
            app.set_status(format!("Could not load timers: {}", e));
        }
    }

    app.is_loading = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DevBackend;

    #[tokio::test]
    async fn loads_server_snapshot() {
        let backend = DevBackend::seeded();
        let mut app = App::new();

        initialize_app_state(&mut app, &backend).await;

        assert_eq!(app.timers(), backend.snapshot().as_slice());
        assert!(app.refresh_in_flight.is_none());
        assert!(!app.is_loading);
    }
}
