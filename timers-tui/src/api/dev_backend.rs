use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{GatewayError, TimerGateway};
use crate::time_utils::now_millis;
use crate::types::{Timer, TimerAttrs, TimerId};

/// In-memory stand-in for the timers API, used by `timers-tui dev` and tests.
///
/// Applies writes the way the real server does, so refreshes hand back
/// whatever the client last told it.
#[derive(Debug, Clone, Default)]
pub struct DevBackend {
    store: Arc<Mutex<Vec<Timer>>>,
    latency: Duration,
}

impl DevBackend {
    pub fn seeded() -> Self {
        Self::with_timers(seed_dev_timers(now_millis()))
    }

    pub fn with_timers(timers: Vec<Timer>) -> Self {
        Self {
            store: Arc::new(Mutex::new(timers)),
            latency: Duration::ZERO,
        }
    }

    /// Delay every call, to make the optimistic UI visible in dev mode.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn snapshot(&self) -> Vec<Timer> {
        self.store.lock().expect("dev store lock poisoned").clone()
    }

    async fn simulate_network(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn with_timer(&self, id: &TimerId, f: impl FnOnce(&mut Timer)) {
        if let Some(timer) = self
            .store
            .lock()
            .expect("dev store lock poisoned")
            .iter_mut()
            .find(|timer| &timer.id == id)
        {
            f(timer);
        }
    }
}

#[async_trait]
impl TimerGateway for DevBackend {
    async fn get_timers(&self) -> Result<Vec<Timer>, GatewayError> {
        self.simulate_network().await;
        Ok(self.snapshot())
    }

    async fn create_timer(&self, timer: &Timer) -> Result<(), GatewayError> {
        self.simulate_network().await;
        self.store
            .lock()
            .expect("dev store lock poisoned")
            .push(timer.clone());
        Ok(())
    }

    async fn update_timer(&self, attrs: &TimerAttrs) -> Result<(), GatewayError> {
        self.simulate_network().await;
        self.with_timer(&attrs.id, |timer| {
            timer.title = attrs.title.clone();
            timer.project = attrs.project.clone();
        });
        Ok(())
    }

    async fn delete_timer(&self, id: &TimerId) -> Result<(), GatewayError> {
        self.simulate_network().await;
        self.store
            .lock()
            .expect("dev store lock poisoned")
            .retain(|timer| &timer.id != id);
        Ok(())
    }

    async fn start_timer(&self, id: &TimerId, start: i64) -> Result<(), GatewayError> {
        self.simulate_network().await;
        self.with_timer(id, |timer| {
            if timer.running_since.is_none() {
                timer.running_since = Some(start);
            }
        });
        Ok(())
    }

    async fn stop_timer(&self, id: &TimerId, stop: i64) -> Result<(), GatewayError> {
        self.simulate_network().await;
        self.with_timer(id, |timer| {
            if let Some(since) = timer.running_since.take() {
                let span = stop.saturating_sub(since).max(0) as u64;
                timer.elapsed = timer.elapsed.saturating_add(span);
            }
        });
        Ok(())
    }
}

fn seed_dev_timers(now: i64) -> Vec<Timer> {
    vec![
        Timer {
            id: TimerId::generate(),
            title: "Refactor refresh loop".to_string(),
            project: "Timers".to_string(),
            elapsed: 2_712_000,
            running_since: Some(now - 95_000),
        },
        Timer {
            id: TimerId::generate(),
            title: "Review pull requests".to_string(),
            project: "Platform".to_string(),
            elapsed: 5_456_099,
            running_since: None,
        },
        Timer {
            id: TimerId::generate(),
            title: "Fix the bike".to_string(),
            project: "Home".to_string(),
            elapsed: 1_273_998,
            running_since: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stopped(id: &str, elapsed: u64) -> Timer {
        Timer {
            id: TimerId::new(id),
            title: "t".to_string(),
            project: "p".to_string(),
            elapsed,
            running_since: None,
        }
    }

    #[tokio::test]
    async fn writes_are_visible_in_next_read() {
        let backend = DevBackend::default();
        let timer = stopped("1", 0);

        backend.create_timer(&timer).await.unwrap();
        backend
            .update_timer(&TimerAttrs {
                id: TimerId::new("1"),
                title: "renamed".to_string(),
                project: "elsewhere".to_string(),
            })
            .await
            .unwrap();

        let timers = backend.get_timers().await.unwrap();
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].title, "renamed");
        assert_eq!(timers[0].project, "elsewhere");
    }

    #[tokio::test]
    async fn start_and_stop_accumulate_like_the_server() {
        let backend = DevBackend::with_timers(vec![stopped("1", 1_000)]);
        let id = TimerId::new("1");

        backend.start_timer(&id, 5_000).await.unwrap();
        backend.stop_timer(&id, 8_000).await.unwrap();

        let timer = &backend.snapshot()[0];
        assert_eq!(timer.elapsed, 4_000);
        assert_eq!(timer.running_since, None);
    }

    #[tokio::test]
    async fn stop_saturates_huge_elapsed() {
        let backend = DevBackend::with_timers(vec![stopped("1", u64::MAX)]);
        let id = TimerId::new("1");

        backend.start_timer(&id, 0).await.unwrap();
        backend.stop_timer(&id, 1_000).await.unwrap();

        assert_eq!(backend.snapshot()[0].elapsed, u64::MAX);
    }

    #[tokio::test]
    async fn delete_removes_timer() {
        let backend = DevBackend::with_timers(vec![stopped("1", 0), stopped("2", 0)]);

        backend.delete_timer(&TimerId::new("1")).await.unwrap();

        assert_eq!(backend.snapshot(), vec![stopped("2", 0)]);
    }

    #[test]
    fn seeded_backend_has_one_running_timer() {
        let timers = DevBackend::seeded().snapshot();
        assert_eq!(timers.iter().filter(|t| t.is_running()).count(), 1);
    }
}
