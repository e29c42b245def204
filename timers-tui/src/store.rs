//! The canonical timer list and every mutation applied to it.
//!
//! Mutations are optimistic: the list changes immediately and the caller gets
//! back the [`GatewayRequest`] that tells the server about it. Nothing here
//! waits on the network.

use crate::types::{Timer, TimerAttrs, TimerDraft, TimerId};

/// A user intent that changes the canonical list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(TimerDraft),
    Update(TimerAttrs),
    Delete(TimerId),
    Start(TimerId),
    Stop(TimerId),
}

/// A write the server has to be told about after a local mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayRequest {
    Create(Timer),
    Update(TimerAttrs),
    Delete(TimerId),
    Start { id: TimerId, start: i64 },
    Stop { id: TimerId, stop: i64 },
}

impl GatewayRequest {
    pub fn describe(&self) -> &'static str {
        match self {
            GatewayRequest::Create(_) => "create timer",
            GatewayRequest::Update(_) => "update timer",
            GatewayRequest::Delete(_) => "delete timer",
            GatewayRequest::Start { .. } => "start timer",
            GatewayRequest::Stop { .. } => "stop timer",
        }
    }
}

/// Identifies one refresh request so late responses can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

#[derive(Debug, Default)]
pub struct TimerStore {
    timers: Vec<Timer>,
    revision: u64,
    last_ticket: u64,
}

impl TimerStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_timers(timers: Vec<Timer>) -> Self {
        Self {
            timers,
            ..Self::default()
        }
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn get(&self, id: &TimerId) -> Option<&Timer> {
        self.timers.iter().find(|t| &t.id == id)
    }

    /// Bumped every time the list is replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn any_running(&self) -> bool {
        self.timers.iter().any(Timer::is_running)
    }

    /// Single entry point for user-driven mutations.
    pub fn execute(&mut self, command: Command, now: i64) -> Option<GatewayRequest> {
        match command {
            Command::Create(draft) => Some(self.create(draft)),
            Command::Update(attrs) => self.update(attrs),
            Command::Delete(id) => self.delete(&id),
            Command::Start(id) => self.start(&id, now),
            Command::Stop(id) => self.stop(&id, now),
        }
    }

    pub fn create(&mut self, draft: TimerDraft) -> GatewayRequest {
        self.create_with(draft, TimerId::generate)
    }

    /// Create with ids drawn from `next_id`, skipping any already in use.
    fn create_with(
        &mut self,
        draft: TimerDraft,
        mut next_id: impl FnMut() -> TimerId,
    ) -> GatewayRequest {
        let mut id = next_id();
        while self.get(&id).is_some() {
            tracing::debug!(%id, "generated id already in use, drawing another");
            id = next_id();
        }
        let timer = Timer::new(id, draft);

        let mut next = self.timers.clone();
        next.push(timer.clone());
        self.replace(next);

        GatewayRequest::Create(timer)
    }

    pub fn update(&mut self, attrs: TimerAttrs) -> Option<GatewayRequest> {
        if self.get(&attrs.id).is_none() {
            tracing::debug!(id = %attrs.id, "update for unknown timer ignored");
            return None;
        }

        let next = self
            .timers
            .iter()
            .map(|timer| {
                if timer.id == attrs.id {
                    Timer {
                        title: attrs.title.clone(),
                        project: attrs.project.clone(),
                        ..timer.clone()
                    }
                } else {
                    timer.clone()
                }
            })
            .collect();
        self.replace(next);

        Some(GatewayRequest::Update(attrs))
    }

    pub fn delete(&mut self, id: &TimerId) -> Option<GatewayRequest> {
        if self.get(id).is_none() {
            tracing::debug!(%id, "delete for unknown timer ignored");
            return None;
        }

        let next = self.timers.iter().filter(|t| &t.id != id).cloned().collect();
        self.replace(next);

        Some(GatewayRequest::Delete(id.clone()))
    }

    pub fn start(&mut self, id: &TimerId, now: i64) -> Option<GatewayRequest> {
        match self.get(id) {
            None => {
                tracing::debug!(%id, "start for unknown timer ignored");
                return None;
            }
            Some(timer) if timer.is_running() => {
                tracing::debug!(%id, "start for running timer ignored");
                return None;
            }
            Some(_) => {}
        }

        let next = self
            .timers
            .iter()
            .map(|timer| {
                if &timer.id == id {
                    Timer {
                        running_since: Some(now),
                        ..timer.clone()
                    }
                } else {
                    timer.clone()
                }
            })
            .collect();
        self.replace(next);

        Some(GatewayRequest::Start {
            id: id.clone(),
            start: now,
        })
    }

    pub fn stop(&mut self, id: &TimerId, now: i64) -> Option<GatewayRequest> {
        let since = match self.get(id) {
            None => {
                tracing::debug!(%id, "stop for unknown timer ignored");
                return None;
            }
            Some(Timer {
                running_since: None,
                ..
            }) => {
                tracing::debug!(%id, "stop for stopped timer ignored");
                return None;
            }
            Some(Timer {
                running_since: Some(since),
                ..
            }) => *since,
        };

        let last_elapsed = now.saturating_sub(since).max(0) as u64;
        let next = self
            .timers
            .iter()
            .map(|timer| {
                if &timer.id == id {
                    Timer {
                        elapsed: timer.elapsed.saturating_add(last_elapsed),
                        running_since: None,
                        ..timer.clone()
                    }
                } else {
                    timer.clone()
                }
            })
            .collect();
        self.replace(next);

        Some(GatewayRequest::Stop {
            id: id.clone(),
            stop: now,
        })
    }

    /// Issue a ticket for a refresh about to be sent.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.last_ticket += 1;
        RefreshTicket(self.last_ticket)
    }

    /// Replace the whole list with a server snapshot.
    ///
    /// Returns `false` and leaves the list alone when a newer refresh was
    /// issued after `ticket`.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, timers: Vec<Timer>) -> bool {
        if ticket.0 < self.last_ticket {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.last_ticket,
                "dropping stale refresh response"
            );
            return false;
        }
        self.replace(timers);
        true
    }

    fn replace(&mut self, timers: Vec<Timer>) {
        self.timers = timers;
        self.revision += 1;
    }
}
