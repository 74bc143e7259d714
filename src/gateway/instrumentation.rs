// ABOUTME: Timing decorator for token lifecycle operations
// ABOUTME: Measures each call, logs it, and reports it to an optional timing sink
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Lifecycle Instrumentation
//!
//! [`InstrumentedGateway`] wraps any [`TokenLifecycle`] and times the four
//! public operations. A [`TimingSink`] failure is logged and dropped: it never
//! changes the result the caller sees.

use super::{RefreshOutcome, TokenLifecycle};
use async_trait::async_trait;
use jawbone_core::constants::providers::JAWBONE_UP_DISPLAY_NAME;
use jawbone_core::{AccessToken, GatewayResult};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

/// One measured lifecycle operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingEvent {
    /// Operation name, e.g. `authenticate_user`
    pub operation: &'static str,
    /// Category the measurement is filed under
    pub category: String,
    /// Wall-clock duration of the call
    pub elapsed: Duration,
    /// Whether the operation returned `Ok`
    pub succeeded: bool,
}

/// Errors a timing sink may report
#[derive(Debug, Error)]
pub enum TimingError {
    /// The sink could not record the event
    #[error("timing sink unavailable: {0}")]
    Unavailable(String),
}

/// Destination for timing events
pub trait TimingSink: Send + Sync {
    /// Record one event
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be recorded
    fn record(&self, event: TimingEvent) -> Result<(), TimingError>;
}

/// Events an [`InMemoryTimings`] keeps when no capacity is given
pub const DEFAULT_TIMING_CAPACITY: usize = 1024;

/// Timing sink that keeps the most recent events in memory
///
/// Once `capacity` events are held, each new event evicts the oldest one.
#[derive(Debug)]
pub struct InMemoryTimings {
    events: Mutex<VecDeque<TimingEvent>>,
    capacity: usize,
}

impl Default for InMemoryTimings {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TIMING_CAPACITY)
    }
}

impl InMemoryTimings {
    /// Create an empty sink holding up to [`DEFAULT_TIMING_CAPACITY`] events
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sink holding up to `capacity` events (at least one)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Maximum number of events held
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the held events, oldest first
    #[must_use]
    pub fn events(&self) -> Vec<TimingEvent> {
        self.events.lock().map_or_else(
            |poisoned| poisoned.into_inner().iter().cloned().collect(),
            |events| events.iter().cloned().collect(),
        )
    }

    /// Held events for one operation
    #[must_use]
    pub fn events_for(&self, operation: &str) -> Vec<TimingEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.operation == operation)
            .collect()
    }

    /// Remove and return every held event, oldest first
    #[must_use]
    pub fn take_events(&self) -> Vec<TimingEvent> {
        let mut events = self
            .events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        events.drain(..).collect()
    }
}

impl TimingSink for InMemoryTimings {
    fn record(&self, event: TimingEvent) -> Result<(), TimingError> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| TimingError::Unavailable("timing buffer lock poisoned".to_owned()))?;
        if events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event);
        Ok(())
    }
}

/// Lifecycle decorator that times every operation
pub struct InstrumentedGateway<G> {
    inner: G,
    category: String,
    sink: Option<Arc<dyn TimingSink>>,
}

impl<G: TokenLifecycle> InstrumentedGateway<G> {
    /// Wrap `inner`; events are only logged until a sink is attached
    #[must_use]
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            category: JAWBONE_UP_DISPLAY_NAME.to_owned(),
            sink: None,
        }
    }

    /// Report every measurement to `sink`
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn TimingSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// File measurements under `category`
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// The wrapped lifecycle
    pub const fn inner(&self) -> &G {
        &self.inner
    }

    async fn timed<T, F>(&self, operation: &'static str, call: F) -> GatewayResult<T>
    where
        F: Future<Output = GatewayResult<T>> + Send,
        T: Send,
    {
        let started = Instant::now();
        let result = call.await;
        let event = TimingEvent {
            operation,
            category: self.category.clone(),
            elapsed: started.elapsed(),
            succeeded: result.is_ok(),
        };

        info!(
            operation,
            category = %event.category,
            elapsed_ms = u64::try_from(event.elapsed.as_millis()).unwrap_or(u64::MAX),
            succeeded = event.succeeded,
            "Gateway operation finished"
        );

        if let Some(sink) = &self.sink {
            if let Err(e) = sink.record(event) {
                warn!(operation, error = %e, "Dropped timing event");
            }
        }

        result
    }
}

#[async_trait]
impl<G: TokenLifecycle> TokenLifecycle for InstrumentedGateway<G> {
    async fn is_authorized(&self) -> GatewayResult<bool> {
        self.timed("is_authorized", self.inner.is_authorized()).await
    }

    async fn refresh_token_if_required(&self) -> GatewayResult<RefreshOutcome> {
        self.timed(
            "refresh_token_if_required",
            self.inner.refresh_token_if_required(),
        )
        .await
    }

    async fn authenticate_user(&self, code: &str) -> GatewayResult<AccessToken> {
        self.timed("authenticate_user", self.inner.authenticate_user(code))
            .await
    }

    async fn reset_session(&self) -> GatewayResult<()> {
        self.timed("reset_session", self.inner.reset_session()).await
    }
}
