//! Priority-queue scheduler with a static handler table.
//!
//! The scheduler is generic over the context its handlers mutate. Handlers
//! are plain function pointers keyed by [`EventKind`]; a handler may
//! schedule follow-up events but never runs another handler directly.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{EngineError, PlayerId};

use super::event::{Event, EventKind};

/// Pending events and the simulation clock.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Event>>,
    next_seq: u64,
    now: f64,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time of the last popped event.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Queue `kind` to run `delay` after the current time.
    pub fn schedule(&mut self, kind: EventKind, delay: f64, target: Option<PlayerId>) {
        self.schedule_at(kind, self.now + delay.max(0.0), target);
    }

    pub fn schedule_at(&mut self, kind: EventKind, time: f64, target: Option<PlayerId>) {
        let event = Event {
            time,
            seq: self.next_seq,
            kind,
            target,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(event));
    }

    /// Remove the earliest event and advance the clock to it.
    pub fn pop(&mut self) -> Option<Event> {
        let Reverse(event) = self.heap.pop()?;
        self.now = self.now.max(event.time);
        Some(event)
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|Reverse(e)| e)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every event and rewind the clock.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
        self.now = 0.0;
    }
}

/// Handler signature: mutate the context, schedule follow-ups.
pub type Handler<C> = fn(&mut C, &Event, &mut EventQueue) -> Result<(), EngineError>;

/// Event loop over a context `C`.
pub struct EventEngine<C> {
    handlers: FxHashMap<EventKind, Handler<C>>,
    queue: EventQueue,
    processed: u64,
}

impl<C> Default for EventEngine<C> {
    fn default() -> Self {
        Self {
            handlers: FxHashMap::default(),
            queue: EventQueue::new(),
            processed: 0,
        }
    }
}

impl<C> Clone for EventEngine<C> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
            queue: self.queue.clone(),
            processed: self.processed,
        }
    }
}

impl<C> std::fmt::Debug for EventEngine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEngine")
            .field("handlers", &self.handlers.len())
            .field("queued", &self.queue.len())
            .field("processed", &self.processed)
            .finish()
    }
}

impl<C> EventEngine<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler (builder pattern).
    #[must_use]
    pub fn on(mut self, kind: EventKind, handler: Handler<C>) -> Self {
        self.register(kind, handler);
        self
    }

    pub fn register(&mut self, kind: EventKind, handler: Handler<C>) {
        self.handlers.insert(kind, handler);
    }

    #[must_use]
    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    #[must_use]
    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut EventQueue {
        &mut self.queue
    }

    /// Events handled since the last reset.
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Empty the queue and the counters; handlers stay registered.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.processed = 0;
    }

    /// Pop and handle the earliest event.
    ///
    /// Returns the handled event, or `None` when the queue is empty.
    pub fn step(&mut self, ctx: &mut C) -> Result<Option<Event>, EngineError> {
        let Some(event) = self.queue.pop() else {
            return Ok(None);
        };
        let handler = self
            .handlers
            .get(&event.kind)
            .copied()
            .ok_or_else(|| EngineError::NoHandler(event.kind.name().to_string()))?;
        debug!(kind = %event.kind, time = event.time, seq = event.seq, "event");
        handler(ctx, &event, &mut self.queue)?;
        self.processed += 1;
        Ok(Some(event))
    }
}
