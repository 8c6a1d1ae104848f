use std::cell::{Cell, RefCell};
use std::cmp::Ordering;

use crate::span::BufferId;

/// Observer capability notified on every span operation.
///
/// The context is a generic parameter of every sort entry point, so a no-op
/// implementation monomorphizes away completely; there is no dynamic
/// dispatch on the read/write/compare/swap path. Methods take `&self` so a
/// single observer can be shared between the main span and scratch spans;
/// stateful observers use interior mutability.
///
/// No ordering guarantee exists beyond "notified in the order operations
/// happen", and every logical array touch is reported exactly once.
pub trait Context<T> {
    fn on_read(&self, _buffer: BufferId, _index: usize, _value: &T) {}
    fn on_write(&self, _buffer: BufferId, _index: usize, _value: &T) {}
    fn on_compare(&self, _buffer: BufferId, _a: usize, _b: usize, _decided: Ordering) {}
    fn on_compare_value(&self, _buffer: BufferId, _index: usize, _decided: Ordering) {}
    fn on_swap(&self, _buffer: BufferId, _a: usize, _b: usize) {}
}

/// The distinguished no-op observer.
///
/// Sorting through a `NullContext` produces the same element movements as
/// sorting without any observer and compiles down to plain slice accesses.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullContext;

impl<T> Context<T> for NullContext {}

/// Snapshot of the counters accumulated by a [`CountingContext`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub reads: u64,
    pub writes: u64,
    pub comparisons: u64,
    pub swaps: u64,
}

/// Tallies one count per observed operation.
///
/// Both comparison forms (index/index and index/value) land in the same
/// `comparisons` counter.
#[derive(Debug, Default)]
pub struct CountingContext {
    reads: Cell<u64>,
    writes: Cell<u64>,
    comparisons: Cell<u64>,
    swaps: Cell<u64>,
}

impl CountingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> OpCounts {
        OpCounts {
            reads: self.reads.get(),
            writes: self.writes.get(),
            comparisons: self.comparisons.get(),
            swaps: self.swaps.get(),
        }
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons.get()
    }

    pub fn swaps(&self) -> u64 {
        self.swaps.get()
    }
}

impl<T> Context<T> for CountingContext {
    fn on_read(&self, _buffer: BufferId, _index: usize, _value: &T) {
        self.reads.set(self.reads.get() + 1);
    }

    fn on_write(&self, _buffer: BufferId, _index: usize, _value: &T) {
        self.writes.set(self.writes.get() + 1);
    }

    fn on_compare(&self, _buffer: BufferId, _a: usize, _b: usize, _decided: Ordering) {
        self.comparisons.set(self.comparisons.get() + 1);
    }

    fn on_compare_value(&self, _buffer: BufferId, _index: usize, _decided: Ordering) {
        self.comparisons.set(self.comparisons.get() + 1);
    }

    fn on_swap(&self, _buffer: BufferId, _a: usize, _b: usize) {
        self.swaps.set(self.swaps.get() + 1);
    }
}

/// One observed operation, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum Event<T> {
    Read {
        buffer: BufferId,
        index: usize,
    },
    Write {
        buffer: BufferId,
        index: usize,
        value: T,
    },
    Compare {
        buffer: BufferId,
        a: usize,
        b: usize,
        decided: Ordering,
    },
    CompareValue {
        buffer: BufferId,
        index: usize,
        decided: Ordering,
    },
    Swap {
        buffer: BufferId,
        a: usize,
        b: usize,
    },
}

/// Records every observed operation into an append-only in-memory log.
///
/// This is the event stream renderers and audio feedback consume. Replaying
/// the `Write` and `Swap` events of the main buffer against a copy of the
/// input reproduces the sorted output, because notifications are emitted
/// exactly once per touch and in operation order.
#[derive(Debug)]
pub struct RecordingContext<T> {
    events: RefCell<Vec<Event<T>>>,
}

impl<T> RecordingContext<T> {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drains the log, leaving the context empty.
    pub fn take_events(&self) -> Vec<Event<T>> {
        self.events.take()
    }

    pub fn into_events(self) -> Vec<Event<T>> {
        self.events.into_inner()
    }
}

impl<T> Default for RecordingContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Context<T> for RecordingContext<T> {
    fn on_read(&self, buffer: BufferId, index: usize, _value: &T) {
        self.events.borrow_mut().push(Event::Read { buffer, index });
    }

    fn on_write(&self, buffer: BufferId, index: usize, value: &T) {
        self.events.borrow_mut().push(Event::Write {
            buffer,
            index,
            value: value.clone(),
        });
    }

    fn on_compare(&self, buffer: BufferId, a: usize, b: usize, decided: Ordering) {
        self.events.borrow_mut().push(Event::Compare {
            buffer,
            a,
            b,
            decided,
        });
    }

    fn on_compare_value(&self, buffer: BufferId, index: usize, decided: Ordering) {
        self.events.borrow_mut().push(Event::CompareValue {
            buffer,
            index,
            decided,
        });
    }

    fn on_swap(&self, buffer: BufferId, a: usize, b: usize) {
        self.events.borrow_mut().push(Event::Swap { buffer, a, b });
    }
}
