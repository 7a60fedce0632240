//! # squeue
//!
//! A lightweight queue on a static circular buffer, meant to be used
//! extensively from interrupt context.
//!
//! An [`SQueue<SIZE, SLOTS>`](SQueue) holds up to `SLOTS - 1` [`Element`]s of
//! exactly `SIZE` bytes each. Both [`enqueue`](SQueue::enqueue) and
//! [`dequeue`](SQueue::dequeue) run in constant time, never allocate, never
//! block and never panic.
//!
//! ## Limitations
//!
//! - Queue depth is fixed at compile time.
//! - Actual queue depth is one less than the number of slots. One slot is
//!   sacrificed so that `head == tail` always means "empty".
//! - The queue is not thread safe. Mutation requires `&mut`, so sharing a
//!   queue between an interrupt handler and a background task means wrapping
//!   it in whatever mutual exclusion the platform offers (usually a critical
//!   section).
//! - Elements have a fixed size.
//!
//! ## Safe state
//!
//! Memory that no longer holds a queued element is always zero. A dequeued
//! slot is wiped before the head moves past it, and the caller's output
//! buffer is zeroed even when a dequeue fails.
//!
//! ## Features
//!
//! - `use-std`: link the standard library and implement `std::error::Error`
//!   for the error types.
//! - `tracing`: emit `tracing` events on every operation.
//! - `defmt`: derive `defmt::Format` for [`Element`] and the error types.
//!
//! ## Example
//!
//! ```
//! use squeue::{Element, SQueue, QueueEmpty};
//!
//! let mut queue = SQueue::<4, 8>::new();
//! queue.enqueue(&Element::new([1, 2, 3, 4])).unwrap();
//!
//! let mut out = Element::zeroed();
//! queue.dequeue(&mut out).unwrap();
//! assert_eq!(out.as_bytes(), &[1, 2, 3, 4]);
//!
//! // an empty queue still leaves `out` in the safe state
//! assert_eq!(queue.dequeue(&mut out), Err(QueueEmpty));
//! assert!(out.is_zeroed());
//! ```

#![cfg_attr(not(any(test, feature = "use-std")), no_std)]

macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(any(test, feature = "tracing"))]
        tracing::$level!(target: "squeue", $($arg)+);
    };
}

pub mod element;
pub mod error;
pub mod queue;

pub use self::element::Element;
pub use self::error::{Error, QueueEmpty, QueueFull};
pub use self::queue::SQueue;

/// Slot count of the reference configuration.
pub const DEFAULT_CAPACITY: usize = 8;

/// Element width, in bytes, of the reference configuration.
pub const DEFAULT_ELEMENT_SIZE: usize = 16;

/// A queue of seven 16-byte elements, the reference configuration.
pub type DefaultSQueue = SQueue<DEFAULT_ELEMENT_SIZE, DEFAULT_CAPACITY>;
