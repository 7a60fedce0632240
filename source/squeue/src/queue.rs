use crate::{Element, QueueEmpty, QueueFull};
use core::{fmt, mem};

/// A fixed-capacity FIFO queue of [`Element<SIZE>`](Element)s on a circular
/// buffer of `SLOTS` slots.
///
/// `head` is the slot of the next element to dequeue, `tail` is the slot the
/// next enqueued element is written to. Both only ever move forward by one,
/// modulo `SLOTS`. The slot just behind `head` is never written: that way
/// `head == tail` is unambiguously "empty", and the queue is full once
/// `tail` is one step behind `head`. The usable capacity is therefore
/// `SLOTS - 1`.
///
/// There is no interior mutability and no locking. Enqueueing and dequeueing
/// take `&mut self`; a queue shared between an interrupt handler and a task
/// must be guarded by the caller.
///
/// `SLOTS` must be at least 2; instantiating a smaller queue fails to
/// compile:
///
/// ```compile_fail
/// let queue = squeue::SQueue::<4, 1>::new();
/// ```
///
/// # Examples
///
/// A queue can live in a `static`:
///
/// ```
/// use squeue::SQueue;
///
/// static mut EVENTS: SQueue<16, 8> = SQueue::new();
/// ```
///
/// Filling and draining:
///
/// ```
/// use squeue::{Element, SQueue, QueueFull};
///
/// let mut queue = SQueue::<2, 4>::new();
/// assert_eq!(queue.capacity(), 3);
///
/// for i in 0..3 {
///     queue.enqueue(&Element::new([i, i])).unwrap();
/// }
/// assert!(queue.is_full());
/// assert_eq!(queue.enqueue(&Element::new([9, 9])), Err(QueueFull));
///
/// let mut out = Element::zeroed();
/// for i in 0..3 {
///     queue.dequeue(&mut out).unwrap();
///     assert_eq!(out.into_bytes(), [i, i]);
/// }
/// assert!(queue.is_empty());
/// ```
#[derive(Clone)]
pub struct SQueue<const SIZE: usize, const SLOTS: usize> {
    head: usize,
    tail: usize,
    slots: [Element<SIZE>; SLOTS],
}

impl<const SIZE: usize, const SLOTS: usize> SQueue<SIZE, SLOTS> {
    /// The number of elements the queue can hold at once.
    pub const CAPACITY: usize = SLOTS - 1;

    const ENOUGH_SLOTS: () = assert!(SLOTS >= 2, "an `SQueue` needs at least two slots");

    /// Returns an empty queue in the safe state: both indices at zero and
    /// every slot zero-filled.
    #[must_use]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ENOUGH_SLOTS;
        Self {
            head: 0,
            tail: 0,
            slots: [Element::zeroed(); SLOTS],
        }
    }

    /// Brings the queue back to the safe state.
    ///
    /// Both indices are reset to zero and every slot is zero-filled,
    /// discarding anything still queued. Calling this repeatedly is the same
    /// as calling it once.
    pub fn init(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.slots.iter_mut().for_each(Element::clear);
        trace_event!(trace, head = self.head, tail = self.tail, len = self.len(), "initialized");
    }

    /// Adds `element` at the tail of the queue.
    ///
    /// The element's bytes are copied into the queue. It will be dequeued
    /// after every element already queued.
    ///
    /// # Errors
    ///
    /// Returns [`QueueFull`] if the queue already holds
    /// [`capacity()`](Self::capacity) elements. Nothing is written in that
    /// case.
    pub fn enqueue(&mut self, element: &Element<SIZE>) -> Result<(), QueueFull> {
        if self.is_full() {
            trace_event!(debug, head = self.head, tail = self.tail, "enqueue rejected: queue full");
            return Err(QueueFull);
        }

        self.slots[self.tail] = *element;
        // `tail` cannot land on `head` here; the slot behind it stays unused.
        self.tail = Self::advance(self.tail);

        trace_event!(trace, head = self.head, tail = self.tail, len = self.len(), "enqueued");
        Ok(())
    }

    /// Removes the element at the head of the queue, copying it into
    /// `output`.
    ///
    /// `output` is zero-filled first, so it is in the safe state even if
    /// this returns an error. The slot the element occupied is zero-filled
    /// before the head moves past it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueEmpty`] if there is nothing queued. `output` is then
    /// all zeros and the queue is unchanged.
    pub fn dequeue(&mut self, output: &mut Element<SIZE>) -> Result<(), QueueEmpty> {
        output.clear();

        if self.is_empty() {
            trace_event!(debug, head = self.head, tail = self.tail, "dequeue rejected: queue empty");
            return Err(QueueEmpty);
        }

        *output = mem::take(&mut self.slots[self.head]);
        self.head = Self::advance(self.head);

        trace_event!(trace, head = self.head, tail = self.tail, len = self.len(), "dequeued");
        Ok(())
    }

    /// Enqueues `bytes` as a new element.
    ///
    /// This is [`enqueue`](Self::enqueue) for callers holding a plain byte
    /// array.
    ///
    /// # Errors
    ///
    /// Returns [`QueueFull`] if the queue is full.
    #[inline]
    pub fn push(&mut self, bytes: [u8; SIZE]) -> Result<(), QueueFull> {
        self.enqueue(&Element::new(bytes))
    }

    /// Dequeues the head element and returns it by value.
    ///
    /// # Errors
    ///
    /// Returns [`QueueEmpty`] if there is nothing queued.
    #[inline]
    pub fn pop(&mut self) -> Result<Element<SIZE>, QueueEmpty> {
        let mut output = Element::zeroed();
        self.dequeue(&mut output)?;
        Ok(output)
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[must_use]
    #[inline]
    pub fn is_full(&self) -> bool {
        (self.head + SLOTS - self.tail) % SLOTS == 1
    }

    /// Returns the number of elements currently queued.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        (self.tail + SLOTS - self.head) % SLOTS
    }

    /// Returns the number of elements the queue can hold, which is one less
    /// than the number of slots.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Index of the slot the next element will be dequeued from.
    #[must_use]
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index of the slot the next element will be enqueued into.
    #[must_use]
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Returns the raw backing storage, in slot order.
    ///
    /// Slots that do not hold a queued element are always all zeros.
    #[must_use]
    #[inline]
    pub fn slots(&self) -> &[Element<SIZE>; SLOTS] {
        &self.slots
    }

    #[inline]
    fn advance(idx: usize) -> usize {
        (idx + 1) % SLOTS
    }
}

impl<const SIZE: usize, const SLOTS: usize> Default for SQueue<SIZE, SLOTS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize, const SLOTS: usize> fmt::Debug for SQueue<SIZE, SLOTS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SQueue")
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("len", &self.len())
            .field("capacity", &Self::CAPACITY)
            .finish()
    }
}
