use core::fmt;

/// Returned by [`SQueue::enqueue`](crate::SQueue::enqueue) when every usable
/// slot is taken.
///
/// The queue is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull;

/// Returned by [`SQueue::dequeue`](crate::SQueue::dequeue) when there is
/// nothing to retrieve.
///
/// The output buffer handed to `dequeue` has still been zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueEmpty;

/// Either queue failure, for callers that both produce and consume and want
/// a single error type to propagate with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An enqueue was rejected, see [`QueueFull`].
    Full,
    /// A dequeue found nothing, see [`QueueEmpty`].
    Empty,
}

impl fmt::Display for QueueFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("queue is full")
    }
}

impl fmt::Display for QueueEmpty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("queue is empty")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Full => fmt::Display::fmt(&QueueFull, f),
            Error::Empty => fmt::Display::fmt(&QueueEmpty, f),
        }
    }
}

impl From<QueueFull> for Error {
    #[inline]
    fn from(_: QueueFull) -> Self {
        Error::Full
    }
}

impl From<QueueEmpty> for Error {
    #[inline]
    fn from(_: QueueEmpty) -> Self {
        Error::Empty
    }
}

#[cfg(feature = "use-std")]
impl std::error::Error for QueueFull {}

#[cfg(feature = "use-std")]
impl std::error::Error for QueueEmpty {}

#[cfg(feature = "use-std")]
impl std::error::Error for Error {}
