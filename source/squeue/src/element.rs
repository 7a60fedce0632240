use core::fmt;

/// An opaque, fixed-size block of `SIZE` bytes.
///
/// The queue never looks inside an element; it only copies it in and out
/// and wipes it. Callers that want to move structured data through a queue
/// serialize it into the element's bytes themselves. Since the width is part
/// of the type, a size mismatch between producer and consumer is a compile
/// error rather than a memory error.
///
/// A default-constructed element is all zero bytes (the "safe state").
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Element<const SIZE: usize>([u8; SIZE]);

impl<const SIZE: usize> Element<SIZE> {
    /// The width of this element type, in bytes.
    pub const SIZE: usize = SIZE;

    /// Returns an element with every byte set to zero.
    #[must_use]
    #[inline]
    pub const fn zeroed() -> Self {
        Self([0; SIZE])
    }

    /// Wraps the given bytes.
    #[must_use]
    #[inline]
    pub const fn new(bytes: [u8; SIZE]) -> Self {
        Self(bytes)
    }

    #[must_use]
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; SIZE] {
        &self.0
    }

    #[must_use]
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8; SIZE] {
        &mut self.0
    }

    #[must_use]
    #[inline]
    pub const fn into_bytes(self) -> [u8; SIZE] {
        self.0
    }

    /// Brings the element back to the safe state.
    #[inline]
    pub fn clear(&mut self) {
        self.0.fill(0);
    }

    /// Returns `true` if every byte of the element is zero.
    #[must_use]
    #[inline]
    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl<const SIZE: usize> Default for Element<SIZE> {
    #[inline]
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const SIZE: usize> From<[u8; SIZE]> for Element<SIZE> {
    #[inline]
    fn from(bytes: [u8; SIZE]) -> Self {
        Self(bytes)
    }
}

impl<const SIZE: usize> From<Element<SIZE>> for [u8; SIZE] {
    #[inline]
    fn from(element: Element<SIZE>) -> Self {
        element.0
    }
}

impl<const SIZE: usize> AsRef<[u8]> for Element<SIZE> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const SIZE: usize> AsMut<[u8]> for Element<SIZE> {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl<const SIZE: usize> fmt::Debug for Element<SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Element(")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}
