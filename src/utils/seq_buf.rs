use std::fmt;

/// A text buffer with a fixed capacity of `N` bytes.
///
/// Formatting into a [`SeqBuf`] never allocates. Text that does not fit is cut off
/// at the last whole character and the buffer remembers that it overflowed, see
/// [`SeqBuf::has_overflowed`].
///
/// ```
/// use std::fmt::Write;
/// use drm_sink_info::utils::SeqBuf;
///
/// let mut buf = SeqBuf::<8>::new();
/// write!(buf, "model year: {}", 2024).unwrap();
/// assert_eq!(buf.as_str(), "model ye");
/// assert!(buf.has_overflowed());
/// ```
#[derive(Clone)]
pub struct SeqBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
    overflowed: bool,
}

impl<const N: usize> SeqBuf<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        SeqBuf {
            buf: [0; N],
            len: 0,
            overflowed: false,
        }
    }

    /// The text written so far
    pub fn as_str(&self) -> &str {
        // only whole characters are ever copied in
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Number of bytes in use
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing was written yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns true if any write did not fit and was truncated
    pub fn has_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Reset the buffer to its empty state, clearing the overflow flag
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflowed = false;
    }
}

impl<const N: usize> Default for SeqBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for SeqBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.overflowed {
            return Ok(());
        }
        for c in s.chars() {
            let width = c.len_utf8();
            if self.len + width > N {
                self.overflowed = true;
                break;
            }
            c.encode_utf8(&mut self.buf[self.len..self.len + width]);
            self.len += width;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Display for SeqBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for SeqBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqBuf")
            .field("text", &self.as_str())
            .field("capacity", &N)
            .field("overflowed", &self.overflowed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SeqBuf;
    use std::fmt::Write;

    #[test]
    fn fits_exactly() {
        let mut buf = SeqBuf::<4>::new();
        write!(buf, "{}", 2024).unwrap();
        assert_eq!(buf.as_str(), "2024");
        assert!(!buf.has_overflowed());
    }

    #[test]
    fn truncates_and_flags() {
        let mut buf = SeqBuf::<10>::new();
        write!(buf, "year of manufacture: {}", 2024).unwrap();
        assert_eq!(buf.as_str(), "year of ma");
        assert_eq!(buf.len(), 10);
        assert!(buf.has_overflowed());

        // nothing is appended after an overflow
        buf.write_str("x").unwrap();
        assert_eq!(buf.as_str(), "year of ma");
    }

    #[test]
    fn never_splits_a_character() {
        let mut buf = SeqBuf::<3>::new();
        buf.write_str("aé€").unwrap();
        assert_eq!(buf.as_str(), "aé");
        assert!(buf.has_overflowed());
    }

    #[test]
    fn clear_resets_overflow() {
        let mut buf = SeqBuf::<2>::new();
        buf.write_str("abc").unwrap();
        assert!(buf.has_overflowed());
        buf.clear();
        assert!(buf.is_empty());
        assert!(!buf.has_overflowed());
    }
}
