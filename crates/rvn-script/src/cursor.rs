//! Bounds-checked forward cursor over a borrowed script buffer.

use crate::error::CursorOverflow;

/// Largest offset a one-byte script length can name.
pub const MAX_SCRIPT_OFFSET: usize = 0x7f;

/// A forward-only cursor whose position is always a valid index.
///
/// Every advance is validated before the new position is used: it must stay
/// inside the buffer and within the one-byte offset range the serialized
/// script format can express. A failed advance leaves no way to read, so the
/// parsers built on top of this type never index past the buffer.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Place a cursor at `pos`, which must already be a valid index.
    pub fn new(buf: &'a [u8], pos: usize) -> Result<Self, CursorOverflow> {
        if pos >= buf.len() || pos > MAX_SCRIPT_OFFSET {
            return Err(CursorOverflow);
        }
        Ok(ByteCursor { buf, pos })
    }

    /// The current position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The byte under the cursor. Always in bounds.
    pub fn byte(&self) -> u8 {
        self.buf[self.pos]
    }

    /// Move forward by `n` bytes, failing if the new position would reach
    /// the end of the buffer or leave the one-byte offset range.
    pub fn advance(&mut self, n: usize) -> Result<(), CursorOverflow> {
        let next = self.pos.checked_add(n).ok_or(CursorOverflow)?;
        if next >= self.buf.len() || next > MAX_SCRIPT_OFFSET {
            return Err(CursorOverflow);
        }
        self.pos = next;
        Ok(())
    }
}
