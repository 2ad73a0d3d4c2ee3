//! Byte cursor over the source text.
//!
//! Lox's lexical grammar is pure ASCII, so the scanner works on bytes and
//! only decodes UTF-8 when it has to skip a non-ASCII character as a whole.
//! `current()`/`peek()` return `0` past the end; use [`Cursor::is_eof`] to
//! tell that apart from an interior NUL.

pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Byte at the cursor, or `0` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the cursor, or `0` past EOF.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, idx: usize) -> u8 {
        self.src.as_bytes().get(idx).copied().unwrap_or(0)
    }

    /// Consume one byte and return it.
    #[inline]
    pub(crate) fn bump(&mut self) -> u8 {
        let b = self.current();
        if !self.is_eof() {
            self.pos += 1;
        }
        b
    }

    /// Consume the current byte if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Consume the rest of a UTF-8 character whose first byte was just bumped.
    pub(crate) fn finish_char(&mut self, first_byte_pos: usize) {
        let width = self.src[first_byte_pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.pos = first_byte_pos + width;
    }

    /// Move to the next `\n` (not consuming it), or to EOF.
    pub(crate) fn skip_to_newline(&mut self) {
        let rest = &self.src.as_bytes()[self.pos..];
        self.pos = match memchr::memchr(b'\n', rest) {
            Some(offset) => self.pos + offset,
            None => self.src.len(),
        };
    }

    /// Move to the next `"` (not consuming it), or to EOF.
    ///
    /// Returns the number of newlines skipped over.
    pub(crate) fn skip_to_quote(&mut self) -> u32 {
        let rest = &self.src.as_bytes()[self.pos..];
        let end = memchr::memchr(b'"', rest).unwrap_or(rest.len());
        let newlines = memchr::memchr_iter(b'\n', &rest[..end]).count();
        self.pos += end;
        u32::try_from(newlines).unwrap_or(u32::MAX)
    }

    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }
}
