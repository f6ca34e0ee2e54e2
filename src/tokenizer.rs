/// Separator between tokens in a normalized line
pub const TOKEN_SEPARATOR: u8 = b' ';

/// Split a normalized line into its tokens, left to right
pub fn tokenize(line: &str) -> TokenIterator<'_> {
    TokenIterator::new(line)
}

/// Hash a token to its index key
///
/// Polynomial accumulation `h = 31 * h + b` over the token bytes with 32-bit
/// wrapping arithmetic, the same function as Java's `String.hashCode` for
/// ASCII text. Not collision resistant.
#[inline]
pub fn hash_token(token: &str) -> u32 {
    token
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)))
}

/// Iterator that yields the non-empty, space-separated tokens of a line
pub struct TokenIterator<'a> {
    content: &'a str,
    position: usize,
}

impl<'a> TokenIterator<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            position: 0,
        }
    }

    /// Skip separator bytes
    #[inline]
    fn skip_separators(&mut self) {
        let bytes = self.content.as_bytes();
        while self.position < bytes.len() && bytes[self.position] == TOKEN_SEPARATOR {
            self.position += 1;
        }
    }

    /// Read next token
    #[inline]
    fn read_token(&mut self) -> Option<&'a str> {
        let bytes = self.content.as_bytes();
        let start = self.position;

        while self.position < bytes.len() && bytes[self.position] != TOKEN_SEPARATOR {
            self.position += 1;
        }

        // Boundaries sit on ASCII spaces, so the slice is always valid UTF-8
        self.content.get(start..self.position).filter(|t| !t.is_empty())
    }
}

impl<'a> Iterator for TokenIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_separators();

        if self.position >= self.content.len() {
            return None;
        }

        self.read_token()
    }
}
