/// Represents a single token in the LZ77 stream ahead of byte-packing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A literal byte
    Literal(u8),
    /// A back-reference: copy `length` bytes from `distance` bytes back
    Backref { length: u16, distance: u16 },
}

impl Token {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Backref { length, .. } => *length as usize,
        }
    }
}
