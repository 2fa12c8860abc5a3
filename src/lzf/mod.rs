//! The LZF-style codec: match finder, token encoder, stream decoder.
//!
//! Three kinds of wire tokens, distinguished by the top three bits of the
//! header byte:
//!
//! ```text
//! 000LLLLL                     literal run of L+1 bytes
//! LLLaaaaa bbbbbbbb            back-reference of L+3 bytes, L in 1..=6
//! 111aaaaa LLLLLLLL bbbbbbbb   back-reference of L+9 bytes
//! ```
//!
//! The distance to the start of a back-reference is `(aaaaa << 8 | bbbbbbbb) + 1`
//! bytes before the current output position. The distance field is 13 bits on
//! the wire (5 high bits share the header byte), so matches farther back than
//! 8192 bytes are not representable. The `000` and `111` header tags are taken
//! by literal runs and the long form, which leaves no short form for a 3-byte
//! match; 4 bytes is the shortest match the stream can express.

pub mod decoder;
pub mod encoder;
pub mod matcher;
pub mod tokens;

pub use decoder::decompress;
pub use encoder::encode_tokens;
pub use matcher::tokenize;
pub use tokens::Token;

use crate::CompressStats;

/// Shortest encodable back-reference
pub const MIN_MATCH: usize = 4;

/// Longest encodable match: long-form base 9 plus a full extra-length byte
pub const MAX_MATCH: usize = 255 + 9;

/// Farthest encodable back-reference distance (13-bit wire field, plus one)
pub const MAX_DISTANCE: usize = 1 << 13;

/// Longest literal run a single `000LLLLL` header can describe
pub const MAX_LITERAL_RUN: usize = 32;

/// Longest match the two-byte short form can carry; anything above needs
/// the three-byte long form
pub const SHORT_MATCH_MAX: usize = 6 + 3;

/// Header tag for the long back-reference form
pub const LONG_FORM_TAG: u8 = 0xE0;

/// Compress `input` into the wire format.
///
/// Total over any byte sequence: every input has a valid encoding, so this
/// cannot fail. Empty input produces empty output.
pub fn compress(input: &[u8]) -> Vec<u8> {
    encoder::encode_tokens(&matcher::tokenize(input))
}

/// Compress `input` and report token-level statistics alongside the stream.
pub fn compress_with_stats(input: &[u8]) -> (Vec<u8>, CompressStats) {
    let tokens = matcher::tokenize(input);

    let mut stats = CompressStats { input_bytes: input.len() as u64, ..Default::default() };
    for token in &tokens {
        match token {
            Token::Literal(_) => stats.literals += 1,
            Token::Backref { .. } => stats.backrefs += 1,
        }
    }

    let output = encoder::encode_tokens(&tokens);
    stats.output_bytes = output.len() as u64;
    (output, stats)
}
