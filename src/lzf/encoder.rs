//! Token encoder: serializes a token sequence into the packed wire format.
//!
//! Consecutive literals are merged into runs under a shared `000LLLLL`
//! header. The header is written when the run opens (length 1) and patched
//! in place as literals accumulate; a back-reference or a full 5-bit length
//! field closes the run.

use super::tokens::Token;
use super::{LONG_FORM_TAG, MAX_DISTANCE, MAX_LITERAL_RUN, MAX_MATCH, MIN_MATCH, SHORT_MATCH_MAX};

/// Serialize `tokens` into wire bytes. Pure and order-preserving.
pub fn encode_tokens(tokens: &[Token]) -> Vec<u8> {
    let mut out = Vec::with_capacity(tokens.len() + tokens.len() / 2);
    // Offset of the open literal run's header byte, if a run is open
    let mut run_header: Option<usize> = None;

    for token in tokens {
        match *token {
            Token::Literal(byte) => {
                match run_header {
                    Some(header) if (out[header] as usize) < MAX_LITERAL_RUN - 1 => {
                        out[header] += 1;
                    }
                    _ => {
                        run_header = Some(out.len());
                        out.push(0);
                    }
                }
                out.push(byte);
            }
            Token::Backref { length, distance } => {
                let length = length as usize;
                let distance = distance as usize;
                debug_assert!((MIN_MATCH..=MAX_MATCH).contains(&length));
                debug_assert!((1..=MAX_DISTANCE).contains(&distance));

                run_header = None;
                let offset = distance - 1;
                if length <= SHORT_MATCH_MAX {
                    // Short form carries length - 3 in the tag bits
                    out.push((((length - 3) as u8) << 5) | (offset >> 8) as u8);
                } else {
                    out.push(LONG_FORM_TAG | (offset >> 8) as u8);
                    out.push((length - 9) as u8);
                }
                out.push((offset & 0xFF) as u8);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_literal_run() {
        let tokens = vec![Token::Literal(b'h'), Token::Literal(b'i')];
        assert_eq!(encode_tokens(&tokens), vec![0x01, b'h', b'i']);
    }

    #[test]
    fn test_run_of_32_fits_one_header() {
        let tokens: Vec<Token> = (0u8..32).map(Token::Literal).collect();
        let wire = encode_tokens(&tokens);
        assert_eq!(wire.len(), 33);
        assert_eq!(wire[0], 0x1F);
        assert_eq!(&wire[1..], (0u8..32).collect::<Vec<u8>>().as_slice());
    }

    #[test]
    fn test_run_of_33_splits() {
        let tokens: Vec<Token> = (0u8..33).map(Token::Literal).collect();
        let wire = encode_tokens(&tokens);
        assert_eq!(wire.len(), 35);
        assert_eq!(wire[0], 0x1F);
        assert_eq!(wire[33], 0x00); // fresh header for the 33rd literal
        assert_eq!(wire[34], 32);
    }

    #[test]
    fn test_short_form_layout() {
        // Smallest short form: length 4, distance 4
        let wire = encode_tokens(&[Token::Backref { length: 4, distance: 4 }]);
        assert_eq!(wire, vec![0x20, 0x03]);

        // Largest short form: length 9, distance 8192
        let wire = encode_tokens(&[Token::Backref { length: 9, distance: 8192 }]);
        assert_eq!(wire, vec![(6 << 5) | 0x1F, 0xFF]);
    }

    #[test]
    fn test_long_form_layout() {
        // Smallest long form: length 10, distance 1
        let wire = encode_tokens(&[Token::Backref { length: 10, distance: 1 }]);
        assert_eq!(wire, vec![0xE0, 0x01, 0x00]);

        let wire = encode_tokens(&[Token::Backref { length: 69, distance: 1 }]);
        assert_eq!(wire, vec![0xE0, 0x3C, 0x00]);

        // Largest long form: length 264, distance 8192
        let wire = encode_tokens(&[Token::Backref { length: 264, distance: 8192 }]);
        assert_eq!(wire, vec![0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_backref_closes_literal_run() {
        let tokens = vec![
            Token::Literal(b'a'),
            Token::Backref { length: 4, distance: 1 },
            Token::Literal(b'b'),
        ];
        let wire = encode_tokens(&tokens);
        // Run of 1, backref, then a fresh run of 1
        assert_eq!(wire, vec![0x00, b'a', 0x20, 0x00, 0x00, b'b']);
    }

    #[test]
    fn test_run_then_backref() {
        let tokens = vec![
            Token::Literal(0),
            Token::Literal(1),
            Token::Literal(2),
            Token::Literal(3),
            Token::Backref { length: 4, distance: 4 },
        ];
        assert_eq!(encode_tokens(&tokens), vec![0x03, 0x00, 0x01, 0x02, 0x03, 0x20, 0x03]);
    }
}
