//! Stream decoder: reconstructs the original byte sequence from wire bytes.
//!
//! Single pass over the stream. Back-references are copied one byte at a
//! time because source and destination ranges may overlap (a run repeating
//! a pattern shorter than its own length); a block copy would read bytes
//! the copy has not produced yet.

use super::LONG_FORM_TAG;
use crate::error::{Error, Result};

/// Decode a complete wire stream back into the original bytes.
///
/// The stream must end exactly at a token boundary. A token that demands
/// more bytes than remain, or a back-reference that reaches before the
/// start of the output, is a decode fault.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(src.len() * 2);
    let mut i = 0;

    while i < src.len() {
        let header_offset = i;
        let header = src[i];
        i += 1;

        match header >> 5 {
            // 000LLLLL: literal run of L+1 raw bytes
            0 => {
                let run = (header & 0x1F) as usize + 1;
                if i + run > src.len() {
                    return Err(Error::TruncatedStream {
                        offset: header_offset,
                        needed: run,
                        remaining: src.len() - i,
                    });
                }
                out.extend_from_slice(&src[i..i + run]);
                i += run;
            }
            // 111aaaaa LLLLLLLL bbbbbbbb: long back-reference
            7 => {
                if i + 2 > src.len() {
                    return Err(Error::TruncatedStream {
                        offset: header_offset,
                        needed: 2,
                        remaining: src.len() - i,
                    });
                }
                let length = src[i] as usize + 9;
                let distance = (((header & !LONG_FORM_TAG) as usize) << 8 | src[i + 1] as usize) + 1;
                i += 2;
                copy_backref(&mut out, distance, length)?;
            }
            // LLLaaaaa bbbbbbbb: short back-reference
            _ => {
                if i >= src.len() {
                    return Err(Error::TruncatedStream {
                        offset: header_offset,
                        needed: 1,
                        remaining: 0,
                    });
                }
                let length = (header >> 5) as usize + 3;
                let distance = (((header & 0x1F) as usize) << 8 | src[i] as usize) + 1;
                i += 1;
                copy_backref(&mut out, distance, length)?;
            }
        }
    }

    Ok(out)
}

/// Append `length` bytes copied from `distance` bytes back in `out`,
/// byte by byte so overlapping copies repeat the produced pattern.
#[inline]
fn copy_backref(out: &mut Vec<u8>, distance: usize, length: usize) -> Result<()> {
    if distance > out.len() {
        return Err(Error::InvalidBackReference { distance, available: out.len() });
    }
    let mut pos = out.len() - distance;
    for _ in 0..length {
        let byte = out[pos];
        out.push(byte);
        pos += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert!(decompress(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_literal_run() {
        let wire = [0x04, b'h', b'e', b'l', b'l', b'o'];
        assert_eq!(decompress(&wire).unwrap(), b"hello");
    }

    #[test]
    fn test_decode_short_backref() {
        // "abcd" then copy 4 bytes from distance 4
        let wire = [0x03, b'a', b'b', b'c', b'd', 0x20, 0x03];
        assert_eq!(decompress(&wire).unwrap(), b"abcdabcd");
    }

    #[test]
    fn test_decode_long_backref_zero_run() {
        // One zero literal, then a 69-byte copy at distance 1
        let wire = [0x00, 0x00, 0xE0, 0x3C, 0x00];
        assert_eq!(decompress(&wire).unwrap(), vec![0u8; 70]);
    }

    #[test]
    fn test_overlapping_copy_repeats_pattern() {
        // "ab" then copy 6 bytes from distance 2: the source overlaps the
        // destination and must repeat the pattern
        let wire = [0x01, b'a', b'b', 3 << 5, 0x01];
        assert_eq!(decompress(&wire).unwrap(), b"abababab");
    }

    #[test]
    fn test_truncated_literal_run() {
        // Header claims 6 literals, none follow
        let err = decompress(&[0x05]).unwrap_err();
        assert!(matches!(err, Error::TruncatedStream { needed: 6, remaining: 0, .. }));
    }

    #[test]
    fn test_truncated_short_backref() {
        let err = decompress(&[0x20]).unwrap_err();
        assert!(matches!(err, Error::TruncatedStream { .. }));
    }

    #[test]
    fn test_truncated_long_backref() {
        let err = decompress(&[0xE0, 0x10]).unwrap_err();
        assert!(matches!(err, Error::TruncatedStream { .. }));
    }

    #[test]
    fn test_backref_before_output_start() {
        // One literal produced, then a short backref at distance 17
        let err = decompress(&[0x00, 0xAA, 0x20, 0x10]).unwrap_err();
        assert!(matches!(err, Error::InvalidBackReference { distance: 17, available: 1 }));
    }

    #[test]
    fn test_backref_into_empty_output() {
        let err = decompress(&[0x20, 0x00]).unwrap_err();
        assert!(matches!(err, Error::InvalidBackReference { distance: 1, available: 0 }));
    }
}
