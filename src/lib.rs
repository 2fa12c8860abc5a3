//! LZF-style compression for color-plane image data.
//!
//! The codec turns one opaque byte sequence into a packed stream of literal
//! runs and back-references, and reconstructs it losslessly. It was built
//! for image pipelines that split an RGB image into three independent
//! channel planes and compress each one, but any byte sequence works; the
//! codec places no constraint on where its input comes from.
//!
//! The wire format has no header, length prefix or checksum: the decoder
//! relies on the stream ending exactly at buffer exhaustion. Callers that
//! need integrity or length metadata wrap the codec externally.

pub mod error;
pub mod lzf;
pub mod planes;

pub use error::{Error, Result};
pub use lzf::{compress, compress_with_stats, decompress, Token};
pub use planes::{compress_planes, PLANE_COUNT};

/// Statistics from a single compression call
#[derive(Clone, Debug, Default)]
pub struct CompressStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Literal tokens emitted (bytes not covered by any match)
    pub literals: u64,
    /// Back-reference tokens emitted
    pub backrefs: u64,
}

impl CompressStats {
    /// Output size as a fraction of input size; 0.0 for empty input
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let stats = CompressStats { input_bytes: 200, output_bytes: 50, ..Default::default() };
        assert_eq!(stats.ratio(), 0.25);
        assert_eq!(CompressStats::default().ratio(), 0.0);
    }
}
