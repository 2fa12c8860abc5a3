//! Compression of independent color planes.
//!
//! An image pipeline hands over one byte sequence per RGB channel. Each
//! plane compresses with no shared state, so the three calls run on scoped
//! worker threads when the host has more than one core; output order always
//! matches input order.

use crate::error::{Error, Result};
use crate::lzf::compress;

/// Number of color planes in an RGB image
pub const PLANE_COUNT: usize = 3;

/// Compress three color planes, in parallel when cores allow.
///
/// Each plane is an independent stream; decompressing the returned
/// sequences individually yields the original planes.
pub fn compress_planes(planes: [&[u8]; PLANE_COUNT]) -> Result<[Vec<u8>; PLANE_COUNT]> {
    if num_cpus::get() == 1 {
        return Ok(planes.map(compress));
    }

    let joined = crossbeam::scope(|scope| {
        let handles = planes.map(|plane| scope.spawn(move |_| compress(plane)));
        handles.map(|handle| handle.join())
    })
    .map_err(|_| Error::Internal("plane worker panicked".to_string()))?;

    let [r, g, b] = joined;
    let worker_failed = || Error::Internal("plane worker panicked".to_string());
    Ok([
        r.map_err(|_| worker_failed())?,
        g.map_err(|_| worker_failed())?,
        b.map_err(|_| worker_failed())?,
    ])
}
