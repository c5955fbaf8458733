//! The compression module manages both directions of the srzip pipeline.
//!
//! Compression happens in the following steps, per block:
//! - Burrows Wheeler Transform: sort the data so identical bytes cluster.
//! - Move To Front transform: turn the clusters into runs of small ranks.
//! - Run Length Encoding of zeros: collapse the rank-0 runs.
//! - Range coding: code the result bit by bit under a mixed prediction
//!   from eight context models.
//!
//! Decompression follows the inverse of the compression process: decode
//! the bits back into the RLE0 stream, expand the zero runs, undo the MTF
//! ranks, and walk the BWT permutation back to the original block.
//!
//! The container is a stream-level original size followed by one record
//! per block: block length, BWT primary index, RLE0 symbol count, payload
//! size, payload. All integers little-endian. The predictors and mixer
//! restart fresh for every block, so records from different streams can be
//! concatenated under a combined stream size and still decode.
//!
pub mod compress;
pub mod compress_block;
pub mod decompress;

/// Largest number of input bytes compressed as a single block.
pub const BLOCK_SIZE: usize = 100 * 1024;

/// Mixer learning rate used identically by both sides of the pipeline.
pub const LEARNING_RATE: f64 = 0.001;
