//! The bwt_algorithms module forms the sorting subsystem for the srzip
//! compressor.
//!
//! The Burrows-Wheeler Transform permutes a block so that bytes with
//! similar following context end up adjacent, which makes the downstream
//! MTF and RLE0 stages effective. Sorting rotations is the expensive part:
//! a byte-walking comparator degenerates badly on runs of identical bytes,
//! so this module sorts by prefix-doubled ranks, which is insensitive to
//! the data.
//!
pub mod bwt_sort;
