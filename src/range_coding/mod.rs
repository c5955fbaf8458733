//! The range_coding module is the entropy-coding back end of the srzip
//! compressor.
//!
//! A binary arithmetic coder narrows a 32-bit [low, high] interval one bit
//! at a time, splitting it at the mixed probability supplied by the model
//! ensemble. Settled leading bytes are emitted as soon as low and high
//! agree on them, so the state never loses precision while the payload
//! streams out.
//!
pub mod range_coder;
