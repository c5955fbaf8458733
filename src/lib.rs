//! A block-sorting, context-mixing file compressor.
//!
//! - Compresses byte streams with a BWT -> MTF -> RLE0 front end and a
//!   binary range coder driven by a mixed ensemble of statistical models.
//! - Strictly single-threaded; each call owns all of its state.
//! - The container format is a stream size followed by self-describing
//!   block records, so a decoder simply reads records until the file ends.
//!
//! Basic usage to compress a file:
//!
//! ```text
//! $> srzip -z notes.txt
//! ```
//! This creates the container file notes.txt.srr.
//!
//! Basic usage to decompress a file:
//!
//! ```text
//! $> srzip -d notes.txt.srr
//! ```
//!
//! Help is available by entering:
//!
//! ```text
//! $> srzip --help
//! ```
pub mod bwt_algorithms;
pub mod compression;
pub mod models;
pub mod range_coding;
pub mod tools;
