//! The tools module provides the byte-level transforms and the command line
//! surface for the srzip compressor.
//!
//! The tools are:
//! - cli: Command line interface for srzip.
//! - mtf: Move-To-Front transform over the full byte alphabet.
//! - rle0: Run-length encoding of the zero runs produced by the MTF stage.
//!
pub mod cli;
pub mod mtf;
pub mod rle0;
