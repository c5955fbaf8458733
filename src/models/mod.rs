//! The models module holds the statistical ensemble that drives the range
//! coder in the srzip compressor.
//!
//! Eight models run side by side over the post-RLE0 byte stream:
//! - byte_context: bit counters keyed by the previous 1, 2, 3 or 4 bytes.
//! - bit_context: bit counters keyed by the previous 24 bits.
//! - match_model: window search for the longest recent repeat of the
//!   current context (context lengths 4 and 8).
//! - lzp: chained-position lookup predicting from the byte that followed
//!   the same two-byte context last time.
//!
//! Every model yields a 16-bit probability that the next bit is a one;
//! 32768 means "no information". The mixer folds the ensemble into the
//! single probability handed to the coder. The decoder replays the exact
//! same predictions, so all model state must evolve identically on both
//! sides.
//!
pub mod bit_context;
pub mod byte_context;
pub mod lzp;
pub mod match_model;
pub mod mixer;

pub use bit_context::BitContextModel;
pub use byte_context::ByteContextModel;
pub use lzp::LzpModel;
pub use match_model::MatchModel;

/// The model shapes in the ensemble, dispatched by a match rather than
/// trait objects - there are only four.
pub enum Model {
    ByteContext(ByteContextModel),
    BitContext(BitContextModel),
    Match(MatchModel),
    Lzp(LzpModel),
}

impl Model {
    /// Probability in [0, 65535] that the next coded bit is a one.
    pub fn predict(&self) -> u16 {
        match self {
            Model::ByteContext(m) => m.predict(),
            Model::BitContext(m) => m.predict(),
            Model::Match(m) => m.predict(),
            Model::Lzp(m) => m.predict(),
        }
    }

    /// Observe the bit that was just coded.
    pub fn update_bit(&mut self, bit: u8) {
        match self {
            Model::ByteContext(m) => m.update_bit(bit),
            Model::BitContext(m) => m.update_bit(bit),
            Model::Match(m) => m.update_bit(bit),
            Model::Lzp(_) => {}
        }
    }

    /// Observe a completed byte after all eight of its bits were coded.
    pub fn update_byte(&mut self, byte: u8) {
        match self {
            Model::ByteContext(m) => m.update_byte(byte),
            Model::BitContext(_) => {}
            Model::Match(m) => m.update_byte(byte),
            Model::Lzp(m) => m.update_byte(byte),
        }
    }
}

/// Construct the fixed ensemble for one block. The encoder and decoder
/// must build models in exactly this order, with this exact state, or the
/// replayed predictions diverge.
pub fn block_models() -> Vec<Model> {
    vec![
        Model::ByteContext(ByteContextModel::new(1)),
        Model::ByteContext(ByteContextModel::new(2)),
        Model::ByteContext(ByteContextModel::new(3)),
        Model::ByteContext(ByteContextModel::new(4)),
        Model::BitContext(BitContextModel::new(24)),
        Model::Match(MatchModel::new(4)),
        Model::Match(MatchModel::new(8)),
        Model::Lzp(LzpModel::new()),
    ]
}
