use log::debug;

use crate::bwt_algorithms::bwt_sort::bwt_encode;
use crate::models::{block_models, mixer::Mixer};
use crate::range_coding::range_coder::RangeEncoder;
use crate::tools::mtf::mtf_encode;
use crate::tools::rle0::rle0_encode;

use super::LEARNING_RATE;

/// Called by compress, this handles one block: BWT, MTF and RLE0, then a
/// bit-by-bit pass through the range coder under the model ensemble.
/// Returns the BWT primary index, the RLE0 symbol count, and the payload.
pub fn compress_block(block: &[u8]) -> (u32, u32, Vec<u8>) {
    let (primary, last) = bwt_encode(block);
    let mtf = mtf_encode(&last);
    let rle = rle0_encode(&mtf);

    // Fresh models and mixer per block; the decoder builds the same set
    let mut models = block_models();
    let mut mixer = Mixer::new(models.len(), LEARNING_RATE);
    let mut coder = RangeEncoder::new(rle.len());

    for &byte in &rle {
        for shift in (0..8).rev() {
            let bit = (byte >> shift) & 1;
            let p1 = mixer.mix(&models);
            coder.encode(bit, p1);
            // Weight update reads the pre-update predictions, so it must
            // run before the models see the bit
            mixer.update(&models, p1, bit);
            for model in models.iter_mut() {
                model.update_bit(bit);
            }
        }
        for model in models.iter_mut() {
            model.update_byte(byte);
        }
    }

    let payload = coder.finish();
    debug!(
        "         {} bytes in block, {} after BWT/MTF/RLE0, {} coded",
        block.len(),
        rle.len(),
        payload.len(),
    );
    (primary, rle.len() as u32, payload)
}
