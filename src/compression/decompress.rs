use std::fs::File;
use std::io::{self, Error, ErrorKind, Read, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, error, info};

use crate::bwt_algorithms::bwt_sort::bwt_decode;
use crate::models::{block_models, mixer::Mixer};
use crate::range_coding::range_coder::RangeDecoder;
use crate::tools::mtf::mtf_decode;
use crate::tools::rle0::rle0_decode;

use super::LEARNING_RATE;

/// Decompress the container at `in_path` into `out_path`, reading block
/// records until the file ends.
pub fn decompress(in_path: &str, out_path: &str) -> io::Result<()> {
    if !Path::new(in_path).exists() {
        return Err(Error::new(
            ErrorKind::NotFound,
            format!("input file {} is missing", in_path),
        ));
    }
    let mut f_in = File::open(in_path)?;
    let mut f_out = File::create(out_path)?;
    let timer = Instant::now();

    let full_size = read_u64(&mut f_in)?;

    let mut written = 0_u64;
    let mut block_counter = 0_usize;
    loop {
        // A clean end of file before the next record means we are done
        let block_len = match read_u32(&mut f_in) {
            Ok(len) => len,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        };
        let primary = read_u32(&mut f_in)?;
        let rle_count = read_u32(&mut f_in)?;
        let comp_size = read_u32(&mut f_in)?;

        let mut payload = vec![0_u8; comp_size as usize];
        f_in.read_exact(&mut payload)?;

        block_counter += 1;
        let block = decompress_block(&payload, primary, rle_count);
        if block.len() != block_len as usize {
            error!(
                "Block {} rebuilt {} bytes but its record claims {}. (Continuing...)",
                block_counter,
                block.len(),
                block_len
            );
        }
        f_out.write_all(&block)?;
        written += block.len() as u64;
        debug!(
            "Read block {}: {} bytes coded, {} bytes out.",
            block_counter,
            comp_size,
            block.len()
        );
    }

    if written != full_size {
        error!(
            "Stream rebuilt {} bytes but its header claims {}. (Data may be corrupt.)",
            written, full_size
        );
    }
    info!(
        "Decompressed {} blocks, {} bytes, in {:?}.",
        block_counter,
        written,
        timer.elapsed()
    );
    Ok(())
}

/// Inverse of compress_block: decode `rle_count` bytes bit by bit under a
/// fresh model ensemble, then undo RLE0, MTF and the BWT.
pub fn decompress_block(payload: &[u8], primary: u32, rle_count: u32) -> Vec<u8> {
    let mut models = block_models();
    let mut mixer = Mixer::new(models.len(), LEARNING_RATE);
    let mut decoder = RangeDecoder::new(payload);

    let mut rle = Vec::with_capacity(rle_count as usize);
    for _ in 0..rle_count {
        let mut byte = 0_u8;
        for shift in (0..8).rev() {
            let p1 = mixer.mix(&models);
            let bit = decoder.decode(p1);
            mixer.update(&models, p1, bit);
            for model in models.iter_mut() {
                model.update_bit(bit);
            }
            byte |= bit << shift;
        }
        rle.push(byte);
        for model in models.iter_mut() {
            model.update_byte(byte);
        }
    }

    let mtf = rle0_decode(&rle);
    let last = mtf_decode(&mtf);
    bwt_decode(primary, &last)
}

fn read_u32(reader: &mut impl Read) -> io::Result<u32> {
    let mut buf = [0_u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64(reader: &mut impl Read) -> io::Result<u64> {
    let mut buf = [0_u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}
