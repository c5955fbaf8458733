use std::fs::File;
use std::io::{self, Error, ErrorKind, Read, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use super::compress_block::compress_block;
use super::BLOCK_SIZE;

/// Compress the file at `in_path` into a container at `out_path`. The whole
/// input is read up front, split into blocks, and each block is written as
/// one self-describing record. Refuses to overwrite an existing output.
pub fn compress(in_path: &str, out_path: &str) -> io::Result<()> {
    if Path::new(out_path).exists() {
        return Err(Error::new(
            ErrorKind::AlreadyExists,
            format!("output file {} already exists", out_path),
        ));
    }

    // Read all the data. The engine has no streaming mode.
    let mut input = Vec::new();
    File::open(in_path)?.read_to_end(&mut input)?;

    let mut f_out = File::create(out_path)?;
    let timer = Instant::now();

    // Stream prefix: total original byte count across all blocks
    f_out.write_all(&(input.len() as u64).to_le_bytes())?;

    let mut compressed_total = 0_usize;
    for (sequence, block) in input.chunks(BLOCK_SIZE).enumerate() {
        let (primary, rle_count, payload) = compress_block(block);

        f_out.write_all(&(block.len() as u32).to_le_bytes())?;
        f_out.write_all(&primary.to_le_bytes())?;
        f_out.write_all(&rle_count.to_le_bytes())?;
        f_out.write_all(&(payload.len() as u32).to_le_bytes())?;
        f_out.write_all(&payload)?;

        compressed_total += payload.len();
        debug!(
            "Wrote block {}: {} bytes in, {} bytes coded.",
            sequence + 1,
            block.len(),
            payload.len()
        );
    }

    info!(
        "Compressed {} bytes to {} bytes of payload in {:?}.",
        input.len(),
        compressed_total,
        timer.elapsed()
    );
    Ok(())
}
