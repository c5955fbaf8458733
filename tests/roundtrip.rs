//! End-to-end container scenarios: compress a file, decompress it, and
//! check the bytes and the container fields along the way.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use srzip::compression::compress::compress;
use srzip::compression::decompress::decompress;
use srzip::compression::BLOCK_SIZE;

/// One parsed block record: (block_len, primary, rle_count, comp_size).
type Record = (u32, u32, u32, u32);

/// Split a container into its stream size and block records.
fn parse_container(bytes: &[u8]) -> (u64, Vec<Record>) {
    let full_size = u64::from_le_bytes(bytes[..8].try_into().unwrap());
    let mut records = Vec::new();
    let mut at = 8;
    while at < bytes.len() {
        let field = |i: usize| u32::from_le_bytes(bytes[i..i + 4].try_into().unwrap());
        let (block_len, primary, rle_count, comp_size) =
            (field(at), field(at + 4), field(at + 8), field(at + 12));
        records.push((block_len, primary, rle_count, comp_size));
        at += 16 + comp_size as usize;
    }
    assert_eq!(at, bytes.len(), "container has trailing garbage");
    (full_size, records)
}

fn roundtrip(dir: &Path, name: &str, data: &[u8]) -> Vec<u8> {
    let input = dir.join(name);
    let container = dir.join(format!("{}.srr", name));
    let output = dir.join(format!("{}.out", name));
    fs::write(&input, data).unwrap();

    compress(input.to_str().unwrap(), container.to_str().unwrap()).unwrap();
    decompress(container.to_str().unwrap(), output.to_str().unwrap()).unwrap();

    assert_eq!(fs::read(&output).unwrap(), data);
    fs::read(&container).unwrap()
}

#[test]
fn empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let container = roundtrip(dir.path(), "empty", b"");

    // Just the stream size, no block records
    let (full_size, records) = parse_container(&container);
    assert_eq!(full_size, 0);
    assert!(records.is_empty());
    assert_eq!(container.len(), 8);
}

#[test]
fn single_byte() {
    let dir = tempfile::tempdir().unwrap();
    let container = roundtrip(dir.path(), "one", b"A");

    let (full_size, records) = parse_container(&container);
    assert_eq!(full_size, 1);
    assert_eq!(records.len(), 1);
    let (block_len, primary, _, _) = records[0];
    assert_eq!(block_len, 1);
    assert_eq!(primary, 0);
}

#[test]
fn banana() {
    let dir = tempfile::tempdir().unwrap();
    roundtrip(dir.path(), "banana", b"banana");
}

#[test]
fn zeros_compress_hard() {
    let dir = tempfile::tempdir().unwrap();
    let data = vec![0_u8; 100 * 1024];
    let container = roundtrip(dir.path(), "zeros", &data);

    let (_, records) = parse_container(&container);
    assert_eq!(records.len(), 1);
    let (block_len, _, _, comp_size) = records[0];
    assert_eq!(block_len as usize, data.len());
    assert!((comp_size as f64) < 0.05 * f64::from(block_len));
}

#[test]
fn random_data_survives() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = vec![0_u8; 100 * 1024];
    StdRng::seed_from_u64(0x5EED).fill_bytes(&mut data);
    // Incompressible input may grow; it only has to round-trip
    roundtrip(dir.path(), "random", &data);
}

#[test]
fn multi_block_container_parses() {
    let dir = tempfile::tempdir().unwrap();
    let data = "All work and no play makes Jack a dull boy. "
        .repeat(6000)
        .into_bytes();
    assert!(data.len() > 2 * BLOCK_SIZE);
    let container = roundtrip(dir.path(), "multi", &data);

    let (full_size, records) = parse_container(&container);
    assert_eq!(full_size, data.len() as u64);
    assert_eq!(records.len(), (data.len() + BLOCK_SIZE - 1) / BLOCK_SIZE);
    let mut total = 0_u64;
    for &(block_len, primary, _, _) in &records {
        assert!(block_len as usize <= BLOCK_SIZE);
        assert!(primary < block_len);
        total += u64::from(block_len);
    }
    assert_eq!(total, full_size);
}

#[test]
fn concatenated_containers_decode_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = b"The first stream, compressed on its own.".to_vec();
    let second = "And a second stream with rather different content: 1234567890. "
        .repeat(50)
        .into_bytes();

    let container_a = roundtrip(dir.path(), "a", &first);
    let container_b = roundtrip(dir.path(), "b", &second);

    // Stitch the two containers' records under one combined stream size
    let mut combined = ((first.len() + second.len()) as u64).to_le_bytes().to_vec();
    combined.extend_from_slice(&container_a[8..]);
    combined.extend_from_slice(&container_b[8..]);

    let joined = dir.path().join("joined.srr");
    let output = dir.path().join("joined.out");
    fs::write(&joined, &combined).unwrap();
    decompress(joined.to_str().unwrap(), output.to_str().unwrap()).unwrap();

    let mut expected = first;
    expected.extend_from_slice(&second);
    assert_eq!(fs::read(&output).unwrap(), expected);
}

#[test]
fn deterministic_output() {
    let dir = tempfile::tempdir().unwrap();
    let data = "determinism check ".repeat(500).into_bytes();
    let a = roundtrip(dir.path(), "det1", &data);
    let b = roundtrip(dir.path(), "det2", &data);
    assert_eq!(a, b);
}

#[test]
fn compress_refuses_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.srr");
    fs::write(&input, b"data").unwrap();
    fs::write(&output, b"already here").unwrap();

    let err = compress(input.to_str().unwrap(), output.to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    // The existing file is left alone
    assert_eq!(fs::read(&output).unwrap(), b"already here");
}

#[test]
fn compress_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let output = dir.path().join("out.srr");
    let err = compress(missing.to_str().unwrap(), output.to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn decompress_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.srr");
    let output = dir.path().join("out.txt");
    let err = decompress(missing.to_str().unwrap(), output.to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
