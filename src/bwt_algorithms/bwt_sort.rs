use log::trace;

/// Burrows-Wheeler-Transform of one block. Sorts all rotations of the block
/// (comparison wraps modulo the block length) by doubling the compared
/// prefix length each pass, so runs of identical bytes cost no extra work.
/// Returns the primary index - the sorted position of the rotation that
/// starts at offset 0 - and the last column of the sorted rotation matrix.
pub fn bwt_encode(block: &[u8]) -> (u32, Vec<u8>) {
    let n = block.len();
    if n == 0 {
        return (0, Vec::new());
    }

    // Rotation start offsets, sorted below
    let mut index: Vec<u32> = (0..n as u32).collect();
    // rank[i] is the sort rank of the rotation starting at i, refined from
    // single bytes to ever longer prefixes
    let mut rank: Vec<u32> = block.iter().map(|&b| u32::from(b)).collect();
    let mut next_rank = vec![0_u32; n];

    let mut width = 1;
    loop {
        {
            let pair = |i: usize| (rank[i], rank[(i + width) % n]);
            index.sort_unstable_by_key(|&i| pair(i as usize));

            // Re-rank: equal pairs share a rank. Identical rotations keep
            // equal ranks forever, which is fine - they produce the same
            // output row either way.
            next_rank[index[0] as usize] = 0;
            for j in 1..n {
                let prev = index[j - 1] as usize;
                let cur = index[j] as usize;
                next_rank[cur] = next_rank[prev] + u32::from(pair(cur) != pair(prev));
            }
        }
        std::mem::swap(&mut rank, &mut next_rank);

        if rank[index[n - 1] as usize] as usize == n - 1 || width >= n {
            break;
        }
        width *= 2;
    }
    trace!("Sorted {} rotations at width {}.", n, width);

    // Emit the last column and find the primary index
    let mut primary = 0_u32;
    let mut last = vec![0_u8; n];
    for (i, &j) in index.iter().enumerate() {
        let j = j as usize;
        if j == 0 {
            primary = i as u32;
        }
        last[i] = block[(j + n - 1) % n];
    }
    (primary, last)
}

/// Decode a Burrows-Wheeler-Transform with the LF mapping: count each byte,
/// turn the counts into cumulative offsets, build the next-row permutation,
/// then walk it from the primary row.
pub fn bwt_decode(primary: u32, last: &[u8]) -> Vec<u8> {
    let n = last.len();
    if n == 0 {
        return Vec::new();
    }

    let mut count = [0_u32; 256];
    for &byte in last {
        count[byte as usize] += 1;
    }

    // Cumulative start offset of each byte value in the first column
    let mut pos = [0_u32; 256];
    for c in 1..256 {
        pos[c] = pos[c - 1] + count[c - 1];
    }

    // next[k] points at the row holding the byte that follows last[k]
    let mut next = vec![0_u32; n];
    for (i, &byte) in last.iter().enumerate() {
        next[pos[byte as usize] as usize] = i as u32;
        pos[byte as usize] += 1;
    }

    let mut idx = next[primary as usize];
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(last[idx as usize]);
        idx = next[idx as usize];
    }
    out
}
