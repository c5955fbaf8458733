/// Binary range coder over a 32-bit interval. The probability argument is
/// the chance the coded bit is a one, scaled to [0, 65535]; the split-point
/// product is taken in 64 bits before the shift so it cannot overflow.
pub struct RangeEncoder {
    low: u32,
    high: u32,
    follow: u32,
    pub output: Vec<u8>,
}

impl RangeEncoder {
    pub fn new(capacity: usize) -> Self {
        Self {
            low: 0,
            high: 0xFFFF_FFFF,
            follow: 0,
            output: Vec::with_capacity(capacity),
        }
    }

    pub fn encode(&mut self, bit: u8, p1: u16) {
        let range = u64::from(self.high - self.low) + 1;
        let bound = self.low + ((range * u64::from(0xFFFF - p1)) >> 16) as u32;
        if bit == 1 {
            self.low = bound + 1;
        } else {
            self.high = bound;
        }
        loop {
            if (self.high & 0xFF00_0000) == (self.low & 0xFF00_0000) {
                // Top byte settled: emit it, then release any pending
                // carry bytes as its complement
                let byte = (self.high >> 24) as u8;
                self.output.push(byte);
                for _ in 0..self.follow {
                    self.output.push(!byte);
                }
                self.follow = 0;
                self.low <<= 8;
                self.high = (self.high << 8) | 0xFF;
            } else if self.low & 0x8000_0000 != 0 && self.high & 0x8000_0000 == 0 {
                // Straddle of the interval midpoint: defer one byte
                self.follow += 1;
                self.low = (self.low << 1) & 0x7FFF_FFFF;
                self.high = ((self.high ^ 0x8000_0000) << 1) | 1;
            } else {
                break;
            }
        }
    }

    /// Flush the remaining state and hand back the payload. Four bytes of
    /// `low` pin the final interval for the decoder.
    pub fn finish(mut self) -> Vec<u8> {
        for _ in 0..4 {
            self.output.push((self.low >> 24) as u8);
            self.low <<= 8;
        }
        self.output
    }
}

/// Decoding side of the range coder. Mirrors the encoder's interval
/// arithmetic exactly; the payload length is known externally, so reads
/// past the end simply yield zero bytes.
pub struct RangeDecoder<'a> {
    low: u32,
    high: u32,
    code: u32,
    input: &'a [u8],
    pos: usize,
}

impl<'a> RangeDecoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        let mut dec = Self {
            low: 0,
            high: 0xFFFF_FFFF,
            code: 0,
            input,
            pos: 0,
        };
        for _ in 0..4 {
            dec.code = (dec.code << 8) | u32::from(dec.next_byte());
        }
        dec
    }

    fn next_byte(&mut self) -> u8 {
        let byte = self.input.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        byte
    }

    pub fn decode(&mut self, p1: u16) -> u8 {
        let range = u64::from(self.high - self.low) + 1;
        let bound = self.low + ((range * u64::from(0xFFFF - p1)) >> 16) as u32;
        let bit;
        if self.code <= bound {
            bit = 0;
            self.high = bound;
        } else {
            bit = 1;
            self.low = bound + 1;
        }
        loop {
            if (self.high & 0xFF00_0000) == (self.low & 0xFF00_0000) {
                self.low <<= 8;
                self.high = (self.high << 8) | 0xFF;
                self.code = (self.code << 8) | u32::from(self.next_byte());
            } else if self.low & 0x8000_0000 != 0 && self.high & 0x8000_0000 == 0 {
                self.low = (self.low << 1) & 0x7FFF_FFFF;
                self.high = ((self.high ^ 0x8000_0000) << 1) | 1;
                self.code = ((self.code ^ 0x8000_0000) << 1) | u32::from(self.next_byte() & 1);
            } else {
                break;
            }
        }
        bit
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn symmetry_fixed_probability() {
        let bits: Vec<u8> = (0..2048_u32).map(|i| ((i * 7) ^ (i >> 3)) as u8 & 1).collect();
        let mut enc = RangeEncoder::new(512);
        for &bit in &bits {
            enc.encode(bit, 32768);
        }
        let payload = enc.finish();
        let mut dec = RangeDecoder::new(&payload);
        for &bit in &bits {
            assert_eq!(dec.decode(32768), bit);
        }
    }

    #[test]
    fn symmetry_varied_probabilities() {
        // Same deterministic probability schedule on both sides
        let bits: Vec<u8> = (0..4096_u32).map(|i| ((i / 5) ^ (i * 3)) as u8 & 1).collect();
        let probs: Vec<u16> = (0..4096_u32).map(|i| (2000 + (i * 37) % 60000) as u16).collect();

        let mut enc = RangeEncoder::new(1024);
        for (&bit, &p1) in bits.iter().zip(&probs) {
            enc.encode(bit, p1);
        }
        let payload = enc.finish();

        let mut dec = RangeDecoder::new(&payload);
        for (&bit, &p1) in bits.iter().zip(&probs) {
            assert_eq!(dec.decode(p1), bit);
        }
    }

    #[test]
    fn skewed_stream_compresses() {
        // 0-heavy bits coded with a matching 0-heavy probability should
        // take far less than a bit each
        let bits: Vec<u8> = (0..8192_u32).map(|i| u8::from(i % 100 == 0)).collect();
        let mut enc = RangeEncoder::new(256);
        for &bit in &bits {
            enc.encode(bit, 1000);
        }
        let payload = enc.finish();
        assert!(payload.len() < 8192 / 8 / 2);

        let mut dec = RangeDecoder::new(&payload);
        for &bit in &bits {
            assert_eq!(dec.decode(1000), bit);
        }
    }

    #[test]
    fn reads_past_payload_end_as_zeros() {
        let mut dec = RangeDecoder::new(&[]);
        // Nothing to read: code is zero and every decode still terminates
        for _ in 0..64 {
            let bit = dec.decode(32768);
            assert!(bit <= 1);
        }
    }
}
