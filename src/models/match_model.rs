use std::collections::HashMap;

/// Bytes of recent history kept in the search window.
const WINDOW_SIZE: usize = 1 << 20;

/// Predicts the next bit from the last place the current byte context
/// occurred. A hash table maps each `context_size`-byte context to the most
/// recent window position that followed it; while a match is live the model
/// leans toward the bits of the remembered byte, more strongly the longer
/// the match has held.
pub struct MatchModel {
    context_size: usize,
    buffer: Vec<u8>,
    buf_pos: usize,
    last_pos: HashMap<u64, usize>,
    match_pos: Option<usize>,
    match_len: usize,
    bit_pos: usize,
}

impl MatchModel {
    pub fn new(context_size: usize) -> Self {
        Self {
            context_size,
            buffer: vec![0; WINDOW_SIZE],
            buf_pos: 0,
            last_pos: HashMap::new(),
            match_pos: None,
            match_len: 0,
            bit_pos: 0,
        }
    }

    pub fn predict(&self) -> u16 {
        let pos = match self.match_pos {
            Some(pos) if self.match_len >= 1 => pos,
            _ => return 32768,
        };

        let next_byte = self.buffer[(pos + self.match_len) % WINDOW_SIZE];
        let next_bit = (next_byte >> (7 - self.bit_pos)) & 1;

        let confidence: i32 = match self.match_len {
            1 => 256,
            2 => 1024,
            3 => 4096,
            _ => 8192,
        };

        let p = if next_bit == 1 {
            32768 + confidence
        } else {
            32768 - confidence
        };
        p.clamp(1, 65534) as u16
    }

    pub fn update_bit(&mut self, _bit: u8) {
        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.bit_pos = 0;
            // A byte boundary: the live match advances one byte, and dies
            // if it has somehow covered the whole window
            if self.match_len > 0 {
                if let Some(pos) = self.match_pos {
                    self.match_pos = Some((pos + 1) % WINDOW_SIZE);
                    self.match_len += 1;
                    if self.match_len >= WINDOW_SIZE {
                        self.match_len = 0;
                        self.match_pos = None;
                    }
                }
            }
        }
    }

    pub fn update_byte(&mut self, byte: u8) {
        self.buffer[self.buf_pos] = byte;

        // Until context_size bytes are in the window there is no context
        // to hash; the match state is deliberately left untouched.
        if self.buf_pos >= self.context_size {
            let base = self.buf_pos - self.context_size;
            let mut key = 0_u64;
            for i in 0..self.context_size {
                key = (key << 8) | u64::from(self.buffer[(base + i) % WINDOW_SIZE]);
            }

            match self.last_pos.get(&key) {
                Some(&seen) => {
                    self.match_pos = Some(seen);
                    self.match_len = 1;
                    self.bit_pos = 0;
                }
                None => {
                    self.match_pos = None;
                    self.match_len = 0;
                    self.bit_pos = 0;
                }
            }

            self.last_pos.insert(key, self.buf_pos);
        }

        self.buf_pos = (self.buf_pos + 1) % WINDOW_SIZE;
    }
}
