//! Seeded pseudo-random number generator
//!
//! Keeps bot move selection deterministic and replayable: the same seed and
//! stream index always reproduce the same match.

/// xorshift64* generator with a fixed seeding scheme
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from a 32-byte seed and a stream index.
    ///
    /// The stream index separates independent sequences drawn from the same
    /// seed (one per match, typically).
    pub fn new(seed: &[u8; 32], stream: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }
        state ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);

        // Warm up so nearby seeds diverge before the first draw
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }
        rng
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Value in 0..100, for percentage rolls
    pub fn next_percent(&mut self) -> u8 {
        (self.next_u32() % 100) as u8
    }

    /// Value in `[0, max)`; returns 0 when `max` is 0
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}
