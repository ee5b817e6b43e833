//! Seeded pseudo-random numbers for synthetic series.

/// Non-zero fallback state; xorshift never leaves the all-zero state.
const ZERO_STATE_REPLACEMENT: u32 = 0x9E37_79B9;

/// xorshift32 generator seeded from a string.
///
/// The same seed always yields the same sequence; nothing is drawn from the
/// clock or the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Seed from the FNV-1a hash of `seed`.
    pub fn from_seed(seed: &str) -> Self {
        let hash = fnv1a(seed);
        Self {
            state: if hash == 0 { ZERO_STATE_REPLACEMENT } else { hash },
        }
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        f64::from(x) / (f64::from(u32::MAX) + 1.0)
    }
}

fn fnv1a(input: &str) -> u32 {
    input.bytes().fold(0x811C_9DC5_u32, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
    })
}
