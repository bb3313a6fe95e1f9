//! yz-bench: shared fixtures for the criterion benchmarks.

use yz_core::Roll;

/// Deterministic legal rolls (xorshift64, no rand dependency).
pub fn gen_rolls(n: usize) -> Vec<Roll> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut d = [0u8; 5];
        for face in d.iter_mut() {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *face = (x % 6) as u8 + 1;
        }
        out.push(Roll::new(d));
    }
    out
}
