#![allow(dead_code)]

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform samples drawn from `0..alphabet`, reproducible from `seed`.
pub fn random_sequence(len: usize, alphabet: u32, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<u32>() % alphabet).collect()
}

/// A walk with steps of -1, 0 or +1, producing long ramps and plateaus.
pub fn random_walk(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut value = 0i64;
    (0..len)
        .map(|_| {
            value += (rng.random::<u32>() % 3) as i64 - 1;
            value
        })
        .collect()
}

/// Bits of `value` as samples, most significant first.
pub fn binary_sequence(value: u32, width: usize) -> Vec<u8> {
    (0..width)
        .rev()
        .map(|bit| ((value >> bit) & 1) as u8)
        .collect()
}

/// Every sequence of a fixed length over `0..alphabet`, in counting order.
pub struct Odometer {
    digits: Vec<u8>,
    alphabet: u8,
    started: bool,
}

impl Odometer {
    pub fn new(len: usize, alphabet: u8) -> Self {
        Self {
            digits: vec![0; len],
            alphabet,
            started: false,
        }
    }

    /// Advance to the next sequence, `None` once all have been visited.
    pub fn next_sequence(&mut self) -> Option<&[u8]> {
        if !self.started {
            self.started = true;
            return Some(&self.digits);
        }
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.alphabet {
                return Some(&self.digits);
            }
            *digit = 0;
        }
        None
    }
}
