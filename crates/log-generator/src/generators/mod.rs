//! Sampling primitives shared by the record builders.

pub mod numeric;
pub mod request_id;
pub mod timestamp;

use rand::Rng;

/// Pick one entry uniformly from a pool.
///
/// Weighted pools repeat entries, so uniform picking reproduces their
/// relative frequencies. The pool must not be empty.
pub fn pick<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    let idx = rng.random_range(0..pool.len());
    &pool[idx]
}

/// Pick a string from a pool when a coin with the given probability lands,
/// otherwise return `fallback`.
pub fn pick_or<R: Rng>(rng: &mut R, probability: f64, pool: &[&str], fallback: &str) -> String {
    if rng.random_bool(probability) {
        pick(rng, pool).to_string()
    } else {
        fallback.to_string()
    }
}
