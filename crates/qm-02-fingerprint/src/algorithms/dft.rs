//! # Discrete Fourier Transform
//!
//! Direct O(n²) evaluation. Fingerprints are short (tens of amplitudes), so a
//! plain loop over precomputed twiddles is enough.

use shared_types::Amplitude;
use std::f64::consts::PI;

/// `X_k = 1/√N · Σ_n x_n · e^{-2πi·kn/N}`
///
/// The `1/√N` factor makes the transform unitary, so the input norm is
/// preserved.
pub fn unitary_dft(input: &[Amplitude]) -> Vec<Amplitude> {
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }

    let twiddles: Vec<Amplitude> = (0..n)
        .map(|j| Amplitude::from_phase(-2.0 * PI * j as f64 / n as f64))
        .collect();
    let scale = 1.0 / (n as f64).sqrt();

    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .fold(Amplitude::ZERO, |acc, (j, x)| acc + *x * twiddles[(k * j) % n])
                .scale(scale)
        })
        .collect()
}
