use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Difference equation evaluated over the whole input sequence at once
///
/// `a[0]*y[n] = sum(b[i]*x[n-i]) - sum(a[i]*y[n-i], i >= 1)`, with samples
/// before the start of the sequence taken as zero. Terms are accumulated in
/// the same order as the streaming filter so results match to rounding.
pub fn lfilter(b: &[f32], a: &[f32], x: &[f32]) -> Vec<f32> {
    let mut y = vec![0.0f32; x.len()];
    for n in 0..x.len() {
        let mut acc = 0.0f32;
        for (i, &bi) in b.iter().enumerate() {
            let past = if n >= i { x[n - i] } else { 0.0 };
            acc += bi * past;
        }
        for (i, &ai) in a.iter().enumerate().skip(1) {
            let past = if n >= i { y[n - i] } else { 0.0 };
            acc -= ai * past;
        }
        y[n] = acc / a[0];
    }
    y
}

/// Uniform samples in [-1, 1) from a fixed seed
pub fn random_signal(seed: u64, len: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<f32>() * 2.0 - 1.0).collect()
}
