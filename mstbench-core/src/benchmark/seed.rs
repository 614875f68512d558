//! Per-trial seed derivation.
//!
//! Every trial draws from its own `SmallRng` so trials can be generated on any
//! worker without changing the draws of the others.

/// SplitMix64 increment (the 64-bit golden ratio) used to space out streams.
const STREAM_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Independent random streams consumed by one trial.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum SeedStream {
    /// Lattice trimming draws.
    Generation,
    /// Edge weights and critical-link selection.
    Weights,
}

impl SeedStream {
    const fn salt(self) -> u64 {
        match self {
            Self::Generation => 1,
            Self::Weights => 2,
        }
    }
}

/// Derives the seed for `stream` of trial `trial` at `vertex_count`.
#[inline]
pub(super) fn trial_seed(
    base_seed: u64,
    vertex_count: usize,
    trial: usize,
    stream: SeedStream,
) -> u64 {
    let mut state = splitmix64(base_seed ^ stream.salt().wrapping_mul(STREAM_SPACING));
    state = splitmix64(state ^ (vertex_count as u64));
    splitmix64(state ^ (trial as u64))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(STREAM_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}
