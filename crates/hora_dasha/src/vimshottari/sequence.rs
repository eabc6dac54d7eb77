//! Rotation of the canonical ruler sequence.

use crate::graha::Graha;
use crate::vimshottari::data::{VIMSHOTTARI_GRAHAS, canonical_position};

/// The nine rulers in cycle order, rotated so `seed` comes first.
///
/// Every ruler appears exactly once and consecutive entries keep their
/// canonical adjacency, wrapping past Buddh back to Ketu.
pub const fn rotate_from(seed: Graha) -> [Graha; 9] {
    let start = canonical_position(seed);
    let mut seq = VIMSHOTTARI_GRAHAS;
    let mut i = 0;
    while i < 9 {
        seq[i] = VIMSHOTTARI_GRAHAS[(start + i) % 9];
        i += 1;
    }
    seq
}
