//! Canonical Vimshottari tables.
//!
//! The ruler sequence, the period weight of each ruler in years, and the
//! fixed nakshatra-to-lord assignment. These are classical constants; the
//! nine weights sum to the 120-year cycle.

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// The nine dasha rulers in canonical cycle order, starting from Ketu.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Full Mahadasha length in years for each ruler, aligned with
/// [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of one complete Vimshottari cycle in years.
pub const TOTAL_CYCLE_YEARS: f64 = 120.0;

/// Lord of each of the 27 nakshatras, as an index into
/// [`VIMSHOTTARI_GRAHAS`].
///
/// Ashwini opens with Ketu and the nine lords then repeat in canonical
/// order three times around the wheel. The table is written out rather
/// than computed so the assignment reads as the fixed classical rule it
/// is, not an artifact of segment numbering.
pub const NAKSHATRA_LORDS: [u8; 27] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Ashwini..Ashlesha
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Magha..Jyeshtha
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Mula..Revati
];

/// Position of a graha in the canonical cycle order.
pub const fn canonical_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full Mahadasha length in years for a ruler.
pub const fn graha_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[canonical_position(graha)]
}

/// Dasha lord of a nakshatra.
pub const fn nakshatra_lord(nakshatra: Nakshatra) -> Graha {
    VIMSHOTTARI_GRAHAS[NAKSHATRA_LORDS[nakshatra as usize] as usize]
}
