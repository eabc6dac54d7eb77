//! Opening balance of the first Mahadasha.
//!
//! The Moon's position within its birth nakshatra decides how much of the
//! first period remains: a birth at the segment start receives the lord's
//! full weight, a birth near the end almost nothing.

use crate::error::DashaError;
use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::vimshottari::data::{graha_years, nakshatra_lord};
use crate::vimshottari::types::DAYS_PER_YEAR;

/// The first-Mahadasha entry state for a birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// Nakshatra occupied by the Moon at birth.
    pub nakshatra: Nakshatra,
    /// Lord of that nakshatra; ruler of the opening Mahadasha.
    pub lord: Graha,
    /// Pada of the Moon within the nakshatra, 1..=4.
    pub pada: u8,
    /// Fraction of the nakshatra already traversed at birth, [0, 1).
    pub fraction: f64,
    /// Remaining span of the opening Mahadasha in dasha years.
    ///
    /// Scaled by the lord's own weight: two births at the same fraction
    /// of different nakshatras get different balances when the lords
    /// differ. That asymmetry is the classical rule, not an accident.
    pub balance_years: f64,
}

impl BirthBalance {
    pub fn balance_days(&self) -> f64 {
        self.balance_years * DAYS_PER_YEAR
    }
}

/// Compute the opening balance from the Moon's sidereal longitude.
///
/// Accepts any finite longitude in degrees; values outside [0, 360) wrap.
pub fn birth_balance(moon_sidereal_lon: f64) -> Result<BirthBalance, DashaError> {
    if !moon_sidereal_lon.is_finite() {
        return Err(DashaError::InvalidInput("moon longitude must be finite"));
    }

    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let lord = nakshatra_lord(info.nakshatra);
    let balance_years = graha_years(lord) * (1.0 - info.fraction);

    Ok(BirthBalance {
        nakshatra: info.nakshatra,
        lord,
        pada: info.pada,
        fraction: info.fraction,
        balance_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;

    #[test]
    fn early_ashwini_keeps_most_of_ketu() {
        let bal = birth_balance(5.0).unwrap();
        assert_eq!(bal.nakshatra, Nakshatra::Ashwini);
        assert_eq!(bal.lord, Graha::Ketu);
        assert_eq!(bal.pada, 2);
        assert!((bal.fraction - 0.375).abs() < 1e-12);
        assert!(
            (bal.balance_years - 4.375).abs() < 1e-12,
            "7y * (1 - 0.375) = 4.375y, got {}",
            bal.balance_years
        );
        assert!((bal.balance_days() - 1597.96875).abs() < 1e-8);
    }

    #[test]
    fn segment_start_gets_full_weight() {
        let bal = birth_balance(0.0).unwrap();
        assert_eq!(bal.lord, Graha::Ketu);
        assert_eq!(bal.balance_years, 7.0);
    }

    #[test]
    fn segment_end_gets_almost_nothing() {
        let bal = birth_balance(NAKSHATRA_SPAN - 1e-9).unwrap();
        assert_eq!(bal.lord, Graha::Ketu);
        assert!(bal.balance_years > 0.0);
        assert!(bal.balance_years < 1e-6, "near the segment end the balance should vanish");
    }

    #[test]
    fn same_fraction_different_lords_scale_differently() {
        // Halfway through Ashwini (Ketu, 7y) vs halfway through Bharani
        // (Shukra, 20y).
        let ketu = birth_balance(NAKSHATRA_SPAN / 2.0).unwrap();
        let shukra = birth_balance(NAKSHATRA_SPAN * 1.5).unwrap();
        assert!((ketu.balance_years - 3.5).abs() < 1e-9);
        assert!((shukra.balance_years - 10.0).abs() < 1e-9);
    }

    #[test]
    fn negative_longitude_wraps_into_revati() {
        let bal = birth_balance(-1.0).unwrap();
        assert_eq!(bal.nakshatra, Nakshatra::Revati);
        assert_eq!(bal.lord, Graha::Buddh);
    }

    #[test]
    fn balance_bounded_by_lords_weight() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let bal = birth_balance(lon).unwrap();
            let weight = graha_years(bal.lord);
            assert!(
                bal.balance_years > 0.0 && bal.balance_years <= weight,
                "balance at lon {lon} out of (0, {weight}]: {}",
                bal.balance_years
            );
            lon += 0.83;
        }
    }

    #[test]
    fn non_finite_longitude_is_rejected() {
        assert!(birth_balance(f64::NAN).is_err());
        assert!(birth_balance(f64::INFINITY).is_err());
        assert!(birth_balance(f64::NEG_INFINITY).is_err());
    }
}
