//! Nakshatra geometry: 27 equal segments of the sidereal zodiac.
//!
//! Each nakshatra spans 360/27 = 13°20' and divides into four padas.
//! Locating a longitude is pure arithmetic; no ephemeris is involved.

use crate::util::normalize_360;

/// Angular span of one nakshatra in degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Angular span of one pada (quarter nakshatra) in degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras in zodiacal order, Ashwini first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Nakshatra {
    Ashwini = 0,
    Bharani = 1,
    Krittika = 2,
    Rohini = 3,
    Mrigashira = 4,
    Ardra = 5,
    Punarvasu = 6,
    Pushya = 7,
    Ashlesha = 8,
    Magha = 9,
    PurvaPhalguni = 10,
    UttaraPhalguni = 11,
    Hasta = 12,
    Chitra = 13,
    Swati = 14,
    Vishakha = 15,
    Anuradha = 16,
    Jyeshtha = 17,
    Mula = 18,
    PurvaAshadha = 19,
    UttaraAshadha = 20,
    Shravana = 21,
    Dhanishta = 22,
    Shatabhisha = 23,
    PurvaBhadrapada = 24,
    UttaraBhadrapada = 25,
    Revati = 26,
}

/// All 27 nakshatras in zodiacal order.
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Zero-based position in zodiacal order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-based traditional numbering: Ashwini is 1, Revati is 27.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// Position of a sidereal longitude within the 27-nakshatra wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// One-based nakshatra number, 1..=27.
    pub number: u8,
    /// Pada within the nakshatra, 1..=4.
    pub pada: u8,
    /// Degrees elapsed within the nakshatra, [0, 13°20').
    pub degrees_in_nakshatra: f64,
    /// Degrees elapsed within the pada, [0, 3°20').
    pub degrees_in_pada: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction: f64,
}

/// Locate a sidereal longitude on the nakshatra wheel.
///
/// The longitude is normalized to [0, 360) first, so any finite value is
/// accepted. Floating-point dust at the top of the wheel clamps into the
/// last segment rather than indexing out of range; non-finite input is
/// rejected at the crate's entry points before reaching here.
pub fn nakshatra_from_longitude(sidereal_lon: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon);

    let nak_idx = (lon / NAKSHATRA_SPAN).floor() as usize;
    let nak_idx = nak_idx.min(26);
    let nakshatra = ALL_NAKSHATRAS[nak_idx];

    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let fraction = degrees_in_nakshatra / NAKSHATRA_SPAN;

    let pada_idx = (degrees_in_nakshatra / PADA_SPAN).floor() as u8;
    let pada = pada_idx.min(3) + 1;
    let degrees_in_pada = degrees_in_nakshatra - ((pada - 1) as f64) * PADA_SPAN;

    NakshatraInfo {
        nakshatra,
        number: nakshatra.number(),
        pada,
        degrees_in_nakshatra,
        degrees_in_pada,
        fraction,
    }
}
