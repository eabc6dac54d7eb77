//! The nine grahas of the Vimshottari system.

/// The nine grahas, in the traditional listing order.
///
/// Rahu and Ketu are the lunar nodes; they hold dasha periods just like
/// the seven visible grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Graha {
    Surya = 0,
    Chandra = 1,
    Mangal = 2,
    Buddh = 3,
    Guru = 4,
    Shukra = 5,
    Shani = 6,
    Rahu = 7,
    Ketu = 8,
}

/// All nine grahas in listing order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Graha::Surya => "Surya",
            Graha::Chandra => "Chandra",
            Graha::Mangal => "Mangal",
            Graha::Buddh => "Buddh",
            Graha::Guru => "Guru",
            Graha::Shukra => "Shukra",
            Graha::Shani => "Shani",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        }
    }

    /// Conventional English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Graha::Surya => "Sun",
            Graha::Chandra => "Moon",
            Graha::Mangal => "Mars",
            Graha::Buddh => "Mercury",
            Graha::Guru => "Jupiter",
            Graha::Shukra => "Venus",
            Graha::Shani => "Saturn",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        }
    }

    /// Position in [`ALL_GRAHAS`].
    pub const fn index(self) -> usize {
        self as usize
    }
}
