use crate::error::ListingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of property being let
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Duplex,
    Penthouse,
    Bungalow,
    Cottage,
    Farmhouse,
    Villa,
    Land,
}

impl PropertyType {
    pub const ALL: [PropertyType; 10] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Studio,
        PropertyType::Duplex,
        PropertyType::Penthouse,
        PropertyType::Bungalow,
        PropertyType::Cottage,
        PropertyType::Farmhouse,
        PropertyType::Villa,
        PropertyType::Land,
    ];

    /// Lowercase name, also used for free-text search
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Studio => "studio",
            PropertyType::Duplex => "duplex",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Bungalow => "bungalow",
            PropertyType::Cottage => "cottage",
            PropertyType::Farmhouse => "farmhouse",
            PropertyType::Villa => "villa",
            PropertyType::Land => "land",
        }
    }

    /// Capitalized name for titles and labels
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Studio => "Studio",
            PropertyType::Duplex => "Duplex",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Bungalow => "Bungalow",
            PropertyType::Cottage => "Cottage",
            PropertyType::Farmhouse => "Farmhouse",
            PropertyType::Villa => "Villa",
            PropertyType::Land => "Land",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PropertyType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ListingError::UnknownPropertyType(s.to_string()))
    }
}

/// Lifecycle state of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Available,
    Reserved,
    Rented,
    Unavailable,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Available => "Available",
            ListingStatus::Reserved => "Reserved",
            ListingStatus::Rented => "Rented",
            ListingStatus::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ListingStatus {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(ListingStatus::Available),
            "reserved" => Ok(ListingStatus::Reserved),
            "rented" => Ok(ListingStatus::Rented),
            "unavailable" => Ok(ListingStatus::Unavailable),
            _ => Err(ListingError::UnknownStatus(s.to_string())),
        }
    }
}

/// Building Energy Rating, ordered best (A1) to worst (G), then Exempt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BerRating {
    A1,
    A2,
    A3,
    B1,
    B2,
    B3,
    C1,
    C2,
    C3,
    D1,
    D2,
    E1,
    E2,
    F,
    G,
    Exempt,
}

/// Colour band shown next to a BER badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BerBand {
    Green,
    Lime,
    Yellow,
    Orange,
    LightRed,
    Red,
    DarkRed,
    Grey,
}

impl BerRating {
    pub const ALL: [BerRating; 16] = [
        BerRating::A1,
        BerRating::A2,
        BerRating::A3,
        BerRating::B1,
        BerRating::B2,
        BerRating::B3,
        BerRating::C1,
        BerRating::C2,
        BerRating::C3,
        BerRating::D1,
        BerRating::D2,
        BerRating::E1,
        BerRating::E2,
        BerRating::F,
        BerRating::G,
        BerRating::Exempt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BerRating::A1 => "A1",
            BerRating::A2 => "A2",
            BerRating::A3 => "A3",
            BerRating::B1 => "B1",
            BerRating::B2 => "B2",
            BerRating::B3 => "B3",
            BerRating::C1 => "C1",
            BerRating::C2 => "C2",
            BerRating::C3 => "C3",
            BerRating::D1 => "D1",
            BerRating::D2 => "D2",
            BerRating::E1 => "E1",
            BerRating::E2 => "E2",
            BerRating::F => "F",
            BerRating::G => "G",
            BerRating::Exempt => "Exempt",
        }
    }

    pub fn band(&self) -> BerBand {
        match self {
            BerRating::A1 | BerRating::A2 | BerRating::A3 => BerBand::Green,
            BerRating::B1 | BerRating::B2 | BerRating::B3 => BerBand::Lime,
            BerRating::C1 | BerRating::C2 | BerRating::C3 => BerBand::Yellow,
            BerRating::D1 | BerRating::D2 => BerBand::Orange,
            BerRating::E1 | BerRating::E2 => BerBand::LightRed,
            BerRating::F => BerBand::Red,
            BerRating::G => BerBand::DarkRed,
            BerRating::Exempt => BerBand::Grey,
        }
    }
}

impl fmt::Display for BerRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BerRating {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BerRating::ALL
            .iter()
            .copied()
            .find(|rating| rating.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ListingError::UnknownBerRating(s.to_string()))
    }
}
