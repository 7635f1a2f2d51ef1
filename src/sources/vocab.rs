//! Fixed vocabularies the generator draws from.

use crate::models::{BerRating, PropertyType};

pub const DUBLIN: &str = "Dublin";

pub const DUBLIN_AREAS: &[&str] = &[
    "Ballsbridge",
    "Blackrock",
    "Clontarf",
    "Dalkey",
    "Dun Laoghaire",
    "Howth",
    "Malahide",
    "Raheny",
    "Ranelagh",
    "Rathgar",
    "Rathmines",
    "Sandymount",
    "Stepaside",
    "Sutton",
    "Castleknock",
    "Lucan",
    "Swords",
];

/// Areas that carry a further premium on top of the Dublin one
pub const PRESTIGE_AREAS: &[&str] = &["Ballsbridge", "Dalkey", "Blackrock"];

pub const OTHER_COUNTIES: &[(&str, &[&str])] = &[
    ("Cork", &["Douglas", "Ballincollig", "Carrigaline", "Cobh", "Midleton"]),
    ("Galway", &["Salthill", "Oranmore", "Barna", "Knocknacarra"]),
    ("Limerick", &["Castletroy", "Dooradoyle", "Raheen", "Ennis Road"]),
    ("Kildare", &["Naas", "Newbridge", "Celbridge", "Maynooth"]),
    ("Wicklow", &["Bray", "Greystones", "Wicklow Town", "Arklow"]),
    ("Meath", &["Navan", "Ashbourne", "Dunboyne", "Trim"]),
    ("Louth", &["Dundalk", "Drogheda", "Ardee"]),
    ("Wexford", &["Wexford Town", "Gorey", "Enniscorthy", "New Ross"]),
    ("Waterford", &["Waterford City", "Tramore", "Dungarvan", "Dunmore East"]),
];

pub const PROPERTY_TYPE_WEIGHTS: [(PropertyType, u32); 10] = [
    (PropertyType::Apartment, 4),
    (PropertyType::House, 5),
    (PropertyType::Studio, 2),
    (PropertyType::Duplex, 2),
    (PropertyType::Penthouse, 1),
    (PropertyType::Bungalow, 2),
    (PropertyType::Cottage, 1),
    (PropertyType::Farmhouse, 1),
    (PropertyType::Villa, 1),
    (PropertyType::Land, 1),
];

// Middle ratings dominate; the extremes are rare.
pub const BER_WEIGHTS: [(BerRating, u32); 16] = [
    (BerRating::A1, 1),
    (BerRating::A2, 2),
    (BerRating::A3, 3),
    (BerRating::B1, 3),
    (BerRating::B2, 4),
    (BerRating::B3, 4),
    (BerRating::C1, 5),
    (BerRating::C2, 4),
    (BerRating::C3, 3),
    (BerRating::D1, 3),
    (BerRating::D2, 2),
    (BerRating::E1, 1),
    (BerRating::E2, 1),
    (BerRating::F, 1),
    (BerRating::G, 1),
    (BerRating::Exempt, 1),
];

pub const FEATURES: &[&str] = &[
    "Gas Central Heating",
    "Double Glazed Windows",
    "Private Parking",
    "Garden/Patio",
    "Dishwasher",
    "Washing Machine",
    "Dryer",
    "Furnished",
    "Security System",
    "High-Speed Internet",
    "Cable TV",
    "Pet Friendly",
    "Recently Renovated",
    "Close to Public Transport",
    "Built-in Wardrobes",
    "Wooden Floors",
    "Smart Home Features",
    "Gym Access",
    "Bicycle Storage",
    "Concierge Service",
];

pub const TITLE_PREFIXES: &[&str] = &[
    "Charming",
    "Luxurious",
    "Modern",
    "Spacious",
    "Cozy",
    "Elegant",
    "Stylish",
    "Beautiful",
    "Stunning",
    "Delightful",
    "Impressive",
];

pub const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Maple", "Cedar", "Park", "Hill", "River", "Lake", "Forest", "Valley",
    "Mountain", "Ocean", "Bay", "Harbor", "Port",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Boulevard", "Way", "Place", "Court", "Terrace",
];

pub const EIRCODE_LETTERS: &[&str] = &[
    "AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP", "QR", "ST", "UV", "WX", "YZ",
];

/// Sentence pairs; the generator flips a coin for each
pub const DESCRIPTION_CHOICES: [(&str, &str); 3] = [
    (
        "Recently renovated with modern finishes.",
        "Featuring classic architectural elements with plenty of character.",
    ),
    (
        "Close to local amenities including shops, schools, and public transport.",
        "Situated in a quiet neighborhood with easy access to the city center.",
    ),
    (
        "The property benefits from ample natural light and generous proportions.",
        "Cozy and well-insulated, perfect for Irish weather conditions.",
    ),
];

pub const STOCK_IMAGE_COUNT: u32 = 5;

pub const VIRTUAL_TOUR_URL: &str = "https://my.matterport.com/show/?m=soLR3BK6STT";
