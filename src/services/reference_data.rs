//! Reference data behind the trip planner.
//!
//! Every lookup the planner performs goes through [`ReferenceData`]. The
//! built-in [`StaticReferenceData`] answers from small hard-coded tables so the
//! service runs with no external data source; a database-backed provider can
//! implement the same trait without touching the cost or itinerary logic.
//!
//! City keys are matched after trimming and lowercasing. Sightseeing,
//! coordinates and rentals need an exact key match; permits match any place
//! string that *contains* the key.

use crate::models::{
    plan::RentalListing,
    trip::{Tier, TransportMode},
};

pub const DEFAULT_TRANSPORT_COST: u32 = 2000;
pub const DEFAULT_HOTEL_COST: u32 = 2000;
pub const DEFAULT_FOOD_COST: u32 = 1000;

pub const FALLBACK_SIGHTSEEING: [&str; 2] = ["Local City Center", "Famous Local Market"];
pub const NO_AGENCY_FOUND: &str = "No agency found";

const SIGHTSEEING: &[(&str, &[&str])] = &[
    ("delhi", &["India Gate", "Qutub Minar", "Humayun's Tomb"]),
    (
        "manali",
        &["Solang Valley", "Hadimba Temple", "Rohtang Pass (requires permit)"],
    ),
    ("leh", &["Pangong Tso", "Khardung La", "Nubra Valley"]),
    ("goa", &["Baga Beach", "Old Goa Churches", "Dudhsagar Falls"]),
    ("jaipur", &["Hawa Mahal", "Amer Fort", "City Palace"]),
    ("agra", &["Taj Mahal", "Agra Fort", "Mehtab Bagh"]),
    ("shimla", &["The Ridge", "Mall Road", "Jakhoo Temple"]),
    ("rishikesh", &["Laxman Jhula", "Triveni Ghat", "Beatles Ashram"]),
    ("udaipur", &["Lake Pichola", "City Palace", "Sajjangarh Fort"]),
    ("srinagar", &["Dal Lake", "Shalimar Bagh", "Shankaracharya Temple"]),
];

// Declaration order is the order advisories are reported in.
const PERMITS: &[(&str, &str)] = &[
    (
        "leh",
        "Inner Line Permit (ILP) required for areas like Pangong Tso & Nubra Valley.",
    ),
    (
        "ladakh",
        "Protected area permit needed for Nubra, Pangong and Tso Moriri; carry several photocopies.",
    ),
    (
        "manali",
        "Permit required for Rohtang Pass (check online portal).",
    ),
    (
        "sikkim",
        "Protected Area Permit (PAP) required for North Sikkim (e.g., Gurudongmar Lake).",
    ),
    (
        "spiti",
        "Inner Line Permit required beyond Kaza towards Kinnaur for foreign nationals.",
    ),
    (
        "tawang",
        "Arunachal Pradesh Inner Line Permit (ILP) required before entry.",
    ),
];

const COORDINATES: &[(&str, (f64, f64))] = &[
    ("delhi", (28.6139, 77.2090)),
    ("mumbai", (19.0760, 72.8777)),
    ("kolkata", (22.5726, 88.3639)),
    ("chennai", (13.0827, 80.2707)),
    ("bangalore", (12.9716, 77.5946)),
    ("goa", (15.2993, 74.1240)),
    ("jaipur", (26.9124, 75.7873)),
    ("agra", (27.1767, 78.0081)),
    ("shimla", (31.1048, 77.1734)),
    ("manali", (32.2432, 77.1892)),
    ("leh", (34.1526, 77.5771)),
    ("srinagar", (34.0837, 74.7973)),
    ("rishikesh", (30.0869, 78.2676)),
    ("udaipur", (24.5854, 73.7125)),
    ("kochi", (9.9312, 76.2673)),
    ("sikkim", (27.5330, 88.5122)),
];

// (city, mode, agency, model, price per day)
const RENTALS: &[(&str, TransportMode, &str, &str, u32)] = &[
    ("manali", TransportMode::RentedBike, "Himalayan Bike Rentals", "Royal Enfield Himalayan", 1500),
    ("manali", TransportMode::RentedBike, "Old Manali Riders", "Royal Enfield Classic 350", 1200),
    ("manali", TransportMode::RentedCar, "Kullu Valley Cabs", "Mahindra Scorpio", 3500),
    ("leh", TransportMode::RentedBike, "Ladakh Moto Hub", "Royal Enfield Himalayan", 1800),
    ("leh", TransportMode::RentedCar, "Leh Self Drive", "Mahindra Thar", 4500),
    ("goa", TransportMode::RentedBike, "Calangute Scooters", "Honda Activa", 400),
    ("goa", TransportMode::RentedCar, "Goa Car Rentals", "Maruti Swift", 1800),
    ("delhi", TransportMode::RentedCar, "Capital Self Drive", "Hyundai Creta", 3000),
    ("delhi", TransportMode::RentedBike, "Delhi Bike Rentals", "Bajaj Pulsar 220", 900),
    ("jaipur", TransportMode::RentedCar, "Pink City Rentals", "Toyota Innova Crysta", 3200),
];

const KNOWN_PLACES: [&str; 16] = [
    "Delhi", "Mumbai", "Kolkata", "Chennai", "Bangalore", "Goa", "Jaipur", "Agra", "Shimla",
    "Manali", "Leh", "Srinagar", "Rishikesh", "Udaipur", "Kochi", "Sikkim",
];

const CHEAP_EATERIES: [&str; 3] = [
    "a roadside dhaba",
    "a local street-food stall",
    "a budget thali house",
];
const STANDARD_EATERIES: [&str; 3] = [
    "a mid-range cafe",
    "a popular family restaurant",
    "a multi-cuisine restaurant",
];
const BRANDED_EATERIES: [&str; 3] = [
    "a fine-dining restaurant",
    "the hotel's signature restaurant",
    "a high-end rooftop cafe",
];

pub fn normalize_key(city: &str) -> String {
    city.trim().to_lowercase()
}

/// Lookup contract for everything the planner treats as a database.
pub trait ReferenceData {
    /// Curated spots for an exact (normalized) city match, otherwise the generic fallback.
    fn sightseeing(&self, city: &str) -> Vec<String>;

    /// Permit texts for every key contained in `place`. May hold several entries for one place.
    fn permits(&self, place: &str) -> Vec<String>;

    fn coordinates(&self, city: &str) -> Option<(f64, f64)>;

    /// Listings for the city and mode, or a single zero-priced "no agency" sentinel.
    fn rental_options(&self, city: &str, mode: TransportMode) -> Vec<RentalListing>;

    fn transport_cost(&self, mode: TransportMode) -> u32;

    fn hotel_cost(&self, tier: Tier) -> u32;

    fn food_cost(&self, tier: Tier) -> u32;

    fn eateries(&self, tier: Tier) -> Vec<String>;

    fn known_places(&self) -> Vec<String>;

    fn transport_cost_for_label(&self, label: &str) -> u32 {
        TransportMode::from_label(label)
            .map(|mode| self.transport_cost(mode))
            .unwrap_or(DEFAULT_TRANSPORT_COST)
    }

    fn hotel_cost_for_label(&self, label: &str) -> u32 {
        Tier::from_label(label)
            .map(|tier| self.hotel_cost(tier))
            .unwrap_or(DEFAULT_HOTEL_COST)
    }

    fn food_cost_for_label(&self, label: &str) -> u32 {
        Tier::from_label(label)
            .map(|tier| self.food_cost(tier))
            .unwrap_or(DEFAULT_FOOD_COST)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticReferenceData;

impl ReferenceData for StaticReferenceData {
    fn sightseeing(&self, city: &str) -> Vec<String> {
        let key = normalize_key(city);
        let spots: &[&str] = SIGHTSEEING
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, spots)| *spots)
            .unwrap_or(&FALLBACK_SIGHTSEEING);

        spots.iter().map(|s| s.to_string()).collect()
    }

    fn permits(&self, place: &str) -> Vec<String> {
        let place = place.to_lowercase();
        PERMITS
            .iter()
            .filter(|(key, _)| place.contains(key))
            .map(|(_, text)| text.to_string())
            .collect()
    }

    fn coordinates(&self, city: &str) -> Option<(f64, f64)> {
        let key = normalize_key(city);
        COORDINATES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, coords)| *coords)
    }

    fn rental_options(&self, city: &str, mode: TransportMode) -> Vec<RentalListing> {
        let key = normalize_key(city);
        let listings: Vec<RentalListing> = RENTALS
            .iter()
            .filter(|(name, rental_mode, ..)| *name == key && *rental_mode == mode)
            .map(|(_, _, agency, model, price)| RentalListing {
                city: city.trim().to_string(),
                agency: agency.to_string(),
                model: model.to_string(),
                price_per_day: *price,
            })
            .collect();

        if listings.is_empty() {
            return vec![RentalListing {
                city: city.trim().to_string(),
                agency: NO_AGENCY_FOUND.to_string(),
                model: "-".to_string(),
                price_per_day: 0,
            }];
        }

        listings
    }

    fn transport_cost(&self, mode: TransportMode) -> u32 {
        match mode {
            TransportMode::PersonalBike => 1200, // fuel + maintenance
            TransportMode::PersonalCar => 2500,  // fuel + tolls + maintenance
            TransportMode::RentedBike => 1800,
            TransportMode::RentedCar => 4000,
            TransportMode::PublicTransport => 3000, // averaged across bus/train/flight
        }
    }

    fn hotel_cost(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Cheap => 1000,
            Tier::Standard => 2800,
            Tier::Branded => 8000,
        }
    }

    fn food_cost(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Cheap => 500,
            Tier::Standard => 1500,
            Tier::Branded => 4000,
        }
    }

    fn eateries(&self, tier: Tier) -> Vec<String> {
        let labels: &[&str] = match tier {
            Tier::Cheap => &CHEAP_EATERIES,
            Tier::Standard => &STANDARD_EATERIES,
            Tier::Branded => &BRANDED_EATERIES,
        };
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn known_places(&self) -> Vec<String> {
        KNOWN_PLACES.iter().map(|s| s.to_string()).collect()
    }
}
