use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    PersonalBike,
    PersonalCar,
    RentedBike,
    RentedCar,
    PublicTransport,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::PersonalBike,
        TransportMode::PersonalCar,
        TransportMode::RentedBike,
        TransportMode::RentedCar,
        TransportMode::PublicTransport,
    ];

    /// Label shown to travellers, e.g. "Rented Car"
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::PersonalBike => "Personal Bike",
            TransportMode::PersonalCar => "Personal Car",
            TransportMode::RentedBike => "Rented Bike",
            TransportMode::RentedCar => "Rented Car",
            TransportMode::PublicTransport => "Public Transport (Bus/Train/Flight)",
        }
    }

    /// Parse a display label or snake_case name, ignoring case and surrounding whitespace.
    /// Returns `None` for anything else, including the "Select a mode" placeholder.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "personal bike" | "personal_bike" => Some(TransportMode::PersonalBike),
            "personal car" | "personal_car" => Some(TransportMode::PersonalCar),
            "rented bike" | "rented_bike" => Some(TransportMode::RentedBike),
            "rented car" | "rented_car" => Some(TransportMode::RentedCar),
            "public transport"
            | "public_transport"
            | "public transport (bus/train/flight)" => Some(TransportMode::PublicTransport),
            _ => None,
        }
    }

    pub fn is_rented(&self) -> bool {
        matches!(self, TransportMode::RentedBike | TransportMode::RentedCar)
    }
}

/// Budget preference shared by hotels and restaurants.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Cheap,
    #[default]
    Standard,
    Branded,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Cheap => "Cheap",
            Tier::Standard => "Standard",
            Tier::Branded => "Branded",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "cheap" => Some(Tier::Cheap),
            "standard" => Some(Tier::Standard),
            "branded" => Some(Tier::Branded),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TripRequest {
    pub places: Vec<String>,
    pub transport_mode: Option<TransportMode>,
    pub hotel_tier: Tier,
    pub food_tier: Tier,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// When set, the trip length is derived from the generated itinerary instead of the dates.
    pub flexible: bool,
}

impl TripRequest {
    /// Request with fixed dates. Place names are trimmed and blanks dropped.
    pub fn new(
        places: Vec<String>,
        transport_mode: Option<TransportMode>,
        hotel_tier: Tier,
        food_tier: Tier,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            places: clean_places(places),
            transport_mode,
            hotel_tier,
            food_tier,
            start_date,
            end_date: Some(end_date),
            flexible: false,
        }
    }

    /// Request whose duration follows the itinerary.
    pub fn flexible(
        places: Vec<String>,
        transport_mode: Option<TransportMode>,
        hotel_tier: Tier,
        food_tier: Tier,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            places: clean_places(places),
            transport_mode,
            hotel_tier,
            food_tier,
            start_date,
            end_date: None,
            flexible: true,
        }
    }
}

/// Body of a plan request as submitted by the form. Mode and tiers stay raw labels: an unselected or
/// unknown mode is reported as a validation error, and a missing or unknown tier means Standard.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TripSubmission {
    pub places: Vec<String>,
    pub transport_mode: Option<String>,
    pub hotel_preference: Option<String>,
    pub food_preference: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub flexible: bool,
}

impl TripSubmission {
    pub fn into_request(self) -> TripRequest {
        TripRequest {
            places: clean_places(self.places),
            transport_mode: self.transport_mode.as_deref().and_then(TransportMode::from_label),
            hotel_tier: tier_or_default(self.hotel_preference.as_deref()),
            food_tier: tier_or_default(self.food_preference.as_deref()),
            start_date: self.start_date,
            end_date: self.end_date,
            flexible: self.flexible,
        }
    }
}

fn tier_or_default(label: Option<&str>) -> Tier {
    label.and_then(Tier::from_label).unwrap_or_default()
}

pub fn clean_places(places: Vec<String>) -> Vec<String> {
    places
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_mode_labels_round_trip() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::from_label(mode.label()), Some(mode));
        }
        assert_eq!(
            TransportMode::from_label("  PUBLIC TRANSPORT "),
            Some(TransportMode::PublicTransport)
        );
        assert_eq!(TransportMode::from_label("Select a mode"), None);
    }

    #[test]
    fn test_only_rented_modes_are_rented() {
        assert!(TransportMode::RentedBike.is_rented());
        assert!(TransportMode::RentedCar.is_rented());
        assert!(!TransportMode::PersonalCar.is_rented());
        assert!(!TransportMode::PublicTransport.is_rented());
    }

    #[test]
    fn test_request_drops_blank_places() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let request = TripRequest::new(
            vec![" Delhi ".to_string(), "   ".to_string(), "Manali".to_string()],
            Some(TransportMode::PersonalCar),
            Tier::Cheap,
            Tier::Cheap,
            date,
            date,
        );
        assert_eq!(request.places, vec!["Delhi", "Manali"]);
        assert!(!request.flexible);
    }

    #[test]
    fn test_submission_into_request() {
        let submission: TripSubmission = serde_json::from_value(serde_json::json!({
            "places": ["Goa ", "", "Kochi"],
            "transport_mode": "Select a mode",
            "hotel_preference": "BRANDED",
            "food_preference": "Buffet",
            "start_date": "2025-11-02",
            "flexible": true
        }))
        .unwrap();

        let request = submission.into_request();
        assert_eq!(request.places, vec!["Goa", "Kochi"]);
        assert_eq!(request.transport_mode, None);
        assert_eq!(request.hotel_tier, Tier::Branded);
        assert_eq!(request.food_tier, Tier::Standard);
        assert_eq!(request.end_date, None);
        assert!(request.flexible);
    }
}
