use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

/// Per-day spend for one mode/tier combination. Computed once per trip and copied into every day card.
/// Serializes with its derived `total` alongside the four components.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyCostBreakdown {
    pub transport: u32,
    pub stay: u32,
    pub food: u32,
    pub contingency: u32,
}

impl DailyCostBreakdown {
    pub fn subtotal(&self) -> u32 {
        self.transport + self.stay + self.food
    }

    pub fn total(&self) -> u32 {
        self.subtotal() + self.contingency
    }
}

impl Serialize for DailyCostBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DailyCostBreakdown", 5)?;
        state.serialize_field("transport", &self.transport)?;
        state.serialize_field("stay", &self.stay)?;
        state.serialize_field("food", &self.food)?;
        state.serialize_field("contingency", &self.contingency)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Breakfast,
    Sightseeing,
    Transit,
    Drive,
    CheckIn,
    Overnight,
}

impl EventKind {
    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::Breakfast => "☕",
            EventKind::Sightseeing => "📍",
            EventKind::Transit => "🚌",
            EventKind::Drive => "🚗",
            EventKind::CheckIn => "🏨",
            EventKind::Overnight => "🌙",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub icon: String,
    pub time: String,
    pub description: String,
}

impl Event {
    pub fn new(kind: EventKind, time: &str, description: String) -> Self {
        Self {
            kind,
            icon: kind.icon().to_string(),
            time: time.to_string(),
            description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayPlanEntry {
    pub day: u32,
    pub route: String,
    pub events: Vec<Event>,
    pub daily_cost: DailyCostBreakdown,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ItineraryItem {
    #[serde(rename = "leg_header")]
    LegHeader {
        origin: String,
        destination: String,
        recommendation: String,
    },

    #[serde(rename = "day_card")]
    DayCard(DayPlanEntry),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RentalListing {
    pub city: String,
    pub agency: String,
    pub model: String,
    pub price_per_day: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MapPoint {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaceHighlights {
    pub place: String,
    pub spots: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripPlan {
    pub total_budget: u64,
    pub duration_days: u32,
    pub is_peak_season: bool,
    pub season_note: String,
    pub daily_cost: DailyCostBreakdown,
    pub best_route: String,
    pub alternate_route: String,
    pub highlights: Vec<PlaceHighlights>,
    pub itinerary: Vec<ItineraryItem>,
    pub permits: Vec<String>,
    pub rentals: Vec<RentalListing>,
    pub map_points: Vec<MapPoint>,
}

impl TripPlan {
    pub fn day_cards(&self) -> impl Iterator<Item = &DayPlanEntry> {
        self.itinerary.iter().filter_map(|item| match item {
            ItineraryItem::DayCard(entry) => Some(entry),
            _ => None,
        })
    }
}
