//! Day-by-day expansion of an ordered list of places.
//!
//! Every consecutive pair of places is a leg. A leg always produces one
//! header and exactly two day cards: the outbound half spent at the origin and
//! the arrival half spent at the destination. The two-day granularity is a
//! fixed simulation, not a distance-based estimate.

use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::models::{
    plan::{DailyCostBreakdown, DayPlanEntry, Event, EventKind, ItineraryItem},
    trip::{Tier, TransportMode},
};
use crate::services::{
    advisory_service::AdvisoryService, cost_service::CostService, reference_data::ReferenceData,
};

pub const DAYS_PER_LEG: usize = 2;

struct Leg<'a> {
    origin: &'a str,
    destination: &'a str,
}

impl Leg<'_> {
    fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

pub struct ItineraryExpansionService<'a, R: Rng + ?Sized> {
    data: &'a dyn ReferenceData,
    hotel_tier: Tier,
    food_tier: Tier,
    mode: TransportMode,
    daily_cost: DailyCostBreakdown,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> ItineraryExpansionService<'a, R> {
    pub fn new(
        data: &'a dyn ReferenceData,
        hotel_tier: Tier,
        food_tier: Tier,
        mode: TransportMode,
        rng: &'a mut R,
    ) -> Self {
        Self {
            data,
            hotel_tier,
            food_tier,
            mode,
            daily_cost: CostService::compute_daily_cost(data, mode, hotel_tier, food_tier),
            rng,
        }
    }

    /// Leg headers interleaved with day cards, day numbers running 1..=2 * legs across the trip.
    pub fn expand(&mut self, places: &[String]) -> Vec<ItineraryItem> {
        let mut items = Vec::with_capacity(places.len().saturating_sub(1) * (DAYS_PER_LEG + 1));
        let mut day: u32 = 1;

        for pair in places.windows(2) {
            let leg = Leg {
                origin: &pair[0],
                destination: &pair[1],
            };
            debug!("Expanding leg {}", leg.route_label());

            items.push(ItineraryItem::LegHeader {
                origin: leg.origin.to_string(),
                destination: leg.destination.to_string(),
                recommendation: AdvisoryService::recommend_transport(leg.origin, leg.destination),
            });

            let (outbound, arrival) = match self.mode {
                TransportMode::PublicTransport => (
                    self.public_transport_outbound(&leg),
                    self.public_transport_arrival(&leg),
                ),
                _ => (self.road_trip_outbound(&leg), self.road_trip_arrival(&leg)),
            };

            for events in [outbound, arrival] {
                items.push(ItineraryItem::DayCard(DayPlanEntry {
                    day,
                    route: leg.route_label(),
                    events,
                    daily_cost: self.daily_cost,
                }));
                day += 1;
            }
        }

        items
    }

    fn public_transport_outbound(&mut self, leg: &Leg) -> Vec<Event> {
        let spots = self.data.sightseeing(leg.origin);
        vec![
            Event::new(
                EventKind::Breakfast,
                "08:00",
                format!("Breakfast at {} in {}", self.eatery(), leg.origin),
            ),
            Event::new(
                EventKind::Sightseeing,
                "10:00",
                format!("Quick visit to {} before departure", first_spot(&spots)),
            ),
            Event::new(
                EventKind::Transit,
                "14:00",
                format!(
                    "Depart {} for {}: {}",
                    leg.origin,
                    leg.destination,
                    AdvisoryService::recommend_transport(leg.origin, leg.destination)
                ),
            ),
            Event::new(
                EventKind::Overnight,
                "21:00",
                format!("Overnight journey towards {}", leg.destination),
            ),
        ]
    }

    fn public_transport_arrival(&mut self, leg: &Leg) -> Vec<Event> {
        let spots = self.data.sightseeing(leg.destination);
        vec![
            Event::new(
                EventKind::Breakfast,
                "08:00",
                format!(
                    "Breakfast at {} on arrival in {}",
                    self.eatery(),
                    leg.destination
                ),
            ),
            Event::new(
                EventKind::Sightseeing,
                "10:30",
                format!("Brief sightseeing: {}", first_spot(&spots)),
            ),
            Event::new(
                EventKind::Transit,
                "15:00",
                format!(
                    "Get around {} by shared taxi, auto-rickshaw or city bus",
                    leg.destination
                ),
            ),
            Event::new(
                EventKind::CheckIn,
                "19:00",
                format!(
                    "Check in to a {} stay in {}",
                    self.hotel_tier.label().to_lowercase(),
                    leg.destination
                ),
            ),
        ]
    }

    fn road_trip_outbound(&mut self, leg: &Leg) -> Vec<Event> {
        let spots = self.data.sightseeing(leg.origin);
        vec![
            Event::new(
                EventKind::Breakfast,
                "08:00",
                format!("Breakfast at {} in {}", self.eatery(), leg.origin),
            ),
            Event::new(
                EventKind::Sightseeing,
                "09:30",
                format!("Explore {}", join_spots(&spots)),
            ),
            Event::new(
                EventKind::Drive,
                "13:00",
                format!(
                    "Head out towards {} by {}; lunch stop at {}",
                    leg.destination,
                    self.mode.label().to_lowercase(),
                    self.eatery()
                ),
            ),
            Event::new(
                EventKind::CheckIn,
                "19:00",
                format!(
                    "Check in to a {} hotel en route to {}",
                    self.hotel_tier.label().to_lowercase(),
                    leg.destination
                ),
            ),
        ]
    }

    fn road_trip_arrival(&mut self, leg: &Leg) -> Vec<Event> {
        let spots = self.data.sightseeing(leg.destination);
        vec![
            Event::new(
                EventKind::Breakfast,
                "07:30",
                format!("Early breakfast at {} before the final stretch", self.eatery()),
            ),
            Event::new(
                EventKind::Drive,
                "09:00",
                format!("Drive into {}; lunch at {}", leg.destination, self.eatery()),
            ),
            Event::new(
                EventKind::Sightseeing,
                "15:00",
                format!("Explore {}", join_spots(&spots)),
            ),
            Event::new(
                EventKind::CheckIn,
                "19:00",
                format!(
                    "Check in to a {} hotel in {}",
                    self.hotel_tier.label().to_lowercase(),
                    leg.destination
                ),
            ),
        ]
    }

    fn eatery(&mut self) -> String {
        self.data
            .eateries(self.food_tier)
            .choose(&mut *self.rng)
            .cloned()
            .unwrap_or_else(|| "a local eatery".to_string())
    }
}

fn first_spot(spots: &[String]) -> &str {
    spots.first().map(String::as_str).unwrap_or("the town center")
}

fn join_spots(spots: &[String]) -> String {
    match spots {
        [] => "the town center".to_string(),
        [only] => only.clone(),
        [first, second, ..] => format!("{} and {}", first, second),
    }
}
