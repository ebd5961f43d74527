use std::sync::Arc;

use log::{info, warn};
use rand::Rng;

use crate::config::PlannerConfig;
use crate::error::ValidationError;
use crate::models::{
    plan::{ItineraryItem, MapPoint, PlaceHighlights, RentalListing, TripPlan},
    trip::{TransportMode, TripRequest},
};
use crate::services::{
    advisory_service::AdvisoryService,
    cost_service::CostService,
    itinerary_expansion_service::ItineraryExpansionService,
    pricing_service::PricingService,
    reference_data::{ReferenceData, StaticReferenceData},
};

pub struct TripPlanner {
    data: Arc<dyn ReferenceData + Send + Sync>,
    config: PlannerConfig,
}

impl TripPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_reference_data(config, Arc::new(StaticReferenceData))
    }

    pub fn with_reference_data(
        config: PlannerConfig,
        data: Arc<dyn ReferenceData + Send + Sync>,
    ) -> Self {
        Self { data, config }
    }

    pub fn reference_data(&self) -> &dyn ReferenceData {
        self.data.as_ref()
    }

    /// Validate the request and build the full plan. Checks run in order and the first failure
    /// is returned: too few places, no transport mode, then an empty or inverted date range.
    pub fn plan_trip<R: Rng + ?Sized>(
        &self,
        request: &TripRequest,
        rng: &mut R,
    ) -> Result<TripPlan, ValidationError> {
        let places = &request.places;
        if places.len() < 2 {
            warn!("Rejecting trip with {} place(s)", places.len());
            return Err(ValidationError::InsufficientPlaces);
        }

        let mode = request.transport_mode.ok_or_else(|| {
            warn!("Rejecting trip without a transport mode");
            ValidationError::MissingTransportMode
        })?;

        let data = self.reference_data();
        let itinerary = ItineraryExpansionService::new(
            data,
            request.hotel_tier,
            request.food_tier,
            mode,
            rng,
        )
        .expand(places);

        let duration_days = self.resolve_duration(request, &itinerary)?;
        let is_peak_season = self.config.peak_season.contains(request.start_date);
        let daily_cost =
            CostService::compute_daily_cost(data, mode, request.hotel_tier, request.food_tier);
        let total_budget = PricingService::budget_for(
            &daily_cost,
            duration_days,
            is_peak_season,
            self.config.peak_surcharge_percent,
        );

        let plan = TripPlan {
            total_budget,
            duration_days,
            is_peak_season,
            season_note: PricingService::season_note(is_peak_season).to_string(),
            daily_cost,
            best_route: places.join(" -> "),
            alternate_route: format!(
                "{} (Alternate Route)",
                places.iter().rev().cloned().collect::<Vec<_>>().join(" -> ")
            ),
            highlights: self.highlights(places),
            itinerary,
            permits: AdvisoryService::resolve_permits(data, places),
            rentals: self.rentals(places, mode),
            map_points: self.map_points(places),
        };

        info!(
            "Planned {}-day trip over {} places, budget {}",
            plan.duration_days,
            places.len(),
            plan.total_budget
        );

        Ok(plan)
    }

    fn resolve_duration(
        &self,
        request: &TripRequest,
        itinerary: &[ItineraryItem],
    ) -> Result<u32, ValidationError> {
        let inverted = request
            .end_date
            .map_or(false, |end_date| end_date < request.start_date);

        let days = if inverted {
            0
        } else if request.flexible {
            itinerary
                .iter()
                .filter(|item| matches!(item, ItineraryItem::DayCard(_)))
                .count() as i64
        } else {
            match request.end_date {
                Some(end_date) => (end_date - request.start_date).num_days() + 1,
                None => 0,
            }
        };

        if days < 1 {
            warn!(
                "Rejecting trip with invalid date range {} to {:?}",
                request.start_date, request.end_date
            );
            return Err(ValidationError::InvalidDateRange);
        }

        u32::try_from(days).map_err(|_| ValidationError::InvalidDateRange)
    }

    fn highlights(&self, places: &[String]) -> Vec<PlaceHighlights> {
        places
            .iter()
            .map(|place| PlaceHighlights {
                place: place.clone(),
                spots: self.data.sightseeing(place),
            })
            .collect()
    }

    fn rentals(&self, places: &[String], mode: TransportMode) -> Vec<RentalListing> {
        if !mode.is_rented() {
            return Vec::new();
        }

        places
            .iter()
            .flat_map(|place| self.data.rental_options(place, mode))
            .collect()
    }

    // Places without known coordinates are left off the map.
    fn map_points(&self, places: &[String]) -> Vec<MapPoint> {
        places
            .iter()
            .filter_map(|place| {
                self.data.coordinates(place).map(|(lat, lon)| MapPoint {
                    city: place.clone(),
                    lat,
                    lon,
                })
            })
            .collect()
    }
}
