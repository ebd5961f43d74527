use crate::models::{
    plan::DailyCostBreakdown,
    trip::{Tier, TransportMode},
};
use crate::services::reference_data::ReferenceData;

const CONTINGENCY_PERCENT: u32 = 15;

pub struct CostService;

impl CostService {
    /// Daily transport, stay and food spend plus a 15% contingency (rounded down)
    pub fn compute_daily_cost(
        data: &dyn ReferenceData,
        mode: TransportMode,
        hotel_tier: Tier,
        food_tier: Tier,
    ) -> DailyCostBreakdown {
        Self::breakdown(
            data.transport_cost(mode),
            data.hotel_cost(hotel_tier),
            data.food_cost(food_tier),
        )
    }

    /// Same as [`CostService::compute_daily_cost`] for unvalidated labels; unknown labels use the table defaults.
    pub fn daily_cost_from_labels(
        data: &dyn ReferenceData,
        mode: &str,
        hotel_tier: &str,
        food_tier: &str,
    ) -> DailyCostBreakdown {
        Self::breakdown(
            data.transport_cost_for_label(mode),
            data.hotel_cost_for_label(hotel_tier),
            data.food_cost_for_label(food_tier),
        )
    }

    fn breakdown(transport: u32, stay: u32, food: u32) -> DailyCostBreakdown {
        let subtotal = transport + stay + food;
        DailyCostBreakdown {
            transport,
            stay,
            food,
            contingency: subtotal * CONTINGENCY_PERCENT / 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reference_data::StaticReferenceData;

    #[test]
    fn test_cheap_personal_bike_day() {
        let cost = CostService::compute_daily_cost(
            &StaticReferenceData,
            TransportMode::PersonalBike,
            Tier::Cheap,
            Tier::Cheap,
        );
        assert_eq!(cost.transport, 1200);
        assert_eq!(cost.stay, 1000);
        assert_eq!(cost.food, 500);
        assert_eq!(cost.contingency, 405);
        assert_eq!(cost.total(), 3105);
    }

    #[test]
    fn test_contingency_rounds_down() {
        // 2500 + 2800 + 1500 = 6800 -> 1020 exactly; 1800 + 2800 + 500 = 5100 -> 765
        let car = CostService::compute_daily_cost(
            &StaticReferenceData,
            TransportMode::PersonalCar,
            Tier::Standard,
            Tier::Standard,
        );
        assert_eq!(car.contingency, 1020);

        let bike = CostService::compute_daily_cost(
            &StaticReferenceData,
            TransportMode::RentedBike,
            Tier::Standard,
            Tier::Cheap,
        );
        assert_eq!(bike.contingency, 765);

        assert_eq!(CostService::breakdown(1, 1, 1).contingency, 0);
        assert_eq!(CostService::breakdown(7, 0, 0).contingency, 1);
    }

    #[test]
    fn test_unrecognized_labels_fall_back_to_defaults() {
        let cost =
            CostService::daily_cost_from_labels(&StaticReferenceData, "Teleport", "Igloo", "???");
        assert_eq!(cost.transport, 2000);
        assert_eq!(cost.stay, 2000);
        assert_eq!(cost.food, 1000);
        assert_eq!(cost.contingency, 750);
    }

    #[test]
    fn test_labels_match_typed_lookup() {
        let typed = CostService::compute_daily_cost(
            &StaticReferenceData,
            TransportMode::PublicTransport,
            Tier::Branded,
            Tier::Standard,
        );
        let labelled = CostService::daily_cost_from_labels(
            &StaticReferenceData,
            "Public Transport (Bus/Train/Flight)",
            "Branded",
            "Standard",
        );
        assert_eq!(typed, labelled);
    }
}
