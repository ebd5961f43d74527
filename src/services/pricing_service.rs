use crate::models::{
    plan::DailyCostBreakdown,
    trip::{Tier, TransportMode},
};
use crate::services::{cost_service::CostService, reference_data::ReferenceData};

pub const PEAK_SEASON_NOTE: &str = "Includes a 30% estimated peak season surcharge.";
pub const OFF_SEASON_NOTE: &str = "Off-season pricing applied.";

pub struct PricingService;

impl PricingService {
    /// Whole-trip budget. Transport, food and contingency are paid per day, the hotel per night
    /// (days - 1, so a same-day trip has no lodging). Peak season scales the sum by
    /// `surcharge_percent` and truncates.
    pub fn total_budget(
        data: &dyn ReferenceData,
        mode: TransportMode,
        hotel_tier: Tier,
        food_tier: Tier,
        duration_days: u32,
        is_peak_season: bool,
        surcharge_percent: u64,
    ) -> u64 {
        let daily = CostService::compute_daily_cost(data, mode, hotel_tier, food_tier);
        Self::budget_for(&daily, duration_days, is_peak_season, surcharge_percent)
    }

    pub fn budget_for(
        daily: &DailyCostBreakdown,
        duration_days: u32,
        is_peak_season: bool,
        surcharge_percent: u64,
    ) -> u64 {
        let base = Self::base_cost(daily, duration_days);
        if is_peak_season {
            base.saturating_mul(surcharge_percent) / 100
        } else {
            base
        }
    }

    /// Cost before any seasonal adjustment
    pub fn base_cost(daily: &DailyCostBreakdown, duration_days: u32) -> u64 {
        let days = u64::from(duration_days);
        let nights = days.saturating_sub(1);

        let transport_total = u64::from(daily.transport) * days;
        let food_total = u64::from(daily.food) * days;
        let contingency_total = u64::from(daily.contingency) * days;
        let stay_total = u64::from(daily.stay) * nights;

        transport_total + food_total + contingency_total + stay_total
    }

    pub fn season_note(is_peak_season: bool) -> &'static str {
        if is_peak_season {
            PEAK_SEASON_NOTE
        } else {
            OFF_SEASON_NOTE
        }
    }
}
