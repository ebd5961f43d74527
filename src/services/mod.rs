pub mod advisory_service;
pub mod cost_service;
pub mod itinerary_expansion_service;
pub mod pricing_service;
pub mod reference_data;
pub mod trip_planning_service;
