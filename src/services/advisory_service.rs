use crate::services::reference_data::ReferenceData;

pub const NO_PERMITS_FOUND: &str = "No special permits noted for this route. Always double-check official government websites before travel.";

type RoutePredicate = fn(&str, &str) -> bool;

// Evaluated top to bottom, first match wins. Both arguments are already lowercased.
const TRANSPORT_RULES: &[(RoutePredicate, &str)] = &[
    (
        |_, to| to.contains("leh") || to.contains("ladakh"),
        "Fly into Leh (Kushok Bakula Rimpochee Airport); road routes close for much of the winter.",
    ),
    (
        |from, to| from.contains("delhi") && to.contains("manali"),
        "HRTC Volvo overnight bus from Delhi ISBT Kashmere Gate to Manali.",
    ),
    (
        |_, to| to.contains("goa"),
        "Konkan Railway train or a short flight into Goa (Dabolim/Mopa).",
    ),
    (
        |from, to| {
            (from.contains("delhi") && to.contains("jaipur"))
                || (from.contains("jaipur") && to.contains("delhi"))
        },
        "Shatabdi or Vande Bharat Express train between Delhi and Jaipur (about 4.5 hours).",
    ),
    (
        |from, to| from.contains("delhi") && to.contains("agra"),
        "Gatimaan Express from Hazrat Nizamuddin to Agra Cantt.",
    ),
    (
        |_, to| to.contains("shimla"),
        "Train to Kalka, then the Kalka-Shimla toy train.",
    ),
    (
        |_, to| to.contains("sikkim") || to.contains("gangtok"),
        "Train to New Jalpaiguri (NJP), then a shared jeep to Gangtok.",
    ),
];

pub struct AdvisoryService;

impl AdvisoryService {
    /// One "{place}: {permit}" line per matching permit key, or the fallback line when nothing matches.
    pub fn resolve_permits(data: &dyn ReferenceData, places: &[String]) -> Vec<String> {
        let advisories: Vec<String> = places
            .iter()
            .flat_map(|place| {
                data.permits(place)
                    .into_iter()
                    .map(move |permit| format!("{}: {}", place, permit))
            })
            .collect();

        if advisories.is_empty() {
            return vec![NO_PERMITS_FOUND.to_string()];
        }

        advisories
    }

    pub fn recommend_transport(origin: &str, destination: &str) -> String {
        let from = origin.trim().to_lowercase();
        let to = destination.trim().to_lowercase();

        TRANSPORT_RULES
            .iter()
            .find(|(predicate, _)| predicate(from.as_str(), to.as_str()))
            .map(|(_, recommendation)| recommendation.to_string())
            .unwrap_or_else(|| {
                format!(
                    "Look for state-run buses or trains between {} and {} on the official booking portals.",
                    origin.trim(),
                    destination.trim()
                )
            })
    }
}
