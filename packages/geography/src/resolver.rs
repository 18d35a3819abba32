//! District name resolution.
//!
//! A resolver turns a report's district list into one coordinate. The only
//! implementation shipped is the exact-match [`crate::DistrictTable`]; the
//! trait exists so fuzzier resolvers can be swapped in without touching the
//! pipeline.

use outbreak_map_report_models::Coordinate;

/// Looks up map coordinates for district names.
pub trait DistrictResolver: Send + Sync {
    /// Returns the coordinate for a single district name, if known.
    fn lookup(&self, district: &str) -> Option<Coordinate>;

    /// Returns the coordinate of the first district in `districts` (in list
    /// order) that [`Self::lookup`] knows about.
    fn resolve(&self, districts: &[String]) -> Option<Coordinate> {
        districts.iter().find_map(|d| self.lookup(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyPune;

    impl DistrictResolver for OnlyPune {
        fn lookup(&self, district: &str) -> Option<Coordinate> {
            (district == "Pune").then_some(Coordinate::new(73.85, 18.52))
        }
    }

    #[test]
    fn resolve_skips_unknown_districts() {
        let districts = vec!["Atlantis".to_string(), "Pune".to_string()];
        assert_eq!(
            OnlyPune.resolve(&districts),
            Some(Coordinate::new(73.85, 18.52))
        );
    }

    #[test]
    fn resolve_returns_none_without_match() {
        assert_eq!(OnlyPune.resolve(&["Atlantis".to_string()]), None);
        assert_eq!(OnlyPune.resolve(&[]), None);
    }
}
