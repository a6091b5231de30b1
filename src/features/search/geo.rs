use crate::features::{
    listings::models::{Coordinates, Listing},
    schemas::LocationFilter,
};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance (haversine).
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Listings without coordinates are kept: their distance is unknown, not infinite.
pub fn matches(listing: &Listing, location: &LocationFilter) -> bool {
    let Some(center) = location.center else {
        return true;
    };

    match listing.coordinates {
        Some(coordinates) => distance_km(coordinates, center) <= location.radius_km,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sell_listing;

    const TASHKENT: Coordinates = Coordinates {
        lat: 41.2995,
        lng: 69.2401,
    };
    const SAMARKAND: Coordinates = Coordinates {
        lat: 39.6270,
        lng: 66.9750,
    };

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_km(TASHKENT, TASHKENT), 0.0);
        assert_eq!(distance_km(SAMARKAND, SAMARKAND), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = distance_km(TASHKENT, SAMARKAND);
        let back = distance_km(SAMARKAND, TASHKENT);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance() {
        // Roughly 270 km as the crow flies.
        let d = distance_km(TASHKENT, SAMARKAND);
        assert!((260.0..280.0).contains(&d), "got {d}");
    }

    #[test]
    fn test_no_center_matches_everything() {
        let mut listing = sell_listing("Golf", "1");
        listing.coordinates = Some(SAMARKAND);
        assert!(matches(&listing, &LocationFilter::default()));
    }

    #[test]
    fn test_radius() {
        let mut listing = sell_listing("Golf", "1");
        listing.coordinates = Some(SAMARKAND);

        let near = LocationFilter {
            center: Some(TASHKENT),
            radius_km: 50.0,
        };
        assert!(!matches(&listing, &near));

        let wide = LocationFilter {
            center: Some(TASHKENT),
            radius_km: 300.0,
        };
        assert!(matches(&listing, &wide));
    }

    #[test]
    fn test_missing_coordinates_fail_open() {
        let listing = sell_listing("Golf", "1");
        let location = LocationFilter {
            center: Some(TASHKENT),
            radius_km: 1.0,
        };
        assert!(matches(&listing, &location));
    }
}
