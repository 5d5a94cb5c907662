//! End-to-end checks of the catalog pipeline: time, transform, projection
//! and appearance together.

use approx::assert_abs_diff_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use float_cmp::approx_eq;
use rstest::{fixture, rstest};

use skymap::catalogs::bright_stars;
use skymap::{
    equatorial_to_horizontal, julian_day, local_sidereal_time, process_catalog, project,
    CatalogEntry, Location, ObserverContext, StarColor, Viewport,
};

#[fixture]
fn evening() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap()
}

#[fixture]
fn nairobi_evening(evening: DateTime<Utc>) -> ObserverContext {
    ObserverContext::new(Location::nairobi(), evening)
}

fn sirius() -> CatalogEntry {
    bright_stars()
        .iter()
        .find(|s| s.name == "Sirius")
        .cloned()
        .unwrap()
}

#[rstest]
fn test_sirius_from_nairobi_sidereal_time(evening: DateTime<Utc>) {
    assert!(approx_eq!(
        f64,
        julian_day(&evening),
        2460325.333_333_333_5,
        epsilon = 1e-6
    ));
    let lst = local_sidereal_time(36.8219, &evening);
    assert_abs_diff_eq!(lst, 91.594_966, epsilon = 1e-4);
}

#[rstest]
fn test_sirius_from_nairobi_position(nairobi_evening: ObserverContext) {
    let star = sirius();
    let h = equatorial_to_horizontal(
        star.ra_hours * 15.0,
        star.dec_deg,
        nairobi_evening.local_sidereal_time(),
        nairobi_evening.location.latitude,
    );

    // Sirius is just east of the meridian, high in the south-east
    assert_abs_diff_eq!(h.azimuth, 148.80, epsilon = 0.05);
    assert_abs_diff_eq!(h.altitude, 71.86, epsilon = 0.05);
    assert!(h.azimuth < 180.0);
    assert!(h.is_above_horizon());
}

#[rstest]
fn test_sirius_below_horizon_in_the_morning(nairobi_evening: ObserverContext) {
    let morning = nairobi_evening.shifted(Duration::hours(-12)).unwrap();
    let result = process_catalog(&[sirius()], &morning, Viewport::default(), 6.0);
    assert!(result.is_empty());

    let h = equatorial_to_horizontal(
        sirius().ra_hours * 15.0,
        sirius().dec_deg,
        morning.local_sidereal_time(),
        morning.location.latitude,
    );
    assert_abs_diff_eq!(h.altitude, -69.38, epsilon = 0.05);
}

#[rstest]
fn test_sirius_rendered(nairobi_evening: ObserverContext) {
    let result = process_catalog(bright_stars(), &nairobi_evening, Viewport::default(), 6.0);
    let rendered = result.iter().find(|r| r.entry.name == "Sirius").unwrap();

    assert!(rendered.screen.visible);
    assert_eq!(rendered.color, StarColor::White);
    assert_abs_diff_eq!(rendered.size, 9.752, epsilon = 1e-9);

    let expected = project(
        rendered.horizontal.azimuth,
        rendered.horizontal.altitude,
        &Viewport::default(),
    );
    assert_eq!(rendered.screen, expected);
    assert_abs_diff_eq!(rendered.screen.x, 148.80 / 360.0 * 1920.0, epsilon = 0.5);
}

#[rstest]
fn test_processing_is_deterministic(nairobi_evening: ObserverContext) {
    let first = process_catalog(bright_stars(), &nairobi_evening, Viewport::default(), 6.0);
    let second = process_catalog(
        bright_stars(),
        &nairobi_evening.clone(),
        Viewport::default(),
        6.0,
    );
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[rstest]
#[case(-1.0)]
#[case(0.5)]
#[case(1.5)]
#[case(6.0)]
fn test_magnitude_filter_property(nairobi_evening: ObserverContext, #[case] limit: f64) {
    let result = process_catalog(bright_stars(), &nairobi_evening, Viewport::default(), limit);
    assert!(result.iter().all(|r| r.entry.magnitude <= limit));
    assert!(result.iter().all(|r| r.screen.visible));
}

#[rstest]
fn test_output_preserves_catalog_order(nairobi_evening: ObserverContext) {
    let result = process_catalog(bright_stars(), &nairobi_evening, Viewport::default(), 6.0);
    let positions: Vec<usize> = result
        .iter()
        .map(|r| bright_stars().iter().position(|s| s.id == r.entry.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_ranges_over_a_day_and_several_sites() {
    let start = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
    let sites = [
        Location::new(-1.2921, 36.8219),
        Location::new(51.4779, -0.0015),
        Location::new(-33.8688, 151.2093),
        Location::new(89.9, 0.0),
    ];

    for site in sites {
        for hour in (0..24).step_by(3) {
            let context = ObserverContext::new(site.clone(), start + Duration::hours(hour));
            let lst = context.local_sidereal_time();
            for star in bright_stars() {
                let ra_deg = star.ra_hours * 15.0;
                let h = equatorial_to_horizontal(ra_deg, star.dec_deg, lst, site.latitude);
                assert!((0.0..360.0).contains(&h.azimuth), "{} az {}", star.name, h.azimuth);
                assert!((-90.0..=90.0).contains(&h.altitude), "{} alt {}", star.name, h.altitude);
            }
        }
    }
}

#[rstest]
fn test_small_viewport_keeps_margin(nairobi_evening: ObserverContext) {
    // A narrow canvas only keeps objects within 100 px of its edges
    let viewport = Viewport::new(200.0, 400.0);
    let result = process_catalog(bright_stars(), &nairobi_evening, viewport, 6.0);
    for r in &result {
        assert!(
            r.screen.x >= -100.0 && r.screen.x <= 300.0,
            "{} x {}",
            r.entry.name,
            r.screen.x
        );
        assert!(r.horizontal.altitude > -25.0);
    }
}

#[rstest]
fn test_time_travel_moves_the_sky(nairobi_evening: ObserverContext) {
    let now = process_catalog(bright_stars(), &nairobi_evening, Viewport::default(), 6.0);
    let later = process_catalog(
        bright_stars(),
        &nairobi_evening.shifted(Duration::hours(6)).unwrap(),
        Viewport::default(),
        6.0,
    );
    assert_ne!(now, later);
}
