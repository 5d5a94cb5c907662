//! Bundled list of the brightest naked-eye stars.
//!
//! Used when no external catalog has been loaded. Positions are J2000
//! Hipparcos values, RA in hours.

use once_cell::sync::Lazy;

use super::CatalogEntry;

#[allow(clippy::too_many_arguments)]
fn star(
    id: &str,
    name: &str,
    common_name: &str,
    constellation: &str,
    ra_hours: f64,
    dec_deg: f64,
    magnitude: f64,
    spectral_class: &str,
    temperature_k: f64,
    distance_ly: f64,
) -> CatalogEntry {
    CatalogEntry::new(id, name, constellation, ra_hours, dec_deg, magnitude, spectral_class)
        .with_common_name(common_name)
        .with_temperature(temperature_k)
        .with_distance(distance_ly)
}

static BRIGHT_STARS: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    #[rustfmt::skip]
    let stars = vec![
        // Alpha Centauri system
        star("HIP71683", "Alpha Centauri A", "Rigil Kentaurus", "Centaurus", 14.6599, -60.8354, -0.01, "G2V", 5790.0, 4.37),
        star("HIP71681", "Alpha Centauri B", "Toliman", "Centaurus", 14.6599, -60.8354, 1.33, "K1V", 5260.0, 4.37),
        // Brightest stars in the sky
        star("HIP32349", "Sirius", "Alpha Canis Majoris", "Canis Major", 6.7525, -16.7161, -1.46, "A1V", 9940.0, 8.6),
        star("HIP30438", "Canopus", "Alpha Carinae", "Carina", 6.3992, -52.6956, -0.74, "A9II", 7350.0, 310.0),
        star("HIP69673", "Arcturus", "Alpha Bootis", "Bootes", 14.2610, 19.1824, -0.05, "K1.5III", 4290.0, 36.7),
        star("HIP91262", "Vega", "Alpha Lyrae", "Lyra", 18.6156, 38.7837, 0.03, "A0V", 9602.0, 25.04),
        star("HIP24608", "Capella", "Alpha Aurigae", "Auriga", 5.2781, 45.9980, 0.08, "G5III", 4970.0, 42.9),
        star("HIP37279", "Procyon", "Alpha Canis Minoris", "Canis Minor", 7.6551, 5.2250, 0.34, "F5IV", 6530.0, 11.46),
        star("HIP97649", "Altair", "Alpha Aquilae", "Aquila", 19.8464, 8.8683, 0.77, "A7V", 7550.0, 16.73),
        // Southern sky
        star("HIP60718", "Acrux", "Alpha Crucis", "Crux", 12.4433, -63.0990, 0.77, "B0.5IV", 28000.0, 320.0),
        star("HIP68702", "Hadar", "Beta Centauri", "Centaurus", 14.0637, -60.3730, 0.61, "B1III", 25000.0, 390.0),
        star("HIP61084", "Gacrux", "Gamma Crucis", "Crux", 12.5194, -57.1133, 1.63, "M3.5III", 3626.0, 88.0),
        // Orion
        star("HIP27989", "Betelgeuse", "Alpha Orionis", "Orion", 5.9195, 7.4071, 0.50, "M1-2Ia", 3590.0, 700.0),
        star("HIP24436", "Rigel", "Beta Orionis", "Orion", 5.2423, -8.2016, 0.13, "B8Ia", 12100.0, 860.0),
        star("HIP25336", "Bellatrix", "Gamma Orionis", "Orion", 5.4188, 6.3497, 1.64, "B2III", 21800.0, 245.0),
        star("HIP25930", "Mintaka", "Delta Orionis", "Orion", 5.5334, -0.2991, 2.23, "O9.5II", 29500.0, 900.0),
        star("HIP26311", "Alnilam", "Epsilon Orionis", "Orion", 5.6036, -1.2019, 1.70, "B0Ia", 27000.0, 2000.0),
        star("HIP26727", "Alnitak", "Zeta Orionis", "Orion", 5.6793, -1.9426, 1.79, "O9.7Ib", 29000.0, 800.0),
        // Equatorial sky
        star("HIP49669", "Regulus", "Alpha Leonis", "Leo", 10.1395, 11.9672, 1.35, "B8IVn", 12460.0, 79.3),
        star("HIP65474", "Spica", "Alpha Virginis", "Virgo", 13.4199, -11.1614, 1.04, "B1III-IV", 22400.0, 250.0),
        star("HIP80763", "Antares", "Alpha Scorpii", "Scorpius", 16.4901, -26.4320, 1.09, "M1.5Iab", 3570.0, 600.0),
        star("HIP21421", "Aldebaran", "Alpha Tauri", "Taurus", 4.5987, 16.5093, 0.85, "K5III", 3910.0, 65.3),
        star("HIP37826", "Pollux", "Beta Geminorum", "Gemini", 7.7553, 28.0262, 1.14, "K0III", 4666.0, 33.78),
        star("HIP36850", "Castor", "Alpha Geminorum", "Gemini", 7.5767, 31.8883, 1.57, "A1V", 10286.0, 51.6),
        // Additional bright stars
        star("HIP102098", "Deneb", "Alpha Cygni", "Cygnus", 20.6905, 45.2803, 1.25, "A2Ia", 8525.0, 2600.0),
        star("HIP113368", "Fomalhaut", "Alpha Piscis Austrini", "Piscis Austrinus", 22.9608, -29.6222, 1.16, "A3V", 8590.0, 25.1),
        star("HIP7588", "Achernar", "Alpha Eridani", "Eridanus", 1.6286, -57.2368, 0.46, "Be", 20000.0, 139.0),
        star("HIP46390", "Alphard", "Alpha Hydrae", "Hydra", 9.4598, -8.6586, 1.98, "K3II-III", 4120.0, 177.0),
        star("HIP85927", "Shaula", "Lambda Scorpii", "Scorpius", 17.5601, -37.1038, 1.63, "B2IV", 25000.0, 570.0),
        star("HIP109268", "Alnair", "Alpha Gruis", "Grus", 22.1372, -46.9610, 1.74, "B6V", 13920.0, 101.0),
        // Big Dipper
        star("HIP54061", "Dubhe", "Alpha Ursae Majoris", "Ursa Major", 11.0621, 61.7510, 1.79, "K0III", 4660.0, 123.0),
        star("HIP53910", "Merak", "Beta Ursae Majoris", "Ursa Major", 11.0307, 56.3824, 2.37, "A1V", 9480.0, 79.7),
        star("HIP62956", "Alioth", "Epsilon Ursae Majoris", "Ursa Major", 12.9004, 55.9598, 1.77, "A1III-IVp", 9020.0, 82.6),
        // Pleiades
        star("HIP17702", "Alcyone", "Eta Tauri", "Taurus", 3.7914, 24.1051, 2.87, "B7IIIe", 12300.0, 440.0),
        star("HIP17499", "Electra", "17 Tauri", "Taurus", 3.7479, 24.1133, 3.70, "B6IIIe", 13440.0, 440.0),
    ];
    stars
});

/// The bundled bright-star catalog, grouped by region of the sky.
pub fn bright_stars() -> &'static [CatalogEntry] {
    &BRIGHT_STARS
}
