//! Region-name normalization.
//!
//! Source data names regions inconsistently: `"CA"`, `"ca"`, `"California"`,
//! `"  california "`.  Everything downstream compares [`RegionCode`]s only,
//! so every region string is funnelled through [`normalize_region`] on the
//! way in, both from records and from user input.
//!
//! | Input                                  | Result                     |
//! |----------------------------------------|----------------------------|
//! | two ASCII letters                      | uppercased as-is           |
//! | US state / territory name (any case)   | its postal abbreviation    |
//! | anything else non-blank                | uppercased pass-through    |
//! | blank                                  | `None`                     |

use cg_core::RegionCode;

/// US states, DC, and inhabited territories with their postal codes.
const US_REGIONS: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
    ("district of columbia", "DC"),
    ("washington dc", "DC"),
    ("washington d.c.", "DC"),
    ("puerto rico", "PR"),
    ("guam", "GU"),
    ("us virgin islands", "VI"),
    ("u.s. virgin islands", "VI"),
    ("american samoa", "AS"),
    ("northern mariana islands", "MP"),
];

/// Canonical region code for a raw region string; `None` if blank.
pub fn normalize_region(raw: &str) -> Option<RegionCode> {
    // Collapse internal runs of whitespace and drop commas so
    // "Washington,  D.C." and "washington d.c." meet.
    let key = raw
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if key.is_empty() {
        return None;
    }

    if key.len() == 2 && key.chars().all(|c| c.is_ascii_alphabetic()) {
        return RegionCode::new(&key);
    }

    match US_REGIONS.iter().find(|(name, _)| *name == key) {
        Some((_, code)) => RegionCode::new(code),
        None => RegionCode::new(&key),
    }
}
