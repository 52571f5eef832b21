//! Compass-sector classification of board angles
//!
//! Angles follow the board convention: 0 degrees is east (+X), counter-
//! clockwise positive, so 90 degrees is north. Sectors are half-open
//! `[start, end)` intervals; the eastern sector of each table wraps through
//! 0 degrees and is the only one tested with an OR instead of a range.

use serde::{Deserialize, Serialize};

/// Normalize an angle in degrees to [0, 360)
pub fn normalize_angle(angle_degrees: f64) -> f64 {
    angle_degrees.rem_euclid(360.0)
}

/// 8-way compass direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalDirection {
    E,
    NE,
    N,
    NW,
    W,
    SW,
    S,
    SE,
}

/// 16-way compass direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailedDirection {
    E,
    ENE,
    NE,
    NNE,
    N,
    NNW,
    NW,
    WNW,
    W,
    WSW,
    SW,
    SSW,
    S,
    SSE,
    SE,
    ESE,
}

/// 45-degree sectors centered on the 8 compass points
const CARDINAL_SECTORS: [(f64, f64, CardinalDirection); 8] = [
    (337.5, 22.5, CardinalDirection::E),
    (22.5, 67.5, CardinalDirection::NE),
    (67.5, 112.5, CardinalDirection::N),
    (112.5, 157.5, CardinalDirection::NW),
    (157.5, 202.5, CardinalDirection::W),
    (202.5, 247.5, CardinalDirection::SW),
    (247.5, 292.5, CardinalDirection::S),
    (292.5, 337.5, CardinalDirection::SE),
];

/// 22.5-degree sectors centered on the 16 compass points
const DETAILED_SECTORS: [(f64, f64, DetailedDirection); 16] = [
    (348.75, 11.25, DetailedDirection::E),
    (11.25, 33.75, DetailedDirection::ENE),
    (33.75, 56.25, DetailedDirection::NE),
    (56.25, 78.75, DetailedDirection::NNE),
    (78.75, 101.25, DetailedDirection::N),
    (101.25, 123.75, DetailedDirection::NNW),
    (123.75, 146.25, DetailedDirection::NW),
    (146.25, 168.75, DetailedDirection::WNW),
    (168.75, 191.25, DetailedDirection::W),
    (191.25, 213.75, DetailedDirection::WSW),
    (213.75, 236.25, DetailedDirection::SW),
    (236.25, 258.75, DetailedDirection::SSW),
    (258.75, 281.25, DetailedDirection::S),
    (281.25, 303.75, DetailedDirection::SSE),
    (303.75, 326.25, DetailedDirection::SE),
    (326.25, 348.75, DetailedDirection::ESE),
];

fn sector_contains(start: f64, end: f64, angle: f64) -> bool {
    if start > end {
        // Interval wraps through 0 degrees
        angle >= start || angle < end
    } else {
        angle >= start && angle < end
    }
}

fn classify<T: Copy>(angle_degrees: f64, sectors: &[(f64, f64, T)]) -> T {
    let angle = normalize_angle(angle_degrees);
    for &(start, end, label) in sectors {
        if sector_contains(start, end, angle) {
            return label;
        }
    }
    // Sectors cover [0, 360) completely; unreachable for finite input
    sectors[0].2
}

/// Classify an angle into one of the 8 compass sectors
pub fn cardinal_direction(angle_degrees: f64) -> CardinalDirection {
    classify(angle_degrees, &CARDINAL_SECTORS)
}

/// Classify an angle into one of the 16 compass sectors
pub fn detailed_direction(angle_degrees: f64) -> DetailedDirection {
    classify(angle_degrees, &DETAILED_SECTORS)
}

impl CardinalDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            CardinalDirection::E => "E",
            CardinalDirection::NE => "NE",
            CardinalDirection::N => "N",
            CardinalDirection::NW => "NW",
            CardinalDirection::W => "W",
            CardinalDirection::SW => "SW",
            CardinalDirection::S => "S",
            CardinalDirection::SE => "SE",
        }
    }

    /// True when the angle falls inside this direction's 45-degree sector
    pub fn contains(self, angle_degrees: f64) -> bool {
        let angle = normalize_angle(angle_degrees);
        let (start, end, _) = CARDINAL_SECTORS
            .iter()
            .find(|(_, _, d)| *d == self)
            .copied()
            .unwrap_or(CARDINAL_SECTORS[0]);
        sector_contains(start, end, angle)
    }
}

impl DetailedDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            DetailedDirection::E => "E",
            DetailedDirection::ENE => "ENE",
            DetailedDirection::NE => "NE",
            DetailedDirection::NNE => "NNE",
            DetailedDirection::N => "N",
            DetailedDirection::NNW => "NNW",
            DetailedDirection::NW => "NW",
            DetailedDirection::WNW => "WNW",
            DetailedDirection::W => "W",
            DetailedDirection::WSW => "WSW",
            DetailedDirection::SW => "SW",
            DetailedDirection::SSW => "SSW",
            DetailedDirection::S => "S",
            DetailedDirection::SSE => "SSE",
            DetailedDirection::SE => "SE",
            DetailedDirection::ESE => "ESE",
        }
    }
}
