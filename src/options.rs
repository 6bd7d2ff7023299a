//! Per-mode route request options
//!
//! Each travel mode carries only the parameters relevant to it, decided at
//! compile time. Transit requests additionally carry a departure time and
//! an itinerary count; walking and driving requests do not.

use std::fmt;

use chrono::{DateTime, Utc};

/// Timestamp format expected by the Routes API for `dt` (e.g. `6/20/2026 14:05:00`)
const TRAVEL_TIME_FORMAT: &str = "%-m/%-d/%Y %-H:%M:%S";

/// The supported travel modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    /// Public transit directions
    Transit,
    /// Walking directions
    Walking,
    /// Driving directions
    Driving,
}

impl TravelMode {
    /// The mode-specific URL resource path
    #[must_use]
    pub const fn resource_path(self) -> &'static str {
        match self {
            Self::Transit => "Routes/Transit",
            Self::Walking => "Routes/Walking",
            Self::Driving => "Routes/Driving",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transit => "transit",
            Self::Walking => "walking",
            Self::Driving => "driving",
        };
        write!(f, "{name}")
    }
}

/// Route optimization strategy (`optmz` parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optimize {
    /// Shortest travel time
    Time,
    /// Shortest distance
    Distance,
}

impl Optimize {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Distance => "distance",
        }
    }
}

/// Distance unit (`du` parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    /// Miles
    Miles,
    /// Kilometers
    Kilometers,
}

impl DistanceUnit {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Miles => "mi",
            Self::Kilometers => "km",
        }
    }
}

/// How the transit `dt` timestamp is interpreted (`tt` parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeType {
    /// The timestamp is the desired departure time
    Departure,
    /// The timestamp is the desired arrival time
    Arrival,
    /// The timestamp bounds the last available itinerary
    LastAvailable,
}

impl TimeType {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Departure => "Departure",
            Self::Arrival => "Arrival",
            Self::LastAvailable => "LastAvailable",
        }
    }
}

/// Resolved request options for one route call, discriminated by mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOptions {
    /// Transit options: departure time and itinerary count on top of the
    /// common parameters
    Transit {
        /// Optimization strategy, `time` by default
        optimize: Optimize,
        /// Distance unit, miles by default
        distance_unit: DistanceUnit,
        /// Requested departure (or arrival) time
        travel_time: DateTime<Utc>,
        /// Interpretation of `travel_time`
        time_type: TimeType,
        /// Maximum number of itineraries to return
        max_solutions: u8,
    },
    /// Walking options
    Walking {
        /// Optimization strategy, `distance` by default
        optimize: Optimize,
        /// Distance unit, miles by default
        distance_unit: DistanceUnit,
    },
    /// Driving options
    Driving {
        /// Optimization strategy, `time` by default
        optimize: Optimize,
        /// Distance unit, miles by default
        distance_unit: DistanceUnit,
    },
}

impl RouteOptions {
    /// Default transit options: optimize for time, depart at `travel_time`,
    /// up to `max_solutions` itineraries
    #[must_use]
    pub const fn transit(travel_time: DateTime<Utc>, max_solutions: u8) -> Self {
        Self::Transit {
            optimize: Optimize::Time,
            distance_unit: DistanceUnit::Miles,
            travel_time,
            time_type: TimeType::Departure,
            max_solutions,
        }
    }

    /// Default walking options: optimize for distance
    #[must_use]
    pub const fn walking() -> Self {
        Self::Walking {
            optimize: Optimize::Distance,
            distance_unit: DistanceUnit::Miles,
        }
    }

    /// Default driving options: optimize for time
    #[must_use]
    pub const fn driving() -> Self {
        Self::Driving {
            optimize: Optimize::Time,
            distance_unit: DistanceUnit::Miles,
        }
    }

    /// The travel mode these options belong to
    #[must_use]
    pub const fn mode(&self) -> TravelMode {
        match self {
            Self::Transit { .. } => TravelMode::Transit,
            Self::Walking { .. } => TravelMode::Walking,
            Self::Driving { .. } => TravelMode::Driving,
        }
    }

    /// The query parameters for these options, in wire order
    ///
    /// Common parameters (`o`, `optmz`, `du`) come first; the transit-only
    /// `dt`, `tt` and `maxSolutions` follow only for transit options.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Transit {
                optimize,
                distance_unit,
                travel_time,
                time_type,
                max_solutions,
            } => vec![
                ("o", "json".to_string()),
                ("optmz", optimize.as_str().to_string()),
                ("du", distance_unit.as_str().to_string()),
                ("dt", travel_time.format(TRAVEL_TIME_FORMAT).to_string()),
                ("tt", time_type.as_str().to_string()),
                ("maxSolutions", max_solutions.to_string()),
            ],
            Self::Walking {
                optimize,
                distance_unit,
            }
            | Self::Driving {
                optimize,
                distance_unit,
            } => vec![
                ("o", "json".to_string()),
                ("optmz", optimize.as_str().to_string()),
                ("du", distance_unit.as_str().to_string()),
            ],
        }
    }
}
