//! Route response models
//!
//! Typed representations of the Virtual Earth REST response envelope:
//! resource sets containing route resources, which contain legs, which
//! contain turn-by-turn itinerary items. Every field is optional or
//! defaulted so that minimal bodies such as `{"resourceSets":[]}` parse.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level REST response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteResponse {
    /// Service-reported status code (200 even for some soft failures)
    pub status_code: Option<u16>,
    /// Human-readable status
    pub status_description: Option<String>,
    /// `ValidCredentials` on an accepted key
    pub authentication_result_code: Option<String>,
    /// Correlation id for support requests
    pub trace_id: Option<String>,
    /// One resource set per request; routes live inside
    pub resource_sets: Vec<ResourceSet>,
}

impl RouteResponse {
    /// The first route resource of the first resource set, if any
    #[must_use]
    pub fn first_route(&self) -> Option<&Route> {
        self.resource_sets.first()?.resources.first()
    }

    /// All route resources across resource sets
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.resource_sets.iter().flat_map(|set| &set.resources)
    }
}

/// A set of route resources
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceSet {
    /// Total matching resources as estimated by the service
    pub estimated_total: Option<u32>,
    /// The route resources themselves
    pub resources: Vec<Route>,
}

/// A single computed route
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Route {
    /// Unit for `travel_distance` (`Mile` or `Kilometer`)
    pub distance_unit: Option<String>,
    /// Unit for `travel_duration` (`Second`)
    pub duration_unit: Option<String>,
    /// Total distance in `distance_unit`
    pub travel_distance: Option<f64>,
    /// Total duration in `duration_unit`
    pub travel_duration: Option<f64>,
    /// Duration including current traffic, when the service provides it
    pub travel_duration_traffic: Option<f64>,
    /// Mode the route was computed for
    pub travel_mode: Option<String>,
    /// The legs of the route; one per waypoint pair
    pub route_legs: Vec<RouteLeg>,
}

impl Route {
    /// Total travel duration in whole minutes, zero when absent
    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        let secs = self.travel_duration.unwrap_or(0.0).max(0.0);
        (secs / 60.0).round() as u32
    }

    /// Compact one-line summary, e.g. `2.4 Mile, 37min, 12 steps`
    #[must_use]
    pub fn format_summary(&self) -> String {
        let distance = self.travel_distance.unwrap_or(0.0);
        let unit = self.distance_unit.as_deref().unwrap_or("Mile");
        let steps: usize = self
            .route_legs
            .iter()
            .map(|leg| leg.itinerary_items.len())
            .sum();
        format!(
            "{distance:.1} {unit}, {}min, {steps} steps",
            self.duration_minutes()
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_summary())
    }
}

/// One leg of a route, between two consecutive waypoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteLeg {
    /// Leg distance in the route's distance unit
    pub travel_distance: Option<f64>,
    /// Leg duration in seconds
    pub travel_duration: Option<f64>,
    /// Where the leg actually starts
    pub actual_start: Option<Point>,
    /// Where the leg actually ends
    pub actual_end: Option<Point>,
    /// Turn-by-turn steps
    pub itinerary_items: Vec<ItineraryItem>,
}

/// A turn-by-turn step within a leg
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryItem {
    /// The instruction text for this step
    pub instruction: Option<Instruction>,
    /// Step distance in the route's distance unit
    pub travel_distance: Option<f64>,
    /// Step duration in seconds
    pub travel_duration: Option<f64>,
    /// Compass heading entering the step (`north`, `southwest`, ...)
    pub compass_direction: Option<String>,
    /// Transit, walking or driving for this step
    pub travel_mode: Option<String>,
}

/// A maneuver instruction
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Instruction {
    /// Maneuver category (`TurnLeft`, `TakeTransit`, ...)
    pub maneuver_type: Option<String>,
    /// The plain instruction text
    pub text: Option<String>,
}

/// A geographic point as returned by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Point {
    /// Shape type, always `Point`
    #[serde(rename = "type")]
    pub point_type: Option<String>,
    /// `[latitude, longitude]`
    pub coordinates: Vec<f64>,
}
