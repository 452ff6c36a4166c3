// src/shared_data.rs

use crate::error::{AdvisorError, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weather conditions recorded in the historical data and offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Clear,
    Rainy,
    Cloudy,
    Foggy,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Clear, Weather::Rainy, Weather::Cloudy, Weather::Foggy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::Rainy => "Rainy",
            Weather::Cloudy => "Cloudy",
            Weather::Foggy => "Foggy",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        Weather::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| AdvisorError::InvalidInput(format!("unknown weather '{}'", s)))
    }
}

/// Binary traffic verdict. Class 0 is low traffic, class 1 is high traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficLabel {
    Low,
    High,
}

impl TrafficLabel {
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(TrafficLabel::Low),
            1 => Some(TrafficLabel::High),
            _ => None,
        }
    }

    pub fn class(&self) -> u8 {
        match self {
            TrafficLabel::Low => 0,
            TrafficLabel::High => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TrafficLabel::Low => "Low Traffic",
            TrafficLabel::High => "High Traffic",
        }
    }
}

/// One row of the historical traffic table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    #[serde(rename = "LOCATION")]
    pub location: String,
    /// Time of observation as "HH:MM".
    #[serde(rename = "TIME")]
    pub time: String,
    #[serde(rename = "WEATHER")]
    pub weather: String,
    #[serde(rename = "VEHICLE_COUNT")]
    pub vehicle_count: u32,
}

impl HistoricalRecord {
    pub fn new(location: &str, time: &str, weather: &str, vehicle_count: u32) -> Self {
        Self {
            location: location.to_string(),
            time: time.to_string(),
            weather: weather.to_string(),
            vehicle_count,
        }
    }

    /// Hour of day of the observation, or `None` if `time` is malformed.
    pub fn hour(&self) -> Option<u8> {
        parse_hour(&self.time)
    }
}

/// Parses the hour out of an "HH:MM" string. Either part may be written with
/// one or two digits.
pub fn parse_hour(time: &str) -> Option<u8> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .ok()
        .map(|t| t.hour() as u8)
}

/// A single advisory request: travel between two named locations at a given
/// hour under the given weather.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripQuery {
    pub origin: String,
    pub destination: String,
    pub hour: u8,
    pub weather: Weather,
}

impl TripQuery {
    pub fn new(origin: &str, destination: &str, hour: u8, weather: Weather) -> Result<Self> {
        if hour > 23 {
            return Err(AdvisorError::InvalidInput(format!(
                "hour must be within 0-23, got {}",
                hour
            )));
        }
        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            hour,
            weather,
        })
    }
}

/// One alternative route as returned by the directions provider,
/// normalized to kilometres and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    /// 1-based position in the provider's response.
    pub index: usize,
    pub distance_km: f64,
    pub duration_min: f64,
}

impl RouteCandidate {
    pub fn new(index: usize, distance_km: f64, duration_min: f64) -> Self {
        Self {
            index,
            distance_km,
            duration_min,
        }
    }

    /// Distance and duration are both finite and non-negative. Candidates
    /// failing this never win route selection.
    pub fn is_well_formed(&self) -> bool {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        valid(self.distance_km) && valid(self.duration_min)
    }

    /// Builds a candidate from the provider's raw summary (metres, seconds).
    pub fn from_provider_summary(index: usize, distance_m: f64, duration_s: f64) -> Self {
        Self::new(index, distance_m / 1000.0, duration_s / 60.0)
    }
}

/// Display color used by the map layer for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteColor {
    Blue,
    Green,
    Purple,
    /// Reserved for the recommended route.
    Orange,
}

impl RouteColor {
    pub const PALETTE: [RouteColor; 3] = [RouteColor::Blue, RouteColor::Green, RouteColor::Purple];
    pub const RECOMMENDED: RouteColor = RouteColor::Orange;

    /// Palette color for the route at zero-based `position`.
    pub fn for_position(position: usize) -> Self {
        Self::PALETTE[position % Self::PALETTE.len()]
    }
}

/// A candidate route annotated by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRoute {
    pub index: usize,
    pub distance_km: f64,
    pub duration_min: f64,
    pub is_best: bool,
    pub color: RouteColor,
}

/// The decision record handed to presentation and map layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub traffic_label: TrafficLabel,
    pub confidence: f64,
    pub vehicle_count_estimate: u32,
    /// `None` when no candidate routes were supplied.
    pub best_route_index: Option<usize>,
    pub routes: Vec<AnnotatedRoute>,
}

impl Recommendation {
    pub fn best_route(&self) -> Option<&AnnotatedRoute> {
        self.routes.iter().find(|r| r.is_best)
    }
}
