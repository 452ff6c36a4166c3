// historical_estimator.rs
//
// Expected vehicle count at a location, derived from historical observations.
// The lookup cascades from the most specific filter (location, hour, weather)
// to the coarsest (location only) and answers from the first tier that has
// at least one matching record.

use crate::global_variables::DEFAULT_VEHICLE_COUNT;
use crate::shared_data::{HistoricalRecord, Weather};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which filter of the cascade produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstimateTier {
    LocationHourWeather,
    LocationHour,
    Location,
    /// Nothing matched; the configured default was used.
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleEstimate {
    pub vehicle_count: u32,
    pub tier: EstimateTier,
    pub matched_records: usize,
}

/// Historical records indexed by location. Built once per session and only
/// read afterwards.
#[derive(Debug, Clone, Default)]
pub struct HistoricalData {
    records: Vec<HistoricalRecord>,
    by_location: HashMap<String, Vec<usize>>,
}

impl HistoricalData {
    pub fn new(records: Vec<HistoricalRecord>) -> Self {
        let mut by_location: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            by_location.entry(record.location.clone()).or_default().push(i);
        }
        Self {
            records,
            by_location,
        }
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Runs the cascade against the records of `location` only.
    pub fn estimate_for(
        &self,
        location: &str,
        hour: u8,
        weather: Weather,
        default_count: u32,
    ) -> VehicleEstimate {
        if self.records.is_empty() {
            log::debug!("No historical records loaded; using default {}", default_count);
        }
        let at_location = self
            .by_location
            .get(location)
            .map(|indices| indices.iter().map(|&i| &self.records[i]).collect::<Vec<_>>())
            .unwrap_or_default();
        cascade(location, hour, weather, at_location, default_count)
    }
}

/// Expected vehicle count for `location` at `hour` under `weather`, falling
/// back to 75 when nothing matches.
pub fn estimate(location: &str, hour: u8, weather: Weather, records: &[HistoricalRecord]) -> u32 {
    estimate_with_tier(location, hour, weather, records, DEFAULT_VEHICLE_COUNT).vehicle_count
}

/// Same as [`estimate`] with an explicit default, also reporting the tier
/// that answered.
pub fn estimate_with_tier(
    location: &str,
    hour: u8,
    weather: Weather,
    records: &[HistoricalRecord],
    default_count: u32,
) -> VehicleEstimate {
    if records.is_empty() {
        log::debug!("No historical records loaded; using default {}", default_count);
    }
    let at_location: Vec<&HistoricalRecord> =
        records.iter().filter(|r| r.location == location).collect();
    cascade(location, hour, weather, at_location, default_count)
}

// `at_location` already satisfies the location filter.
fn cascade(
    location: &str,
    hour: u8,
    weather: Weather,
    at_location: Vec<&HistoricalRecord>,
    default_count: u32,
) -> VehicleEstimate {
    let at_hour: Vec<&HistoricalRecord> = at_location
        .iter()
        .copied()
        .filter(|r| r.hour() == Some(hour))
        .collect();
    let at_hour_and_weather: Vec<&HistoricalRecord> = at_hour
        .iter()
        .copied()
        .filter(|r| r.weather == weather.as_str())
        .collect();

    let tiers = [
        (EstimateTier::LocationHourWeather, &at_hour_and_weather),
        (EstimateTier::LocationHour, &at_hour),
        (EstimateTier::Location, &at_location),
    ];

    for (tier, matches) in tiers {
        if let Some(vehicle_count) = mean_vehicle_count(matches) {
            log::debug!(
                "[Estimate] {} @ {:02}:00 ({}): {} vehicles from {} record(s), tier {:?}",
                location,
                hour,
                weather,
                vehicle_count,
                matches.len(),
                tier
            );
            return VehicleEstimate {
                vehicle_count,
                tier,
                matched_records: matches.len(),
            };
        }
    }

    log::debug!(
        "[Estimate] {} @ {:02}:00 ({}): no history, using default {}",
        location,
        hour,
        weather,
        default_count
    );
    VehicleEstimate {
        vehicle_count: default_count,
        tier: EstimateTier::Default,
        matched_records: 0,
    }
}

fn mean_vehicle_count(records: &[&HistoricalRecord]) -> Option<u32> {
    if records.is_empty() {
        return None;
    }
    let sum: u64 = records.iter().map(|r| r.vehicle_count as u64).sum();
    Some((sum as f64 / records.len() as f64).round() as u32)
}
