// feature_encoder.rs
//
// Turns a (location, hour, weather, vehicle count) query into the numeric
// vector the traffic classifier was trained on. The classifier's input schema
// is only known at load time, so the encoder is driven by a `ClassifierSchema`
// rather than by a fixed field list.

use crate::error::{AdvisorError, Result};
use crate::global_variables::{
    FIELD_HOUR, FIELD_VEHICLE_COUNT, LOCATION_FIELD_PREFIX, WEATHER_FIELD_PREFIX,
};
use crate::shared_data::Weather;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Ordered input field names declared by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierSchema {
    fields: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ClassifierSchema {
    /// Fails when `fields` is empty. Duplicate names keep their first position.
    pub fn new(fields: Vec<String>) -> Result<Self> {
        if fields.is_empty() {
            return Err(AdvisorError::Schema(
                "classifier declared no input fields".to_string(),
            ));
        }
        let mut positions = HashMap::with_capacity(fields.len());
        for (i, name) in fields.iter().enumerate() {
            positions.entry(name.clone()).or_insert(i);
        }
        Ok(Self { fields, positions })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.positions.contains_key(field)
    }

    /// Location names with a one-hot slot, sorted and deduplicated.
    pub fn locations(&self) -> Vec<String> {
        self.family(LOCATION_FIELD_PREFIX)
    }

    /// Weather names with a one-hot slot, sorted and deduplicated.
    pub fn weathers(&self) -> Vec<String> {
        self.family(WEATHER_FIELD_PREFIX)
    }

    pub fn recognizes_location(&self, location: &str) -> bool {
        self.contains(&location_field(location))
    }

    pub fn recognizes_weather(&self, weather: Weather) -> bool {
        self.contains(&weather_field(weather))
    }

    fn family(&self, prefix: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter_map(|f| f.strip_prefix(prefix))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Encodes one query. Infallible because the schema is non-empty by
    /// construction.
    pub fn encode(
        &self,
        hour: u8,
        vehicle_count: u32,
        weather: Weather,
        location: &str,
    ) -> FeatureVector {
        let mut values = vec![0.0; self.fields.len()];

        let mut set = |field: &str, value: f64| -> bool {
            match self.positions.get(field) {
                Some(&i) => {
                    values[i] = value;
                    true
                }
                None => false,
            }
        };

        set(FIELD_HOUR, hour as f64);
        set(FIELD_VEHICLE_COUNT, vehicle_count as f64);
        if !set(&weather_field(weather), 1.0) {
            log::debug!("Weather '{}' has no slot in the classifier schema", weather);
        }
        if !set(&location_field(location), 1.0) {
            log::debug!("Location '{}' has no slot in the classifier schema", location);
        }

        FeatureVector {
            fields: self.fields.clone(),
            values,
        }
    }
}

pub fn weather_field(weather: Weather) -> String {
    format!("{}{}", WEATHER_FIELD_PREFIX, weather)
}

pub fn location_field(location: &str) -> String {
    format!("{}{}", LOCATION_FIELD_PREFIX, location)
}

/// Encodes a query against a bare list of schema field names.
/// Fails with a schema error when the list is empty.
pub fn encode(
    schema_fields: &[String],
    hour: u8,
    vehicle_count: u32,
    weather: Weather,
    location: &str,
) -> Result<FeatureVector> {
    let schema = ClassifierSchema::new(schema_fields.to_vec())?;
    Ok(schema.encode(hour, vehicle_count, weather, location))
}

/// Field name to value mapping in schema order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    fields: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Dense values in schema order, as fed to the model.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of the first field named `field`.
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields
            .iter()
            .position(|f| f == field)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Names of the one-hot fields under `prefix` that are set.
    pub fn active_one_hot(&self, prefix: &str) -> Vec<&str> {
        self.iter()
            .filter(|(name, value)| name.starts_with(prefix) && *value == 1.0)
            .map(|(name, _)| name)
            .collect()
    }
}
