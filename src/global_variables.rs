// Historical estimate used when no record matches the destination.
pub const DEFAULT_VEHICLE_COUNT: u32 = 75;

// Verdict returned when the classifier cannot be consulted.
pub const FALLBACK_TRAFFIC_CLASS: u8 = 1;
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

// Classifier schema field names
pub const FIELD_HOUR: &str = "HOUR";
pub const FIELD_VEHICLE_COUNT: &str = "VEHICLE_COUNT";
pub const WEATHER_FIELD_PREFIX: &str = "WEATHER_";
pub const LOCATION_FIELD_PREFIX: &str = "LOCATION_";

// Directions provider request settings
pub const DIRECTIONS_PROFILE: &str = "driving-car";
pub const ROUTE_SHARE_FACTOR: f64 = 0.5;
pub const MAX_ALTERNATIVE_ROUTES: usize = 3;

// Advisory thresholds
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;
pub const QUICK_JOURNEY_MINUTES: f64 = 20.0;
pub const MODERATE_JOURNEY_MINUTES: f64 = 45.0;
pub const GOOD_ALTERNATIVE_MARGIN_MINUTES: f64 = 5.0;

// Gauge values for the traffic level indicator (0-100)
pub const LOW_TRAFFIC_LEVEL: u8 = 30;
pub const HIGH_TRAFFIC_LEVEL: u8 = 80;
