use route_advisor::advisor::{traffic_insights, AdvisorContext, TrafficInsights};
use route_advisor::data_loader::{
    load_candidates, load_config, load_gazetteer, load_historical_records, load_logistic_model,
};
use route_advisor::route_planner::{
    compare_routes, Coordinates, DirectionsRequest, LocationGazetteer, RouteComparison,
};
use route_advisor::{Recommendation, TrafficClassifier, TripQuery, Weather};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;

/// One entry of the trips file. `routes` points at the directions provider's
/// GeoJSON response for this trip.
#[derive(Debug, Deserialize)]
struct TripRequest {
    origin: String,
    destination: String,
    hour: u8,
    weather: Weather,
    routes: PathBuf,
}

#[derive(Debug, Serialize)]
struct TripAdvice {
    trip: TripQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    directions_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    directions_request: Option<DirectionsRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    map_center: Option<Coordinates>,
    recommendation: Recommendation,
    comparison: RouteComparison,
    insights: TrafficInsights,
}

fn advise(
    request: &TripRequest,
    ctx: &AdvisorContext,
    classifier: &dyn TrafficClassifier,
    gazetteer: Option<&LocationGazetteer>,
) -> Result<TripAdvice, Box<dyn Error + Send + Sync>> {
    let trip = TripQuery::new(&request.origin, &request.destination, request.hour, request.weather)?;
    let config = ctx.config();

    let (directions_request, map_center) = match gazetteer {
        Some(g) => (
            Some(DirectionsRequest::for_trip(g, &trip.origin, &trip.destination, config)?),
            Some(g.midpoint(&trip.origin, &trip.destination)?),
        ),
        None => (None, None),
    };
    let directions_endpoint = directions_request.as_ref().map(DirectionsRequest::endpoint_path);

    let candidates = match load_candidates(&request.routes, config.alternative_route_target_count) {
        Ok(c) => c,
        Err(e) => {
            // Traffic verdict is still useful without routes.
            log::error!("Error reading routes for {} -> {}: {}", trip.origin, trip.destination, e);
            Vec::new()
        }
    };

    let recommendation = ctx.recommend(&trip, classifier, &candidates);
    let comparison = compare_routes(&recommendation.routes, config);
    let insights = traffic_insights(&recommendation, trip.weather, config);

    Ok(TripAdvice {
        trip,
        directions_endpoint,
        directions_request,
        map_center,
        recommendation,
        comparison,
        insights,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!(
            "Usage: {} <records.csv> <model.json> <trips.json>\n\
             Optional: ROUTE_ADVISOR_CONFIG=<config.json> ROUTE_ADVISOR_GAZETTEER=<locations.csv>",
            args[0]
        );
        std::process::exit(2);
    }

    let config_path = std::env::var("ROUTE_ADVISOR_CONFIG").ok().map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    let records = load_historical_records(Path::new(&args[1]))?;
    let model = load_logistic_model(Path::new(&args[2]))?;
    let trips: Vec<TripRequest> = serde_json::from_str(&std::fs::read_to_string(&args[3])?)?;

    let gazetteer = match std::env::var("ROUTE_ADVISOR_GAZETTEER") {
        Ok(path) => Some(Arc::new(load_gazetteer(Path::new(&path))?)),
        Err(_) => None,
    };

    let ctx = Arc::new(AdvisorContext::with_schema(records, model.schema()?, config));
    let classifier: Arc<dyn TrafficClassifier> = Arc::new(model);

    log::info!("Advising {} trip(s)", trips.len());

    let handles: Vec<_> = trips
        .into_iter()
        .map(|request| {
            let ctx = Arc::clone(&ctx);
            let classifier = Arc::clone(&classifier);
            let gazetteer = gazetteer.clone();
            task::spawn_blocking(move || {
                let advice = advise(&request, &ctx, classifier.as_ref(), gazetteer.as_deref());
                (request, advice)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok((_, Ok(advice))) => results.push(advice),
            Ok((request, Err(e))) => eprintln!(
                "Skipping trip {} -> {}: {}",
                request.origin, request.destination, e
            ),
            Err(e) => eprintln!("Trip task failed: {}", e),
        }
    }

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
