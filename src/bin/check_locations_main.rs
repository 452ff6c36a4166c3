use route_advisor::data_loader::load_logistic_model;
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let Some(model_path) = std::env::args().nth(1) else {
        eprintln!("Usage: check_locations_main <model.json>");
        std::process::exit(2);
    };

    let schema = load_logistic_model(Path::new(&model_path))?.schema()?;
    let locations = schema.locations();

    println!("Total locations in model: {}", locations.len());

    println!("\nFirst 20 locations:");
    for (i, loc) in locations.iter().take(20).enumerate() {
        println!("{:2}. {}", i + 1, loc);
    }

    println!("\nSample of all locations:");
    let step = (locations.len() / 10).max(1);
    for (i, loc) in locations.iter().enumerate().step_by(step) {
        println!("{:3}. {}", i + 1, loc);
    }

    println!("\nWeather conditions in model: {}", schema.weathers().join(", "));
    Ok(())
}
