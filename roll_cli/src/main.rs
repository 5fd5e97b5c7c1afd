//! # Rollplan CLI
//!
//! Terminal front end for quick rolling-job calculations: dial in a
//! diameter the way the operator would, and get the centerline geometry,
//! the curvature spot-check, and the stick count for a ring order.

use std::io::{self, BufRead, Write};

use roll_core::calculations::measurement::{
    resolve, MeasurementInput, MeasurementUnit, ReferencePoint,
};
use roll_core::calculations::ring::{plan, RingPlanInput};
use roll_core::calculations::sagitta;
use roll_core::describe;
use roll_core::profiles::{Catalog, ProfileKind};
use roll_core::units::parse_length;

fn prompt(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_f64(text: &str, default: f64) -> f64 {
    prompt(text, &default.to_string()).parse().unwrap_or(default)
}

fn prompt_u32(text: &str, default: u32) -> u32 {
    prompt(text, &default.to_string()).parse().unwrap_or(default)
}

fn main() {
    println!("Rollplan CLI - Rolling Job Calculator");
    println!("=====================================");
    println!();

    let catalog = Catalog::standard();
    println!("Angle sizes: {}", catalog.labels(ProfileKind::Angle).join(", "));
    let size = prompt("Angle size [L4x4x3/8]: ", "L4x4x3/8");
    let entry = match catalog.get(ProfileKind::Angle, &size) {
        Ok(entry) => *entry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let value_in = prompt_f64("Inside diameter (in) [110.0]: ", 110.0);
    let stock_text = prompt("Stock length [20']: ", "20'");
    let stock_in = match parse_length(&stock_text) {
        Some(len) => len.value(),
        None => {
            eprintln!("Error: could not parse stock length '{}'", stock_text);
            return;
        }
    };
    let tangent_in = prompt_f64("Tangent allowance per end (in) [12.0]: ", 12.0);
    let rings_needed = prompt_u32("Rings needed [2]: ", 2);

    println!();

    let measurement = MeasurementInput {
        value_in,
        unit: MeasurementUnit::Diameter,
        reference: ReferencePoint::Inside,
        offset_dimension_in: entry.section.offset_dimension_in(),
    };
    let geometry = resolve(&measurement);
    if !geometry.is_computable() {
        println!("Enter a positive diameter to get results.");
        return;
    }

    println!("═══════════════════════════════════════");
    println!("  ROLLING CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Profile:  {} {}", ProfileKind::Angle, size);
    println!(
        "  Dialed:   {}",
        describe::roll_to(value_in, measurement.unit, measurement.reference, None)
    );
    println!("  Stock:    {} ({:.0}\")", stock_text, stock_in);
    println!();
    println!("Geometry:");
    println!(
        "  Centerline diameter: {:.4}\"",
        geometry.centerline_diameter_in
    );

    match sagitta::check(geometry.centerline_diameter_in) {
        Some(check) => println!("  {}", describe::sagitta_check(&check)),
        None => println!("  Sagitta check: n/a at this diameter"),
    }
    println!();

    let ring_input = RingPlanInput {
        centerline_diameter_in: geometry.centerline_diameter_in,
        stock_length_in: stock_in,
        tangent_allowance_in: tangent_in,
        rings_needed,
    };
    match plan(&ring_input) {
        Ok(Some(ring_plan)) => {
            println!("Material:");
            println!("  Circumference: {:.2}\"", ring_plan.circumference_in);
            println!("  Usable/stick:  {:.2}\"", ring_plan.usable_length_in);
            println!("  {}", describe::ring_plan(&ring_plan, rings_needed));
            println!();
            println!("JSON Output (for order documents):");
            if let Ok(json) = serde_json::to_string_pretty(&ring_plan) {
                println!("{}", json);
            }
        }
        Ok(None) => println!("Ring plan: waiting on input."),
        Err(e) => {
            eprintln!("Warning: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Warning JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
