//! # CivilCalc CLI
//!
//! Minimal terminal frontend for the calculation engine: prompts for a
//! rectangular column, validates, calculates, and prints the results with
//! the audit trace and the JSON snapshot.

use std::io::{self, BufRead, Write};

use civilcalc_core::calculations::CalculatorKind;
use civilcalc_core::defaults::default_inputs;
use civilcalc_core::settings::UnitSystem;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("CivilCalc CLI - Concrete Quantity Calculator");
    println!("============================================");
    println!();

    let kind = CalculatorKind::RectangularColumn;
    let mut inputs = default_inputs(kind, UnitSystem::Metric);

    inputs.width = Some(prompt_f64("Column width (mm) [400]: ", 400.0));
    inputs.depth = Some(prompt_f64("Column depth (mm) [400]: ", 400.0));
    inputs.height = Some(prompt_f64("Column height (m) [3.0]: ", 3.0));
    inputs.transverse_spacing = Some(prompt_f64("Tie spacing (mm) [200]: ", 200.0));

    println!();
    println!("Calculating {}...", kind);
    println!();

    let errors = kind.validate(&inputs);
    if !errors.is_empty() {
        eprintln!("Inputs failed validation:");
        for (field, message) in errors.iter() {
            eprintln!("  {}: {}", field, message);
        }
        std::process::exit(1);
    }

    let results = kind.calculate(&inputs);

    println!("═══════════════════════════════════════");
    println!("  COLUMN QUANTITY RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Concrete:");
    if let Some(volume) = results.concrete_volume {
        println!("  Volume:   {}", volume);
    }
    if let Some(weight) = results.concrete_weight {
        println!("  Weight:   {}", weight);
    }
    if let Some(formwork) = results.formwork_area {
        println!("  Formwork: {}", formwork);
    }
    println!();
    println!("Reinforcement:");
    if let Some(longitudinal) = results.longitudinal_steel_weight {
        println!("  Longitudinal: {}", longitudinal);
    }
    if let Some(transverse) = results.transverse_steel_weight {
        println!("  Transverse:   {}", transverse);
    }
    if let Some(total) = results.total_steel_weight {
        println!("  Total:        {}", total);
    }
    println!();
    println!("Schedule:");
    for line in &results.detailed_reinforcement {
        println!(
            "  {:>2} × {} {} @ {:.2} m - {}",
            line.count, line.bar_size, line.shape_code, line.length, line.description
        );
    }
    println!();
    println!("Calculation steps:");
    for step in &results.calculation_trace {
        println!("  {}", step.description);
        println!("    {}", step.formula);
        println!("    {} = {}", step.calculation, step.result);
        if let Some(reference) = &step.reference {
            println!("    ({})", reference);
        }
    }
    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON snapshot:");
    if let Ok(json) = serde_json::to_string_pretty(&results) {
        println!("{}", json);
    }
}
