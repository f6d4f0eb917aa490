use clap::Parser;
use medmatch::utils::{logger, validation::Validate};
use medmatch::{analyze, parse_symptom_input, render_recommendation, CliConfig, LocationFilter};
use std::io::{BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting medmatch CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let directory = match medmatch::domain::directory::load_directory(&config) {
        Ok(directory) => directory,
        Err(e) => {
            tracing::error!("❌ Failed to load doctor dataset: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    let symptoms = match &config.symptoms {
        Some(raw) => parse_symptom_input(raw),
        None => {
            println!("Welcome to the Medical Assistant Prototype!");
            println!("Please enter your symptoms, separated by commas.");
            println!("Example: cough, fever, headache\n");
            parse_symptom_input(&prompt(&mut lines, "Your symptoms: ")?)
        }
    };

    let location = match (&config.city, &config.state) {
        (None, None) if config.symptoms.is_none() => {
            // interactive session also prompts for the optional filters
            let city = prompt(&mut lines, "Enter your city (or press Enter to skip): ")?;
            let state = prompt(&mut lines, "Enter your state (or press Enter to skip): ")?;
            LocationFilter::new(Some(city), Some(state))
        }
        _ => LocationFilter::new(config.city.clone(), config.state.clone()),
    };

    let report = analyze(&directory, &symptoms, &location);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", "=".repeat(50));
    println!("ANALYSIS RESULTS:");
    println!("{}", "=".repeat(50));
    for recommendation in &report.recommendations {
        println!("\n{}", render_recommendation(recommendation));
    }

    Ok(())
}

fn prompt(
    lines: &mut std::io::Lines<std::io::StdinLock<'_>>,
    message: &str,
) -> std::io::Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Ok(String::new()),
    }
}
