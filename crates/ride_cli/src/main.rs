use std::error::Error;
use std::io::{self, Write};

use clap::{Parser, Subcommand, ValueEnum};
use ride_core::report::write_demo_report;
use ride_core::ride::Ride;
use ride_core::scenario::{build_demo_fleet, generate_rides, ScenarioParams};
use ride_core::summary::{collect_records, FleetSummary};

mod export;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "ride_cli",
    about = "Console reports for the ride-fare demo domain",
    long_about = "Runs the fixed fare demo, generates randomized ride scenarios,\n\
                  and exports ride records for analysis."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fixed demo script (two rides, one driver, one rider)
    Demo,
    /// Generate a randomized scenario and print its report
    Generate {
        /// Number of rides to generate
        #[arg(long, default_value_t = 8)]
        count: usize,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Share of premium rides (0.0-1.0)
        #[arg(long, default_value_t = 0.3)]
        premium_share: f64,
    },
    /// Generate a scenario and export its ride records to a file
    Export {
        /// Number of rides to generate
        #[arg(long, default_value_t = 8)]
        count: usize,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Output file path
        #[arg(long, default_value = "ride_records.csv")]
        output: String,
        /// Export format
        #[arg(value_enum, long, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_demo_report(&mut out)?;
        }
        Commands::Generate {
            count,
            seed,
            premium_share,
        } => run_generate(count, seed, premium_share)?,
        Commands::Export {
            count,
            seed,
            output,
            format,
        } => run_export(count, seed, &output, format)?,
    }

    Ok(())
}

fn scenario_params(count: usize, seed: Option<u64>) -> ScenarioParams {
    let params = ScenarioParams {
        num_rides: count,
        ..Default::default()
    };
    match seed {
        Some(seed) => params.with_seed(seed),
        None => params,
    }
}

fn run_generate(count: usize, seed: Option<u64>, premium_share: f64) -> Result<(), Box<dyn Error>> {
    let params = scenario_params(count, seed).with_premium_share(premium_share);
    let rides = generate_rides(&params);
    let (driver, rider) = build_demo_fleet(&rides);
    let records = collect_records(&rides);
    let summary = FleetSummary::from_records(&records);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "--- Generated Rides ---")?;
    for ride in &rides {
        ride.write_details(&mut out)?;
        writeln!(out)?;
    }

    writeln!(out, "\n--- Driver Info ---")?;
    driver.write_info(&mut out)?;
    writeln!(out, "\n\n--- Rider Ride History ---")?;
    rider.write_rides(&mut out)?;
    writeln!(out, "\n\n--- Fleet Summary ---")?;
    summary.write(&mut out)?;

    Ok(())
}

fn run_export(
    count: usize,
    seed: Option<u64>,
    output: &str,
    format: ExportFormat,
) -> Result<(), Box<dyn Error>> {
    let rides = generate_rides(&scenario_params(count, seed));
    let records = collect_records(&rides);

    match format {
        ExportFormat::Csv => export::export_to_csv(&records, output)?,
        ExportFormat::Json => export::export_to_json(&records, output)?,
    }

    println!("Exported {} ride records to {}", records.len(), output);
    Ok(())
}
