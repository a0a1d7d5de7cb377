use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hf_results::{CsvSink, RunManifest};
use hf_sim::{Material, Scenario, SimError, Simulation, StepRecord};

const DEFAULT_OUTPUT_FILE: &str = "fourier_two_ex_rsvr_diff.csv";

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "HeatFlow CLI - Fourier conduction between exhaustible reservoirs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the two-reservoir simulation
    Run {
        /// Path to a scenario YAML file (reference parameters when omitted)
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Output CSV path (prompts on stdin when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the configured period count
        #[arg(long)]
        periods: Option<u64>,
    },
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// List supported conductor materials
    Materials,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to read scenario file: {}", path.display())]
    ScenarioRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario parse error: {0}")]
    ScenarioParse(#[from] serde_yaml::Error),

    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("Results error: {0}")]
    Results(#[from] hf_results::ResultsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scenario,
            output,
            periods,
        } => cmd_run(scenario.as_deref(), output, periods),
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Materials => cmd_materials(),
    }
}

fn cmd_run(
    scenario_path: Option<&Path>,
    output: Option<PathBuf>,
    periods: Option<u64>,
) -> CliResult<()> {
    let mut scenario = load_scenario(scenario_path)?;
    if let Some(periods) = periods {
        scenario.periods = periods;
    }

    // Fail fast on configuration errors before any output is produced.
    let mut sim = Simulation::new(&scenario)?;

    print_banner();
    print_background();

    let output_path = match output {
        Some(path) => path,
        None => prompt_output_path()?,
    };

    print_parameters(&scenario, &sim);

    println!("\n\nRESULTS: \n");
    println!(
        "TIME \tT hot \tT cold\tDiff  \tE Flow \tCumlFlow\tSF hot\tSF cold\tS Chng\tS Cum Chng"
    );
    println!(
        "-----\t------\t------\t------\t-------\t--------\t------\t-------\t-------\t----------"
    );

    let mut sink = CsvSink::open(&output_path)?;
    while let Some(record) = sim.advance()? {
        println!("{}", format_step_line(&record));
        sink.append(&record)?;
    }
    sink.flush()?;

    println!("\nSimulation is completed. \n");

    let summary = sim.summary();
    let manifest = RunManifest::for_run(&scenario, &summary);
    let manifest_path = output_path.with_extension("manifest.json");
    manifest.write(&manifest_path)?;
    tracing::info!(
        run_id = %manifest.run_id,
        steps = summary.steps_executed,
        equilibrium = summary.equilibrium_reached,
        "run recorded"
    );

    print_units_key();
    print_references();

    Ok(())
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(Some(scenario_path))?;
    scenario.validate()?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_materials() -> CliResult<()> {
    println!("Supported conductor materials (thermal conductivity in W/(m·K)):");
    for material in Material::ALL {
        println!(
            "  {:<8} {:>9.3}",
            material.name(),
            material.conductivity_w_per_m_k()
        );
    }
    Ok(())
}

fn load_scenario(path: Option<&Path>) -> CliResult<Scenario> {
    match path {
        None => Ok(Scenario::default()),
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| CliError::ScenarioRead {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(serde_yaml::from_str(&content)?)
        }
    }
}

fn prompt_output_path() -> io::Result<PathBuf> {
    println!();
    println!("What is the desired name for your output file? [{DEFAULT_OUTPUT_FILE}]:");
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        Ok(PathBuf::from(DEFAULT_OUTPUT_FILE))
    } else {
        Ok(PathBuf::from(name))
    }
}

fn format_step_line(r: &StepRecord) -> String {
    format!(
        "{:3}\t{:6.2}\t{:6.2}\t{:6.2}\t{:7.2}\t{:8.2}\t{:6.2}\t{:7.2}\t{:7.2}\t{:10.2}",
        r.time,
        r.hot_temp_k,
        r.cold_temp_k,
        r.temp_diff_k,
        r.heat_flow_j,
        r.cum_heat_flow_j,
        r.entropy_flow_hot_j_per_k,
        r.entropy_flow_cold_j_per_k,
        r.entropy_change_j_per_k,
        r.cum_entropy_change_j_per_k,
    )
}

fn banner_line(text: &str) {
    println!("# {:<75} #", text);
}

fn print_banner() {
    let border = "#".repeat(79);
    println!("\n");
    println!("{border}");
    banner_line("");
    banner_line("FOURIER HEAT CONDUCTION -- TWO EXHAUSTIBLE RESERVOIRS");
    banner_line("");
    banner_line("Simulates the flow of heat energy across a thermal conductor that");
    banner_line("connects a warmer reservoir to a cooler one. Both reservoirs are");
    banner_line("exhaustible and can have different characteristics.");
    banner_line("");
    println!("{border}");
    println!("\n");
}

fn print_background() {
    println!("================================== Background =================================\n");
    println!(" Fourier's law of conduction describes the flow of thermal energy through");
    println!(" a conductor bridging a temperature difference. In this simulation the");
    println!(" temperature difference changes with time as the reservoirs exhaust.");
    println!();
    println!(" dQ/dt = (k A) (dT / dL) \n");
    println!("Where: \n");
    println!(" Q = flow of thermal energy");
    println!(" t = time");
    println!(" k = thermal conductivity of the conductor");
    println!(" A = area of conductor");
    println!(" L = length of conductor");
    println!(" T = temperature difference\n");
}

fn print_parameters(scenario: &Scenario, sim: &Simulation) {
    let hot_temp = sim.model().hot_temp_k(sim.state());
    let cold_temp = sim.model().cold_temp_k(sim.state());
    let material = scenario.conductor.material;

    println!("================================== Parameters =================================\n");
    println!("  Hot temp (in K): \t\t{:8.3}", hot_temp);
    println!("  Cold temp (in K): \t\t{:8.3}", cold_temp);
    println!(
        "  Thermal conductivity: \t{:8.3}  in Watts/meter/Kelvin",
        material.conductivity_w_per_m_k()
    );
    println!("  Area (in m^2): \t\t{:8.3}", scenario.conductor.area_m2);
    println!("  Length (in m): \t\t{:8.3}", scenario.conductor.length_m);
    println!("  Conductor material: \t\t{:>8}", material.name());
    println!(
        "  Conductance (in W/K): \t{:8.3}",
        sim.model().conductance_w_per_k()
    );
    println!("  Periods: \t\t\t{:8}", scenario.periods);
}

fn print_units_key() {
    println!("\n");
    println!("================================== Units Key ==================================\n");
    println!("  Abbreviation: \t\t Unit:");
    println!();
    println!("       J \t\t\t Joules, a unit of energy");
    println!("       K \t\t\t Kelvin, a unit of temperature");
    println!("       m \t\t\t meters, a unit of length");
    println!("       s \t\t\t seconds, a unit of time");
    println!("\n");
}

fn print_references() {
    println!("================================== References =================================\n");
    println!("Daniel V. Schroeder, 2000, \"An Introduction to Thermal Physics.\"");
    println!("\n");
}
