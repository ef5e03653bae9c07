use clap::{Parser, Subcommand};
use nbody_core::{run_preset, SimulationConfig};

mod view_app;

#[derive(Parser)]
#[command(name = "nbody")]
#[command(about = "Interactive 2D gravity sandbox", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a preset without a window and print the final state
    Run {
        /// Preset name: empty, solar-system, binary-stars
        #[arg(short, long, default_value = "solar-system")]
        preset: String,
        /// Number of steps to run
        #[arg(short, long, default_value_t = 1000)]
        steps: u64,
        /// Time per step
        #[arg(long)]
        dt: Option<f64>,
        /// Gravitational constant
        #[arg(short)]
        k: Option<f64>,
        /// Softening length added to pairwise distances
        #[arg(long)]
        softening: Option<f64>,
        /// Trail capacity per body
        #[arg(long)]
        trail: Option<usize>,
    },
    /// Open the interactive viewer
    View {
        #[arg(short, long, default_value = "solar-system")]
        preset: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            preset,
            steps,
            dt,
            k,
            softening,
            trail,
        } => build_config(dt, k, softening, trail)
            .and_then(|config| run_headless(&preset, steps, config)),
        Commands::View { preset } => view_app::run(&preset),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_config(
    dt: Option<f64>,
    k: Option<f64>,
    softening: Option<f64>,
    trail: Option<usize>,
) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let mut config = SimulationConfig::default();
    if let Some(dt) = dt {
        config.set_time_step(dt)?;
    }
    if let Some(k) = k {
        config.set_gravitational_constant(k)?;
    }
    if let Some(softening) = softening {
        config.set_softening(softening)?;
    }
    if let Some(trail) = trail {
        config.set_trail_capacity(trail);
    }
    Ok(config)
}

fn run_headless(
    preset: &str,
    steps: u64,
    config: SimulationConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = run_preset(preset, steps, config)?;

    println!("steps = {}", result.steps);
    for body in &result.bodies {
        let id = body.id.map(|id| id.to_string()).unwrap_or_default();
        println!(
            "body{} mass = {} pos = ({:.6}, {:.6}) vel = ({:.6}, {:.6}) trail = {}",
            id,
            body.mass,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.trail_len
        );
    }
    println!("momentum = ({:.3e}, {:.3e})", result.momentum.x, result.momentum.y);
    println!("kinetic = {:.9}", result.kinetic_energy);
    println!("potential = {:.9}", result.potential_energy);
    println!("energy = {:.9}", result.total_energy());

    Ok(())
}
