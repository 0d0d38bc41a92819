use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crystal_orientation::csl::csl_euler_angles;
use crystal_orientation::misorientation::{generate_euler_pair, misorientation_angle};
use crystal_orientation::orientation::{deg_to_rad, rad_to_deg, random_euler, EulerAngles};
use crystal_orientation::symmetries::SymmetryClass;

#[derive(Parser)]
#[command(name = "crystal-orientation")]
#[command(about = "Crystallographic orientation and misorientation generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Seed for the random generator (entropy-seeded when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print angles in degrees instead of radians
    #[arg(short, long)]
    degrees: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample uniformly random orientations
    Sample {
        /// Number of orientations to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
    /// Generate orientation pairs at a prescribed misorientation
    Pair {
        /// Target misorientation in degrees
        #[arg(short, long)]
        target: f64,

        /// Crystal class (cubic, hexagonal, tetrahedral)
        #[arg(long, default_value = "cubic")]
        class: String,

        /// Number of pairs to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
    /// Generate orientation pairs for a coincidence site lattice relation
    Csl {
        /// Sigma label, e.g. 3 or 13a
        #[arg(long)]
        sigma: String,

        /// Number of pairs to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    info!("Starting crystal-orientation v{}", crystal_orientation::VERSION);

    match cli.command {
        Commands::Sample { count } => {
            info!("Sampling {} uniformly random orientations", count);
            for _ in 0..count {
                print_euler(&random_euler(&mut rng), cli.degrees);
            }
        }
        Commands::Pair {
            target,
            class,
            count,
        } => {
            let class = parse_class(&class)?;
            info!(
                "Generating {} orientation pairs at {:.2}° under {} symmetry",
                count,
                target,
                class.as_str()
            );
            let target = deg_to_rad(target);
            for _ in 0..count {
                let (euler_1, euler_2) = generate_euler_pair(&mut rng, target, class);
                let achieved = misorientation_angle(&euler_1, &euler_2, class);
                print_euler(&euler_1, cli.degrees);
                print_euler(&euler_2, cli.degrees);
                info!("Achieved misorientation: {:.4}°", rad_to_deg(achieved));
            }
        }
        Commands::Csl { sigma, count } => {
            info!("Generating {} sigma-{} orientation pairs", count, sigma);
            for _ in 0..count {
                let (euler_1, euler_2) = csl_euler_angles(&mut rng, &sigma, None)?;
                print_euler(&euler_1, cli.degrees);
                print_euler(&euler_2, cli.degrees);
            }
        }
    }

    Ok(())
}

fn parse_class(name: &str) -> Result<SymmetryClass> {
    match name {
        "cubic" => Ok(SymmetryClass::Cubic),
        "hexagonal" => Ok(SymmetryClass::Hexagonal),
        "tetrahedral" => Ok(SymmetryClass::Tetrahedral),
        other => bail!("unknown crystal class '{other}'; expected cubic, hexagonal or tetrahedral"),
    }
}

fn print_euler(euler: &EulerAngles, degrees: bool) {
    if degrees {
        let [phi1, phi, phi2] = euler.to_degrees();
        println!("{:.4} {:.4} {:.4}", phi1, phi, phi2);
    } else {
        println!("{:.6} {:.6} {:.6}", euler.phi1, euler.phi, euler.phi2);
    }
}
