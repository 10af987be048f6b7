//! Panmixia CLI - run random-mating simulations from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use panmixia::simulation::run_trials;
use panmixia::{Genome, Population, SimulationConfig};

/// Panmixia - random mating simulator for diploid populations
#[derive(Parser, Debug)]
#[command(name = "panmixia")]
#[command(author, version, about = "Random mating simulator for diploid populations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run trials of random mating and report final frequencies
    Run {
        /// Founder genomes as GENOME:COUNT, e.g. "1/1:23" or "1/2,3/3:5" (repeatable)
        #[arg(short, long = "founder", required = true)]
        founders: Vec<String>,

        /// Number of generations per trial
        #[arg(short, long, default_value = "10")]
        generations: usize,

        /// Number of independent trials
        #[arg(short, long, default_value = "10")]
        trials: usize,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (pretty, json)
        #[arg(long, default_value = "pretty")]
        format: String,
    },

    /// Print the frequency tables of a founder population without simulating
    Freqs {
        /// Founder genomes as GENOME:COUNT (repeatable)
        #[arg(short, long = "founder", required = true)]
        founders: Vec<String>,

        /// Output format (pretty, json)
        #[arg(long, default_value = "pretty")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            founders,
            generations,
            trials,
            seed,
            format,
        } => {
            let initial = parse_founders(&founders)?;
            let config = SimulationConfig::new(generations, trials, seed);
            run_command(&initial, &config, &format)?;
        }
        Commands::Freqs { founders, format } => {
            let initial = parse_founders(&founders)?;
            freqs_command(&initial, &format)?;
        }
    }

    Ok(())
}

/// Parse repeated `GENOME:COUNT` founder specs into a population.
fn parse_founders(specs: &[String]) -> Result<Population> {
    let mut pairs = Vec::with_capacity(specs.len());

    for spec in specs {
        let (genome_str, count_str) = spec
            .rsplit_once(':')
            .with_context(|| format!("Founder '{spec}' is not of the form GENOME:COUNT"))?;
        let genome: Genome = genome_str
            .parse()
            .with_context(|| format!("Invalid genome in founder '{spec}'"))?;
        let count: u64 = count_str
            .trim()
            .parse()
            .with_context(|| format!("Invalid count in founder '{spec}'"))?;
        pairs.push((genome, count));
    }

    Population::from_counts(pairs).context("Founder genomes must all have the same locus count")
}

fn run_command(initial: &Population, config: &SimulationConfig, format: &str) -> Result<()> {
    let finals = run_trials(initial, config)
        .map_err(|e| anyhow::anyhow!("Simulation failed: {e}"))?;

    match format {
        "pretty" => {
            println!("Panmixia - Random Mating Simulation");
            println!("{}", "=".repeat(50));
            println!("Founding population: {} individuals", initial.population());
            println!("Generations per trial: {}", config.generations);
            println!("Trials: {}", config.trials);
            if let Some(seed) = config.seed {
                println!("Seed: {seed}");
            }

            for (trial, population) in finals.iter().enumerate() {
                println!("\nTrial {trial}");
                println!("{}", "-".repeat(50));
                print_population(population)?;
            }
        }
        "json" => {
            let reports = finals
                .iter()
                .map(population_json)
                .collect::<Result<Vec<_>>>()?;
            let doc = serde_json::json!({
                "config": config,
                "founding_population": initial.population(),
                "trials": reports,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        _ => anyhow::bail!("Unknown format '{format}'. Use: pretty or json"),
    }

    Ok(())
}

fn freqs_command(initial: &Population, format: &str) -> Result<()> {
    match format {
        "pretty" => {
            println!("Panmixia - Founder Frequencies");
            println!("{}", "=".repeat(50));
            print_population(initial)?;
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&population_json(initial)?)?);
        }
        _ => anyhow::bail!("Unknown format '{format}'. Use: pretty or json"),
    }

    Ok(())
}

fn print_population(population: &Population) -> Result<()> {
    println!("Population size: {}", population.population());

    let genome_freqs = population
        .genome_frequencies()
        .context("Population is empty")?;
    println!("Genome frequencies:");
    for (genome, freq) in &genome_freqs {
        println!("  {genome}: {freq:.4}");
    }

    for locus in 0..population.num_loci() {
        let freqs = population
            .allele_frequencies(locus)
            .map_err(|e| anyhow::anyhow!("Locus {locus}: {e}"))?;
        println!("Allele frequencies at locus {locus}:");
        for (allele, freq) in &freqs {
            println!("  {allele}: {freq:.4}");
        }
    }

    Ok(())
}

/// Render one population as JSON; genome and allele map keys go through
/// `Display` since JSON object keys must be strings.
fn population_json(population: &Population) -> Result<serde_json::Value> {
    let genome_freqs: serde_json::Map<String, serde_json::Value> = population
        .genome_frequencies()
        .context("Population is empty")?
        .iter()
        .map(|(genome, freq)| (genome.to_string(), (*freq).into()))
        .collect();

    let mut loci = Vec::with_capacity(population.num_loci());
    for locus in 0..population.num_loci() {
        let freqs: serde_json::Map<String, serde_json::Value> = population
            .allele_frequencies(locus)
            .map_err(|e| anyhow::anyhow!("Locus {locus}: {e}"))?
            .iter()
            .map(|(allele, freq)| (allele.to_string(), (*freq).into()))
            .collect();
        loci.push(serde_json::Value::Object(freqs));
    }

    Ok(serde_json::json!({
        "population": population.population(),
        "generation": population.generation(),
        "genome_frequencies": genome_freqs,
        "allele_frequencies": loci,
    }))
}
