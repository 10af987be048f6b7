//! Population bookkeeping and the random-mating engine.

mod engine;
mod parameters;
mod population;
mod sampler;

pub use engine::{run_trials, Simulation};
pub use parameters::SimulationConfig;
pub use population::Population;
pub use sampler::WeightedSampler;
