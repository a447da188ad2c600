//! Benchmark configuration.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Default number of suite passes per backend.
pub const DEFAULT_ITERATIONS: u32 = 10;

/// Default number of seeded rows per table.
pub const DEFAULT_SIZE: u32 = 1000;

/// Default seed for deterministic data generation.
pub const DEFAULT_SEED: u64 = 42;

/// Benchmark options shared by every backend in a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BenchmarkOptions {
    /// Database connection target handed to the suite adapters.
    pub database_url: String,

    /// Number of suite passes per backend.
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Dataset size used when seeding.
    #[serde(default = "default_size")]
    pub size: u32,

    /// Seed for deterministic data generation.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl BenchmarkOptions {
    /// Create options for `database_url` with default iterations, size and seed.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            iterations: DEFAULT_ITERATIONS,
            size: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
        }
    }

    /// Load options from the environment.
    ///
    /// `DATABASE_URL` is required. `BENCH_ITERATIONS`, `BENCH_SIZE` and
    /// `BENCH_SEED` fall back to their defaults when unset.
    pub fn from_env() -> Result<Self, Error> {
        let database_url = std::env::var("DATABASE_URL").map_err(|e| Error::Env {
            var: "DATABASE_URL",
            message: e.to_string(),
        })?;

        let options = Self {
            database_url,
            iterations: env_or("BENCH_ITERATIONS", DEFAULT_ITERATIONS)?,
            size: env_or("BENCH_SIZE", DEFAULT_SIZE)?,
            seed: env_or("BENCH_SEED", DEFAULT_SEED)?,
        };
        options.validate()?;
        Ok(options)
    }

    /// Set the iteration count.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the dataset size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the data generation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the options describe a runnable benchmark.
    pub fn validate(&self) -> Result<(), Error> {
        if self.database_url.trim().is_empty() {
            return Err(Error::InvalidOptions("database_url is empty".to_string()));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidOptions(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.size == 0 {
            return Err(Error::InvalidOptions("size must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn env_or<T>(var: &'static str, default: T) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| Error::Env {
            var,
            message: format!("cannot parse {:?}: {}", raw, e),
        }),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(Error::Env {
            var,
            message: e.to_string(),
        }),
    }
}
