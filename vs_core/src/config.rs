use crate::error::{ErrorCore, Result};
use derive_builder::Builder;
use std::env;
use std::fmt;
use std::str::FromStr;

pub const VS_PARALLEL: &str = "VS_PARALLEL";
pub const VS_MIN_PARALLEL_ROWS: &str = "VS_MIN_PARALLEL_ROWS";
pub const VS_VALIDATION: &str = "VS_VALIDATION";

const DEFAULT_MIN_PARALLEL_ROWS: usize = 64;

/// When dimension consistency is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Fail on the first mismatched pair met while filling the matrix.
    #[default]
    Lazy,
    /// Check every vector of both collections before computing any cell.
    Eager,
}

impl FromStr for Validation {
    type Err = ErrorCore;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lazy" => Ok(Validation::Lazy),
            "eager" => Ok(Validation::Eager),
            other => Err(ErrorCore::InvalidConfig(format!(
                "unknown validation mode '{other}', expected 'lazy' or 'eager'"
            ))),
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Lazy => write!(f, "lazy"),
            Validation::Eager => write!(f, "eager"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(build_fn(error = "crate::error::ErrorCore"))]
pub struct SimilarityConfig {
    /// Spread rows over the rayon pool.
    #[builder(default = "true")]
    pub parallel: bool,
    /// Below this many reference rows the matrix is filled on the calling thread.
    #[builder(default = "DEFAULT_MIN_PARALLEL_ROWS")]
    pub min_parallel_rows: usize,
    #[builder(default)]
    pub validation: Validation,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_rows: DEFAULT_MIN_PARALLEL_ROWS,
            validation: Validation::Lazy,
        }
    }
}

fn read_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl SimilarityConfig {
    /// Builds a config from `VS_PARALLEL`, `VS_MIN_PARALLEL_ROWS` and
    /// `VS_VALIDATION`. Unset variables keep their default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(read_var)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let mut builder = SimilarityConfigBuilder::default();

        if let Some(parallel) = lookup(VS_PARALLEL)? {
            builder.parallel(parallel.trim().to_lowercase().parse::<bool>()?);
        }
        if let Some(rows) = lookup(VS_MIN_PARALLEL_ROWS)? {
            builder.min_parallel_rows(rows.trim().parse::<usize>()?);
        }
        if let Some(validation) = lookup(VS_VALIDATION)? {
            builder.validation(validation.parse::<Validation>()?);
        }

        builder.build()
    }

    /// Whether a matrix with `rows` reference vectors goes through rayon.
    pub fn runs_parallel(&self, rows: usize) -> bool {
        self.parallel && rows >= self.min_parallel_rows
    }
}
