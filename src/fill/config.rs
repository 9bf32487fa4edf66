use crate::foundation::error::{SynthError, SynthResult};

/// How partition workers are executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FillStrategy {
    /// Spawn one short-lived thread per partition for every fill call.
    #[default]
    Scoped,
    /// Run partitions on a persistent `rayon` pool built once per filler.
    ///
    /// `threads: None` lets rayon pick the pool size.
    Pool { threads: Option<usize> },
}

/// Upper bound on `workers`; each worker is a real thread, so larger counts are rejected.
pub const MAX_WORKERS: i32 = 4096;

/// Threading options for partitioned fills.
///
/// `workers < 1` selects the sequential path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FillThreading {
    pub workers: i32,
    pub strategy: FillStrategy,
}

impl Default for FillThreading {
    fn default() -> Self {
        Self {
            workers: 0,
            strategy: FillStrategy::Scoped,
        }
    }
}

impl FillThreading {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn scoped(workers: i32) -> Self {
        Self {
            workers,
            strategy: FillStrategy::Scoped,
        }
    }

    pub fn pooled(workers: i32, threads: Option<usize>) -> Self {
        Self {
            workers,
            strategy: FillStrategy::Pool { threads },
        }
    }

    /// Parse and validate a JSON threading config, e.g.
    /// `{"workers": 8, "strategy": {"kind": "pool", "threads": 4}}`.
    pub fn from_json_str(s: &str) -> SynthResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| SynthError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> SynthResult<()> {
        if let FillStrategy::Pool { threads: Some(0) } = self.strategy {
            return Err(SynthError::validation(
                "fill threading 'threads' must be >= 1 when set",
            ));
        }
        if self.workers > MAX_WORKERS {
            return Err(SynthError::validation(format!(
                "fill threading 'workers' must be <= {MAX_WORKERS}, got {}",
                self.workers
            )));
        }
        Ok(())
    }

    /// Number of partitions to plan, `0` meaning sequential.
    pub fn partition_count(&self) -> usize {
        usize::try_from(self.workers).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fill/config.rs"]
mod tests;
