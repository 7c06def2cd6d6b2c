// Evaluation of one function over many independent input sets

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use crate::adapter::evaluate_fresh;
use crate::config::BatchSettings;
use crate::engine::Engine;
use crate::error::Result;
use crate::functions::Func;
use crate::params::ParamValue;
use crate::series::{AnySeries, Outcome};

/// Result of one batch job.
pub type JobResult = Result<Outcome<Vec<AnySeries<'static>>>>;

/// Runs batches sequentially or on a rayon pool.
///
/// Every job gets fresh output storage, so jobs never share buffers.
///
/// ```ignore
/// use talib_adapter::{BatchEvaluator, Func, ParamValue};
///
/// let jobs = vec![vec![&closes_a[..]], vec![&closes_b[..]]];
/// let results = BatchEvaluator::new().evaluate(engine, Func::Sma, &jobs, &[ParamValue::Int(20)]);
/// ```
pub struct BatchEvaluator {
    pool: Option<ThreadPool>,
    min_parallel_jobs: usize,
}

impl Default for BatchEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchEvaluator {
    /// Uses the global rayon pool.
    pub fn new() -> Self {
        Self {
            pool: None,
            min_parallel_jobs: BatchSettings::default().min_parallel_jobs,
        }
    }

    /// Builds a dedicated pool of `settings.threads` workers (one per CPU by default).
    pub fn from_settings(settings: &BatchSettings) -> Result<Self> {
        let threads = settings.threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|idx| format!("talib-batch-{}", idx))
            .build()?;
        debug!("Created batch pool with {} threads", threads);
        Ok(Self {
            pool: Some(pool),
            min_parallel_jobs: settings.min_parallel_jobs,
        })
    }

    /// Sets the number of jobs from which a batch runs in parallel.
    pub fn min_parallel_jobs(mut self, jobs: usize) -> Self {
        self.min_parallel_jobs = jobs;
        self
    }

    /// Number of worker threads a parallel batch uses.
    pub fn threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, ThreadPool::current_num_threads)
    }

    /// Evaluates `func` with shared `params` over every job's inputs.
    ///
    /// Results are returned in job order; a failing job does not stop the others.
    pub fn evaluate<E: Engine + ?Sized>(
        &self,
        engine: &E,
        func: Func,
        jobs: &[Vec<&[f64]>],
        params: &[ParamValue],
    ) -> Vec<JobResult> {
        let run = |idx: usize, inputs: &Vec<&[f64]>| {
            let result = evaluate_fresh(engine, func, inputs, params);
            if let Err(e) = &result {
                warn!("Batch job {} for {} failed: {}", idx, func, e);
            }
            result
        };

        if jobs.len() < self.min_parallel_jobs {
            debug!("Running {} {} jobs sequentially", jobs.len(), func);
            return jobs
                .iter()
                .enumerate()
                .map(|(idx, inputs)| run(idx, inputs))
                .collect();
        }

        debug!("Running {} {} jobs on {} threads", jobs.len(), func, self.threads());
        let parallel = || -> Vec<JobResult> {
            jobs.par_iter()
                .enumerate()
                .map(|(idx, inputs)| run(idx, inputs))
                .collect()
        };
        match &self.pool {
            Some(pool) => pool.install(parallel),
            None => parallel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_builds_sized_pool() {
        let settings = BatchSettings {
            threads: Some(2),
            min_parallel_jobs: 8,
        };
        let batch = BatchEvaluator::from_settings(&settings).unwrap();
        assert_eq!(batch.threads(), 2);
        assert_eq!(batch.min_parallel_jobs, 8);
    }

    #[test]
    fn test_builder_sets_threshold() {
        let batch = BatchEvaluator::new().min_parallel_jobs(1);
        assert_eq!(batch.min_parallel_jobs, 1);
        assert!(batch.pool.is_none());
    }
}
