mod common;

use common::{sample_closes, ScriptedEngine};
use talib_adapter::{AdapterError, BatchEvaluator, BatchSettings, Func, ParamValue};

fn closes_jobs(lengths: &[usize]) -> Vec<Vec<f64>> {
    lengths.iter().map(|&len| sample_closes(len)).collect()
}

#[test]
fn test_sequential_and_parallel_agree() {
    let engine = ScriptedEngine::new();
    let series = closes_jobs(&[20, 35, 50, 8, 64, 12]);
    let jobs: Vec<Vec<&[f64]>> = series.iter().map(|s| vec![s.as_slice()]).collect();
    let params = [ParamValue::Int(5)];

    let sequential = BatchEvaluator::new()
        .min_parallel_jobs(usize::MAX)
        .evaluate(&engine, Func::Sma, &jobs, &params);
    let parallel = BatchEvaluator::new()
        .min_parallel_jobs(1)
        .evaluate(&engine, Func::Sma, &jobs, &params);

    assert_eq!(sequential.len(), jobs.len());
    assert_eq!(parallel.len(), jobs.len());
    for ((seq, par), data) in sequential.iter().zip(&parallel).zip(&series) {
        let (seq, par) = (seq.as_ref().unwrap(), par.as_ref().unwrap());
        assert_eq!(seq, par);
        assert_eq!(seq.begin, 4);
        assert_eq!(seq.count, data.len() - 4);
    }
    assert_eq!(engine.calls(), 2 * jobs.len());
}

#[test]
fn test_failed_job_does_not_stop_the_batch() {
    let engine = ScriptedEngine::new();
    let good = sample_closes(10);
    let empty: Vec<f64> = Vec::new();
    let jobs = vec![vec![good.as_slice()], vec![empty.as_slice()], vec![good.as_slice()]];

    let results = BatchEvaluator::new()
        .min_parallel_jobs(1)
        .evaluate(&engine, Func::Sma, &jobs, &[ParamValue::Int(3)]);

    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(AdapterError::EmptyInput { .. })));
    assert!(results[2].is_ok());
    assert_eq!(engine.calls(), 2);
}

#[test]
fn test_dedicated_pool_from_settings() {
    let engine = ScriptedEngine::new();
    let series = closes_jobs(&[30; 8]);
    let jobs: Vec<Vec<&[f64]>> = series.iter().map(|s| vec![s.as_slice()]).collect();

    let batch = BatchEvaluator::from_settings(&BatchSettings {
        threads: Some(2),
        min_parallel_jobs: 2,
    })
    .unwrap();
    let results = batch.evaluate(&engine, Func::Sma, &jobs, &[ParamValue::Int(10)]);

    assert_eq!(batch.threads(), 2);
    assert!(results.iter().all(|r| r.as_ref().map(|o| o.count == 21).unwrap_or(false)));
}
