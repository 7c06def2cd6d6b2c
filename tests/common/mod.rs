//! Shared test utilities.
//!
//! `ScriptedEngine` implements a handful of functions in plain Rust with the
//! same output convention as TA-Lib (valid outputs written from index 0, begin
//! equal to the lookback), so adapter behavior can be tested without linking
//! the native library.

use std::sync::atomic::{AtomicUsize, Ordering};

use talib_adapter::{Engine, Func, ParamValue, RawCall, RetCode, Span};

#[derive(Default)]
pub struct ScriptedEngine {
    calls: AtomicUsize,
    fail_with: Option<RetCode>,
    overreport: bool,
}

#[allow(dead_code)]
impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every compute call returns `code`.
    pub fn failing(code: RetCode) -> Self {
        Self {
            fail_with: Some(code),
            ..Self::default()
        }
    }

    /// Reports one more valid sample than it wrote.
    pub fn overreporting() -> Self {
        Self {
            overreport: true,
            ..Self::default()
        }
    }

    /// Number of compute calls that reached the engine.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn window(params: &[ParamValue]) -> Result<usize, RetCode> {
    let period = params.first().ok_or(RetCode::BadParam)?.as_int();
    usize::try_from(period).map_err(|_| RetCode::BadParam)
}

/// Mean of `input[k..k + period]`.
unsafe fn window_mean(input: *const f64, k: usize, period: usize) -> f64 {
    let mut sum = 0.0;
    for j in 0..period {
        sum += *input.add(k + j);
    }
    sum / period as f64
}

impl Engine for ScriptedEngine {
    fn name(&self) -> &str {
        "scripted"
    }

    fn lookback(&self, func: Func, params: &[ParamValue]) -> Result<usize, RetCode> {
        match func {
            Func::Sin | Func::Add => Ok(0),
            Func::Sma | Func::Bbands | Func::MinMaxIndex => Ok(window(params)?.saturating_sub(1)),
            _ => Err(RetCode::NotSupported),
        }
    }

    unsafe fn compute(&self, call: &RawCall<'_>) -> Result<Span, RetCode> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(code) = self.fail_with {
            return Err(code);
        }

        let lookback = self.lookback(call.func, call.params)?;
        let len = call.len();
        if len <= lookback {
            return Ok(Span { begin: 0, count: 0 });
        }
        let count = len - lookback;

        // Each output slot is written after every input it depends on has
        // been read, so output 0 may alias input 0.
        match call.func {
            Func::Sin => {
                let input = call.inputs[0];
                let out = call.outputs[0].real()?;
                for k in 0..count {
                    *out.add(k) = (*input.add(k)).sin();
                }
            }
            Func::Add => {
                let (a, b) = (call.inputs[0], call.inputs[1]);
                let out = call.outputs[0].real()?;
                for k in 0..count {
                    *out.add(k) = *a.add(k) + *b.add(k);
                }
            }
            Func::Sma => {
                let period = window(call.params)?;
                let input = call.inputs[0];
                let out = call.outputs[0].real()?;
                for k in 0..count {
                    *out.add(k) = window_mean(input, k, period);
                }
            }
            Func::Bbands => {
                let period = window(call.params)?;
                let up = call.params[1].as_real();
                let dn = call.params[2].as_real();
                let input = call.inputs[0];
                let upper = call.outputs[0].real()?;
                let middle = call.outputs[1].real()?;
                let lower = call.outputs[2].real()?;
                for k in 0..count {
                    let mid = window_mean(input, k, period);
                    *upper.add(k) = mid + up;
                    *middle.add(k) = mid;
                    *lower.add(k) = mid - dn;
                }
            }
            Func::MinMaxIndex => {
                let period = window(call.params)?;
                let input = call.inputs[0];
                let min_idx = call.outputs[0].integer()?;
                let max_idx = call.outputs[1].integer()?;
                for k in 0..count {
                    let (mut lo, mut hi) = (k, k);
                    for j in k..k + period {
                        if *input.add(j) < *input.add(lo) {
                            lo = j;
                        }
                        if *input.add(j) > *input.add(hi) {
                            hi = j;
                        }
                    }
                    *min_idx.add(k) = lo as i32;
                    *max_idx.add(k) = hi as i32;
                }
            }
            _ => return Err(RetCode::NotSupported),
        }

        let count = if self.overreport { count + 1 } else { count };
        Ok(Span {
            begin: lookback,
            count,
        })
    }
}

/// Close prices with some movement.
#[allow(dead_code)]
pub fn sample_closes(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64 * 0.1)
        .collect()
}
