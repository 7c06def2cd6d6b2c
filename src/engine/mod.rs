// Engine seam: the raw calling convention every numerical backend implements
mod ret_code;

#[cfg(feature = "talib")]
mod ffi;
#[cfg(feature = "talib")]
mod talib;

pub use ret_code::RetCode;
#[cfg(feature = "talib")]
pub use talib::TaLib;

use serde::Serialize;

use crate::functions::Func;
use crate::params::ParamValue;

/// Valid range reported by a compute call.
///
/// Output slot `k` holds the value for input index `begin + k`, for
/// `k < count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub begin: usize,
    pub count: usize,
}

/// Destination of one output, as the engine sees it.
#[derive(Debug, Clone, Copy)]
pub enum RawOutput {
    Real(*mut f64),
    Integer(*mut i32),
}

impl RawOutput {
    pub fn real(self) -> Result<*mut f64, RetCode> {
        match self {
            RawOutput::Real(ptr) => Ok(ptr),
            RawOutput::Integer(_) => Err(RetCode::BadParam),
        }
    }

    pub fn integer(self) -> Result<*mut i32, RetCode> {
        match self {
            RawOutput::Integer(ptr) => Ok(ptr),
            RawOutput::Real(_) => Err(RetCode::BadParam),
        }
    }
}

/// One fully prepared compute call over the index range `start..=end`.
///
/// Inputs and outputs are raw pointers so that an output may alias the
/// first input for in-place evaluation.
#[derive(Debug)]
pub struct RawCall<'c> {
    pub func: Func,
    pub start: usize,
    pub end: usize,
    pub inputs: &'c [*const f64],
    pub params: &'c [ParamValue],
    pub outputs: &'c [RawOutput],
}

impl RawCall<'_> {
    /// Number of input positions covered by the call.
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// A numerical backend with the TA-Lib calling convention.
///
/// The adapter validates shapes and parameters before calling into an
/// engine, so implementations only see calls whose inputs, parameters and
/// outputs match [`Func::info`].
pub trait Engine: Send + Sync {
    fn name(&self) -> &str;

    /// Number of leading input positions consumed before the first valid output.
    fn lookback(&self, func: Func, params: &[ParamValue]) -> Result<usize, RetCode>;

    /// Computes `call.func` and returns the valid range it wrote.
    ///
    /// # Safety
    ///
    /// Every input pointer must be valid for reads and every output pointer
    /// valid for writes of `call.end + 1` elements. Output 0 may alias input 0.
    unsafe fn compute(&self, call: &RawCall<'_>) -> Result<Span, RetCode>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_output_kind_checks() {
        let mut real = [0.0f64; 2];
        let mut int = [0i32; 2];
        assert!(RawOutput::Real(real.as_mut_ptr()).real().is_ok());
        assert_eq!(
            RawOutput::Real(real.as_mut_ptr()).integer(),
            Err(RetCode::BadParam)
        );
        assert!(RawOutput::Integer(int.as_mut_ptr()).integer().is_ok());
    }

    #[test]
    fn test_raw_call_len() {
        let call = RawCall {
            func: Func::Sma,
            start: 0,
            end: 4,
            inputs: &[],
            params: &[],
            outputs: &[],
        };
        assert_eq!(call.len(), 5);
        assert!(!call.is_empty());
    }
}
