// Error types for the adapter

use thiserror::Error;

use crate::engine::RetCode;
use crate::functions::Func;

/// The main error type for adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The engine refused to initialize.
    #[error("engine initialization failed: {code}")]
    EngineInit { code: RetCode },

    /// Compatibility or unstable-period settings were rejected.
    #[error("engine settings rejected: {code}")]
    EngineSettings { code: RetCode },

    /// A call was made with zero-length input series.
    #[error("{func}: empty input")]
    EmptyInput { func: Func },

    /// An input series does not match the length of the first input.
    #[error("{func}: input `{input}` has length {actual}, expected {expected}")]
    LengthMismatch {
        func: Func,
        input: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{func}: expected {expected} input series, got {actual}")]
    InputArity {
        func: Func,
        expected: usize,
        actual: usize,
    },

    #[error("{func}: expected {expected} parameters, got {actual}")]
    ParamArity {
        func: Func,
        expected: usize,
        actual: usize,
    },

    #[error("{func}: parameter `{param}` expects a {expected} value")]
    ParamKind {
        func: Func,
        param: &'static str,
        expected: &'static str,
    },

    /// A scalar parameter lies outside its declared range.
    #[error("{func}: parameter `{param}` = {value} is outside [{min}, {max}]")]
    ParamOutOfRange {
        func: Func,
        param: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{func}: expected {expected} output buffers, got {actual}")]
    OutputArity {
        func: Func,
        expected: usize,
        actual: usize,
    },

    #[error("{func}: output `{output}` expects {expected} samples")]
    OutputKind {
        func: Func,
        output: &'static str,
        expected: &'static str,
    },

    /// A caller-supplied buffer cannot hold one sample per input position.
    #[error("{func}: buffer for `{output}` holds {actual} samples, {required} required")]
    BufferTooSmall {
        func: Func,
        output: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("{func}: in-place evaluation needs exactly one real output")]
    InPlaceUnsupported { func: Func },

    /// The engine returned a non-success status for this call.
    #[error("{func}: engine returned {code}")]
    Engine { func: Func, code: RetCode },

    /// The engine reported a valid range that does not fit the input.
    #[error("{func}: engine reported begin {begin} + count {count} beyond input length {len}")]
    EngineContract {
        func: Func,
        begin: usize,
        count: usize,
        len: usize,
    },

    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("{func}: unknown parameter `{name}`")]
    UnknownParam { func: Func, name: String },

    #[error("{func}: invalid value for parameter `{param}`: {reason}")]
    InvalidParamValue {
        func: Func,
        param: &'static str,
        reason: String,
    },

    #[error("invalid moving average type `{0}`")]
    InvalidMaType(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenience type alias for Results using [`AdapterError`].
pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_out_of_range_message() {
        let err = AdapterError::ParamOutOfRange {
            func: Func::Sma,
            param: "time_period",
            value: 1.0,
            min: 2.0,
            max: 100000.0,
        };
        assert_eq!(
            err.to_string(),
            "SMA: parameter `time_period` = 1 is outside [2, 100000]"
        );
    }

    #[test]
    fn test_engine_status_message() {
        let err = AdapterError::Engine {
            func: Func::Rsi,
            code: RetCode::BadParam,
        };
        assert_eq!(err.to_string(), "RSI: engine returned TA_BAD_PARAM (2)");
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = AdapterError::LengthMismatch {
            func: Func::Ad,
            input: "volume",
            expected: 10,
            actual: 9,
        };
        assert_eq!(
            err.to_string(),
            "AD: input `volume` has length 9, expected 10"
        );
    }
}
