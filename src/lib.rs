// Uniform calling convention over the TA-Lib technical analysis engine
pub mod adapter;
pub mod batch;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod functions;
pub mod indicators;
pub mod ma_type;
pub mod params;
pub mod series;

pub use adapter::{evaluate, evaluate_fresh, evaluate_in_place, lookback};
pub use batch::BatchEvaluator;
pub use crate::config::{BatchSettings, Compatibility, EngineSettings, Settings, UnstableFunc};
#[cfg(feature = "talib")]
pub use engine::TaLib;
pub use engine::{Engine, RawCall, RawOutput, RetCode, Span};
pub use error::{AdapterError, Result};
pub use functions::{Func, FuncInfo, Group, OutputKind, OutputSpec, ParamKind, ParamSpec};
pub use indicators::Indicators;
pub use ma_type::MaType;
pub use params::ParamValue;
pub use series::{AnyBuffer, AnySeries, Buffer, Outcome, Sample, Series};
