// Scalar parameters: validation against declared ranges and named resolution with defaults

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{AdapterError, Result};
use crate::functions::{Func, ParamKind, ParamSpec};
use crate::ma_type::MaType;

/// One optional-parameter value, in the kind the engine expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i32),
    Real(f64),
    MaType(MaType),
}

impl ParamValue {
    pub fn kind(self) -> ParamKind {
        match self {
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::Real(_) => ParamKind::Real,
            ParamValue::MaType(_) => ParamKind::MaType,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            ParamValue::Int(v) => v as f64,
            ParamValue::Real(v) => v,
            ParamValue::MaType(kind) => kind.code() as f64,
        }
    }

    /// Integer view, for `int` and `TA_MAType` arguments.
    pub fn as_int(self) -> i32 {
        match self {
            ParamValue::Int(v) => v,
            ParamValue::Real(v) => v as i32,
            ParamValue::MaType(kind) => kind.code(),
        }
    }

    /// Real view, for `double` arguments.
    pub fn as_real(self) -> f64 {
        self.as_f64()
    }

    /// Parses `raw` as a value of the kind `spec` declares.
    pub fn parse(func: Func, spec: &'static ParamSpec, raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let invalid = |reason: String| AdapterError::InvalidParamValue {
            func,
            param: spec.name,
            reason,
        };
        match spec.kind {
            ParamKind::Int => trimmed
                .parse::<i32>()
                .map(ParamValue::Int)
                .map_err(|e| invalid(format!("`{}`: {}", raw, e))),
            ParamKind::Real => trimmed
                .parse::<f64>()
                .map(ParamValue::Real)
                .map_err(|e| invalid(format!("`{}`: {}", raw, e))),
            ParamKind::MaType => trimmed
                .parse::<MaType>()
                .map(ParamValue::MaType)
                .map_err(|e| invalid(e.to_string())),
        }
    }

    /// Converts a JSON number or string into a value of the declared kind.
    pub fn from_json(func: Func, spec: &'static ParamSpec, value: &Value) -> Result<Self> {
        let invalid = |reason: String| AdapterError::InvalidParamValue {
            func,
            param: spec.name,
            reason,
        };
        match (spec.kind, value) {
            (_, Value::String(raw)) => Self::parse(func, spec, raw),
            (ParamKind::Int | ParamKind::MaType, Value::Number(num)) => {
                let int = num
                    .as_i64()
                    .and_then(|i| i32::try_from(i).ok())
                    .ok_or_else(|| invalid(format!("{} is not a 32-bit integer", num)))?;
                if spec.kind == ParamKind::Int {
                    Ok(ParamValue::Int(int))
                } else {
                    MaType::from_code(int)
                        .map(ParamValue::MaType)
                        .ok_or_else(|| invalid(format!("{} is not a moving average code", int)))
                }
            }
            (ParamKind::Real, Value::Number(num)) => num
                .as_f64()
                .map(ParamValue::Real)
                .ok_or_else(|| invalid(format!("{} is not representable as f64", num))),
            (_, other) => Err(invalid(format!("unsupported JSON value {}", other))),
        }
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Real(value)
    }
}

impl From<MaType> for ParamValue {
    fn from(value: MaType) -> Self {
        ParamValue::MaType(value)
    }
}

fn kind_accepts(expected: ParamKind, actual: ParamKind) -> bool {
    expected == actual || (expected == ParamKind::Real && actual == ParamKind::Int)
}

/// Checks arity, kind and range of a positional parameter list.
pub fn validate(func: Func, params: &[ParamValue]) -> Result<()> {
    let specs = func.info().params;
    if params.len() != specs.len() {
        return Err(AdapterError::ParamArity {
            func,
            expected: specs.len(),
            actual: params.len(),
        });
    }

    for (spec, value) in specs.iter().zip(params) {
        if !kind_accepts(spec.kind, value.kind()) {
            return Err(AdapterError::ParamKind {
                func,
                param: spec.name,
                expected: spec.kind.label(),
            });
        }
        let numeric = value.as_f64();
        if !spec.contains(numeric) {
            return Err(AdapterError::ParamOutOfRange {
                func,
                param: spec.name,
                value: numeric,
                min: spec.min,
                max: spec.max,
            });
        }
    }
    Ok(())
}

/// Builds the positional parameter list from `(name, value)` pairs.
///
/// Omitted parameters take their declared default; unknown names are rejected.
pub fn resolve(func: Func, named: &[(String, Value)]) -> Result<Vec<ParamValue>> {
    let info = func.info();
    let mut values = info.default_params();
    let mut supplied = vec![false; values.len()];

    for (name, value) in named {
        let (idx, spec) = info.param(name).ok_or_else(|| AdapterError::UnknownParam {
            func,
            name: name.clone(),
        })?;
        values[idx] = ParamValue::from_json(func, spec, value)?;
        supplied[idx] = true;
    }

    for (spec, given) in info.params.iter().zip(&supplied) {
        if !given {
            debug!("Using default value {} for parameter {} of {}", spec.default, spec.name, func);
        }
    }

    validate(func, &values)?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_declared_minimum() {
        assert!(validate(Func::Sma, &[ParamValue::Int(2)]).is_ok());
        assert!(validate(Func::Atr, &[ParamValue::Int(1)]).is_ok());
    }

    #[test]
    fn test_validate_rejects_below_minimum() {
        let err = validate(Func::Sma, &[ParamValue::Int(1)]).unwrap_err();
        assert!(matches!(
            err,
            AdapterError::ParamOutOfRange { param: "time_period", value, .. } if value == 1.0
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let params = [ParamValue::Real(f64::NAN), ParamValue::Real(0.05)];
        assert!(matches!(
            validate(Func::Mama, &params),
            Err(AdapterError::ParamOutOfRange { param: "fast_limit", .. })
        ));
    }

    #[test]
    fn test_validate_checks_arity_and_kind() {
        assert!(matches!(
            validate(Func::Sma, &[]),
            Err(AdapterError::ParamArity { expected: 1, actual: 0, .. })
        ));
        assert!(matches!(
            validate(Func::Sma, &[ParamValue::Real(3.0)]),
            Err(AdapterError::ParamKind { param: "time_period", .. })
        ));
        // integers widen to real parameters
        assert!(validate(Func::StdDev, &[ParamValue::Int(5), ParamValue::Int(2)]).is_ok());
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let values = resolve(Func::Bbands, &[("time_period".to_string(), json!(20))]).unwrap();
        assert_eq!(
            values,
            vec![
                ParamValue::Int(20),
                ParamValue::Real(2.0),
                ParamValue::Real(2.0),
                ParamValue::MaType(MaType::Sma),
            ]
        );
    }

    #[test]
    fn test_resolve_parses_strings_and_ma_names() {
        let values = resolve(
            Func::Ma,
            &[
                ("time_period".to_string(), json!("10")),
                ("ma_type".to_string(), json!("ema")),
            ],
        )
        .unwrap();
        assert_eq!(values, vec![ParamValue::Int(10), ParamValue::MaType(MaType::Ema)]);
    }

    #[test]
    fn test_resolve_rejects_unknown_names() {
        let err = resolve(Func::Rsi, &[("period".to_string(), json!(14))]).unwrap_err();
        assert!(matches!(err, AdapterError::UnknownParam { name, .. } if name == "period"));
    }

    #[test]
    fn test_resolve_rejects_wrong_json_type() {
        let err = resolve(Func::Rsi, &[("time_period".to_string(), json!([14]))]).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidParamValue { param: "time_period", .. }));
    }
}
