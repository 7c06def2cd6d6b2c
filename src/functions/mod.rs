// Static metadata for every engine function, expanded from the table in `table.rs`

mod table;

pub(crate) use table::for_each_function;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AdapterError;
use crate::ma_type::MaType;
use crate::params::ParamValue;

/// The function groups of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    MathTransform,
    MathOperator,
    OverlapStudies,
    Momentum,
    Volume,
    Volatility,
    PriceTransform,
    Cycle,
    PatternRecognition,
    Statistic,
}

impl Group {
    pub const ALL: [Group; 10] = [
        Group::MathTransform,
        Group::MathOperator,
        Group::OverlapStudies,
        Group::Momentum,
        Group::Volume,
        Group::Volatility,
        Group::PriceTransform,
        Group::Cycle,
        Group::PatternRecognition,
        Group::Statistic,
    ];

    /// Identifier used in configuration and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Group::MathTransform => "math_transform",
            Group::MathOperator => "math_operator",
            Group::OverlapStudies => "overlap_studies",
            Group::Momentum => "momentum",
            Group::Volume => "volume",
            Group::Volatility => "volatility",
            Group::PriceTransform => "price_transform",
            Group::Cycle => "cycle",
            Group::PatternRecognition => "pattern_recognition",
            Group::Statistic => "statistic",
        }
    }

    /// Human readable name, as the engine documents its groups.
    pub fn label(self) -> &'static str {
        match self {
            Group::MathTransform => "Math Transform",
            Group::MathOperator => "Math Operators",
            Group::OverlapStudies => "Overlap Studies",
            Group::Momentum => "Momentum Indicators",
            Group::Volume => "Volume Indicators",
            Group::Volatility => "Volatility Indicators",
            Group::PriceTransform => "Price Transform",
            Group::Cycle => "Cycle Indicators",
            Group::PatternRecognition => "Pattern Recognition",
            Group::Statistic => "Statistic Functions",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Group::ALL
            .iter()
            .copied()
            .find(|group| {
                group.key().eq_ignore_ascii_case(needle) || group.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown function group `{}`", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Int,
    Real,
    MaType,
}

impl ParamKind {
    pub fn label(self) -> &'static str {
        match self {
            ParamKind::Int => "integer",
            ParamKind::Real => "real",
            ParamKind::MaType => "moving average type",
        }
    }
}

/// One optional parameter of a function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub default: f64,
    pub min: f64,
    pub max: f64,
}

impl ParamSpec {
    pub fn default_value(&self) -> ParamValue {
        match self.kind {
            ParamKind::Int => ParamValue::Int(self.default as i32),
            ParamKind::Real => ParamValue::Real(self.default),
            ParamKind::MaType => {
                ParamValue::MaType(MaType::from_code(self.default as i32).unwrap_or_default())
            }
        }
    }

    /// NaN is never in range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Real,
    Integer,
}

impl OutputKind {
    pub fn label(self) -> &'static str {
        match self {
            OutputKind::Real => "real",
            OutputKind::Integer => "integer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    pub name: &'static str,
    pub kind: OutputKind,
}

/// Everything the adapter knows about one function.
#[derive(Debug, Serialize)]
pub struct FuncInfo {
    pub name: &'static str,
    pub method: &'static str,
    pub group: Group,
    pub hint: &'static str,
    pub inputs: &'static [&'static str],
    pub params: &'static [ParamSpec],
    pub outputs: &'static [OutputSpec],
}

impl FuncInfo {
    pub fn param(&self, name: &str) -> Option<(usize, &'static ParamSpec)> {
        self.params
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.name.eq_ignore_ascii_case(name))
    }

    pub fn default_params(&self) -> Vec<ParamValue> {
        self.params.iter().map(ParamSpec::default_value).collect()
    }

    /// In-place evaluation writes the single real output over the first input.
    pub fn supports_in_place(&self) -> bool {
        matches!(self.outputs, [OutputSpec { kind: OutputKind::Real, .. }])
    }
}

macro_rules! define_functions {
    ($({
        $variant:ident, $method:ident, $name:literal, $ffi:ident, $lookback:ident, $group:ident, $hint:literal,
        [$($input:ident),+],
        [$($param:ident: $pkind:ident = $pdef:literal => [$pmin:literal, $pmax:literal]),*],
        [$($output:ident: $okind:ident),+],
    },)*) => {
        /// An engine entry point.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Func {
            $(
                #[doc = $hint]
                $variant,
            )*
        }

        impl Func {
            /// Every function, in table order.
            pub const ALL: &'static [Func] = &[$(Func::$variant),*];

            #[allow(clippy::unnecessary_cast)]
            pub fn info(self) -> &'static FuncInfo {
                match self {
                    $(
                        Func::$variant => {
                            static INFO: FuncInfo = FuncInfo {
                                name: $name,
                                method: stringify!($method),
                                group: Group::$group,
                                hint: $hint,
                                inputs: &[$(stringify!($input)),+],
                                params: &[$(
                                    ParamSpec {
                                        name: stringify!($param),
                                        kind: ParamKind::$pkind,
                                        default: $pdef as f64,
                                        min: $pmin as f64,
                                        max: $pmax as f64,
                                    }
                                ),*],
                                outputs: &[$(
                                    OutputSpec {
                                        name: stringify!($output),
                                        kind: OutputKind::$okind,
                                    }
                                ),+],
                            };
                            &INFO
                        }
                    )*
                }
            }
        }
    };
}

for_each_function!(define_functions);

impl Func {
    /// The engine's identifier, e.g. `"SMA"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn group(self) -> Group {
        self.info().group
    }

    pub fn in_group(group: Group) -> impl Iterator<Item = Func> {
        Func::ALL
            .iter()
            .copied()
            .filter(move |func| func.group() == group)
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Func {
    type Err = AdapterError;

    /// Accepts the engine name (`"HT_SINE"`) or the method name (`"ht_sine"`), in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Func::ALL
            .iter()
            .copied()
            .find(|func| {
                let info = func.info();
                info.name.eq_ignore_ascii_case(needle) || info.method.eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| AdapterError::UnknownFunction(s.to_string()))
    }
}

impl Serialize for Func {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Func {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
