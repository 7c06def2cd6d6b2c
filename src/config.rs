// Configuration loading: optional TOML file plus TALIB_* environment variables
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::Result;

/// Default environment prefix, e.g. `TALIB_ENGINE__COMPATIBILITY=metastock`.
pub const ENV_PREFIX: &str = "TALIB";

/// File looked up in the working directory when no path is given.
pub const DEFAULT_FILE: &str = "talib";

/// Engine-wide computation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Compatibility {
    #[default]
    Default,
    Metastock,
}

impl Compatibility {
    pub fn code(self) -> i32 {
        match self {
            Compatibility::Default => 0,
            Compatibility::Metastock => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Compatibility::Default => "default",
            Compatibility::Metastock => "metastock",
        }
    }
}

impl FromStr for Compatibility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Compatibility::Default),
            "metastock" => Ok(Compatibility::Metastock),
            other => Err(format!("unknown compatibility mode `{}`", other)),
        }
    }
}

impl TryFrom<String> for Compatibility {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Compatibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

macro_rules! unstable_funcs {
    ($($variant:ident => $key:literal = $id:literal,)+) => {
        /// Functions whose warm-up period can be extended engine-wide.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
        #[serde(try_from = "String")]
        pub enum UnstableFunc {
            $($variant,)+
        }

        impl UnstableFunc {
            pub const ALL: &'static [UnstableFunc] = &[$(UnstableFunc::$variant),+];

            /// `TA_FuncUnstId` value.
            pub fn id(self) -> i32 {
                match self {
                    $(UnstableFunc::$variant => $id,)+
                }
            }

            pub fn key(self) -> &'static str {
                match self {
                    $(UnstableFunc::$variant => $key,)+
                }
            }
        }
    };
}

unstable_funcs! {
    Adx => "adx" = 0,
    Adxr => "adxr" = 1,
    Atr => "atr" = 2,
    Cmo => "cmo" = 3,
    Dx => "dx" = 4,
    Ema => "ema" = 5,
    HtDcPeriod => "ht_dcperiod" = 6,
    HtDcPhase => "ht_dcphase" = 7,
    HtPhasor => "ht_phasor" = 8,
    HtSine => "ht_sine" = 9,
    HtTrendline => "ht_trendline" = 10,
    HtTrendMode => "ht_trendmode" = 11,
    Kama => "kama" = 12,
    Mama => "mama" = 13,
    Mfi => "mfi" = 14,
    MinusDi => "minus_di" = 15,
    MinusDm => "minus_dm" = 16,
    Natr => "natr" = 17,
    PlusDi => "plus_di" = 18,
    PlusDm => "plus_dm" = 19,
    Rsi => "rsi" = 20,
    StochRsi => "stochrsi" = 21,
    T3 => "t3" = 22,
    All => "all" = 23,
}

impl fmt::Display for UnstableFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for UnstableFunc {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim();
        UnstableFunc::ALL
            .iter()
            .copied()
            .find(|func| func.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("`{}` has no unstable period", s))
    }
}

impl TryFrom<String> for UnstableFunc {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for UnstableFunc {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Settings applied to the engine as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub compatibility: Compatibility,
    /// Extra warm-up per function; `all` sets every function and the
    /// specific entries override it.
    pub unstable_periods: BTreeMap<UnstableFunc, u32>,
}

impl EngineSettings {
    /// Unstable periods in the order they are applied: `all` first (zero
    /// when unlisted), then each specific function.
    pub fn unstable_plan(&self) -> Vec<(UnstableFunc, u32)> {
        let all = self
            .unstable_periods
            .get(&UnstableFunc::All)
            .copied()
            .unwrap_or(0);
        std::iter::once((UnstableFunc::All, all))
            .chain(
                self.unstable_periods
                    .iter()
                    .filter(|(func, _)| **func != UnstableFunc::All)
                    .map(|(&func, &period)| (func, period)),
            )
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    /// Rayon pool size; the number of CPUs when unset.
    pub threads: Option<usize>,
    /// Below this many jobs a batch runs on the calling thread.
    pub min_parallel_jobs: usize,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            threads: None,
            min_parallel_jobs: 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineSettings,
    pub batch: BatchSettings,
}

impl Settings {
    /// Loads `.env`, then `talib.toml` (if present) and `TALIB_*` variables.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_sources(None, ENV_PREFIX)
    }

    /// Reads `file` (required when given) and then environment variables
    /// starting with `env_prefix`; nested keys are separated by `__`.
    pub fn from_sources(file: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder();
        builder = match file {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(DEFAULT_FILE).required(false)),
        };
        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        debug!(
            "Loaded settings: compatibility {}, {} unstable periods, batch {:?}",
            settings.engine.compatibility.name(),
            settings.engine.unstable_periods.len(),
            settings.batch
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.engine.compatibility, Compatibility::Default);
        assert!(settings.engine.unstable_periods.is_empty());
        assert_eq!(settings.batch.threads, None);
        assert_eq!(settings.batch.min_parallel_jobs, 4);
    }

    #[test]
    fn test_unstable_plan_applies_all_before_specific_periods() {
        let mut engine = EngineSettings::default();
        engine.unstable_periods.insert(UnstableFunc::Rsi, 10);
        engine.unstable_periods.insert(UnstableFunc::All, 3);
        engine.unstable_periods.insert(UnstableFunc::Adx, 7);

        assert_eq!(
            engine.unstable_plan(),
            vec![
                (UnstableFunc::All, 3),
                (UnstableFunc::Adx, 7),
                (UnstableFunc::Rsi, 10),
            ]
        );
    }

    #[test]
    fn test_unstable_plan_resets_all_when_unlisted() {
        assert_eq!(
            EngineSettings::default().unstable_plan(),
            vec![(UnstableFunc::All, 0)]
        );
    }

    #[test]
    fn test_unstable_ids_follow_engine_order() {
        assert_eq!(UnstableFunc::Adx.id(), 0);
        assert_eq!(UnstableFunc::Ema.id(), 5);
        assert_eq!(UnstableFunc::Rsi.id(), 20);
        assert_eq!(UnstableFunc::All.id(), 23);
        for (idx, func) in UnstableFunc::ALL.iter().enumerate() {
            assert_eq!(func.id(), idx as i32);
        }
        assert_eq!("HT_DCPERIOD".parse::<UnstableFunc>(), Ok(UnstableFunc::HtDcPeriod));
        assert!("sma".parse::<UnstableFunc>().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[engine]
compatibility = "metastock"

[engine.unstable_periods]
rsi = 10
ema = 5

[batch]
threads = 2
"#
        )
        .unwrap();

        let settings = Settings::from_sources(Some(file.path()), "TALIB_TEST_FILE").unwrap();
        assert_eq!(settings.engine.compatibility, Compatibility::Metastock);
        assert_eq!(settings.engine.unstable_periods.get(&UnstableFunc::Rsi), Some(&10));
        assert_eq!(settings.engine.unstable_periods.get(&UnstableFunc::Ema), Some(&5));
        assert_eq!(settings.batch.threads, Some(2));
        assert_eq!(settings.batch.min_parallel_jobs, 4);
    }

    #[test]
    fn test_environment_overrides() {
        std::env::set_var("TALIBENVTEST_ENGINE__COMPATIBILITY", "metastock");
        std::env::set_var("TALIBENVTEST_BATCH__MIN_PARALLEL_JOBS", "16");

        let settings = Settings::from_sources(None, "TALIBENVTEST").unwrap();
        assert_eq!(settings.engine.compatibility, Compatibility::Metastock);
        assert_eq!(settings.batch.min_parallel_jobs, 16);

        std::env::remove_var("TALIBENVTEST_ENGINE__COMPATIBILITY");
        std::env::remove_var("TALIBENVTEST_BATCH__MIN_PARALLEL_JOBS");
    }

    #[test]
    fn test_unknown_compatibility_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[engine]\ncompatibility = \"excel\"").unwrap();
        assert!(Settings::from_sources(Some(file.path()), "TALIB_TEST_BAD").is_err());
    }
}
