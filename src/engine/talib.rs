// The native TA-Lib engine
use libc::c_int;
use parking_lot::RwLock;
use std::ffi::CStr;
use std::sync::OnceLock;
use tracing::{debug, error, info};

use super::ffi;
use super::{Engine, RawCall, RetCode, Span};
use crate::config::{EngineSettings, UnstableFunc};
use crate::error::{AdapterError, Result};
use crate::functions::{for_each_function, Func};
use crate::params::ParamValue;

static ENGINE: OnceLock<std::result::Result<TaLib, RetCode>> = OnceLock::new();

/// Handle to the process-wide TA-Lib instance.
///
/// Obtained through [`TaLib::initialize`]; the library is initialized at most
/// once per process. Engine-wide settings are changed under a write lock, so
/// they never change while a call is running.
pub struct TaLib {
    label: String,
    settings: RwLock<EngineSettings>,
}

impl TaLib {
    /// Initializes the library on first use and returns the shared engine.
    ///
    /// A failed initialization is remembered; later calls return the same error.
    pub fn initialize() -> Result<&'static TaLib> {
        let state = ENGINE.get_or_init(|| {
            let code = RetCode::from_raw(unsafe { ffi::TA_Initialize() });
            match code.into_result() {
                Ok(()) => {
                    // SAFETY: TA_GetVersionString returns a static NUL-terminated string.
                    let version = unsafe { CStr::from_ptr(ffi::TA_GetVersionString()) }
                        .to_string_lossy()
                        .into_owned();
                    info!("Initialized TA-Lib {}", version);
                    Ok(TaLib {
                        label: format!("TA-Lib {}", version),
                        settings: RwLock::new(EngineSettings::default()),
                    })
                }
                Err(code) => {
                    error!("Failed to initialize TA-Lib: {}", code);
                    Err(code)
                }
            }
        });
        state
            .as_ref()
            .map_err(|&code| AdapterError::EngineInit { code })
    }

    /// Initializes the library and applies `settings`.
    pub fn initialize_with(settings: &EngineSettings) -> Result<&'static TaLib> {
        let engine = Self::initialize()?;
        engine.configure(settings)?;
        Ok(engine)
    }

    /// The engine, if initialization already succeeded.
    pub fn get() -> Option<&'static TaLib> {
        ENGINE.get().and_then(|state| state.as_ref().ok())
    }

    /// Version string reported by the library, e.g. `0.4.0 (Jan  1 2024 00:00:00)`.
    pub fn version(&self) -> &str {
        self.label.trim_start_matches("TA-Lib ")
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings.read().clone()
    }

    /// Current unstable period of `func`, as the library reports it.
    pub fn unstable_period(&self, func: UnstableFunc) -> u32 {
        let _guard = self.settings.read();
        unsafe { ffi::TA_GetUnstablePeriod(func.id()) }
    }

    /// Replaces the engine-wide settings.
    ///
    /// The `all` period is applied first, so specific entries override it;
    /// unstable periods not listed in `settings` are reset to zero. When the
    /// library rejects a value the previous settings are applied again.
    pub fn configure(&self, settings: &EngineSettings) -> Result<()> {
        let mut current = self.settings.write();

        if let Err(e) = apply(settings) {
            error!("Failed to configure TA-Lib: {}", e);
            if let Err(restore) = apply(&current) {
                error!("Failed to restore previous TA-Lib settings: {}", restore);
            }
            return Err(e);
        }

        *current = settings.clone();
        debug!(
            "Configured TA-Lib: compatibility {}, unstable periods {:?}",
            settings.compatibility.name(),
            settings.unstable_periods
        );
        Ok(())
    }
}

fn apply(settings: &EngineSettings) -> Result<()> {
    let code = RetCode::from_raw(unsafe { ffi::TA_SetCompatibility(settings.compatibility.code()) });
    code.into_result()
        .map_err(|code| AdapterError::EngineSettings { code })?;
    for (func, period) in settings.unstable_plan() {
        set_unstable_period(func, period)?;
    }
    Ok(())
}

fn set_unstable_period(func: UnstableFunc, period: u32) -> Result<()> {
    let code = RetCode::from_raw(unsafe { ffi::TA_SetUnstablePeriod(func.id(), period) });
    code.into_result()
        .map_err(|code| AdapterError::EngineSettings { code })
}

fn to_c_int(value: usize) -> std::result::Result<c_int, RetCode> {
    c_int::try_from(value).map_err(|_| RetCode::OutOfRangeEndIndex)
}

fn to_usize(value: c_int) -> std::result::Result<usize, RetCode> {
    usize::try_from(value).map_err(|_| RetCode::InternalError)
}

macro_rules! ffi_param {
    (Int, $value:expr) => { $value.as_int() };
    (Real, $value:expr) => { $value.as_real() };
    (MaType, $value:expr) => { $value.as_int() };
}

macro_rules! ffi_output {
    (Real, $output:expr) => { $output.real()? };
    (Integer, $output:expr) => { $output.integer()? };
}

macro_rules! define_dispatch {
    ($({
        $variant:ident, $method:ident, $name:literal, $ffi:ident, $lookback:ident, $group:ident, $hint:literal,
        [$($input:ident),+],
        [$($param:ident: $pkind:ident = $pdef:literal => [$pmin:literal, $pmax:literal]),*],
        [$($output:ident: $okind:ident),+],
    },)*) => {
        /// Calls the compute entry point of `call.func`.
        ///
        /// # Safety
        ///
        /// Same contract as [`Engine::compute`].
        unsafe fn dispatch(call: &RawCall<'_>) -> std::result::Result<Span, RetCode> {
            let start = to_c_int(call.start)?;
            let end = to_c_int(call.end)?;
            let mut out_begin: c_int = 0;
            let mut out_count: c_int = 0;

            let raw = match call.func {
                $(
                    Func::$variant => {
                        let &[$($input),+] = call.inputs else {
                            return Err(RetCode::BadParam);
                        };
                        let &[$($param),*] = call.params else {
                            return Err(RetCode::BadParam);
                        };
                        let &[$($output),+] = call.outputs else {
                            return Err(RetCode::BadParam);
                        };
                        ffi::$ffi(
                            start,
                            end,
                            $($input,)+
                            $(ffi_param!($pkind, $param),)*
                            &mut out_begin,
                            &mut out_count,
                            $(ffi_output!($okind, $output)),+
                        )
                    }
                )*
            };

            RetCode::from_raw(raw).into_result()?;
            Ok(Span {
                begin: to_usize(out_begin)?,
                count: to_usize(out_count)?,
            })
        }

        fn dispatch_lookback(func: Func, params: &[ParamValue]) -> std::result::Result<usize, RetCode> {
            let raw = match func {
                $(
                    Func::$variant => {
                        let &[$($param),*] = params else {
                            return Err(RetCode::BadParam);
                        };
                        unsafe { ffi::$lookback($(ffi_param!($pkind, $param)),*) }
                    }
                )*
            };
            // -1 signals invalid parameters
            usize::try_from(raw).map_err(|_| RetCode::BadParam)
        }
    };
}

for_each_function!(define_dispatch);

impl Engine for TaLib {
    fn name(&self) -> &str {
        &self.label
    }

    fn lookback(&self, func: Func, params: &[ParamValue]) -> std::result::Result<usize, RetCode> {
        let _guard = self.settings.read();
        dispatch_lookback(func, params)
    }

    unsafe fn compute(&self, call: &RawCall<'_>) -> std::result::Result<Span, RetCode> {
        let _guard = self.settings.read();
        dispatch(call)
    }
}
