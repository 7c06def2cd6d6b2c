// Typed methods, one per engine function

use crate::adapter::{evaluate, take_series};
use crate::engine::Engine;
use crate::error::Result;
use crate::functions::{for_each_function, Func};
use crate::ma_type::MaType;
use crate::params::ParamValue;
use crate::series::{AnyBuffer, Buffer, Outcome, Series};

macro_rules! sample_ty {
    (Real) => { f64 };
    (Integer) => { i32 };
}

macro_rules! param_ty {
    (Int) => { i32 };
    (Real) => { f64 };
    (MaType) => { MaType };
}

macro_rules! define_indicators {
    ($({
        $variant:ident, $method:ident, $name:literal, $ffi:ident, $lookback:ident, $group:ident, $hint:literal,
        [$($input:ident),+],
        [$($param:ident: $pkind:ident = $pdef:literal => [$pmin:literal, $pmax:literal]),*],
        [$($output:ident: $okind:ident),+],
    },)*) => {
        /// Typed access to every function of an [`Engine`].
        ///
        /// Each method takes the inputs, then the optional parameters, then one
        /// [`Buffer`] per output, and returns the trimmed outputs (a tuple when
        /// the function has several) with the shared `begin`/`count`.
        ///
        /// ```ignore
        /// use talib_adapter::{Buffer, Indicators};
        ///
        /// let closes = [1.0, 2.0, 3.0, 4.0, 5.0];
        /// let sma = engine.sma(&closes, 3, Buffer::Fresh)?;
        /// assert_eq!(sma.begin, 2);
        /// assert_eq!(sma.values, vec![2.0, 3.0, 4.0]);
        /// ```
        pub trait Indicators: Engine {
            $(
                #[doc = concat!($hint, " (`", $name, "`).")]
                #[allow(unused_parens, clippy::too_many_arguments, clippy::type_complexity)]
                fn $method<'o>(
                    &self,
                    $($input: &[f64],)+
                    $($param: param_ty!($pkind),)*
                    $($output: Buffer<'o, sample_ty!($okind)>),+
                ) -> Result<Outcome<($(Series<'o, sample_ty!($okind)>),+)>> {
                    let Outcome { values, begin, count } = evaluate(
                        self,
                        Func::$variant,
                        &[$($input),+],
                        &[$(ParamValue::from($param)),*],
                        vec![$(AnyBuffer::from($output)),+],
                    )?;
                    let mut series = values.into_iter();
                    let values = ($(
                        take_series::<sample_ty!($okind)>(&mut series, Func::$variant, stringify!($output))?
                    ),+);
                    Ok(Outcome { values, begin, count })
                }
            )*
        }
    };
}

for_each_function!(define_indicators);

impl<E: Engine + ?Sized> Indicators for E {}
