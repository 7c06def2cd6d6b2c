// FFI declarations for the TA-Lib C library
#![allow(non_snake_case)]

use libc::{c_char, c_double, c_int, c_uint};

use crate::functions::for_each_function;

// TA_MAType is an enum, passed as int
macro_rules! ffi_param_ty {
    (Int) => { c_int };
    (Real) => { c_double };
    (MaType) => { c_int };
}

macro_rules! ffi_out_ty {
    (Real) => { c_double };
    (Integer) => { c_int };
}

macro_rules! declare_ffi {
    ($({
        $variant:ident, $method:ident, $name:literal, $ffi:ident, $lookback:ident, $group:ident, $hint:literal,
        [$($input:ident),+],
        [$($param:ident: $pkind:ident = $pdef:literal => [$pmin:literal, $pmax:literal]),*],
        [$($output:ident: $okind:ident),+],
    },)*) => {
        extern "C" {
            $(
                pub fn $ffi(
                    startIdx: c_int,
                    endIdx: c_int,
                    $($input: *const c_double,)+
                    $($param: ffi_param_ty!($pkind),)*
                    outBegIdx: *mut c_int,
                    outNBElement: *mut c_int,
                    $($output: *mut ffi_out_ty!($okind)),+
                ) -> c_int;

                pub fn $lookback($($param: ffi_param_ty!($pkind)),*) -> c_int;
            )*
        }
    };
}

for_each_function!(declare_ffi);

extern "C" {
    pub fn TA_Initialize() -> c_int;

    pub fn TA_GetVersionString() -> *const c_char;

    // TA_FuncUnstId, TA_Compatibility are enums
    pub fn TA_SetUnstablePeriod(id: c_int, unstablePeriod: c_uint) -> c_int;
    pub fn TA_GetUnstablePeriod(id: c_int) -> c_uint;
    pub fn TA_SetCompatibility(value: c_int) -> c_int;
}
