// TA-Lib return codes
use serde::Serialize;
use std::fmt;

/// Status returned by every engine entry point.
///
/// Mirrors `TA_RetCode`. Values the binding does not know are kept raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RetCode {
    Success,
    LibNotInitialized,
    BadParam,
    AllocErr,
    GroupNotFound,
    FuncNotFound,
    InvalidHandle,
    InvalidParamHolder,
    InvalidParamHolderType,
    InvalidParamFunction,
    InputNotAllInitialized,
    OutputNotAllInitialized,
    OutOfRangeStartIndex,
    OutOfRangeEndIndex,
    InvalidListType,
    BadObject,
    NotSupported,
    InternalError,
    UnknownErr,
    Other(i32),
}

impl RetCode {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => RetCode::Success,
            1 => RetCode::LibNotInitialized,
            2 => RetCode::BadParam,
            3 => RetCode::AllocErr,
            4 => RetCode::GroupNotFound,
            5 => RetCode::FuncNotFound,
            6 => RetCode::InvalidHandle,
            7 => RetCode::InvalidParamHolder,
            8 => RetCode::InvalidParamHolderType,
            9 => RetCode::InvalidParamFunction,
            10 => RetCode::InputNotAllInitialized,
            11 => RetCode::OutputNotAllInitialized,
            12 => RetCode::OutOfRangeStartIndex,
            13 => RetCode::OutOfRangeEndIndex,
            14 => RetCode::InvalidListType,
            15 => RetCode::BadObject,
            16 => RetCode::NotSupported,
            5000 => RetCode::InternalError,
            0xFFFF => RetCode::UnknownErr,
            other => RetCode::Other(other),
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            RetCode::Success => 0,
            RetCode::LibNotInitialized => 1,
            RetCode::BadParam => 2,
            RetCode::AllocErr => 3,
            RetCode::GroupNotFound => 4,
            RetCode::FuncNotFound => 5,
            RetCode::InvalidHandle => 6,
            RetCode::InvalidParamHolder => 7,
            RetCode::InvalidParamHolderType => 8,
            RetCode::InvalidParamFunction => 9,
            RetCode::InputNotAllInitialized => 10,
            RetCode::OutputNotAllInitialized => 11,
            RetCode::OutOfRangeStartIndex => 12,
            RetCode::OutOfRangeEndIndex => 13,
            RetCode::InvalidListType => 14,
            RetCode::BadObject => 15,
            RetCode::NotSupported => 16,
            RetCode::InternalError => 5000,
            RetCode::UnknownErr => 0xFFFF,
            RetCode::Other(raw) => raw,
        }
    }

    /// The symbolic name used by the C headers.
    pub fn name(self) -> &'static str {
        match self {
            RetCode::Success => "TA_SUCCESS",
            RetCode::LibNotInitialized => "TA_LIB_NOT_INITIALIZE",
            RetCode::BadParam => "TA_BAD_PARAM",
            RetCode::AllocErr => "TA_ALLOC_ERR",
            RetCode::GroupNotFound => "TA_GROUP_NOT_FOUND",
            RetCode::FuncNotFound => "TA_FUNC_NOT_FOUND",
            RetCode::InvalidHandle => "TA_INVALID_HANDLE",
            RetCode::InvalidParamHolder => "TA_INVALID_PARAM_HOLDER",
            RetCode::InvalidParamHolderType => "TA_INVALID_PARAM_HOLDER_TYPE",
            RetCode::InvalidParamFunction => "TA_INVALID_PARAM_FUNCTION",
            RetCode::InputNotAllInitialized => "TA_INPUT_NOT_ALL_INITIALIZE",
            RetCode::OutputNotAllInitialized => "TA_OUTPUT_NOT_ALL_INITIALIZE",
            RetCode::OutOfRangeStartIndex => "TA_OUT_OF_RANGE_START_INDEX",
            RetCode::OutOfRangeEndIndex => "TA_OUT_OF_RANGE_END_INDEX",
            RetCode::InvalidListType => "TA_INVALID_LIST_TYPE",
            RetCode::BadObject => "TA_BAD_OBJECT",
            RetCode::NotSupported => "TA_NOT_SUPPORTED",
            RetCode::InternalError => "TA_INTERNAL_ERROR",
            RetCode::UnknownErr => "TA_UNKNOWN_ERR",
            RetCode::Other(_) => "TA_UNRECOGNIZED",
        }
    }

    pub fn is_success(self) -> bool {
        self == RetCode::Success
    }

    /// `Ok(())` on success, the code itself otherwise.
    pub fn into_result(self) -> Result<(), RetCode> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for RetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_keep_their_value() {
        for raw in (0..=16).chain([5000, 0xFFFF]) {
            assert_eq!(RetCode::from_raw(raw).raw(), raw);
            assert!(!matches!(RetCode::from_raw(raw), RetCode::Other(_)));
        }
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let code = RetCode::from_raw(4242);
        assert_eq!(code, RetCode::Other(4242));
        assert_eq!(code.raw(), 4242);
        assert_eq!(code.to_string(), "TA_UNRECOGNIZED (4242)");
    }

    #[test]
    fn test_into_result() {
        assert!(RetCode::Success.into_result().is_ok());
        assert_eq!(RetCode::BadParam.into_result(), Err(RetCode::BadParam));
    }
}
