use crate::code::ResultCode;
use crate::normalize::RawCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The native call failed with a known code.
    #[error("{}", .0.description())]
    Native(ResultCode),

    /// The value handed over was not an integer type the registry knows.
    #[error("Unexpected type: {type_name}")]
    UnsupportedKind { type_name: &'static str },

    /// The value is an integer but not a code in the table, usually a newer
    /// native library than the table was written for.
    #[error("Unknown FMOD_RESULT: {0}")]
    UnknownCode(RawCode),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn code(&self) -> Option<ResultCode> {
        match self {
            Error::Native(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::Native(ResultCode::FileNotfound).to_string(),
            "File not found."
        );
        assert_eq!(
            Error::UnsupportedKind { type_name: "f32" }.to_string(),
            "Unexpected type: f32"
        );
        assert_eq!(
            Error::UnknownCode(RawCode::Signed(-3)).to_string(),
            "Unknown FMOD_RESULT: -3"
        );
    }

    #[test]
    fn code_only_for_native() {
        assert_eq!(
            Error::Native(ResultCode::Memory).code(),
            Some(ResultCode::Memory)
        );
        assert_eq!(Error::UnknownCode(RawCode::Unsigned(96)).code(), None);
    }
}
