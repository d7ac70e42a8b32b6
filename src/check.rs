use std::any::Any;

use fmod_base::{Error, IntoRawCode, Result};
use tracing::{trace, warn};

fn report(op: &str, result: Result<()>) -> Result<()> {
    match &result {
        Ok(()) => trace!(op, "ok"),
        Err(Error::Native(code)) => warn!(op, code = code.name(), "{}", code.description()),
        Err(err) => warn!(op, "{err}"),
    }
    result
}

/// Translate the result of the native call `op`, logging failures.
pub fn check<C: IntoRawCode>(op: &str, code: C) -> Result<()> {
    report(op, fmod_base::translate(code))
}

pub fn check_any<T: Any>(op: &str, value: T) -> Result<()> {
    report(op, fmod_base::result_to_error(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmod_base::{RawCode, ResultCode};

    #[test]
    fn passes_results_through() {
        assert_eq!(check("System::init", 0i32), Ok(()));
        assert_eq!(
            check("System::createSound", 23u32),
            Err(Error::Native(ResultCode::FileNotfound))
        );
        assert_eq!(
            check_any("EventSystem::load", 999999i64),
            Err(Error::UnknownCode(RawCode::Signed(999999)))
        );
        assert!(matches!(
            check_any("Channel::setVolume", 0.5f32),
            Err(Error::UnsupportedKind { type_name: "f32" })
        ));
    }
}
