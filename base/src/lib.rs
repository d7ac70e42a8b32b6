//! Translation of native FMOD Ex `FMOD_RESULT` codes into Rust errors.
//!
//! The `ex` and `event` halves of a binding each see their own C enum for
//! `FMOD_RESULT`, so codes may arrive as any integer type. Statically typed
//! callers go through [`translate`]; callers holding an opaque value go through
//! [`result_to_error`], which dispatches on the runtime type.

pub mod code;
pub mod error;
pub mod normalize;
pub mod table;
pub mod translate;

pub use code::ResultCode;
pub use error::{Error, Result};
pub use normalize::{IntoRawCode, NormalizerRegistry, NumericKind, RawCode};
pub use table::ResultTable;
pub use translate::{Translator, result_to_error, translate};
