use std::any::Any;

use crate::error::Result;
use crate::normalize::{IntoRawCode, NormalizerRegistry};
use crate::table::ResultTable;

/// Pairs a result table with a normalizer registry.
///
/// Holds only shared references to immutable tables, so it is `Copy` and can
/// be used from any thread.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a ResultTable,
    normalizers: &'a NormalizerRegistry,
}

impl<'a> Translator<'a> {
    pub fn new(table: &'a ResultTable, normalizers: &'a NormalizerRegistry) -> Self {
        Self { table, normalizers }
    }

    pub fn table(&self) -> &'a ResultTable {
        self.table
    }

    pub fn translate<C: IntoRawCode>(&self, code: C) -> Result<()> {
        self.table.translate(code.into_raw())
    }

    /// Translate a value whose integer type is only known at runtime.
    pub fn translate_any<T: Any>(&self, value: T) -> Result<()> {
        let raw = self.normalizers.normalize(&value)?;
        self.table.translate(raw)
    }
}

impl Translator<'static> {
    pub fn global() -> Self {
        Self::new(ResultTable::global(), NormalizerRegistry::global())
    }
}

/// Convert an `FMOD_RESULT` of any integer type into `Ok(())` or an error.
///
/// Fails with [`Error::UnsupportedKind`](crate::Error::UnsupportedKind) for
/// non-integer values and [`Error::UnknownCode`](crate::Error::UnknownCode)
/// for integers missing from the table.
pub fn result_to_error<T: Any>(value: T) -> Result<()> {
    Translator::global().translate_any(value)
}

pub fn translate<C: IntoRawCode>(code: C) -> Result<()> {
    Translator::global().translate(code)
}
