use std::collections::HashMap;
use std::sync::LazyLock;

use crate::code::ResultCode;
use crate::error::{Error, Result};
use crate::normalize::RawCode;

static GLOBAL: LazyLock<ResultTable> = LazyLock::new(ResultTable::new);

/// Canonical key to result code. Built once, read-only afterwards.
#[derive(Debug)]
pub struct ResultTable {
    codes: HashMap<u64, ResultCode>,
}

impl Default for ResultTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultTable {
    pub fn new() -> Self {
        Self {
            codes: ResultCode::ALL
                .iter()
                .map(|&code| (u64::from(code.value()), code))
                .collect(),
        }
    }

    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn lookup(&self, key: u64) -> Option<ResultCode> {
        self.codes.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, ResultCode)> + '_ {
        self.codes.iter().map(|(&key, &code)| (key, code))
    }

    pub fn translate(&self, raw: RawCode) -> Result<()> {
        match self.lookup(raw.canonical()) {
            Some(code) => code.into_result(),
            None => Err(Error::UnknownCode(raw)),
        }
    }
}
