use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::Error;

/// Integer representations a native result code may arrive as.
///
/// `usize` covers both the platform unsigned integer and the pointer-sized one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl NumericKind {
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            NumericKind::I8 | NumericKind::I16 | NumericKind::I32 | NumericKind::I64 | NumericKind::Isize
        )
    }
}

/// A result code widened to 64 bits, remembering whether it was signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawCode {
    Signed(i64),
    Unsigned(u64),
}

impl RawCode {
    /// Key into the result table: signed values are sign-extended and then
    /// reinterpreted, unsigned values are zero-extended.
    pub const fn canonical(self) -> u64 {
        match self {
            RawCode::Signed(value) => value as u64,
            RawCode::Unsigned(value) => value,
        }
    }
}

impl fmt::Display for RawCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCode::Signed(value) => write!(f, "{value}"),
            RawCode::Unsigned(value) => write!(f, "{value}"),
        }
    }
}

pub trait IntoRawCode: Copy + 'static {
    const KIND: NumericKind;

    fn into_raw(self) -> RawCode;
}

macro_rules! impl_into_raw_code {
    ($variant:ident as $wide:ty: $($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl IntoRawCode for $ty {
                const KIND: NumericKind = NumericKind::$kind;

                fn into_raw(self) -> RawCode {
                    RawCode::$variant(self as $wide)
                }
            }
        )*
    };
}

impl_into_raw_code!(Signed as i64: i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);
impl_into_raw_code!(Unsigned as u64: u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize);

type Normalizer = fn(&dyn Any) -> Option<RawCode>;

fn widen<T: IntoRawCode>(value: &dyn Any) -> Option<RawCode> {
    value.downcast_ref::<T>().map(|v| v.into_raw())
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    kind: NumericKind,
    normalize: Normalizer,
}

static GLOBAL: LazyLock<NormalizerRegistry> = LazyLock::new(NormalizerRegistry::new);

/// Runtime type to widening function, for values whose integer type is only
/// known at runtime.
#[derive(Debug)]
pub struct NormalizerRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl Default for NormalizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            entries: HashMap::with_capacity(10),
        };
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<isize>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<usize>();
        registry
    }

    pub fn global() -> &'static Self {
        &GLOBAL
    }

    fn register<T: IntoRawCode>(&mut self) {
        self.entries.insert(
            TypeId::of::<T>(),
            Entry {
                kind: T::KIND,
                normalize: widen::<T>,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kind_of<T: Any>(&self) -> Option<NumericKind> {
        self.entries.get(&TypeId::of::<T>()).map(|entry| entry.kind)
    }

    pub fn normalize<T: Any>(&self, value: &T) -> Result<RawCode, Error> {
        let unsupported = Error::UnsupportedKind {
            type_name: type_name::<T>(),
        };
        let entry = self.entries.get(&TypeId::of::<T>()).ok_or(unsupported)?;
        (entry.normalize)(value).ok_or(unsupported)
    }
}
