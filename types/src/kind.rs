use bitflags::bitflags;
use core::fmt;

/// Concrete representation of a value.
///
/// Named after runtime reflection kinds: `Int` and `Uint` are the
/// platform-width integers (`isize` / `usize`), everything else has a
/// fixed width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    String,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 15] = [
        Kind::Bool,
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Uint,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Uintptr,
        Kind::Float32,
        Kind::Float64,
        Kind::String,
    ];

    /// Returns the predeclared type name for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Uintptr => "uintptr",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
        }
    }

    /// Looks up a kind by its predeclared type name.
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The single-element set containing this kind.
    pub const fn bit(self) -> KindSet {
        match self {
            Kind::Bool => KindSet::BOOL,
            Kind::Int => KindSet::INT,
            Kind::Int8 => KindSet::INT8,
            Kind::Int16 => KindSet::INT16,
            Kind::Int32 => KindSet::INT32,
            Kind::Int64 => KindSet::INT64,
            Kind::Uint => KindSet::UINT,
            Kind::Uint8 => KindSet::UINT8,
            Kind::Uint16 => KindSet::UINT16,
            Kind::Uint32 => KindSet::UINT32,
            Kind::Uint64 => KindSet::UINT64,
            Kind::Uintptr => KindSet::UINTPTR,
            Kind::Float32 => KindSet::FLOAT32,
            Kind::Float64 => KindSet::FLOAT64,
            Kind::String => KindSet::STRING,
        }
    }

    pub const fn is_signed(self) -> bool {
        KindSet::SIGNED.contains(self.bit())
    }

    pub const fn is_unsigned(self) -> bool {
        KindSet::UNSIGNED.contains(self.bit())
    }

    pub const fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    pub const fn is_float(self) -> bool {
        KindSet::FLOAT.contains(self.bit())
    }

    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of kinds.
    ///
    /// Constraint sets are built from these; the union of two constraints
    /// is the bitwise or of their sets.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct KindSet: u16 {
        const BOOL = 1 << 0;
        const INT = 1 << 1;
        const INT8 = 1 << 2;
        const INT16 = 1 << 3;
        const INT32 = 1 << 4;
        const INT64 = 1 << 5;
        const UINT = 1 << 6;
        const UINT8 = 1 << 7;
        const UINT16 = 1 << 8;
        const UINT32 = 1 << 9;
        const UINT64 = 1 << 10;
        const UINTPTR = 1 << 11;
        const FLOAT32 = 1 << 12;
        const FLOAT64 = 1 << 13;
        const STRING = 1 << 14;

        const SIGNED = Self::INT.bits()
            | Self::INT8.bits()
            | Self::INT16.bits()
            | Self::INT32.bits()
            | Self::INT64.bits();
        const UNSIGNED = Self::UINT.bits()
            | Self::UINT8.bits()
            | Self::UINT16.bits()
            | Self::UINT32.bits()
            | Self::UINT64.bits()
            | Self::UINTPTR.bits();
        const FLOAT = Self::FLOAT32.bits() | Self::FLOAT64.bits();
    }
}

impl KindSet {
    /// Returns whether `kind` is a member of this set.
    pub const fn has(self, kind: Kind) -> bool {
        self.contains(kind.bit())
    }

    /// Iterates over the member kinds in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = Kind> {
        Kind::ALL.into_iter().filter(move |kind| self.has(*kind))
    }
}

impl From<Kind> for KindSet {
    fn from(kind: Kind) -> Self {
        kind.bit()
    }
}
