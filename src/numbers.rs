// Integer numbers
pub const INT: isize = 10; // isize width follows the target (32-bit or 64-bit)
pub const INT8: i8 = 120; // range: -128 to 127
pub const INT16: i16 = 32000; // range: -32,768 to 32,767
pub const INT32: i32 = 2_000_000_000; // range: -2,147,483,648 to 2,147,483,647
pub const INT64: i64 = 9_000_000_000_000_000_000; // range: -9,223,372,036,854,775,808 to 9,223,372,036,854,775,807

pub const UINT: usize = 10; // unsigned (only positive)
pub const UINT8: u8 = 255; // range: 0 to 255
pub const UINT16: u16 = 65535; // range: 0 to 65,535
pub const UINT32: u32 = 4_294_967_295; // range: 0 to 4,294,967,295
pub const UINT64: u64 = 18_446_744_073_709_551_615; // range: 0 to 18,446,744,073,709,551,615

// Floating-point numbers
#[allow(clippy::approx_constant)]
pub const FLOAT32: f32 = 3.14; // ~ ±3.4e38
pub const FLOAT64: f64 = 19.90; // ~ ±1.7e308

pub fn signed_line_platform() -> String {
    format!("Int: {}", INT)
}

pub fn signed_line_fixed() -> String {
    format!(
        "Int8: {} Int16: {} Int32: {} Int64: {}",
        INT8, INT16, INT32, INT64
    )
}

pub fn unsigned_line_platform() -> String {
    format!("Unsigned Int: {}", UINT)
}

pub fn unsigned_line_fixed() -> String {
    format!(
        "Uint8: {} Uint16: {} Uint32: {} Uint64: {}",
        UINT8, UINT16, UINT32, UINT64
    )
}

pub fn floats_line() -> String {
    format!("Floats: {} {}", FLOAT32, FLOAT64)
}

/// Multiplies a single-precision float by an integer.
///
/// `f32 * isize` does not type-check, so the integer is converted with `as` first.
/// Integers past 2^24 lose precision in that step.
pub fn multiply(factor: f32, n: isize) -> f32 {
    factor * n as f32
}

pub fn product_line() -> String {
    format!("Result of multiplication: {}", multiply(FLOAT32, INT))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerRange {
    pub min: i128,
    pub max: i128,
}

impl IntegerRange {
    pub fn contains(&self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerKind {
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
}

impl IntegerKind {
    pub const ALL: [IntegerKind; 10] = [
        IntegerKind::Int,
        IntegerKind::Int8,
        IntegerKind::Int16,
        IntegerKind::Int32,
        IntegerKind::Int64,
        IntegerKind::Uint,
        IntegerKind::Uint8,
        IntegerKind::Uint16,
        IntegerKind::Uint32,
        IntegerKind::Uint64,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IntegerKind::Int => "Int",
            IntegerKind::Int8 => "Int8",
            IntegerKind::Int16 => "Int16",
            IntegerKind::Int32 => "Int32",
            IntegerKind::Int64 => "Int64",
            IntegerKind::Uint => "Unsigned Int",
            IntegerKind::Uint8 => "Uint8",
            IntegerKind::Uint16 => "Uint16",
            IntegerKind::Uint32 => "Uint32",
            IntegerKind::Uint64 => "Uint64",
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            IntegerKind::Int
                | IntegerKind::Int8
                | IntegerKind::Int16
                | IntegerKind::Int32
                | IntegerKind::Int64
        )
    }

    pub fn bits(self) -> u32 {
        match self {
            IntegerKind::Int => isize::BITS,
            IntegerKind::Int8 => i8::BITS,
            IntegerKind::Int16 => i16::BITS,
            IntegerKind::Int32 => i32::BITS,
            IntegerKind::Int64 => i64::BITS,
            IntegerKind::Uint => usize::BITS,
            IntegerKind::Uint8 => u8::BITS,
            IntegerKind::Uint16 => u16::BITS,
            IntegerKind::Uint32 => u32::BITS,
            IntegerKind::Uint64 => u64::BITS,
        }
    }

    pub fn range(self) -> IntegerRange {
        let (min, max) = match self {
            IntegerKind::Int => (isize::MIN as i128, isize::MAX as i128),
            IntegerKind::Int8 => (i8::MIN as i128, i8::MAX as i128),
            IntegerKind::Int16 => (i16::MIN as i128, i16::MAX as i128),
            IntegerKind::Int32 => (i32::MIN as i128, i32::MAX as i128),
            IntegerKind::Int64 => (i64::MIN as i128, i64::MAX as i128),
            IntegerKind::Uint => (0, usize::MAX as i128),
            IntegerKind::Uint8 => (0, u8::MAX as i128),
            IntegerKind::Uint16 => (0, u16::MAX as i128),
            IntegerKind::Uint32 => (0, u32::MAX as i128),
            IntegerKind::Uint64 => (0, u64::MAX as i128),
        };
        IntegerRange { min, max }
    }

    /// The literal this program prints for the type.
    pub fn sample(self) -> i128 {
        match self {
            IntegerKind::Int => INT as i128,
            IntegerKind::Int8 => INT8 as i128,
            IntegerKind::Int16 => INT16 as i128,
            IntegerKind::Int32 => INT32 as i128,
            IntegerKind::Int64 => INT64 as i128,
            IntegerKind::Uint => UINT as i128,
            IntegerKind::Uint8 => UINT8 as i128,
            IntegerKind::Uint16 => UINT16 as i128,
            IntegerKind::Uint32 => UINT32 as i128,
            IntegerKind::Uint64 => UINT64 as i128,
        }
    }
}
