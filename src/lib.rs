pub mod benches;
pub mod harness;
pub mod report;
pub mod schema;

/// Number of kernels in one run.
pub const KERNEL_COUNT: usize = 9;

/// One timed micro-workload. The declaration order is the report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kernel {
    /// Short-lived fixed-size heap sequences.
    Alloc,
    /// Reference writes into a fixed-size array.
    ArrayWrite,
    /// Fresh string-keyed map with ten inserts.
    DictionaryWrite,
    /// Multiply-add recurrence on `f64`.
    FloatMath,
    /// Multiply-add recurrence on wrapping `i64`.
    IntegerMath,
    /// Visiting every element of a prebuilt vector.
    CollectionIterate,
    /// Growing a fresh vector by appending.
    CollectionWrite,
    /// Content equality of two distinct strings.
    StringCompare,
    /// Recursive Towers of Hanoi call overhead.
    Hanoi,
}

impl Kernel {
    pub const ALL: [Kernel; KERNEL_COUNT] = [
        Kernel::Alloc,
        Kernel::ArrayWrite,
        Kernel::DictionaryWrite,
        Kernel::FloatMath,
        Kernel::IntegerMath,
        Kernel::CollectionIterate,
        Kernel::CollectionWrite,
        Kernel::StringCompare,
        Kernel::Hanoi,
    ];

    /// Position of this kernel in result and report vectors.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label used in the text report.
    pub fn label(&self) -> &'static str {
        match self {
            Kernel::Alloc => "alloc",
            Kernel::ArrayWrite => "array write",
            Kernel::DictionaryWrite => "dictionary write",
            Kernel::FloatMath => "float math",
            Kernel::IntegerMath => "integer math",
            Kernel::CollectionIterate => "collection iterate",
            Kernel::CollectionWrite => "collection write",
            Kernel::StringCompare => "string compare",
            Kernel::Hanoi => "hanoi",
        }
    }

    /// Stable machine name used in the JSON report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kernel::Alloc => "alloc",
            Kernel::ArrayWrite => "array_write",
            Kernel::DictionaryWrite => "dictionary_write",
            Kernel::FloatMath => "float_math",
            Kernel::IntegerMath => "integer_math",
            Kernel::CollectionIterate => "collection_iterate",
            Kernel::CollectionWrite => "collection_write",
            Kernel::StringCompare => "string_compare",
            Kernel::Hanoi => "hanoi",
        }
    }
}
