// ============================================================================
// Roman Symbols
// The seven canonical Roman letters and their values
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canonical symbol table, smallest value first.
pub const SYMBOL_TABLE: [(char, u16); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

/// One of the seven canonical Roman numeral letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    /// All symbols in ascending value order
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// Numeric value of the symbol.
    #[inline]
    pub const fn value(self) -> u16 {
        SYMBOL_TABLE[self as usize].1
    }

    /// The upper-case letter for this symbol.
    #[inline]
    pub const fn as_char(self) -> char {
        SYMBOL_TABLE[self as usize].0
    }

    /// Look up a symbol by letter. Only upper-case letters are canonical.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.as_char()
    }
}
