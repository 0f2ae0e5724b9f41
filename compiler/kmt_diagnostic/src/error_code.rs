use std::fmt;

/// Error codes for all kmt diagnostics.
///
/// Format: E#### where the first digit names the stage:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Binder (type) errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Source too large to address
    E0003,

    // Parser Errors (E1xxx)
    /// Expected statement
    E1001,
    /// Expected expression
    E1002,
    /// Missing delimiter or separator
    E1003,
    /// Expected identifier
    E1004,
    /// Expected string literal
    E1005,

    // Binder Errors (E2xxx)
    /// Undefined variable
    E2001,
    /// Operand is not a number
    E2002,
    /// Sequence bounds are not integers
    E2003,
    /// Combinator applied to a non-sequence
    E2004,
    /// Lambda or neutral element is not a number
    E2005,
    /// Reduce result does not match accumulator
    E2006,
    /// Numeric literal out of range
    E2007,

    // Runtime Errors (E6xxx)
    /// Sequence bounds are not integers
    E6001,
    /// Sequence start is greater than end
    E6002,
    /// Sequence range too large
    E6003,
    /// Sequence too large to materialize
    E6004,
    /// Value has the wrong shape
    E6005,
    /// Undefined variable at runtime
    E6006,
    /// Unsupported expression in numeric lambda
    E6007,
}

/// Pipeline stage that reports a family of codes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stage {
    Lexer,
    Parser,
    Binder,
    Runtime,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Lexer => "lexer",
            Stage::Parser => "parser",
            Stage::Binder => "binder",
            Stage::Runtime => "runtime",
        })
    }
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
        }
    }

    /// The stage that reports this code, read off its leading digit.
    pub fn stage(&self) -> Stage {
        match self.as_str().as_bytes()[1] {
            b'0' => Stage::Lexer,
            b'1' => Stage::Parser,
            b'2' => Stage::Binder,
            _ => Stage::Runtime,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
