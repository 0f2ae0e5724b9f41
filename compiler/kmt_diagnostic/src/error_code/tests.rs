use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2001.as_str(), "E2001");
    assert_eq!(ErrorCode::E6004.as_str(), "E6004");
}

#[test]
fn test_stage_from_leading_digit() {
    assert_eq!(ErrorCode::E0001.stage(), Stage::Lexer);
    assert_eq!(ErrorCode::E0003.stage(), Stage::Lexer);
    assert_eq!(ErrorCode::E1003.stage(), Stage::Parser);
    assert_eq!(ErrorCode::E2007.stage(), Stage::Binder);
    assert_eq!(ErrorCode::E6001.stage(), Stage::Runtime);
    assert_eq!(ErrorCode::E6007.stage(), Stage::Runtime);
}

#[test]
fn test_stage_display() {
    assert_eq!(Stage::Binder.to_string(), "binder");
    assert_eq!(Stage::Runtime.to_string(), "runtime");
}
