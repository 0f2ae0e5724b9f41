use super::*;

#[test]
fn merge_promotes_to_double() {
    use NumberType::{Double, Int};
    assert_eq!(Int.merge(Int), Int);
    assert_eq!(Int.merge(Double), Double);
    assert_eq!(Double.merge(Int), Double);
    assert_eq!(Double.merge(Double), Double);
}

#[test]
fn projections() {
    assert_eq!(Type::INT.as_number(), Some(NumberType::Int));
    assert_eq!(Type::INT.element(), None);
    let seq = Type::Sequence(NumberType::Double);
    assert_eq!(seq.as_number(), None);
    assert_eq!(seq.element(), Some(NumberType::Double));
}

#[test]
fn display() {
    assert_eq!(Type::DOUBLE.to_string(), "Double");
    assert_eq!(Type::Sequence(NumberType::Int).to_string(), "Sequence<Int>");
}
