use super::*;

#[test]
fn halves_exponents_and_roots_coefficient() {
  assert_eq!(
    square_root(&Term::new(16.0, 6, 0)).unwrap(),
    Term::new(4.0, 3, 0)
  );
  assert_eq!(
    square_root(&Term::new(9.0, 0, 22)).unwrap(),
    Term::new(3.0, 0, 11)
  );
  assert_eq!(
    square_root(&Term::constant(1.0)).unwrap(),
    Term::constant(1.0)
  );
}

#[test]
fn squaring_the_root_gives_the_term_back() {
  for term in [
    Term::new(36.0, 4, 2),
    Term::new(1.0, 0, 0),
    Term::new(144.0, 10, 8),
    Term::new(0.0, 2, 2),
  ] {
    assert_eq!(square_root(&term).unwrap().squared(), term);
  }
}

#[test]
fn rejects_negative_coefficient() {
  assert_eq!(
    square_root(&Term::new(-4.0, 2, 0)),
    Err(NotPerfectSquare::NegativeCoefficient)
  );
}

#[test]
fn rejects_non_square_coefficient() {
  assert_eq!(
    square_root(&Term::new(8.0, 2, 0)),
    Err(NotPerfectSquare::IrrationalRoot)
  );
  assert_eq!(
    square_root(&Term::new(2.25, 2, 0)),
    Err(NotPerfectSquare::IrrationalRoot)
  );
}

#[test]
fn rejects_odd_exponents() {
  assert_eq!(
    square_root(&Term::new(4.0, 3, 0)),
    Err(NotPerfectSquare::OddExponent)
  );
  assert_eq!(
    square_root(&Term::new(4.0, 2, 1)),
    Err(NotPerfectSquare::OddExponent)
  );
}
