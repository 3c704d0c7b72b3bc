use super::*;

fn analyze_default(input: &str) -> trinomial::Analysis {
  analyze(input, &FactorOptions::default()).unwrap()
}

mod perfect_squares {
  use super::*;

  #[test]
  fn mixed_high_exponents() {
    let analysis = analyze_default("16x^6+9y^22-24x^3y^11");
    assert_eq!(
      analysis.terms,
      [
        Term::new(16.0, 6, 0),
        Term::new(-24.0, 3, 11),
        Term::new(9.0, 0, 22),
      ]
    );
    assert_eq!(
      analysis.outcome,
      Outcome::PerfectSquare {
        first_root: Term::new(4.0, 3, 0),
        third_root: Term::new(3.0, 0, 11),
        sign: Sign::Minus,
      }
    );
    assert_eq!(
      analysis.factorization().as_deref(),
      Some("(4x^3 - 3y^11)^2")
    );
  }

  #[test]
  fn unit_coefficients() {
    let analysis = analyze_default("x^2+2xy+y^2");
    assert!(analysis.is_perfect_square());
    assert_eq!(analysis.factorization().as_deref(), Some("(x + y)^2"));
  }

  #[test]
  fn negative_middle_term() {
    assert_eq!(
      analyze_default("x^2-2xy+y^2").factorization().as_deref(),
      Some("(x - y)^2")
    );
  }

  #[test]
  fn constant_outer_term() {
    assert_eq!(
      analyze_default("4x^2+12x+9").factorization().as_deref(),
      Some("(2x + 3)^2")
    );
  }

  #[test]
  fn input_out_of_order_with_spaces() {
    assert_eq!(
      analyze_default(" y^2 + 2xy + x^2 ").factorization().as_deref(),
      Some("(x + y)^2")
    );
  }

  #[test]
  fn narrative_has_all_steps() {
    let analysis = analyze_default("x^2+2xy+y^2");
    assert_eq!(analysis.steps.len(), 5);
    assert!(matches!(analysis.steps[0], Step::Reorder { .. }));
    assert!(matches!(analysis.steps[1], Step::SquareRoots { .. }));
    assert!(matches!(analysis.steps[2], Step::MiddleTermCheck { .. }));
    assert!(matches!(
      analysis.steps[3],
      Step::Verified {
        sign: Sign::Plus,
        ..
      }
    ));
    assert!(matches!(analysis.steps[4], Step::Factorization { .. }));
  }
}

mod not_factorable {
  use super::*;

  #[test]
  fn middle_coefficient_mismatch() {
    let analysis = analyze_default("x^2+3xy+y^2");
    assert!(!analysis.is_perfect_square());
    assert_eq!(analysis.factorization(), None);
    assert_eq!(
      analysis.outcome,
      Outcome::MiddleTermMismatch {
        expected: Term::new(2.0, 1, 1),
        actual: Term::new(3.0, 1, 1),
      }
    );
    assert!(matches!(analysis.steps.last(), Some(Step::Mismatch { .. })));
  }

  #[test]
  fn middle_exponent_mismatch() {
    let analysis = analyze_default("x^4+2xy+y^2");
    assert_eq!(
      analysis.outcome,
      Outcome::MiddleTermMismatch {
        expected: Term::new(2.0, 2, 1),
        actual: Term::new(2.0, 1, 1),
      }
    );
  }

  #[test]
  fn negative_outer_term() {
    let analysis = analyze_default("-4x^2+4xy-y^2");
    assert_eq!(
      analysis.outcome,
      Outcome::OuterTermNotSquare {
        which: OuterTerm::First,
        reason: NotPerfectSquare::NegativeCoefficient,
      }
    );
    assert_eq!(analysis.steps.len(), 2);
    assert_eq!(analysis.factorization(), None);
  }

  #[test]
  fn zero_expected_middle_term_takes_minus() {
    let analysis = analyze_default("0x^2+0xy+y^2");
    assert_eq!(
      analysis.outcome,
      Outcome::PerfectSquare {
        first_root: Term::new(0.0, 1, 0),
        third_root: Term::new(1.0, 0, 1),
        sign: Sign::Minus,
      }
    );
    assert_eq!(analysis.factorization().as_deref(), Some("(0x - y)^2"));
  }

  #[test]
  fn third_term_not_square() {
    let analysis = analyze_default("x^2+2xy+y^3");
    assert_eq!(
      analysis.outcome,
      Outcome::OuterTermNotSquare {
        which: OuterTerm::Third,
        reason: NotPerfectSquare::OddExponent,
      }
    );
  }
}

mod structural_errors {
  use super::*;

  #[test]
  fn two_terms() {
    assert!(matches!(
      analyze("x+y", &FactorOptions::default()),
      Err(TrinomialError::TermCount {
        expected: 3,
        found: 2
      })
    ));
  }

  #[test]
  fn four_terms() {
    assert!(matches!(
      analyze("x^2+2xy+y^2+1", &FactorOptions::default()),
      Err(TrinomialError::TermCount { found: 4, .. })
    ));
  }

  #[test]
  fn empty_input() {
    assert!(matches!(
      analyze("   ", &FactorOptions::default()),
      Err(TrinomialError::TermCount { found: 0, .. })
    ));
  }

  #[test]
  fn strict_mode_rejects_unknown_variables() {
    let options = FactorOptions { strict: true };
    assert!(matches!(
      analyze("x^2+2xyz+y^2", &options),
      Err(TrinomialError::ParseError(_))
    ));
    // the permissive scanner drops the z
    assert_eq!(
      analyze_default("x^2+2xyz+y^2").factorization().as_deref(),
      Some("(x + y)^2")
    );
  }
}
