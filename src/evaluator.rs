use log::{debug, info};
use thiserror::Error;

use crate::syntax::{Term, term_to_string};

/// Why a term has no exact square root.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotPerfectSquare {
  #[error("el coeficiente es negativo")]
  NegativeCoefficient,
  #[error("el coeficiente no es un cuadrado perfecto")]
  IrrationalRoot,
  #[error("algún exponente es impar")]
  OddExponent,
}

/// Principal square root of a term, or the reason it has none.
///
/// The root must be exact: a non-negative coefficient whose square root
/// is an integer, and even exponents on both variables.
pub fn square_root(term: &Term) -> Result<Term, NotPerfectSquare> {
  if term.coefficient < 0.0 {
    return Err(NotPerfectSquare::NegativeCoefficient);
  }
  let root = term.coefficient.abs().sqrt();
  if !root.is_finite() || root.fract() != 0.0 {
    return Err(NotPerfectSquare::IrrationalRoot);
  }
  if term.x_exp % 2 != 0 || term.y_exp % 2 != 0 {
    return Err(NotPerfectSquare::OddExponent);
  }
  Ok(Term::new(root, term.x_exp / 2, term.y_exp / 2))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
  Plus,
  Minus,
}

impl Sign {
  pub fn symbol(self) -> char {
    match self {
      Sign::Plus => '+',
      Sign::Minus => '-',
    }
  }
}

/// Which outer term of the ordered trinomial is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterTerm {
  First,
  Third,
}

impl OuterTerm {
  pub fn label(self) -> &'static str {
    match self {
      OuterTerm::First => "Primer término",
      OuterTerm::Third => "Tercer término",
    }
  }
}

/// One block of the step-by-step explanation.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
  /// Terms sorted by descending power of `x`.
  Reorder { terms: [Term; 3] },
  /// An outer term failed the square-root test; nothing follows.
  OuterTermNotSquare {
    which: OuterTerm,
    term: Term,
    reason: NotPerfectSquare,
  },
  /// Derivation of the roots of both outer terms.
  SquareRoots {
    first: Term,
    first_root: Term,
    third: Term,
    third_root: Term,
  },
  /// `±2·√A·√C` next to the middle term actually given.
  MiddleTermCheck {
    first_root: Term,
    third_root: Term,
    expected: Term,
    actual: Term,
  },
  Verified {
    middle: Term,
    sign: Sign,
    first_root: Term,
    third_root: Term,
  },
  Factorization {
    terms: [Term; 3],
    first_root: Term,
    third_root: Term,
    sign: Sign,
  },
  Mismatch {
    actual: Term,
    first_root: Term,
    third_root: Term,
  },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
  PerfectSquare {
    first_root: Term,
    third_root: Term,
    sign: Sign,
  },
  OuterTermNotSquare {
    which: OuterTerm,
    reason: NotPerfectSquare,
  },
  MiddleTermMismatch {
    expected: Term,
    actual: Term,
  },
}

/// Result of checking one trinomial: the ordered terms, the narrative and
/// the verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
  pub terms: [Term; 3],
  pub steps: Vec<Step>,
  pub outcome: Outcome,
}

impl Analysis {
  pub fn is_perfect_square(&self) -> bool {
    matches!(self.outcome, Outcome::PerfectSquare { .. })
  }

  /// `(√A ± √C)^2` when the trinomial is a perfect square.
  pub fn factorization(&self) -> Option<String> {
    match self.outcome {
      Outcome::PerfectSquare {
        first_root,
        third_root,
        sign,
      } => Some(binomial_square(&first_root, &third_root, sign)),
      _ => None,
    }
  }
}

pub fn binomial(first_root: &Term, third_root: &Term, sign: Sign) -> String {
  format!(
    "{} {} {}",
    term_to_string(first_root, false),
    sign.symbol(),
    term_to_string(third_root, false)
  )
}

pub fn binomial_square(
  first_root: &Term,
  third_root: &Term,
  sign: Sign,
) -> String {
  format!("({})^2", binomial(first_root, third_root, sign))
}

/// The middle term a perfect square with these roots must have, `2·a·b`,
/// with a positive sign.
pub fn expected_middle(first_root: &Term, third_root: &Term) -> Term {
  Term::new(
    2.0 * first_root.coefficient * third_root.coefficient,
    first_root.x_exp + third_root.x_exp,
    first_root.y_exp + third_root.y_exp,
  )
}

/// Sign of the actual middle coefficient relative to the expected one,
/// compared exactly. A zero expected coefficient matches both signs and
/// yields `Minus`.
pub fn middle_sign(actual: &Term, expected: &Term) -> Option<Sign> {
  if actual.coefficient == -expected.coefficient {
    Some(Sign::Minus)
  } else if actual.coefficient == expected.coefficient {
    Some(Sign::Plus)
  } else {
    None
  }
}

/// Checks already ordered terms `[A, B, C]` against `a² ± 2ab + b²`.
pub fn analyze_terms(terms: [Term; 3]) -> Analysis {
  let [first, middle, third] = terms;
  let mut steps = vec![Step::Reorder { terms }];

  let roots = square_root(&first)
    .map_err(|reason| (OuterTerm::First, first, reason))
    .and_then(|first_root| {
      square_root(&third)
        .map(|third_root| (first_root, third_root))
        .map_err(|reason| (OuterTerm::Third, third, reason))
    });

  let (first_root, third_root) = match roots {
    Ok(roots) => roots,
    Err((which, term, reason)) => {
      info!("{} {term} is not a perfect square: {reason}", which.label());
      steps.push(Step::OuterTermNotSquare {
        which,
        term,
        reason,
      });
      return Analysis {
        terms,
        steps,
        outcome: Outcome::OuterTermNotSquare { which, reason },
      };
    }
  };

  steps.push(Step::SquareRoots {
    first,
    first_root,
    third,
    third_root,
  });

  let expected = expected_middle(&first_root, &third_root);
  debug!("expected middle term ±{expected:?}, got {middle:?}");
  steps.push(Step::MiddleTermCheck {
    first_root,
    third_root,
    expected,
    actual: middle,
  });

  let sign = middle_sign(&middle, &expected).filter(|_| {
    middle.x_exp == expected.x_exp && middle.y_exp == expected.y_exp
  });

  let outcome = match sign {
    Some(sign) => {
      steps.push(Step::Verified {
        middle,
        sign,
        first_root,
        third_root,
      });
      steps.push(Step::Factorization {
        terms,
        first_root,
        third_root,
        sign,
      });
      Outcome::PerfectSquare {
        first_root,
        third_root,
        sign,
      }
    }
    None => {
      steps.push(Step::Mismatch {
        actual: middle,
        first_root,
        third_root,
      });
      Outcome::MiddleTermMismatch {
        expected,
        actual: middle,
      }
    }
  };

  info!(
    "trinomial {} is {}a perfect square",
    crate::syntax::combine_terms(&terms),
    if sign.is_some() { "" } else { "not " }
  );

  Analysis {
    terms,
    steps,
    outcome,
  }
}
