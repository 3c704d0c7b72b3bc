/// A single monomial `coefficient · x^x_exp · y^y_exp`.
///
/// Terms are plain values: parsing creates them once and every derived
/// term (square roots, the expected middle term) is a new instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
  pub coefficient: f64,
  pub x_exp: u32,
  pub y_exp: u32,
}

impl Term {
  pub fn new(coefficient: f64, x_exp: u32, y_exp: u32) -> Self {
    Term {
      coefficient,
      x_exp,
      y_exp,
    }
  }

  pub fn constant(coefficient: f64) -> Self {
    Term::new(coefficient, 0, 0)
  }

  pub fn is_constant(&self) -> bool {
    self.x_exp == 0 && self.y_exp == 0
  }

  /// Square of the term: coefficient squared, exponents doubled.
  pub fn squared(&self) -> Self {
    Term::new(
      self.coefficient * self.coefficient,
      self.x_exp * 2,
      self.y_exp * 2,
    )
  }
}

impl std::fmt::Display for Term {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", term_to_string(self, false))
  }
}

/// Rounds to three decimals, with halves rounding up (`0.0625` → `0.063`,
/// `-0.0625` → `-0.062`).
pub fn round_coefficient(value: f64) -> f64 {
  let rounded = (value * 1000.0 + 0.5).floor() / 1000.0;
  // avoid printing "-0"
  if rounded == 0.0 {
    0.0
  } else {
    rounded
  }
}

/// Renders a number the way it appears in the narrative: three decimals at
/// most, no trailing `.0` for integral values.
pub fn format_number(value: f64) -> String {
  round_coefficient(value).to_string()
}

fn literal_part(term: &Term) -> String {
  let mut literal = String::new();
  for (marker, exp) in [('x', term.x_exp), ('y', term.y_exp)] {
    match exp {
      0 => {}
      1 => literal.push(marker),
      _ => {
        literal.push(marker);
        literal.push('^');
        literal.push_str(&exp.to_string());
      }
    }
  }
  literal
}

/// Renders a term for display.
///
/// With `show_sign` a non-negative coefficient gets a leading `+`; without
/// it only negative coefficients carry a sign. A coefficient of magnitude
/// one is elided in front of a literal part (`+x`, `-xy`, `y^2`).
pub fn term_to_string(term: &Term, show_sign: bool) -> String {
  let coefficient = round_coefficient(term.coefficient);

  if term.is_constant() {
    return if show_sign && coefficient >= 0.0 {
      format!("+{}", coefficient)
    } else {
      coefficient.to_string()
    };
  }

  let prefix = if coefficient == 1.0 {
    if show_sign { "+".to_string() } else { String::new() }
  } else if coefficient == -1.0 {
    "-".to_string()
  } else if show_sign && coefficient >= 0.0 {
    format!("+{}", coefficient)
  } else {
    coefficient.to_string()
  };

  prefix + &literal_part(term)
}

/// Joins terms into a sum. Only the first term is rendered without a
/// forced sign.
pub fn combine_terms(terms: &[Term]) -> String {
  terms
    .iter()
    .enumerate()
    .map(|(i, term)| term_to_string(term, i != 0))
    .collect()
}
