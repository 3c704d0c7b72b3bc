use log::debug;
use pest_derive::Parser;
use thiserror::Error;

pub mod evaluator;
pub mod parser;
pub mod render;
pub mod syntax;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use evaluator::{Analysis, NotPerfectSquare, Outcome, Sign, Step};
pub use syntax::Term;

#[derive(Parser)]
#[grammar = "term.pest"]
pub struct TermParser;

#[derive(Error, Debug)]
pub enum TrinomialError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Expected {expected} terms, found {found}")]
  TermCount { expected: usize, found: usize },
}

/// Options for one factorization request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorOptions {
  /// Reject terms containing text the grammar does not recognize instead
  /// of silently dropping it.
  pub strict: bool,
}

/// Removes all whitespace, so `"x^2 + 2xy + y^2"` becomes `"x^2+2xy+y^2"`.
pub fn clean_input(input: &str) -> String {
  input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Splits, parses and orders the input, then checks whether it is a
/// perfect-square trinomial.
///
/// A wrong number of terms (and in strict mode a malformed term) is an
/// error; a trinomial that simply does not factor is an `Ok` analysis
/// with a negative outcome.
pub fn analyze(
  input: &str,
  options: &FactorOptions,
) -> Result<Analysis, TrinomialError> {
  let poly = clean_input(input);
  let pieces = parser::split_terms(&poly);
  debug!("split {poly:?} into {pieces:?}");

  if pieces.len() != 3 {
    return Err(TrinomialError::TermCount {
      expected: 3,
      found: pieces.len(),
    });
  }

  let mut terms = [Term::constant(0.0); 3];
  for (slot, piece) in terms.iter_mut().zip(&pieces) {
    *slot = if options.strict {
      parser::parse_term_strict(piece)?
    } else {
      parser::parse_term(piece)
    };
  }
  parser::order_by_first_variable(&mut terms);

  Ok(evaluator::analyze_terms(terms))
}

/// Step-by-step explanation as an HTML fragment.
///
/// Never fails: a wrong number of terms yields a single paragraph saying
/// how many were found.
///
/// ```
/// let html = trinomial::factor_trinomial_step_by_step("x^2+2xy+y^2");
/// assert!(html.contains("(x + y)^2"));
/// ```
pub fn factor_trinomial_step_by_step(input: &str) -> String {
  factor_trinomial_with(input, &FactorOptions::default())
}

pub fn factor_trinomial_with(input: &str, options: &FactorOptions) -> String {
  match analyze(input, options) {
    Ok(analysis) => render::to_html(&analysis),
    Err(TrinomialError::TermCount { found, .. }) => {
      format!("<p>{}</p>", render::term_count_message(found))
    }
    Err(TrinomialError::ParseError(error)) => {
      format!("<p>{}</p>", render::parse_error_message(&error))
    }
  }
}
