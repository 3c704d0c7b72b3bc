use log::{debug, warn};
use pest::Parser;
use pest::iterators::Pair;

use crate::syntax::Term;
use crate::{Rule, TermParser, TrinomialError};

/// Splits a whitespace-free polynomial into signed terms.
///
/// A new term starts at every `+` or `-` except the first character and
/// a sign directly following `^`. Concatenating the pieces gives back the
/// input.
///
/// ```
/// assert_eq!(
///   trinomial::parser::split_terms("16x^2+9y^2-24xy"),
///   vec!["16x^2", "+9y^2", "-24xy"]
/// );
/// ```
pub fn split_terms(poly: &str) -> Vec<&str> {
  if poly.is_empty() {
    return Vec::new();
  }

  let mut terms = Vec::new();
  let mut start = 0;
  let mut prev: Option<char> = None;
  for (i, c) in poly.char_indices() {
    if (c == '+' || c == '-') && i != 0 && prev != Some('^') {
      terms.push(&poly[start..i]);
      start = i;
    }
    prev = Some(c);
  }
  terms.push(&poly[start..]);
  terms
}

/// Consumes `[+-]?\d+(\.\d+)?` at the start of `input`, returning the byte
/// length of the signed number, or 0 when there are no digits.
fn number_prefix_len(input: &str) -> usize {
  let bytes = input.as_bytes();
  let mut pos = 0;
  if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
    pos += 1;
  }
  let digits_start = pos;
  while pos < bytes.len() && bytes[pos].is_ascii_digit() {
    pos += 1;
  }
  if pos == digits_start {
    return 0;
  }
  if pos + 1 < bytes.len()
    && bytes[pos] == b'.'
    && bytes[pos + 1].is_ascii_digit()
  {
    pos += 1;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
      pos += 1;
    }
  }
  pos
}

fn parse_exponent(digits: &str) -> u32 {
  digits.parse::<u32>().unwrap_or_else(|_| {
    warn!("exponent {digits} does not fit in 32 bits, clamping");
    u32::MAX
  })
}

/// Finds the first `marker` in `remainder`, removes it together with an
/// optional `^<digits>` suffix and returns the exponent it denotes.
fn take_variable(remainder: &mut String, marker: char) -> u32 {
  let Some(start) = remainder.find(marker) else {
    return 0;
  };

  let after = start + marker.len_utf8();
  let rest = &remainder[after..];
  let digit_len = rest
    .strip_prefix('^')
    .map(|s| s.bytes().take_while(u8::is_ascii_digit).count())
    .unwrap_or(0);

  let (exp, end) = if digit_len > 0 {
    (parse_exponent(&rest[1..1 + digit_len]), after + 1 + digit_len)
  } else {
    (1, after)
  };

  remainder.replace_range(start..end, "");
  exp
}

/// Parses one signed term such as `-24x^3y^11`, `+y^2` or `9`.
///
/// The scan is permissive: a missing coefficient means `1` (`-1` after a
/// lone minus), each variable is looked up anywhere in what is left after
/// the coefficient, and text that matches nothing is dropped with a
/// warning. Use [`parse_term_strict`] to reject such input instead.
pub fn parse_term(term: &str) -> Term {
  let number_len = number_prefix_len(term);
  let (coefficient, rest) = if number_len > 0 {
    let coefficient = term[..number_len].parse::<f64>().unwrap_or(1.0);
    (coefficient, &term[number_len..])
  } else if let Some(rest) = term.strip_prefix('-') {
    (-1.0, rest)
  } else {
    (1.0, term.strip_prefix('+').unwrap_or(term))
  };

  let mut remainder = rest.to_string();
  let x_exp = take_variable(&mut remainder, 'x');
  let y_exp = take_variable(&mut remainder, 'y');

  if !remainder.is_empty() {
    warn!("ignoring unrecognized text {remainder:?} in term {term:?}");
  }

  let parsed = Term::new(coefficient, x_exp, y_exp);
  debug!("parsed {term:?} as {parsed:?}");
  parsed
}

fn exponent_of(pair: Pair<Rule>) -> u32 {
  pair
    .into_inner()
    .next()
    .map(|exp| parse_exponent(exp.as_str()))
    .unwrap_or(1)
}

/// Parses one term against the `Term` grammar, failing on anything that
/// is not a sign, a number and at most one `x` and one `y` factor.
pub fn parse_term_strict(term: &str) -> Result<Term, TrinomialError> {
  let pairs = TermParser::parse(Rule::Term, term).map_err(Box::new)?;

  let mut negative = false;
  let mut magnitude = None;
  let mut x_exp = 0;
  let mut y_exp = 0;

  for inner in pairs.flat_map(|pair| pair.into_inner()) {
    match inner.as_rule() {
      Rule::sign => negative = inner.as_str() == "-",
      // the grammar only admits digits with an optional fraction
      Rule::number => magnitude = inner.as_str().parse::<f64>().ok(),
      Rule::x_power => x_exp = exponent_of(inner),
      Rule::y_power => y_exp = exponent_of(inner),
      _ => {}
    }
  }

  let coefficient = magnitude.unwrap_or(1.0);
  let coefficient = if negative { -coefficient } else { coefficient };
  Ok(Term::new(coefficient, x_exp, y_exp))
}

/// Orders terms by descending exponent of `x`. The sort is stable, so
/// terms with the same `x` exponent keep their relative order.
pub fn order_by_first_variable(terms: &mut [Term]) {
  terms.sort_by_key(|term| std::cmp::Reverse(term.x_exp));
}
