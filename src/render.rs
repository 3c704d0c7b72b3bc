//! Renderers for an [`Analysis`]: the HTML fragment shown on the page
//! (inline math in `\( \)`, display math in `\[ \]`), plain text for the
//! terminal, and JSON.

use pest::error::{Error, LineColLocation};
use serde_json::{Value, json};

use crate::evaluator::{
  Analysis, Outcome, Sign, Step, binomial, binomial_square,
};
use crate::Rule;
use crate::syntax::{Term, combine_terms, format_number, term_to_string};

const NOT_SQUARE_MESSAGE: &str = "Alguno de los términos extremos no es un cuadrado perfecto (numérico o literal). No se puede factorizar como trinomio cuadrado perfecto.";

/// Message for an input that does not split into three terms.
pub fn term_count_message(found: usize) -> String {
  format!(
    "El polinomio debe tener 3 términos para ser un trinomio cuadrado perfecto. Se encontraron {found} término(s)."
  )
}

/// Message for a term the strict grammar rejects. Only the column is
/// reported; the rejected text never reaches the markup.
pub fn parse_error_message(error: &Error<Rule>) -> String {
  let (_, column) = match error.line_col {
    LineColLocation::Pos(pos) => pos,
    LineColLocation::Span(start, _) => start,
  };
  format!(
    "Uno de los términos no es válido: carácter inesperado en la columna {column} del término."
  )
}

/// `4x^{3}`: the root with its exponents spelled out for the derivation.
fn root_with_exponents(root: &Term) -> String {
  let mut out = format_number(root.coefficient);
  if root.x_exp > 0 {
    out.push_str(&format!("x^{{{}}}", root.x_exp));
  }
  if root.y_exp > 0 {
    out.push_str(&format!("y^{{{}}}", root.y_exp));
  }
  out
}

fn html_root_derivation(
  label: &str,
  connective: &str,
  term: &Term,
  root: &Term,
) -> String {
  let radicand = term_to_string(term, false);
  let coefficient = format_number(term.coefficient);
  format!(
    r"
      <p>
        <em>{label}:</em> \({signed}\).<br>
        Aplicamos:
        \[
          \sqrt{{{radicand}}}
          = \sqrt{{{coefficient}}}\,\sqrt{{x^{{{x}}}}}\,\sqrt{{y^{{{y}}}}}
        \]
        {connective} \(\sqrt{{{coefficient}}} = {root_coefficient}\), \(\sqrt{{x^{{{x}}}}} = x^{{{half_x}}}\) y \(\sqrt{{y^{{{y}}}}} = y^{{{half_y}}}\),<br>
        obtenemos: \(\sqrt{{{radicand}}} = {root}\).
      </p>
",
    signed = term_to_string(term, true),
    x = term.x_exp,
    y = term.y_exp,
    root_coefficient = format_number(root.coefficient),
    half_x = root.x_exp,
    half_y = root.y_exp,
    root = root_with_exponents(root),
  )
}

fn html_step(step: &Step) -> String {
  match step {
    Step::Reorder { terms } => format!(
      r"
      <p><strong>Paso 1: Ordenar el polinomio</strong><br>
      Ordenamos los términos de manera descendente respecto a la variable <em>x</em>.<br>
      Polinomio reordenado: \[
        {}
      \]
      </p>
",
      combine_terms(terms)
    ),
    Step::OuterTermNotSquare {
      which,
      term,
      reason,
    } => format!(
      r"<p>{NOT_SQUARE_MESSAGE}<br>
      <em>{}:</em> \({}\): {reason}.</p>
",
      which.label(),
      term_to_string(term, true)
    ),
    Step::SquareRoots {
      first,
      first_root,
      third,
      third_root,
    } => format!(
      "
      <p><strong>Paso 2: Calcular las raíces cuadradas de los términos extremos</strong></p>{}{}",
      html_root_derivation("Primer término", "Como", first, first_root),
      html_root_derivation("Tercer término", "Dado que", third, third_root)
    ),
    Step::MiddleTermCheck {
      first_root,
      third_root,
      expected,
      actual,
    } => format!(
      r"
      <p><strong>Paso 3: Verificar el término central</strong><br>
        El término central esperado es:<br>
        \[
          \pm 2\cdot \left({}\right) \cdot \left({}\right)
          = \pm {}
        \]
        Término central ingresado: \({}\).
      </p>
",
      term_to_string(first_root, false),
      term_to_string(third_root, false),
      term_to_string(expected, false),
      term_to_string(actual, true)
    ),
    Step::Verified {
      middle,
      sign,
      first_root,
      third_root,
    } => format!(
      r"
      <p>
        Se cumple que el 2do término \({}\) es igual a \({}2 \cdot {} \cdot {}\).<br>
        Por lo tanto, el trinomio es un <strong>cuadrado perfecto</strong>.
      </p>
",
      term_to_string(middle, true),
      sign.symbol(),
      term_to_string(first_root, false),
      term_to_string(third_root, false)
    ),
    Step::Factorization {
      terms,
      first_root,
      third_root,
      sign,
    } => format!(
      r"
      <p><strong>Paso 4: Escribir la factorización final</strong><br>
        Se tiene que:<br>
        \[
          {}
          = {}
        \]
        <br>
        Es decir, al expresar el trinomio en términos de las raíces de sus extremos, obtenemos que el polinomio es el cuadrado del binomio \({}\).
      </p>
",
      combine_terms(terms),
      binomial_square(first_root, third_root, *sign),
      binomial(first_root, third_root, *sign)
    ),
    Step::Mismatch {
      actual,
      first_root,
      third_root,
    } => format!(
      r"
      <p>
        El término central ingresado \({}\) no coincide con el esperado \(\pm 2\cdot {} \cdot {}\).<br>
        Por lo tanto, <strong>no</strong> se puede factorizar el trinomio como un cuadrado perfecto.
      </p>
",
      term_to_string(actual, true),
      term_to_string(first_root, false),
      term_to_string(third_root, false)
    ),
  }
}

/// HTML fragment with one `<p>` block per step.
pub fn to_html(analysis: &Analysis) -> String {
  analysis.steps.iter().map(html_step).collect()
}

fn text_step(step: &Step) -> Vec<String> {
  match step {
    Step::Reorder { terms } => vec![
      "Paso 1: Ordenar el polinomio".to_string(),
      format!("  Polinomio reordenado: {}", combine_terms(terms)),
    ],
    Step::OuterTermNotSquare {
      which,
      term,
      reason,
    } => vec![
      NOT_SQUARE_MESSAGE.to_string(),
      format!(
        "  {}: {}: {reason}.",
        which.label(),
        term_to_string(term, true)
      ),
    ],
    Step::SquareRoots {
      first,
      first_root,
      third,
      third_root,
    } => vec![
      "Paso 2: Calcular las raíces cuadradas de los términos extremos"
        .to_string(),
      format!("  Primer término: √({first}) = {first_root}"),
      format!("  Tercer término: √({third}) = {third_root}"),
    ],
    Step::MiddleTermCheck {
      first_root,
      third_root,
      expected,
      actual,
    } => vec![
      "Paso 3: Verificar el término central".to_string(),
      format!("  Esperado: ±2·({first_root})·({third_root}) = ±{expected}"),
      format!("  Ingresado: {}", term_to_string(actual, true)),
    ],
    Step::Verified {
      middle,
      sign,
      first_root,
      third_root,
    } => vec![format!(
      "  {} = {}2·({first_root})·({third_root}): el trinomio es un cuadrado perfecto.",
      term_to_string(middle, true),
      sign.symbol()
    )],
    Step::Factorization {
      terms,
      first_root,
      third_root,
      sign,
    } => vec![
      "Paso 4: Escribir la factorización final".to_string(),
      format!(
        "  {} = {}",
        combine_terms(terms),
        binomial_square(first_root, third_root, *sign)
      ),
    ],
    Step::Mismatch {
      actual,
      first_root,
      third_root,
    } => vec![format!(
      "  {} no coincide con ±2·({first_root})·({third_root}): no se puede factorizar como cuadrado perfecto.",
      term_to_string(actual, true)
    )],
  }
}

/// Plain-text narrative, one line per statement.
pub fn to_text(analysis: &Analysis) -> String {
  let mut lines: Vec<String> =
    analysis.steps.iter().flat_map(text_step).collect();
  lines.push(String::new());
  lines.join("\n")
}

fn term_json(term: &Term) -> Value {
  json!({
    "coefficient": term.coefficient,
    "x_exp": term.x_exp,
    "y_exp": term.y_exp,
    "display": term_to_string(term, false),
  })
}

fn sign_json(sign: Sign) -> Value {
  json!(sign.symbol().to_string())
}

pub fn to_json(analysis: &Analysis) -> Value {
  let outcome = match &analysis.outcome {
    Outcome::PerfectSquare {
      first_root,
      third_root,
      sign,
    } => json!({
      "kind": "perfect_square",
      "first_root": term_json(first_root),
      "third_root": term_json(third_root),
      "sign": sign_json(*sign),
    }),
    Outcome::OuterTermNotSquare { which, reason } => json!({
      "kind": "outer_term_not_square",
      "term": which.label(),
      "reason": reason.to_string(),
    }),
    Outcome::MiddleTermMismatch { expected, actual } => json!({
      "kind": "middle_term_mismatch",
      "expected": term_json(expected),
      "actual": term_json(actual),
    }),
  };

  json!({
    "terms": analysis.terms.iter().map(term_json).collect::<Vec<_>>(),
    "perfect_square": analysis.is_perfect_square(),
    "factorization": analysis.factorization(),
    "outcome": outcome,
  })
}
