use wasm_bindgen::prelude::*;

use crate::{FactorOptions, factor_trinomial_with};

/// Step-by-step HTML for the page. The caller inserts it into the DOM and
/// asks MathJax to typeset it again.
#[wasm_bindgen(js_name = factorTrinomialStepByStep)]
pub fn factor_trinomial_step_by_step(input: &str) -> String {
  crate::factor_trinomial_step_by_step(input)
}

/// Same as `factorTrinomialStepByStep`, rejecting malformed terms.
#[wasm_bindgen(js_name = factorTrinomialStrict)]
pub fn factor_trinomial_strict(input: &str) -> String {
  factor_trinomial_with(input, &FactorOptions { strict: true })
}
