use crate::polynomial::Polynomial;
use crate::syntax::Expr;
use crate::{SimplifyError, TraceStep};

/// Reduce a statement tree to its collected polynomial. Groups are reduced
/// bottom-up, so the recorded trace lists innermost groups first, in the
/// order a fixed-point scan over the text would resolve them.
pub fn reduce(
  statement: &Expr,
  steps: &mut Vec<TraceStep>,
) -> Result<Polynomial, SimplifyError> {
  reduce_expr(statement, steps, 0)
}

fn reduce_expr(
  expr: &Expr,
  steps: &mut Vec<TraceStep>,
  depth: usize,
) -> Result<Polynomial, SimplifyError> {
  match expr {
    Expr::Constant(value) => Ok(Polynomial::constant(*value)),
    Expr::Variable(letter) => Ok(Polynomial::variable(*letter)),
    Expr::Scaled { factor, inner } => {
      let mut poly = reduce_expr(inner, steps, depth)?;
      poly.scale(*factor)?;
      Ok(poly)
    }
    Expr::Sum(elements) => {
      let mut poly = Polynomial::new();
      for element in elements {
        poly.add(reduce_expr(element, steps, depth)?)?;
      }
      Ok(poly)
    }
    Expr::Group {
      factor,
      body,
      suffix,
    } => {
      let collected = reduce_expr(body, steps, depth + 1)?;
      let mut poly = collected.clone();
      poly.scale(*factor)?;
      if let Some(letter) = suffix {
        poly.multiply_by_variable(*letter);
      }
      steps.push(TraceStep {
        depth: depth + 1,
        source: group_source(*factor, &collected, *suffix),
        coefficients: collected,
        reduced: poly.to_string(),
      });
      Ok(poly)
    }
  }
}

// The group as it looked at reduction time: multiplier, the already
// flattened body, suffix.
fn group_source(
  factor: i64,
  body: &Polynomial,
  suffix: Option<char>,
) -> String {
  let multiplier = match factor {
    1 => String::new(),
    -1 => "-".to_string(),
    other => other.to_string(),
  };
  let suffix = suffix.map(String::from).unwrap_or_default();
  format!("{multiplier}({body}){suffix}")
}
