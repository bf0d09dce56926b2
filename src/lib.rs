use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod evaluator;
pub mod polynomial;
pub mod syntax;

use polynomial::Polynomial;

#[derive(Parser)]
#[grammar = "polynomial.pest"]
pub struct PolynomialParser;

/// Deepest group nesting accepted before reduction is refused.
pub const MAX_GROUP_DEPTH: usize = 64;

impl PolynomialParser {
  pub fn parse_program(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  PolynomialParser::parse_program(input)
}

#[derive(Error, Debug)]
pub enum SimplifyError {
  #[error("Parse error: {0}")]
  Parse(#[from] Box<pest::error::Error<Rule>>),
  #[error("Unbalanced parenthesis at byte {position}")]
  UnbalancedParenthesis { position: usize },
  #[error("Groups nest deeper than {} levels", MAX_GROUP_DEPTH)]
  TooDeeplyNested,
  #[error("Integer literal does not fit a 64-bit coefficient: {0}")]
  IntegerTooLarge(String),
  #[error("Coefficient overflow while collecting terms")]
  CoefficientOverflow,
}

/// One group reduction, recorded innermost-first.
#[derive(Debug, Clone)]
pub struct TraceStep {
  /// Nesting depth of the reduced group; outermost groups are depth 1.
  pub depth: usize,
  /// The group as it looked when it was reduced, body already flattened.
  pub source: String,
  /// Collected coefficients of the body, before the multiplier is applied.
  pub coefficients: Polynomial,
  /// The flattened replacement text.
  pub reduced: String,
}

/// Result of [`simplify_with_trace`]: the flattened statement together with
/// the reduction steps that produced it.
#[derive(Debug, Clone)]
pub struct SimplifyResult {
  pub result: String,
  /// Maximum group nesting depth of the statement.
  pub depth: usize,
  pub steps: Vec<TraceStep>,
}

/// Split raw source into compact statements: space characters are dropped
/// and each run of line break characters separates two statements.
pub fn split_statements(source: &str) -> Vec<String> {
  let mut statements = Vec::new();
  let mut current = String::new();
  let mut in_break = false;
  for ch in source.chars() {
    match ch {
      '\r' | '\n' => {
        if !in_break {
          statements.push(std::mem::take(&mut current));
          in_break = true;
        }
      }
      ' ' => {}
      _ => {
        in_break = false;
        current.push(ch);
      }
    }
  }
  statements.push(current);
  statements
}

/// Reject unbalanced parentheses and absurd nesting before parsing. Parser
/// and evaluator both recurse per nesting level, so statements must pass
/// this scan first.
fn check_parentheses(statement: &str) -> Result<(), SimplifyError> {
  let mut depth: usize = 0;
  for (position, ch) in statement.char_indices() {
    match ch {
      '(' => {
        depth += 1;
        if depth > MAX_GROUP_DEPTH {
          return Err(SimplifyError::TooDeeplyNested);
        }
      }
      ')' => {
        depth = depth
          .checked_sub(1)
          .ok_or(SimplifyError::UnbalancedParenthesis { position })?;
      }
      _ => {}
    }
  }
  if depth > 0 {
    return Err(SimplifyError::UnbalancedParenthesis {
      position: statement.len(),
    });
  }
  Ok(())
}

/// Simplify one statement to its canonical flattened form, with like terms
/// collected and group multipliers distributed over their bodies.
///
/// ```
/// assert_eq!(polyflat::simplify("1c-4-((2a-4)+2)").unwrap(), "-2a+1c-2");
/// ```
pub fn simplify(input: &str) -> Result<String, SimplifyError> {
  Ok(simplify_with_trace(input)?.result)
}

/// Like [`simplify`], but also returns the per-group reduction trace.
pub fn simplify_with_trace(
  input: &str,
) -> Result<SimplifyResult, SimplifyError> {
  let statement: String = input.chars().filter(|c| *c != ' ').collect();
  if statement.is_empty() {
    return Ok(SimplifyResult {
      result: String::new(),
      depth: 0,
      steps: Vec::new(),
    });
  }
  check_parentheses(&statement)?;
  let program = syntax::build_program(parse(&statement)?)?;
  let mut steps = Vec::new();
  let poly = evaluator::reduce(&program, &mut steps)?;
  let depth = steps.iter().map(|step| step.depth).max().unwrap_or(0);
  Ok(SimplifyResult {
    result: poly.to_string(),
    depth,
    steps,
  })
}

/// Simplify every statement of a multi-line script and join the results
/// with newlines. Fails on the first malformed statement.
pub fn simplify_script(source: &str) -> Result<String, SimplifyError> {
  let results = split_statements(source)
    .iter()
    .map(|statement| simplify(statement))
    .collect::<Result<Vec<_>, _>>()?;
  Ok(results.join("\n"))
}
