use pest::iterators::{Pair, Pairs};

use crate::{Rule, SimplifyError};

/// Expression tree for one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  /// Terms and groups in source order; the empty sum is the empty statement.
  Sum(Vec<Expr>),
  /// A subexpression multiplied by an integer factor.
  Scaled { factor: i64, inner: Box<Expr> },
  /// A single lowercase variable.
  Variable(char),
  /// A bare integer constant, sign folded in.
  Constant(i64),
  /// A parenthesized group with its multiplier pair: the integer factor on
  /// the left and the optional variable suffix on the right.
  Group {
    factor: i64,
    body: Box<Expr>,
    suffix: Option<char>,
  },
}

/// Lower the pair stream produced by parsing `Rule::Program` into an
/// expression tree.
pub fn build_program(mut pairs: Pairs<Rule>) -> Result<Expr, SimplifyError> {
  match pairs.next() {
    Some(program) => {
      for pair in program.into_inner() {
        if pair.as_rule() == Rule::Statement {
          return build_statement(pair);
        }
      }
      Ok(Expr::Sum(Vec::new()))
    }
    None => Ok(Expr::Sum(Vec::new())),
  }
}

fn build_statement(pair: Pair<Rule>) -> Result<Expr, SimplifyError> {
  let elements = pair
    .into_inner()
    .map(build_element)
    .collect::<Result<Vec<_>, _>>()?;
  Ok(Expr::Sum(elements))
}

fn build_element(pair: Pair<Rule>) -> Result<Expr, SimplifyError> {
  match pair.as_rule() {
    Rule::Group => build_group(pair),
    Rule::Term => build_term(pair),
    rule => unreachable!("statement element {rule:?}"),
  }
}

fn build_term(pair: Pair<Rule>) -> Result<Expr, SimplifyError> {
  let mut sign = 1;
  let mut magnitude = None;
  let mut variable = None;
  for part in pair.into_inner() {
    match part.as_rule() {
      Rule::Signs => sign = fold_signs(part.as_str()),
      Rule::Integer => magnitude = Some(parse_integer(part.as_str())?),
      Rule::Variable => variable = part.as_str().chars().next(),
      rule => unreachable!("term part {rule:?}"),
    }
  }
  let coefficient = sign * magnitude.unwrap_or(1);
  Ok(match variable {
    Some(letter) if coefficient == 1 => Expr::Variable(letter),
    Some(letter) => Expr::Scaled {
      factor: coefficient,
      inner: Box::new(Expr::Variable(letter)),
    },
    None => Expr::Constant(coefficient),
  })
}

fn build_group(pair: Pair<Rule>) -> Result<Expr, SimplifyError> {
  let mut sign = 1;
  let mut magnitude = None;
  let mut body = Expr::Sum(Vec::new());
  let mut suffix = None;
  for part in pair.into_inner() {
    match part.as_rule() {
      Rule::Signs => sign = fold_signs(part.as_str()),
      Rule::Integer => magnitude = Some(parse_integer(part.as_str())?),
      Rule::Statement => body = build_statement(part)?,
      Rule::Suffix => suffix = part.as_str().chars().next(),
      rule => unreachable!("group part {rule:?}"),
    }
  }
  Ok(Expr::Group {
    factor: sign * magnitude.unwrap_or(1),
    body: Box::new(body),
    suffix,
  })
}

// Left-to-right sign product, so `-+-` is `+` and `--` is `+`.
fn fold_signs(signs: &str) -> i64 {
  signs
    .chars()
    .fold(1, |acc, ch| if ch == '-' { -acc } else { acc })
}

fn parse_integer(literal: &str) -> Result<i64, SimplifyError> {
  literal
    .parse()
    .map_err(|_| SimplifyError::IntegerTooLarge(literal.to_string()))
}
