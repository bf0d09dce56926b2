use super::*;

mod parentheses {
  use super::*;

  #[test]
  fn unclosed_group_reports_the_end_of_the_statement() {
    assert!(matches!(
      simplify("(1a"),
      Err(SimplifyError::UnbalancedParenthesis { position: 3 })
    ));
  }

  #[test]
  fn stray_closer_reports_its_position() {
    assert!(matches!(
      simplify("1a)"),
      Err(SimplifyError::UnbalancedParenthesis { position: 2 })
    ));
    assert!(matches!(
      simplify(")("),
      Err(SimplifyError::UnbalancedParenthesis { position: 0 })
    ));
  }

  #[test]
  fn nesting_is_capped() {
    let deep = |levels: usize| {
      format!("{}1a{}", "(".repeat(levels), ")".repeat(levels))
    };
    assert_eq!(simplify(&deep(64)).unwrap(), "+1a");
    assert!(matches!(
      simplify(&deep(65)),
      Err(SimplifyError::TooDeeplyNested)
    ));
  }
}

mod malformed {
  use super::*;

  #[test]
  fn unsupported_syntax_is_a_parse_error() {
    assert!(matches!(simplify("1a$"), Err(SimplifyError::Parse(_))));
    assert!(matches!(simplify("2*(1a)"), Err(SimplifyError::Parse(_))));
    assert!(matches!(simplify("1A"), Err(SimplifyError::Parse(_))));
    assert!(matches!(simplify("+"), Err(SimplifyError::Parse(_))));
  }
}

mod overflow {
  use super::*;

  #[test]
  fn oversized_literals_are_rejected() {
    assert!(matches!(
      simplify("99999999999999999999(1a)"),
      Err(SimplifyError::IntegerTooLarge(_))
    ));
  }

  #[test]
  fn coefficient_overflow_is_reported() {
    assert!(matches!(
      simplify("9223372036854775807+9223372036854775807"),
      Err(SimplifyError::CoefficientOverflow)
    ));
    assert!(matches!(
      simplify("2(9223372036854775807)"),
      Err(SimplifyError::CoefficientOverflow)
    ));
  }
}
