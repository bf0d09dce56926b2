use super::*;

mod splitting {
  use super::*;

  #[test]
  fn splits_on_line_break_runs() {
    assert_eq!(split_statements("1a+2\n1b"), vec!["1a+2", "1b"]);
    assert_eq!(split_statements("1a\r\n1b"), vec!["1a", "1b"]);
    assert_eq!(split_statements("1a\n\n\n1b"), vec!["1a", "1b"]);
  }

  #[test]
  fn strips_spaces() {
    assert_eq!(split_statements("1a + 2\n 1b "), vec!["1a+2", "1b"]);
  }

  #[test]
  fn keeps_empty_boundary_statements() {
    assert_eq!(split_statements("\n1a"), vec!["", "1a"]);
    assert_eq!(split_statements("1a\n"), vec!["1a", ""]);
    assert_eq!(split_statements(""), vec![""]);
  }
}

mod scripts {
  use super::*;

  #[test]
  fn simplifies_each_line() {
    assert_eq!(
      simplify_script("1a-3a+3x\n2(1a+1b)").unwrap(),
      "-2a+3x\n+2a+2b"
    );
  }

  #[test]
  fn empty_lines_stay_empty() {
    assert_eq!(simplify_script("1a\n").unwrap(), "+1a\n");
    assert_eq!(simplify_script("1a\n\n1b").unwrap(), "+1a\n+1b");
  }

  #[test]
  fn fails_on_the_first_malformed_statement() {
    assert!(matches!(
      simplify_script("1a\n(1b"),
      Err(SimplifyError::UnbalancedParenthesis { .. })
    ));
  }

  #[test]
  fn flattens_a_deeply_nested_statement() {
    let statement = "1c-4-((2-(1a-3a+3x-(4a-2z+3-1c)-3c)-4+2a-4)\
                     +(((1-1d)+1b+1-(2-3x-1+2-3))-2)-2-3c+3d)";
    assert_eq!(simplify_script(statement).unwrap(), "-8a-1b+2c-2d+2z+1");
  }
}
