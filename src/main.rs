use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use polyflat::polynomial::{Monomial, Polynomial};
use polyflat::{SimplifyResult, simplify_with_trace, split_statements};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Simplify a single polynomial expression
  Eval {
    /// The expression to flatten, e.g. "1c-4-((2a-4)+2)"
    expression: String,
    /// Print every group reduction to stderr before the result
    #[arg(long)]
    trace: bool,
  },
  /// Simplify every line of a script file
  Run {
    /// Path to a file with one expression per line
    path: PathBuf,
    /// Print every group reduction to stderr before the results
    #[arg(long)]
    trace: bool,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  let outcome = match cli.command {
    Commands::Eval { expression, trace } => eval(&expression, trace),
    Commands::Run { path, trace } => run(&path, trace),
  };
  match outcome {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("Error: {e:#}");
      ExitCode::FAILURE
    }
  }
}

fn eval(expression: &str, trace: bool) -> anyhow::Result<()> {
  let outcome = simplify_with_trace(expression)?;
  if trace {
    print_trace(&outcome);
  }
  println!("{}", outcome.result);
  Ok(())
}

fn run(path: &Path, trace: bool) -> anyhow::Result<()> {
  let source = std::fs::read_to_string(path)
    .with_context(|| format!("cannot read script {}", path.display()))?;
  let mut results = Vec::new();
  for statement in split_statements(&source) {
    let outcome = simplify_with_trace(&statement)?;
    if trace {
      print_trace(&outcome);
    }
    results.push(outcome.result);
  }
  println!("{}", results.join("\n"));
  Ok(())
}

fn print_trace(outcome: &SimplifyResult) {
  for step in &outcome.steps {
    eprintln!(
      "depth {}: {} => {} [{}]",
      step.depth,
      step.source,
      step.reduced,
      format_coefficients(&step.coefficients)
    );
  }
}

fn format_coefficients(poly: &Polynomial) -> String {
  poly
    .iter()
    .map(|(key, coefficient)| match key {
      Monomial::Vars(vars) => format!("{vars}: {coefficient}"),
      Monomial::Constant => format!("const: {coefficient}"),
    })
    .collect::<Vec<_>>()
    .join(", ")
}
