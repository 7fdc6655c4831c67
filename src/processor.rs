use std::{
  fmt,
  io::{BufRead, Write},
};

use crate::{
  evaluator::{self, EvaluationError},
  fraction::Fraction,
  parser::{self, ParserError},
  state::State,
  tokenizer,
};

/// Reads a case count followed by that many case lines from `input` and writes
/// one reduced result per case to `output`, in order.
///
/// Stops at the first bad line. Results of earlier cases have already been
/// written by then. Lines after the last case are never read.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<usize, ExtendedProcessError> {
  let mut lines = input.lines();
  let mut line_number = 0;
  let mut state = State::new();
  let mut processed = 0;

  while !state.is_done() {
    line_number += 1;
    let line = lines
      .next()
      .transpose()
      .map_err(ProcessError::from)
      .map_err(|err| ExtendedProcessError::LocatedProcessError(err, line_number))?;

    state = match (state, line) {
      (State::AwaitingCount, Some(line)) => {
        let count = parse_count(&line)
          .map_err(|err| ExtendedProcessError::LocatedProcessError(err, line_number))?;
        log::debug!("Reading {} cases", count);
        State::with_count(count)
      }
      (State::AwaitingCount, None) => {
        return Err(ExtendedProcessError::ProcessError(ProcessError::InvalidInput(
          "Input is empty, expected a case count".to_string(),
        )))
      }
      (State::ReadingCase { case, total }, Some(line)) => {
        let result = process_case(&line)
          .map_err(|err| ExtendedProcessError::LocatedProcessError(err, line_number))?;
        log::debug!("Case {}/{}: {} => {}", case, total, line.trim(), result);
        writeln!(output, "{}", result)
          .map_err(|err| ExtendedProcessError::ProcessError(err.into()))?;
        processed += 1;
        state.advance()
      }
      (State::ReadingCase { case, total }, None) => {
        return Err(ExtendedProcessError::ProcessError(ProcessError::InvalidInput(
          format!(
            "Expected {} cases, but input ended after {}",
            total,
            case - 1
          ),
        )))
      }
      (State::Done, _) => State::Done,
    };
  }

  output
    .flush()
    .map_err(|err| ExtendedProcessError::ProcessError(err.into()))?;
  log::info!("Processed {} cases", processed);
  Ok(processed)
}

fn parse_count(line: &str) -> Result<usize, ProcessError> {
  line.trim().parse::<usize>().map_err(|_| {
    ProcessError::InvalidInput(format!(
      "Expected a non-negative case count, found '{}'",
      line.trim()
    ))
  })
}

fn process_case(line: &str) -> Result<Fraction, ProcessError> {
  let case = parser::parse(tokenizer::tokenize(line))?;
  Ok(evaluator::calc(&case.left, &case.right, case.operator)?)
}

#[derive(Debug)]
pub enum ProcessError {
  InvalidInput(String),
  InvalidFraction(String),
  DivisionByZero(String),
  UnsupportedOperator(String),
  Io(std::io::Error),
}

impl From<ParserError> for ProcessError {
  fn from(err: ParserError) -> Self {
    match err {
      ParserError::WrongTokenCount(message) | ParserError::ExpectedInteger(message) => {
        ProcessError::InvalidInput(message)
      }
      ParserError::UnsupportedOperator(message) => ProcessError::UnsupportedOperator(message),
      ParserError::InvalidFraction(err) => ProcessError::InvalidFraction(err.to_string()),
    }
  }
}

impl From<EvaluationError> for ProcessError {
  fn from(err: EvaluationError) -> Self {
    match err {
      EvaluationError::DivisionByZero(message) => ProcessError::DivisionByZero(message),
    }
  }
}

impl From<std::io::Error> for ProcessError {
  fn from(err: std::io::Error) -> Self {
    ProcessError::Io(err)
  }
}

impl fmt::Display for ProcessError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ProcessError::InvalidInput(message) => write!(f, "invalid input: {}", message),
      ProcessError::InvalidFraction(message) => write!(f, "invalid fraction: {}", message),
      ProcessError::DivisionByZero(message) => write!(f, "division by zero: {}", message),
      ProcessError::UnsupportedOperator(message) => write!(f, "unsupported operator: {}", message),
      ProcessError::Io(err) => write!(f, "i/o error: {}", err),
    }
  }
}

impl std::error::Error for ProcessError {}

#[derive(Debug)]
pub enum ExtendedProcessError {
  ProcessError(ProcessError),
  LocatedProcessError(ProcessError, usize),
}

impl ExtendedProcessError {
  pub fn kind(&self) -> &ProcessError {
    match self {
      ExtendedProcessError::ProcessError(err) => err,
      ExtendedProcessError::LocatedProcessError(err, _) => err,
    }
  }
}

impl fmt::Display for ExtendedProcessError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ExtendedProcessError::ProcessError(err) => write!(f, "{}", err),
      ExtendedProcessError::LocatedProcessError(err, line) => write!(f, "{} (line {})", err, line),
    }
  }
}

impl std::error::Error for ExtendedProcessError {}
