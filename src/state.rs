/// Where the line processor is in its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
  AwaitingCount,
  ReadingCase { case: usize, total: usize },
  Done,
}

impl State {
  pub fn new() -> Self {
    State::AwaitingCount
  }

  /// Leaves `AwaitingCount` once the case count is known.
  pub fn with_count(total: usize) -> Self {
    if total == 0 {
      State::Done
    } else {
      State::ReadingCase { case: 1, total }
    }
  }

  /// Moves past the current case.
  pub fn advance(self) -> Self {
    match self {
      State::AwaitingCount => State::AwaitingCount,
      State::ReadingCase { case, total } if case < total => State::ReadingCase {
        case: case + 1,
        total,
      },
      State::ReadingCase { .. } | State::Done => State::Done,
    }
  }

  pub fn is_done(&self) -> bool {
    *self == State::Done
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_cases_is_done_immediately() {
    assert!(State::with_count(0).is_done());
  }

  #[test]
  fn walks_through_every_case() {
    let mut state = State::with_count(3);
    let mut seen = vec![];
    while let State::ReadingCase { case, .. } = state {
      seen.push(case);
      state = state.advance();
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert!(state.is_done());
    assert!(state.advance().is_done());
  }

  #[test]
  fn count_must_come_first() {
    assert_eq!(State::new(), State::AwaitingCount);
    assert_eq!(State::new().advance(), State::AwaitingCount);
  }
}
