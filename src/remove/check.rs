//! Per-repository confirmation as an explicit state machine.
//!
//! The transition function [`step`] is pure; [`CheckWalk`] carries the
//! candidates and pending set along with the current state so callers only
//! have to feed it answers.

use crate::github::Repository;
use crate::remove::Selection;

/// A classified line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// `y`: mark for deletion.
    Yes,
    /// `n`: skip this one.
    No,
    /// `s`: stop asking, keep what is marked.
    Stop,
    /// `q`: abort without deleting anything.
    Quit,
    /// Anything else.
    Other,
}

impl Answer {
    /// Classify a line, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "y" => Answer::Yes,
            "n" => Answer::No,
            "s" => Answer::Stop,
            "q" => Answer::Quit,
            _ => Answer::Other,
        }
    }
}

/// Where the walk over the candidates is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    /// Waiting for an answer about candidate `i`.
    Prompting(usize),
    /// Stopped early with `s`.
    Stopped,
    /// Aborted with `q`.
    Quit,
    /// Every candidate was answered.
    Done,
}

impl CheckState {
    /// Initial state for `total` candidates.
    pub fn start(total: usize) -> Self {
        if total == 0 {
            CheckState::Done
        } else {
            CheckState::Prompting(0)
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, CheckState::Prompting(_))
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add candidate `i` to the pending set.
    Mark(usize),
    /// Candidate `i` was explicitly skipped.
    Skip(usize),
    /// Candidate `i` got an unrecognized answer.
    Ignore(usize),
    /// Stop visiting candidates.
    Stop,
    /// Drop the pending set.
    Abort,
    /// Terminal state, nothing to do.
    Idle,
}

/// Advance the walk by one answer.
pub fn step(state: CheckState, answer: Answer, total: usize) -> (CheckState, Action) {
    let i = match state {
        CheckState::Prompting(i) => i,
        terminal => return (terminal, Action::Idle),
    };

    let next = if i + 1 < total {
        CheckState::Prompting(i + 1)
    } else {
        CheckState::Done
    };

    match answer {
        Answer::Yes => (next, Action::Mark(i)),
        Answer::No => (next, Action::Skip(i)),
        Answer::Other => (next, Action::Ignore(i)),
        Answer::Stop => (CheckState::Stopped, Action::Stop),
        Answer::Quit => (CheckState::Quit, Action::Abort),
    }
}

/// An in-progress walk over deletion candidates.
#[derive(Debug)]
pub struct CheckWalk<'a> {
    candidates: &'a [Repository],
    state: CheckState,
    pending: Vec<Repository>,
}

impl<'a> CheckWalk<'a> {
    pub fn new(candidates: &'a [Repository]) -> Self {
        Self {
            candidates,
            state: CheckState::start(candidates.len()),
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> CheckState {
        self.state
    }

    /// The candidate awaiting an answer, if any.
    pub fn current(&self) -> Option<&'a Repository> {
        match self.state {
            CheckState::Prompting(i) => self.candidates.get(i),
            _ => None,
        }
    }

    /// Apply an answer to the current candidate.
    pub fn answer(&mut self, answer: Answer) -> Action {
        let (state, action) = step(self.state, answer, self.candidates.len());
        self.state = state;

        match action {
            Action::Mark(i) => self.pending.push(self.candidates[i].clone()),
            Action::Abort => self.pending.clear(),
            _ => {}
        }

        action
    }

    /// Turn the walk into a selection. A walk that was not driven to a
    /// terminal state counts as aborted.
    pub fn finish(self) -> Selection {
        match self.state {
            CheckState::Stopped | CheckState::Done => Selection::Delete(self.pending),
            CheckState::Quit | CheckState::Prompting(_) => Selection::Cancelled,
        }
    }
}
