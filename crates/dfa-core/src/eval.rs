// String evaluation: walk input symbols through the transition table.

use crate::automaton::{Automaton, START_STATE, StateId};

/// One consumed symbol in an evaluation trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionStep {
    /// State before consuming the symbol.
    pub from: StateId,
    /// The consumed symbol.
    pub symbol: char,
    /// State after consuming the symbol.
    pub to: StateId,
    /// Input left unread after this step; `None` once the input is
    /// exhausted (rendered as the empty-string marker).
    pub remaining: Option<String>,
}

/// Accept/reject verdict for one evaluated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("ACCEPTED"),
            Verdict::Rejected => f.write_str("REJECTED"),
        }
    }
}

/// An input symbol outside the automaton's alphabet.
///
/// A defined outcome rather than a fault: it forces a `Rejected` verdict and
/// records the state the automaton was in when the symbol was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol {
    /// State at the moment the symbol was read.
    pub state: StateId,
    /// The offending symbol.
    pub symbol: char,
}

/// Result of evaluating one string against an automaton.
///
/// Owned entirely by the caller; evaluations share no state with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// One step per consumed input symbol. Empty when the input was empty or
    /// when evaluation halted on an invalid symbol.
    pub trace: Vec<TransitionStep>,
    /// Final verdict.
    pub verdict: Verdict,
    /// Set when evaluation halted on an out-of-alphabet symbol. The steps
    /// consumed before the halt are dropped and the verdict is `Rejected`.
    pub failure: Option<InvalidSymbol>,
}

impl Evaluation {
    /// Whether the automaton accepted the input.
    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }
}

/// Evaluate `input` against `automaton`, starting from [`START_STATE`].
///
/// Symbols are consumed left to right. The first symbol outside the alphabet
/// halts evaluation with a `Rejected` verdict regardless of what follows.
/// Otherwise the verdict is `Accepted` exactly when the state after the last
/// symbol is accepting. The empty string yields no steps and takes its
/// verdict from the start state.
pub fn evaluate(automaton: &Automaton, input: &str) -> Evaluation {
    let symbols: Vec<char> = input.chars().collect();
    let mut state = START_STATE;
    let mut trace = Vec::with_capacity(symbols.len());

    for (position, &symbol) in symbols.iter().enumerate() {
        let Some(column) = automaton.symbol_index(symbol) else {
            return Evaluation {
                trace: Vec::new(),
                verdict: Verdict::Rejected,
                failure: Some(InvalidSymbol { state, symbol }),
            };
        };
        let next = automaton.transition(state, column);
        let remaining = if position + 1 < symbols.len() {
            Some(symbols[position + 1..].iter().collect())
        } else {
            None
        };
        trace.push(TransitionStep {
            from: state,
            symbol,
            to: next,
            remaining,
        });
        state = next;
    }

    let verdict = if automaton.is_accepting(state) {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    };
    Evaluation {
        trace,
        verdict,
        failure: None,
    }
}
