// Raw automaton description: the four logical fields before validation.

/// Unvalidated DFA description.
///
/// Holds the four logical fields exactly as the caller sourced them (state
/// count, accepting states, alphabet, transition table), with numeric fields
/// still textual. Integer parsing and consistency checking happen in
/// [`Automaton::build`](crate::Automaton::build), so every malformed input
/// maps to exactly one [`BuildError`](crate::BuildError) variant there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// State count, still textual.
    pub state_count: String,
    /// Accepting state entries, still textual.
    pub accepting_states: Vec<String>,
    /// Alphabet symbols in declaration order.
    pub alphabet: Vec<char>,
    /// Transition table rows, entries still textual.
    pub transitions: Vec<Vec<String>>,
}

impl Description {
    /// Split a line-oriented description text into its four fields.
    ///
    /// Format:
    /// - line 1: state count
    /// - line 2: accepting states, whitespace-separated (may be empty)
    /// - line 3: alphabet symbols; whitespace is ignored
    /// - lines 4..: transition rows, whitespace-separated
    ///
    /// Splitting never fails: missing lines yield empty fields and trailing
    /// blank lines are dropped. Validation is deferred to
    /// [`Automaton::build`](crate::Automaton::build).
    pub fn from_text(text: &str) -> Self {
        let mut lines = text.lines();
        let state_count = lines.next().unwrap_or("").trim().to_string();
        let accepting_states = lines
            .next()
            .unwrap_or("")
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let alphabet = lines
            .next()
            .unwrap_or("")
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();
        let mut transitions: Vec<Vec<String>> = lines
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .collect();
        while transitions.last().is_some_and(Vec::is_empty) {
            transitions.pop();
        }
        Self {
            state_count,
            accepting_states,
            alphabet,
            transitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_four_line_description() {
        let desc = Description::from_text("2\n1\na b\n1 0\n1 1\n");
        assert_eq!(desc.state_count, "2");
        assert_eq!(desc.accepting_states, vec!["1"]);
        assert_eq!(desc.alphabet, vec!['a', 'b']);
        assert_eq!(
            desc.transitions,
            vec![vec!["1", "0"], vec!["1", "1"]]
        );
    }

    #[test]
    fn alphabet_line_ignores_spacing() {
        let desc = Description::from_text("1\n0\n a  b\tc\n0 0 0\n");
        assert_eq!(desc.alphabet, vec!['a', 'b', 'c']);
    }

    #[test]
    fn empty_accepting_line() {
        let desc = Description::from_text("1\n\na\n0\n");
        assert!(desc.accepting_states.is_empty());
    }

    #[test]
    fn trailing_blank_lines_dropped() {
        let desc = Description::from_text("2\n1\na\n1\n0\n\n\n");
        assert_eq!(desc.transitions.len(), 2);
    }

    #[test]
    fn crlf_line_endings() {
        let desc = Description::from_text("2\r\n1\r\na b\r\n1 0\r\n1 1\r\n");
        assert_eq!(desc.state_count, "2");
        assert_eq!(desc.alphabet, vec!['a', 'b']);
        assert_eq!(desc.transitions.len(), 2);
    }

    #[test]
    fn empty_text_yields_empty_fields() {
        let desc = Description::from_text("");
        assert_eq!(desc.state_count, "");
        assert!(desc.accepting_states.is_empty());
        assert!(desc.alphabet.is_empty());
        assert!(desc.transitions.is_empty());
    }
}
