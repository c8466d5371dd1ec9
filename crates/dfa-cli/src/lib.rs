// dfa-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use dfa_core::{Automaton, Evaluation, TransitionStep};

/// Default description file name in the current directory.
const DEFAULT_DESCRIPTION: &str = "DFA.txt";

/// Load and build an automaton from a description file.
///
/// Search order:
/// 1. `path` argument (if provided)
/// 2. `DFA_PATH` environment variable
/// 3. `DFA.txt` in the current working directory
pub fn load_automaton(path: Option<&str>) -> Result<Automaton, String> {
    let path = resolve_description_path(path);
    let text = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Automaton::from_text(&text)
        .map_err(|e| format!("invalid description in {}: {}", path.display(), e))
}

fn resolve_description_path(path: Option<&str>) -> PathBuf {
    if let Some(p) = path {
        return PathBuf::from(p);
    }
    if let Ok(env_path) = std::env::var("DFA_PATH") {
        return PathBuf::from(env_path);
    }
    PathBuf::from(DEFAULT_DESCRIPTION)
}

/// Render one trace step the way the interactive tool prints it.
///
/// The left side shows the state and the input still to be read (the
/// consumed symbol plus the unread suffix); the right side shows the target
/// state and the suffix left after the step, `{ε}` once input is exhausted:
///
/// ```text
/// 0,ab -> 1,b
/// 1,b -> 1,{ε}
/// ```
pub fn render_step(step: &TransitionStep) -> String {
    let mut before = String::new();
    before.push(step.symbol);
    let after = match &step.remaining {
        Some(rest) => {
            before.push_str(rest);
            rest.clone()
        }
        None => "{\u{03b5}}".to_string(),
    };
    format!("{},{} -> {},{}", step.from, before, step.to, after)
}

/// Render a full evaluation: the step lines, or the invalid-input line when
/// evaluation halted on an out-of-alphabet symbol, followed by the verdict.
pub fn render_evaluation(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    if let Some(invalid) = &evaluation.failure {
        out.push_str(&format!(
            "{},{} -> INVALID INPUT\n",
            invalid.state, invalid.symbol
        ));
    } else {
        for step in &evaluation.trace {
            out.push_str(&render_step(step));
            out.push('\n');
        }
    }
    out.push_str(&evaluation.verdict.to_string());
    out
}

/// Take the first non-flag argument as the description file path.
///
/// Returns `(path, remaining_args)`.
pub fn split_path_arg(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut path = None;
    let mut remaining = Vec::new();

    for arg in args {
        if path.is_none() && !arg.starts_with('-') {
            path = Some(arg.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    (path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
