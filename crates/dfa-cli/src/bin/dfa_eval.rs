// dfa-eval: Evaluate strings against a DFA description.
//
// Loads a DFA description, then reads candidate strings from stdin (one per
// line) and prints the transition trace and verdict for each. A
// case-insensitive "quit" line stops the loop.
//
// Usage:
//   dfa-eval [DESCRIPTION_FILE]
//
// The description file defaults to DFA.txt in the current directory; the
// DFA_PATH environment variable overrides the default.

use std::io::{self, BufRead, Write};

use dfa_core::evaluate;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, args) = dfa_cli::split_path_arg(&args);

    if dfa_cli::wants_help(&args) {
        println!("dfa-eval: Evaluate strings against a DFA description.");
        println!();
        println!("Usage: dfa-eval [DESCRIPTION_FILE]");
        println!();
        println!("Reads candidate strings from stdin (one per line) and prints the");
        println!("transition trace and verdict for each. Enter \"quit\" to stop.");
        println!();
        println!("The description file defaults to DFA.txt in the current directory;");
        println!("the DFA_PATH environment variable overrides the default.");
        return;
    }

    println!(">>>Loading DFA description...");
    let automaton =
        dfa_cli::load_automaton(path.as_deref()).unwrap_or_else(|e| dfa_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        let _ = write!(out, ">>>Please enter a string to evaluate: ");
        let _ = out.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                // End of input without a quit command.
                let _ = writeln!(out);
                let _ = writeln!(out, ">>>Goodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }

        let input = line.trim_end_matches(['\r', '\n']);
        if input.eq_ignore_ascii_case("quit") {
            let _ = writeln!(out, ">>>Goodbye!");
            break;
        }

        let evaluation = evaluate(&automaton, input);
        let _ = writeln!(out, ">>>Computation...");
        let _ = writeln!(out, "{}", dfa_cli::render_evaluation(&evaluation));
    }
}
