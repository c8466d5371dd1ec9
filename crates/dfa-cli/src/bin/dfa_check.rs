// dfa-check: Validate a DFA description file.
//
// Loads and validates a description, then prints a summary of the resulting
// automaton. Exit code 0 when the description is valid, 1 otherwise.
//
// Usage:
//   dfa-check [DESCRIPTION_FILE]

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (path, args) = dfa_cli::split_path_arg(&args);

    if dfa_cli::wants_help(&args) {
        println!("dfa-check: Validate a DFA description file.");
        println!();
        println!("Usage: dfa-check [DESCRIPTION_FILE]");
        println!();
        println!("Prints a summary of the automaton, or the first validation error.");
        println!();
        println!("The description file defaults to DFA.txt in the current directory;");
        println!("the DFA_PATH environment variable overrides the default.");
        return;
    }

    let automaton =
        dfa_cli::load_automaton(path.as_deref()).unwrap_or_else(|e| dfa_cli::fatal(&e));

    let accepting: Vec<String> = (0..automaton.state_count())
        .filter(|&state| automaton.is_accepting(state))
        .map(|state| state.to_string())
        .collect();

    println!("states:    {}", automaton.state_count());
    println!("alphabet:  {}", automaton.alphabet().iter().collect::<String>());
    println!("accepting: {}", accepting.join(" "));
    println!("transitions:");
    for state in 0..automaton.state_count() {
        let row: Vec<String> = (0..automaton.alphabet().len())
            .map(|column| automaton.transition(state, column).to_string())
            .collect();
        println!("  {state}: {}", row.join(" "));
    }
}
