use luascope_core::{Bindings, Position, ScanOutcome};

/// One `name<TAB>origin` row per binding, ordered by name
pub fn format_bindings(bindings: &Bindings) -> String {
    bindings
        .values()
        .map(|binding| format!("{}\t{}", binding.name, binding.origin))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_scan_report(filepath: &str, cursor: usize, position: Position, outcome: &ScanOutcome) {
    println!(
        "🔍 Scanning: {}:{}:{} (offset {})",
        filepath,
        position.line + 1,
        position.character + 1,
        cursor
    );
    println!("{}", "=".repeat(60));

    if outcome.bindings.is_empty() {
        println!("(nothing in scope)");
    } else {
        println!("{}", format_bindings(&outcome.bindings));
    }

    println!("{}", "-".repeat(60));
    println!(
        "Stopped: {} after {} matches, {} in scope",
        outcome.halt,
        outcome.steps,
        outcome.bindings.len()
    );
}
