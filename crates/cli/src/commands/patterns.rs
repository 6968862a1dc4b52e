use anyhow::Result;
use luascope_core::patterns::{PatternKind, PatternTable};

pub fn patterns_command() -> Result<()> {
    println!("📋 Patterns in priority order (earlier wins ties)");
    println!("{}", "=".repeat(60));

    for (i, (kind, regex)) in PatternTable::global().iter().enumerate() {
        let marker = match kind {
            PatternKind::Branch => " (branch_scopes only)",
            kind if kind.is_skip_region() => " (skip)",
            _ => "",
        };
        println!("{:>2}. {}{}", i + 1, kind, marker);
        println!("    {}", regex.as_str());
    }

    Ok(())
}
