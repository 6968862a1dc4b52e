//! End-to-end behavior of the scope scanner

use luascope_core::{Bindings, HaltReason, Origin, Position, RegionKind, Scanner, scan, scan_file};
use tempfile::TempDir;

fn render(bindings: &Bindings) -> String {
    bindings
        .values()
        .map(|b| format!("{}: {}", b.name, b.origin))
        .collect::<Vec<_>>()
        .join("\n")
}

fn offset_after(source: &str, needle: &str) -> usize {
    source.find(needle).unwrap() + needle.len()
}

#[test]
fn test_upvalue_inside_function() {
    let source = "local a = 1\nfunction f()\n  local b = a\nend";
    let bindings = scan(source, offset_after(source, "local b = a"));

    insta::assert_snapshot!(render(&bindings), @r"
    a: upvalue
    b: local
    ");
}

#[test]
fn test_for_index_scoped_to_loop_body() {
    let source = "for i = 1, 10 do\n  \nend";

    let inside = scan(source, offset_after(source, "do\n "));
    assert_eq!(inside["i"].origin, Origin::ForIndex);

    let after = scan(source, source.len());
    assert!(!after.contains_key("i"));
}

#[test]
fn test_for_iterator_binds_every_name() {
    let source = "for k, v in pairs(t) do\n  \nend";
    let bindings = scan(source, offset_after(source, "do\n "));

    insta::assert_snapshot!(render(&bindings), @r"
    k: for-index
    v: for-index
    ");
}

#[test]
fn test_method_binds_self_and_parameters() {
    let source = "function obj:method(x)\n  \nend";
    let bindings = scan(source, offset_after(source, "(x)\n "));

    assert_eq!(bindings["self"].origin, Origin::SelfRef);
    assert_eq!(bindings["x"].origin, Origin::Parameter);
    assert_eq!(bindings.len(), 2);
}

#[test]
fn test_varargs_are_not_bindings() {
    let source = "local function log(fmt, ...)\n  \nend";
    let bindings = scan(source, offset_after(source, "...)\n "));

    insta::assert_snapshot!(render(&bindings), @r"
    fmt: parameter
    log: upvalue
    ");
}

#[test]
fn test_unterminated_string_keeps_earlier_bindings() {
    let source = "local a = \"oops";
    let quote = source.find('"').unwrap();

    for cursor in quote + 1..=source.len() {
        let outcome = Scanner::new(source).run_with_outcome(cursor);
        assert_eq!(outcome.halt, HaltReason::Unterminated(RegionKind::String));
        assert_eq!(render(&outcome.bindings), "a: local");
    }
}

#[test]
fn test_nothing_from_constructs_at_or_after_cursor() {
    let source = "local a\nfor i = 1, 2 do\n  local b\nend\nlocal c\n";
    let for_start = source.find("for").unwrap();

    let bindings = scan(source, for_start);
    assert_eq!(render(&bindings), "a: local");

    let bindings = scan(source, source.find("local b").unwrap());
    assert_eq!(render(&bindings), "a: local\ni: for-index");
}

#[test]
fn test_plain_block_round_trip() {
    let source = "local a\ndo\n  a = 2\nend\n";
    let before = scan(source, source.find("do").unwrap());
    let after = scan(source, offset_after(source, "end"));

    assert_eq!(before, after);
}

#[test]
fn test_function_boundary_relabels_then_restores() {
    let source = "local a\nlocal g = function()\n  \nend\n";

    let before = scan(source, source.find("local g").unwrap());
    assert_eq!(before["a"].origin, Origin::Local);

    let inside = scan(source, offset_after(source, "()\n "));
    assert_eq!(inside["a"].origin, Origin::Upvalue);
    assert_eq!(inside["g"].origin, Origin::Upvalue);

    let after = scan(source, source.len());
    assert_eq!(after["a"].origin, Origin::Local);
}

#[test]
fn test_nested_functions_shadowing() {
    let source = r#"
local x = 1
local function outer(y)
  local x = "shadow"
  return function(z)
    local w = x .. y .. z

  end
end
"#;
    let cursor = offset_after(source, "local w = x .. y .. z\n");
    insta::assert_snapshot!(render(&scan(source, cursor)), @r"
    outer: upvalue
    w: local
    x: upvalue
    y: upvalue
    z: parameter
    ");
}

#[test]
fn test_repeat_until_and_while() {
    let source = "repeat\n  local r\nuntil r\nwhile true do\n  local w\nend\nlocal done\n";
    let bindings = scan(source, source.len());

    assert_eq!(render(&bindings), "done: local");
}

#[test]
fn test_excess_end_is_tolerated() {
    let source = "end end\nlocal a\nuntil\nlocal b\n";
    let bindings = scan(source, source.len());

    assert_eq!(render(&bindings), "a: local\nb: local");
}

#[test]
fn test_scan_is_idempotent() {
    let source = "local a\nfunction t:m(p)\n  for i, v in ipairs(p) do\n    \n  end\nend\n";
    let cursor = offset_after(source, "do\n  ");

    let first = scan(source, cursor);
    let second = scan(source, cursor);
    assert_eq!(first, second);

    let scanner = Scanner::new(source);
    assert_eq!(scanner.run(cursor), scanner.run(cursor));
    assert_eq!(scanner.run(cursor), first);
}

#[test]
fn test_binary_garbage_does_not_panic() {
    let source = "\u{0}\u{7f}[=[ \" ' -- end ]] \u{fffd} function(";
    for cursor in 0..=source.len() + 3 {
        let _ = scan(source, cursor);
    }
}

#[test]
fn test_position_resolves_to_cursor() {
    let source = "local a\nfunction f(p)\n  \nend\n";
    let cursor = Position::new(2, 2).to_offset(source).unwrap();
    let bindings = scan(source, cursor);

    assert_eq!(render(&bindings), "a: upvalue\np: parameter");
}

#[test]
fn test_scan_file_uses_discovered_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("main.lua");
    std::fs::write(&path, "local a\nlocal b\nlocal c\n").unwrap();

    let all = scan_file(&path, usize::MAX).unwrap();
    assert_eq!(all.len(), 3);

    std::fs::write(temp.path().join(".luascope.json"), r#"{"max_steps": 1}"#).unwrap();
    let limited = scan_file(&path, usize::MAX).unwrap();
    assert_eq!(render(&limited), "a: local");
}

#[test]
fn test_else_body_sees_if_locals_unless_branch_scopes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("branch.lua");
    let source = "if c then\n  local a = 1\nelse\n  \nend\n";
    std::fs::write(&path, source).unwrap();
    let in_else = offset_after(source, "else\n  ");

    assert_eq!(render(&scan(source, in_else)), "a: local");
    assert_eq!(render(&scan_file(&path, in_else).unwrap()), "a: local");

    std::fs::write(temp.path().join(".luascope.json"), r#"{"branch_scopes": true}"#).unwrap();
    assert!(scan_file(&path, in_else).unwrap().is_empty());
}

#[test]
fn test_scan_file_missing() {
    let temp = TempDir::new().unwrap();
    let err = scan_file(&temp.path().join("nope.lua"), 0).unwrap_err();
    assert!(matches!(err, luascope_core::Error::IoError(_)));
}
