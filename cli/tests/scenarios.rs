//! End-to-end input -> stdout scenarios (spec §8).

use std::fs;
use std::process::Command;

fn run_source(name: &str, source: &str) -> (String, i32) {
    let path = std::env::temp_dir().join(format!("clox_scenario_{name}.lox"));
    fs::write(&path, source).expect("write temp script");
    let output = Command::new(env!("CARGO_BIN_EXE_clox"))
        .arg(&path)
        .output()
        .expect("run clox binary");
    let _ = fs::remove_file(&path);
    (String::from_utf8_lossy(&output.stdout).into_owned(), output.status.code().unwrap_or(-1))
}

#[test]
fn scenario_1_arithmetic_precedence() {
    let (stdout, code) = run_source("1", "print 1 + 2 * 3;");
    assert_eq!(stdout, "7\n");
    assert_eq!(code, 0);
}

#[test]
fn scenario_2_string_interning_equality() {
    let (stdout, code) = run_source("2", "var a = \"hi\"; var b = \"hi\"; print a == b;");
    assert_eq!(stdout, "true\n");
    assert_eq!(code, 0);
}

#[test]
fn scenario_3_for_loop_accumulation() {
    let (stdout, code) = run_source("3", "var n = 0; for (var i = 1; i <= 5; i = i + 1) { n = n + i; } print n;");
    assert_eq!(stdout, "15\n");
    assert_eq!(code, 0);
}

#[test]
fn scenario_4_recursive_fibonacci() {
    let (stdout, code) = run_source(
        "4",
        "fun fib(n) { if (n < 2) return n; return fib(n-1) + fib(n-2); } print fib(10);",
    );
    assert_eq!(stdout, "55\n");
    assert_eq!(code, 0);
}

#[test]
fn scenario_5_nested_scope_shadowing() {
    let (stdout, code) = run_source(
        "5",
        "var x = 1; { var x = 2; { var x = 3; print x; } print x; } print x;",
    );
    assert_eq!(stdout, "3\n2\n1\n");
    assert_eq!(code, 0);
}

#[test]
fn scenario_6_string_concatenation() {
    let (stdout, code) = run_source("6", "print \"foo\" + \"bar\";");
    assert_eq!(stdout, "foobar\n");
    assert_eq!(code, 0);
}

#[test]
fn scenario_7_undefined_global_is_a_runtime_error() {
    let (stdout, code) = run_source("7", "print undefined_name;");
    assert_eq!(stdout, "");
    assert_eq!(code, 70);
}

#[test]
fn usage_error_on_extra_arguments_exits_64() {
    let output = Command::new(env!("CARGO_BIN_EXE_clox"))
        .arg("one.lox")
        .arg("two.lox")
        .output()
        .expect("run clox binary");
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn compile_error_exits_65() {
    let (_, code) = run_source("compile_error", "var 1 = 2;");
    assert_eq!(code, 65);
}
