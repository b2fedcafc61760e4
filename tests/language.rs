use std::fs;

use tora::{
    error::{Error, InterpreterError, ParseError},
    interpreter::{evaluator::function::core::BUILTIN_FUNCTIONS, value::core::Value},
    run_with_output,
};
use walkdir::WalkDir;

#[test]
fn script_examples_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "tora"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                               panic!("Failed to read {expected_path:?}: {e}")
                                                           });

        let mut output = Vec::new();
        if let Err(e) = run_with_output(&source, &mut output) {
            panic!("Script {path:?} failed:\n{e}");
        }
        let output = String::from_utf8(output).expect("script output is not UTF-8");
        assert_eq!(output, expected, "Output of {path:?} differs");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn result_of(src: &str) -> Option<Value> {
    let mut output = Vec::new();
    run_with_output(src, &mut output).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn output_of(src: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run_with_output(src, &mut output) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(output).expect("script output is not UTF-8")
}

fn error_of(src: &str) -> Error {
    let mut output = Vec::new();
    match run_with_output(src, &mut output) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn interpreter_error_of(src: &str) -> InterpreterError {
    match error_of(src) {
        Error::Interpreter(e) => e,
        Error::Parse(e) => panic!("Expected an interpreter error, got: {e}"),
    }
}

fn assert_numeric(src: &str, expected: f64) {
    assert_eq!(result_of(src), Some(Value::Numeric(expected)), "script: {src}");
}

fn assert_boolean(src: &str, expected: bool) {
    assert_eq!(result_of(src), Some(Value::Boolean(expected)), "script: {src}");
}

fn assert_string(src: &str, expected: &str) {
    assert_eq!(result_of(src), Some(Value::from(expected)), "script: {src}");
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_numeric("1 + 2 * 3", 7.0);
    assert_numeric("(1 + 2) * 3", 9.0);
    assert_numeric("10 - 4 - 3", 3.0);
    assert_numeric("8 / 4 / 2", 1.0);
    assert_numeric("7 % 3", 1.0);
    assert_numeric("5.5 % 2", 1.5);
    assert_boolean("1 < 2 && 3 > 2", true);
    assert_boolean("1 == 2 || 2 == 2", true);
}

#[test]
fn negation_applies_to_the_left_operand() {
    assert_numeric("-1 + 1", 0.0);
    assert_numeric("-(1 + 1)", -2.0);
    assert_numeric("x = 3; -x", -3.0);
    assert_numeric("-7 % 3", -1.0);
    assert_numeric("-1 - 2 - 3", -6.0);
    assert!(matches!(interpreter_error_of(r#"-"a""#),
                     InterpreterError::ExpectedNumber { .. }));
}

#[test]
fn division_by_zero_is_infinite() {
    assert_eq!(result_of("1 / 0"), Some(Value::Numeric(f64::INFINITY)));
    assert_eq!(output_of("println(1 / 0)"), "inf\n");
}

#[test]
fn string_concatenation_and_conversion() {
    assert_string(r#""a" + "b""#, "ab");
    assert_string(r#""a" + 1"#, "a1.000000");
    assert_string(r#""x" + true"#, "xtrue");
    assert_string(r#""n: " + [1, 2]"#, "n: ARRAY [len:2]");
    assert_numeric(r#"1 + "2.5 apples""#, 3.5);
    assert_numeric(r#"1 + "apples""#, 1.0);
    assert_string(r#""a\"b""#, "a\"b");
    assert_string(r#""\n""#, "n");
}

#[test]
fn type_mismatches_are_errors() {
    assert!(matches!(interpreter_error_of(r#""a" - 1"#), InterpreterError::TypeError { .. }));
    assert!(matches!(interpreter_error_of("true + 1"), InterpreterError::TypeError { .. }));
    assert!(matches!(interpreter_error_of(r#"1 < "a""#), InterpreterError::TypeError { .. }));
}

#[test]
fn equality_is_type_aware() {
    assert_boolean(r#"1 == "1""#, false);
    assert_boolean(r#""a" == "a""#, true);
    assert_boolean("[1] == [1]", false);
}

#[test]
fn only_numbers_and_strings_are_ever_equal() {
    assert_boolean("true == true", false);
    assert_boolean("false != false", true);
    assert_boolean("true != false", true);
    assert_boolean("a = [1]; b = a; a == b", false);
    assert_boolean("f = func() 1; g = f; f == g", false);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_boolean("true && false", false);
    assert_boolean("false || true", true);
    assert_boolean("1 && true", false);
    assert_eq!(output_of(r#"func f() { println("side"); true }; false && f()"#),
               "side\n");
}

#[test]
fn arrays_and_indexing() {
    assert_numeric("x = [10, 20, 30]; length(x)", 3.0);
    assert_numeric("x = [10, 20, 30]; x[1] = 99; x[1]", 99.0);
    assert_numeric(r#"y = ["k": 5]; y["k"]"#, 5.0);
    assert_numeric(r#"a = ["k": 1, 2]; a[1]"#, 2.0);
    assert_numeric("g = [[1, 2], [3, 4]]; g[1][0]", 3.0);
    assert_numeric("g = [[1, 2], [3, 4]]; g[1][0] = 9; g[1][0]", 9.0);
    assert_numeric(r#"a = []; a["x"] = 1; length(a)"#, 1.0);
}

#[test]
fn duplicate_keys_keep_the_first_match() {
    assert_string(r#"a = [1: "x", 1: "y"]; a[1]"#, "x");
    assert_numeric(r#"a = [1: "x", 1: "y"]; length(a)"#, 2.0);
}

#[test]
fn arrays_are_shared_between_names() {
    assert_numeric("a = [1, 2]; b = a; b[0] = 5; a[0]", 5.0);
    assert_numeric("a = [1]; func push(arr) { arr[1] = 2 }; push(a); length(a)", 2.0);
}

#[test]
fn missing_array_entries_yield_nothing() {
    assert_boolean(r#"y = ["k": 5]; y["missing"]"#, false);
    assert!(matches!(interpreter_error_of("y = [1]; z = y[5]"),
                     InterpreterError::MissingValue { .. }));
}

#[test]
fn any_key_type_is_accepted() {
    assert_boolean("a = [1]; a[true]", false);
    assert_numeric("a = [1]; a[true] = 2; length(a)", 2.0);
    assert_numeric("a = [1]; a[true] = 2; a[true] = 3; length(a)", 3.0);
    assert_numeric(r#"a = [1]; a["0"] = 2; a[0]"#, 1.0);
}

#[test]
fn invalid_array_use_is_an_error() {
    assert!(matches!(interpreter_error_of("n = 5; n[0]"),
                     InterpreterError::ExpectedArray { .. }));
    assert!(matches!(interpreter_error_of("q[0]"), InterpreterError::UndefinedArray { .. }));
}

#[test]
fn functions_and_calls() {
    assert_numeric("func sq(n) n * n; sq(4)", 16.0);
    assert_numeric("add = func(a, b) a + b; add(2, 3)", 5.0);
    assert_numeric("func(x) { x * 2 }(21)", 42.0);
    assert_numeric("func fact(n) { if n <= 1 { return 1 } return n * fact(n - 1) }; fact(5)",
                   120.0);
    assert_eq!(output_of("println(func() 1)"), "???\n");
}

#[test]
fn return_leaves_loops_inside_a_call() {
    let src = "func first(a) {
                   i = 0
                   while i < length(a) {
                       if a[i] > 2 { return a[i] }
                       i = i + 1
                   }
                   return -1
               }
               first([1, 5, 3]) + first([0])";
    assert_numeric(src, 4.0);
}

#[test]
fn top_level_return_stops_the_program() {
    let mut output = Vec::new();
    let result = run_with_output(r#"println("a"); return 7; println("b")"#, &mut output).unwrap();

    assert_eq!(result, Some(Value::Numeric(7.0)));
    assert_eq!(String::from_utf8(output).unwrap(), "a\n");
}

#[test]
fn return_passes_through_calls_used_as_statements() {
    assert_numeric("func f() { return 1 }; func g() { f(); 2 }; g()", 1.0);
    assert_numeric("func f() { return 1 }; func g() { x = f(); 2 }; g()", 2.0);
    assert_eq!(output_of(r#"func f() { return 1 }; f(); println("after")"#), "");
}

#[test]
fn bare_return_yields_false() {
    assert_boolean("func f() { return; 1 }; f()", false);
}

#[test]
fn calls_see_the_caller_scope() {
    assert_numeric("func f() { y }; y = 5; f()", 5.0);
    assert_numeric("x = 1; func set() { x = 2 }; set(); x", 2.0);
    assert_numeric("x = 1; func g(x) { x = 10 }; g(3); x", 1.0);
    assert!(matches!(interpreter_error_of("func h() { z = 3 }; h(); z + 1"),
                     InterpreterError::UndefinedVariable { .. }));
}

#[test]
fn wrong_function_arity_is_an_error() {
    assert!(matches!(interpreter_error_of("func f(a) a; f(1, 2)"),
                     InterpreterError::ArgumentCountMismatch { expected: 1,
                                                               found: 2,
                                                               .. }));
    assert!(matches!(interpreter_error_of("sin(1, 2)"),
                     InterpreterError::ArgumentCountMismatch { .. }));
}

#[test]
fn control_flow_values() {
    assert_numeric("i = 0; s = 0; while i < 5 { s = s + i; i = i + 1 }; s", 10.0);
    assert_boolean("x = while false {}; x", false);
    assert_boolean("if 1 > 2 { 1 }", false);
    assert_numeric("if true 1 else 2", 1.0);
    assert_numeric("if false 1 else if true 2 else 3", 2.0);
    assert_boolean("{}", false);
    assert_eq!(result_of(""), None);
    assert_eq!(result_of("# only a comment"), None);
}

#[test]
fn conditions_must_be_booleans() {
    assert!(matches!(interpreter_error_of("if 1 { 2 }"),
                     InterpreterError::ExpectedBoolean { .. }));
    assert!(matches!(interpreter_error_of(r#"while "yes" { 1 }"#),
                     InterpreterError::ExpectedBoolean { .. }));
}

#[test]
fn math_builtins() {
    assert_numeric("round(2.5)", 3.0);
    assert_numeric("round(-2.5)", -3.0);
    assert_numeric("min(3, 1)", 1.0);
    assert_numeric("max(3, 1)", 3.0);
    assert_numeric("sin(0)", 0.0);
    assert_numeric("cos(0)", 1.0);
    assert_numeric("tan(0)", 0.0);
    assert_numeric("atan(0)", 0.0);
    assert_numeric("exp(0)", 1.0);
    assert_numeric("log(1)", 0.0);
    assert!(matches!(interpreter_error_of(r#"sin("x")"#),
                     InterpreterError::ExpectedNumber { .. }));
    assert!(matches!(interpreter_error_of(r#"length("x")"#),
                     InterpreterError::ExpectedArray { .. }));
}

#[test]
fn output_builtins() {
    assert_eq!(output_of(r#"print("a"); print(1); print("b")"#), "ab");
    assert_eq!(output_of("println(1.5)"), "1.500000\n");
    assert_eq!(output_of("println(true)"), "true\n");
    assert_eq!(output_of("println([1, 2])"), "ARRAY [len:2]\n");
    assert_eq!(output_of(r#"println("s")"#), "s\n");
    assert_boolean(r#"print("a")"#, false);
}

#[test]
fn every_builtin_checks_its_arity() {
    for name in BUILTIN_FUNCTIONS {
        let error = interpreter_error_of(&format!("{name}()"));
        assert!(matches!(error, InterpreterError::ArgumentCountMismatch { found: 0, .. }),
                "{name}() gave {error}");
    }
}

#[test]
fn unknown_functions_yield_nothing() {
    assert_boolean("nothing(1)", false);
    assert!(matches!(interpreter_error_of("x = nothing(1)"),
                     InterpreterError::MissingValue { .. }));
}

#[test]
fn variables_shadow_builtins() {
    let mut output = Vec::new();
    let result = run_with_output(r#"print = func(s) 1; print("x")"#, &mut output).unwrap();

    assert_eq!(result, Some(Value::Numeric(1.0)));
    assert!(output.is_empty());
}

#[test]
fn identifiers_may_start_with_keywords() {
    assert_numeric("iffy = 2; iffy", 2.0);
    assert_numeric("x = 1 # trailing comment\nx", 1.0);
}

#[test]
fn invalid_assignment_targets_are_errors() {
    assert!(matches!(interpreter_error_of("1 = 2"),
                     InterpreterError::InvalidAssignmentTarget { .. }));
    assert!(matches!(interpreter_error_of("a = b = 1"),
                     InterpreterError::InvalidAssignmentTarget { .. }));
}

#[test]
fn syntax_errors_stop_before_evaluation() {
    let mut output = Vec::new();
    let error = run_with_output("println(1)\nx = (1", &mut output).unwrap_err();

    assert!(matches!(error, Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(output.is_empty());

    assert!(matches!(error_of("x = 1 @ 2"), Error::Parse(ParseError::Lex(_))));
    assert!(matches!(error_of("else 1"), Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn errors_report_their_line() {
    let error = error_of("x = 1\ny = z + 1");

    assert_eq!(error.line(), 2);
    assert_eq!(error.category(), "Interpreter");
    assert_eq!(error.to_string(), "Error on line 2: Undefined variable: z.");
}
