use std::io::Cursor;
use pretty_assertions::assert_eq;
use rstest::rstest;
use paren_lang::{interpret, run_interactive, Config};
use paren_lang::error::{Error, ParseError};
use paren_lang::interpreter::program::Program;
use paren_lang::interpreter::symbol_table::SymbolTable;

fn output(source: &str, config: &Config) -> (Result<i64, Error>, String) {
    let mut out = Vec::new();
    let result = interpret(source, config, &mut out);

    (result, String::from_utf8(out).unwrap())
}

fn recovering() -> Config {
    Config { try_recovery_from_syntax_errors: true, ..Config::default() }
}

#[rstest]
#[case("(( set result x ))", 0)]
#[case("(( set x 5 )( set result x ))", 5)]
#[case("(( set x 3 )( set y 4 )( set result ( add x y )))", 7)]
#[case("(( set x 5 )( if x (( set result 1 ))(( set result 0 ))))", 1)]
#[case("(( set i 3 )( set result 0 )( while i (( set result ( add result i ))( set i ( sub i 1 )))))", 6)]
#[case("(( set result ( mul 4611686018427387904 4 )))", 0)]
#[case("(( set result ( sub 0 ( add 9223372036854775807 2 ))))", 9223372036854775807)]
#[case("()", 0)]
#[case("(( set x 2 )( set x ( mul x x ))( set x ( mul x x ))( set result ( sub x 1 )))", 15)]
fn evaluates_result(#[case] source: &str, #[case] expected: i64) {
    let (result, out) = output(source, &Config::default());

    assert_eq!(result.unwrap(), expected);
    assert_eq!(out, format!("\n-> {}\n", expected));
}

#[test]
fn result_is_read_from_symbol_table() {
    let program = Program::parse("(( set result 9 )( set other 1 ))", false).unwrap();
    let mut symbols = SymbolTable::new();
    symbols.update("result", 100);

    assert_eq!(program.evaluate(&mut symbols), 9);
    assert_eq!(symbols.get("other"), Some(1));
}

#[test]
fn fail_fast_writes_nothing() {
    let (result, out) = output("(( set ))", &Config::default());

    assert!(matches!(result, Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert_eq!(out, "");
}

#[test]
fn recovery_still_evaluates() {
    let config = Config { dump_ast: true, ..recovering() };
    let (result, out) = output("(( set ))", &config);

    assert_eq!(result.unwrap(), 0);
    assert_eq!(out, "
Ast:
 +--InstrList[ln: 1, col: 1]:
 |  +--Error[ln: 1, col: 4]

-> 0
");
}

#[test]
fn all_outputs_in_order() {
    let config = Config { dump_ast: true, dump_sym_table: true, pythonify: true, ..Config::default() };
    let (result, out) = output("(( set x 3 )( set result ( add x 1 )))", &config);

    assert_eq!(result.unwrap(), 4);
    assert_eq!(out, "
Ast:
 +--InstrList[ln: 1, col: 1]:
 |  +--Assign[x, ln: 1, col: 4]:
 |  |  +--IntLiteral[3, ln: 1, col: 10]
 |  +--Assign[result, ln: 1, col: 15]:
 |  |  +--Add[ln: 1, col: 28]:
 |  |  |  +--VarRef[x, ln: 1, col: 32]
 |  |  |  +--IntLiteral[1, ln: 1, col: 34]

SymTable:
 result: 4
 x: 3

Python:
x = 3
result = (x + 1)

-> 4
");
}

#[test]
fn interactive_mode_splits_on_semicolons() {
    let mut input = Cursor::new("(( set result 1 ));\n(( set result ( add 2 3 ) ));\n");
    let mut out = Vec::new();

    run_interactive(&Config::default(), &mut input, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "\n-> 1\n\n-> 5\n");
}

#[test]
fn interactive_mode_runs_unterminated_last_program() {
    let mut input = Cursor::new("(( set result 2 ));(( set result 3 ))");
    let mut out = Vec::new();

    run_interactive(&Config::default(), &mut input, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "\n-> 2\n\n-> 3\n");
}

#[test]
fn interactive_mode_stops_on_fail_fast_error() {
    let mut input = Cursor::new("(( set result 1 ));(( set ));(( set result 3 ));");
    let mut out = Vec::new();

    let result = run_interactive(&Config::default(), &mut input, &mut out);

    assert!(matches!(result, Err(Error::Parse(_))));
    assert_eq!(String::from_utf8(out).unwrap(), "\n-> 1\n");
}

#[test]
fn interactive_mode_keeps_going_when_recovering() {
    let mut input = Cursor::new("(( set ));(( set result 3 ));");
    let mut out = Vec::new();

    run_interactive(&recovering(), &mut input, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "\n-> 0\n\n-> 3\n");
}
