use super::*;
use pretty_assertions::assert_eq;
use crate::interpreter::program::Program;

fn render(source: &str, recover: bool) -> String {
    let program = Program::parse(source, recover).expect("program should parse");
    let mut out = Vec::new();
    program.render(&mut out).unwrap();

    String::from_utf8(out).unwrap()
}

fn dump(source: &str, recover: bool) -> String {
    let program = Program::parse(source, recover).expect("program should parse");
    let mut out = Vec::new();
    program.dump(&mut out).unwrap();

    String::from_utf8(out).unwrap()
}

mod python {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    pub fn test_while() {
        let source = "(( set i 3 )( set result 0 )( while i (( set result ( add result i ))( set i ( sub i 1 )))))";

        assert_eq!(render(source, false), "Python:
i = 3
result = 0
while i > 0:
  result = (result + i)
  i = (i - 1)

");
    }

    #[test]
    pub fn test_if_with_empty_else() {
        assert_eq!(render("(( set x 5 )( if x (( set result ( mul x 2 ) ))( )))", false), "Python:
x = 5
if x > 0:
  result = x * 2
else:
  pass

");
    }

    #[test]
    pub fn test_nesting() {
        assert_eq!(render("((if a ((while b ((set b (sub b 1)))))((set c 1))))", false), "Python:
if a > 0:
  while b > 0:
    b = (b - 1)

else:
  c = 1

");
    }

    #[test]
    pub fn test_mul_is_not_parenthesized() {
        assert_eq!(render("((set r (mul (add a 1) (mul b c))))", false), "Python:\nr = (a + 1) * b * c\n");
    }

    #[test]
    pub fn test_empty_program() {
        assert_eq!(render("()", false), "Python:\npass\n");
    }

    #[test]
    pub fn test_error_node() {
        assert_eq!(render("(( set )( set x 1 ))", true), "Python:\nassert false\nx = 1\n");
    }

    #[test]
    pub fn test_custom_indentation() {
        let program = Program::parse("((while x ((set x 0))))", false).unwrap();
        let mut out = Vec::new();
        PythonWriter::new(String::from("\t")).write_node(program.root(), 1, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "\twhile x > 0:\n\t\tx = 0\n\n");
    }

    #[test]
    pub fn test_idempotent() {
        let source = "(( set x 5 )( if x (( set result 1 ))(( while x (( set x ( sub x 1 )))))))";

        assert_eq!(render(source, false), render(source, false));
    }
}

mod tree {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    pub fn test_connectors() {
        assert_eq!(dump("((set x (add x 1)))", false), "Ast:
 +--InstrList[ln: 1, col: 1]:
 |  +--Assign[x, ln: 1, col: 3]:
 |  |  +--Add[ln: 1, col: 10]:
 |  |  |  +--VarRef[x, ln: 1, col: 14]
 |  |  |  +--IntLiteral[1, ln: 1, col: 16]
");
    }

    #[test]
    pub fn test_control_flow() {
        assert_eq!(dump("((if c (\n(while 0 ()))((set y (mul 2 3)))))", false), "Ast:
 +--InstrList[ln: 1, col: 1]:
 |  +--If[ln: 1, col: 3]:
 |  |  +--VarRef[c, ln: 1, col: 6]
 |  |  +--InstrList[ln: 1, col: 8]:
 |  |  |  +--While[ln: 2, col: 2]:
 |  |  |  |  +--IntLiteral[0, ln: 2, col: 8]
 |  |  |  |  +--InstrList[ln: 2, col: 10]:
 |  |  +--InstrList[ln: 2, col: 14]:
 |  |  |  +--Assign[y, ln: 2, col: 16]:
 |  |  |  |  +--Mul[ln: 2, col: 23]:
 |  |  |  |  |  +--IntLiteral[2, ln: 2, col: 27]
 |  |  |  |  |  +--IntLiteral[3, ln: 2, col: 29]
");
    }

    #[test]
    pub fn test_error_node() {
        assert_eq!(dump("(( set ))", true), "Ast:
 +--InstrList[ln: 1, col: 1]:
 |  +--Error[ln: 1, col: 4]
");
    }

    #[test]
    pub fn test_empty_program() {
        assert_eq!(dump("()", false), "Ast:\n +--InstrList[ln: 1, col: 1]:\n");
    }

    #[test]
    pub fn test_idempotent() {
        let source = "(( set i 3 )( while i (( set i ( sub i 1 )))))";

        assert_eq!(dump(source, false), dump(source, false));
    }
}
