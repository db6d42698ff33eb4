use std::io::Write;
use crate::interpreter::ast::{ArithOp, Node, NodeKind};

#[cfg(test)]
mod tests;

/// Renders a tree as an equivalent indentation-based program, for reading
/// only. Statements start at `depth` levels of indentation.
pub struct PythonWriter {
    indentation: String,
}

impl PythonWriter {
    pub fn new(indentation: String) -> PythonWriter {
        PythonWriter { indentation }
    }

    pub fn write_node(&self, node: &Node<'_>, depth: u16, out: &mut impl Write) -> Result<(), std::io::Error> {
        match &node.kind {
            NodeKind::Error => {
                self.indent(depth, out)?;
                writeln!(out, "assert false")
            },
            NodeKind::IntLiteral(value) => write!(out, "{}", value),
            NodeKind::VarRef(name) => write!(out, "{}", name),
            NodeKind::BinaryArith { op, left, right } => self.write_arith(*op, left, right, depth, out),
            NodeKind::Assign { name, value } => {
                self.indent(depth, out)?;
                write!(out, "{} = ", name)?;
                self.write_node(value, depth, out)?;
                writeln!(out)
            },
            NodeKind::If { condition, then_branch, else_branch } => {
                self.indent(depth, out)?;
                write!(out, "if ")?;
                self.write_node(condition, depth, out)?;
                writeln!(out, " > 0:")?;
                self.write_node(then_branch, depth + 1, out)?;

                self.indent(depth, out)?;
                writeln!(out, "else:")?;
                self.write_node(else_branch, depth + 1, out)?;
                writeln!(out)
            },
            NodeKind::While { condition, body } => {
                self.indent(depth, out)?;
                write!(out, "while ")?;
                self.write_node(condition, depth, out)?;
                writeln!(out, " > 0:")?;
                self.write_node(body, depth + 1, out)?;
                writeln!(out)
            },
            NodeKind::InstrList(items) => {
                for item in items {
                    self.write_node(item, depth, out)?;
                }

                if items.is_empty() {
                    self.indent(depth, out)?;
                    writeln!(out, "pass")?;
                }

                Ok(())
            },
        }
    }

    // `mul` is written without parentheses, unlike `add` and `sub`
    fn write_arith(&self, op: ArithOp, left: &Node<'_>, right: &Node<'_>, depth: u16, out: &mut impl Write) -> Result<(), std::io::Error> {
        match op {
            ArithOp::Add | ArithOp::Sub => {
                write!(out, "(")?;
                self.write_node(left, depth, out)?;
                write!(out, " {} ", if op == ArithOp::Add { '+' } else { '-' })?;
                self.write_node(right, depth, out)?;
                write!(out, ")")
            },
            ArithOp::Mul => {
                self.write_node(left, depth, out)?;
                write!(out, " * ")?;
                self.write_node(right, depth, out)
            },
        }
    }

    fn indent(&self, depth: u16, out: &mut impl Write) -> Result<(), std::io::Error> {
        write!(out, "{}", self.indentation.repeat(depth as usize))
    }
}

impl Default for PythonWriter {
    fn default() -> Self {
        PythonWriter::new(String::from("  "))
    }
}

/// Writes one line per node, children below their parent with `|  ` and
/// `+--` connectors.
#[derive(Default)]
pub struct TreeWriter;

impl TreeWriter {
    pub fn new() -> TreeWriter {
        TreeWriter
    }

    pub fn write_node(&self, node: &Node<'_>, depth: u16, out: &mut impl Write) -> Result<(), std::io::Error> {
        self.write_connector(depth, out)?;

        match &node.kind {
            NodeKind::Error => writeln!(out, "Error[{}]", node.pos),
            NodeKind::IntLiteral(value) => writeln!(out, "IntLiteral[{}, {}]", value, node.pos),
            NodeKind::VarRef(name) => writeln!(out, "VarRef[{}, {}]", name, node.pos),
            NodeKind::BinaryArith { op, left, right } => {
                let label = match op {
                    ArithOp::Add => "Add",
                    ArithOp::Sub => "Sub",
                    ArithOp::Mul => "Mul",
                };

                writeln!(out, "{}[{}]:", label, node.pos)?;
                self.write_node(left, depth + 1, out)?;
                self.write_node(right, depth + 1, out)
            },
            NodeKind::Assign { name, value } => {
                writeln!(out, "Assign[{}, {}]:", name, node.pos)?;
                self.write_node(value, depth + 1, out)
            },
            NodeKind::If { condition, then_branch, else_branch } => {
                writeln!(out, "If[{}]:", node.pos)?;
                self.write_node(condition, depth + 1, out)?;
                self.write_node(then_branch, depth + 1, out)?;
                self.write_node(else_branch, depth + 1, out)
            },
            NodeKind::While { condition, body } => {
                writeln!(out, "While[{}]:", node.pos)?;
                self.write_node(condition, depth + 1, out)?;
                self.write_node(body, depth + 1, out)
            },
            NodeKind::InstrList(items) => {
                writeln!(out, "InstrList[{}]:", node.pos)?;

                for item in items {
                    self.write_node(item, depth + 1, out)?;
                }

                Ok(())
            },
        }
    }

    fn write_connector(&self, depth: u16, out: &mut impl Write) -> Result<(), std::io::Error> {
        write!(out, " {}+--", "|  ".repeat(depth.saturating_sub(1) as usize))
    }
}
