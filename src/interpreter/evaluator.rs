use tracing::trace;
use crate::interpreter::ast::{Node, NodeKind};
use crate::interpreter::symbol_table::SymbolTable;


/// Walks a tree against a symbol table. Evaluation cannot fail: unknown
/// variables read as 0, arithmetic wraps and `Error` nodes do nothing.
pub struct Evaluator<'table> {
    symbols: &'table mut SymbolTable,
}

impl<'table> Evaluator<'table> {
    pub fn new(symbols: &'table mut SymbolTable) -> Evaluator<'table> {
        Evaluator { symbols }
    }

    /// Expressions yield their value, instructions yield 0.
    pub fn evaluate(&mut self, node: &Node<'_>) -> i64 {
        match &node.kind {
            NodeKind::Error => 0,
            NodeKind::IntLiteral(value) => *value,
            NodeKind::VarRef(name) => self.symbols.get_or_insert(name),
            NodeKind::BinaryArith { op, left, right } => {
                let left = self.evaluate(left);
                let right = self.evaluate(right);

                op.apply(left, right)
            },
            NodeKind::Assign { name, value } => {
                let value = self.evaluate(value);
                self.symbols.update(name, value);

                0
            },
            NodeKind::If { condition, then_branch, else_branch } => {
                if self.is_true(condition) {
                    self.evaluate(then_branch);
                } else {
                    self.evaluate(else_branch);
                }

                0
            },
            NodeKind::While { condition, body } => {
                while self.is_true(condition) {
                    trace!(pos = %node.pos, "loop iteration");
                    self.evaluate(body);
                }

                0
            },
            NodeKind::InstrList(items) => {
                for item in items {
                    self.evaluate(item);
                }

                0
            },
        }
    }

    fn is_true(&mut self, condition: &Node<'_>) -> bool {
        self.evaluate(condition) > 0
    }
}
