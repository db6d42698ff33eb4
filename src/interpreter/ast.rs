use std::fmt::{Debug, Display, Formatter};
use crate::interpreter::lexer::TokenPos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

impl ArithOp {
    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            ArithOp::Add => left.wrapping_add(right),
            ArithOp::Sub => left.wrapping_sub(right),
            ArithOp::Mul => left.wrapping_mul(right),
        }
    }
}

impl Display for ArithOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithOp::Add => write!(f, "add"),
            ArithOp::Sub => write!(f, "sub"),
            ArithOp::Mul => write!(f, "mul"),
        }
    }
}

/// A node of the syntax tree. Names borrow from the source buffer, so the
/// tree cannot outlive it.
#[derive(Clone, PartialEq, Eq)]
pub struct Node<'source> {
    pub pos: TokenPos,
    pub kind: NodeKind<'source>,
}

#[derive(Clone, PartialEq, Eq)]
pub enum NodeKind<'source> {
    /// Placeholder for a construct that failed to parse.
    Error,

    IntLiteral(i64),
    VarRef(&'source str),

    BinaryArith {
        op: ArithOp,
        left: Box<Node<'source>>,
        right: Box<Node<'source>>,
    },

    Assign {
        name: &'source str,
        value: Box<Node<'source>>,
    },
    If {
        condition: Box<Node<'source>>,
        then_branch: Box<Node<'source>>,
        else_branch: Box<Node<'source>>,
    },
    While {
        condition: Box<Node<'source>>,
        body: Box<Node<'source>>,
    },

    InstrList(Vec<Node<'source>>),
}

impl<'source> Node<'source> {
    pub fn new(kind: NodeKind<'source>, pos: TokenPos) -> Node<'source> {
        Node { pos, kind }
    }

    pub fn error(pos: TokenPos) -> Node<'source> {
        Node::new(NodeKind::Error, pos)
    }

    /// Number of `Error` nodes in this subtree.
    pub fn error_count(&self) -> usize {
        match &self.kind {
            NodeKind::Error => 1,
            NodeKind::IntLiteral(_) | NodeKind::VarRef(_) => 0,
            NodeKind::BinaryArith { left, right, .. } => left.error_count() + right.error_count(),
            NodeKind::Assign { value, .. } => value.error_count(),
            NodeKind::If { condition, then_branch, else_branch } =>
                condition.error_count() + then_branch.error_count() + else_branch.error_count(),
            NodeKind::While { condition, body } => condition.error_count() + body.error_count(),
            NodeKind::InstrList(items) => items.iter().map(Node::error_count).sum(),
        }
    }
}

// Compact s-expression form, mostly useful in test failure output
impl Debug for Node<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            NodeKind::Error => write!(f, "Error"),
            NodeKind::IntLiteral(value) => write!(f, "{}", value),
            NodeKind::VarRef(name) => write!(f, "{}", name),
            NodeKind::BinaryArith { op, left, right } => write!(f, "({} {:?} {:?})", op, left, right),
            NodeKind::Assign { name, value } => write!(f, "(set {} {:?})", name, value),
            NodeKind::If { condition, then_branch, else_branch } =>
                write!(f, "(if {:?} {:?} {:?})", condition, then_branch, else_branch),
            NodeKind::While { condition, body } => write!(f, "(while {:?} {:?})", condition, body),
            NodeKind::InstrList(items) => write!(f, "({})", items.iter()
                .map(|item| format!("{:?}", item))
                .collect::<Vec<String>>().join("")),
        }
    }
}
