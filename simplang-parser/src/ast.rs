use crate::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLit(i64),
    /// An identifier (e.g. `foo`). Parsed but never bound to a value.
    Identifier(String),
    /// A conditional expression (e.g. `if (x) 1 else 2`).
    If {
        condition: Box<Expr>,
        consequent: Box<Expr>,
        alternative: Box<Expr>,
    },
    /// A prefix expression (e.g. `-1`).
    Unary { op: UnaryOp, arg: Box<Expr> },
    /// A binary expression (e.g. `1+1`).
    Binary {
        lhs: Box<Expr>,
        op: BinaryOp,
        rhs: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
    /// `~`
    BitNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl UnaryOp {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Minus => Some(UnaryOp::Neg),
            Token::LogicalNot => Some(UnaryOp::Not),
            Token::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }
}

impl BinaryOp {
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            Token::Asterisk => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            Token::Percent => Some(BinaryOp::Rem),
            Token::EqualsEquals => Some(BinaryOp::Eq),
            Token::NotEquals => Some(BinaryOp::Ne),
            Token::LessThan => Some(BinaryOp::Lt),
            Token::LessThanEquals => Some(BinaryOp::Le),
            Token::GreaterThan => Some(BinaryOp::Gt),
            Token::GreaterThanEquals => Some(BinaryOp::Ge),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }

    /// Returns the binding power as `(left, right)`.
    /// Binding power `0` and `1` is reserved for accepting any expression.
    /// Every operator is left associative, so `left < right`.
    pub fn binding_power(self) -> (u8, u8) {
        match self {
            /* Equality */
            BinaryOp::Eq | BinaryOp::Ne => (4, 5),
            /* Ordering */
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => (6, 7),
            /* Additive */
            BinaryOp::Add | BinaryOp::Sub => (8, 9),
            /* Multiplicative */
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => (10, 11),
        }
    }
}
