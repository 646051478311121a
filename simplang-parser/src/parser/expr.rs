use super::*;
use crate::ast::{BinaryOp, UnaryOp};

impl<'c, 'a> Parser<'c, 'a> {
    /* Expressions */
    /// Parses any expression.
    /// A conditional has the lowest precedence, anything else goes through [`Self::parse_expr_bp`] with `min_bp = 0`.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        match self.current_token {
            Token::If => self.parse_if_expr(),
            _ => self.parse_expr_bp(0), // 0 to accept any expression
        }
    }

    /// Parses `if (condition) consequent else alternative`.
    fn parse_if_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect(Token::If, Production::Expression)?;
        self.expect(Token::OpenParen, Production::Condition)?;
        let condition = self.parse_expr()?;
        self.expect(Token::CloseParen, Production::ClosingParen)?;
        let consequent = self.parse_expr()?;
        self.expect(Token::Else, Production::Else)?;
        let alternative = self.parse_expr()?;

        Ok(Expr::If {
            condition: Box::new(condition),
            consequent: Box::new(consequent),
            alternative: Box::new(alternative),
        })
    }

    /// Parses an expression with the specified `min_bp`.
    /// To parse any expression use, [`Self::parse_expr`].
    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary_expr()?;

        loop {
            let op = match BinaryOp::from_token(&self.current_token) {
                Some(op) => op,
                None => break, // not a valid binop, stop parsing
            };
            let (l_bp, r_bp) = op.binding_power();
            if l_bp < min_bp {
                break; // less than the min_bp, stop parsing
            }

            // self.current_token is a valid binop
            self.next()?;

            let rhs = self.parse_expr_bp(r_bp)?;

            lhs = Expr::Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            }
        }

        Ok(lhs)
    }

    /// Parses a chain of prefix operators followed by a primary expression.
    fn parse_unary_expr(&mut self) -> Result<Expr, ParseError> {
        match UnaryOp::from_token(&self.current_token) {
            Some(op) => {
                self.next()?;
                let arg = self.parse_unary_expr()?;
                Ok(Expr::Unary {
                    op,
                    arg: Box::new(arg),
                })
            }
            None => self.parse_primary_expr(),
        }
    }

    /// Parses a primary (atom) expression.
    fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        match self.current_token {
            Token::Integer(val) => {
                self.next()?;
                Ok(Expr::IntegerLit(val))
            }
            Token::Identifier(ref ident) => {
                let ident = ident.clone();
                self.next()?;
                Ok(Expr::Identifier(ident))
            }
            Token::OpenParen => {
                self.next()?;
                let expr = self.parse_expr()?;
                self.expect(Token::CloseParen, Production::ClosingParen)?;
                Ok(expr)
            }
            _ => Err(self.unexpected(Production::Expression)),
        }
    }
}
