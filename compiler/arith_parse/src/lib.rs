//! Recursive descent parser for Arith.
//!
//! Produces one [`ParseTree`] per line. The tree mirrors the grammar rule
//! for rule, keeping every operator and punctuation token as a leaf, so the
//! evaluator can dispatch on rule and child shape alone:
//!
//! ```text
//! equation   : 'return' expression | expression '=' expression ;
//! expression : term (('+' | '-') term)* ;
//! term       : factor (('*' | '/') factor)* ;
//! factor     : signedAtom ('^' signedAtom)* ;
//! signedAtom : ('+' | '-') signedAtom | atom ;
//! atom       : scientific | variable | '(' expression ')' ;
//! ```

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::ParseError;

use arith_ir::{NodeId, NodeKind, ParseTree, Span, StringInterner, TokenKind, TokenList, TreeBuilder};
use arith_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    builder: TreeBuilder,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a non-empty, `Eof`-terminated token list.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            builder: TreeBuilder::new(),
        }
    }

    /// Parse a whole line as an equation.
    pub fn parse_line(mut self) -> Result<ParseTree, ParseError> {
        let root = self.equation()?;
        if !self.cursor.is_at_end() {
            return Err(ParseError::trailing_input(
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        Ok(self.builder.finish(root))
    }

    /// Push the current token as a leaf and advance past it.
    fn token_leaf(&mut self) -> NodeId {
        let token = self.cursor.advance();
        self.builder.leaf(NodeKind::Token(token.kind), token.span)
    }

    /// equation : 'return' expression | expression '=' expression
    fn equation(&mut self) -> Result<NodeId, ParseError> {
        if self.cursor.check(TokenKind::Return) {
            let keyword = self.token_leaf();
            let value = self.expression()?;
            return Ok(self.builder.node(NodeKind::Equation, &[keyword, value]));
        }

        let target = self.expression()?;
        if !self.cursor.check(TokenKind::Eq) {
            return Err(ParseError::unexpected_token(
                "`=`",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        let eq = self.token_leaf();
        let value = self.expression()?;
        Ok(self.builder.node(NodeKind::Equation, &[target, eq, value]))
    }

    /// expression : term (('+' | '-') term)*
    fn expression(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| {
            self.operator_chain(
                NodeKind::Expression,
                &[TokenKind::Plus, TokenKind::Minus],
                Self::term,
            )
        })
    }

    /// term : factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<NodeId, ParseError> {
        self.operator_chain(
            NodeKind::Term,
            &[TokenKind::Star, TokenKind::Slash],
            Self::factor,
        )
    }

    /// factor : signedAtom ('^' signedAtom)*
    fn factor(&mut self) -> Result<NodeId, ParseError> {
        self.operator_chain(NodeKind::Factor, &[TokenKind::Caret], Self::signed_atom)
    }

    /// Shared shape of the left-associative rules: an operand followed by
    /// any number of `(operator, operand)` pairs, all kept as children.
    fn operator_chain(
        &mut self,
        kind: NodeKind,
        operators: &[TokenKind],
        mut operand: impl FnMut(&mut Self) -> Result<NodeId, ParseError>,
    ) -> Result<NodeId, ParseError> {
        let mut children = vec![operand(self)?];
        while operators.contains(&self.cursor.current_kind()) {
            children.push(self.token_leaf());
            children.push(operand(self)?);
        }
        Ok(self.builder.node(kind, &children))
    }

    /// signedAtom : ('+' | '-') signedAtom | atom
    fn signed_atom(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| {
            if matches!(self.cursor.current_kind(), TokenKind::Plus | TokenKind::Minus) {
                let sign = self.token_leaf();
                let inner = self.signed_atom()?;
                return Ok(self.builder.node(NodeKind::SignedAtom, &[sign, inner]));
            }
            let atom = self.atom()?;
            Ok(self.builder.node(NodeKind::SignedAtom, &[atom]))
        })
    }

    /// atom : scientific | variable | '(' expression ')'
    fn atom(&mut self) -> Result<NodeId, ParseError> {
        let token = *self.cursor.current();
        trace!(?token, "atom");
        match token.kind {
            TokenKind::Number(text) => {
                self.cursor.advance();
                let literal = self.builder.leaf(NodeKind::Scientific(text), token.span);
                Ok(self.builder.node(NodeKind::Atom, &[literal]))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                let variable = self.builder.leaf(NodeKind::Variable(name), token.span);
                Ok(self.builder.node(NodeKind::Atom, &[variable]))
            }
            TokenKind::LParen => {
                let open = self.token_leaf();
                let inner = self.expression()?;
                if !self.cursor.check(TokenKind::RParen) {
                    return Err(ParseError::unclosed_delimiter(
                        token.span,
                        self.cursor.current_kind(),
                        self.cursor.current_span(),
                    ));
                }
                let close = self.token_leaf();
                Ok(self.builder.node(NodeKind::Atom, &[open, inner, close]))
            }
            found => Err(ParseError::expected_expression(found, token.span)),
        }
    }
}

/// Parse one line's tokens into a tree.
///
/// Invalid characters are reported before any grammar error on the line.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(tokens: &TokenList) -> Result<ParseTree, ParseError> {
    if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Error) {
        return Err(ParseError::invalid_character(bad.span));
    }
    if tokens.is_empty() {
        return Err(ParseError::expected_expression(TokenKind::Eof, Span::DUMMY));
    }
    let tree = Parser::new(tokens).parse_line()?;
    debug!(nodes = tree.len(), "parsed line");
    Ok(tree)
}

/// Lex and parse one line of source text.
pub fn parse_source(source: &str, interner: &StringInterner) -> Result<ParseTree, ParseError> {
    let tokens = arith_lexer::lex(source, interner);
    parse(&tokens)
}
