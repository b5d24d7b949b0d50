//! Grammar-directed evaluation of one line.
//!
//! The walk is post-order: a node's value is computed from its children's
//! values and then recorded in the [`AttributeTable`]. Each grammar rule has
//! one semantic action:
//!
//! | Rule         | Action                                              |
//! |--------------|-----------------------------------------------------|
//! | `expression` | left fold over `+` / `-`                            |
//! | `term`       | left fold over `*` / `/`                            |
//! | `factor`     | forward the single child                            |
//! | `signedAtom` | forward the single child                            |
//! | `atom`       | forward the child, or unwrap `( expression )`       |
//! | `scientific` | integer value of the literal text                   |
//! | `variable`   | current binding in the [`Environment`]              |
//!
//! The left side of an assignment is walked with value computation
//! suppressed, so `a = 1` never looks `a` up.

use arith_ir::{BinaryOp, Name, NodeId, NodeKind, ParseTree, StringInterner, TokenKind};
use arith_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::unsupported;
use crate::{AttributeTable, Environment, EvalError, Value};

type EvalResult<T, V> = Result<T, EvalError<<V as Value>::Error>>;

/// What evaluating a line did.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<V> {
    /// `name = value` was bound in the environment.
    Assigned { name: Name, value: V },
    /// The line was `return value`.
    Returned(V),
}

impl<V> Outcome<V> {
    /// The returned value, if this was a `return` line.
    pub fn into_returned(self) -> Option<V> {
        match self {
            Outcome::Returned(value) => Some(value),
            Outcome::Assigned { .. } => None,
        }
    }
}

/// Evaluation state for one line.
pub struct EvaluationContext<'a, V: Value> {
    tree: &'a ParseTree,
    env: &'a mut Environment<V>,
    interner: &'a StringInterner,
    attributes: AttributeTable<V>,
}

impl<'a, V: Value> EvaluationContext<'a, V> {
    pub fn new(
        tree: &'a ParseTree,
        env: &'a mut Environment<V>,
        interner: &'a StringInterner,
    ) -> Self {
        EvaluationContext {
            tree,
            env,
            interner,
            attributes: AttributeTable::new(tree.len()),
        }
    }

    /// Values recorded so far.
    pub fn attributes(&self) -> &AttributeTable<V> {
        &self.attributes
    }

    pub fn into_attributes(self) -> AttributeTable<V> {
        self.attributes
    }

    /// Evaluate the line's equation.
    ///
    /// On error the environment is left exactly as it was.
    pub fn evaluate(&mut self) -> EvalResult<Outcome<V>, V> {
        let tree = self.tree;
        let root = tree.root();
        let span = tree.span(root);
        if tree.kind(root) != NodeKind::Equation {
            return Err(unsupported(
                tree.kind(root).rule_name(),
                "a line must be an equation",
                span,
            ));
        }

        match *tree.children(root) {
            [keyword, value] if tree.is_token(keyword, TokenKind::Return) => {
                let value = self.operand(value, "equation")?;
                self.attributes.record(root, value.clone());
                Ok(Outcome::Returned(value))
            }
            [target, eq, value] if tree.is_token(eq, TokenKind::Eq) => {
                self.visit(target, true)?;
                let name = self.assignment_target(target)?;
                let value = self.operand(value, "equation")?;
                trace!(name = self.interner.lookup(name), ?value, "bind");
                self.env.bind(name, value.clone());
                Ok(Outcome::Assigned { name, value })
            }
            _ => Err(unsupported(
                "equation",
                "expected `return expression` or `expression = expression`",
                span,
            )),
        }
    }

    /// Walk the subtree at `id`, recording its value unless `suppress` is set.
    ///
    /// Tokens carry no value. A suppressed walk visits every node but
    /// computes nothing.
    #[tracing::instrument(level = "trace", skip(self))]
    fn visit(&mut self, id: NodeId, suppress: bool) -> EvalResult<Option<V>, V> {
        ensure_sufficient_stack(|| self.visit_inner(id, suppress))
    }

    fn visit_inner(&mut self, id: NodeId, suppress: bool) -> EvalResult<Option<V>, V> {
        let tree = self.tree;
        if matches!(tree.kind(id), NodeKind::Token(_)) {
            return Ok(None);
        }
        if suppress {
            for &child in tree.children(id) {
                self.visit(child, true)?;
            }
            return Ok(None);
        }
        let value = self.reduce(id)?;
        self.attributes.record(id, value.clone());
        Ok(Some(value))
    }

    /// Value of a child that must produce one.
    fn operand(&mut self, id: NodeId, rule: &'static str) -> EvalResult<V, V> {
        match self.visit(id, false)? {
            Some(value) => Ok(value),
            None => Err(unsupported(
                rule,
                format!("expected an operand, found `{}`", self.token_name(id)),
                self.tree.span(id),
            )),
        }
    }

    /// Semantic action for a non-token node.
    fn reduce(&mut self, id: NodeId) -> EvalResult<V, V> {
        let tree = self.tree;
        let span = tree.span(id);
        match tree.kind(id) {
            NodeKind::Expression => self.reduce_chain(id, &[BinaryOp::Add, BinaryOp::Sub]),
            NodeKind::Term => self.reduce_chain(id, &[BinaryOp::Mul, BinaryOp::Div]),
            NodeKind::Factor => {
                if tree.children(id).len() > 1 {
                    return Err(unsupported(
                        "factor",
                        "exponentiation `^` is not evaluated",
                        span,
                    ));
                }
                self.forward(id, "factor")
            }
            NodeKind::SignedAtom => {
                if tree.children(id).len() > 1 {
                    return Err(unsupported(
                        "signedAtom",
                        "a sign prefix is not evaluated",
                        span,
                    ));
                }
                self.forward(id, "signedAtom")
            }
            NodeKind::Atom => match *tree.children(id) {
                [open, inner, close]
                    if tree.is_token(open, TokenKind::LParen)
                        && tree.is_token(close, TokenKind::RParen) =>
                {
                    self.operand(inner, "atom")
                }
                _ => self.forward(id, "atom"),
            },
            NodeKind::Scientific(text) => {
                let text = self.interner.lookup(text);
                text.parse::<i64>()
                    .map(V::from_int)
                    .map_err(|_| EvalError::InvalidLiteral {
                        text: text.to_owned(),
                        span,
                    })
            }
            NodeKind::Variable(name) => match self.env.lookup(name) {
                Some(value) => Ok(value.clone()),
                None => Err(EvalError::UnresolvedVariable {
                    name: self.interner.lookup(name).to_owned(),
                    span,
                }),
            },
            kind @ (NodeKind::Equation | NodeKind::Token(_)) => Err(unsupported(
                kind.rule_name(),
                "not valid inside an expression",
                span,
            )),
        }
    }

    /// Value of a node with exactly one child.
    fn forward(&mut self, id: NodeId, rule: &'static str) -> EvalResult<V, V> {
        let tree = self.tree;
        match *tree.children(id) {
            [only] => self.operand(only, rule),
            _ => Err(unsupported(
                rule,
                format!("expected one child, found {}", tree.children(id).len()),
                tree.span(id),
            )),
        }
    }

    /// Left-to-right fold over `operand (operator operand)*`.
    fn reduce_chain(&mut self, id: NodeId, allowed: &[BinaryOp]) -> EvalResult<V, V> {
        let tree = self.tree;
        let rule = tree.kind(id).rule_name();
        let children = tree.children(id);
        let Some((&first, rest)) = children.split_first() else {
            return Err(unsupported(rule, "no operands", tree.span(id)));
        };

        let mut acc = self.operand(first, rule)?;
        let pairs = rest.chunks_exact(2);
        if let [dangling] = *pairs.remainder() {
            return Err(unsupported(
                rule,
                "operator without a right operand",
                tree.span(dangling),
            ));
        }

        for pair in pairs {
            let (op_id, rhs_id) = (pair[0], pair[1]);
            let op = match tree.kind(op_id) {
                NodeKind::Token(token) => BinaryOp::from_token(token),
                _ => None,
            }
            .filter(|op| allowed.contains(op))
            .ok_or_else(|| {
                unsupported(
                    rule,
                    format!("`{}` is not an operator here", self.token_name(op_id)),
                    tree.span(op_id),
                )
            })?;
            let rhs = self.operand(rhs_id, rule)?;
            trace!(%op, ?acc, ?rhs, "fold");
            acc = acc
                .binary(op, &rhs)
                .map_err(|error| EvalError::Arithmetic {
                    error,
                    span: tree.span(first).merge(tree.span(rhs_id)),
                })?;
        }
        Ok(acc)
    }

    /// Name bound by the left side of `=`.
    ///
    /// Read structurally: the target must be a chain of single-child rules
    /// ending in a variable.
    fn assignment_target(&self, target: NodeId) -> EvalResult<Name, V> {
        let mut id = target;
        loop {
            match self.tree.kind(id) {
                NodeKind::Variable(name) => return Ok(name),
                NodeKind::Expression
                | NodeKind::Term
                | NodeKind::Factor
                | NodeKind::SignedAtom
                | NodeKind::Atom => match *self.tree.children(id) {
                    [only] => id = only,
                    _ => return Err(self.bad_target(target)),
                },
                _ => return Err(self.bad_target(target)),
            }
        }
    }

    fn bad_target(&self, target: NodeId) -> EvalError<V::Error> {
        unsupported(
            "equation",
            format!(
                "cannot assign to `{}`",
                self.tree.text(target, self.interner)
            ),
            self.tree.span(target),
        )
    }

    fn token_name(&self, id: NodeId) -> &'static str {
        match self.tree.kind(id) {
            NodeKind::Token(token) => token.display_name(),
            kind => kind.rule_name(),
        }
    }
}

/// Evaluate one line against `env`.
///
/// An assignment binds its target on success; a `return` line leaves the
/// environment untouched. A failed line changes nothing.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate<V: Value>(
    tree: &ParseTree,
    env: &mut Environment<V>,
    interner: &StringInterner,
) -> EvalResult<Outcome<V>, V> {
    EvaluationContext::new(tree, env, interner).evaluate()
}

#[cfg(test)]
mod tests;
