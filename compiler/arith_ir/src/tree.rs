//! Parse tree arena.
//!
//! One [`ParseTree`] holds the syntax of one line. Nodes are stored flat and
//! addressed by [`NodeId`]; each node's children are a contiguous
//! [`ChildRange`] in a shared side list. Operator, keyword and punctuation
//! tokens appear as `NodeKind::Token` leaves interleaved among the operand
//! children, in source order.
//!
//! Trees are built bottom-up with [`TreeBuilder`]: children are pushed before
//! their parent, so a node's id is always greater than every descendant's.

use std::fmt::{self, Write as _};

use arith_stack::ensure_sufficient_stack;

use crate::{Name, Span, StringInterner, TokenKind};

/// Index into a parse tree's node arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Syntactic kind of a parse tree node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// `'return' expression` or `expression '=' expression`.
    Equation,
    /// `term (('+' | '-') term)*`
    Expression,
    /// `factor (('*' | '/') factor)*`
    Term,
    /// `signedAtom ('^' signedAtom)*`
    Factor,
    /// `('+' | '-') signedAtom | atom`
    SignedAtom,
    /// `scientific | variable | '(' expression ')'`
    Atom,
    /// Numeric literal; holds its source text.
    Scientific(Name),
    /// Variable reference; holds its name.
    Variable(Name),
    /// Operator, keyword or punctuation token.
    Token(TokenKind),
}

impl NodeKind {
    /// Grammar rule name, as used in dumps and diagnostics.
    pub fn rule_name(&self) -> &'static str {
        match self {
            NodeKind::Equation => "equation",
            NodeKind::Expression => "expression",
            NodeKind::Term => "term",
            NodeKind::Factor => "factor",
            NodeKind::SignedAtom => "signedAtom",
            NodeKind::Atom => "atom",
            NodeKind::Scientific(_) => "scientific",
            NodeKind::Variable(_) => "variable",
            NodeKind::Token(_) => "token",
        }
    }
}

/// Range of children in the tree's flattened child list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ChildRange {
    pub start: u32,
    pub len: u32,
}

impl ChildRange {
    /// Empty range (leaf nodes).
    pub const EMPTY: ChildRange = ChildRange { start: 0, len: 0 };

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..(self.start as usize + self.len as usize)
    }
}

/// A parse tree node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub children: ChildRange,
}

/// Immutable parse tree for one line.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseTree {
    nodes: Vec<Node>,
    child_lists: Vec<NodeId>,
    root: NodeId,
}

impl ParseTree {
    /// The `Equation` node at the top of the tree.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by id.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    /// Ordered syntax children of a node, tokens included.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.child_lists[self.node(id).children.to_range()]
    }

    /// Whether `id` is the given token.
    pub fn is_token(&self, id: NodeId, token: TokenKind) -> bool {
        self.kind(id) == NodeKind::Token(token)
    }

    /// Source text covered by a node, tokens joined without whitespace.
    pub fn text(&self, id: NodeId, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.collect_text(id, interner, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, interner: &StringInterner, out: &mut String) {
        match self.kind(id) {
            NodeKind::Scientific(text) | NodeKind::Variable(text) => {
                out.push_str(interner.lookup(text));
            }
            NodeKind::Token(TokenKind::Ident(name) | TokenKind::Number(name)) => {
                out.push_str(interner.lookup(name));
            }
            NodeKind::Token(token) => out.push_str(token.display_name()),
            _ => ensure_sufficient_stack(|| {
                for &child in self.children(id) {
                    self.collect_text(child, interner, out);
                }
            }),
        }
    }

    /// Indented dump of the tree, one node per line.
    pub fn dump(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, interner, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, interner: &StringInterner, out: &mut String) {
        let node = self.node(id);
        let indent = depth * 2;
        // Writing to a String cannot fail.
        let _ = match node.kind {
            NodeKind::Scientific(text) | NodeKind::Variable(text) => writeln!(
                out,
                "{:indent$}{} `{}` {}",
                "",
                node.kind.rule_name(),
                interner.lookup(text),
                node.span
            ),
            NodeKind::Token(token) => {
                writeln!(out, "{:indent$}`{}` {}", "", token.display_name(), node.span)
            }
            _ => writeln!(out, "{:indent$}{} {}", "", node.kind.rule_name(), node.span),
        };
        ensure_sufficient_stack(|| {
            for &child in self.children(id) {
                self.dump_node(child, depth + 1, interner, out);
            }
        });
    }
}

/// Bottom-up builder for a [`ParseTree`].
#[derive(Default, Debug)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    child_lists: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a leaf node.
    pub fn leaf(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.alloc(Node {
            kind,
            span,
            children: ChildRange::EMPTY,
        })
    }

    /// Push an interior node over already-pushed children.
    ///
    /// The node's span covers its first through last child.
    pub fn node(&mut self, kind: NodeKind, children: &[NodeId]) -> NodeId {
        let span = match (children.first(), children.last()) {
            (Some(&first), Some(&last)) => self.nodes[first.index()]
                .span
                .merge(self.nodes[last.index()].span),
            _ => Span::DUMMY,
        };
        let start = to_u32(self.child_lists.len());
        self.child_lists.extend_from_slice(children);
        self.alloc(Node {
            kind,
            span,
            children: ChildRange {
                start,
                len: to_u32(children.len()),
            },
        })
    }

    /// Finish the tree with `root` as its top node.
    pub fn finish(self, root: NodeId) -> ParseTree {
        ParseTree {
            nodes: self.nodes,
            child_lists: self.child_lists,
            root,
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(to_u32(self.nodes.len()));
        self.nodes.push(node);
        id
    }
}

/// Arena indices are bounded by line length, which the lexer keeps in `u32`.
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("parse tree exceeds {} entries", u32::MAX))
}
