//! Arith IR - shared data structures for the Arith toolchain.
//!
//! This crate contains the types every phase agrees on:
//! - Spans for source locations within a line
//! - Names for interned identifiers and literal text
//! - Tokens and `TokenList` for lexer output
//! - The parse tree arena (`ParseTree`, `NodeId`, `NodeKind`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier and number text → `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, nodes live in one arena and are
//!   addressed by `NodeId(u32)`; children are contiguous ranges in a side list

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod op;
mod span;
mod token;
pub mod tree;

pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use op::BinaryOp;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use tree::{ChildRange, Node, NodeId, NodeKind, ParseTree, TreeBuilder};
