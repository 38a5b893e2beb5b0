#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

mod array_index;
pub use array_index::{ArrayIndex, NewAxis};

mod error;
pub use error::{Error, Result, ShapeError};

mod index_expr;
pub use index_expr::IndexExpr;

mod list_group;

mod resolve;
pub use resolve::shape_after_index;

mod routine;

mod slice;
pub use slice::Slice;
