//! Segment tree with lazy range-add and range-set over sum, min or max.
//!
//! ```
//! use lazy_segtree::{Aggregate, LazySegmentTree};
//!
//! let mut st = LazySegmentTree::new(&[1i64; 8], Aggregate::Sum).unwrap();
//! st.add(2, 5, 3).unwrap();
//! assert_eq!(st.query(0, 7).unwrap(), 20);
//! st.set(0, 3, 0).unwrap();
//! assert_eq!(st.query(0, 7).unwrap(), 10);
//! ```

pub mod error;
pub mod groups;

mod lazy_segment_tree;

pub use error::{Error, Result};
pub use groups::{Aggregate, Elem};
pub use lazy_segment_tree::{LazySegmentTree, Update};
