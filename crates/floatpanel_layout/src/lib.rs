//! Floatpanel Layout
//!
//! Places a view's subviews with Taffy. Views describe each subview with a
//! [`LayoutStyle`] (edge pins, fixed sizes, flex alignment), attach the nodes
//! into a [`LayoutTree`], and read back frames after each layout pass.
//!
//! # Example
//!
//! ```rust
//! use floatpanel_layout::{LayoutStyle, LayoutTree};
//! use taffy::prelude::{AvailableSpace, Size};
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.create_node(LayoutStyle::new().size(300.0, 500.0));
//! let fill = tree.create_node(LayoutStyle::new().absolute().pin_edges(0.0));
//! tree.add_child(root, fill);
//!
//! tree.compute_layout(root, Size {
//!     width: AvailableSpace::Definite(300.0),
//!     height: AvailableSpace::Definite(500.0),
//! });
//! assert_eq!(tree.root_bounds(fill).unwrap().height, 500.0);
//! ```

pub mod element;
pub mod style;
pub mod tree;

pub use element::ElementBounds;
pub use style::LayoutStyle;
pub use tree::{LayoutNodeId, LayoutTree};
