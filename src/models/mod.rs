pub mod preorder;

pub use preorder::{Preorder, Stats};
