// Path Planning algorithms module

pub mod search_node;
pub mod frontier;
pub mod explored;
pub mod a_star;

pub use search_node::*;
pub use frontier::*;
pub use explored::*;
pub use a_star::*;
