mod check;
pub mod store;
pub mod words;

pub use words::{normalize, Trie};

#[doc(hidden)]
pub use log as __log;
