pub(crate) mod builder;
pub(crate) mod iter;
pub(crate) mod table;

pub use builder::TableBuilder;
pub use iter::Iter;
pub use table::ChainedHashTable;
