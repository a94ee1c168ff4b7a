mod assign_sort;
mod comparative_sort;
mod index_sort;

pub use assign_sort::*;
pub use comparative_sort::*;
pub use index_sort::*;
