mod access_selection;
mod access_tree;

pub use access_selection::AccessSelection;
pub use access_tree::AccessTree;
