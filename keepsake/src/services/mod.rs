mod family_tree;

pub use family_tree::FamilyTreeBuilder;
