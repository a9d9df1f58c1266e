pub mod bubble;
pub mod cocktail;
pub mod gnome;
pub mod insertion;
pub mod merge;
pub mod tree;
