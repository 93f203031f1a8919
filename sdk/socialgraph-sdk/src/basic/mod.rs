pub mod actions;
pub mod graph;
