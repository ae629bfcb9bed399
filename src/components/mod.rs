pub mod force_graph;
pub mod modal;
