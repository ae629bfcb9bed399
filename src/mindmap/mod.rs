//! Data pipeline behind the mind map: keyword prediction, graph
//! construction and dataset loading.
//!
//! Nothing in here touches the DOM apart from the fetch in [`loader`], so
//! the whole pipeline is exercised by native tests.

mod builder;
mod error;
mod graph;
mod index;
mod keywords;
mod loader;

pub use builder::{KeywordMode, MindMap, MindMapBuilder};
pub use error::{ConfigError, LoadError, MindMapError, RecordError};
pub use graph::{GraphData, Link, Node, NodeGroup};
pub use index::{AbstractDetail, AbstractIndex};
pub use keywords::{KeywordBank, Topic};
pub use loader::{
	AbstractRecord, RecordEntry, decode_records, fetch_body, load_mindmap, mindmap_from_json,
};
