//! Page configuration, taken from the URL query string.

use force_graph::SimulationParameters;

use crate::mindmap::{ConfigError, KeywordMode, NodeGroup};

/// Dataset fetched when the page URL names none.
pub const DEFAULT_DATA_URL: &str = "data.json";

/// Simulation and drawing parameters for the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Canvas height in pixels; width follows the container.
	pub height: f64,
	/// Repulsion between every pair of nodes.
	pub charge: f32,
	/// Attraction along links.
	pub spring: f32,
	/// Per-step force clamp.
	pub max_force: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity kept after each step.
	pub damping: f32,
	/// Drawn radius of abstract nodes.
	pub abstract_radius: f64,
	/// Drawn radius of keyword nodes.
	pub keyword_radius: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			height: 600.0,
			charge: 80.0,
			spring: 0.05,
			max_force: 100.0,
			node_speed: 3000.0,
			damping: 0.9,
			abstract_radius: 12.0,
			keyword_radius: 8.0,
		}
	}
}

impl LayoutConfig {
	/// Parameters for the `force_graph` simulation.
	pub fn simulation(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.charge,
			force_spring: self.spring,
			force_max: self.max_force,
			node_speed: self.node_speed,
			damping_factor: self.damping,
		}
	}

	/// Drawn radius for a node of `group`.
	pub fn radius(&self, group: NodeGroup) -> f64 {
		match group {
			NodeGroup::Abstract => self.abstract_radius,
			NodeGroup::Keyword => self.keyword_radius,
		}
	}

	/// Pointer distance that still counts as touching the node.
	pub fn hit_radius(&self, group: NodeGroup) -> f64 {
		self.radius(group) + 4.0
	}

	/// Simulation mass; abstracts are heavier so their keywords orbit them.
	pub fn mass(&self, group: NodeGroup) -> f32 {
		match group {
			NodeGroup::Abstract => 20.0,
			NodeGroup::Keyword => 10.0,
		}
	}
}

/// Everything the home page needs to load and draw the mind map.
#[derive(Clone, Debug, PartialEq)]
pub struct MindMapConfig {
	/// Where the dataset is fetched from.
	pub data_url: String,
	/// Explicit or predicted keywords.
	pub mode: KeywordMode,
	/// Canvas parameters.
	pub layout: LayoutConfig,
}

impl Default for MindMapConfig {
	fn default() -> Self {
		Self {
			data_url: DEFAULT_DATA_URL.to_string(),
			mode: KeywordMode::default(),
			layout: LayoutConfig::default(),
		}
	}
}

impl MindMapConfig {
	/// Build from the `data` and `mode` query parameters. Missing or blank
	/// values fall back to the defaults; an unknown mode is an error.
	pub fn from_query(data: Option<&str>, mode: Option<&str>) -> Result<Self, ConfigError> {
		let mut config = Self::default();
		if let Some(data) = data.map(str::trim).filter(|d| !d.is_empty()) {
			config.data_url = data.to_string();
		}
		if let Some(mode) = mode.filter(|m| !m.trim().is_empty()) {
			config.mode = mode.parse()?;
		}
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_without_query() {
		let config = MindMapConfig::from_query(None, None).unwrap();
		assert_eq!(config, MindMapConfig::default());
		assert_eq!(config.data_url, "data.json");
		assert_eq!(config.mode, KeywordMode::Explicit);
	}

	#[test]
	fn query_overrides() {
		let config = MindMapConfig::from_query(Some(" abstracts.json "), Some("predicted")).unwrap();
		assert_eq!(config.data_url, "abstracts.json");
		assert_eq!(config.mode, KeywordMode::Predicted);
	}

	#[test]
	fn blank_values_fall_back() {
		let config = MindMapConfig::from_query(Some("  "), Some("")).unwrap();
		assert_eq!(config, MindMapConfig::default());
	}

	#[test]
	fn unknown_mode_is_rejected() {
		assert_eq!(
			MindMapConfig::from_query(None, Some("magic")),
			Err(ConfigError::UnknownMode("magic".into()))
		);
	}

	#[test]
	fn group_keyed_geometry() {
		let layout = LayoutConfig::default();
		assert_eq!(layout.radius(NodeGroup::Abstract), 12.0);
		assert_eq!(layout.radius(NodeGroup::Keyword), 8.0);
		assert!(layout.hit_radius(NodeGroup::Keyword) > layout.radius(NodeGroup::Keyword));
		assert!(layout.mass(NodeGroup::Abstract) > layout.mass(NodeGroup::Keyword));
	}
}
