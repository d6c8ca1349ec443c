//! Persisted tool settings.
//!
//! The editor host keeps the mixer's last-used parameters between
//! sessions. Settings are plain data serialized as JSON; the core
//! operations never read them implicitly, the host passes values
//! explicitly per call.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphamap::ChannelPair;
use crate::core::Result;

/// Last-used mixer and brush parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Source layer channel for mix and paint.
    pub layer_a: usize,
    /// Destination layer channel.
    pub layer_b: usize,
    /// Global blend strength (0-1).
    pub blend_strength: f32,
    /// Brush radius in world units.
    pub brush_radius: f32,
    /// Whether the paint brush tool is armed.
    pub brush_active: bool,
    /// Brush target opacity for layer A (0-1).
    pub opacity_a: f32,
    /// Brush target opacity for layer B (0-1).
    pub opacity_b: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            layer_a: 0,
            layer_b: 1,
            blend_strength: 0.5,
            brush_radius: 5.0,
            brush_active: false,
            opacity_a: 0.3,
            opacity_b: 0.7,
        }
    }
}

impl ToolSettings {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load settings, falling back to defaults if the file is missing.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// The selected channel pair. Distinctness is validated when the
    /// pair is used, not here; stale settings files may hold anything.
    pub fn channel_pair(&self) -> ChannelPair {
        ChannelPair::new(self.layer_a, self.layer_b)
    }
}
