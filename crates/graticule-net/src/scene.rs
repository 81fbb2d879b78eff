//! In-memory scene graph built from plotted lines.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::SinkError;
use crate::plot::{LineSink, LineStyle};

/// A parent node holding the plotted lines, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetScene {
    pub name: String,
    pub lines: Vec<SceneLine>,
}

/// One child line of a [`NetScene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLine {
    pub name: String,
    pub style: LineStyle,
    pub positions: Vec<DVec3>,
}

impl NetScene {
    /// Total number of positions over all lines.
    pub fn point_count(&self) -> usize {
        self.lines.iter().map(|l| l.positions.len()).sum()
    }

    /// Find a line by name.
    pub fn line(&self, name: &str) -> Option<&SceneLine> {
        self.lines.iter().find(|l| l.name == name)
    }
}

/// [`LineSink`] that collects everything into a [`NetScene`].
#[derive(Debug, Default)]
pub struct SceneBuilder {
    scene: Option<NetScene>,
    open: bool,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished scene, or `None` if no group was ever started.
    pub fn finish(self) -> Option<NetScene> {
        self.scene
    }
}

impl LineSink for SceneBuilder {
    fn begin_group(&mut self, name: &str) -> Result<(), SinkError> {
        if self.scene.is_some() {
            return Err(format!("scene already has a root node, cannot start {name:?}").into());
        }
        self.scene = Some(NetScene {
            name: name.to_string(),
            lines: Vec::new(),
        });
        self.open = true;
        Ok(())
    }

    fn draw_line(
        &mut self,
        name: &str,
        points: &[DVec3],
        style: &LineStyle,
    ) -> Result<(), SinkError> {
        let scene = match self.scene.as_mut() {
            Some(scene) if self.open => scene,
            _ => return Err(format!("line {name:?} drawn outside a group").into()),
        };
        scene.lines.push(SceneLine {
            name: name.to_string(),
            style: *style,
            positions: points.to_vec(),
        });
        Ok(())
    }

    fn end_group(&mut self) -> Result<(), SinkError> {
        self.open = false;
        Ok(())
    }
}
