//! Grid renderer: hands the retained lines of a net to a line-drawing sink.

use glam::DVec3;
use graticule_config::{Config, LinePrefabConfig, LineRendererConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculator::{LatLongNet, NetCalculator};
use crate::error::{PlotError, SinkError};
use crate::params::{GridAxis, PlotStep};

/// How a single line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line width in scene units.
    pub width: f32,
    /// Linear RGBA color.
    pub color: [f32; 4],
    /// Connect the last point back to the first.
    pub loop_closed: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        LineRendererConfig::default().into()
    }
}

impl From<LineRendererConfig> for LineStyle {
    fn from(config: LineRendererConfig) -> Self {
        Self {
            width: config.width,
            color: config.color,
            loop_closed: config.loop_closed,
        }
    }
}

/// Template every emitted line is instantiated from.
///
/// A template without a [`LineStyle`] has nothing to draw lines with.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrefab {
    pub name: String,
    pub style: Option<LineStyle>,
}

impl LinePrefab {
    pub fn new(name: impl Into<String>, style: Option<LineStyle>) -> Self {
        Self {
            name: name.into(),
            style,
        }
    }

    /// The template's line style, or [`PlotError::NotLineRenderable`].
    pub fn line_style(&self) -> Result<LineStyle, PlotError> {
        self.style.ok_or_else(|| PlotError::NotLineRenderable {
            prefab: self.name.clone(),
        })
    }
}

impl From<&LinePrefabConfig> for LinePrefab {
    fn from(config: &LinePrefabConfig) -> Self {
        Self::new(config.name.clone(), config.renderer.map(LineStyle::from))
    }
}

// ---------------------------------------------------------------------------
// Line sink
// ---------------------------------------------------------------------------

/// Line-drawing primitive the renderer emits into.
///
/// Calls arrive as one `begin_group`, any number of `draw_line`, then one
/// `end_group`.
pub trait LineSink {
    /// Open the parent node all following lines belong to.
    fn begin_group(&mut self, name: &str) -> Result<(), SinkError>;

    /// Draw `points` as one connected line.
    fn draw_line(&mut self, name: &str, points: &[DVec3], style: &LineStyle)
    -> Result<(), SinkError>;

    /// Close the group opened by `begin_group`.
    fn end_group(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Name of the parent node for a plot step, e.g. `Latitude-Longitude Net: 5:5`.
pub fn net_group_name(step: PlotStep) -> String {
    format!("Latitude-Longitude Net: {}:{}", step.latitude, step.longitude)
}

/// Name of the line emitted from `lat_coords[index]`.
pub fn latitude_line_name(index: usize) -> String {
    format!("Latitude № {index}")
}

/// Name of the line emitted from `long_coords[index]`.
pub fn longitude_line_name(index: usize) -> String {
    format!("Longitude № {index}")
}

/// What a plot emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSummary {
    pub group_name: String,
    pub latitude_lines: usize,
    pub longitude_lines: usize,
    pub points: usize,
}

fn check_step(axis: GridAxis, step: usize, available: usize) -> Result<(), PlotError> {
    if step == 0 || step > available {
        return Err(PlotError::InvalidPlotStep {
            axis,
            step,
            available,
        });
    }
    Ok(())
}

fn resolve_style(prefab: Option<&LinePrefab>) -> Result<LineStyle, PlotError> {
    prefab.ok_or(PlotError::MissingLinePrefab)?.line_style()
}

/// Emit every `step.latitude`-th line of `lat_coords` and every
/// `step.longitude`-th line of `long_coords` into `sink`, starting at index 0,
/// all under one group named by [`net_group_name`].
///
/// The prefab and the steps are validated before the sink sees anything.
pub fn plot_net(
    net: &LatLongNet,
    step: PlotStep,
    prefab: Option<&LinePrefab>,
    sink: &mut dyn LineSink,
) -> Result<PlotSummary, PlotError> {
    let style = resolve_style(prefab)?;
    emit_lines(net, step, &style, sink)
}

fn emit_lines(
    net: &LatLongNet,
    step: PlotStep,
    style: &LineStyle,
    sink: &mut dyn LineSink,
) -> Result<PlotSummary, PlotError> {
    check_step(GridAxis::Latitude, step.latitude, net.lat_coords().len())?;
    check_step(GridAxis::Longitude, step.longitude, net.long_coords().len())?;

    let group_name = net_group_name(step);
    sink.begin_group(&group_name).map_err(PlotError::Sink)?;

    let mut summary = PlotSummary {
        group_name,
        latitude_lines: 0,
        longitude_lines: 0,
        points: 0,
    };

    for (index, line) in net.lat_coords().iter().enumerate().step_by(step.latitude) {
        sink.draw_line(&latitude_line_name(index), line, style)
            .map_err(PlotError::Sink)?;
        summary.latitude_lines += 1;
        summary.points += line.len();
    }

    for (index, line) in net
        .long_coords()
        .iter()
        .enumerate()
        .step_by(step.longitude)
    {
        sink.draw_line(&longitude_line_name(index), line, style)
            .map_err(PlotError::Sink)?;
        summary.longitude_lines += 1;
        summary.points += line.len();
    }

    sink.end_group().map_err(PlotError::Sink)?;

    debug!(
        latitude_lines = summary.latitude_lines,
        longitude_lines = summary.longitude_lines,
        points = summary.points,
        "net plotted"
    );
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Plot Net action
// ---------------------------------------------------------------------------

/// The "Plot Net" action: calculate a fresh net, then plot it.
#[derive(Debug, Clone, PartialEq)]
pub struct NetPlotter {
    pub calculator: NetCalculator,
    pub step: PlotStep,
    pub prefab: Option<LinePrefab>,
}

impl NetPlotter {
    pub fn new(calculator: NetCalculator, step: PlotStep, prefab: Option<LinePrefab>) -> Self {
        Self {
            calculator,
            step,
            prefab,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            NetCalculator::from(&config.net),
            config.net.plot_step.into(),
            config.line_prefab.as_ref().map(LinePrefab::from),
        )
    }

    /// Calculate, then plot into `sink`.
    ///
    /// A missing or non-rendering prefab aborts before any calculation.
    pub fn plot(&self, sink: &mut dyn LineSink) -> Result<PlotSummary, PlotError> {
        let style = resolve_style(self.prefab.as_ref())?;

        let net = self.calculator.calculate()?;
        let summary = emit_lines(&net, self.step, &style, sink)?;
        info!(
            group = %summary.group_name,
            latitude_lines = summary.latitude_lines,
            longitude_lines = summary.longitude_lines,
            "plotted latitude/longitude net"
        );
        Ok(summary)
    }
}
