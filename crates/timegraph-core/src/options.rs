// File: crates/timegraph-core/src/options.rs
// Summary: Graph/group configuration blocks, defaults, and selective merge.

/// Which Y axis a group is scaled against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisOrientation {
    #[default]
    Left,
    Right,
}

/// Drawing style of a group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphStyle {
    #[default]
    Line,
    Bar,
}

/// Marker shape used by the point pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointStyle {
    #[default]
    Square,
    Circle,
}

/// Side the shaded fill closes against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadedOrientation {
    #[default]
    Top,
    Bottom,
}

/// Catmull-Rom parametrization. Controls how segment "speed" is distributed
/// along the curve; centripetal gives the nicest results on noisy data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parametrization {
    Uniform,
    Chordal,
    #[default]
    Centripetal,
}

impl Parametrization {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parametrization::Uniform => "uniform",
            Parametrization::Chordal => "chordal",
            Parametrization::Centripetal => "centripetal",
        }
    }

    /// Alpha exponent associated with this parametrization.
    pub fn alpha(&self) -> f64 {
        match self {
            Parametrization::Uniform => 0.0,
            Parametrization::Chordal => 1.0,
            Parametrization::Centripetal => 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarChartOptions {
    /// Bar width in pixels.
    pub width: f64,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self { width: 50.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawPointsOptions {
    pub enabled: bool,
    /// Marker size in pixels.
    pub size: f64,
    pub style: PointStyle,
}

impl Default for DrawPointsOptions {
    fn default() -> Self {
        Self { enabled: true, size: 6.0, style: PointStyle::Square }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatmullRomOptions {
    pub enabled: bool,
    pub parametrization: Parametrization,
    pub alpha: f64,
}

impl Default for CatmullRomOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            parametrization: Parametrization::Centripetal,
            alpha: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadedOptions {
    pub enabled: bool,
    pub orientation: ShadedOrientation,
}

impl Default for ShadedOptions {
    fn default() -> Self {
        Self { enabled: true, orientation: ShadedOrientation::Top }
    }
}

/// Label/tick display settings of the value axis panels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataAxisOptions {
    pub show_minor_labels: bool,
    pub show_major_labels: bool,
    pub major_lines_offset: f64,
    pub minor_lines_offset: f64,
    pub label_offset_x: f64,
    pub label_offset_y: f64,
    pub icon_width: f64,
    /// Axis panel width in pixels.
    pub width: f64,
    pub visible: bool,
}

impl Default for DataAxisOptions {
    fn default() -> Self {
        Self {
            show_minor_labels: true,
            show_major_labels: true,
            major_lines_offset: 7.0,
            minor_lines_offset: 4.0,
            label_offset_x: 10.0,
            label_offset_y: 2.0,
            icon_width: 20.0,
            width: 40.0,
            visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendSideOptions {
    pub visible: bool,
    pub position: LegendPosition,
    pub text_align: TextAlign,
}

/// Display settings consumed by the (external) legend widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendOptions {
    pub enabled: bool,
    pub axis_icons: bool,
    pub left: LegendSideOptions,
    pub right: LegendSideOptions,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            axis_icons: true,
            left: LegendSideOptions {
                visible: true,
                position: LegendPosition::TopLeft,
                text_align: TextAlign::Left,
            },
            right: LegendSideOptions {
                visible: true,
                position: LegendPosition::TopLeft,
                text_align: TextAlign::Right,
            },
        }
    }
}

/// Full option set shared by the graph and all its groups.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphOptions {
    pub y_axis_orientation: AxisOrientation,
    pub style: GraphStyle,
    pub bar_chart: BarChartOptions,
    pub draw_points: DrawPointsOptions,
    pub catmull_rom: CatmullRomOptions,
    pub shaded: ShadedOptions,
    pub data_axis: DataAxisOptions,
    pub legend: LegendOptions,
}

// ---- partial overrides ------------------------------------------------------
//
// Each block merges field-wise so a partial override keeps sibling fields.

#[derive(Clone, Debug, Default)]
pub struct BarChartPatch {
    pub width: Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct DrawPointsPatch {
    pub enabled: Option<bool>,
    pub size: Option<f64>,
    pub style: Option<PointStyle>,
}

#[derive(Clone, Debug, Default)]
pub struct CatmullRomPatch {
    pub enabled: Option<bool>,
    /// Parametrization by name ("uniform", "chordal", "centripetal").
    /// Unrecognized names are silently corrected to centripetal.
    pub parametrization: Option<String>,
    pub alpha: Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct ShadedPatch {
    pub enabled: Option<bool>,
    pub orientation: Option<ShadedOrientation>,
}

#[derive(Clone, Debug, Default)]
pub struct DataAxisPatch {
    pub show_minor_labels: Option<bool>,
    pub show_major_labels: Option<bool>,
    pub width: Option<f64>,
    pub visible: Option<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct LegendPatch {
    pub enabled: Option<bool>,
    pub axis_icons: Option<bool>,
    pub left: Option<LegendSideOptions>,
    pub right: Option<LegendSideOptions>,
}

/// Partial option override, applied over defaults or current values.
#[derive(Clone, Debug, Default)]
pub struct GraphOptionsPatch {
    pub y_axis_orientation: Option<AxisOrientation>,
    pub style: Option<GraphStyle>,
    pub bar_chart: Option<BarChartPatch>,
    pub draw_points: Option<DrawPointsPatch>,
    pub catmull_rom: Option<CatmullRomPatch>,
    pub shaded: Option<ShadedPatch>,
    pub data_axis: Option<DataAxisPatch>,
    pub legend: Option<LegendPatch>,
}

impl GraphOptions {
    /// Merge `patch` into `self`. Unset fields keep their current values.
    ///
    /// A `catmull_rom.parametrization` name sets both the parametrization and
    /// its associated alpha; an unrecognized name falls back to centripetal
    /// (alpha 0.5) without erroring. An explicit `alpha` wins over the
    /// parametrization-derived one.
    pub fn apply(&mut self, patch: &GraphOptionsPatch) {
        if let Some(o) = patch.y_axis_orientation {
            self.y_axis_orientation = o;
        }
        if let Some(s) = patch.style {
            self.style = s;
        }
        if let Some(bc) = &patch.bar_chart {
            if let Some(w) = bc.width {
                self.bar_chart.width = w;
            }
        }
        if let Some(dp) = &patch.draw_points {
            if let Some(e) = dp.enabled {
                self.draw_points.enabled = e;
            }
            if let Some(s) = dp.size {
                self.draw_points.size = s;
            }
            if let Some(s) = dp.style {
                self.draw_points.style = s;
            }
        }
        if let Some(cr) = &patch.catmull_rom {
            if let Some(e) = cr.enabled {
                self.catmull_rom.enabled = e;
            }
            if let Some(name) = &cr.parametrization {
                let parametrization = match name.as_str() {
                    "uniform" => Parametrization::Uniform,
                    "chordal" => Parametrization::Chordal,
                    "centripetal" => Parametrization::Centripetal,
                    other => {
                        log::debug!(
                            "unknown catmull-rom parametrization {other:?}, using centripetal"
                        );
                        Parametrization::Centripetal
                    }
                };
                self.catmull_rom.parametrization = parametrization;
                self.catmull_rom.alpha = parametrization.alpha();
            }
            if let Some(a) = cr.alpha {
                self.catmull_rom.alpha = a;
            }
        }
        if let Some(sh) = &patch.shaded {
            if let Some(e) = sh.enabled {
                self.shaded.enabled = e;
            }
            if let Some(o) = sh.orientation {
                self.shaded.orientation = o;
            }
        }
        if let Some(da) = &patch.data_axis {
            if let Some(v) = da.show_minor_labels {
                self.data_axis.show_minor_labels = v;
            }
            if let Some(v) = da.show_major_labels {
                self.data_axis.show_major_labels = v;
            }
            if let Some(v) = da.width {
                self.data_axis.width = v;
            }
            if let Some(v) = da.visible {
                self.data_axis.visible = v;
            }
        }
        if let Some(lg) = &patch.legend {
            if let Some(e) = lg.enabled {
                self.legend.enabled = e;
            }
            if let Some(v) = lg.axis_icons {
                self.legend.axis_icons = v;
            }
            if let Some(side) = lg.left {
                self.legend.left = side;
            }
            if let Some(side) = lg.right {
                self.legend.right = side;
            }
        }
    }
}
