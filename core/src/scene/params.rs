use crate::geometry::{Circle, Line, Point2, Ray};
use crate::units::AngleUnit;
use serde::{Deserialize, Serialize};

/// Which shape is intersected with the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Line,
    Ray,
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Mode::Line),
            "ray" => Ok(Mode::Ray),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

/// Immutable snapshot of every user-adjustable value in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub mode: Mode,
    /// Line slope
    pub m: f64,
    /// Line y-intercept
    pub b: f64,
    /// Circle radius
    pub r: f64,
    /// Circle center x
    pub p: f64,
    /// Circle center y
    pub q: f64,
    /// Ray origin x
    pub x: f64,
    /// Ray origin y
    pub y: f64,
    pub angle: f64,
    pub angle_unit: AngleUnit,
    pub magnitude: f64,
    pub show_axes: bool,
    pub theme: String,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            mode: Mode::Line,
            m: 1.0,
            b: 1.0,
            r: 100.0,
            p: 0.0,
            q: 0.0,
            x: 0.0,
            y: 0.0,
            angle: 45.0,
            angle_unit: AngleUnit::Degrees,
            magnitude: 200.0,
            show_axes: false,
            theme: super::theme::DEFAULT_THEME.to_string(),
        }
    }
}

impl SceneParams {
    /// Parse a scene file. Missing fields take their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn line(&self) -> Line {
        Line::new(self.m, self.b)
    }

    pub fn circle(&self) -> Circle {
        Circle::new(Point2::new(self.p, self.q), self.r)
    }

    pub fn ray(&self) -> Ray {
        Ray::new(
            Point2::new(self.x, self.y),
            self.angle_unit.to_radians(self.angle),
            self.magnitude,
        )
    }

    pub fn get(&self, param: Parameter) -> f64 {
        match param {
            Parameter::Slope => self.m,
            Parameter::Intercept => self.b,
            Parameter::Radius => self.r,
            Parameter::CenterX => self.p,
            Parameter::CenterY => self.q,
            Parameter::OriginX => self.x,
            Parameter::OriginY => self.y,
            Parameter::Angle => self.angle,
            Parameter::Magnitude => self.magnitude,
        }
    }

    fn slot(&mut self, param: Parameter) -> &mut f64 {
        match param {
            Parameter::Slope => &mut self.m,
            Parameter::Intercept => &mut self.b,
            Parameter::Radius => &mut self.r,
            Parameter::CenterX => &mut self.p,
            Parameter::CenterY => &mut self.q,
            Parameter::OriginX => &mut self.x,
            Parameter::OriginY => &mut self.y,
            Parameter::Angle => &mut self.angle,
            Parameter::Magnitude => &mut self.magnitude,
        }
    }
}

/// Numeric scene fields, keyed by their form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Slope,
    Intercept,
    Radius,
    CenterX,
    CenterY,
    OriginX,
    OriginY,
    Angle,
    Magnitude,
}

impl Parameter {
    pub const ALL: [Parameter; 9] = [
        Parameter::Slope,
        Parameter::Intercept,
        Parameter::Radius,
        Parameter::CenterX,
        Parameter::CenterY,
        Parameter::OriginX,
        Parameter::OriginY,
        Parameter::Angle,
        Parameter::Magnitude,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            Parameter::Slope => "m",
            Parameter::Intercept => "b",
            Parameter::Radius => "r",
            Parameter::CenterX => "p",
            Parameter::CenterY => "q",
            Parameter::OriginX => "x",
            Parameter::OriginY => "y",
            Parameter::Angle => "angle",
            Parameter::Magnitude => "magnitude",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Parameter> {
        Self::ALL.iter().copied().find(|p| p.field_name() == name)
    }
}

/// Parse a form or slider value. Anything that is not a finite number reads as 0.
pub fn parse_input(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Owns the mutable scene parameters on behalf of the UI layer and tracks
/// whether a redraw is pending.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    params: SceneParams,
    revision: u64,
    dirty: bool,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(SceneParams::default())
    }
}

impl ParameterStore {
    pub fn new(params: SceneParams) -> Self {
        // A fresh store always needs a first frame
        Self { params, revision: 0, dirty: true }
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Store a numeric value, non-finite values as 0. Returns true when the
    /// value actually changed.
    pub fn set(&mut self, param: Parameter, value: f64) -> bool {
        let value = if value.is_finite() { value } else { 0.0 };
        let slot = self.params.slot(param);
        if *slot == value {
            return false;
        }
        *slot = value;
        self.touch();
        true
    }

    /// Apply raw text from a number box or range slider.
    pub fn apply_input(&mut self, param: Parameter, text: &str) -> bool {
        self.set(param, parse_input(text))
    }

    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.params.mode == mode {
            return false;
        }
        self.params.mode = mode;
        self.touch();
        true
    }

    pub fn set_show_axes(&mut self, show: bool) -> bool {
        if self.params.show_axes == show {
            return false;
        }
        self.params.show_axes = show;
        self.touch();
        true
    }

    /// Select a theme by name. Unknown names are kept as typed and resolve
    /// to the default theme when drawn.
    pub fn set_theme(&mut self, name: &str) -> bool {
        if self.params.theme == name {
            return false;
        }
        self.params.theme = name.to_string();
        self.touch();
        true
    }

    /// Snapshot for the renderer if anything changed since the last call.
    pub fn take_redraw(&mut self) -> Option<SceneParams> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.params.clone())
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.dirty = true;
    }
}
