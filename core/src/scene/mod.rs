//! Scene plumbing around the solvers: parameters, themes, drawing and
//! pointer interaction. None of it is needed to call the solvers directly.

pub mod drawing;
pub mod interaction;
pub mod params;
pub mod renderer;
pub mod theme;


pub use drawing::{Canvas, DrawCommand, RecordingCanvas, Viewport};
pub use interaction::{DragState, Movable, PointerEvent};
pub use params::{Mode, Parameter, ParameterStore, SceneParams};
pub use renderer::{Frame, Renderer};
pub use theme::{Theme, DEFAULT_THEME};
