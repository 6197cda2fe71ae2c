//! Drag-to-move behavior for floating UI panels.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed over the movable element
    Down,
    /// Button released anywhere
    Up,
    /// Pointer moved over the element by a relative amount
    Move { dx: f64, dy: f64 },
}

/// Position of a draggable element, in screen pixels (+y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Movable {
    pub left: f64,
    pub top: f64,
    pub state: DragState,
}

impl Movable {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top, state: DragState::Idle }
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Feed one pointer event. Returns true if the element moved.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match (self.state, event) {
            (_, PointerEvent::Down) => {
                self.state = DragState::Dragging;
                false
            }
            (_, PointerEvent::Up) => {
                self.state = DragState::Idle;
                false
            }
            (DragState::Dragging, PointerEvent::Move { dx, dy }) => {
                self.left += dx;
                self.top += dy;
                dx != 0.0 || dy != 0.0
            }
            (DragState::Idle, PointerEvent::Move { .. }) => false,
        }
    }
}
