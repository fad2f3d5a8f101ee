/// Position in CSS pixels relative to the page.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The mouse left the slider while pressed.
    Leave,
    /// The platform aborted the gesture (touchcancel).
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Middle = 1,
    Secondary = 2,
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` value. Back/forward buttons are ignored.
    pub fn from_dom(button: i16) -> Option<Self> {
        match button {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Middle),
            2 => Some(PointerButton::Secondary),
            _ => None,
        }
    }
}

/// One pointer or touch event, already reduced to the primary pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub source: PointerSource,
    pub position: Point,
    pub button: Option<PointerButton>,
    /// Event timestamp in milliseconds.
    pub time_ms: i64,
    /// The pointer-down target is a button, link or `role="button"` element
    /// nested in the slider.
    pub on_control: bool,
}

impl PointerEvent {
    pub fn new(
        kind: PointerEventKind,
        source: PointerSource,
        position: Point,
        time_ms: i64,
    ) -> Self {
        Self {
            kind,
            source,
            position,
            button: match source {
                PointerSource::Mouse => Some(PointerButton::Primary),
                PointerSource::Touch => None,
            },
            time_ms,
            on_control: false,
        }
    }

    pub fn mouse(kind: PointerEventKind, x: f32, time_ms: i64) -> Self {
        Self::new(kind, PointerSource::Mouse, Point::new(x, 0.0), time_ms)
    }

    pub fn touch(kind: PointerEventKind, x: f32, time_ms: i64) -> Self {
        Self::new(kind, PointerSource::Touch, Point::new(x, 0.0), time_ms)
    }

    /// Set the mouse button for this event
    pub fn with_button(mut self, button: Option<PointerButton>) -> Self {
        self.button = button;
        self
    }

    /// Mark the event target as a nested interactive control.
    pub fn on_control(mut self, on_control: bool) -> Self {
        self.on_control = on_control;
        self
    }

    /// Whether this event may open a gesture sample.
    pub fn is_primary_press(&self) -> bool {
        match self.source {
            PointerSource::Mouse => self.button == Some(PointerButton::Primary) && !self.on_control,
            PointerSource::Touch => true,
        }
    }
}
