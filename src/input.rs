use egui::{Pos2, Response};

/// Raw pointer state for one frame, as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Pointer position in canvas coordinates, if the pointer is known.
    pub position: Option<Pos2>,
    /// Primary button is held at the end of the frame.
    pub primary_down: bool,
    /// Primary button went down at some point during the frame.
    pub primary_pressed: bool,
    /// Primary button went up at some point during the frame.
    pub primary_released: bool,
    /// The pointer is not on the visible canvas (over the tool panel, the
    /// menu bar, an open menu, or outside the window).
    pub ui_wants_pointer: bool,
}

impl PointerSample {
    /// Button held at `pos`.
    pub fn down(pos: Pos2) -> Self {
        Self {
            position: Some(pos),
            primary_down: true,
            ..Default::default()
        }
    }

    /// Button up at `pos`.
    pub fn up(pos: Pos2) -> Self {
        Self {
            position: Some(pos),
            ..Default::default()
        }
    }

    /// Press and release both happened within the frame at `pos`.
    pub fn click(pos: Pos2) -> Self {
        Self {
            position: Some(pos),
            primary_down: false,
            primary_pressed: true,
            primary_released: true,
            ui_wants_pointer: false,
        }
    }

    pub fn over_ui(mut self) -> Self {
        self.ui_wants_pointer = true;
        self
    }

    /// Reads the pointer state for the current frame from egui.
    ///
    /// `canvas` is the response of the widget covering the drawing area.
    /// Anything layered above it, such as a window or a popup menu, takes the
    /// pointer away from the canvas.
    pub fn from_egui(canvas: &Response) -> Self {
        let ui_wants_pointer = !canvas.contains_pointer();
        canvas.ctx.input(|input| Self {
            position: input.pointer.latest_pos(),
            primary_down: input.pointer.primary_down(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
            ui_wants_pointer,
        })
    }
}

/// Pointer state with edges resolved against the previous frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFrame {
    pub position: Pos2,
    /// A press edge happened this frame.
    pub pressed: bool,
    /// The button is still held at the end of the frame.
    pub held: bool,
    pub ui_wants_pointer: bool,
}

/// Turns raw per-frame samples into [`PointerFrame`]s.
///
/// Must see every frame, including the ones the tools ignore, so that an
/// edge observed while the UI owns the pointer is consumed there and not
/// replayed later.
#[derive(Debug, Default)]
pub struct InputHandler {
    was_down: bool,
    last_position: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, sample: PointerSample) -> PointerFrame {
        let position = sample
            .position
            .or(self.last_position)
            .unwrap_or(Pos2::ZERO);
        let pressed = sample.primary_pressed || (sample.primary_down && !self.was_down);

        self.was_down = sample.primary_down;
        self.last_position = Some(position);

        PointerFrame {
            position,
            pressed,
            held: sample.primary_down,
            ui_wants_pointer: sample.ui_wants_pointer,
        }
    }
}
