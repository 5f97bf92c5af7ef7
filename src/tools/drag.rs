use egui::Pos2;

use crate::input::PointerFrame;

/// Press/drag/release tracking shared by every shape tool.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Where the button went down.
        anchor: Pos2,
        /// Latest pointer position while held.
        live: Pos2,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The `(anchor, live)` pair of an active drag.
    pub fn span(&self) -> Option<(Pos2, Pos2)> {
        match *self {
            Self::Dragging { anchor, live } => Some((anchor, live)),
            Self::Idle => None,
        }
    }

    /// Advances the machine by one frame.
    ///
    /// Returns the `(anchor, release)` pair when the drag ends. A dragging
    /// machine ends as soon as it sees the button up, so a press and release
    /// inside one frame still yields a zero-length drag.
    pub fn update(&mut self, frame: &PointerFrame) -> Option<(Pos2, Pos2)> {
        if !self.is_dragging() && frame.pressed {
            log::debug!("drag started at {:?}", frame.position);
            *self = Self::Dragging {
                anchor: frame.position,
                live: frame.position,
            };
        }

        let Self::Dragging { anchor, live } = self else {
            return None;
        };
        *live = frame.position;

        if frame.held {
            return None;
        }

        let span = (*anchor, *live);
        *self = Self::Idle;
        Some(span)
    }

    /// Drops any drag in progress without producing a shape.
    pub fn cancel(&mut self) {
        if let Self::Dragging { anchor, .. } = self {
            log::debug!("abandoned drag started at {:?}", anchor);
        }
        *self = Self::Idle;
    }
}
