use egui::{Color32, Pos2, Rect, Vec2};

/// Width of every committed line, in points.
pub const LINE_WIDTH: f32 = 1.0;

/// A straight segment whose color is interpolated between its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Pos2,
    pub end: Pos2,
    pub start_color: Color32,
    pub end_color: Color32,
}

impl Line {
    pub fn new(start: Pos2, end: Pos2, start_color: Color32, end_color: Color32) -> Self {
        Self {
            start,
            end,
            start_color,
            end_color,
        }
    }

}

/// An axis-aligned rectangle. `size` is never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub position: Pos2,
    pub size: Vec2,
    /// `None` draws only the outline.
    pub fill: Option<Color32>,
    pub outline: Color32,
    pub thickness: f32,
}

impl Rectangle {
    /// Builds a rectangle from two arbitrary corners, normalizing so the drag
    /// direction does not matter.
    pub fn from_corners(
        a: Pos2,
        b: Pos2,
        fill: Option<Color32>,
        outline: Color32,
        thickness: f32,
    ) -> Self {
        Self {
            position: a.min(b),
            size: (b - a).abs(),
            fill,
            outline,
            thickness,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }
}

/// An outlined, never filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Pos2,
    pub radius: f32,
    pub outline: Color32,
    pub thickness: f32,
}

impl Circle {
    /// Circle centered on `center` passing through `rim`.
    pub fn through(center: Pos2, rim: Pos2, outline: Color32, thickness: f32) -> Self {
        Self {
            center,
            radius: center.distance(rim),
            outline,
            thickness,
        }
    }
}

/// Any committed canvas shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Rectangle(_) => "rectangle",
            Self::Circle(_) => "circle",
        }
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}
