use crate::shape::{Circle, Line, Rectangle, Shape};

/// Append-only store of every committed shape.
///
/// Shapes are kept per kind. Draw order is all lines, then all rectangles,
/// then all circles; within a kind, later shapes are drawn on top.
#[derive(Debug, Default, Clone)]
pub struct Document {
    lines: Vec<Line>,
    rectangles: Vec<Rectangle>,
    circles: Vec<Circle>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, shape: impl Into<Shape>) {
        match shape.into() {
            Shape::Line(line) => self.lines.push(line),
            Shape::Rectangle(rectangle) => self.rectangles.push(rectangle),
            Shape::Circle(circle) => self.circles.push(circle),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.lines.len() + self.rectangles.len() + self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every shape in the order it is drawn.
    pub fn iter(&self) -> impl Iterator<Item = Shape> + '_ {
        self.lines
            .iter()
            .copied()
            .map(Shape::Line)
            .chain(self.rectangles.iter().copied().map(Shape::Rectangle))
            .chain(self.circles.iter().copied().map(Shape::Circle))
    }
}
