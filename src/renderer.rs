use egui::epaint::{CircleShape, Mesh, RectShape};
use egui::{Color32, Painter, Rect, Stroke};

use crate::document::Document;
use crate::shape::{self, Circle, Line, Rectangle, Shape};

/// Turns the shape store and the live preview into paint commands.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    /// Paints a full frame: background, committed shapes, then the preview.
    pub fn render(
        &self,
        painter: &Painter,
        canvas: Rect,
        document: &Document,
        preview: Option<Shape>,
    ) {
        painter.extend(self.frame_shapes(canvas, document, preview));
    }

    /// Paint commands for one frame, in draw order.
    pub fn frame_shapes(
        &self,
        canvas: Rect,
        document: &Document,
        preview: Option<Shape>,
    ) -> Vec<egui::Shape> {
        let mut shapes = Vec::with_capacity(document.len() + 2);
        shapes.push(egui::Shape::rect_filled(canvas, 0.0, self.background));
        shapes.extend(document.iter().map(paint_shape));
        shapes.extend(preview.map(paint_shape));
        shapes
    }
}

pub fn paint_shape(shape: Shape) -> egui::Shape {
    match shape {
        Shape::Line(line) => paint_line(&line),
        Shape::Rectangle(rectangle) => paint_rectangle(&rectangle),
        Shape::Circle(circle) => paint_circle(&circle),
    }
}

/// A thin quad with one color per end, so gradients blend along the segment.
fn paint_line(line: &Line) -> egui::Shape {
    let half_width = shape::LINE_WIDTH / 2.0;
    let normal = (line.end - line.start).normalized().rot90() * half_width;

    let mut mesh = Mesh::default();
    mesh.colored_vertex(line.start + normal, line.start_color);
    mesh.colored_vertex(line.start - normal, line.start_color);
    mesh.colored_vertex(line.end + normal, line.end_color);
    mesh.colored_vertex(line.end - normal, line.end_color);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    egui::Shape::mesh(mesh)
}

fn paint_rectangle(rectangle: &Rectangle) -> egui::Shape {
    egui::Shape::Rect(RectShape::new(
        rectangle.rect(),
        0.0,
        rectangle.fill.unwrap_or(Color32::TRANSPARENT),
        Stroke::new(rectangle.thickness, rectangle.outline),
    ))
}

fn paint_circle(circle: &Circle) -> egui::Shape {
    egui::Shape::Circle(CircleShape::stroke(
        circle.center,
        circle.radius,
        Stroke::new(circle.thickness, circle.outline),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0))
    }

    #[test]
    fn test_empty_document_only_clears() {
        let renderer = Renderer::new(Color32::WHITE);
        let shapes = renderer.frame_shapes(canvas(), &Document::new(), None);
        assert_eq!(shapes.len(), 1);
        let egui::Shape::Rect(clear) = &shapes[0] else {
            panic!("expected the background rect first");
        };
        assert_eq!(clear.fill, Color32::WHITE);
        assert_eq!(clear.rect, canvas());
    }

    #[test]
    fn test_kind_order_then_preview() {
        let mut doc = Document::new();
        doc.append(Circle::through(pos2(5.0, 5.0), pos2(5.0, 9.0), Color32::RED, 2.0));
        doc.append(Rectangle::from_corners(
            pos2(1.0, 1.0),
            pos2(3.0, 3.0),
            Some(Color32::BLUE),
            Color32::RED,
            2.0,
        ));
        doc.append(Line::new(pos2(0.0, 0.0), pos2(10.0, 0.0), Color32::RED, Color32::RED));
        let preview = Line::new(pos2(0.0, 5.0), pos2(10.0, 5.0), Color32::GREEN, Color32::GREEN).into();

        let shapes = Renderer::new(Color32::BLACK).frame_shapes(canvas(), &doc, Some(preview));
        assert_eq!(shapes.len(), 5);
        assert!(matches!(shapes[0], egui::Shape::Rect(_)));
        assert!(matches!(shapes[1], egui::Shape::Mesh(_)));
        assert!(matches!(shapes[2], egui::Shape::Rect(_)));
        assert!(matches!(shapes[3], egui::Shape::Circle(_)));
        assert!(matches!(shapes[4], egui::Shape::Mesh(_)));
    }

    #[test]
    fn test_gradient_line_vertex_colors() {
        let line = Line::new(pos2(0.0, 0.0), pos2(10.0, 0.0), Color32::RED, Color32::BLUE);
        let egui::Shape::Mesh(mesh) = paint_line(&line) else {
            panic!("lines are meshes");
        };
        let colors: Vec<_> = mesh.vertices.iter().map(|v| v.color).collect();
        assert_eq!(colors, [Color32::RED, Color32::RED, Color32::BLUE, Color32::BLUE]);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn test_zero_length_line_does_not_produce_nan() {
        let p = pos2(3.0, 3.0);
        let egui::Shape::Mesh(mesh) = paint_line(&Line::new(p, p, Color32::RED, Color32::RED)) else {
            panic!("lines are meshes");
        };
        assert!(mesh.vertices.iter().all(|v| v.pos.x.is_finite() && v.pos.y.is_finite()));
    }

    #[test]
    fn test_unfilled_rectangle_is_transparent() {
        let rect = Rectangle::from_corners(pos2(0.0, 0.0), pos2(4.0, 4.0), None, Color32::RED, 3.0);
        let egui::Shape::Rect(shape) = paint_rectangle(&rect) else {
            panic!("rectangles are rects");
        };
        assert_eq!(shape.fill, Color32::TRANSPARENT);
        assert_eq!(shape.stroke, Stroke::new(3.0, Color32::RED));
    }

    #[test]
    fn test_circle_is_stroked_only() {
        let circle = Circle::through(pos2(0.0, 0.0), pos2(3.0, 4.0), Color32::RED, 2.0);
        let egui::Shape::Circle(shape) = paint_circle(&circle) else {
            panic!("circles are circles");
        };
        assert_eq!(shape.radius, 5.0);
        assert_eq!(shape.fill, Color32::TRANSPARENT);
    }
}
