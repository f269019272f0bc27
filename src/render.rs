use speedy2d::color::Color;
use speedy2d::dimen::Vector2;
use speedy2d::font::{Font, TextLayout, TextOptions};
use speedy2d::shape::Rectangle;
use speedy2d::Graphics2D;

use crate::graph::PointGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::from_int_rgb(c.0, c.1, c.2)
    }
}

/// Drawing primitives a frame is built from. Coordinates are whole pixels,
/// colors are fully opaque.
pub trait Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb);
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb);
    fn draw_pixel(&mut self, at: (i32, i32), color: Rgb);
    fn draw_text(&mut self, at: (i32, i32), text: &str, color: Rgb);
}

/// Every point as a pixel; every link as a line plus the neighbor's pixel.
pub fn draw_graph(canvas: &mut impl Canvas, graph: &PointGraph) {
    for p in graph.iter() {
        let from = p.coord.pixel();
        canvas.draw_pixel(from, Rgb::BLACK);
        for id in p.links() {
            let to = graph.get(id).coord.pixel();
            canvas.draw_line(from, to, Rgb::BLACK);
            canvas.draw_pixel(to, Rgb::BLACK);
        }
    }
}

/// Whole frame: white background, the graph, then the status text at the origin.
pub fn draw_frame(canvas: &mut impl Canvas, graph: &PointGraph, status: &str) {
    let (width, height) = graph.window_size();
    canvas.fill_rect(0, 0, width, height, Rgb::WHITE);
    draw_graph(canvas, graph);
    canvas.draw_text((0, 0), status, Rgb::BLACK);
}

pub struct Speedy2dCanvas<'a> {
    graphics: &'a mut Graphics2D,
    font: &'a Font,
    font_size: f32,
}

impl<'a> Speedy2dCanvas<'a> {
    pub fn new(graphics: &'a mut Graphics2D, font: &'a Font, font_size: f32) -> Self {
        Speedy2dCanvas {
            graphics,
            font,
            font_size,
        }
    }
}

fn corner(x: i32, y: i32) -> Vector2<f32> {
    Vector2::new(x as f32, y as f32)
}

/// Top-left and bottom-right corners. Computed in f32 so points that have
/// drifted to the edge of the i32 range cannot overflow.
fn rect_corners(x: i32, y: i32, width: u32, height: u32) -> (Vector2<f32>, Vector2<f32>) {
    let top_left = corner(x, y);
    let bottom_right = Vector2::new(top_left.x + width as f32, top_left.y + height as f32);
    (top_left, bottom_right)
}

// pixel centers sit half a unit in from the top-left corner
fn center(at: (i32, i32)) -> Vector2<f32> {
    Vector2::new(at.0 as f32 + 0.5, at.1 as f32 + 0.5)
}

impl Canvas for Speedy2dCanvas<'_> {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        let (top_left, bottom_right) = rect_corners(x, y, width, height);
        let rect = Rectangle::new(top_left, bottom_right);
        self.graphics.draw_rectangle(rect, color.into());
    }

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        self.graphics
            .draw_line(center(from), center(to), 1.0, color.into());
    }

    fn draw_pixel(&mut self, at: (i32, i32), color: Rgb) {
        self.fill_rect(at.0, at.1, 1, 1, color);
    }

    fn draw_text(&mut self, at: (i32, i32), text: &str, color: Rgb) {
        let block = self
            .font
            .layout_text(text, self.font_size, TextOptions::new());
        self.graphics
            .draw_text(corner(at.0, at.1), color.into(), &block);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::bitmap::tests::ascii_image;
    use crate::graph::{GraphOptions, Pt};

    #[derive(Debug, PartialEq)]
    pub(crate) enum Op {
        Fill(i32, i32, u32, u32, Rgb),
        Line((i32, i32), (i32, i32)),
        Pixel((i32, i32)),
        Text((i32, i32), String),
    }

    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
            self.ops.push(Op::Fill(x, y, width, height, color));
        }

        fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
            assert_eq!(color, Rgb::BLACK);
            self.ops.push(Op::Line(from, to));
        }

        fn draw_pixel(&mut self, at: (i32, i32), color: Rgb) {
            assert_eq!(color, Rgb::BLACK);
            self.ops.push(Op::Pixel(at));
        }

        fn draw_text(&mut self, at: (i32, i32), text: &str, color: Rgb) {
            assert_eq!(color, Rgb::BLACK);
            self.ops.push(Op::Text(at, text.to_string()));
        }
    }

    #[test]
    fn linked_pair_draws_line_and_neighbor() {
        let g = PointGraph::build(&ascii_image(&["##"]), GraphOptions::default());
        let mut canvas = Recorder::default();
        draw_graph(&mut canvas, &g);
        assert_eq!(
            canvas.ops,
            vec![
                Op::Pixel((100, 100)),
                Op::Line((100, 100), (101, 100)),
                Op::Pixel((101, 100)),
                Op::Pixel((101, 100)),
            ]
        );
    }

    #[test]
    fn frame_order() {
        let g = PointGraph::build(&ascii_image(&["#", "#"]), GraphOptions::default());
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &g, "16.000");
        assert_eq!(canvas.ops.first(), Some(&Op::Fill(0, 0, 201, 202, Rgb::WHITE)));
        assert_eq!(canvas.ops.last(), Some(&Op::Text((0, 0), "16.000".into())));
        assert!(canvas.ops.contains(&Op::Line((100, 100), (100, 101))));
    }

    #[test]
    fn empty_graph_draws_background_and_text() {
        let g = PointGraph::build(&ascii_image(&["..."]), GraphOptions::default());
        let mut canvas = Recorder::default();
        draw_frame(&mut canvas, &g, "00.000");
        assert_eq!(canvas.ops.len(), 2);
    }

    #[test]
    fn far_drifted_points_draw_without_overflow() {
        let mut g = PointGraph::build(&ascii_image(&["##"]), GraphOptions::default());
        for coord in g.coords_mut() {
            *coord = Pt::new(3.0e9, -3.0e9);
        }
        let mut canvas = Recorder::default();
        draw_graph(&mut canvas, &g);
        let far = (i32::MAX, i32::MIN);
        assert_eq!(canvas.ops[0], Op::Pixel(far));
        assert_eq!(canvas.ops[1], Op::Line(far, far));

        let (top_left, bottom_right) = rect_corners(far.0, far.1, 1, 1);
        assert_eq!(top_left, Vector2::new(i32::MAX as f32, i32::MIN as f32));
        assert!(bottom_right.x >= top_left.x);
        assert!(bottom_right.y >= top_left.y);
    }

    #[test]
    fn rect_corners_span_size() {
        let (a, b) = rect_corners(-2, 3, 4, 5);
        assert_eq!(a, Vector2::new(-2.0, 3.0));
        assert_eq!(b, Vector2::new(2.0, 8.0));
    }

    #[test]
    fn rgb_converts_to_color() {
        let c: Color = Rgb::WHITE.into();
        assert_eq!(c, Color::WHITE);
    }
}
