use std::collections::HashMap;

use crate::bitmap::PixelSource;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pt {
    pub x: f64,
    pub y: f64,
}

impl Pt {
    pub fn new(x: f64, y: f64) -> Pt {
        Pt { x, y }
    }

    /// Integer pixel this point lands on, truncating toward zero.
    pub fn pixel(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Index of a point inside its [`PointGraph`]. Stays valid for the graph's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointId(usize);

impl PointId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The two adjacency directions a point may link along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    Right = 0,
    Below = 1,
}

impl Link {
    pub const ALL: [Link; 2] = [Link::Right, Link::Below];

    fn offset(self) -> (u32, u32) {
        match self {
            Link::Right => (1, 0),
            Link::Below => (0, 1),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Point {
    pub coord: Pt,
    links: [Option<PointId>; 2],
}

impl Point {
    fn new(x: u32, y: u32) -> Point {
        Point {
            coord: Pt::new(f64::from(x), f64::from(y)),
            links: [None, None],
        }
    }

    pub fn link(&self, slot: Link) -> Option<PointId> {
        self.links[slot as usize]
    }

    pub fn links(&self) -> impl Iterator<Item = PointId> + '_ {
        self.links.iter().flatten().copied()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GraphOptions {
    /// Extra window size, split evenly between both sides of each axis.
    pub margin: u32,
    /// When false only bare points are produced ("mist").
    pub link: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        GraphOptions {
            margin: 200,
            link: true,
        }
    }
}

/// Points derived from the black pixels of an image. Built once, then only
/// coordinates move; link identities never change.
#[derive(Clone, Debug)]
pub struct PointGraph {
    points: Vec<Point>,
    // first-pass lookup from source pixel to point, kept for callers
    by_pixel: HashMap<(u32, u32), PointId>,
    window: (u32, u32),
}

impl PointGraph {
    pub fn build<S: PixelSource + ?Sized>(source: &S, options: GraphOptions) -> PointGraph {
        let (width, height) = (source.width(), source.height());

        let mut points = Vec::new();
        let mut by_pixel: HashMap<(u32, u32), PointId> = HashMap::new();
        for y in 0..height {
            for x in 0..width {
                if source.is_black(x, y) {
                    by_pixel.insert((x, y), PointId(points.len()));
                    points.push(Point::new(x, y));
                }
            }
        }

        // nothing to show: the window shrinks to the bare margin
        let window = if points.is_empty() {
            (options.margin, options.margin)
        } else {
            (width + options.margin, height + options.margin)
        };

        if options.link {
            for y in 0..height {
                for x in 0..width {
                    let Some(&id) = by_pixel.get(&(x, y)) else {
                        continue;
                    };
                    for slot in Link::ALL {
                        let (dx, dy) = slot.offset();
                        let (nx, ny) = (x + dx, y + dy);
                        if source.is_black(nx, ny) {
                            points[id.0].links[slot as usize] = by_pixel.get(&(nx, ny)).copied();
                        }
                    }
                }
            }
        }

        let offset_x = f64::from(window.0 / 2) - f64::from(width / 2);
        let offset_y = f64::from(window.1 / 2) - f64::from(height / 2);
        for p in &mut points {
            p.coord.x += offset_x;
            p.coord.y += offset_y;
        }

        let graph = PointGraph {
            points,
            by_pixel,
            window,
        };
        tracing::info!(
            points = graph.len(),
            links = graph.link_count(),
            window_width = window.0,
            window_height = window.1,
            "point graph built"
        );
        graph
    }

    /// Window size the graph was centered in.
    pub fn window_size(&self) -> (u32, u32) {
        self.window
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn link_count(&self) -> usize {
        self.points.iter().map(|p| p.links().count()).sum()
    }

    pub fn get(&self, id: PointId) -> &Point {
        &self.points[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn coords_mut(&mut self) -> impl Iterator<Item = &mut Pt> {
        self.points.iter_mut().map(|p| &mut p.coord)
    }

    /// Point built from the image pixel at `(x, y)`.
    pub fn find_pixel(&self, x: u32, y: u32) -> Option<PointId> {
        self.by_pixel.get(&(x, y)).copied()
    }
}
