use shared::domain::{Point, Rect, Size};

/// Largest corner radius the painter can draw (`egui::CornerRadius` is `u8`).
pub const MAX_CORNER_RADIUS: f32 = 255.0;

/// Visible region of a frameless window: a rounded rectangle anchored at the
/// window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedMask {
    size: Size,
    radius: f32,
}

impl RoundedMask {
    /// The radius is clamped to half of the shorter side so the corners never
    /// overlap, and to [`MAX_CORNER_RADIUS`]; negative or NaN radii collapse to
    /// square corners.
    pub fn new(size: Size, radius: f32) -> Self {
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        let radius = if radius.is_nan() { 0.0 } else { radius };
        let radius = radius.clamp(0.0, (size.min_side() / 2.0).min(MAX_CORNER_RADIUS));
        Self { size, radius }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(Point::ZERO, self.size)
    }

    pub fn contains(&self, p: Point) -> bool {
        if !self.bounds().contains(p) {
            return false;
        }
        let r = self.radius;
        if r <= 0.0 {
            return true;
        }

        // Nearest corner-circle center; only points in a corner square need it.
        let cx = if p.x < r {
            r
        } else if p.x > self.size.width - r {
            self.size.width - r
        } else {
            return true;
        };
        let cy = if p.y < r {
            r
        } else if p.y > self.size.height - r {
            self.size.height - r
        } else {
            return true;
        };

        let dx = p.x - cx;
        let dy = p.y - cy;
        dx * dx + dy * dy <= r * r
    }
}
