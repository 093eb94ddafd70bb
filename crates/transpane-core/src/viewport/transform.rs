use crate::geometry::{Point, PxRect};

/// Pan (screen pixels) and zoom shared by both panes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub pan_x: f32,
    pub pan_y: f32,
    pub scale: f32,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        pan_x: 0.0,
        pan_y: 0.0,
        scale: 1.0,
    };

    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    /// Scale `rect` about its own center, then offset it by the pan.
    pub fn apply_to(&self, rect: PxRect) -> PxRect {
        let c = rect.center();
        PxRect::from_center_size(
            Point::new(c.x + self.pan_x, c.y + self.pan_y),
            rect.width * self.scale,
            rect.height * self.scale,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
