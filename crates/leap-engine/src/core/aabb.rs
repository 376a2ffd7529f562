use glam::Vec2;

use crate::api::error::GeometryError;

/// Axis-aligned bounding box in world space.
/// `min` is the top-left corner; Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    /// Build a box from its top-left corner and size.
    /// Sizes are not checked here; use [`Aabb::try_new`] at construction time.
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Build a box, rejecting non-positive or non-finite sizes.
    pub fn try_new(min: Vec2, size: Vec2) -> Result<Self, GeometryError> {
        check_size(size)?;
        if !min.is_finite() {
            return Err(GeometryError::NonFinite { x: min.x, y: min.y });
        }
        Ok(Self { min, size })
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap on both axes. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Validate a width/height pair for a collidable box.
pub fn check_size(size: Vec2) -> Result<(), GeometryError> {
    if !size.is_finite() {
        return Err(GeometryError::NonFinite {
            x: size.x,
            y: size.y,
        });
    }
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(GeometryError::NonPositiveSize {
            width: size.x,
            height: size.y,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn edges_derive_from_origin_and_size() {
        let b = aabb(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.top(), 20.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn overlapping_boxes() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&aabb(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&aabb(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&aabb(-10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn separated_on_one_axis_does_not_overlap() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        // x ranges overlap, y ranges don't
        assert!(!a.overlaps(&aabb(2.0, 50.0, 4.0, 4.0)));
    }

    #[test]
    fn contained_box_overlaps() {
        let outer = aabb(0.0, 0.0, 100.0, 100.0);
        let inner = aabb(40.0, 40.0, 1.0, 1.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn try_new_rejects_degenerate_sizes() {
        assert!(Aabb::try_new(Vec2::ZERO, Vec2::new(0.0, 5.0)).is_err());
        assert!(Aabb::try_new(Vec2::ZERO, Vec2::new(5.0, -1.0)).is_err());
        assert!(Aabb::try_new(Vec2::ZERO, Vec2::new(f32::NAN, 1.0)).is_err());
        assert!(Aabb::try_new(Vec2::new(f32::INFINITY, 0.0), Vec2::ONE).is_err());
        assert!(Aabb::try_new(Vec2::ZERO, Vec2::new(1.0, 1.0)).is_ok());
    }
}
