/*
 * World Module
 *
 * The rectangle agents live in. World space has its origin in the top-left
 * corner with y growing downwards; the renderer maps it onto nannou's
 * centred, y-up window space.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Bounds covering a nannou window rectangle
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.w(), rect.h())
    }

    // Pull a position back inside the rectangle shrunk by `radius` on every side.
    // Compared in sequence instead of f32::clamp so a world narrower than the
    // agent cannot panic; the far edge wins in that case.
    pub fn clamp(&self, position: Vec2, radius: f32) -> Vec2 {
        let mut clamped = position;

        if clamped.x < radius {
            clamped.x = radius;
        }
        if clamped.x > self.width - radius {
            clamped.x = self.width - radius;
        }
        if clamped.y < radius {
            clamped.y = radius;
        }
        if clamped.y > self.height - radius {
            clamped.y = self.height - radius;
        }

        clamped
    }

    #[cfg(test)]
    pub fn contains(&self, position: Vec2, radius: f32) -> bool {
        position.x >= radius
            && position.x <= self.width - radius
            && position.y >= radius
            && position.y <= self.height - radius
    }

    // Convert a world point into window coordinates for a window of the same size
    pub fn to_screen(&self, position: Vec2) -> Vec2 {
        vec2(position.x - self.width / 2.0, self.height / 2.0 - position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_every_side_inside() {
        let bounds = WorldBounds::new(100.0, 50.0);
        assert_eq!(bounds.clamp(vec2(-3.0, 60.0), 5.0), vec2(5.0, 45.0));
        assert_eq!(bounds.clamp(vec2(120.0, 1.0), 5.0), vec2(95.0, 5.0));
        assert_eq!(bounds.clamp(vec2(40.0, 20.0), 5.0), vec2(40.0, 20.0));
    }

    #[test]
    fn clamp_tolerates_world_narrower_than_agent() {
        let bounds = WorldBounds::new(4.0, 4.0);
        let clamped = bounds.clamp(vec2(0.0, 0.0), 5.0);
        assert_eq!(clamped, vec2(-1.0, -1.0));
    }

    #[test]
    fn screen_mapping_centres_and_flips_y() {
        let bounds = WorldBounds::new(200.0, 100.0);
        assert_eq!(bounds.to_screen(vec2(0.0, 0.0)), vec2(-100.0, 50.0));
        assert_eq!(bounds.to_screen(vec2(100.0, 50.0)), vec2(0.0, 0.0));
        assert_eq!(bounds.to_screen(vec2(200.0, 100.0)), vec2(100.0, -50.0));
    }
}
