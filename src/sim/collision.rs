//! Body integration and platform collision
//!
//! Platforms are one-way: only their top surface is solid, and only for a
//! body crossing it downward. There is no side or underside collision.

use serde::{Deserialize, Serialize};

use super::geometry::Platform;
use super::state::Body;

/// What the body ended the tick standing on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    /// Caught by the platform at this index (declaration order)
    Platform(usize),
    /// Clamped to the bottom of the world
    Floor,
    Airborne,
}

impl Contact {
    pub fn is_grounded(&self) -> bool {
        !matches!(self, Contact::Airborne)
    }
}

/// Swept top-surface test for one platform
///
/// Catches the body if it overlaps the platform horizontally and its bottom
/// edge went from at-or-above the surface to at-or-below it this tick.
#[inline]
pub fn crosses_surface(body: &Body, prev_bottom: f32, platform: &Platform) -> bool {
    let surface = platform.surface();
    body.rect().overlaps_x(&platform.rect) && prev_bottom <= surface && body.bottom() >= surface
}

/// Advance the body by one tick and resolve landing
///
/// Applies `dx`, then gravity to `dy`, then `dy`. The first platform (in
/// declaration order) whose surface was crossed wins. The floor only catches
/// the body when no platform did.
pub fn integrate(body: &mut Body, platforms: &[Platform], world_height: f32, gravity: f32) -> Contact {
    body.pos.x += body.vel.x;

    let prev_bottom = body.bottom();
    body.vel.y += gravity;
    body.pos.y += body.vel.y;

    let caught = platforms
        .iter()
        .position(|platform| crosses_surface(body, prev_bottom, platform));

    let contact = match caught {
        Some(index) => {
            body.pos.y = platforms[index].surface() - body.size.y;
            Contact::Platform(index)
        }
        None if body.bottom() > world_height => {
            body.pos.y = world_height - body.size.y;
            Contact::Floor
        }
        None => Contact::Airborne,
    };

    if contact.is_grounded() {
        body.vel.y = 0.0;
    }
    body.on_ground = contact.is_grounded();
    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use glam::Vec2;

    const G: f32 = 0.5;
    const WORLD_H: f32 = 600.0;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Rect::new(x, y, 30.0, 30.0))
    }

    #[test]
    fn test_free_fall_accumulates_gravity() {
        let mut body = body_at(0.0, 0.0);
        let contact = integrate(&mut body, &[], WORLD_H, G);
        assert_eq!(contact, Contact::Airborne);
        assert_eq!(body.vel.y, 0.5);
        assert_eq!(body.pos.y, 0.5);
        integrate(&mut body, &[], WORLD_H, G);
        assert_eq!(body.vel.y, 1.0);
        assert_eq!(body.pos.y, 1.5);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_landing_snaps_to_surface() {
        let platform = Platform::new(0.0, 100.0, 200.0, 20.0);
        // Bottom at 98, falling at 5/tick
        let mut body = body_at(10.0, 68.0);
        body.vel.y = 4.5;
        let contact = integrate(&mut body, &[platform], WORLD_H, G);
        assert_eq!(contact, Contact::Platform(0));
        assert!(body.on_ground);
        assert_eq!(body.vel.y, 0.0);
        assert_eq!(body.pos.y + body.size.y, 100.0);
    }

    #[test]
    fn test_resting_body_stays_grounded() {
        let platform = Platform::new(0.0, 100.0, 200.0, 20.0);
        let mut body = body_at(10.0, 70.0);
        for _ in 0..10 {
            assert_eq!(integrate(&mut body, &[platform], WORLD_H, G), Contact::Platform(0));
            assert_eq!(body.pos.y, 70.0);
        }
    }

    #[test]
    fn test_rising_body_passes_through_from_below() {
        let platform = Platform::new(0.0, 100.0, 200.0, 20.0);
        // Bottom at 130, moving up through the platform
        let mut body = body_at(10.0, 100.0);
        body.vel.y = -12.0;
        assert_eq!(integrate(&mut body, &[platform], WORLD_H, G), Contact::Airborne);
        assert_eq!(body.pos.y, 88.5);
    }

    #[test]
    fn test_falling_body_already_below_surface_passes_through() {
        let platform = Platform::new(0.0, 100.0, 200.0, 20.0);
        // Bottom at 105 before the tick, already past the surface
        let mut body = body_at(10.0, 75.0);
        body.vel.y = 2.0;
        assert_eq!(integrate(&mut body, &[platform], WORLD_H, G), Contact::Airborne);
        assert_eq!(body.pos.y, 77.5);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_no_catch_without_horizontal_overlap() {
        // Touching the platform's right edge is not overlap
        let platform = Platform::new(0.0, 100.0, 100.0, 20.0);
        let mut body = body_at(100.0, 68.0);
        body.vel.y = 4.5;
        assert_eq!(integrate(&mut body, &[platform], WORLD_H, G), Contact::Airborne);
    }

    #[test]
    fn test_first_declared_platform_wins() {
        // Both surfaces crossed in one tick; the later-declared upper one loses
        let lower = Platform::new(0.0, 110.0, 200.0, 10.0);
        let upper = Platform::new(0.0, 100.0, 200.0, 10.0);
        let mut body = body_at(10.0, 60.0);
        body.vel.y = 20.0;
        let contact = integrate(&mut body, &[lower, upper], WORLD_H, G);
        assert_eq!(contact, Contact::Platform(0));
        assert_eq!(body.bottom(), 110.0);
    }

    #[test]
    fn test_floor_fallback() {
        let mut body = body_at(10.0, 569.0);
        body.vel.y = 3.0;
        assert_eq!(integrate(&mut body, &[], WORLD_H, G), Contact::Floor);
        assert_eq!(body.bottom(), WORLD_H);
        assert!(body.on_ground);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_horizontal_motion_applied_before_landing_check() {
        // Starts off the platform, slides onto it in the same tick
        let platform = Platform::new(100.0, 100.0, 100.0, 20.0);
        let mut body = body_at(68.0, 70.0);
        body.vel = Vec2::new(5.0, 0.0);
        assert_eq!(integrate(&mut body, &[platform], WORLD_H, G), Contact::Platform(0));
        assert_eq!(body.pos.x, 73.0);
    }
}
