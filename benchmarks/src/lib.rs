//! Shared setup helpers for strider2d benchmarks.
//!
//! ## Running
//!
//! All benches (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench controller
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench controller -- step

use glam::Vec2;
use strider2d::{
    BoxCollider, CharacterController, ColliderId, ContactFilter, ControllerConfig, RayCaster,
    RayHit,
};

/// Infinite flat ground plane; downward rays hit it, everything else misses.
pub struct FlatGround {
    pub height: f32,
}

impl RayCaster for FlatGround {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        filter: &ContactFilter,
        max_distance: f32,
        hits: &mut [Option<RayHit>],
    ) -> usize {
        if filter.layers.is_empty() || direction.y >= 0.0 {
            return 0;
        }
        let distance = origin.y - self.height;
        if !(0.0..=max_distance).contains(&distance) {
            return 0;
        }
        hits[0] = Some(RayHit {
            collider: ColliderId(1),
            point: Vec2::new(origin.x, self.height),
            normal: Vec2::Y,
            distance,
        });
        1
    }
}

/// A world with nothing in it; every cast misses.
pub struct EmptyWorld;

impl RayCaster for EmptyWorld {
    fn cast(
        &self,
        _origin: Vec2,
        _direction: Vec2,
        _filter: &ContactFilter,
        _max_distance: f32,
        _hits: &mut [Option<RayHit>],
    ) -> usize {
        0
    }
}

/// A controller standing on ground at the given height, with the standard
/// 0.5 x 1.0 body box.
pub fn standing_controller(ground_height: f32) -> CharacterController {
    CharacterController::new(ControllerConfig {
        position: Vec2::new(0.0, ground_height + 0.5),
        collider: Some(BoxCollider::new(Vec2::ZERO, Vec2::new(0.5, 1.0))),
        ..ControllerConfig::default()
    })
    .expect("valid benchmark configuration")
}

/// A controller with no box collider, exercising the fallback probe paths.
pub fn bare_controller() -> CharacterController {
    CharacterController::new(ControllerConfig {
        position: Vec2::new(0.0, 1.0),
        ..ControllerConfig::default()
    })
    .expect("valid benchmark configuration")
}
