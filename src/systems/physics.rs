use bevy::prelude::*;

use crate::components::{CapsuleShape, KinematicBody};
use crate::world::ArenaWorld;

const GRAVITY: f32 = 9.81;

/// Horizontal deceleration while supported (units/second²)
const GROUND_FRICTION: f32 = 8.0;

/// Fixed-step kinematic integration: gravity, per-axis AABB collision, friction.
///
/// Boxes the body already overlaps (e.g. standing up under a low roof) only
/// block vertical moves toward them, so the player can walk out but not jump through.
pub fn integrate_bodies(
    time: Res<Time>,
    arena: Res<ArenaWorld>,
    mut query: Query<(&mut Transform, &mut KinematicBody, &CapsuleShape)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut body, shape) in query.iter_mut() {
        body.velocity.y -= GRAVITY * dt;

        // Vertical movement first
        let dy = body.velocity.y * dt;
        let target = transform.translation + Vec3::Y * dy;
        if is_blocked(&arena, shape, transform.translation, target) {
            if body.velocity.y <= 0.0 {
                // Close the remaining gap so we rest exactly on the support
                let (min, _) = shape.bounds(transform.translation);
                let feet = Vec3::new(transform.translation.x, min.y, transform.translation.z);
                if let Some(gap) = arena.distance_to_support(feet) {
                    if gap < -dy {
                        transform.translation.y -= gap;
                    }
                }
                body.on_floor = true;
            }
            body.velocity.y = 0.0;
        } else {
            transform.translation = target;
            body.on_floor = false;
        }

        // Then each horizontal axis separately so walls can be slid along
        for axis in [Vec3::X, Vec3::Z] {
            let delta = axis * body.velocity.dot(axis) * dt;
            if delta.length_squared() < 1e-10 {
                continue;
            }
            let target = transform.translation + delta;
            if is_blocked(&arena, shape, transform.translation, target) {
                let blocked = axis * body.velocity.dot(axis);
                body.velocity -= blocked;
            } else {
                transform.translation = target;
            }
        }

        if body.on_floor {
            body.velocity = apply_friction(body.velocity, GROUND_FRICTION * dt);
        }
    }
}

fn is_blocked(arena: &ArenaWorld, shape: &CapsuleShape, from: Vec3, to: Vec3) -> bool {
    let (cur_min, cur_max) = shape.bounds(from);
    let (min, max) = shape.bounds(to);
    let center_y = (cur_min.y + cur_max.y) * 0.5;
    let dy = to.y - from.y;

    arena.boxes.iter().filter(|b| b.overlaps(min, max)).any(|b| {
        if !b.overlaps(cur_min, cur_max) {
            return true;
        }
        // Already inside: only vertical moves deeper into the box are stopped
        dy * (b.center().y - center_y) > 0.0
    })
}

/// Reduce horizontal speed by `amount`, never reversing direction
fn apply_friction(velocity: Vec3, amount: f32) -> Vec3 {
    let planar = Vec3::new(velocity.x, 0.0, velocity.z);
    let speed = planar.length();
    if speed <= amount {
        return Vec3::new(0.0, velocity.y, 0.0);
    }
    let scaled = planar * ((speed - amount) / speed);
    Vec3::new(scaled.x, velocity.y, scaled.z)
}
