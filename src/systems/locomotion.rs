use bevy::prelude::*;

use crate::components::{CameraRig, CapsuleShape, KinematicBody, Player};
use crate::locomotion::{
    GroundSensor, LocomotionContext, LocomotionInput, ProbeGroundSensor, SprintEvent,
};
use crate::world::ArenaWorld;

/// Logic pass: run the state machine once per rendered frame
pub fn advance_locomotion(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    arena: Res<ArenaWorld>,
    mut query: Query<
        (&Transform, &mut LocomotionContext, &mut KinematicBody, &mut CapsuleShape),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (transform, mut ctx, mut body, mut shape) in query.iter_mut() {
        // Probe from the collider's center so a lowered collider keeps its feet on the floor
        let ground = ProbeGroundSensor::new(
            &*arena,
            transform.translation + shape.center,
            ctx.resting_height(),
            ctx.config().ground_probe_margin,
        );
        let state_before = ctx.state();

        ctx.advance(dt, &input, &ground, &mut *body, &mut *shape);

        if ctx.state() != state_before {
            debug!("locomotion {} -> {}", state_before.label(), ctx.state().label());
        }

        let sprint = ctx.sprint();
        match ctx.sprint_event() {
            Some(SprintEvent::Started) => {
                debug!("sprint started with {:.2}s available", sprint.timer());
            }
            Some(SprintEvent::Stopped) => {
                debug!("sprint stopped at {:.2}s remaining", sprint.timer());
            }
            Some(SprintEvent::Drained) => debug!("sprint energy drained"),
            Some(SprintEvent::Recharged) => {
                debug!("sprint energy recharged (resumed: {})", sprint.is_sprinting());
            }
            None => {}
        }
    }
}

/// Physics pass: hand the resolved horizontal velocity to the body before integration
pub fn resolve_locomotion_velocity(
    input: Res<LocomotionInput>,
    arena: Res<ArenaWorld>,
    mut query: Query<
        (&Transform, &CapsuleShape, &mut LocomotionContext, &mut KinematicBody),
        With<Player>,
    >,
) {
    for (transform, shape, mut ctx, mut body) in query.iter_mut() {
        let grounded = ProbeGroundSensor::new(
            &*arena,
            transform.translation + shape.center,
            ctx.resting_height(),
            ctx.config().ground_probe_margin,
        )
        .is_grounded();

        ctx.resolve_velocity(&input, grounded, &mut *body);
    }
}

/// Ease the camera rig toward the offset for the current locomotion state
pub fn animate_camera_offset(
    time: Res<Time>,
    player_query: Query<&LocomotionContext, With<Player>>,
    mut rig_query: Query<&mut Transform, With<CameraRig>>,
) {
    let Ok(ctx) = player_query.get_single() else {
        return;
    };

    for mut rig_transform in rig_query.iter_mut() {
        ctx.animate_camera(time.delta_secs(), &mut *rig_transform);
    }
}
