use bevy::prelude::*;
use bevy::core_pipeline::tonemapping::Tonemapping;
use crate::components::{CameraRig, CapsuleShape, KinematicBody, Player};
use crate::locomotion::{LocomotionConfig, LocomotionContext, LookAngles};

/// Spawn point, with the feet on the arena floor
const SPAWN_FEET: Vec3 = Vec3::new(0.0, 0.0, 4.0);

/// Camera height above the body origin while standing
const EYE_OFFSET: Vec3 = Vec3::new(0.0, 0.6, 0.0);

/// Spawn the player body with its first-person camera rig as a child
pub fn spawn_player(mut commands: Commands, config: Res<LocomotionConfig>) {
    let shape = CapsuleShape::new(config.player_radius, config.standing_height);
    let rig_transform = Transform::from_translation(EYE_OFFSET);
    let context = LocomotionContext::new(config.clone(), &shape, &rig_transform);

    let origin = SPAWN_FEET + Vec3::Y * config.standing_height * 0.5;

    commands
        .spawn((
            Player,
            Transform::from_translation(origin),
            Visibility::default(),
            KinematicBody::default(),
            shape,
            LookAngles::default(),
            context,
        ))
        .with_children(|parent| {
            parent.spawn((
                CameraRig,
                Camera3d::default(),
                Camera {
                    hdr: true,
                    ..default()
                },
                Tonemapping::TonyMcMapface,
                rig_transform,
            ));
        });

    info!("Player spawned at {:?}", origin);
}
