use bevy::prelude::*;

use crate::locomotion::SpatialProbe;

/// Axis-aligned solid block in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl SolidBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap: touching faces do not count
    pub fn overlaps(&self, min: Vec3, max: Vec3) -> bool {
        min.x < self.max.x
            && max.x > self.min.x
            && min.y < self.max.y
            && max.y > self.min.y
            && min.z < self.max.z
            && max.z > self.min.z
    }

    fn covers_column(&self, x: f32, z: f32) -> bool {
        x >= self.min.x && x <= self.max.x && z >= self.min.z && z <= self.max.z
    }
}

/// Static collision geometry of the play area
#[derive(Resource, Debug, Clone, Default)]
pub struct ArenaWorld {
    pub boxes: Vec<SolidBox>,
}

impl ArenaWorld {
    /// Flat floor with a few platforms and a low tunnel that only fits a crouched player
    pub fn training_ground() -> Self {
        Self {
            boxes: vec![
                // Floor
                SolidBox::new(Vec3::new(-30.0, -1.0, -30.0), Vec3::new(30.0, 0.0, 30.0)),
                // Step-up platform
                SolidBox::new(Vec3::new(4.0, 0.0, -8.0), Vec3::new(8.0, 0.8, -4.0)),
                // Higher platform behind it
                SolidBox::new(Vec3::new(4.0, 0.0, -14.0), Vec3::new(8.0, 1.6, -10.0)),
                // Tunnel walls and roof
                SolidBox::new(Vec3::new(-9.0, 0.0, -16.0), Vec3::new(-8.0, 1.8, -6.0)),
                SolidBox::new(Vec3::new(-5.0, 0.0, -16.0), Vec3::new(-4.0, 1.8, -6.0)),
                SolidBox::new(Vec3::new(-9.0, 1.4, -16.0), Vec3::new(-4.0, 1.8, -6.0)),
                // Perimeter walls
                SolidBox::new(Vec3::new(-30.0, 0.0, -31.0), Vec3::new(30.0, 3.0, -30.0)),
                SolidBox::new(Vec3::new(-30.0, 0.0, 30.0), Vec3::new(30.0, 3.0, 31.0)),
                SolidBox::new(Vec3::new(-31.0, 0.0, -30.0), Vec3::new(-30.0, 3.0, 30.0)),
                SolidBox::new(Vec3::new(30.0, 0.0, -30.0), Vec3::new(31.0, 3.0, 30.0)),
            ],
        }
    }

    /// Distance from `origin` straight down to the nearest box top below it
    pub fn distance_to_support(&self, origin: Vec3) -> Option<f32> {
        self.boxes
            .iter()
            .filter(|b| b.covers_column(origin.x, origin.z) && b.max.y <= origin.y)
            .map(|b| origin.y - b.max.y)
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl SpatialProbe for ArenaWorld {
    fn probe_down(&self, origin: Vec3, max_distance: f32) -> bool {
        self.distance_to_support(origin)
            .is_some_and(|distance| distance <= max_distance)
    }
}

/// Spawn meshes for the arena boxes plus lighting
pub fn setup_arena(
    mut commands: Commands,
    arena: Res<ArenaWorld>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.38, 0.35),
        perceptual_roughness: 0.9,
        ..default()
    });
    let block_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.75, 0.55, 0.3),
        perceptual_roughness: 0.7,
        ..default()
    });

    for (index, solid) in arena.boxes.iter().enumerate() {
        let size = solid.size();
        let material = if index == 0 {
            floor_material.clone()
        } else {
            block_material.clone()
        };
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(material),
            Transform::from_translation(solid.center()),
        ));
    }

    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 0.99, 0.95),
            illuminance: 12000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.95, 1.0),
        brightness: 400.0,
    });

    commands.insert_resource(ClearColor(Color::srgb(0.5, 0.7, 0.95)));

    info!("Arena ready with {} solid boxes", arena.boxes.len());
}
