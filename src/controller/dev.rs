//! Controller domain: debug-only test course.

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::physics::GameLayer;

const PROP_COUNT: usize = 12;

/// Ground, a ramp, walls, stepped platforms and a seeded scatter of crates.
pub fn spawn_test_course(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    seed: u64,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let prop_color = Color::srgb(0.7, 0.6, 0.3);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Prop]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Prop]);

    let mut static_box = |commands: &mut Commands,
                          name: &'static str,
                          size: Vec3,
                          transform: Transform,
                          color: Color,
                          layers: CollisionLayers| {
        commands.spawn((
            Name::new(name),
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(materials.add(color)),
            transform,
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            layers,
        ));
    };

    // Ground
    static_box(
        commands,
        "Ground",
        Vec3::new(60.0, 1.0, 60.0),
        Transform::from_xyz(0.0, -0.5, 0.0),
        ground_color,
        ground_layers,
    );

    // 20 degree ramp up to the first platform
    static_box(
        commands,
        "Ramp",
        Vec3::new(4.0, 0.3, 10.0),
        Transform::from_xyz(8.0, 1.5, -6.0)
            .with_rotation(Quat::from_rotation_x(20f32.to_radians())),
        ground_color,
        ground_layers,
    );

    // Walls
    for (name, x, z, width, depth) in [
        ("North Wall", 0.0, -30.0, 60.0, 1.0),
        ("South Wall", 0.0, 30.0, 60.0, 1.0),
        ("East Wall", 30.0, 0.0, 1.0, 60.0),
        ("West Wall", -30.0, 0.0, 1.0, 60.0),
    ] {
        static_box(
            commands,
            name,
            Vec3::new(width, 4.0, depth),
            Transform::from_xyz(x, 2.0, z),
            wall_color,
            wall_layers,
        );
    }

    // Stepped platforms for jump testing
    for (i, height) in [1.0, 2.2, 3.4].into_iter().enumerate() {
        static_box(
            commands,
            "Platform",
            Vec3::new(3.0, 0.5, 3.0),
            Transform::from_xyz(-8.0 - 4.0 * i as f32, height, -8.0),
            platform_color,
            ground_layers,
        );
    }

    // Props
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let prop_layers = CollisionLayers::new(
        GameLayer::Prop,
        [GameLayer::Ground, GameLayer::Wall, GameLayer::Player, GameLayer::Prop],
    );
    for _ in 0..PROP_COUNT {
        let size = rng.random_range(0.4..1.2);
        let position = Vec3::new(
            rng.random_range(-20.0..20.0),
            size * 0.5 + 0.05,
            rng.random_range(5.0..20.0),
        );

        commands.spawn((
            Name::new("Crate"),
            Mesh3d(meshes.add(Cuboid::from_length(size))),
            MeshMaterial3d(materials.add(prop_color)),
            Transform::from_translation(position),
            RigidBody::Dynamic,
            Collider::cuboid(size, size, size),
            prop_layers,
        ));
    }

    info!("Spawned test course (seed {})", seed);
}
