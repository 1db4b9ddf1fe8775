use avian3d::prelude::*;
use bevy::prelude::*;

use strider::StriderPlugin;
use strider::content::{CameraSettings, MovementSettings};
use strider::controller::{dev::spawn_test_course, spawn_follow_camera, spawn_player};

const COURSE_SEED: u64 = 7;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Strider".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins(StriderPlugin::default())
    .add_systems(Startup, setup_scene);

    #[cfg(feature = "dev-tools")]
    app.add_plugins(strider::debug::DebugOverlayPlugin);

    app.run();
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    movement: Res<MovementSettings>,
    camera: Res<CameraSettings>,
) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    spawn_test_course(&mut commands, &mut meshes, &mut materials, COURSE_SEED);

    let player = spawn_player(&mut commands, &movement, Vec3::new(0.0, 2.0, 0.0));
    commands.entity(player).insert((
        Mesh3d(meshes.add(Capsule3d::new(0.4, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
    ));
    spawn_follow_camera(&mut commands, &camera, player);
}
