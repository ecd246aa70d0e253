use std::f32::consts::FRAC_PI_2;

use bevy::light::{DirectionalLightShadowMap, GlobalAmbientLight, NotShadowCaster};
use bevy::prelude::*;

use crate::camera::OrbitCamera;
use crate::placement::{Building, PlacementState};
use crate::scene::effects::{CompassLabelFactory, FacadeTextureFactory, GrassTextureFactory};
use crate::scene::{BuildingVisual, BuildingVisuals, SunLight, SunMarker};
use crate::solar::CompassPoint;
use crate::SHADOW_MAP_SIZE;

/// Edge length of the square ground plane.
const GROUND_SIZE: f32 = 300.0;
/// Distance of the compass markers from the origin.
const COMPASS_RADIUS: f32 = 140.0;
const POND_RADIUS: f32 = 8.0;
/// Width and length of the two crossing paths.
const PATH_SIZE: Vec2 = Vec2::new(3.0, 100.0);
const SUN_RADIUS: f32 = 8.0;
const SUN_GLOW_RADIUS: f32 = 12.0;
/// Slab thickness of roofs and bases.
const SLAB_THICKNESS: f32 = 3.0;

/// Ground positions of the decorative trees.
const TREE_POSITIONS: [(f32, f32); 13] = [
    (-60.0, -40.0),
    (-55.0, 20.0),
    (-50.0, 50.0),
    (-70.0, 0.0),
    (60.0, -40.0),
    (55.0, 20.0),
    (50.0, 50.0),
    (70.0, 0.0),
    (-20.0, -60.0),
    (20.0, -60.0),
    (0.0, 60.0),
    (-40.0, 60.0),
    (40.0, 60.0),
];

/// Edge length of the lettered badge on each compass marker.
const COMPASS_LABEL_SIZE: f32 = 10.0;

/// Marker colour per cardinal direction.
const COMPASS_MARKERS: [(CompassPoint, Color); 4] = [
    (CompassPoint::North, Color::srgb_u8(0x96, 0xce, 0xb4)),
    (CompassPoint::East, Color::srgb_u8(0xff, 0x6b, 0x6b)),
    (CompassPoint::South, Color::srgb_u8(0x45, 0xb7, 0xd1)),
    (CompassPoint::West, Color::srgb_u8(0x4e, 0xcd, 0xc4)),
];

/// Build the site, buildings, sun, and orbit camera.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    state: Res<PlacementState>,
) {
    setup_environment(&mut commands);
    spawn_ground(&mut commands, &mut meshes, &mut materials, &mut images);
    spawn_compass_markers(&mut commands, &mut meshes, &mut materials, &mut images);
    spawn_landscape(&mut commands, &mut meshes, &mut materials);
    spawn_trees(&mut commands, &mut meshes, &mut materials);
    let visuals = spawn_buildings(&mut commands, &mut meshes, &mut materials, &mut images, state.buildings());
    commands.insert_resource(visuals);
    spawn_sun(&mut commands, &mut meshes, &mut materials);

    let orbit = OrbitCamera::default();
    commands.spawn((Camera3d::default(), orbit.transform(), orbit));
    info!("site ready with {} buildings", state.buildings().len());
}

/// Insert background, ambient-light, and shadow-map resources.
fn setup_environment(commands: &mut Commands) {
    // Placeholder values until the first sun update.
    commands.insert_resource(ClearColor(Color::BLACK));
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 0.0,
        affects_lightmapped_meshes: true,
    });
    commands.insert_resource(DirectionalLightShadowMap { size: SHADOW_MAP_SIZE });
}

fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    images: &mut ResMut<Assets<Image>>,
) {
    let grass = images.add(GrassTextureFactory::build_texture());
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(grass),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::default(),
    ));
}

fn spawn_compass_markers(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    images: &mut ResMut<Assets<Image>>,
) {
    let disc = meshes.add(Cylinder::new(6.0, 0.5));
    let label = meshes.add(Plane3d::default().mesh().size(COMPASS_LABEL_SIZE, COMPASS_LABEL_SIZE));
    for (point, color) in COMPASS_MARKERS {
        let ground = point.ground_direction() * COMPASS_RADIUS;
        let letter = point.name().chars().next().unwrap_or(' ');
        let label_material = materials.add(StandardMaterial {
            base_color_texture: Some(images.add(CompassLabelFactory::build_texture(letter, color))),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        commands
            .spawn((
                Mesh3d(disc.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: color,
                    emissive: color.to_linear() * 0.3,
                    ..default()
                })),
                Transform::from_xyz(ground.x, 0.25, ground.y),
                Name::new(format!("Compass {point}")),
            ))
            .with_children(|marker| {
                // Just above the disc top face.
                marker.spawn((
                    Mesh3d(label.clone()),
                    MeshMaterial3d(label_material),
                    Transform::from_xyz(0.0, 0.26, 0.0),
                    NotShadowCaster,
                ));
            });
    }
}

/// Pond at the origin and two crossing paths.
fn spawn_landscape(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(POND_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x4a, 0x90, 0xe2),
            perceptual_roughness: 0.1,
            reflectance: 0.8,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.1, 0.0).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        NotShadowCaster,
    ));

    let path_mesh = meshes.add(Plane3d::default().mesh().size(PATH_SIZE.x, PATH_SIZE.y));
    let path_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xd2, 0xb4, 0x8c),
        perceptual_roughness: 1.0,
        ..default()
    });
    for rotation in [0.0, FRAC_PI_2] {
        commands.spawn((
            Mesh3d(path_mesh.clone()),
            MeshMaterial3d(path_material.clone()),
            Transform::from_xyz(0.0, 0.05, 0.0).with_rotation(Quat::from_rotation_y(rotation)),
            NotShadowCaster,
        ));
    }
}

fn spawn_trees(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let trunk_mesh = meshes.add(ConicalFrustum {
        radius_top: 0.5,
        radius_bottom: 0.8,
        height: 6.0,
    });
    let leaves_mesh = meshes.add(Sphere::new(4.0));
    let trunk_material = materials.add(Color::srgb_u8(0x8b, 0x45, 0x13));
    let leaves_material = materials.add(Color::srgb_u8(0x22, 0x8b, 0x22));

    for (x, z) in TREE_POSITIONS {
        commands
            .spawn((Transform::from_xyz(x, 0.0, z), Visibility::default()))
            .with_children(|tree| {
                tree.spawn((
                    Mesh3d(trunk_mesh.clone()),
                    MeshMaterial3d(trunk_material.clone()),
                    Transform::from_xyz(0.0, 3.0, 0.0),
                ));
                tree.spawn((
                    Mesh3d(leaves_mesh.clone()),
                    MeshMaterial3d(leaves_material.clone()),
                    Transform::from_xyz(0.0, 8.0, 0.0),
                ));
            });
    }
}

/// Spawn one root per building with body, roof, and base children.
fn spawn_buildings(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    images: &mut ResMut<Assets<Image>>,
    buildings: &[Building],
) -> BuildingVisuals {
    let facade = images.add(FacadeTextureFactory::build_texture());
    let roof_material = materials.add(Color::srgb_u8(0x34, 0x49, 0x5e));
    let base_material = materials.add(Color::srgb_u8(0x7f, 0x8c, 0x8d));

    let mut visuals = BuildingVisuals::default();
    for building in buildings {
        let footprint = building.footprint();
        let (height, width, depth) = (footprint.height(), footprint.width(), footprint.depth());
        // Each body owns its material so the selection tint stays local.
        let body_material = materials.add(StandardMaterial {
            base_color_texture: Some(facade.clone()),
            perceptual_roughness: 0.7,
            ..default()
        });
        let root = commands
            .spawn((
                BuildingVisual {
                    body_material: body_material.clone(),
                },
                Transform::from_xyz(building.x(), 0.0, building.z()),
                Visibility::default(),
                Name::new(building.name().to_owned()),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(width, height, depth))),
                    MeshMaterial3d(body_material),
                    Transform::from_xyz(0.0, height * 0.5, 0.0),
                ));
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(width + 2.0, SLAB_THICKNESS, depth + 2.0))),
                    MeshMaterial3d(roof_material.clone()),
                    Transform::from_xyz(0.0, height + SLAB_THICKNESS * 0.5, 0.0),
                ));
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(width + 4.0, SLAB_THICKNESS, depth + 4.0))),
                    MeshMaterial3d(base_material.clone()),
                    Transform::from_xyz(0.0, SLAB_THICKNESS * 0.5, 0.0),
                ));
            })
            .id();
        visuals.0.insert(building.id(), root);
    }
    visuals
}

/// Spawn the shadow-casting sun light and its glowing marker.
fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        SunLight,
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::default(),
    ));

    let core = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xff, 0xee, 0x88),
        emissive: LinearRgba::rgb(8.0, 7.0, 3.0),
        unlit: true,
        ..default()
    });
    let glow = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 0.9, 0.5, 0.25),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    commands
        .spawn((
            SunMarker,
            Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
            MeshMaterial3d(core),
            Transform::default(),
            Visibility::default(),
            NotShadowCaster,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(SUN_GLOW_RADIUS))),
                MeshMaterial3d(glow),
                Transform::default(),
                NotShadowCaster,
            ));
        });
}
