use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::{Rgba, RgbaImage};

use crate::placement::PlacementState;
use crate::scene::{BuildingVisual, BuildingVisuals, SunLight, SunMarker};
use crate::solar::{ambient_level, sky_color};

/// Directional-light illuminance at full sun intensity.
const SUN_ILLUMINANCE: f32 = 14_000.0;
/// Ambient brightness at ambient intensity 1.0.
const AMBIENT_BRIGHTNESS_SCALE: f32 = 2_000.0;
/// Below this height the sun marker is hidden.
const MARKER_HIDE_HEIGHT: f32 = -10.0;
/// Emissive tint on the selected building body.
const SELECTED_EMISSIVE: LinearRgba = LinearRgba::new(0.35, 0.22, 0.04, 1.0);

/// Push the current sun sample into the light, marker, sky, and ambient.
pub fn apply_sun_system(
    state: Res<PlacementState>,
    mut clear_color: ResMut<ClearColor>,
    mut ambient: ResMut<GlobalAmbientLight>,
    mut light_query: Query<(&mut DirectionalLight, &mut Transform), (With<SunLight>, Without<SunMarker>)>,
    mut marker_query: Query<(&mut Transform, &mut Visibility), (With<SunMarker>, Without<SunLight>)>,
) {
    if !state.is_changed() {
        return;
    }
    let hour = state.hour();
    let sun = state.sun_vector();
    let tint = state.season().profile().sun_tint();

    for (mut light, mut transform) in &mut light_query {
        light.illuminance = SUN_ILLUMINANCE * sun.intensity;
        light.color = tint;
        *transform = Transform::from_translation(sun.position).looking_at(Vec3::ZERO, Vec3::Y);
    }
    for (mut transform, mut visibility) in &mut marker_query {
        transform.translation = sun.position;
        *visibility = if sun.position.y > MARKER_HIDE_HEIGHT {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    clear_color.0 = sky_color(hour);
    let level = ambient_level(hour);
    ambient.color = level.color;
    ambient.brightness = level.intensity * AMBIENT_BRIGHTNESS_SCALE;
}

/// Move building roots to their state positions and mark the selection.
pub fn sync_building_visuals_system(
    state: Res<PlacementState>,
    visuals: Res<BuildingVisuals>,
    mut roots: Query<(&BuildingVisual, &mut Transform)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !state.is_changed() {
        return;
    }
    let selected = state.selected_building_id();
    for building in state.buildings() {
        let Some(entity) = visuals.0.get(&building.id()) else {
            continue;
        };
        let Ok((visual, mut transform)) = roots.get_mut(*entity) else {
            continue;
        };
        let translation = Vec3::new(building.x(), 0.0, building.z());
        if transform.translation != translation {
            transform.translation = translation;
        }
        let emissive = if selected == Some(building.id()) {
            SELECTED_EMISSIVE
        } else {
            LinearRgba::BLACK
        };
        if let Some(mut material) = materials.get_mut(&visual.body_material) {
            if material.emissive != emissive {
                material.emissive = emissive;
            }
        }
    }
}

/// Wrap raw RGBA pixels in a GPU image.
fn into_image(pixels: RgbaImage) -> Image {
    let size = Extent3d {
        width: pixels.width(),
        height: pixels.height(),
        depth_or_array_layers: 1,
    };
    let mut image = Image::new_fill(
        size,
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.data = Some(pixels.into_raw());
    image.sampler = ImageSampler::linear();
    image
}

fn fill_rect(pixels: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = (x + width).min(pixels.width());
    let y_end = (y + height).min(pixels.height());
    for py in y..y_end {
        for px in x..x_end {
            pixels.put_pixel(px, py, color);
        }
    }
}

/// Procedural building facade: a window grid crossed by two accent bands.
pub(super) struct FacadeTextureFactory;

impl FacadeTextureFactory {
    const WIDTH: u32 = 256;
    const HEIGHT: u32 = 512;
    const WINDOW_PITCH: u32 = 20;
    const WINDOW_MARGIN: u32 = 10;
    const WINDOW_WIDTH: u32 = 12;
    const WINDOW_HEIGHT: u32 = 15;
    /// Vertical pixel spans of the accent bands.
    const BANDS: [(u32, u32); 2] = [(200, 230), (350, 380)];

    const WALL: Rgba<u8> = Rgba([0xf0, 0xf0, 0xf0, 0xff]);
    const GLASS: Rgba<u8> = Rgba([0x87, 0xce, 0xeb, 0xff]);
    const FRAME: Rgba<u8> = Rgba([0x55, 0x55, 0x55, 0xff]);
    const ACCENT: Rgba<u8> = Rgba([0xe6, 0x7e, 0x22, 0xff]);

    pub(super) fn build_pixels() -> RgbaImage {
        let mut pixels = RgbaImage::from_pixel(Self::WIDTH, Self::HEIGHT, Self::WALL);
        let columns = (Self::WIDTH - Self::WINDOW_MARGIN - Self::WINDOW_WIDTH) / Self::WINDOW_PITCH + 1;
        let rows = (Self::HEIGHT - Self::WINDOW_MARGIN - Self::WINDOW_HEIGHT) / Self::WINDOW_PITCH + 1;
        for row in 0..rows {
            for col in 0..columns {
                let x = col * Self::WINDOW_PITCH + Self::WINDOW_MARGIN;
                let y = row * Self::WINDOW_PITCH + Self::WINDOW_MARGIN;
                fill_rect(&mut pixels, x, y, Self::WINDOW_WIDTH, Self::WINDOW_HEIGHT, Self::FRAME);
                fill_rect(
                    &mut pixels,
                    x + 1,
                    y + 1,
                    Self::WINDOW_WIDTH - 2,
                    Self::WINDOW_HEIGHT - 2,
                    Self::GLASS,
                );
            }
        }
        for (top, bottom) in Self::BANDS {
            fill_rect(&mut pixels, 0, top, Self::WIDTH, bottom - top, Self::ACCENT);
        }
        pixels
    }

    pub(super) fn build_texture() -> Image {
        into_image(Self::build_pixels())
    }
}

/// Speckled grass for the ground plane.
pub(super) struct GrassTextureFactory;

impl GrassTextureFactory {
    const SIZE: u32 = 128;
    const BASE: [u8; 3] = [0x4a, 0x7c, 0x3f];

    pub(super) fn build_pixels() -> RgbaImage {
        RgbaImage::from_fn(Self::SIZE, Self::SIZE, |x, y| {
            // Cheap spatial hash; the pattern only needs to look uneven.
            let hash = x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663);
            let shade = (hash % 32) as u8;
            let [r, g, b] = Self::BASE;
            Rgba([r.saturating_add(shade / 2), g.saturating_add(shade), b.saturating_add(shade / 3), 0xff])
        })
    }

    pub(super) fn build_texture() -> Image {
        into_image(Self::build_pixels())
    }
}

/// Round compass badge: a coloured disc with a white direction letter.
pub(super) struct CompassLabelFactory;

impl CompassLabelFactory {
    const SIZE: u32 = 64;
    const DISC_RADIUS: f32 = 30.0;
    /// Edge length of one glyph cell in pixels.
    const CELL: u32 = 4;
    const GLYPH_COLUMNS: u32 = 5;
    const GLYPH_ROWS: u32 = 7;
    const INK: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

    /// 5x7 block glyph, one row per entry, leftmost column in bit 4.
    fn glyph(letter: char) -> [u8; 7] {
        match letter {
            'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
            'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
            'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
            'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
            _ => [0; 7],
        }
    }

    fn to_pixel(color: Color) -> Rgba<u8> {
        let srgba = color.to_srgba();
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([channel(srgba.red), channel(srgba.green), channel(srgba.blue), 0xff])
    }

    pub(super) fn build_pixels(letter: char, disc: Color) -> RgbaImage {
        let disc = Self::to_pixel(disc);
        let center = Self::SIZE as f32 * 0.5;
        let mut pixels = RgbaImage::from_fn(Self::SIZE, Self::SIZE, |x, y| {
            let offset = Vec2::new(x as f32 + 0.5 - center, y as f32 + 0.5 - center);
            if offset.length() <= Self::DISC_RADIUS {
                disc
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let left = (Self::SIZE - Self::GLYPH_COLUMNS * Self::CELL) / 2;
        let top = (Self::SIZE - Self::GLYPH_ROWS * Self::CELL) / 2;
        for (row, bits) in (0..).zip(Self::glyph(letter)) {
            for column in 0..Self::GLYPH_COLUMNS {
                if bits & (1 << (Self::GLYPH_COLUMNS - 1 - column)) != 0 {
                    let x = left + column * Self::CELL;
                    let y = top + row * Self::CELL;
                    fill_rect(&mut pixels, x, y, Self::CELL, Self::CELL, Self::INK);
                }
            }
        }
        pixels
    }

    pub(super) fn build_texture(letter: char, disc: Color) -> Image {
        into_image(Self::build_pixels(letter, disc))
    }
}
