//! Built-in demo scene.

use lumen_renderer::{Color, Dielectric, HittableList, Lambertian, Material, SceneResult, Specular, Sphere, Vec3};
use std::sync::Arc;

/// Ground plane, a diffuse sphere between a metal one and a hollow glass one.
pub fn demo_scene() -> SceneResult<HittableList> {
    let center = Arc::new(Material::from(Lambertian::new(Color::new(0.1, 0.2, 0.5))));
    let ground = Arc::new(Material::from(Lambertian::new(Color::new(0.8, 0.8, 0.0))));
    let metal = Arc::new(Material::from(Specular::new(Color::new(0.8, 0.6, 0.2), 0.0)));
    let glass = Arc::new(Material::from(Dielectric::new(1.5)?));

    let mut world = HittableList::new();
    world.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, center)?);
    world.add(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, ground)?);
    world.add(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, metal)?);
    // Outer shell plus an inverted inner one makes a glass bubble
    world.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass.clone())?);
    world.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.45, glass)?);

    log::debug!("Demo scene has {} objects", world.len());
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_renderer::{render_parallel, CameraSettings, RenderConfig};

    #[test]
    fn test_demo_scene_builds() {
        let world = demo_scene().unwrap();
        assert_eq!(world.len(), 5);
    }

    #[test]
    fn test_demo_scene_renders() {
        let world = demo_scene().unwrap();
        let config = RenderConfig::default().with_resolution(20, 10).with_quality(2, 10);
        let camera = CameraSettings::default()
            .with_aspect_ratio(config.aspect_ratio())
            .build()
            .unwrap();

        let image = render_parallel(&camera, &world, &config).unwrap();
        let bytes = image.to_rgb8();
        assert_eq!(bytes.len(), 20 * 10 * 3);
        assert!(bytes.iter().any(|&b| b > 0));
    }
}
