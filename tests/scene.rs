use std::collections::BTreeSet;

use voxrend::{
    color::Color1b,
    dithering::{Dithering, OrderedDither},
    extra::{composite::Composite, RenderSink},
    geometry::*,
    pattern::{DisplayRouting, UpdatePatternPoint},
    raster::CapsuleTest,
    ClippingBehavior, Error, Render, Scene, SceneConfig, Vector3,
};

/// Jittered lattice, so that points do not sit exactly on primitive boundaries.
fn pattern(n: i32) -> Vec<UpdatePatternPoint> {
    let mut pts = Vec::new();

    for x in -n..=n {
        for y in -n..=n {
            for z in -n..=n {
                let jitter = ((x * 7 + y * 13 + z * 29).rem_euclid(10) as f32 - 4.5) * 0.02;
                pts.push(UpdatePatternPoint::new(
                    DisplayRouting {
                        slice: (x + n) as u16,
                        column: (y + n) as u16,
                        row: (z + n) as u16,
                        flags: (x & 1) as u8,
                    },
                    Vector3::new(x as f32 + jitter, y as f32 - jitter, z as f32 + jitter * 0.5),
                    Vector3::new(0.0, 0.0, 1.0),
                ));
            }
        }
    }

    pts
}

fn scene() -> (Scene, Vec<UpdatePatternPoint>) {
    let pts = pattern(8);
    let scene = Scene::new(pts.clone(), &SceneConfig::default()).unwrap();
    (scene, pts)
}

fn routings<'a>(points: impl Iterator<Item = &'a voxrend::RenderedPoint>) -> BTreeSet<DisplayRouting> {
    points.map(|p| p.routing).collect()
}

fn expected(pts: &[UpdatePatternPoint], hit: impl Fn(&Vector3) -> bool) -> BTreeSet<DisplayRouting> {
    pts.iter().filter(|p| hit(&p.pos)).map(|p| p.routing).collect()
}

#[test]
fn particle_lights_exactly_the_points_within_radius() {
    let (mut scene, pts) = scene();
    let pos = Vector3::new(1.3, -2.2, 0.4);
    let radius = 2.1;

    let id = scene.create_object(Particle { pos, radius }, Color1b::CYAN.as_vec()).unwrap();
    let render = scene.render();

    let want = expected(&pts, |p| (p - pos).norm_squared() <= radius * radius);
    assert!(!want.is_empty());
    assert_eq!(routings(render.turned_on()), want);
    // Exactly once per point
    assert_eq!(render.len(), want.len());
    assert!(render
        .points
        .iter()
        .all(|p| p.object_id == id && p.color == Color1b::CYAN));
}

#[test]
fn capsule_includes_midpoint_and_excludes_just_past_radius() {
    let pts = vec![
        UpdatePatternPoint::new(
            DisplayRouting {
                slice: 0,
                ..Default::default()
            },
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::z(),
        ),
        // r + epsilon beyond the end cap
        UpdatePatternPoint::new(
            DisplayRouting {
                slice: 1,
                ..Default::default()
            },
            Vector3::new(3.0 + 0.5 + 1e-3, 0.0, 0.0),
            Vector3::z(),
        ),
        // r + epsilon away from the side
        UpdatePatternPoint::new(
            DisplayRouting {
                slice: 2,
                ..Default::default()
            },
            Vector3::new(1.0, 0.5 + 1e-3, 0.0),
            Vector3::z(),
        ),
        // Just inside the radius, beyond the start cap
        UpdatePatternPoint::new(
            DisplayRouting {
                slice: 3,
                ..Default::default()
            },
            Vector3::new(-3.0 - 0.49, 0.0, 0.0),
            Vector3::z(),
        ),
    ];

    let mut scene = Scene::new(pts, &SceneConfig::default()).unwrap();
    let start = Vector3::new(-3.0, 0.0, 0.0);
    let end = Vector3::new(3.0, 0.0, 0.0);
    scene
        .create_object(
            Capsule {
                start,
                end,
                radius: 0.5,
            },
            Color1b::WHITE.as_vec(),
        )
        .unwrap();

    let lit: BTreeSet<_> = scene.render().points.iter().map(|p| p.routing.slice).collect();
    assert_eq!(lit, BTreeSet::from([0, 3]));

    let test = CapsuleTest::new(start, end).unwrap();
    assert_eq!(test.distance2(&Vector3::zeros()), 0.0);
}

#[test]
fn moving_an_object_diffs_exactly() {
    let (mut scene, pts) = scene();
    let radius = 3.0;
    let a = Vector3::new(-1.0, 0.5, 0.0);
    let b = Vector3::new(1.5, 0.0, -0.5);

    let id = scene
        .create_object(
            Sphere {
                pos: a,
                radius,
                thickness: 0.0,
            },
            Color1b::RED.as_vec(),
        )
        .unwrap();
    let first = scene.render();

    let at_a = expected(&pts, |p| (p - a).norm_squared() <= radius * radius);
    let at_b = expected(&pts, |p| (p - b).norm_squared() <= radius * radius);
    assert_eq!(routings(first.turned_on()), at_a);

    scene.set_object_translation(id, b - a).unwrap();
    let second = scene.render();

    let off: BTreeSet<_> = at_a.difference(&at_b).copied().collect();
    let on: BTreeSet<_> = at_b.difference(&at_a).copied().collect();
    assert!(!off.is_empty() && !on.is_empty());

    assert_eq!(routings(second.turned_off()), off);
    assert_eq!(routings(second.turned_on()), on);
    assert_eq!(second.len(), off.len() + on.len());
    assert!(second.turned_off().all(|p| p.color == Color1b::OFF));
}

#[test]
fn red_sphere_end_to_end() {
    let (mut scene, pts) = scene();
    let dither = OrderedDither::default();
    let red = Vector3::new(0.8, 0.0, 0.0);

    let id = scene
        .create_object(
            Sphere {
                pos: Vector3::zeros(),
                radius: 5.0,
                thickness: 0.0,
            },
            red,
        )
        .unwrap();
    let render = scene.render();

    let want = expected(&pts, |p| p.norm_squared() <= 25.0);
    assert_eq!(routings(render.turned_on()), want);

    for p in render.turned_on() {
        assert_eq!(p.object_id, id);
        assert_eq!(p.color, dither.dither(red, &p.pos));
        assert!(!p.color.g && !p.color.b);
    }

    // 80% red over a large volume lights most, but not all points.
    let lit = render.turned_on().filter(|p| p.color.r).count();
    assert!(lit > want.len() / 2 && lit < want.len());

    scene.remove_object(id).unwrap();
    let removal = scene.render();
    assert_eq!(removal.turned_on().count(), 0);
    assert_eq!(routings(removal.turned_off()), want);
    assert_eq!(removal.len(), want.len());
    assert!(removal.points.iter().all(|p| p.object_id == id));

    assert!(scene.render().is_empty());
}

#[test]
fn hollow_sphere_uses_the_shell_cutoff() {
    let (mut scene, pts) = scene();
    let (r, t) = (6.0, 4.0);

    scene
        .create_object(
            Sphere {
                pos: Vector3::zeros(),
                radius: r,
                thickness: t,
            },
            Color1b::WHITE.as_vec(),
        )
        .unwrap();

    let want = expected(&pts, |p| {
        let d2 = p.norm_squared();
        d2 <= r * r && d2 >= 2.0 * r * t - r * r
    });
    assert_eq!(routings(scene.render().turned_on()), want);
}

#[test]
fn scaled_and_rotated_cuboid() {
    let (mut scene, pts) = scene();

    let id = scene
        .create_object(
            Cuboid {
                v1: Vector3::new(-1.0, -1.0, -1.0),
                v2: Vector3::new(1.0, 1.0, 1.0),
                thickness: 0.0,
                is_wireframe: false,
            },
            Color1b::WHITE.as_vec(),
        )
        .unwrap();
    scene.set_object_scale(id, Vector3::new(3.0, 2.0, 1.5)).unwrap();
    scene
        .set_object_pivot(id, Vector3::new(0.0, 0.0, 0.0))
        .unwrap();

    let want = expected(&pts, |p| p.x.abs() < 3.0 && p.y.abs() < 2.0 && p.z.abs() < 1.5);
    assert_eq!(routings(scene.render().turned_on()), want);

    // Half a turn around z maps the box onto itself.
    scene
        .set_object_rotation(id, Vector3::new(0.0, 0.0, core::f32::consts::PI))
        .unwrap();
    assert!(scene.render().is_empty());
}

#[test]
fn unknown_object_ids_fail() {
    let (mut scene, _) = scene();
    let id = scene
        .create_object(
            Particle {
                pos: Vector3::zeros(),
                radius: 1.0,
            },
            Color1b::RED.as_vec(),
        )
        .unwrap();

    let missing = id + 10;
    assert_eq!(scene.remove_object(missing), Err(Error::UnknownObject(missing)));
    assert_eq!(
        scene.set_object_geometry(
            missing,
            Particle {
                pos: Vector3::zeros(),
                radius: 1.0
            }
        ),
        Err(Error::UnknownObject(missing))
    );
    assert_eq!(
        scene.set_object_rotation(missing, Vector3::zeros()),
        Err(Error::UnknownObject(missing))
    );
    assert_eq!(
        scene.set_object_scale(missing, Vector3::zeros()),
        Err(Error::UnknownObject(missing))
    );
    assert!(scene.object(missing).is_err());
}

#[test]
fn scene_rejects_a_pattern_with_shared_routing() {
    let mut pts = pattern(2);
    let last = pts.len() - 1;
    pts[last].routing = pts[0].routing;

    assert_eq!(
        Scene::new(pts, &SceneConfig::default()).err(),
        Some(Error::DuplicateRouting { index: last })
    );
}

#[test]
fn degenerate_geometry_renders_nothing() {
    let (mut scene, _) = scene();
    let p = Vector3::new(1.0, 2.0, 3.0);

    scene
        .create_object(
            Capsule {
                start: p,
                end: p,
                radius: 1.0,
            },
            Color1b::WHITE.as_vec(),
        )
        .unwrap();
    scene
        .create_object(
            Triangle {
                v1: p,
                v2: p,
                v3: Vector3::zeros(),
                thickness: 1.0,
            },
            Color1b::WHITE.as_vec(),
        )
        .unwrap();
    let zero_scale = scene
        .create_object(
            Sphere {
                pos: p,
                radius: 2.0,
                thickness: 0.0,
            },
            Color1b::WHITE.as_vec(),
        )
        .unwrap();
    scene.set_object_scale(zero_scale, Vector3::zeros()).unwrap();

    assert!(scene.render().is_empty());
}

#[test]
fn composite_follows_the_scene() {
    let (mut scene, _) = scene();
    let mut composite = Composite::new();

    let under = scene
        .create_object(
            Sphere {
                pos: Vector3::zeros(),
                radius: 2.0,
                thickness: 0.0,
            },
            Color1b::RED.as_vec(),
        )
        .unwrap();
    let over = scene
        .create_object_with(
            Cuboid {
                v1: Vector3::new(-4.0, -0.5, -0.5),
                v2: Vector3::new(4.0, 0.5, 0.5),
                thickness: 0.0,
                is_wireframe: false,
            },
            Color1b::BLUE.as_vec(),
            ClippingBehavior::Overwrite,
        )
        .unwrap();

    let publish = |scene: &mut Scene, composite: &mut Composite| -> Render {
        let render = scene.render();
        composite.publish(&render).unwrap();
        render
    };

    publish(&mut scene, &mut composite);

    let center = scene
        .footprint(under)
        .unwrap()
        .find(|p| p.pos.norm() < 0.2)
        .map(|p| p.routing)
        .unwrap();
    assert_eq!(composite.color_at(&center), Color1b::BLUE);

    scene.remove_object(under).unwrap();
    publish(&mut scene, &mut composite);
    assert_eq!(composite.color_at(&center), Color1b::BLUE);

    scene.remove_object(over).unwrap();
    publish(&mut scene, &mut composite);
    assert!(composite.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn geometry_serializes() {
    let g = Geometry::from(Text {
        text: "HI".into(),
        anchor: Vector3::new(1.0, 2.0, 3.0),
        glyph_size: 2.0,
        thickness: 0.4,
        orientation: TextOrientation::NegX,
    });

    let json = serde_json::to_string(&g).unwrap();
    let back: Geometry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, g);
}
