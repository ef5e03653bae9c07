//! Tests for adding, clearing and loading bodies

use nbody_core::tests::test_helpers::body_at;
use nbody_core::{Body, BodyId, Color, Preset, SimError, Vector2, World};

#[test]
fn test_add_body_returns_distinct_handles() {
    let mut world = World::new();
    let a = world
        .add_body(1.0, Vector2::new(0.1, 0.2), Vector2::ZERO, 0.05, Color(0xFF0000))
        .unwrap();
    let b = world
        .add_body(0.0, Vector2::new(-0.1, 0.2), Vector2::new(0.0, 0.3), 0.02, Color(0x00FF00))
        .unwrap();

    assert_ne!(a, b);
    assert_eq!(world.len(), 2);

    let body_b = world.body(b).expect("body b should exist");
    assert_eq!(body_b.id(), Some(b));
    assert_eq!(body_b.velocity, Vector2::new(0.0, 0.3));
    assert_eq!(body_b.color, Color(0x00FF00));
    assert!(body_b.trail().is_empty());
}

#[test]
fn test_add_body_rejects_bad_input() {
    let mut world = World::new();

    let negative = world.add_body(-1.0, Vector2::ZERO, Vector2::ZERO, 0.1, Color::default());
    assert!(matches!(negative, Err(SimError::InvalidBody(_))));

    let nan_mass = world.add_body(f64::NAN, Vector2::ZERO, Vector2::ZERO, 0.1, Color::default());
    assert!(matches!(nan_mass, Err(SimError::InvalidBody(_))));

    let nan_pos = world.add_body(
        1.0,
        Vector2::new(f64::NAN, 0.0),
        Vector2::ZERO,
        0.1,
        Color::default(),
    );
    assert!(matches!(nan_pos, Err(SimError::InvalidBody(_))));

    let nan_vel = world.add_body(
        1.0,
        Vector2::ZERO,
        Vector2::new(0.0, f64::NAN),
        0.1,
        Color::default(),
    );
    assert!(matches!(nan_vel, Err(SimError::InvalidBody(_))));

    let inf_vel = world.add_body(
        1.0,
        Vector2::ZERO,
        Vector2::new(f64::INFINITY, 0.0),
        0.1,
        Color::default(),
    );
    assert!(matches!(inf_vel, Err(SimError::InvalidBody(_))));

    assert!(world.is_empty(), "rejected bodies must not be added");
}

#[test]
fn test_add_default_body_uses_configured_mass_and_radius() {
    let mut world = World::new();
    world.config_mut().set_new_body_mass(0.25).unwrap();
    world.config_mut().set_new_body_radius(0.07).unwrap();

    let id = world
        .add_default_body(Vector2::new(0.5, 0.5), Vector2::new(-0.1, 0.0), Color(0x123456))
        .unwrap();

    let body = world.body(id).unwrap();
    assert_eq!(body.mass, 0.25);
    assert_eq!(body.radius, 0.07);
}

#[test]
fn test_clear_returns_removed_bodies_in_order() {
    let mut world = World::new();
    let ids: Vec<BodyId> = (0..3).map(|i| world.insert_body(body_at(1.0, i as f64, 0.0))).collect();

    let removed = world.clear();

    assert!(world.is_empty());
    assert_eq!(removed.iter().map(|b| b.id().unwrap()).collect::<Vec<_>>(), ids);
    assert_eq!(removed[2].position, Vector2::new(2.0, 0.0));
    assert!(world.clear().is_empty());
}

#[test]
fn test_preset_step_then_clear() {
    let mut world = World::new();
    let ids = world.load_preset(Preset::SolarSystem);
    assert_eq!(ids.len(), 5);

    for _ in 0..100 {
        world.step();
    }

    let removed = world.remove_all();
    assert!(world.is_empty());
    assert_eq!(removed.len(), ids.len());
    for (body, id) in removed.iter().zip(ids.iter()) {
        assert_eq!(body.id(), Some(*id));
        assert_eq!(body.trail().len(), 100);
    }
}

#[test]
fn test_load_preset_replaces_existing_bodies() {
    let mut world = World::new();
    world.load_preset(Preset::SolarSystem);
    let ids = world.load_preset(Preset::BinaryStars);

    assert_eq!(world.len(), 2);
    assert!(world.bodies().iter().all(|b| b.mass == 1.0));
    // Ids are never reused
    assert!(ids.iter().all(|id| id.0 >= 5));

    world.load_preset(Preset::Empty);
    assert!(world.is_empty());
}

#[test]
fn test_load_preset_named() {
    let mut world = World::new();
    let ids = world.load_preset_named("binary-stars").unwrap();
    assert_eq!(ids.len(), 2);

    let err = world.load_preset_named("galaxy-merger").unwrap_err();
    assert_eq!(err, SimError::UnknownPreset("galaxy-merger".to_string()));
    // A failed load leaves the world untouched
    assert_eq!(world.len(), 2);
}

#[test]
fn test_preset_name_parsing() {
    assert_eq!("solar-system".parse::<Preset>().unwrap(), Preset::SolarSystem);
    assert_eq!("Solar_System".parse::<Preset>().unwrap(), Preset::SolarSystem);
    assert_eq!(" binary stars ".parse::<Preset>().unwrap(), Preset::BinaryStars);
    assert_eq!("EMPTY".parse::<Preset>().unwrap(), Preset::Empty);
    assert!("".parse::<Preset>().is_err());

    for preset in Preset::ALL {
        assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
    }
}

#[test]
fn test_solar_system_layout() {
    let bodies = Preset::SolarSystem.bodies();
    assert_eq!(bodies[0].mass, 1.0);
    assert_eq!(bodies[0].position, Vector2::ZERO);
    assert!(bodies[1..].iter().all(|b| b.mass == 0.0));
    assert_eq!(bodies[1].position, Vector2::new(0.0, 0.30));
    assert_eq!(bodies[1].velocity, Vector2::new(0.35, 0.0));
    assert!(bodies.iter().all(|b| b.id().is_none()));
}

// Preset copies start with an empty trail even when the template carries
// history. `Clone` is the path that keeps it.
#[test]
fn test_preset_copies_start_with_empty_trail() {
    let mut template = body_at(1.0, 0.0, 0.0);
    template.set_trail_positions([Vector2::new(1.0, 1.0), Vector2::new(2.0, 2.0)], 10);
    let templates = vec![template];

    let mut world = World::new();
    world.load_bodies(&templates).unwrap();

    assert!(world.bodies()[0].trail().is_empty());
    assert_eq!(templates[0].trail().len(), 2, "template must not be touched");
}

#[test]
fn test_clone_keeps_trail_in_separate_buffer() {
    let mut template = body_at(1.0, 0.0, 0.0);
    template.set_trail_positions([Vector2::new(1.0, 1.0), Vector2::new(2.0, 2.0)], 10);

    let copy: Body = template.clone();
    assert_eq!(copy.trail().to_vec(), template.trail().to_vec());

    let mut world = World::new();
    let id = world.insert_body(copy);
    world.set_trail_capacity(10);
    world.step();

    assert_eq!(world.body(id).unwrap().trail().len(), 3);
    assert_eq!(template.trail().len(), 2);
}

#[test]
fn test_loaded_instances_are_independent() {
    let mut a = World::new();
    let mut b = World::new();
    a.load_preset(Preset::BinaryStars);
    b.load_preset(Preset::BinaryStars);

    for _ in 0..10 {
        a.step();
    }

    assert_eq!(a.bodies()[0].trail().len(), 10);
    assert!(b.bodies()[0].trail().is_empty());
    assert_eq!(b.bodies()[0].position, Vector2::new(0.0, 0.3));
}

#[test]
fn test_color_components() {
    assert_eq!(Color(0xF0C400).rgb(), (0xF0, 0xC4, 0x00));
}

#[test]
fn test_load_bodies_rejects_invalid_templates() {
    let mut world = World::new();
    let ids = world.load_preset(Preset::BinaryStars);

    let negative = vec![body_at(1.0, 0.0, 0.0), body_at(-2.0, 1.0, 0.0)];
    assert!(matches!(world.load_bodies(&negative), Err(SimError::InvalidBody(_))));

    let nan_mass = vec![body_at(f64::NAN, 0.0, 0.0)];
    assert!(matches!(world.load_bodies(&nan_mass), Err(SimError::InvalidBody(_))));

    let mut moving = body_at(1.0, 0.0, 0.0);
    moving.velocity = Vector2::new(f64::INFINITY, 0.0);
    assert!(matches!(world.load_bodies(&[moving]), Err(SimError::InvalidBody(_))));

    // A rejected load leaves the previous bodies in place
    let current: Vec<BodyId> = world.bodies().iter().filter_map(|b| b.id()).collect();
    assert_eq!(current, ids);
}
