// Host-side tests for exclusive emissive highlighting.

use glam::{Quat, Vec3};
use knot_core::*;

fn sphere(name: &str, x: f32, emissive: Rgb) -> PickableObject {
    PickableObject {
        name: Some(name.to_string()),
        position: Vec3::new(x, 0.0, 0.0),
        rotation: Quat::IDENTITY,
        shape: PickShape::Sphere { radius: 1.0 },
        base_color: Rgb::WHITE,
        emissive: Some(emissive),
    }
}

fn objects() -> Vec<PickableObject> {
    vec![
        sphere("a", -2.0, Rgb::new(0.1, 0.0, 0.0)),
        sphere("b", 0.0, Rgb::new(0.0, 0.2, 0.0)),
        PickableObject {
            name: None,
            position: Vec3::new(2.0, 0.0, 0.0),
            rotation: Quat::IDENTITY,
            shape: PickShape::Quad { half_extent: 1.0 },
            base_color: Rgb::WHITE,
            emissive: None,
        },
    ]
}

const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);

#[test]
fn select_applies_color_and_tracks_index() {
    let mut objs = objects();
    let mut h = Highlighter::default();
    h.select(&mut objs, 0, RED);
    assert_eq!(h.current(), Some(0));
    assert_eq!(objs[0].emissive, Some(RED));
    assert_eq!(objs[1].emissive, Some(Rgb::new(0.0, 0.2, 0.0)));
}

#[test]
fn selecting_another_restores_previous_first() {
    let mut objs = objects();
    let mut h = Highlighter::default();
    h.select(&mut objs, 0, RED);
    h.select(&mut objs, 1, RED);

    assert_eq!(h.current(), Some(1));
    assert_eq!(objs[0].emissive, Some(Rgb::new(0.1, 0.0, 0.0)));
    assert_eq!(objs[1].emissive, Some(RED));
    let lit = objs.iter().filter(|o| o.emissive == Some(RED)).count();
    assert_eq!(lit, 1);
}

#[test]
fn reselecting_same_object_keeps_original() {
    let mut objs = objects();
    let mut h = Highlighter::default();
    h.select(&mut objs, 1, RED);
    h.select(&mut objs, 1, RED);
    h.clear(&mut objs);
    assert_eq!(objs[1].emissive, Some(Rgb::new(0.0, 0.2, 0.0)));
    assert_eq!(h.current(), None);
}

#[test]
fn missing_emissive_is_a_noop() {
    let mut objs = objects();
    let mut h = Highlighter::default();
    h.select(&mut objs, 2, RED);
    assert_eq!(objs[2].emissive, None);
    h.clear(&mut objs);
    assert_eq!(objs[2].emissive, None);
    assert_eq!(h.current(), None);
}

#[test]
fn clear_without_selection_does_nothing() {
    let mut objs = objects();
    let before: Vec<_> = objs.iter().map(|o| o.emissive).collect();
    let mut h = Highlighter::default();
    h.clear(&mut objs);
    let after: Vec<_> = objs.iter().map(|o| o.emissive).collect();
    assert_eq!(before, after);
}

#[test]
fn recolor_keeps_remembered_original() {
    let mut objs = objects();
    let mut h = Highlighter::default();
    let blue = Rgb::new(0.0, 0.0, 1.0);
    h.select(&mut objs, 0, RED);
    h.recolor(&mut objs, blue);
    assert_eq!(objs[0].emissive, Some(blue));
    h.clear(&mut objs);
    assert_eq!(objs[0].emissive, Some(Rgb::new(0.1, 0.0, 0.0)));
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut objs = objects();
    let mut h = Highlighter::default();
    h.select(&mut objs, 0, RED);
    h.select(&mut objs, 42, RED);
    assert_eq!(h.current(), None);
    assert_eq!(objs[0].emissive, Some(Rgb::new(0.1, 0.0, 0.0)));
}
