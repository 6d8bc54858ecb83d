//! Integration tests for coordinate normalization across resizes

use space_cowboy::core::scaling::{denormalize, normalize, reference_size};
use space_cowboy::core::{AdventureMap, MarkerState, PlanetSelect, ScaledLayout, WorldId};
use space_cowboy::types::{GameAction, Size, Vec2};

#[test]
fn markers_follow_the_background_not_the_window() {
    // Background 1920x1080 shown in a smaller 1280x720 terminal.
    let background = Size::new(1920, 1080);
    let window = Size::new(1280, 720);
    let reference = reference_size(Some(background), window);
    assert_eq!(reference, background);

    let map = AdventureMap::new(WorldId::World2, reference, window, Vec::new(), |_| {
        MarkerState::default()
    });
    let asteroid = map.marker(0).unwrap();
    assert_eq!(asteroid.encounter.id, "asteroid_field");
    assert_eq!(map.layout().get(0).unwrap().position, Vec2::new(200.0, 133.0));
}

#[test]
fn repeated_resizes_do_not_drift() {
    let reference = Size::new(1280, 720);
    let mut layout = ScaledLayout::new(reference, reference);
    let i = layout.insert("camp", Vec2::new(333.0, 211.0), Some(25.0));

    for window in [
        Size::new(640, 384),
        Size::new(1920, 1080),
        Size::new(803, 297),
        Size::new(1280, 720),
    ] {
        layout.on_resize(window);
    }
    let entry = layout.get(i).unwrap();
    assert_eq!(entry.position, Vec2::new(333.0, 211.0));
    assert_eq!(entry.radius, Some(25.0));
}

#[test]
fn ratios_survive_a_round_trip() {
    let reference = Size::new(1000, 500);
    let ratio = normalize(Vec2::new(250.0, 125.0), reference);
    assert_eq!(denormalize(ratio, Size::new(2000, 1000)), Vec2::new(500.0, 250.0));
}

#[test]
fn round_trip_holds_across_the_whole_reference() {
    for reference in [
        Size::new(1280, 720),
        Size::new(1921, 1079),
        Size::new(7, 3),
        Size::new(4096, 1),
    ] {
        let step_x = (reference.width / 97).max(1) as usize;
        let step_y = (reference.height / 61).max(1) as usize;
        for x in (0..=reference.width).step_by(step_x) {
            for y in (0..=reference.height).step_by(step_y) {
                for offset in [0.0, 0.37, 0.5] {
                    let p = Vec2::new(x as f32 + offset, y as f32 + offset);
                    let back = denormalize(normalize(p, reference), reference);
                    assert!(
                        (back.x - p.x).abs() <= 1.0 && (back.y - p.y).abs() <= 1.0,
                        "{:?} -> {:?} against {:?}",
                        p,
                        back,
                        reference
                    );
                }
            }
        }
    }
}

#[test]
fn planet_hotspots_scale_with_the_window() {
    let mut select = PlanetSelect::new(Size::new(1280, 720));
    select.on_resize(Size::new(640, 360));

    let spot = select.layout().get(1).unwrap().position;
    assert_eq!(spot, Vec2::new(250.0, 198.0));
    assert_eq!(select.click(spot), Some(WorldId::World2));
    assert_eq!(select.click(Vec2::new(5.0, 5.0)), None);
    assert_eq!(select.handle(GameAction::Confirm), Some(WorldId::World2));
}
