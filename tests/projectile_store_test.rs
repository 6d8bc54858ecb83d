//! Integration tests for the projectile store under shooter-like churn

use space_cowboy::core::{ProjectileId, ProjectileStore};
use space_cowboy::types::Vec2;

const FIELD_W: f32 = 1280.0;
const FIELD_H: f32 = 720.0;

#[test]
fn volleys_leave_the_field_and_handles_go_stale() {
    let mut store = ProjectileStore::with_capacity(16);
    let mut fired: Vec<ProjectileId> = Vec::new();

    // One shot rightwards every frame from the left edge at 700 px/s.
    for _ in 0..200 {
        fired.push(store.spawn(Vec2::new(0.0, 360.0), Vec2::new(700.0, 0.0)));
        store.advance(1.0 / 60.0);
        store.prune_out_of_bounds(FIELD_W, FIELD_H);
    }

    // A bullet crosses 1280 px in ~110 frames, so older shots are gone.
    let live = store.len();
    assert!(live > 100 && live < 115, "live = {}", live);
    assert!(!store.contains(fired[0]));
    assert!(store.contains(*fired.last().unwrap()));
    assert_eq!(fired.iter().filter(|id| store.contains(**id)).count(), live);
}

#[test]
fn reused_slots_never_resolve_old_handles() {
    let mut store = ProjectileStore::new();
    let first: Vec<_> = (0..8)
        .map(|i| store.spawn(Vec2::new(i as f32 * 10.0, 10.0), Vec2::ZERO))
        .collect();
    for id in &first {
        store.remove(*id);
    }

    let second: Vec<_> = (0..8)
        .map(|i| store.spawn(Vec2::new(i as f32 * 10.0, 20.0), Vec2::ZERO))
        .collect();
    assert_eq!(store.len(), 8);
    assert!(first.iter().all(|id| store.get(*id).is_none()));
    assert!(second.iter().all(|id| store.contains(*id)));

    let mut reused: Vec<u32> = second.iter().map(|id| id.index()).collect();
    reused.sort_unstable();
    assert_eq!(reused, (0..8).collect::<Vec<u32>>());
}

#[test]
fn crossing_fire_collides_once_per_pair() {
    let mut player = ProjectileStore::new();
    let mut enemy = ProjectileStore::new();
    let mine = player.spawn(Vec2::new(100.0, 300.0), Vec2::new(400.0, 0.0));
    let theirs = enemy.spawn(Vec2::new(300.0, 300.0), Vec2::new(-400.0, 0.0));

    let mut hits = Vec::new();
    for _ in 0..30 {
        player.advance(1.0 / 60.0);
        enemy.advance(1.0 / 60.0);
        for (a, b) in player.collisions_against(&enemy, 8.0) {
            player.remove(a);
            enemy.remove(b);
            hits.push((a, b));
        }
    }
    assert_eq!(hits, vec![(mine, theirs)]);
    assert!(player.is_empty() && enemy.is_empty());
}
