use criterion::{black_box, criterion_group, criterion_main, Criterion};
use space_cowboy::core::{ProjectileStore, ShooterGame};
use space_cowboy::types::{Difficulty, FrameContext, Size, Vec2};

const WINDOW: Size = Size::new(1280, 720);

fn filled_store(count: usize) -> ProjectileStore {
    let mut store = ProjectileStore::with_capacity(count);
    for i in 0..count {
        let x = (i % 64) as f32 * 20.0;
        let y = (i / 64) as f32 * 20.0;
        store.spawn(Vec2::new(x, y), Vec2::new(300.0, -150.0));
    }
    store
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("projectile_spawn_remove", |b| {
        let mut store = ProjectileStore::new();
        b.iter(|| {
            let id = store.spawn(black_box(Vec2::new(10.0, 10.0)), Vec2::new(0.0, -700.0));
            store.remove(id);
        })
    });
}

fn bench_advance(c: &mut Criterion) {
    let mut store = filled_store(512);
    c.bench_function("projectile_advance_512", |b| {
        b.iter(|| {
            store.advance(black_box(1.0 / 60.0));
        })
    });
}

fn bench_prune(c: &mut Criterion) {
    c.bench_function("projectile_advance_prune_512", |b| {
        b.iter(|| {
            let mut store = filled_store(512);
            store.advance(1.0);
            black_box(store.prune_out_of_bounds(1280.0, 720.0));
        })
    });
}

fn bench_collisions(c: &mut Criterion) {
    let player = filled_store(128);
    let enemy = filled_store(128);
    c.bench_function("projectile_collisions_128x128", |b| {
        b.iter(|| black_box(player.collisions_against(&enemy, 8.0)))
    });
}

fn bench_shooter_tick(c: &mut Criterion) {
    let mut game = ShooterGame::with_difficulty(Difficulty::Hard, WINDOW, 12345);
    let ctx = FrameContext::new(WINDOW, 1.0 / 60.0);

    c.bench_function("shooter_tick_hard", |b| {
        b.iter(|| {
            if game.is_over() {
                game.restart();
            }
            game.shoot();
            game.tick(black_box(&ctx), Vec2::new(1.0, 0.0));
        })
    });
}

criterion_group!(
    benches,
    bench_spawn,
    bench_advance,
    bench_prune,
    bench_collisions,
    bench_shooter_tick
);
criterion_main!(benches);
