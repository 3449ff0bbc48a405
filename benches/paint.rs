use criterion::{black_box, criterion_group, criterion_main, Criterion};
use arena_display::core::{Body, Control, Missile, Npc, Player, Roster, Snapshot, Wall};
use arena_display::term::{encode_diff_into, AssetTable, FrameBuffer, Renderer, Sprite};
use arena_display::types::{Rgb, DEFAULT_PLAYER_IMAGE, REQUIRED_IMAGES};

fn assets() -> AssetTable {
    let mut table = AssetTable::new();
    for (i, name) in REQUIRED_IMAGES
        .iter()
        .chain([DEFAULT_PLAYER_IMAGE].iter())
        .enumerate()
    {
        table.insert(*name, Sprite::solid(16, 16, Rgb::new(20 * i as u8, 60, 120)));
    }
    table
}

fn busy_arena() -> Snapshot {
    let roster = Roster {
        player_oid: 1,
        player_name: "ann".to_string(),
        opponent_oid: 2,
        opponent_name: "bo".to_string(),
        winner: None,
    };
    let mut snap = Snapshot::new(roster);
    let walls = [
        (0.0, 0.0, 60.0, 1.0),
        (0.0, 29.0, 60.0, 1.0),
        (0.0, 0.0, 1.0, 30.0),
        (59.0, 0.0, 1.0, 30.0),
    ];
    for (oid, (x, y, w, h)) in walls.into_iter().enumerate() {
        snap.insert(Wall {
            oid: 100 + oid as i64,
            body: Body::new(x, y, w, h),
        });
    }
    for i in 0..20 {
        let f = i as f64;
        snap.insert(Npc {
            oid: 200 + i,
            body: Body::new(3.0 + 2.5 * f, 4.0 + (i % 5) as f64 * 4.0, 2.0, 2.0)
                .with_velocity(1.0 - (i % 3) as f64, 0.5),
            health: f,
            max_health: 20.0,
            alive: i % 7 != 0,
        });
        snap.insert(Missile {
            oid: 300 + i,
            body: Body::new(5.0 + 2.0 * f, 2.0 + f, 1.0, 1.0),
            alive: true,
        });
    }
    for (oid, x) in [(1, 10.0), (2, 40.0)] {
        snap.insert(Player {
            oid,
            body: Body::new(x, 12.0, 3.0, 3.0).with_velocity(-0.5, 0.0),
            health: 6.0,
            max_health: 10.0,
            alive: true,
            experience: 4.0,
            move_mana: 5.5,
            missile_mana: 2.0,
        });
    }
    snap
}

fn bench_paint_game(c: &mut Criterion) {
    let snap = busy_arena();
    let control = Control::default();
    let mut renderer = Renderer::new(160, 48, assets());
    let mut fb = FrameBuffer::new(160, 48);

    c.bench_function("paint_game_busy_arena", |b| {
        b.iter(|| {
            renderer
                .paint_game(&mut fb, black_box(&snap), &control)
                .unwrap();
        })
    });
}

fn bench_diff_encode(c: &mut Criterion) {
    let snap = busy_arena();
    let control = Control::default();
    let mut renderer = Renderer::new(160, 48, assets());
    let mut prev = FrameBuffer::new(160, 48);
    let mut next = FrameBuffer::new(160, 48);
    renderer.paint_game(&mut prev, &snap, &control).unwrap();
    renderer.paint_game_over(&mut next, &snap, &control).unwrap();
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_game_over_banner", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&next), &mut out).unwrap();
        })
    });
}

criterion_group!(benches, bench_paint_game, bench_diff_encode);
criterion_main!(benches);
