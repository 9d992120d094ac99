//! Throughput of autoplayed games.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mafia_engine::{Game, GameConfig, PlayerId, Role};

fn autoplay(c: &mut Criterion) {
    let mut group = c.benchmark_group("autoplay");

    for count in [6usize, 12, 24] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let config = GameConfig::new()
                .with_role(PlayerId::new(1), Role::Doctor)
                .with_role(PlayerId::new(2), Role::Police);
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut game = Game::with_seed(config.clone(), seed);
                game.start_game(count).unwrap();
                black_box(game.play_to_completion().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, autoplay);
criterion_main!(benches);
