use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use generic_search::astar;
use generic_search::bfs;
use generic_search::dfs;
use generic_search::problems::maze::Maze;
use generic_search::problems::maze::manhattan_distance;

const SPARSENESS: f64 = 0.2;

fn compare_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Maze Search");

    for side in [10usize, 50, 100] {
        for seed in 0..3u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let maze = Maze::generate(side, side, SPARSENESS, &mut rng);

            // Only benchmark solvable instances so all algorithms do
            // comparable work.
            if bfs(maze.start, |l| maze.goal_test(l), |l| maze.successors(l)).is_none() {
                continue;
            }
            let instance_name = format!("{side}x{side}:{seed}");

            group.bench_with_input(BenchmarkId::new("DFS", &instance_name), &maze, |b, m| {
                b.iter(|| dfs(m.start, |l| m.goal_test(l), |l| m.successors(l)))
            });
            group.bench_with_input(BenchmarkId::new("BFS", &instance_name), &maze, |b, m| {
                b.iter(|| bfs(m.start, |l| m.goal_test(l), |l| m.successors(l)))
            });
            group.bench_with_input(BenchmarkId::new("A*", &instance_name), &maze, |b, m| {
                b.iter(|| {
                    astar(
                        m.start,
                        |l| m.goal_test(l),
                        |l| m.successors(l),
                        manhattan_distance(m.goal),
                    )
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, compare_search);
criterion_main!(benches);
