/// Roadmap Construction Benchmarks
///
/// Measures end-to-end planning time for the roadmap planners at different
/// node budgets. These benchmarks help detect performance regressions in
/// sampling, nearest-neighbor queries and the graph search.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mpl::boundaries::Boundaries;
use mpl::collision::NaiveCollisionChecker;
use mpl::optimizer::DefaultOptimizer;
use mpl::planner::prm::PRM;
use mpl::planner::prm_star::PRMStar;
use mpl::planner::Planner;
use mpl::problem::PlannerConfig;
use mpl::space::Point;

fn config(max_size: usize) -> PlannerConfig {
    PlannerConfig {
        max_size,
        k_nearest_neighbors: 8,
        batch_size: 8,
        step_size: 0.5,
        seed: Some(42),
    }
}

fn solve_prm(max_size: usize) -> f64 {
    let mut planner: PRM<f64> = PRM::new(
        config(max_size),
        NaiveCollisionChecker::new_box(),
        DefaultOptimizer::new_box(),
    );
    planner.set_start(Point::new(0.0, 0.0));
    planner.set_goal(Point::new(3.0, 3.0));
    planner.set_boundaries(Boundaries::new(0.0, 3.0, 0.0, 3.0));
    planner.init().expect("valid benchmark problem");
    planner.solve();
    planner.solution_cost()
}

fn solve_prm_star(max_size: usize) -> f64 {
    let mut planner: PRMStar<f64> = PRMStar::new(
        config(max_size),
        NaiveCollisionChecker::new_box(),
        DefaultOptimizer::new_box(),
    );
    planner.set_start(Point::new(0.0, 0.0));
    planner.set_goal(Point::new(3.0, 3.0));
    planner.set_boundaries(Boundaries::new(0.0, 3.0, 0.0, 3.0));
    planner.init().expect("valid benchmark problem");
    planner.solve();
    planner.solution_cost()
}

fn bench_prm_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("prm_construction");
    group.sample_size(20);

    for size in [100usize, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(solve_prm(size)));
        });
    }

    group.finish();
}

fn bench_prm_star_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("prm_star_construction");
    group.sample_size(20);

    for size in [100usize, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(solve_prm_star(size)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prm_construction, bench_prm_star_construction);
criterion_main!(benches);
