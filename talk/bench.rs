use criterion::{Criterion, criterion_group, criterion_main};

use cotalk_talk::*;

const LETTERS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

type Algorithm = fn(work: &[Request]) -> Vec<Response>;

fn work() -> Vec<Request> {
    LETTERS
        .chars()
        .map(|c| Request { path: format!("/{c}") })
        .collect()
}

fn check(name: &str, alg: Algorithm) {
    let body: String = alg(&work()).into_iter().map(|r| r.body).collect();
    if body != LETTERS {
        eprintln!("{name}: got {body}");
    }
}

fn bench_algorithms(c: &mut Criterion) {
    let algorithms: [(&str, Algorithm); 7] = [
        ("alg1", alg1),
        ("alg2", alg2),
        ("alg3", alg3),
        ("alg4", alg4),
        ("alg5", alg5),
        ("alg6", alg6),
        ("alg7", alg7),
    ];
    for (name, alg) in algorithms {
        check(name, alg);
        let work = work();
        c.bench_function(name, |b| b.iter(|| alg(&work)));
    }
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
