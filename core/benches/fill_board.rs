use criterion::{Criterion, criterion_group, criterion_main};
use skipcount_core::{PlayEngine, expected_product, iter_interior};
use std::hint::black_box;

fn fill_board(c: &mut Criterion) {
    let answers: Vec<_> = iter_interior()
        .map(|coords| (coords, expected_product(coords).to_string()))
        .collect();

    c.bench_function("fill_board", |b| {
        b.iter(|| {
            let mut engine = PlayEngine::new(0);
            for (coords, answer) in &answers {
                engine.edit_cell(*coords, answer);
                engine.tick_clock();
            }
            black_box(engine.score())
        })
    });

    c.bench_function("celebration_tick", |b| {
        let mut engine = PlayEngine::new(0);
        for (coords, answer) in &answers {
            engine.edit_cell(*coords, answer);
        }
        b.iter(|| {
            if !engine.is_celebrating() {
                let last = answers[answers.len() - 1].0;
                engine.edit_cell(last, "");
                engine.edit_cell(last, &expected_product(last).to_string());
            }
            black_box(engine.tick_celebration())
        })
    });
}

criterion_group!(benches, fill_board);
criterion_main!(benches);
