use arbol::{Dataset, DecisionTree};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

/// Deterministic synthetic table: the label is `a0 XOR a1`, every other
/// attribute is noise from a fixed LCG stream.
fn synthetic_dataset(rows: usize, attributes: usize) -> Dataset {
    let names = (0..attributes).map(|a| format!("a{a}")).collect::<Vec<String>>();
    let mut state = 0x2545F4914F6CDD1D_u64;
    let mut data = Vec::with_capacity(rows);
    for _ in 0..rows {
        let mut row = Vec::with_capacity(attributes + 1);
        for _ in 0..attributes {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            row.push((state >> 63) as u8);
        }
        let label = row[0] ^ row[1];
        row.push(label);
        data.push(row);
    }
    Dataset::from_rows(data, names).unwrap()
}

pub fn training_benchmark(c: &mut Criterion) {
    let data = synthetic_dataset(2000, 16);

    let mut group = c.benchmark_group("training_benchmark");
    group.warm_up_time(Duration::from_secs(5));
    group.sample_size(10);

    group.bench_function("fit_synthetic_2000x16", |b| {
        b.iter(|| DecisionTree::fit(black_box(&data)).unwrap())
    });

    let tree = DecisionTree::fit(&data).unwrap();
    group.bench_function("evaluate_synthetic_2000x16", |b| {
        b.iter(|| tree.evaluate(black_box(&data)))
    });
    group.finish();
}

criterion_group!(benches, training_benchmark);
criterion_main!(benches);
