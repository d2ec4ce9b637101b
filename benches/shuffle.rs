use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use concentration::{build_deck, shuffled, GameRng, Symbol};

fn bench_shuffle(c: &mut Criterion) {
    let alphabet: Vec<Symbol> = (0u16..32).map(Symbol::new).collect();
    let deck = build_deck(&alphabet).expect("non-empty alphabet");

    c.bench_function("shuffle/64_cards", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| shuffled(black_box(&deck), &mut rng));
    });

    c.bench_function("build_deck/32_pairs", |b| {
        b.iter(|| build_deck(black_box(&alphabet)));
    });
}

criterion_group!(benches, bench_shuffle);
criterion_main!(benches);
