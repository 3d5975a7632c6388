//! Benchmark for override file encoding and decoding
//!
//! Store sized like a heavily modded game: 2000 pawn kinds, half of them
//! with overrides.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pawn_tweak_core::config::{DefDatabase, FloatRange, PawnKindDef};
use pawn_tweak_core::persistence::{read_rows, write_rows};
use pawn_tweak_core::tweak::TweakStore;

const PAWN_KINDS: usize = 2000;

/// Create a realistic host and a store with every other record overridden
fn create_test_store() -> (DefDatabase, TweakStore) {
    let defs = (0..PAWN_KINDS)
        .map(|i| PawnKindDef {
            apparel_money: FloatRange::new(100.0 + i as f32, 500.0 + i as f32),
            tech_hediffs_chance: (i % 10) as f32 / 10.0,
            apparel_tags: vec!["Industrial".to_string(), "Outlander".to_string()],
            ..PawnKindDef::new(format!("PawnKind_{}", i))
        })
        .collect();
    let db = match DefDatabase::new(defs, Vec::new()) {
        Ok(db) => db,
        Err(err) => panic!("benchmark database: {}", err),
    };

    let mut store = TweakStore::from_host(&db);
    for (i, tweak) in store.iter_mut().enumerate().filter(|(i, _)| i % 2 == 0) {
        tweak.apparel_money.set(FloatRange::new(50.0, 250.0 + i as f32));
        tweak.tech_hediffs_chance.set(0.35);
        if i % 4 == 0 {
            tweak
                .weapon_tags
                .set(vec!["Gun".to_string(), "IndustrialGunAdvanced".to_string()]);
        }
    }
    (db, store)
}

fn encode(store: &TweakStore) -> Vec<u8> {
    let mut out = Vec::new();
    if let Err(err) = write_rows(&mut out, store) {
        panic!("encode failed: {}", err);
    }
    out
}

fn benchmark_write(c: &mut Criterion) {
    let (_, store) = create_test_store();

    c.bench_function("write_rows", |b| b.iter(|| black_box(encode(black_box(&store)))));
}

fn benchmark_read(c: &mut Criterion) {
    let (db, store) = create_test_store();
    let bytes = encode(&store);

    c.bench_function("read_rows", |b| {
        let mut target = TweakStore::from_host(&db);
        b.iter(|| {
            target.reset_all();
            match read_rows(black_box(bytes.as_slice()), &mut target) {
                Ok(summary) => black_box(summary),
                Err(err) => panic!("decode failed: {}", err),
            }
        })
    });
}

fn benchmark_apply(c: &mut Criterion) {
    let (db, store) = create_test_store();

    c.bench_function("apply_all", |b| {
        let mut host = db.clone();
        b.iter(|| black_box(store.apply_all(&mut host)))
    });
}

criterion_group!(benches, benchmark_write, benchmark_read, benchmark_apply);
criterion_main!(benches);
