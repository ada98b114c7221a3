use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use lendlog::{core::library::Library, item::ItemDraft};

fn stocked(items: u64, members: u64) -> Library {
    let mut lib = Library::new();
    for i in 0..items {
        lib.add_item(ItemDraft::new("title", "author", format!("ISBN-{i}")))
            .expect("add item");
    }
    for i in 0..members {
        lib.add_member(format!("member {i}")).expect("add member");
    }
    lib
}

fn bench_add_items(c: &mut Criterion) {
    c.bench_function("catalog_add_50k", |b| {
        b.iter(|| stocked(50_000, 0));
    });
}

fn bench_borrow_return(c: &mut Criterion) {
    c.bench_function("borrow_return_10k", |b| {
        let mut lib = stocked(10_000, 100);
        let first = lib.next_member_id() - 100;
        b.iter(|| {
            for i in 0..10_000u64 {
                let id = format!("ISBN-{i}");
                let member = first + (i % 100) as u32;
                lib.borrow(&id, member).expect("borrow");
                lib.return_item(&id, member).expect("return");
            }
        });
    });
}

fn bench_snapshot_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_export");
    for n in [100u64, 1_000, 10_000] {
        let lib = stocked(n, n / 10);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| lib.export_snapshot());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_items, bench_borrow_return, bench_snapshot_export);
criterion_main!(benches);
