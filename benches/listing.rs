use std::{fs, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};
use pdirfile_core::{DirFile, ListOptions, ListerConfig};

fn bench_listing(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("temp dir");
    for i in 0..500 {
        fs::write(dir.path().join(format!("entry-{i:04}.dat")), b"").expect("write entry");
    }
    let root = dir.path().to_str().expect("utf-8 temp path").to_owned();

    let counted = DirFile::native();
    c.bench_function("list_counted_500", |b| {
        b.iter(|| counted.list_directory(black_box(&root), ListOptions::empty(), None, None).expect("list"));
    });

    for step in [1, 10, 100] {
        let growable = DirFile::native().with_config(ListerConfig::with_growth_increment(step).expect("step"));
        c.bench_function(&format!("list_growable_500_step_{step}"), |b| {
            b.iter(|| growable.list_directory(black_box(&root), ListOptions::DONT_COUNT, None, None).expect("list"));
        });
    }
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
