use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mergington_activities::services::ActivityDirectory;

fn benchmark_directory(c: &mut Criterion) {
    let directory = ActivityDirectory::seeded();

    // Pad one roster so membership checks scan a realistic class size
    for i in 0..30 {
        directory
            .enroll("Gym Class", &format!("student{i}@mergington.edu"))
            .expect("Failed to pad roster");
    }

    let mut group = c.benchmark_group("directory");

    group.bench_function("list_activities", |b| {
        b.iter(|| black_box(directory.list_activities()))
    });

    group.bench_function("enroll_then_withdraw", |b| {
        b.iter(|| {
            directory
                .enroll(black_box("Gym Class"), black_box("bench@mergington.edu"))
                .unwrap();
            directory
                .withdraw(black_box("Gym Class"), black_box("bench@mergington.edu"))
                .unwrap();
        })
    });

    group.bench_function("enroll_duplicate_rejected", |b| {
        b.iter(|| {
            let _ = directory.enroll(black_box("Gym Class"), black_box("student0@mergington.edu"));
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_directory);
criterion_main!(benches);
