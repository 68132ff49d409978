//! Performance benchmarks for the address book.
//!
//! These benchmarks measure the hot paths of a session:
//! - Dispatching `add` lines into a growing book
//! - Looking up a contact by name
//! - Rendering `all` for different book sizes

use address_book_assistant::{AddressBook, ContactStore, Session};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a book with `size` contacts named `contact<N>`.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        book.add(&format!("contact{}", i), &format!("{:010}", i))
            .expect("generated phone is valid");
    }
    book
}

fn bench_dispatch_add(c: &mut Criterion) {
    let lines: Vec<String> = (0..1000)
        .map(|i| format!("add Contact{} {:010}", i, i))
        .collect();

    c.bench_function("dispatch_add_1000", |b| {
        b.iter(|| {
            let mut session = Session::new(AddressBook::new());
            for line in &lines {
                black_box(session.handle_line(line));
            }
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for size in [10usize, 100, 1000] {
        let book = create_test_book(size);
        let name = format!("contact{}", size / 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(book.lookup(black_box(&name))))
        });
    }
    group.finish();
}

fn bench_show_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_all");
    for size in [10usize, 100, 1000] {
        let mut session = Session::new(create_test_book(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(session.handle_line("all")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch_add, bench_lookup, bench_show_all);
criterion_main!(benches);
