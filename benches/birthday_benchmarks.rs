//! Performance benchmarks for the upcoming-birthday query.
//!
//! These benchmarks measure the query over address books of different sizes,
//! with birthdays spread evenly across the year.

use contact_book::{AddressBook, CalendarDate, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` contacts, each with a birthday and a phone.
fn create_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let name = format!("Contact{}", i);
        let phone = format!("{:010}", i);
        let mut record = Record::new(&name, Some(&phone), None).unwrap();

        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record
            .add_birthday(&format!("{:02}.{:02}.1990", day, month))
            .unwrap();
        book.add_record(record);
    }
    book
}

fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = CalendarDate::parse("10.06.2024").unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1000] {
        let book = create_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays(black_box(today)));
        });
    }

    group.finish();
}

fn bench_validate_date(c: &mut Criterion) {
    c.bench_function("validate_date", |b| {
        b.iter(|| CalendarDate::parse(black_box("15.06.1990")));
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_validate_date);
criterion_main!(benches);
