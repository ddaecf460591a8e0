//! Benchmarks for the clientraw decoder and weather item composer.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use wdlive::{ClientRaw, Settings, WeatherItem, WeatherItemType};

/// A record with every decoded position populated.
const SAMPLE_RECORD: &str = concat!(
    "12345 11.2 12.3 180 25.4 97 1019.7 15.67 - - 1.23 - 20.4 45 - 35 - - - - ",
    "- - - - - - - - - 23 59 - - - - - - - - - ",
    "- - - - 23.2 30.5 - - - - 0 - - - - - - - - - ",
    "- - - - - - - - - - - - -13.2 - - - - - - 4.2 ",
    "- - - - - - - - - - - - - - - - - - - - ",
    "- - - - - - - - - - - - 31.6 - - - - - - - ",
    "- - - - - - - - - - - - - - - - - - - - ",
    "- - - -1 1"
);

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.throughput(Throughput::Bytes(SAMPLE_RECORD.len() as u64));
    group.bench_function("populated", |b| {
        b.iter(|| ClientRaw::new(black_box(SAMPLE_RECORD)))
    });

    group.bench_function("short", |b| {
        b.iter(|| ClientRaw::new(black_box("12345 11.2 12.3 180")))
    });

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let record = ClientRaw::new(SAMPLE_RECORD);

    let settings = Settings::new();
    group.throughput(Throughput::Elements(1));
    group.bench_function("summary", |b| {
        b.iter(|| WeatherItem::compose(black_box(&record), &settings))
    });

    group.throughput(Throughput::Elements(WeatherItemType::ALL.len() as u64));
    group.bench_function("all_items", |b| {
        let mut settings = Settings::new();
        b.iter(|| {
            for _ in 0..WeatherItemType::ALL.len() {
                let _ = WeatherItem::compose(black_box(&record), &settings);
                settings.next_weather_item_type();
            }
        })
    });

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let settings = Settings::new();

    c.bench_function("decode_and_compose", |b| {
        b.iter(|| {
            let record = ClientRaw::new(black_box(SAMPLE_RECORD));
            WeatherItem::compose(&record, &settings)
        })
    });
}

criterion_group!(benches, bench_decode, bench_compose, bench_full_pipeline);
criterion_main!(benches);
