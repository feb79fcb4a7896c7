use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sensorview::{Dataset, Metric};

fn synthetic_feed(rows: usize) -> String {
    let mut text = String::from("Fecha,Hora,Temp,Hum,Pres,Alt,PM25,PM10,Viento,Dir,Gas,Lluvia\n");
    for i in 0..rows {
        let day = 1 + (i % 28);
        let hour = i % 24;
        text.push_str(&format!(
            "2024-06-{day:02},{hour:02}:00,21.{},6{},1012,300,10,15,5,N,8.2,0\n",
            i % 10,
            i % 10
        ));
    }
    text
}

fn bench_pipeline(c: &mut Criterion) {
    let feed = synthetic_feed(5000);
    let now = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();

    c.bench_function("build_dataset", |b| {
        b.iter(|| Dataset::from_feed_text(black_box(&feed)))
    });

    let dataset = Dataset::from_feed_text(&feed).unwrap();
    c.bench_function("window_and_project", |b| {
        b.iter(|| {
            let window = dataset.select_window(black_box(now), 7).unwrap();
            Metric::CHARTED
                .iter()
                .map(|&m| window.project(m).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
