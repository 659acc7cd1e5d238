use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use bmp_gradient_rs::image_pipeline::{
    gradient, ChannelConversion, EncodeConfig, RasterBuffer, RasterToBmpPipeline,
};
use std::io::Cursor;

fn benchmark_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_fill");

    for (size, label) in [(100, "100x100"), (500, "500x500"), (1000, "1000x1000")] {
        group.bench_with_input(BenchmarkId::new("sequential", label), &size, |b, &size| {
            let mut image = RasterBuffer::new(size, size);
            b.iter(|| image.fill_with(gradient(size, size)));
        });

        group.bench_with_input(BenchmarkId::new("per_row_parallel", label), &size, |b, &size| {
            let mut image = RasterBuffer::new(size, size);
            b.iter(|| image.par_fill_with(gradient(size, size)));
        });
    }

    group.finish();
}

fn benchmark_encode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_by_size");

    // 333 exercises row padding
    for (size, label) in [(100, "100x100"), (333, "333x333"), (1000, "1000x1000")] {
        let image = RasterBuffer::gradient(size, size);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            let pipeline = RasterToBmpPipeline::new(EncodeConfig::default());

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                pipeline.convert(black_box(image), &mut output).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_channel_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel_conversion");
    let image = RasterBuffer::gradient(500, 500);

    for (conversion, label) in [
        (ChannelConversion::Wrap, "wrap"),
        (ChannelConversion::Clamp, "clamp"),
    ] {
        group.bench_function(label, |b| {
            let config = EncodeConfig::builder()
                .channel_conversion(conversion)
                .build();
            let pipeline = RasterToBmpPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                pipeline.convert(black_box(&image), &mut output).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fill,
    benchmark_encode_sizes,
    benchmark_channel_conversion
);
criterion_main!(benches);
