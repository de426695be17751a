use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::path::PathBuf;

use fretboard_editor::{
    CommandBuilder, OutputMode, ParameterId, ParameterModel, RendererConfig,
};

fn bench_build_preview_invocation(c: &mut Criterion) {
    let builder = CommandBuilder::new(RendererConfig {
        program: "fblt".to_string(),
        preview_path: PathBuf::from("/tmp/fretboard-preview.svg"),
    });
    let model = ParameterModel::default();

    c.bench_function("build_preview_invocation", |b| {
        b.iter(|| builder.build(black_box(&model), OutputMode::Preview));
    });
}

fn bench_build_save_invocation_multiscale(c: &mut Criterion) {
    let builder = CommandBuilder::new(RendererConfig::default());
    let mut model = ParameterModel::default();
    model.set_multiscale_enabled(true);
    model.set_use_viewer(true);

    c.bench_function("build_save_invocation_multiscale", |b| {
        b.iter(|| builder.build(black_box(&model), OutputMode::Save));
    });
}

fn bench_edit_then_build(c: &mut Criterion) {
    let builder = CommandBuilder::new(RendererConfig::default());
    let mut model = ParameterModel::default();

    c.bench_function("edit_then_build", |b| {
        let mut scale = 600.0;
        b.iter(|| {
            scale += 0.1;
            if scale > 700.0 {
                scale = 600.0;
            }
            model.set(ParameterId::ScaleLength, scale);
            builder.build(black_box(&model), OutputMode::Preview)
        });
    });
}

criterion_group!(
    benches,
    bench_build_preview_invocation,
    bench_build_save_invocation_multiscale,
    bench_edit_then_build
);
criterion_main!(benches);
