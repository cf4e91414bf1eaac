use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vertical_text_renderer::layout::compute_layout;
use vertical_text_renderer::render::render_layout_svg;
use vertical_text_renderer::segment::segment_into_columns;
use vertical_text_renderer::style::TextStyle;

const PASSAGE: &str = "春はあけぼの。やうやう白くなりゆく山ぎは、すこしあかりて、紫だちたる雲のほそくたなびきたる。\n\
夏は夜。月のころはさらなり、やみもなほ、ほたるの多く飛びちがひたる。\n\
「秋は夕暮れ。」夕日のさして山の端いと近うなりたるに、からすの寝どころへ行くとて、\n";

fn passage(paragraphs: usize) -> String {
    PASSAGE.repeat(paragraphs)
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    for paragraphs in [1usize, 10, 100] {
        let text = passage(paragraphs);
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &text, |b, text| {
            b.iter(|| segment_into_columns(black_box(text), 20).unwrap())
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let style = TextStyle::default();
    let mut group = c.benchmark_group("render");
    for paragraphs in [1usize, 10, 100] {
        let columns = segment_into_columns(&passage(paragraphs), style.max_column_chars).unwrap();
        group.bench_with_input(BenchmarkId::new("layout", paragraphs), &columns, |b, columns| {
            b.iter(|| compute_layout(black_box(columns), &style))
        });
        let layout = compute_layout(&columns, &style);
        group.bench_with_input(BenchmarkId::new("svg", paragraphs), &layout, |b, layout| {
            b.iter(|| render_layout_svg(black_box(layout), &style))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segment, bench_render);
criterion_main!(benches);
