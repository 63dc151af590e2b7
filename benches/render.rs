//! Full-frame render benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use termedit::ansi::AnsiWriter;
use termedit::text::Buffer;
use termedit::{Editor, EditorOptions, Highlighter, InputParser, Renderer};

const SIZES: [(u16, u16); 3] = [(80, 24), (120, 40), (200, 60)];

fn sample_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("int value_{i} = {i}; // line {i} with \"text\""))
        .collect::<Vec<_>>()
        .join("\n")
}

fn editor(buffers: usize) -> Editor {
    let text = sample_text(500);
    let buffers = (0..buffers)
        .map(|i| Buffer::from_text(format!("file_{i}.cpp"), &text))
        .collect();
    Editor::from_buffers(buffers, EditorOptions::default()).unwrap()
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    for (cols, rows) in SIZES {
        let id = format!("{cols}x{rows}");
        group.bench_function(BenchmarkId::new("highlighted", &id), |b| {
            let mut ed = editor(4);
            let mut renderer = Renderer::default();
            let mut out = AnsiWriter::new(Vec::with_capacity(64 * 1024));
            b.iter(|| {
                out.clear_buffer();
                renderer.render(&mut ed, &mut out, cols, rows);
                black_box(out.buffer().len());
            });
        });
        group.bench_function(BenchmarkId::new("plain", &id), |b| {
            let mut ed = editor(4);
            let mut renderer = Renderer::with_highlighter(Highlighter::disabled());
            let mut out = AnsiWriter::new(Vec::with_capacity(64 * 1024));
            b.iter(|| {
                out.clear_buffer();
                renderer.render(&mut ed, &mut out, cols, rows);
                black_box(out.buffer().len());
            });
        });
    }
    group.finish();
}

fn bench_keystroke_then_frame(c: &mut Criterion) {
    c.bench_function("render_type_and_redraw_80x24", |b| {
        let mut ed = editor(1);
        let mut renderer = Renderer::default();
        let mut parser = InputParser::new();
        let mut out = AnsiWriter::new(Vec::with_capacity(64 * 1024));
        let _ = ed.handle_keys(parser.feed(b"i"));
        b.iter(|| {
            let _ = ed.handle_keys(parser.feed(b"x\x7f"));
            out.clear_buffer();
            renderer.render(&mut ed, &mut out, 80, 24);
            black_box(out.buffer().len());
        });
    });
}

criterion_group!(benches, bench_frame, bench_keystroke_then_frame);
criterion_main!(benches);
