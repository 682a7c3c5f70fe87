use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatraster::math::{Vec2f, Vec2i, Vec3f};
use flatraster::mesh::{Face, Mesh};
use flatraster::render::{
    draw_line_bresenham, draw_line_wu, fill_triangle, fill_triangle_unbuffered, DepthBuffer,
    FrameBuffer, ScreenTriangle,
};
use flatraster::{Color, Engine};

const BUFFER_WIDTH: usize = 800;
const BUFFER_HEIGHT: usize = 600;

fn small_triangle() -> ScreenTriangle {
    ScreenTriangle::new([
        Vec3f::new(100.0, 100.0, 0.0),
        Vec3f::new(120.0, 100.0, 0.0),
        Vec3f::new(110.0, 120.0, 0.0),
    ])
}

fn medium_triangle() -> ScreenTriangle {
    ScreenTriangle::new([
        Vec3f::new(100.0, 100.0, 0.0),
        Vec3f::new(300.0, 100.0, 0.0),
        Vec3f::new(200.0, 300.0, 0.0),
    ])
}

fn large_triangle() -> ScreenTriangle {
    ScreenTriangle::new([
        Vec3f::new(50.0, 50.0, 0.0),
        Vec3f::new(750.0, 100.0, 0.0),
        Vec3f::new(400.0, 550.0, 0.0),
    ])
}

/// A grid of small counter-clockwise triangles covering most of the unit square.
fn grid_mesh(cells: usize) -> Mesh {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    let step = 1.8 / cells as f64;
    for row in 0..cells {
        for col in 0..cells {
            let x = -0.9 + col as f64 * step;
            let y = -0.9 + row as f64 * step;
            let z = (row + col) as f64 / (2 * cells) as f64;
            let base = vertices.len();
            vertices.push(Vec3f::new(x, y, z));
            vertices.push(Vec3f::new(x + step * 0.9, y, z));
            vertices.push(Vec3f::new(x + step * 0.45, y + step * 0.8, z));
            faces.push(Face::new(base, base + 1, base + 2));
        }
    }
    Mesh::new("grid", vertices, faces).expect("grid indices are in range")
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("depth_tested", name), &triangle, |b, tri| {
            let mut frame = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, Color::BLACK);
            let mut depth = DepthBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                depth.clear();
                fill_triangle(black_box(tri), &mut depth, &mut frame, Color::RED)
            });
        });

        group.bench_with_input(BenchmarkId::new("unbuffered", name), &triangle, |b, tri| {
            let mut frame = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, Color::BLACK);
            b.iter(|| fill_triangle_unbuffered(black_box(tri), &mut frame, Color::RED));
        });
    }

    group.finish();
}

fn benchmark_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    group.bench_function("bresenham_fan", |b| {
        let mut frame = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, Color::BLACK);
        b.iter(|| {
            for i in 0..64 {
                let end = Vec2i::new(i * 12, 599 - i * 9);
                draw_line_bresenham(Vec2i::new(0, 0), black_box(end), &mut frame, Color::WHITE);
            }
        });
    });

    group.bench_function("wu_fan", |b| {
        let mut frame = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, Color::BLACK);
        b.iter(|| {
            for i in 0..64 {
                let end = Vec2f::new(i as f64 * 12.3, 599.0 - i as f64 * 9.1);
                draw_line_wu(Vec2f::new(0.0, 0.0), black_box(end), &mut frame, Color::WHITE);
            }
        });
    });

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let mesh = grid_mesh(20);
    let engine = Engine::new(BUFFER_WIDTH, BUFFER_HEIGHT);

    group.bench_function("sequential_400_triangles", |b| {
        b.iter(|| engine.render(black_box(&mesh)));
    });

    group.bench_function("parallel_400_triangles", |b| {
        b.iter(|| engine.render_parallel(black_box(&mesh)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_lines,
    benchmark_many_triangles
);
criterion_main!(benches);
