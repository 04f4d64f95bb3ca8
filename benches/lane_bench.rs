use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quadlane::{F32x4, I32x4};

// Benchmark constants to avoid magic numbers
const BUFFER_LEN: usize = 4096;
const CHUNK: usize = 4;

fn make_floats() -> Vec<f32> {
    (0..BUFFER_LEN).map(|i| (i as f32) * 0.25 + 1.0).collect()
}

fn make_ints() -> Vec<i32> {
    (0..BUFFER_LEN).map(|i| (i as i32) - 2048).collect()
}

fn bench_dot_product(c: &mut Criterion) {
    let a = make_floats();
    let b = make_floats();

    c.bench_function("dot_product_4096", |bench| {
        bench.iter(|| {
            let mut acc = 0.0f32;
            for i in (0..BUFFER_LEN).step_by(CHUNK) {
                let va = F32x4::from_slice(black_box(&a[i..]));
                let vb = F32x4::from_slice(black_box(&b[i..]));
                acc += va.dot(vb);
            }
            black_box(acc)
        })
    });
}

fn bench_rsqrt_buffer(c: &mut Criterion) {
    let input = make_floats();
    let mut output = vec![0.0f32; BUFFER_LEN];

    c.bench_function("rsqrt_4096", |bench| {
        bench.iter(|| {
            for i in (0..BUFFER_LEN).step_by(CHUNK) {
                let v = F32x4::from_slice(black_box(&input[i..]));
                v.rsqrt().write_to_slice(&mut output[i..]);
            }
            black_box(&output);
        })
    });
}

fn bench_sqrt_buffer(c: &mut Criterion) {
    let input = make_floats();
    let mut output = vec![0.0f32; BUFFER_LEN];

    c.bench_function("sqrt_4096", |bench| {
        bench.iter(|| {
            for i in (0..BUFFER_LEN).step_by(CHUNK) {
                let v = F32x4::from_slice(black_box(&input[i..]));
                v.sqrt().write_to_slice(&mut output[i..]);
            }
            black_box(&output);
        })
    });
}

fn bench_int_mul_sum(c: &mut Criterion) {
    let a = make_ints();
    let b = make_ints();

    c.bench_function("int_mul_sum_4096", |bench| {
        bench.iter(|| {
            let mut acc = 0i32;
            for i in (0..BUFFER_LEN).step_by(CHUNK) {
                let va = I32x4::from_slice(black_box(&a[i..]));
                let vb = I32x4::from_slice(black_box(&b[i..]));
                acc = acc.wrapping_add((va * vb).sum());
            }
            black_box(acc)
        })
    });
}

fn bench_clamp_select(c: &mut Criterion) {
    let input = make_floats();
    let mut output = vec![0.0f32; BUFFER_LEN];
    let lo = F32x4::splat(16.0);
    let hi = F32x4::splat(768.0);

    c.bench_function("clamp_select_4096", |bench| {
        bench.iter(|| {
            for i in (0..BUFFER_LEN).step_by(CHUNK) {
                let v = F32x4::from_slice(black_box(&input[i..]));
                let clamped = F32x4::select(v.simd_lt(lo), lo, v.min(hi));
                clamped.write_to_slice(&mut output[i..]);
            }
            black_box(&output);
        })
    });
}

criterion_group!(
    benches,
    bench_dot_product,
    bench_rsqrt_buffer,
    bench_sqrt_buffer,
    bench_int_mul_sum,
    bench_clamp_select
);
criterion_main!(benches);
