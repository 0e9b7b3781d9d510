use std::hint::black_box;

use criterion::measurement::WallTime;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use layout_convolve::kernels::box_kernel_vec;
use layout_convolve::{
    horiz_convolution, transpose_planar, vert_convolution, vert_convolution_planar_by_transpose,
    Layout,
};

const HEIGHT: u32 = 1024;
const WIDTH: u32 = 1024;
const CHANNELS: u32 = 3;
const SAMPLE_SIZE: usize = 20;

fn get_src_image() -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(0);
    let len = (HEIGHT * WIDTH * CHANNELS) as usize;
    (0..len).map(|_| rng.random::<f32>()).collect()
}

fn layout_str(layout: Layout) -> &'static str {
    match layout {
        Layout::Interleaved => "interleaved",
        Layout::Planar => "planar",
    }
}

fn bench_convolution(group: &mut BenchmarkGroup<WallTime>, src: &[f32]) {
    let mut dst = vec![0f32; src.len()];
    for kernel_size in [3, 7] {
        let kernel = box_kernel_vec(kernel_size).unwrap();
        for layout in [Layout::Interleaved, Layout::Planar] {
            let parameter = format!("{} {}", layout_str(layout), kernel_size);
            group.bench_function(BenchmarkId::new("horizontal", &parameter), |bencher| {
                bencher.iter(|| {
                    for channel in 0..CHANNELS {
                        horiz_convolution(
                            layout,
                            &kernel,
                            black_box(src),
                            HEIGHT,
                            WIDTH,
                            CHANNELS,
                            channel,
                            &mut dst,
                        )
                        .unwrap();
                    }
                })
            });
            group.bench_function(BenchmarkId::new("vertical", &parameter), |bencher| {
                bencher.iter(|| {
                    for channel in 0..CHANNELS {
                        vert_convolution(
                            layout,
                            &kernel,
                            black_box(src),
                            HEIGHT,
                            WIDTH,
                            CHANNELS,
                            channel,
                            &mut dst,
                        )
                        .unwrap();
                    }
                })
            });
        }

        let parameter = format!("planar {}", kernel_size);
        group.bench_function(
            BenchmarkId::new("vertical by transpose", &parameter),
            |bencher| {
                bencher.iter(|| {
                    for channel in 0..CHANNELS {
                        vert_convolution_planar_by_transpose(
                            &kernel,
                            black_box(src),
                            HEIGHT,
                            WIDTH,
                            CHANNELS,
                            channel,
                            &mut dst,
                        )
                        .unwrap();
                    }
                })
            },
        );
    }
}

fn bench_transpose(group: &mut BenchmarkGroup<WallTime>, src: &[f32]) {
    let mut dst = vec![0f32; src.len()];
    group.bench_function(BenchmarkId::new("transpose", "planar"), |bencher| {
        bencher.iter(|| {
            transpose_planar(black_box(src), HEIGHT, WIDTH, CHANNELS, &mut dst).unwrap();
        })
    });
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    let src = get_src_image();
    {
        let mut group = criterion.benchmark_group("Convolution of f32 image 1024x1024x3");
        group.sample_size(SAMPLE_SIZE);
        bench_convolution(&mut group, &src);
        bench_transpose(&mut group, &src);
        group.finish();
    }
    criterion.final_summary();
}
