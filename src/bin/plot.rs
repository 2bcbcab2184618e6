use std::{any, time::Instant};

use gnuplot::{
    AlignType, AutoOption, Axes2D, AxesCommon, Coordinate, Figure, LegendOption, PlotOption, Tick,
};
use log::info;
use sum_search::{
    max_subarray::{self, MaxSubarray},
    rand,
    subset_sum::{self, SubsetSum},
};

const N: usize = 9;
const XS: [usize; N] = const {
    let mut xs = [0; N];
    let (mut i, mut x) = (0, 2);
    while i < N {
        xs[i] = x;
        x *= 2;
        i += 1;
    }
    xs
};
const SUBSET_N: usize = 20;
const SUBSET_XS: [usize; SUBSET_N] = const {
    let mut xs = [0; SUBSET_N];
    let mut i = 0;
    while i < SUBSET_N {
        xs[i] = i + 1;
        i += 1;
    }
    xs
};

fn name<T>(t: &T) -> &'static str {
    any::type_name_of_val(t).rsplit("::").next().unwrap_or_default()
}

fn caption<'a>(name: &'a str) -> [PlotOption<&'a str>; 3] {
    [
        PlotOption::LineWidth(2.0),
        PlotOption::PointSize(2.0),
        PlotOption::Caption(name),
    ]
}

fn legend(axes: &mut Axes2D) {
    axes.set_legend(
        Coordinate::Graph(0.05),
        Coordinate::Graph(0.95),
        &[LegendOption::Placement(
            AlignType::AlignLeft,
            AlignType::AlignTop,
        )],
        &[],
    );
}

fn plot_max_subarray(max_subarray: impl MaxSubarray<i32>, axes: &mut Axes2D) {
    let ys = XS.map(|x| {
        let seq = rand::vec_of(x, rand::small_int);
        let before = Instant::now();
        let span = max_subarray.max_subarray(&seq);
        let elapsed = before.elapsed().as_nanos() as u64;
        info!("{} n={x}: {span:?} in {elapsed}ns", name(&max_subarray));
        elapsed
    });
    axes.lines_points(XS, ys, &caption(name(&max_subarray)));
}

fn plot_subset_sum(subset_sum: impl SubsetSum<i32>, axes: &mut Axes2D) {
    let ys = SUBSET_XS.map(|x| {
        // even elements and an odd target: in range, never hit
        let seq = rand::vec_of(x, || 2 * rand::range(-50..=50));
        let before = Instant::now();
        let found = subset_sum.subset_sum(&seq, 1);
        let elapsed = before.elapsed().as_nanos() as u64;
        info!("{} n={x}: {found:?} in {elapsed}ns", name(&subset_sum));
        elapsed
    });
    axes.lines_points(SUBSET_XS, ys, &caption(name(&subset_sum)));
}

fn main() {
    env_logger::init();

    let mut figure = Figure::new();
    figure.set_title("Maximum Subarray and Subset Sum");

    let x_ticks = (1..)
        .map(|x| Tick::Major(2f32.powi(x), AutoOption::<f32>::Auto))
        .take(N);
    let y_ticks = (1..)
        .zip([
            "10ns", "100ns", "1µs", "10µs", "100µs", "1ms", "10ms", "100ms", "1s", "10s",
        ])
        .map(|(y, label)| Tick::Major(10f32.powi(y), AutoOption::Fix(label)));

    let axes = figure
        .axes2d()
        .set_pos_grid(1, 2, 0)
        .set_title("Maximum subarray", &[])
        .set_x_grid(true)
        .set_x_label("Array length", &[])
        .set_x_ticks_custom(x_ticks, &[], &[])
        .set_x_log(Some(2.0))
        .set_y_grid(true)
        .set_y_label("Time (ns)", &[])
        .set_y_ticks_custom(y_ticks.clone(), &[], &[])
        .set_y_log(Some(10.0));
    legend(axes);
    plot_max_subarray(max_subarray::BruteForce, axes);
    plot_max_subarray(max_subarray::DivideAndConquer, axes);

    let axes = figure
        .axes2d()
        .set_pos_grid(1, 2, 1)
        .set_title("Subset sum", &[])
        .set_x_grid(true)
        .set_x_label("Set size", &[])
        .set_y_grid(true)
        .set_y_label("Time (ns)", &[])
        .set_y_ticks_custom(y_ticks, &[], &[])
        .set_y_log(Some(10.0));
    legend(axes);
    plot_subset_sum(subset_sum::Exhaustive, axes);

    figure.show().unwrap();
}
