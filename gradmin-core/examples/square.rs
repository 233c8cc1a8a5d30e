use gradmin::{get_minimizer, GradientDescent};

fn main() {
    println!("{}", get_minimizer(10, 0.01, 5.0));

    let result = GradientDescent::new()
        .with_iterations(10)
        .with_learning_rate(0.01)
        .minimize_square(5.0);

    println!(
        "iters={} x*={} x_raw={:.10} f(x*)={:.3e}",
        result.iters, result.x, result.x_raw, result.f
    );
}
