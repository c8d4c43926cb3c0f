// Series approximations against std on [-4, 4], plus J0 on [0, 10].
// Prints JSON with 200 evaluation points:
//   {"x":[...], "exp_err":[...], "sinh_err":[...], "cosh_err":[...], "tanh_err":[...],
//    "xb":[...], "j0":[...]}
// Errors are relative to the std implementations.

use numseries::{bessel, cosh, exp, sinh, tanh};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6e}")).collect();
    format!("[{}]", inner.join(","))
}

fn rel_err(approx: &[f64], exact: impl Fn(f64) -> f64, xs: &[f64]) -> Vec<f64> {
    approx
        .iter()
        .zip(xs)
        .map(|(&a, &x)| {
            let e = exact(x);
            if e == 0.0 { (a - e).abs() } else { ((a - e) / e).abs() }
        })
        .collect()
}

fn main() {
    const N: usize = 200;
    let x: Vec<f64> = (0..N).map(|i| -4.0 + 8.0 * i as f64 / (N - 1) as f64).collect();

    let exp_err = rel_err(&exp(x.clone()), f64::exp, &x);
    let sinh_err = rel_err(&sinh(x.clone()), f64::sinh, &x);
    let cosh_err = rel_err(&cosh(x.clone()), f64::cosh, &x);
    let tanh_err = rel_err(&tanh(x.clone()), f64::tanh, &x);

    let xb: Vec<f64> = (0..N).map(|i| 10.0 * i as f64 / (N - 1) as f64).collect();
    let j0 = bessel(0.0, xb.clone()).expect("order 0 is always valid");

    println!(
        "{{\"x\":{},\"exp_err\":{},\"sinh_err\":{},\"cosh_err\":{},\"tanh_err\":{},\"xb\":{},\"j0\":{}}}",
        fmt_arr(&x),
        fmt_arr(&exp_err),
        fmt_arr(&sinh_err),
        fmt_arr(&cosh_err),
        fmt_arr(&tanh_err),
        fmt_arr(&xb),
        fmt_arr(&j0)
    );
}
