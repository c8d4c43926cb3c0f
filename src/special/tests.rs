use super::*;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

fn approx_eq_f32(a: f32, b: f32, tol: f32) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq_f32 failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

fn fine_gamma() -> GammaSettings<f64> {
    GammaSettings {
        upper_limit: 60.0,
        intervals: 20_000,
    }
}

// =====================================================================
// factorial
// =====================================================================

#[test]
fn factorial_small() {
    assert_eq!(factorial(0_u64), Ok(1));
    assert_eq!(factorial(1_u64), Ok(1));
    assert_eq!(factorial(5_u64), Ok(120));
    assert_eq!(factorial(10_i32), Ok(3_628_800));
    assert_eq!(factorial(20_u64), Ok(2_432_902_008_176_640_000));
}

#[test]
fn factorial_negative_is_domain_error() {
    assert_eq!(factorial(-1_i32), Err(SpecialError::DomainError));
    assert_eq!(factorial(i64::MIN), Err(SpecialError::DomainError));
}

#[test]
fn factorial_overflow() {
    assert_eq!(factorial(5_u8), Ok(120));
    assert_eq!(factorial(6_u8), Err(SpecialError::Overflow));
    assert_eq!(factorial(13_i32), Err(SpecialError::Overflow));
    assert_eq!(factorial(255_u8), Err(SpecialError::Overflow));
    assert!(factorial(34_u128).is_ok());
    assert_eq!(factorial(35_u128), Err(SpecialError::Overflow));
}

#[test]
fn factorial_array() {
    assert_eq!(factorial([0_i64, 1, 2]), Ok([1, 1, 2]));
    assert_eq!(factorial(vec![3_u32, 4]), Ok(vec![6, 24]));
    // one bad element fails the whole call
    assert_eq!(factorial([2_i32, -3, 4]), Err(SpecialError::DomainError));
}

#[test]
fn factorial_recurrence() {
    for n in 1_u64..20 {
        assert_eq!(factorial(n + 1).unwrap(), (n + 1) * factorial(n).unwrap());
    }
}

// =====================================================================
// gamma
// =====================================================================

#[test]
fn gamma_one_exact() {
    assert_eq!(gamma(1.0_f64), Ok(1.0));
    assert_eq!(gamma(1.0_f32), Ok(1.0));
}

#[test]
fn gamma_positive_integers() {
    // Γ(n) = (n-1)!
    approx_eq(gamma(2.0_f64).unwrap(), 1.0, 1e-2);
    approx_eq(gamma(3.0_f64).unwrap(), 2.0, 1e-2);
    approx_eq(gamma(5.0_f64).unwrap(), 24.0, 1e-3);
    approx_eq(gamma(10.0_f64).unwrap(), 362880.0, 1e-2);
}

#[test]
fn gamma_half() {
    let sqrt_pi = core::f64::consts::PI.sqrt();
    let g = gamma(0.5_f64).unwrap();
    assert!(((g - sqrt_pi) / sqrt_pi).abs() < 1e-2);
    // Γ(1.5) = √π/2
    approx_eq(gamma(1.5_f64).unwrap(), sqrt_pi / 2.0, 1e-2);
}

#[test]
fn gamma_domain_errors() {
    assert_eq!(gamma(0.0_f64), Err(SpecialError::DomainError));
    assert_eq!(gamma(-0.5_f64), Err(SpecialError::DomainError));
    assert_eq!(gamma(-2.0_f64), Err(SpecialError::DomainError));
    assert_eq!(gamma(f64::NAN), Err(SpecialError::DomainError));
    assert_eq!(gamma([1.0_f64, 0.0]), Err(SpecialError::DomainError));
}

#[test]
fn gamma_invalid_settings() {
    let zero_intervals = GammaSettings {
        upper_limit: 100.0_f64,
        intervals: 0,
    };
    assert_eq!(gamma_with(2.0_f64, &zero_intervals), Err(SpecialError::InvalidParameter));

    let bad_limit = GammaSettings {
        upper_limit: -1.0_f64,
        intervals: 100,
    };
    assert_eq!(gamma_with(2.0_f64, &bad_limit), Err(SpecialError::InvalidParameter));

    let inf_limit = GammaSettings {
        upper_limit: f64::INFINITY,
        intervals: 100,
    };
    assert_eq!(gamma_with(2.0_f64, &inf_limit), Err(SpecialError::InvalidParameter));
}

#[test]
fn gamma_sub_one_uses_functional_equation() {
    for &z in &[0.1_f64, 0.3, 0.5, 0.9] {
        let lhs = gamma(z).unwrap();
        let rhs = gamma(z + 1.0).unwrap() / z;
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn gamma_recurrence_identity() {
    // z·Γ(z) = Γ(z+1) holds to integration accuracy above 1
    for &z in &[1.7_f64, 3.14, 5.5] {
        let lhs = z * gamma_with(z, &fine_gamma()).unwrap();
        let rhs = gamma_with(z + 1.0, &fine_gamma()).unwrap();
        approx_eq(lhs / rhs, 1.0, 1e-4);
    }
}

#[test]
fn gamma_finer_grid_is_more_accurate() {
    let coarse = (gamma(2.0_f64).unwrap() - 1.0).abs();
    let fine = (gamma_with(2.0_f64, &fine_gamma()).unwrap() - 1.0).abs();
    assert!(fine < coarse);
    approx_eq(gamma_with(2.5_f64, &fine_gamma()).unwrap(), 1.329340388179137, 1e-5);
}

#[test]
fn gamma_array_matches_scalar() {
    let zs = [0.25_f64, 1.0, 2.0, 3.5];
    let gs = gamma(zs).unwrap();
    for i in 0..zs.len() {
        assert_eq!(gs[i], gamma(zs[i]).unwrap());
    }
    let g = gamma([1.0_f64, 2.0]).unwrap();
    approx_eq(g[0], 1.0, 1e-2);
    approx_eq(g[1], 1.0, 1e-2);
}

#[test]
fn gamma_f32() {
    approx_eq_f32(gamma(5.0_f32).unwrap(), 24.0, 1e-2);
    approx_eq_f32(gamma(2.0_f32).unwrap(), 1.0, 1e-2);
}

// =====================================================================
// bessel
// =====================================================================

#[test]
fn bessel_origin() {
    assert_eq!(bessel(0.0, 0.0_f64), Ok(1.0));
    // J_α(0) = 0 for α > 0
    assert_eq!(bessel(1.0, 0.0_f64), Ok(0.0));
    assert_eq!(bessel(2.0, 0.0_f64), Ok(0.0));
}

#[test]
fn bessel_j0_known_values() {
    approx_eq(bessel(0.0, 1.0_f64).unwrap(), 0.7651976865579666, 1e-2);
    approx_eq(bessel(0.0, 1.0_f64).unwrap(), 0.7651976865579666, 1e-9);
    approx_eq(bessel(0.0, 2.0_f64).unwrap(), 0.22389077914123567, 1e-9);
    approx_eq(bessel(0.0, 5.0_f64).unwrap(), -0.17759677131433830, 1e-8);
}

#[test]
fn bessel_j0_even() {
    for &x in &[0.5_f64, 1.0, 3.0] {
        assert_eq!(bessel(0.0, -x).unwrap(), bessel(0.0, x).unwrap());
    }
}

#[test]
fn bessel_higher_orders() {
    let settings = BesselSettings {
        gamma: fine_gamma(),
        ..BesselSettings::default()
    };
    approx_eq(bessel_with(1.0, 1.0_f64, &settings).unwrap(), 0.44005058574493355, 1e-6);
    approx_eq(bessel_with(2.0, 2.0_f64, &settings).unwrap(), 0.35283402861563773, 1e-6);
    // J_{1/2}(x) = √(2/(πx)) sin x
    let x = 1.2_f64;
    let expected = (2.0 / (core::f64::consts::PI * x)).sqrt() * x.sin();
    approx_eq(bessel_with(0.5, x, &settings).unwrap(), expected, 1e-4);
}

#[test]
fn bessel_default_orders_within_gamma_accuracy() {
    // Γ(α+1) from the default grid is accurate to about 1e-3
    approx_eq(bessel(1.0, 1.0_f64).unwrap(), 0.44005058574493355, 1e-3);
}

#[test]
fn bessel_negative_integer_order_fails() {
    assert_eq!(bessel(-1.0, 1.0_f64), Err(SpecialError::DomainError));
    assert_eq!(bessel(-2.0, [1.0_f64, 2.0]), Err(SpecialError::DomainError));
}

#[test]
fn bessel_zero_argument_negative_order_degenerates() {
    let j = bessel(-0.5, 0.0_f64).unwrap();
    assert!(!j.is_finite());
}

#[test]
fn bessel_array_matches_scalar() {
    let xs = vec![0.0_f64, 0.5, 1.0, 4.0];
    let js = bessel(0.0, xs.clone()).unwrap();
    assert_eq!(js.len(), xs.len());
    for i in 0..xs.len() {
        assert_eq!(js[i], bessel(0.0, xs[i]).unwrap());
    }
}

#[test]
fn bessel_more_terms_reach_larger_x() {
    let settings = BesselSettings {
        n_terms: 60,
        ..BesselSettings::default()
    };
    approx_eq(bessel_with(0.0, 10.0_f64, &settings).unwrap(), -0.2459357644513483, 1e-8);
}

#[test]
fn bessel_f32() {
    approx_eq_f32(bessel(0.0, 1.0_f32).unwrap(), 0.765_197_7, 1e-6);
}

#[test]
fn error_display() {
    assert_eq!(SpecialError::DomainError.to_string(), "input outside function domain");
    assert_eq!(SpecialError::Overflow.to_string(), "result overflows the integer type");
}
