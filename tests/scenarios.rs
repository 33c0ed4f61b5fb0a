use approx::assert_relative_eq;
use quat_utils::{Complex64, Operand, Quaternion, QuaternionError, Real};

fn q() -> Quaternion {
    Quaternion::new(1, 2, 3, 4)
}

fn r() -> Quaternion {
    Quaternion::new(5, 6, 7, 8)
}

#[test]
fn component_access() {
    let q = q();
    assert_eq!(q[0], 1);
    assert_eq!(q[2..], [Real::Int(3), Real::Int(4)]);
    assert_eq!(q.vector(), (Real::Int(2), Real::Int(3), Real::Int(4)));
    assert_eq!(
        q.complex_pair(),
        (Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0))
    );
    assert_eq!(q.get(4), Err(QuaternionError::IndexOutOfRange { index: 4 }));
}

#[test]
fn integer_arithmetic_prints_integers() {
    let (q, r) = (q(), r());
    assert_eq!(q.to_string(), "(1+2i+3j+4k)");
    assert_eq!((-q).to_string(), "(-1-2i-3j-4k)");
    assert_eq!((q + r).to_string(), "(6+8i+10j+12k)");
    assert_eq!((q - 1).to_string(), "(0+2i+3j+4k)");
    assert_eq!((7 * q).to_string(), "(7+14i+21j+28k)");
    assert_eq!((q * r).to_string(), "(-60+12i+30j+24k)");
    assert_eq!((r * q).to_string(), "(-60+20i+14j+32k)");
}

#[test]
fn division_and_complex_operands_promote_to_float() {
    let q = q();
    assert_eq!((30 / q).to_string(), "(1.0-2.0i-3.0j-4.0k)");
    assert_eq!(
        (q - Complex64::new(1.0, 2.0)).to_string(),
        "(0.0+0.0i+3j+4k)"
    );
    assert_eq!(
        (q / r()).to_string(),
        "(0.4022988505747126+0.04597701149425287i+0.0j+0.09195402298850575k)"
    );
}

#[test]
fn scalar_equality() {
    assert_eq!(Quaternion::new(17, 0, 0, 0), 17);
    assert_eq!(17.0, Quaternion::new(17, 0, 0, 0));
    assert_ne!(q(), r());
}

#[test]
fn powers_and_norm() {
    let q = q();
    assert_eq!(q.powi(3).to_string(), "(-86-52i-78j-104k)");
    assert_eq!(q.abs(), 30f64.sqrt());
    assert_eq!(q.abs(), 5.477225575051661);
    assert_eq!(q.abs(), q.conjugate().abs());
}

#[test]
fn multiplication_is_not_commutative() {
    assert_ne!(Quaternion::I * Quaternion::J, Quaternion::J * Quaternion::I);
    assert_eq!(Quaternion::I * Quaternion::J, Quaternion::K);
}

#[test]
fn inverse_is_a_two_sided_identity() {
    let q = q();
    assert_relative_eq!(q * q.inverse(), Quaternion::ONE, epsilon = 1e-12);
    assert_relative_eq!(q.inverse() * q, Quaternion::ONE, epsilon = 1e-12);
    assert_eq!(
        Quaternion::ZERO.checked_inverse(),
        Err(QuaternionError::ZeroDivision)
    );
}

#[test]
fn matrix_layout() {
    let m = q().matrix();
    assert_eq!(m[0], [Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)]);
    assert_eq!(m[1], [Complex64::new(-3.0, 4.0), Complex64::new(1.0, -2.0)]);
}

#[test]
fn literals_round_trip_through_display() {
    for q in [q(), -r(), q().inverse(), Quaternion::new(1e16, 1e-5, 0.1, -2.5)] {
        let parsed: Quaternion = q.to_string().parse().unwrap();
        assert_eq!(parsed.to_string(), q.to_string());
    }
}

#[test]
fn runtime_operands_coerce_like_operators() {
    let operands: [Operand; 3] = [
        "17".parse().unwrap(),
        "1+2i".parse().unwrap(),
        "(1+2i+3j+4k)".parse().unwrap(),
    ];
    let kinds: Vec<_> = operands.iter().map(Operand::kind).collect();
    assert_eq!(kinds, ["integer", "complex", "quaternion"]);
    assert_eq!(q() - Quaternion::from(operands[1]), q() - Complex64::new(1.0, 2.0));
    assert!(matches!(
        "banana".parse::<Operand>(),
        Err(QuaternionError::UnsupportedOperand { .. })
    ));
}
