use lockstep_math::fixed_math::{Fixed, FixedQuat, FixedVec2, FixedVec3, FixedVec4};

#[test]
fn test_dot_and_magnitude() {
    let v = FixedVec3::from_ints(5, 0, 0);
    assert_eq!(v.dot(v), Fixed::from_int(25));
    assert_eq!(v.magnitude(), Fixed::FIVE);
    assert_eq!(FixedVec2::from_ints(3, 4).magnitude(), Fixed::FIVE);
    assert_eq!(FixedVec4::ONE.magnitude_sqr(), Fixed::FOUR);
    assert_eq!(v.distance(FixedVec3::ZERO), Fixed::FIVE);
}

#[test]
fn test_normalize_is_unit_or_zero() {
    let mut rng = fastrand::Rng::with_seed(8);
    for _ in 0..2_000 {
        let v = FixedVec3::new(
            Fixed::from_raw(rng.i64(-(100 << 16)..=(100 << 16))),
            Fixed::from_raw(rng.i64(-(100 << 16)..=(100 << 16))),
            Fixed::from_raw(rng.i64(-(100 << 16)..=(100 << 16))),
        );
        let n = v.normalize();
        if n != FixedVec3::ZERO {
            assert!((n.magnitude() - Fixed::ONE).abs() < Fixed::P0_02, "{} -> {}", v, n);
        }
    }
    assert_eq!(FixedVec3::ZERO.normalize(), FixedVec3::ZERO);
    assert_eq!(FixedVec2::new(Fixed::EPSILON, Fixed::ZERO).normalize(), FixedVec2::ZERO);
}

#[test]
fn test_component_wise_operators() {
    let a = FixedVec3::from_ints(2, 4, 6);
    let b = FixedVec3::from_ints(1, 2, 3);
    assert_eq!(a + b, FixedVec3::from_ints(3, 6, 9));
    assert_eq!(a - b, b);
    assert_eq!(a * b, FixedVec3::from_ints(2, 8, 18));
    assert_eq!(a / b, FixedVec3::splat(Fixed::TWO));
    assert_eq!(a * Fixed::HALF, b);
    assert_eq!(Fixed::TWO * b, a);
    assert_eq!(a / Fixed::TWO, b);
    assert_eq!(-a, FixedVec3::from_ints(-2, -4, -6));
    let mut c = a;
    c -= b;
    c *= Fixed::TWO;
    assert_eq!(c, a);
}

#[test]
fn test_magnitude_clamp_and_set() {
    let v = FixedVec2::from_ints(30, 40);
    let clamped = v.magnitude_clamp(Fixed::FIVE);
    assert!((clamped - FixedVec2::from_ints(3, 4)).magnitude() < Fixed::P0_01, "{}", clamped);
    assert_eq!(v.magnitude_clamp(Fixed::HUNDRED), v);
    let stretched = FixedVec2::from_ints(3, 4).magnitude_set(Fixed::TEN);
    assert!((stretched - FixedVec2::from_ints(6, 8)).magnitude() < Fixed::P0_01, "{}", stretched);
}

#[test]
fn test_lerp_clamps_t() {
    let a = FixedVec2::ZERO;
    let b = FixedVec2::from_ints(10, -10);
    assert_eq!(a.lerp(b, Fixed::HALF), FixedVec2::from_ints(5, -5));
    assert_eq!(a.lerp(b, Fixed::TWO), b);
    assert_eq!(a.lerp_unclamped(b, Fixed::TWO), FixedVec2::from_ints(20, -20));
}

#[test]
fn test_quaternion_round_trip() {
    let euler = FixedVec3::from_ints(10, 20, 30);
    let q = FixedQuat::from_euler_angles(euler);
    let back = q.euler_angles();
    assert!((back - euler).abs().to_array().iter().all(|d| *d < Fixed::P0_05), "{}", back);
    assert!(q.approx_eq(q.normalize()));
    let angle = q.angle(FixedQuat::IDENTITY);
    assert!((angle.to_f64() - 35.82).abs() < 0.05, "{}", angle);
}

#[test]
fn test_quaternion_rotates_vectors() {
    let euler = FixedVec3::new(Fixed::ZERO, Fixed::ZERO, Fixed::from_int(90));
    let yaw = FixedQuat::from_euler_angles(euler);
    let rotated = yaw * FixedVec3::RIGHT;
    assert!((rotated - FixedVec3::UP).magnitude() < Fixed::P0_01, "{}", rotated);
    assert_eq!(FixedQuat::IDENTITY * FixedVec3::from_ints(1, 2, 3), FixedVec3::from_ints(1, 2, 3));
    assert_eq!(FixedQuat::look_rotation(FixedVec3::FORWARD, FixedVec3::UP), FixedQuat::IDENTITY);
    assert_eq!(FixedQuat::IDENTITY.get(4), None);
}
