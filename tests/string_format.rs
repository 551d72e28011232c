use lockstep_math::fixed_math::{Fixed, FixedError, FixedVec3};

#[test]
fn test_parse_and_format_scenarios() {
    let value = Fixed::from_str_exact("5.1").unwrap();
    assert!((value.to_f64() - 5.1).abs() < 1e-4, "{}", value);

    let almost_one = Fixed::ONE - Fixed::from_str_exact("0.01").unwrap();
    assert_eq!(almost_one.raw(), 64_881);
    assert_eq!(format!("{:.4}", almost_one), "0.9900");
    assert_eq!(almost_one.to_string(), "0.99001");
}

#[test]
fn test_parse_edge_inputs() {
    assert_eq!(Fixed::from_str_exact(""), Ok(Fixed::ZERO));
    assert_eq!(Fixed::from_str_exact("-"), Ok(Fixed::ZERO));
    assert_eq!(Fixed::from_str_exact("."), Ok(Fixed::ZERO));
    assert_eq!(Fixed::from_str_exact("5."), Ok(Fixed::FIVE));
    assert_eq!(Fixed::from_str_exact(".5"), Ok(Fixed::HALF));
    assert_eq!(Fixed::from_str_exact("-0.5"), Ok(-Fixed::HALF));
    assert_eq!("-12.25".parse::<Fixed>(), Ok(Fixed::from_raw(-(12 * 65_536 + 16_384))));
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Fixed::from_str_exact("1e5"),
        Err(FixedError::InvalidDigit { ch: 'e', position: 1 })
    );
    assert_eq!(
        Fixed::from_str_exact("1.2.3"),
        Err(FixedError::InvalidDigit { ch: '.', position: 3 })
    );
    assert_eq!(
        Fixed::from_str_exact("99999999999999999999"),
        Err(FixedError::IntegerOverflow)
    );
    assert!(matches!(Fixed::from_str_unsafe("abc"), Err(FixedError::InvalidFloat(_))));
}

#[test]
fn test_four_digit_strings_round_trip_exactly() {
    let mut rng = fastrand::Rng::with_seed(2024);
    for _ in 0..2_000 {
        let integer = rng.i32(-30_000..30_000);
        let fraction = rng.u32(0..10_000);
        let text = format!("{}.{:04}", integer, fraction);
        let value = Fixed::from_str_exact(&text).unwrap();
        let expected: f64 = text.parse().unwrap();
        assert_eq!(format!("{:.4}", value).parse::<f64>().unwrap(), expected, "{}", text);
    }
}

#[test]
fn test_display_reparses_within_one_ulp() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..5_000 {
        let value = Fixed::from_raw(rng.i64(Fixed::USABLE_MIN.raw()..=Fixed::USABLE_MAX.raw()));
        let parsed = Fixed::from_str_exact(&value.to_string()).unwrap();
        assert!((parsed.raw() - value.raw()).abs() <= 1, "{} -> {}", value.raw(), parsed.raw());
    }
}

#[test]
fn test_serde_uses_raw_bits() {
    let value = Fixed::from_raw(-123_456);
    assert_eq!(serde_json::to_string(&value).unwrap(), "-123456");
    assert_eq!(serde_json::from_str::<Fixed>("-123456").unwrap(), value);

    let bytes = bincode::serialize(&value).unwrap();
    assert_eq!(bytes, value.to_le_bytes().to_vec());
    assert_eq!(Fixed::from_le_bytes(value.to_le_bytes()), value);

    let v = FixedVec3::from_ints(1, 2, 3);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"x":65536,"y":131072,"z":196608}"#);
    assert_eq!(v.to_string(), "(1.00000, 2.00000, 3.00000)");
}
