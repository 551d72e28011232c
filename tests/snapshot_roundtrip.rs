use lockstep_math::fixed_math::Fixed;
use lockstep_math::snapshot::{checksum, load_trace, save_trace, Trace, TRACE_VERSION};

fn temp_path(name: &str) -> String {
    let dir = std::env::temp_dir().join("lockstep_math_tests");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name).to_string_lossy().to_string()
}

#[test]
fn test_save_and_load_trace() {
    let mut rng = fastrand::Rng::with_seed(55);
    let values: Vec<Fixed> = (0..1_000).map(|_| Fixed::from_raw(rng.i64(..))).collect();
    let trace = Trace::new("roundtrip", values);

    let path = temp_path("roundtrip.bin");
    save_trace(&path, &trace).unwrap();
    let loaded = load_trace(&path).unwrap();

    assert_eq!(loaded, trace);
    assert_eq!(loaded.checksum(), checksum(&trace.values));
}

#[test]
fn test_version_mismatch_is_rejected() {
    let mut trace = Trace::new("old", vec![Fixed::ONE]);
    trace.version = TRACE_VERSION + 1;

    let path = temp_path("old_version.bin");
    save_trace(&path, &trace).unwrap();
    let err = load_trace(&path).unwrap_err();
    assert!(err.to_string().contains("version"), "{}", err);
}

#[test]
fn test_missing_or_corrupt_files() {
    assert!(load_trace(&temp_path("missing.bin")).is_err());

    let path = temp_path("corrupt.bin");
    std::fs::write(&path, b"not a zlib stream").unwrap();
    assert!(load_trace(&path).is_err());
}
