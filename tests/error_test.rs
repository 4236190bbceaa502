use std::io;

use stamp::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::InvalidTypeSpec {
        name: "Vector2".to_string(),
        reason: "component list is empty".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid type spec 'Vector2': component list is empty.");

    let err = Error::InvalidPattern { pattern: "[a".to_string(), reason: "unclosed".to_string() };
    assert_eq!(err.to_string(), "Invalid exclusion pattern '[a': unclosed.");
}

#[test]
fn test_filesystem_error_names_path() {
    let err = Error::filesystem(
        "/no/such/root",
        io::Error::new(io::ErrorKind::NotFound, "not found"),
    );
    assert!(err.to_string().contains("/no/such/root"));
    assert!(matches!(err, Error::FilesystemError { .. }));
}
