use super::*;

#[test]
fn test_padding_messages() {
    assert_eq!(Error::incomplete_padding().to_string(), "incomplete padding");
    assert_eq!(Error::invalid_padding().to_string(), "invalid padding");
    assert!(Error::invalid_padding().is_padding());
    assert!(!Error::config("x", "y").is_padding());
}

#[test]
fn test_validation_functions() {
    // Parameter validation
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();

    match err {
        Error::Config { context, message } => {
            assert_eq!(context, "test");
            assert_eq!(message, "should fail");
        }
        _ => panic!("Expected Config error"),
    }

    // Block size range
    assert!(validate::block_size("padding", 1, 1, 255).is_ok());
    assert!(validate::block_size("padding", 255, 1, 255).is_ok());
    assert!(matches!(
        validate::block_size("padding", 0, 1, 255),
        Err(Error::Config { .. })
    ));
    assert!(matches!(
        validate::block_size("padding", 256, 1, 255),
        Err(Error::Config { .. })
    ));

    // Streamed totals
    assert!(validate::max_total("unpadder", 32, 32).is_ok());
    let err = validate::max_total("unpadder", 33, 32).unwrap_err();
    assert_eq!(err.to_string(), "unpadder: too much data");

    assert!(validate::block_multiple("unpadder", 32, 16).is_ok());
    assert!(matches!(
        validate::block_multiple("unpadder", 17, 16),
        Err(Error::Size { .. })
    ));

    assert!(matches!(
        validate::not_finalized(true, "padder update"),
        Err(Error::State { .. })
    ));
}

#[test]
fn test_backend_err_keeps_message() {
    let r: core::result::Result<(), &str> = Err("Invalid Length");
    let err = r.backend_err("AES key").unwrap_err();
    assert_eq!(err.to_string(), "AES key: Invalid Length");
}

#[test]
fn test_io_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io(_)));
}
