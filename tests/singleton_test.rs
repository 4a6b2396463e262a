use odin_binder::{ExternalLogger, LoggerBinder, REQUESTED_API_VERSION};
use std::thread;

#[test]
fn test_get_instance_twice_returns_same_object() {
    let first = LoggerBinder::singleton();
    let second = LoggerBinder::singleton();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_version_string_is_fixed() {
    for _ in 0..3 {
        assert_eq!(REQUESTED_API_VERSION, "1.7");
        assert_eq!(LoggerBinder::singleton().requested_api_version(), "1.7");
    }
}

#[test]
fn test_singleton_is_shared_across_threads() {
    let main_addr = LoggerBinder::singleton() as *const LoggerBinder as usize;

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| LoggerBinder::singleton() as *const LoggerBinder as usize))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), main_addr);
    }
}

#[test]
fn test_default_singleton_routes_to_tracing() {
    let binder = LoggerBinder::singleton();
    assert!(binder.logger_factory_name().ends_with("TracingLoggerFactory"));
    assert!(binder.check_facade_compatibility().is_ok());
}
