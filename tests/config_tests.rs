use std::env;
use std::sync::Mutex;
use world_time_service::config::{Config, DEFAULT_TIME_API_BASE_URL};

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TIME_API_BASE_URL", "http://localhost:8000/api/timezone");
    env::set_var("FETCH_TIMEOUT_SECS", "3");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.time_api_base_url, "http://localhost:8000/api/timezone");
    assert_eq!(config.fetch_timeout_secs, 3);
    assert_eq!(config.http_port, 8080);

    // Clean up
    env::remove_var("TIME_API_BASE_URL");
    env::remove_var("FETCH_TIMEOUT_SECS");
    env::remove_var("HTTP_PORT");
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::remove_var("TIME_API_BASE_URL");
    env::remove_var("FETCH_TIMEOUT_SECS");
    env::remove_var("HTTP_PORT");

    let config = Config::from_env().unwrap();

    assert_eq!(config.time_api_base_url, DEFAULT_TIME_API_BASE_URL);
    assert_eq!(config.fetch_timeout_secs, 10);
    assert_eq!(config.http_port, 3000);
}

#[test]
fn test_config_invalid_timeout() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("FETCH_TIMEOUT_SECS", "not_a_number");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid FETCH_TIMEOUT_SECS"));

    // Clean up
    env::remove_var("FETCH_TIMEOUT_SECS");
}

#[test]
fn test_config_zero_timeout_rejected() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("FETCH_TIMEOUT_SECS", "0");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("FETCH_TIMEOUT_SECS must be at least 1"));

    // Clean up
    env::remove_var("FETCH_TIMEOUT_SECS");
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    // Clean up
    env::remove_var("HTTP_PORT");
}

#[test]
fn test_config_empty_base_url_uses_default() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TIME_API_BASE_URL", "   ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.time_api_base_url, DEFAULT_TIME_API_BASE_URL);

    // Clean up
    env::remove_var("TIME_API_BASE_URL");
}

#[test]
fn test_config_trims_trailing_slash() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("TIME_API_BASE_URL", "http://localhost:8000/api/timezone/");

    let config = Config::from_env().unwrap();
    assert_eq!(config.time_api_base_url, "http://localhost:8000/api/timezone");

    // Clean up
    env::remove_var("TIME_API_BASE_URL");
}

#[test]
fn test_config_whitespace_handling() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("FETCH_TIMEOUT_SECS", "  10  ");
    env::set_var("HTTP_PORT", "  3000  ");

    let config = Config::from_env().unwrap();

    assert_eq!(config.fetch_timeout_secs, 10);
    assert_eq!(config.http_port, 3000);

    // Clean up
    env::remove_var("FETCH_TIMEOUT_SECS");
    env::remove_var("HTTP_PORT");
}
