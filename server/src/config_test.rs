use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_env() {
    unsafe {
        for key in [
            "PORT",
            "TRUST_PROXY",
            "GEMINI_API_KEY",
            "AI_MODEL",
            "AI_BASE_URL",
            "AI_TEMPERATURE",
            "AI_REQUEST_TIMEOUT_SECS",
            "AI_CONNECT_TIMEOUT_SECS",
            "AI_RATE_LIMIT_PER_CLIENT",
            "AI_RATE_LIMIT_GLOBAL",
            "AI_RATE_LIMIT_WINDOW_SECS",
        ] {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn from_env_uses_defaults_when_unset() {
    unsafe { clear_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(!cfg.trust_proxy);
    assert_eq!(cfg.ai.api_key, None);
    assert_eq!(cfg.ai.model, DEFAULT_AI_MODEL);
    assert_eq!(cfg.ai.base_url, DEFAULT_AI_BASE_URL);
    assert!((cfg.ai.temperature - DEFAULT_AI_TEMPERATURE).abs() < f32::EPSILON);
    assert_eq!(
        cfg.ai.timeouts,
        AiTimeouts { request_secs: DEFAULT_AI_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_AI_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.rate_limit, RateLimitConfig::default());
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("TRUST_PROXY", "true");
        std::env::set_var("GEMINI_API_KEY", "  key-123 ");
        std::env::set_var("AI_MODEL", "gemini-test");
        std::env::set_var("AI_BASE_URL", "https://example.test/v1/");
        std::env::set_var("AI_TEMPERATURE", "0.2");
        std::env::set_var("AI_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("AI_RATE_LIMIT_PER_CLIENT", "3");
        std::env::set_var("AI_RATE_LIMIT_GLOBAL", "9");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert!(cfg.trust_proxy);
    assert_eq!(cfg.ai.api_key.as_deref(), Some("key-123"));
    assert_eq!(cfg.ai.model, "gemini-test");
    assert_eq!(cfg.ai.base_url, "https://example.test/v1");
    assert_eq!(cfg.ai.timeouts.request_secs, 5);
    assert_eq!(cfg.rate_limit.per_client_limit, 3);
    assert_eq!(cfg.rate_limit.global_limit, 9);

    unsafe { clear_env() };
}

#[test]
fn blank_key_counts_as_missing() {
    unsafe {
        clear_env();
        std::env::set_var("GEMINI_API_KEY", "   ");
    }
    assert_eq!(AiConfig::from_env().unwrap().api_key, None);
    unsafe { clear_env() };
}

#[test]
fn malformed_values_are_rejected() {
    unsafe {
        clear_env();
        std::env::set_var("PORT", "eighty");
    }
    assert_eq!(ServerConfig::from_env(), Err(ConfigError::Invalid { var: "PORT", value: "eighty".into() }));

    unsafe {
        clear_env();
        std::env::set_var("AI_TEMPERATURE", "5");
    }
    assert!(matches!(AiConfig::from_env(), Err(ConfigError::Invalid { var: "AI_TEMPERATURE", .. })));

    unsafe { clear_env() };
}
