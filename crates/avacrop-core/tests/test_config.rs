use avacrop_core::config::CropConfig;

#[test]
fn test_defaults() {
    let config = CropConfig::default();
    assert_eq!(config.viewport_size, 180);
    assert_eq!(config.export_size, 512);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_roundtrip() {
    let config = CropConfig {
        viewport_size: 240,
        export_size: 1024,
    };
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: CropConfig = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_missing_fields_take_defaults() {
    let parsed: CropConfig = toml::from_str("").unwrap();
    assert_eq!(parsed, CropConfig::default());

    let parsed: CropConfig = toml::from_str("viewport_size = 90\n").unwrap();
    assert_eq!(parsed.viewport_size, 90);
    assert_eq!(parsed.export_size, 512);
}

#[test]
fn test_validate_rejects_zero_sizes() {
    let config = CropConfig {
        viewport_size: 0,
        export_size: 512,
    };
    assert!(config.validate().is_err());

    let config = CropConfig {
        viewport_size: 180,
        export_size: 0,
    };
    assert!(config.validate().is_err());
}
