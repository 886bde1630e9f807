use stringz_core::config::OVERRIDE_KEYS;
use stringz_core::constants::*;
use stringz_core::{ConfigError, SceneConfig};

#[test]
fn defaults_match_constants_and_validate() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.spawn_interval_ms, SPAWN_INTERVAL_MS);
    assert_eq!(cfg.glow_interval_ms, GLOW_INTERVAL_MS);
    assert_eq!(cfg.max_guitars, MAX_GUITARS);
    assert_eq!(cfg.max_notes, MAX_NOTES);
    assert_eq!(cfg.max_stickmen, MAX_STICKMEN);
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn rejects_bad_intervals() {
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let cfg = SceneConfig {
            spawn_interval_ms: bad,
            ..SceneConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Interval {
                name: "spawn_interval_ms",
                ..
            })
        ));
    }
    let cfg = SceneConfig {
        glow_interval_ms: -1.0,
        ..SceneConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("glow_interval_ms"));
}

#[test]
fn rejects_zero_caps() {
    let cfg = SceneConfig {
        max_notes: 0,
        ..SceneConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::Cap { name: "max_notes" }));
    assert_eq!(
        cfg.validate().unwrap_err().to_string(),
        "max_notes must be at least 1"
    );
}

#[test]
fn overrides_parse_each_key() {
    let mut cfg = SceneConfig::default();
    cfg.apply_override("spawn-interval-ms", "1500").unwrap();
    cfg.apply_override("glow-interval-ms", " 4000.5 ").unwrap();
    cfg.apply_override("max-guitars", "10").unwrap();
    cfg.apply_override("max-notes", "100").unwrap();
    cfg.apply_override("max-stickmen", "5").unwrap();
    assert_eq!(
        cfg,
        SceneConfig {
            spawn_interval_ms: 1500.0,
            glow_interval_ms: 4000.5,
            max_guitars: 10,
            max_notes: 100,
            max_stickmen: 5,
        }
    );

    let mut probe = SceneConfig::default();
    for key in OVERRIDE_KEYS {
        assert!(probe.apply_override(key, "7").is_ok(), "key {key}");
    }
}

#[test]
fn overrides_report_bad_input() {
    let mut cfg = SceneConfig::default();
    assert_eq!(
        cfg.apply_override("max-guitars", "lots"),
        Err(ConfigError::Parse {
            key: "max-guitars".into(),
            value: "lots".into()
        })
    );
    assert_eq!(
        cfg.apply_override("tempo", "120"),
        Err(ConfigError::UnknownKey("tempo".into()))
    );
    // failed overrides leave the config untouched
    assert_eq!(cfg, SceneConfig::default());
}

#[test]
fn parsed_but_invalid_override_fails_validation() {
    let mut cfg = SceneConfig::default();
    cfg.apply_override("spawn-interval-ms", "0").unwrap();
    assert!(cfg.validate().is_err());
}
