use shoplist_core::{
    ConfigError, DispatchError, EmptyNamePolicy, Intent, ListSession, SeedItem, SessionConfig,
};

#[test]
fn json_config_seeds_session_and_modifiers() {
    let session = ListSession::from_json_config(
        r#"{
            "seed": [
                {"name": "tea", "checked": true},
                {"name": "toast"}
            ],
            "hide_checked": true,
            "empty_names": "accept"
        }"#,
    )
    .unwrap();

    assert_eq!(session.state().len(), 2);
    assert!(session.state().hide_checked());
    assert_eq!(session.empty_names(), EmptyNamePolicy::Accept);

    let view = session.current_view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].name, "toast");
    assert_eq!(view.rows[0].canonical_index, 1);
}

#[test]
fn default_session_rejects_empty_names() {
    let mut session = ListSession::from_config(&SessionConfig::default()).unwrap();
    let err = session
        .dispatch(Intent::AddItem {
            name: "\t".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, DispatchError::InvalidName(_)));
    assert_eq!(session.state().len(), 4);
}

#[test]
fn initial_search_term_is_applied() {
    let config = SessionConfig {
        search_term: "an".to_string(),
        ..SessionConfig::default()
    };
    let session = ListSession::from_config(&config).unwrap();

    let names: Vec<_> = session
        .current_view()
        .rows
        .into_iter()
        .map(|row| row.name)
        .collect();
    assert_eq!(names, vec!["oranges"]);
}

#[test]
fn malformed_config_is_rejected() {
    assert!(ListSession::from_json_config("{ not json").is_err());
    assert!(ListSession::from_json_config(r#"{"empty_names":"maybe"}"#).is_err());
}

#[test]
fn struct_config_with_blank_seed_name_is_rejected() {
    let config = SessionConfig {
        seed: vec![
            SeedItem {
                name: "tea".to_string(),
                checked: false,
            },
            SeedItem {
                name: "  ".to_string(),
                checked: true,
            },
        ],
        ..SessionConfig::default()
    };
    assert!(config.validate().is_err());

    let err = ListSession::from_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::BlankSeedName { index: 1 }));
}
