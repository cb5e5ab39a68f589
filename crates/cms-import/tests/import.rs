use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use cms_import::{ImportError, ImportOptions, MemoryRepository, delete_all_of_type, run_import};
use cms_ingest::IngestError;
use cms_model::{
    ContentTypeSchema, EditorConfig, FieldBinding, FieldValue, ImportRequest, Language,
    PropertyGroupSchema, PropertySchema, RowStatus, TITLE_ALIAS,
};
use cms_schema::EditorRegistry;

const ARTICLE_TYPE_ID: i64 = 1064;
const PARENT_ID: i64 = 1063;
const PICKER_DATA_TYPE_ID: i64 = 42;

fn property(alias: &str, editor_alias: &str, varies: bool, sort_order: i32) -> PropertySchema {
    PropertySchema {
        alias: alias.to_string(),
        name: alias.to_string(),
        sort_order,
        varies_by_culture: varies,
        editor_alias: editor_alias.to_string(),
        data_type_id: if editor_alias.contains("picker") && !editor_alias.contains("color") {
            Some(PICKER_DATA_TYPE_ID)
        } else {
            None
        },
    }
}

fn article_schema(varies_by_culture: bool) -> ContentTypeSchema {
    ContentTypeSchema {
        id: ARTICLE_TYPE_ID,
        alias: "article".to_string(),
        name: "Article".to_string(),
        varies_by_culture,
        groups: vec![
            PropertyGroupSchema {
                name: "Content".to_string(),
                sort_order: 1,
                properties: vec![
                    property("heading", "vendor.textbox", varies_by_culture, 1),
                    property("themeColor", "cms.color-picker", false, 2),
                    property("featured", "cms.toggle", false, 3),
                    property("tags", "cms.checkbox-list", false, 4),
                    property("related", "cms.content-picker", false, 5),
                ],
            },
            PropertyGroupSchema {
                name: "Location".to_string(),
                sort_order: 2,
                properties: vec![property("venue", "cms.map-point", false, 1)],
            },
        ],
    }
}

fn repository(varies_by_culture: bool) -> MemoryRepository {
    MemoryRepository::default()
        .with_content_type(article_schema(varies_by_culture))
        .with_language(Language {
            tag: "en-US".to_string(),
            name: "English (United States)".to_string(),
            is_default: true,
        })
        .with_language(Language {
            tag: "da-DK".to_string(),
            name: "Danish".to_string(),
            is_default: false,
        })
}

fn binding(alias: &str, header: &str) -> FieldBinding {
    FieldBinding {
        alias: alias.to_string(),
        header: header.to_string(),
    }
}

fn request(fields: Vec<FieldBinding>) -> ImportRequest {
    ImportRequest {
        parent_id: PARENT_ID,
        content_type_id: ARTICLE_TYPE_ID,
        fields,
    }
}

#[test]
fn three_row_import_creates_records_with_stripped_colors() {
    let mut repo = repository(false);
    let registry = EditorRegistry::builtin();
    let csv = b"Name,Color\nFirst,#ff0000\n,#00ff00\nThird,0000ff\n";
    let request = request(vec![
        binding(TITLE_ALIAS, "Name"),
        binding("themeColor", "Color"),
    ]);

    let outcomes = run_import(
        &mut repo,
        &registry,
        &request,
        &csv[..],
        &ImportOptions::default(),
    )
    .expect("run import");

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|outcome| !outcome.is_failed()));
    assert_eq!(repo.records().len(), 3);

    let colors: Vec<&FieldValue> = repo
        .records()
        .iter()
        .map(|record| record.value_of("themeColor", None).expect("color value"))
        .collect();
    assert_eq!(
        colors,
        [
            &FieldValue::from("ff0000"),
            &FieldValue::from("00ff00"),
            &FieldValue::from("0000ff"),
        ]
    );

    // The empty Name cell gets an auto-generated, non-empty title.
    assert_eq!(repo.records()[0].title, "First");
    assert!(!repo.records()[1].title.is_empty());
    assert_ne!(repo.records()[1].title, "First");
    match &outcomes[1].status {
        RowStatus::Created { title, .. } => assert_eq!(title, &repo.records()[1].title),
        RowStatus::Failed { message } => panic!("row 1 failed: {message}"),
    }

    // Non-varying content publishes unconditionally.
    assert!(repo.records().iter().all(|record| record.published));
    assert!(
        repo.records()
            .iter()
            .all(|record| record.published_locales.is_empty())
    );
}

#[test]
fn bad_row_fails_alone_and_the_run_continues() {
    let mut repo = repository(false);
    let registry = EditorRegistry::builtin();
    let csv = b"Name,Featured\nGood,yes\nBad,banana\nAlso good,no\n";
    let request = request(vec![
        binding(TITLE_ALIAS, "Name"),
        binding("featured", "Featured"),
    ]);

    let outcomes = run_import(
        &mut repo,
        &registry,
        &request,
        &csv[..],
        &ImportOptions::default(),
    )
    .expect("run import");

    assert_eq!(outcomes.len(), 3);
    assert!(!outcomes[0].is_failed());
    assert!(outcomes[1].is_failed());
    assert!(!outcomes[2].is_failed());
    match &outcomes[1].status {
        RowStatus::Failed { message } => assert!(message.contains("banana")),
        RowStatus::Created { .. } => panic!("row 1 must fail"),
    }

    // Only the good rows created records.
    assert_eq!(repo.records().len(), 2);
    assert_eq!(
        repo.records()[0].value_of("featured", None),
        Some(&FieldValue::Integer(1))
    );
    assert_eq!(
        repo.records()[1].value_of("featured", None),
        Some(&FieldValue::Integer(0))
    );
}

#[test]
fn varying_content_fans_out_locales_and_publishes_default_culture() {
    let mut repo = repository(true);
    let registry = EditorRegistry::builtin();
    let csv = b"Name,Heading,Color\nStory,Hello,#123456\n";
    let request = request(vec![
        binding(TITLE_ALIAS, "Name"),
        binding("heading", "Heading"),
        binding("themeColor", "Color"),
    ]);

    let outcomes = run_import(
        &mut repo,
        &registry,
        &request,
        &csv[..],
        &ImportOptions::default(),
    )
    .expect("run import");
    assert_eq!(outcomes.len(), 1);

    let record = &repo.records()[0];
    // The varying heading is written once per locale.
    assert_eq!(
        record.value_of("heading", Some("en-US")),
        Some(&FieldValue::from("Hello"))
    );
    assert_eq!(
        record.value_of("heading", Some("da-DK")),
        Some(&FieldValue::from("Hello"))
    );
    // The non-varying color is written exactly once, without a locale.
    assert_eq!(
        record.value_of("themeColor", None),
        Some(&FieldValue::from("123456"))
    );
    let color_writes = record
        .values
        .iter()
        .filter(|stored| stored.alias == "themeColor")
        .count();
    assert_eq!(color_writes, 1);

    assert_eq!(record.culture_names.get("en-US").map(String::as_str), Some("Story"));
    assert!(record.published);
    assert!(record.published_locales.contains("en-US"));
}

#[test]
fn geo_halves_map_to_one_assignment_under_the_shared_alias() {
    let mut repo = repository(false);
    let registry = EditorRegistry::builtin();
    let csv = b"Name,Lat,Lng\nPlace,10.5,20.25\nNowhere,,\n";
    let request = request(vec![
        binding(TITLE_ALIAS, "Name"),
        binding("venue:lat", "Lat"),
        binding("venue:lng", "Lng"),
    ]);

    run_import(
        &mut repo,
        &registry,
        &request,
        &csv[..],
        &ImportOptions::default(),
    )
    .expect("run import");

    let with_venue = &repo.records()[0];
    assert_eq!(
        with_venue.value_of("venue", None),
        Some(&FieldValue::from(r#"{"latLng":[10.5,20.25],"zoom":13}"#))
    );
    // Both halves empty: the field is skipped entirely.
    let without_venue = &repo.records()[1];
    assert_eq!(without_venue.value_of("venue", None), None);
}

#[test]
fn reference_picker_truncates_to_configured_limit() {
    let mut config = EditorConfig::new();
    config.insert("Multiple".to_string(), serde_json::Value::Bool(false));
    let mut repo = repository(false).with_editor_config(PICKER_DATA_TYPE_ID, config);
    let registry = EditorRegistry::builtin();
    let csv = b"Name,Related\n\
        Post,\"a1111111-1111-1111-1111-111111111111,b2222222-2222-2222-2222-222222222222\"\n";
    let request = request(vec![
        binding(TITLE_ALIAS, "Name"),
        binding("related", "Related"),
    ]);

    run_import(
        &mut repo,
        &registry,
        &request,
        &csv[..],
        &ImportOptions::default(),
    )
    .expect("run import");

    assert_eq!(
        repo.records()[0].value_of("related", None),
        Some(&FieldValue::from("a1111111-1111-1111-1111-111111111111"))
    );
}

#[test]
fn multi_select_and_unbound_fields() {
    let mut repo = repository(false);
    let registry = EditorRegistry::builtin();
    let csv = b"Name,Tags\nPost,\"news, sport ,culture\"\n";
    // featured/related/venue have no bound header and must be skipped.
    let request = request(vec![binding(TITLE_ALIAS, "Name"), binding("tags", "Tags")]);

    run_import(
        &mut repo,
        &registry,
        &request,
        &csv[..],
        &ImportOptions::default(),
    )
    .expect("run import");

    let record = &repo.records()[0];
    assert_eq!(
        record.value_of("tags", None),
        Some(&FieldValue::from(r#"["news","sport","culture"]"#))
    );
    assert_eq!(record.values.len(), 1);
}

#[test]
fn unknown_content_type_aborts_the_whole_run() {
    let mut repo = repository(false);
    let registry = EditorRegistry::builtin();
    let request = ImportRequest {
        parent_id: PARENT_ID,
        content_type_id: 9999,
        fields: vec![binding(TITLE_ALIAS, "Name")],
    };

    let error = run_import(
        &mut repo,
        &registry,
        &request,
        &b"Name\nRow\n"[..],
        &ImportOptions::default(),
    )
    .expect_err("unknown content type");
    assert!(matches!(error, ImportError::ContentTypeNotFound(9999)));
    assert!(repo.records().is_empty());
}

#[test]
fn empty_csv_aborts_the_whole_run() {
    let mut repo = repository(false);
    let registry = EditorRegistry::builtin();
    let request = request(vec![binding(TITLE_ALIAS, "Name")]);

    let error = run_import(
        &mut repo,
        &registry,
        &request,
        &b""[..],
        &ImportOptions::default(),
    )
    .expect_err("empty file");
    assert!(matches!(error, ImportError::Ingest(IngestError::EmptyFile)));
}

#[test]
fn duplicate_binding_aborts_the_whole_run() {
    let mut repo = repository(false);
    let registry = EditorRegistry::builtin();
    let request = request(vec![binding("tags", "A"), binding("tags", "B")]);

    let error = run_import(
        &mut repo,
        &registry,
        &request,
        &b"A,B\nx,y\n"[..],
        &ImportOptions::default(),
    )
    .expect_err("duplicate binding");
    assert!(matches!(error, ImportError::Mapping(_)));
}

#[test]
fn stop_signal_halts_between_rows() {
    let mut repo = repository(false);
    let registry = EditorRegistry::builtin();
    let csv = b"Name\nOne\nTwo\nThree\n";
    let request = request(vec![binding(TITLE_ALIAS, "Name")]);

    let stop = Arc::new(AtomicBool::new(false));
    stop.store(true, Ordering::Relaxed);
    let options = ImportOptions {
        stop: Some(Arc::clone(&stop)),
    };

    let outcomes =
        run_import(&mut repo, &registry, &request, &csv[..], &options).expect("run import");
    assert!(outcomes.is_empty());
    assert!(repo.records().is_empty());
}

#[test]
fn bulk_delete_passthrough_reports_removed_count() {
    let mut repo = repository(false);
    let registry = EditorRegistry::builtin();
    let csv = b"Name\nOne\nTwo\n";
    let request = request(vec![binding(TITLE_ALIAS, "Name")]);
    run_import(
        &mut repo,
        &registry,
        &request,
        &csv[..],
        &ImportOptions::default(),
    )
    .expect("run import");

    let removed = delete_all_of_type(&mut repo, ARTICLE_TYPE_ID).expect("delete");
    assert_eq!(removed, 2);
    assert!(repo.records().is_empty());
}
