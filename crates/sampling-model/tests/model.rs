use chrono::NaiveDate;
use sampling_model::{GenerationOptions, LookupRegistry, SamplingCategory, SamplingKind};

#[test]
fn partial_options_document_uses_defaults() {
    let json = r#"{ "seed": 7, "num_samples": 12, "reference_date": "2026-06-30" }"#;
    let options: GenerationOptions = serde_json::from_str(json).expect("parse options");

    assert_eq!(options.seed, 7);
    assert_eq!(options.num_samples, 12);
    assert_eq!(options.num_promoters, 5);
    assert_eq!(options.target_min, 100);
    assert_eq!(options.target_max, 200);
    assert_eq!(
        options.reference_date,
        Some(NaiveDate::from_ymd_opt(2026, 6, 30).unwrap())
    );
}

#[test]
fn empty_options_document_equals_default() {
    let options: GenerationOptions = serde_json::from_str("{}").expect("parse options");
    assert_eq!(options, GenerationOptions::default());
}

#[test]
fn lookup_registry_serializes() {
    let lookups = LookupRegistry::standard();
    let json = serde_json::to_string(&lookups).expect("serialize lookups");
    let round: LookupRegistry = serde_json::from_str(&json).expect("deserialize lookups");
    assert_eq!(round, lookups);
}

#[test]
fn sampling_kind_serializes_with_payload() {
    let kind = SamplingKind::Traffic { passengers: 6 };
    let json = serde_json::to_string(&kind).expect("serialize kind");
    assert_eq!(json, r#"{"Traffic":{"passengers":6}}"#);

    let standard = SamplingKind::Standard(SamplingCategory::OpenMarket);
    let json = serde_json::to_string(&standard).expect("serialize kind");
    assert_eq!(json, r#"{"Standard":"OpenMarket"}"#);
}
