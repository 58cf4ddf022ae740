use std::collections::BTreeSet;

use chrono::NaiveDate;
use sampling_generate::{
    SampleSource, generate_areas, generate_promoters, generate_respondents,
    generate_sampling_events, sampling_type_table,
};
use sampling_model::{
    GenerateError, GenerationOptions, LookupRegistry, SamplingCategory, SamplingEvent,
    SamplingKind,
};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[test]
fn areas_cover_every_district_twice() {
    let lookups = LookupRegistry::standard();
    let areas = generate_areas(&lookups.regions, 1001).expect("areas");

    assert_eq!(areas.len(), 2 * lookups.district_count());
    let ids: BTreeSet<&str> = areas.iter().map(|a| a.area_id.as_str()).collect();
    assert_eq!(ids.len(), areas.len());

    assert_eq!(areas[0].name, "La Nkwantanang Area 1");
    assert_eq!(areas[0].region, "Greater Accra");
    assert_eq!(areas[1].name, "La Nkwantanang Area 2");
    assert_eq!(areas[17].area_id, "A 1018");
    assert_eq!(areas[17].name, "Mankessim Area 2");
    assert_eq!(areas[17].district, "Mankessim");
}

#[test]
fn promoters_have_sequential_ids_and_identities() {
    let mut source = SampleSource::seeded(42);
    let promoters = generate_promoters(&mut source, 5, 1000).expect("promoters");
    let ids: Vec<&str> = promoters.iter().map(|p| p.promoter_id.as_str()).collect();
    assert_eq!(ids, ["P1000", "P1001", "P1002", "P1003", "P1004"]);
    assert!(promoters.iter().all(|p| !p.name.trim().is_empty()));
    assert!(promoters.iter().all(|p| !p.contact.trim().is_empty()));
}

#[test]
fn promoters_zero_count() {
    let mut source = SampleSource::seeded(42);
    assert!(generate_promoters(&mut source, 0, 1000).expect("promoters").is_empty());
}

#[test]
fn events_carry_payload_only_for_their_category() {
    let lookups = LookupRegistry::standard();
    let options = GenerationOptions::default().with_samples(300);
    let areas = generate_areas(&lookups.regions, 1001).expect("areas");
    let mut source = SampleSource::seeded(11);
    let promoters = generate_promoters(&mut source, 5, 1000).expect("promoters");
    let types = sampling_type_table(&lookups.sampling_types);

    let events = generate_sampling_events(
        &mut source,
        &areas,
        &promoters,
        &types,
        &lookups,
        &options,
        reference_date(),
    )
    .expect("events");

    assert_eq!(events.len(), 300);
    let mut categories = BTreeSet::new();
    for event in &events {
        assert!((100..200).contains(&event.target));
        let is_institutional = event.sampling_type == "ST5";
        let is_traffic = event.sampling_type == "ST2";
        assert_eq!(event.kind.institution_type().is_some(), is_institutional);
        assert_eq!(event.kind.passengers().is_some(), is_traffic);
        if let SamplingKind::Institutional { institution_type } = &event.kind {
            assert!(lookups.institution_types.contains(institution_type));
        }
        if let Some(passengers) = event.kind.passengers() {
            assert!((5..10).contains(&passengers));
        }
        assert!(lookups.brands.contains(&event.brand));
        categories.insert(event.kind.category().label());
    }
    // 300 draws over 5 categories reach every one of them.
    assert_eq!(categories.len(), SamplingCategory::ALL.len());
}

#[test]
fn respondents_reference_their_event() {
    let lookups = LookupRegistry::standard();
    let options = GenerationOptions::default();
    let areas = generate_areas(&lookups.regions, 1001).expect("areas");
    let mut source = SampleSource::seeded(8);
    let promoters = generate_promoters(&mut source, 5, 1000).expect("promoters");
    let types = sampling_type_table(&lookups.sampling_types);
    let events = generate_sampling_events(
        &mut source,
        &areas,
        &promoters,
        &types,
        &lookups,
        &options,
        reference_date(),
    )
    .expect("events");

    let respondents =
        generate_respondents(&mut source, &events, &areas, &lookups, &options).expect("respondents");

    let area_names: BTreeSet<&str> = areas.iter().map(|a| a.name.as_str()).collect();
    for respondent in &respondents {
        let event = events
            .iter()
            .find(|e| e.sampling_id == respondent.sampling_id)
            .expect("event exists");
        assert_eq!(respondent.current_brand, event.brand);
        assert_eq!(respondent.area_id, event.area_id);
        assert!(event.covers(respondent.submitted_on));
        assert!(area_names.contains(respondent.residence_area.as_str()));
        assert!(lookups.age_ranges.contains(&respondent.age_range));
        assert!(lookups.brands.contains(&respondent.preferred_brand));
        assert!(lookups.reasons.contains(&respondent.reason));
    }
}

#[test]
fn target_below_minimum_is_flagged_not_clamped() {
    let lookups = LookupRegistry::standard();
    let options = GenerationOptions::default();
    let areas = generate_areas(&lookups.regions, 1001).expect("areas");
    let event = SamplingEvent {
        sampling_id: "S1000".to_string(),
        area_id: areas[0].area_id.clone(),
        promoter_id: "P1000".to_string(),
        sampling_type: "ST1".to_string(),
        kind: SamplingKind::Standard(SamplingCategory::OpenMarket),
        target: 99,
        brand: "Kel".to_string(),
        start_date: reference_date(),
        end_date: NaiveDate::from_ymd_opt(2026, 11, 17).unwrap(),
    };
    let mut source = SampleSource::seeded(1);

    let err = generate_respondents(&mut source, &[event], &areas, &lookups, &options)
        .unwrap_err();
    match err {
        GenerateError::InvalidBatchRange {
            sampling_id,
            min,
            target,
        } => {
            assert_eq!(sampling_id, "S1000");
            assert_eq!(min, 100);
            assert_eq!(target, 99);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn batch_equal_to_minimum_is_allowed() {
    let lookups = LookupRegistry::standard();
    let options = GenerationOptions::default();
    let areas = generate_areas(&lookups.regions, 1001).expect("areas");
    let event = SamplingEvent {
        sampling_id: "S1000".to_string(),
        area_id: areas[3].area_id.clone(),
        promoter_id: "P1000".to_string(),
        sampling_type: "ST3".to_string(),
        kind: SamplingKind::Standard(SamplingCategory::Trade),
        target: 100,
        brand: "Colgate".to_string(),
        start_date: reference_date(),
        end_date: NaiveDate::from_ymd_opt(2026, 11, 17).unwrap(),
    };
    let mut source = SampleSource::seeded(1);

    let respondents = generate_respondents(&mut source, &[event], &areas, &lookups, &options)
        .expect("respondents");
    assert_eq!(respondents.len(), 100);
    assert_eq!(respondents[0].respondent_id, "R1000");
    assert_eq!(respondents[99].respondent_id, "R1099");
}
