use pretty_assertions::assert_eq;
use samplestat_core::domain::*;
use serde_json::json;

// ===== Draft Deserialization Tests =====

#[test]
fn test_draft_minimal_body() {
    let draft: SampleDraft = serde_json::from_value(json!({
        "distributionType": "uniform",
        "values": [1, 2, 3]
    }))
    .unwrap();

    assert_eq!(draft.distribution_type, DistributionType::Uniform);
    assert_eq!(draft.values, vec![1, 2, 3]);
    assert_eq!(draft.id, None);
    assert_eq!(draft.sample_count, None);
    assert_eq!(draft.low, None);
}

#[test]
fn test_draft_full_body() {
    let draft: SampleDraft = serde_json::from_value(json!({
        "id": 7,
        "distributionType": "normal",
        "values": [4, 5],
        "sampleCount": 10,
        "loc": 0.5,
        "scale": 2
    }))
    .unwrap();

    assert_eq!(draft.id, Some(SampleId::new(7)));
    assert_eq!(draft.sample_count, Some(10));
    assert_eq!(draft.loc, Some(0.5));
    assert_eq!(draft.scale, Some(2.0));
}

#[test]
fn test_draft_rejects_unknown_distribution() {
    let result: Result<SampleDraft, _> = serde_json::from_value(json!({
        "distributionType": "poisson",
        "values": [1]
    }));
    assert!(result.is_err());
}

#[test]
fn test_draft_rejects_non_integer_values() {
    let result: Result<SampleDraft, _> = serde_json::from_value(json!({
        "distributionType": "weibull",
        "values": [1, "x"]
    }));
    assert!(result.is_err());
}

#[test]
fn test_draft_serialization_skips_absent_fields() {
    let value = serde_json::to_value(SampleDraft::weibull(vec![3], 1.5)).unwrap();

    assert_eq!(
        value,
        json!({
            "distributionType": "weibull",
            "values": [3],
            "shape": 1.5
        })
    );
}

// ===== Payload Transform Tests =====

fn stored(id: i64, kind: DistributionType, data: &str, count: i64) -> StoredSample {
    StoredSample {
        id: SampleId::new(id),
        distribution_type: kind,
        data_points: data.to_string(),
        value_count: count,
    }
}

#[test]
fn test_sample_map_from_empty_rows() {
    let map = into_sample_map(Vec::new()).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_sample_map_decodes_values() {
    let map = into_sample_map(vec![
        stored(2, DistributionType::Normal, "4,5", 2),
        stored(1, DistributionType::Uniform, "1, 2, 3", 3),
    ])
    .unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map[&SampleId::new(1)].values, vec![1, 2, 3]);
    assert_eq!(map[&SampleId::new(2)].distribution_type, DistributionType::Normal);
}

#[test]
fn test_sample_map_json_shape() {
    let map = into_sample_map(vec![stored(1, DistributionType::Uniform, "1,2,3", 3)]).unwrap();

    assert_eq!(
        serde_json::to_value(&map).unwrap(),
        json!({
            "1": {
                "id": 1,
                "distributionType": "uniform",
                "values": [1, 2, 3],
                "sampleCount": 3
            }
        })
    );
}

#[test]
fn test_sample_map_json_parses_back() {
    let body = r#"{"3":{"id":3,"distributionType":"weibull","values":[9],"sampleCount":1}}"#;
    let map: SampleMap = serde_json::from_str(body).unwrap();

    assert_eq!(
        map.get(&SampleId::new(3)),
        Some(&SampleRecord {
            id: SampleId::new(3),
            distribution_type: DistributionType::Weibull,
            values: vec![9],
            sample_count: 1,
        })
    );
}

#[test]
fn test_sample_map_rejects_corrupt_row() {
    let result = into_sample_map(vec![stored(1, DistributionType::Uniform, "1,,3", 3)]);
    assert!(result.is_err());
}

#[test]
fn test_params_tagged_serialization() {
    let params = DistributionParams::Uniform { low: 0.0, high: 10.0 };
    assert_eq!(
        serde_json::to_value(params).unwrap(),
        json!({ "distributionType": "uniform", "low": 0.0, "high": 10.0 })
    );
}
