use policysim::{
    config::PolicySimConfiguration,
    service::{DiagnosticLevel, RestoreStatus},
    store::{DatasetKind, LayeredResolver},
};
use std::fs;
use tempfile::tempdir;

fn configuration(data_directory: &std::path::Path) -> PolicySimConfiguration {
    PolicySimConfiguration {
        data_directory: data_directory.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_fallback_wins_over_pai_rows() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("coefficients.csv"),
        "rail_type\tkpi\tparam1_name\tparam1_value\n고속철도\tPAI\tw_도보\t5.0\n",
    )
    .unwrap();
    let service = configuration(dir.path()).build_service().unwrap();

    let loaded = service.get_structured_coefficients().unwrap();
    assert!(loaded.is_clean());
    let structured = loaded.value;
    assert_eq!(structured.accessibility.weight("고속철도", "도보"), Some(10.28));
    let generic = structured.model.get("고속철도", "PAI").unwrap();
    assert_eq!(generic.params.get("w_도보"), Some(&5.0));
    assert_eq!(generic.params.len(), 1);
}

#[test]
fn test_missing_originals_are_diagnosed() {
    let dir = tempdir().unwrap();
    let service = configuration(dir.path()).build_service().unwrap();

    let policy = service.get_policy_table().unwrap();
    assert!(policy.value.is_empty());
    assert_eq!(policy.diagnostics[0].level, DiagnosticLevel::Error);
    assert!(policy.diagnostics[0].message.contains("policy_db.csv"));

    let raw = service.get_coefficient_table_raw().unwrap();
    assert!(raw.value.is_empty());
    let structured = service.get_structured_coefficients().unwrap();
    assert!(structured.value.model.is_empty());
    assert!(structured.value.accessibility.is_empty());
    assert!(structured.value.transfer.is_empty());
}

#[test]
fn test_decode_failure_is_propagated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("coefficients.csv"), [0xffu8, 0xfe, 0xff]).unwrap();
    let service = configuration(dir.path()).build_service().unwrap();
    assert!(service.get_structured_coefficients().is_err());
}

#[test]
fn test_save_restore_through_service() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("policy_db.csv"),
        "project,duration_months\n경부고속선 개량,18개월\n",
    )
    .unwrap();
    let mut service = configuration(dir.path()).build_service().unwrap();

    let original = service.get_policy_table().unwrap().value;
    assert_eq!(original.get(0, "duration_months"), Some("18"));

    let mut edited = original.clone();
    edited.rows_mut()[0][1] = String::from("24");
    service.save_policy_table(&edited).unwrap();
    assert!(service.store().has_modified(DatasetKind::Policy));
    assert_eq!(service.get_policy_table().unwrap().value, edited);

    let report = service.restore_policy();
    assert_eq!(report.status(), RestoreStatus::Restored);
    assert_eq!(service.get_policy_table().unwrap().value, original);

    let report = service.restore_all();
    assert_eq!(report.status(), RestoreStatus::AlreadyOriginal);
}

#[test]
fn test_removal_failure_is_reported() {
    let dir = tempdir().unwrap();
    let mut service = configuration(dir.path()).build_service().unwrap();
    fs::create_dir(service.store().modified_path(DatasetKind::Coefficients)).unwrap();
    let report = service.restore_coefficients();
    assert!(report.is_failure());
    assert!(report.to_string().starts_with("restore failed"));
    assert!(!report.removed());
}

#[test]
fn test_restore_all_continues_past_a_failure() {
    let dir = tempdir().unwrap();
    let mut service = configuration(dir.path()).build_service().unwrap();
    let coefficients = service.get_coefficient_table_raw().unwrap().value;
    service.save_coefficient_table(&coefficients).unwrap();
    // the policy override cannot be removed, and is attempted first
    fs::create_dir(service.store().modified_path(DatasetKind::Policy)).unwrap();

    let report = service.restore_all();
    assert!(!service.store().has_modified(DatasetKind::Coefficients));
    assert_eq!(report.status(), RestoreStatus::Failed);
    assert!(report.removed());
    assert_eq!(report.failures().len(), 1);
    assert!(report.failures()[0].contains("policy"));
}
