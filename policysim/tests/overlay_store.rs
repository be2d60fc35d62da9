use encoding_rs::EUC_KR;
use policysim::store::{
    DatasetKind, FileOverlayStore, LayeredResolver, RestoreOutcome, StoreError, Table,
};
use std::fs;
use tempfile::tempdir;

const POLICY_CSV: &str = "project,rail_type,duration_months\n\
                          평택-오송 2복선화,고속철도,60개월\n\
                          GTX-C,광역철도,48개월\n";

const COEFFICIENTS_TSV: &str = "rail_type\tkpi\tmodel_type\tparam1_name\tparam1_value\tparam2_name\tparam2_value\n\
                                고속철도\tPAI\tA\tw_도보\t5.0\t\t\n\
                                일반철도\tTCI\tA\tP_도보\t0.5\t\t\n";

fn modified_policy() -> Table {
    Table::new(
        vec![
            String::from("project"),
            String::from("rail_type"),
            String::from("duration_months"),
        ],
        vec![vec![
            String::from("동해선 전철화"),
            String::from("일반철도"),
            String::from("36"),
        ]],
    )
}

#[test]
fn test_missing_artifacts() {
    let dir = tempdir().unwrap();
    let store = FileOverlayStore::with_default_layout(dir.path()).unwrap();
    let result = store.resolve(DatasetKind::Policy);
    assert!(matches!(
        result,
        Err(StoreError::ArtifactNotFound {
            dataset: DatasetKind::Policy,
            ..
        })
    ));
}

#[test]
fn test_creates_data_directory() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("nested").join("data");
    let store = FileOverlayStore::with_default_layout(&data).unwrap();
    assert!(data.is_dir());
    assert_eq!(store.data_directory(), data.as_path());
}

#[test]
fn test_save_restore_lifecycle() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("policy_db.csv"), POLICY_CSV).unwrap();
    let mut store = FileOverlayStore::with_default_layout(dir.path()).unwrap();

    let original = store.resolve(DatasetKind::Policy).unwrap();
    assert_eq!(original.len(), 2);
    assert_eq!(original.get(0, "duration_months"), Some("60개월"));
    assert!(!store.has_modified(DatasetKind::Policy));

    let modified = modified_policy();
    store.save(DatasetKind::Policy, &modified).unwrap();
    assert!(store.has_modified(DatasetKind::Policy));
    assert_eq!(store.resolve(DatasetKind::Policy).unwrap(), modified);

    let written = fs::read(store.modified_path(DatasetKind::Policy)).unwrap();
    assert_eq!(written, modified.to_bytes(b',').unwrap());

    // a second save fully replaces the first
    let shorter = Table::new(modified.headers().to_vec(), vec![]);
    store.save(DatasetKind::Policy, &shorter).unwrap();
    assert_eq!(store.resolve(DatasetKind::Policy).unwrap(), shorter);

    assert_eq!(
        store.restore(DatasetKind::Policy).unwrap(),
        RestoreOutcome::Removed
    );
    assert_eq!(store.resolve(DatasetKind::Policy).unwrap(), original);
    assert_eq!(
        store.restore(DatasetKind::Policy).unwrap(),
        RestoreOutcome::AlreadyOriginal
    );
    assert_eq!(
        fs::read_to_string(store.original_path(DatasetKind::Policy)).unwrap(),
        POLICY_CSV
    );
}

#[test]
fn test_coefficients_are_tab_separated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("coefficients.csv"), COEFFICIENTS_TSV).unwrap();
    let mut store = FileOverlayStore::with_default_layout(dir.path()).unwrap();

    let table = store.resolve(DatasetKind::Coefficients).unwrap();
    assert_eq!(table.headers().len(), 7);
    assert_eq!(table.get(1, "param1_name"), Some("P_도보"));

    store.save(DatasetKind::Coefficients, &table).unwrap();
    let written = fs::read_to_string(store.modified_path(DatasetKind::Coefficients)).unwrap();
    assert!(written.starts_with("rail_type\tkpi\t"));
    assert_eq!(store.resolve(DatasetKind::Coefficients).unwrap(), table);
}

#[test]
fn test_legacy_encoded_original() {
    let dir = tempdir().unwrap();
    let (encoded, _, had_errors) = EUC_KR.encode(POLICY_CSV);
    assert!(!had_errors);
    fs::write(dir.path().join("policy_db.csv"), &encoded).unwrap();
    let store = FileOverlayStore::with_default_layout(dir.path()).unwrap();

    let table = store.resolve(DatasetKind::Policy).unwrap();
    assert_eq!(table.get(0, "project"), Some("평택-오송 2복선화"));
    assert_eq!(table.get(1, "rail_type"), Some("광역철도"));
}

#[test]
fn test_undecodable_artifact() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("policy_db.csv"), [0x61u8, 0x2c, 0xff, 0xff, 0x0a]).unwrap();
    let store = FileOverlayStore::with_default_layout(dir.path()).unwrap();
    assert!(matches!(
        store.resolve(DatasetKind::Policy),
        Err(StoreError::DecodeFailure { .. })
    ));
}

#[test]
fn test_restore_all() {
    let dir = tempdir().unwrap();
    let mut store = FileOverlayStore::with_default_layout(dir.path()).unwrap();
    let (outcome, failures) = store.restore_all();
    assert_eq!(outcome, RestoreOutcome::AlreadyOriginal);
    assert!(failures.is_empty());

    store
        .save(DatasetKind::Coefficients, &Table::empty())
        .unwrap();
    let (outcome, failures) = store.restore_all();
    assert_eq!(outcome, RestoreOutcome::Removed);
    assert!(failures.is_empty());
    assert!(!store.modified_path(DatasetKind::Coefficients).exists());
}

#[test]
fn test_removal_failure() {
    let dir = tempdir().unwrap();
    let mut store = FileOverlayStore::with_default_layout(dir.path()).unwrap();
    // a directory in place of the modified artifact cannot be removed as a file
    fs::create_dir(store.modified_path(DatasetKind::Policy)).unwrap();
    assert!(matches!(
        store.restore(DatasetKind::Policy),
        Err(StoreError::RemovalFailure {
            dataset: DatasetKind::Policy,
            ..
        })
    ));
}

#[test]
fn test_restore_all_attempts_every_dataset() {
    let dir = tempdir().unwrap();
    let mut store = FileOverlayStore::with_default_layout(dir.path()).unwrap();
    store
        .save(DatasetKind::Coefficients, &Table::empty())
        .unwrap();
    fs::create_dir(store.modified_path(DatasetKind::Policy)).unwrap();

    let (outcome, failures) = store.restore_all();
    assert_eq!(outcome, RestoreOutcome::Removed);
    assert!(!store.modified_path(DatasetKind::Coefficients).exists());
    assert_eq!(failures.len(), 1);
    assert!(matches!(
        failures[0],
        StoreError::RemovalFailure {
            dataset: DatasetKind::Policy,
            ..
        }
    ));
}
