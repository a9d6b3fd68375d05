use dumpster_core::{
    core::{
        parse_info2_data, parse_info2_file, parse_recycle_bin_data, parse_recycle_bin_file,
        parse_toml_file,
    },
    RecycleBinError, RecycleSource,
};
use std::{fs::read, path::PathBuf};

fn test_data(name: &str) -> String {
    let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_location.push("tests/test_data/windows");
    test_location.push(name);
    test_location.display().to_string()
}

#[test]
fn test_recyclebin_toml() {
    let results = parse_toml_file(&test_data("recyclebin.toml")).unwrap();
    assert_eq!(results, ())
}

#[test]
fn test_recyclebin_metadata() {
    let result = parse_recycle_bin_file(&test_data(
        "recyclebin/S-1-5-21-2981021111-3218961410-4207262418-1001/$IWHBX3J.txt",
    ))
    .unwrap();

    assert_eq!(result.original_name, "quarterly_report.txt");
    assert_eq!(
        result.original_path,
        "C:\\Users\\bob\\Documents\\quarterly_report.txt"
    );
    assert_eq!(result.size, 12);
    assert_eq!(result.deleted.unwrap().timestamp(), 1631126028);
    match result.source {
        RecycleSource::Metadata {
            version,
            can_read_content,
            sid,
            ..
        } => {
            assert_eq!(version, 2);
            assert!(can_read_content);
            assert_eq!(sid, "S-1-5-21-2981021111-3218961410-4207262418-1001");
        }
        _ => panic!("wrong record source"),
    }
}

#[test]
fn test_recyclebin_info2() {
    let results = parse_info2_file(&test_data("recyclebin/INFO2")).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].original_name, "letter.doc");
    assert_eq!(results[1].original_name, "abc");
    assert!(results[1].deleted.is_none());
}

#[test]
fn test_recyclebin_missing() {
    let result = parse_recycle_bin_file(&test_data("recyclebin/$IMISSING.txt"));
    assert_eq!(result, Err(RecycleBinError::ReadFile));
}

#[test]
fn test_recyclebin_metadata_data() {
    let data = read(test_data(
        "recyclebin/S-1-5-21-2981021111-3218961410-4207262418-1001/$IWHBX3J.txt",
    ))
    .unwrap();
    let result = parse_recycle_bin_data(&data).unwrap();

    assert_eq!(result.original_name, "quarterly_report.txt");
    assert_eq!(result.size, 12);
    match result.source {
        RecycleSource::Metadata {
            content_path,
            can_read_content,
            ..
        } => {
            assert_eq!(content_path, None);
            assert!(!can_read_content);
        }
        _ => panic!("wrong record source"),
    }

    let result = parse_recycle_bin_data(&[0x41; 120]);
    assert_eq!(result, Err(RecycleBinError::ParseFile));
}

#[test]
fn test_recyclebin_info2_data() {
    let data = read(test_data("recyclebin/INFO2")).unwrap();
    let results = parse_info2_data(&data);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].size, 1024);
    assert_eq!(results[0].original_name, "letter.doc");
    match &results[1].source {
        RecycleSource::Info2 { record, offset, .. } => {
            assert_eq!(*record, 1);
            assert_eq!(*offset, 300);
        }
        _ => panic!("wrong record source"),
    }
}
