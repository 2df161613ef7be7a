// ==========================================
// 导入层集成测试
// ==========================================
// 测试目标: 舱单别名列导入、品名映射文件加载
// ==========================================

mod test_helpers;

use sr_auto::importer::{AnnotationLoader, AnnotationOptions, ImportError, ManifestImporter};
use tempfile::TempDir;
use test_helpers::write_csv;

#[test]
fn test_manifest_with_english_aliases() {
    let dir = TempDir::new().unwrap();
    let manifest = write_csv(
        &dir,
        "aliases.csv",
        &[
            "HBL No,Container No,Seal No,Packages,Unit,Weight (KG),Measure (CBM)",
            "HBL001,ABCU1234567,777.0,12,ct,120.25,1.125",
        ],
    )
    .unwrap();

    let lines = ManifestImporter::default().import(&manifest).unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].bill_of_lading, "HBL001");
    assert_eq!(lines[0].seal, "777");
    assert_eq!(lines[0].package_count, 12);
    assert_eq!(lines[0].unit, "ct");
    assert_eq!(lines[0].weight, 120.25);
}

#[test]
fn test_manifest_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("manifest.txt");
    std::fs::write(&path, "not a sheet").unwrap();

    let result = ManifestImporter::default().import(&path);

    assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
}

#[test]
fn test_annotation_file_accumulates_rows() {
    let dir = TempDir::new().unwrap();
    let mapping = write_csv(
        &dir,
        "extra.csv",
        &[
            "HBL,ITEM,REMARK",
            "HBL001,\"LED LAMPS",
            "8539.52\",ignored",
            "HBL001,MADE IN CHINA,ignored",
            ",ORPHAN,",
        ],
    )
    .unwrap();

    let map = AnnotationLoader::new(AnnotationOptions::default())
        .load(&mapping)
        .unwrap();

    assert_eq!(
        map.lines_for("HBL001"),
        &[
            "LED LAMPS".to_string(),
            "HS CODE 8539.52".to_string(),
            "MADE IN CHINA".to_string(),
        ]
    );
}

#[test]
fn test_annotation_file_single_column_is_error() {
    let dir = TempDir::new().unwrap();
    let mapping = write_csv(&dir, "extra.csv", &["HBL", "HBL001"]).unwrap();

    let result = AnnotationLoader::new(AnnotationOptions::default()).load(&mapping);

    match result {
        Err(ImportError::AnnotationColumnMissing(source)) => assert!(source.ends_with("extra.csv")),
        other => panic!("expected AnnotationColumnMissing, got {:?}", other),
    }
}
