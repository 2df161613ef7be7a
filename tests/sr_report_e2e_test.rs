// ==========================================
// SR 报告端到端测试
// ==========================================
// 模拟命令行调用: 舱单 + 可选映射 → SR 文本
// ==========================================

mod test_helpers;

use sr_auto::api::ApiError;
use sr_auto::config::ReportOptions;
use sr_auto::{logging, SrReportApi};
use std::path::PathBuf;
use tempfile::TempDir;
use test_helpers::*;

/// 单柜舱单: 标题行省略,重量/体积按格式化规则输出
#[test]
fn test_single_container_report() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "SR_0419.csv",
        &[
            "HBL001,ABCU1234567,12345.0,10,PK,100.0,1.2",
            "HBL001,ABCU1234567,12345.0,5,PK,50.5,0.8",
        ],
    )
    .unwrap();

    let response = create_test_api(&dir)
        .generate_report(&manifest, None)
        .unwrap();

    assert_eq!(response.file_name, "SR_0419.txt");
    assert_eq!(response.container_count, 1);
    assert!(response.warnings.is_empty());
    assert_eq!(
        response.content,
        "ABCU1234567 / 12345\n\
         TOTAL: 15 PKGS / 150.5 KG / 2 CBM\n\
         \n\
         <MARK>\n\
         \n\
         HBL001\n\
         \n\
         \n\
         <DESC>\n\
         \n\
         HBL001\n\
         15 PKGS / 150.5 KGS / 2 CBM\n"
    );
}

/// 多柜舱单: 每个柜在 MARK/DESC 中各出现一次标题
#[test]
fn test_multi_container_report_with_annotations() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "multi.csv",
        &[
            "HBL002,TGHU7654321,998,3,PL,300,2.5",
            "HBL001,ABCU1234567,12345,1,CT,12.3456,0.1",
            "HBL003,TGHU7654321,998,2,XY,20,0.5",
        ],
    )
    .unwrap();
    let mapping = write_csv(
        &dir,
        "extra.csv",
        &[
            "HBL,INFO",
            "HBL002,\"FURNITURE PARTS",
            "HS CODE: 9403.90\"",
        ],
    )
    .unwrap();

    let mut options = test_options(&dir);
    options.render.force_pallet_as_package = true;
    options.annotation.strip_hs_separator = true;
    let response = SrReportApi::new(options)
        .generate_report(&manifest, Some(&mapping))
        .unwrap();

    assert_eq!(response.container_count, 2);
    assert_eq!(response.desc_row_count, 3);
    assert_eq!(
        response.content,
        "ABCU1234567 / 12345\n\
         TOTAL: 1 PKGS / 12.346 KG / 0.1 CBM\n\
         \n\
         TGHU7654321 / 998\n\
         TOTAL: 5 PKGS / 320 KG / 3 CBM\n\
         \n\
         <MARK>\n\
         \n\
         ABCU1234567 / 12345\n\
         \n\
         HBL001\n\
         \n\
         TGHU7654321 / 998\n\
         \n\
         HBL002\n\
         HBL003\n\
         \n\
         \n\
         <DESC>\n\
         \n\
         ABCU1234567 / 12345\n\
         \n\
         HBL001\n\
         1 CTN / 12.346 KGS / 0.1 CBM\n\
         \n\
         \n\
         \n\
         \n\
         TGHU7654321 / 998\n\
         \n\
         HBL002\n\
         3 PKGS / 300 KGS / 2.5 CBM\n\
         FURNITURE PARTS\n\
         HS CODE 940390\n\
         \n\
         HBL003\n\
         2 XY / 20 KGS / 0.5 CBM\n"
    );
}

/// Excel 舱单: 数值封号去小数, 空封号为 ""
#[test]
fn test_xlsx_manifest_report() {
    let dir = TempDir::new().unwrap();
    let manifest =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/manifest_sample.xlsx");

    let response = create_test_api(&dir)
        .generate_report(&manifest, None)
        .unwrap();

    assert_eq!(response.file_name, "manifest_sample.txt");
    assert_eq!(response.container_count, 2);
    assert_eq!(
        response.content,
        "ABCU1234567 / 12345\n\
         TOTAL: 15 PKGS / 150.5 KG / 2 CBM\n\
         \n\
         TGHU7654321 / \n\
         TOTAL: 2 PKGS / 20.25 KG / 0.5 CBM\n\
         \n\
         <MARK>\n\
         \n\
         ABCU1234567 / 12345\n\
         \n\
         HBL001\n\
         \n\
         TGHU7654321 / \n\
         \n\
         HBL002\n\
         \n\
         \n\
         <DESC>\n\
         \n\
         ABCU1234567 / 12345\n\
         \n\
         HBL001\n\
         15 PKGS / 150.5 KGS / 2 CBM\n\
         \n\
         \n\
         \n\
         \n\
         TGHU7654321 / \n\
         \n\
         HBL002\n\
         2 CTNS / 20.25 KGS / 0.5 CBM\n"
    );
    assert_eq!(read_to_string(&upload_log_path(&dir)), "manifest_sample.xlsx\n");
}

/// 重复运行结果逐字节一致
#[test]
fn test_report_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "repeat.csv",
        &[
            "HBL009,ZZZU0000009,1,1,PK,1,0.01",
            "HBL001,AAAU0000001,2,2,PK,2,0.02",
        ],
    )
    .unwrap();

    let api = create_test_api(&dir);
    let first = api.generate_report(&manifest, None).unwrap();
    let second = api.generate_report(&manifest, None).unwrap();

    assert_eq!(first.content, second.content);
}

/// 必需列缺失: 致命错误,不返回报告
#[test]
fn test_missing_columns_aborts() {
    let dir = TempDir::new().unwrap();
    let manifest = write_csv(
        &dir,
        "broken.csv",
        &["House B/L No,컨테이너 번호,포장갯수", "HBL001,ABCU1234567,1"],
    )
    .unwrap();

    let result = create_test_api(&dir).generate_report(&manifest, None);

    match result {
        Err(ApiError::MissingColumns(columns)) => {
            assert_eq!(columns, vec!["Seal#1", "단위", "Weight", "Measure"]);
        }
        other => panic!("expected MissingColumns, got {:?}", other.map(|r| r.content)),
    }
}

/// 映射文件缺少注释列: 降级为空映射并返回警告
#[test]
fn test_mapping_without_annotation_column_degrades() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "m.csv", &["HBL001,ABCU1234567,1,1,PK,1,1"]).unwrap();
    let mapping = write_csv(&dir, "extra.csv", &["HBL", "HBL001"]).unwrap();

    let response = create_test_api(&dir)
        .generate_report(&manifest, Some(&mapping))
        .unwrap();

    assert_eq!(response.warnings.len(), 1);
    assert!(response.warnings[0].contains("注释列"));
    assert!(response.content.ends_with("HBL001\n1 PKG / 1 KGS / 1 CBM\n"));
}

/// 指定的注释列不存在: 不回退到其他列,警告返回给调用方
#[test]
fn test_missing_designated_annotation_column_degrades() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "m.csv", &["HBL001,ABCU1234567,1,1,PK,1,1"]).unwrap();
    let mapping = write_csv(&dir, "extra.csv", &["HBL,REMARK", "HBL001,INTERNAL NOTE"]).unwrap();

    let mut options = test_options(&dir);
    options.annotation.annotation_column = Some("DESC".to_string());
    let response = SrReportApi::new(options)
        .generate_report(&manifest, Some(&mapping))
        .unwrap();

    assert_eq!(response.warnings.len(), 1);
    assert!(response.warnings[0].contains("DESC"));
    assert!(!response.content.contains("INTERNAL NOTE"));
}

/// 空舱单: 仍输出区段标记
#[test]
fn test_empty_manifest_report() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "empty.csv", &[]).unwrap();

    let response = create_test_api(&dir)
        .generate_report(&manifest, None)
        .unwrap();

    assert_eq!(response.content, "<MARK>\n\n\n<DESC>\n");
    assert_eq!(response.container_count, 0);
}

/// 非法数值按 0 计,空封号标准化为 ""
#[test]
fn test_lenient_numeric_coercion() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        &dir,
        "dirty.csv",
        &[
            "HBL001,ABCU1234567,,abc,PK,N/A,1.5",
            "HBL001,ABCU1234567,,4,PK,40,",
        ],
    )
    .unwrap();

    let response = create_test_api(&dir)
        .generate_report(&manifest, None)
        .unwrap();

    assert!(response
        .content
        .starts_with("ABCU1234567 / \nTOTAL: 4 PKGS / 40 KG / 1.5 CBM\n"));
}

/// 上传记录: 舱单与映射文件各记录一次,不重复
#[test]
fn test_upload_log_records_each_file_once() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "m.csv", &["HBL001,ABCU1234567,1,1,PK,1,1"]).unwrap();
    let mapping = write_csv(&dir, "extra.csv", &["HBL,INFO", "HBL001,SHOES"]).unwrap();

    let api = create_test_api(&dir);
    api.generate_report(&manifest, Some(&mapping)).unwrap();
    api.generate_report(&manifest, Some(&mapping)).unwrap();

    assert_eq!(read_to_string(&upload_log_path(&dir)), "extra.csv\nm.csv\n");
    assert_eq!(
        api.read_upload_log().unwrap(),
        Some("extra.csv\nm.csv\n".to_string())
    );
}

/// 关闭上传记录时不写日志文件
#[test]
fn test_record_uploads_disabled() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir, "m.csv", &["HBL001,ABCU1234567,1,1,PK,1,1"]).unwrap();

    let options = ReportOptions {
        record_uploads: false,
        ..test_options(&dir)
    };
    SrReportApi::new(options)
        .generate_report(&manifest, None)
        .unwrap();

    assert!(!upload_log_path(&dir).exists());
}
