use super::*;

fn ethanol() -> Compound {
    Compound {
        cas_number: "64-17-5".to_string(),
        compound_name_en: Some("Ethanol".to_string()),
        compound_name_cn: Some("乙醇".to_string()),
        odor: Some("alcoholic,\nsweet".to_string()),
        has_aroma: Some(true),
        ..Compound::default()
    }
}

#[test]
fn truncate_cell_is_char_safe() {
    assert_eq!(truncate_cell("Ethanol", 10), "Ethanol");
    assert_eq!(truncate_cell("Acetophenone", 8), "Aceto...");
    assert_eq!(truncate_cell("苯乙酮苯乙酮", 5), "苯乙...");
    assert_eq!(truncate_cell("abcdef", 2), "ab");
}

#[test]
fn table_has_header_rule_and_rows() {
    let lines = render_table(
        &[ethanol(), Compound::new("7664-41-7")],
        &["cas_number", "compound_name_en", "has_aroma"],
        30,
    );
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("CAS"));
    assert!(lines[0].contains("Compound name"));
    assert!(lines[1].starts_with("---------"));
    assert!(lines[2].starts_with("64-17-5  "));
    assert!(lines[2].ends_with("yes"));
    assert!(lines[3].starts_with("7664-41-7"));
    assert!(lines[3].ends_with("no"));
}

#[test]
fn table_flattens_newlines() {
    let lines = render_table(&[ethanol()], &["odor"], 40);
    assert_eq!(lines[2], "alcoholic, sweet");
}

#[test]
fn columns_resolve_case_insensitively() {
    let cols = resolve_columns(&["CAS_NUMBER".to_string(), " odor ".to_string()]).unwrap();
    assert_eq!(cols, vec!["cas_number", "odor"]);
    let err = resolve_columns(&["smell".to_string()]).unwrap_err();
    assert!(matches!(err, DisplayError::UnknownColumn(c) if c == "smell"));
}

#[test]
fn threshold_columns_are_detected() {
    assert!(!shows_thresholds(&DEFAULT_COLUMNS));
    assert!(shows_thresholds(&["cas_number", "threshold_detection"]));
}

#[test]
fn machine_readable_formats() {
    assert!(!OutputFormat::Table.is_machine_readable());
    assert!(OutputFormat::Csv.is_machine_readable());
}

#[test]
fn json_output_is_an_array() {
    let mut out = Vec::new();
    write_json(&[ethanol()], &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value[0]["cas_number"], "64-17-5");
    assert_eq!(value[0]["has_aroma"], true);
    assert!(value[0]["description"].is_null());
}

#[test]
fn csv_output_has_header_even_when_empty() {
    let mut out = Vec::new();
    write_csv(&[], &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("cas_number,molecular_weight,"));
}

#[test]
fn csv_output_quotes_embedded_newlines() {
    let mut out = Vec::new();
    write_csv(&[ethanol()], &mut out).unwrap();
    let mut rdr = csv::Reader::from_reader(out.as_slice());
    let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "64-17-5");
    assert_eq!(&rows[0][10], "alcoholic,\nsweet");
    assert_eq!(&rows[0][16], "yes");
}
