use compound_lookup_catalog::{AromaFilter, CompoundFilter};
use compound_lookup_db::*;
use rusqlite::params;

fn insert(
    conn: &Connection,
    cas: &str,
    name_en: &str,
    name_cn: &str,
    category: Option<&str>,
    has_aroma: Option<i64>,
) {
    conn.execute(
        "INSERT INTO compounds (cas_number, compound_name_en, compound_name_cn, category, has_aroma)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![cas, name_en, name_cn, category, has_aroma],
    )
    .unwrap();
}

fn setup_db() -> Connection {
    let conn = open_memory().unwrap();
    insert(&conn, "64-17-5", "Ethanol", "乙醇", Some("Alcohol"), Some(1));
    insert(&conn, "7664-41-7", "Ammonia", "氨", Some("Inorganic"), None);
    insert(&conn, "98-86-2", "Acetophenone", "苯乙酮", Some("Ketone"), Some(0));
    insert(&conn, "100-52-7", "Benzaldehyde", "苯甲醛", None, Some(1));
    conn
}

fn cas_list(results: &[compound_lookup_catalog::Compound]) -> Vec<&str> {
    let mut ids: Vec<&str> = results.iter().map(|c| c.cas_number.as_str()).collect();
    ids.sort();
    ids
}

#[test]
fn empty_filter_returns_everything() {
    let conn = setup_db();
    let results = search_compounds(&conn, &CompoundFilter::new()).unwrap();
    assert_eq!(results.len(), 4);
}

#[test]
fn identifier_substring_matches_both() {
    let conn = setup_db();
    let results = search_compounds(&conn, &CompoundFilter::new().cas_number("64")).unwrap();
    assert_eq!(cas_list(&results), vec!["64-17-5", "7664-41-7"]);
}

#[test]
fn blank_field_imposes_no_constraint() {
    let conn = setup_db();
    let blank = CompoundFilter::new().cas_number("64").category("   ");
    let results = search_compounds(&conn, &blank).unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn fields_combine_with_and() {
    let conn = setup_db();
    let f = CompoundFilter::new().cas_number("64").compound_name_en("eth");
    let results = search_compounds(&conn, &f).unwrap();
    assert_eq!(cas_list(&results), vec!["64-17-5"]);
}

#[test]
fn ascii_matching_is_case_insensitive() {
    let conn = setup_db();
    let results = search_compounds(&conn, &CompoundFilter::new().compound_name_en("BENZ")).unwrap();
    assert_eq!(cas_list(&results), vec!["100-52-7"]);
}

#[test]
fn chinese_name_substring() {
    let conn = setup_db();
    let results = search_compounds(&conn, &CompoundFilter::new().compound_name_cn("苯")).unwrap();
    assert_eq!(cas_list(&results), vec!["100-52-7", "98-86-2"]);
}

#[test]
fn category_filter_skips_null_category() {
    let conn = setup_db();
    let results = search_compounds(&conn, &CompoundFilter::new().category("o")).unwrap();
    // Alcohol, Inorganic, Ketone all contain "o"; the NULL category row never matches
    assert_eq!(cas_list(&results), vec!["64-17-5", "7664-41-7", "98-86-2"]);
}

#[test]
fn aromatic_excludes_false_and_null() {
    let conn = setup_db();
    let f = CompoundFilter::new().aroma(AromaFilter::Aromatic);
    let results = search_compounds(&conn, &f).unwrap();
    assert_eq!(cas_list(&results), vec!["100-52-7", "64-17-5"]);
    assert!(results.iter().all(|c| c.aromatic()));
}

#[test]
fn not_aromatic_includes_null() {
    let conn = setup_db();
    let f = CompoundFilter::new().aroma(AromaFilter::NotAromatic);
    let results = search_compounds(&conn, &f).unwrap();
    assert_eq!(cas_list(&results), vec!["7664-41-7", "98-86-2"]);
    let ammonia = results.iter().find(|c| c.cas_number == "7664-41-7").unwrap();
    assert_eq!(ammonia.has_aroma, None);
}

#[test]
fn wildcards_in_input_are_literal() {
    let conn = setup_db();
    insert(&conn, "1-1-1", "50% solution", "", None, None);
    let results = search_compounds(&conn, &CompoundFilter::new().compound_name_en("%")).unwrap();
    assert_eq!(cas_list(&results), vec!["1-1-1"]);
    let results = search_compounds(&conn, &CompoundFilter::new().cas_number("_")).unwrap();
    assert!(results.is_empty());
}

#[test]
fn injection_text_is_inert() {
    let conn = setup_db();
    let f = CompoundFilter::new().cas_number("' OR 1=1 --");
    let results = search_compounds(&conn, &f).unwrap();
    assert!(results.is_empty());
}

#[test]
fn batch_lookup_is_exact() {
    let conn = setup_db();
    let ids = vec!["64-17-5".to_string(), "64".to_string(), "999-99-9".to_string()];
    let results = find_compounds_by_cas(&conn, &ids).unwrap();
    assert_eq!(cas_list(&results), vec!["64-17-5"]);
}

#[test]
fn batch_lookup_tolerates_duplicates() {
    let conn = setup_db();
    let ids = vec!["64-17-5".to_string(), "64-17-5".to_string()];
    let results = find_compounds_by_cas(&conn, &ids).unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn batch_lookup_empty_input() {
    let conn = setup_db();
    assert!(find_compounds_by_cas(&conn, &[]).unwrap().is_empty());
}

#[test]
fn batch_lookup_rejects_oversized_input() {
    let conn = setup_db();
    let ids = vec!["x".to_string(); MAX_BATCH_PARAMS + 1];
    let err = find_compounds_by_cas(&conn, &ids).unwrap_err();
    assert!(matches!(err, QueryError::TooManyIdentifiers { .. }));
}

#[test]
fn get_by_cas() {
    let conn = setup_db();
    let ethanol = get_compound_by_cas(&conn, "64-17-5").unwrap().unwrap();
    assert_eq!(ethanol.compound_name_en.as_deref(), Some("Ethanol"));
    assert!(ethanol.aromatic());
    assert!(get_compound_by_cas(&conn, "64-17").unwrap().is_none());
}

#[test]
fn loose_column_types_read_as_text() {
    let conn = setup_db();
    conn.execute(
        "INSERT INTO compounds (cas_number, molecular_weight, ri_polar, has_aroma)
         VALUES ('67-64-1', 58.08, 812, 'yes')",
        [],
    )
    .unwrap();
    let acetone = get_compound_by_cas(&conn, "67-64-1").unwrap().unwrap();
    assert_eq!(acetone.molecular_weight.as_deref(), Some("58.08"));
    assert_eq!(acetone.ri_polar.as_deref(), Some("812"));
    assert_eq!(acetone.has_aroma, Some(false));
    assert_eq!(acetone.odor, None);
}

#[test]
fn whole_real_values_keep_decimal() {
    let conn = setup_db();
    conn.execute(
        "INSERT INTO compounds (cas_number, molecular_weight) VALUES ('7732-18-5', 18.0)",
        [],
    )
    .unwrap();
    let water = get_compound_by_cas(&conn, "7732-18-5").unwrap().unwrap();
    assert_eq!(water.molecular_weight.as_deref(), Some("18.0"));
}

#[test]
fn odd_aroma_values_agree_across_display_filters_and_stats() {
    let conn = open_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO compounds (cas_number, has_aroma) VALUES
             ('1-00-1', 'yes'), ('1-00-2', 2), ('1-00-3', 'true'),
             ('1-00-4', 1), ('1-00-5', '1'), ('1-00-6', NULL), ('1-00-7', 0)",
    )
    .unwrap();

    let aromatic = search_compounds(&conn, &CompoundFilter::new().aroma(AromaFilter::Aromatic))
        .unwrap();
    let not_aromatic =
        search_compounds(&conn, &CompoundFilter::new().aroma(AromaFilter::NotAromatic)).unwrap();
    let all = search_compounds(&conn, &CompoundFilter::new()).unwrap();

    let mut shown_aromatic: Vec<&str> = all
        .iter()
        .filter(|c| c.aromatic())
        .map(|c| c.cas_number.as_str())
        .collect();
    shown_aromatic.sort();
    assert_eq!(cas_list(&aromatic), shown_aromatic);
    assert_eq!(cas_list(&aromatic), vec!["1-00-4", "1-00-5"]);
    assert_eq!(aromatic.len() + not_aromatic.len(), all.len());
    assert!(not_aromatic.iter().all(|c| !c.aromatic()));

    let stats = catalog_stats(&conn).unwrap();
    assert_eq!(stats.compounds, 7);
    assert_eq!(stats.aromatic, 2);
    assert_eq!(stats.not_aromatic, 5);
}

#[test]
fn stats_counts() {
    let conn = setup_db();
    let stats = catalog_stats(&conn).unwrap();
    assert_eq!(
        stats,
        CatalogStats {
            compounds: 4,
            aromatic: 2,
            not_aromatic: 2,
            categories: 3,
        }
    );
}

#[test]
fn categories_are_sorted_with_counts() {
    let conn = setup_db();
    insert(&conn, "71-23-8", "Propanol", "丙醇", Some("Alcohol"), Some(0));
    insert(&conn, "0-0-0", "Blank", "", Some("  "), None);
    let cats = list_categories(&conn).unwrap();
    assert_eq!(
        cats,
        vec![
            ("Alcohol".to_string(), 2),
            ("Inorganic".to_string(), 1),
            ("Ketone".to_string(), 1),
        ]
    );
}
