//! End-to-end tests for the dashboard handle.
//!
//! Each test writes catalogue/survey exports to a temp dir, opens a
//! `Dashboard` on them and checks the computed views.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use impulse_rs::survey::{Sentinel, SurveyQuestion};
use impulse_rs::{Attribute, Dashboard, DashboardConfig, Error, SurveySchema, YesNo};

// ============================================================================
// Helper: fixture files
// ============================================================================

const CATALOG: &str = "\
Site,Type,Model organism,Cell type,Assay format
Oslo,HTS,Human,HeLa,Biochem
Oslo,HTS,Human,HEK293,Cell-based
Oslo,HCS,Mouse,,Cell-based
Berlin,HTS,Zebrafish,,Phenotypic
Berlin,,Human,HeLa,Biochem
Prague,Fragment,NA,,Biophysical
";

const SURVEY: &str = "\
Mapping data standards,,,,
Name,ELN [yes/no],FAIR [yes/no],Scripting [yes/no],
Oslo,\"Yes, since 2019\",No,yes,
Berlin,Planned,,,not filled
Prague,YES,Yes - partially,No,
";

fn survey_schema() -> SurveySchema {
    SurveySchema {
        institute_column: "Name".into(),
        questions: vec![
            SurveyQuestion::new("ELN [yes/no]", "ELN"),
            SurveyQuestion::new("FAIR [yes/no]", "FAIR"),
            SurveyQuestion::new("Scripting [yes/no]", "Scripting"),
        ],
        sentinel: Some(Sentinel { column: "Unnamed: 4".into(), value: "not filled".into() }),
    }
}

fn fixture() -> (TempDir, DashboardConfig) {
    let dir = TempDir::new().unwrap();
    let catalog_path: PathBuf = dir.path().join("catalog.csv");
    let survey_path: PathBuf = dir.path().join("survey.csv");
    fs::write(&catalog_path, CATALOG).unwrap();
    fs::write(&survey_path, SURVEY).unwrap();

    let mut config = DashboardConfig::default();
    config.catalog_path = catalog_path;
    config.survey_path = Some(survey_path);
    config.survey.schema = survey_schema();
    (dir, config)
}

// ============================================================================
// 1. Loading
// ============================================================================

#[test]
fn test_open_loads_both_tables() {
    let (_dir, config) = fixture();
    let dashboard = Dashboard::open(config).unwrap();

    assert_eq!(dashboard.catalog().len(), 5);
    assert_eq!(dashboard.catalog().dropped(), 1);
    assert_eq!(dashboard.sites(), vec!["Berlin", "Oslo", "Prague"]);
    assert_eq!(dashboard.survey().map(|s| s.shape()), Some((3, 2)));
}

#[test]
fn test_missing_catalogue_file_is_fatal() {
    let mut config = DashboardConfig::default();
    config.catalog_path = PathBuf::from("/definitely/not/here.csv");
    config.survey_path = None;
    assert!(Dashboard::open(config).is_err());
}

#[test]
fn test_config_file_round_trip() {
    let (dir, config) = fixture();
    let config_path = dir.path().join("dashboard.json");
    fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = DashboardConfig::from_json_file(&config_path).unwrap();
    assert_eq!(loaded, config);
}

// ============================================================================
// 2. Partner views
// ============================================================================

#[test]
fn test_partner_overview() {
    let (_dir, config) = fixture();
    let dashboard = Dashboard::open(config).unwrap();

    let overview = dashboard.partner_overview("Oslo");
    assert_eq!(overview.type_chart.title, "Types of screening for Oslo");
    assert_eq!(overview.type_chart.labels, vec!["HTS", "HCS"]);
    assert_eq!(overview.type_chart.values, vec![2, 1]);
    assert_eq!(overview.details.len(), 3);
    assert_eq!(overview.details[2].cell_type, None);
}

#[test]
fn test_attribute_breakdown() {
    let (_dir, config) = fixture();
    let dashboard = Dashboard::open(config).unwrap();

    let breakdown = dashboard.attribute_breakdown("Oslo", Attribute::AssayFormat).unwrap();
    assert_eq!(breakdown.counts.get("Cell-based"), Some(2));
    assert_eq!(breakdown.counts.get("Biochem"), Some(1));
    assert_eq!(breakdown.per_type.get("HCS", "Cell-based"), Some(1));
    assert_eq!(breakdown.counts_chart.series[0].text, Some(vec!["2".to_string(), "1".to_string()]));

    let err = dashboard.attribute_breakdown("Oslo", Attribute::Type).unwrap_err();
    assert!(matches!(err, Error::UnknownAttribute(_)));
}

#[test]
fn test_breakdown_skips_missing_values() {
    let (_dir, config) = fixture();
    let dashboard = Dashboard::open(config).unwrap();

    let breakdown = dashboard.attribute_breakdown("Oslo", Attribute::CellType).unwrap();
    assert_eq!(breakdown.counts.total(), 2);
}

// ============================================================================
// 3. Graphs
// ============================================================================

#[test]
fn test_overview_graph() {
    let (_dir, config) = fixture();
    let dashboard = Dashboard::open(config).unwrap();

    let graph = dashboard.overview_graph();
    // Prague's organism is "NA" → missing → its Assay→Org edge is skipped.
    assert_eq!(graph.edge_count(), 5 * 3 - 1);
    assert!(!graph.has_node("HeLa"));
    assert_eq!(graph.nodes[0].id, "Oslo");
}

#[test]
fn test_partner_graph_uses_partner_pattern() {
    let (_dir, config) = fixture();
    let dashboard = Dashboard::open(config).unwrap();

    let graph = dashboard.partner_graph("Oslo");
    assert!(graph.has_node("HeLa"));
    assert!(!graph.has_node("Berlin"));
    // Third Oslo row has no cell type: two of its four edges are skipped.
    assert_eq!(graph.edge_count(), 4 + 4 + 2);
}

// ============================================================================
// 4. Survey heatmap
// ============================================================================

#[test]
fn test_survey_heatmap() {
    let (_dir, config) = fixture();
    let dashboard = Dashboard::open(config).unwrap();

    let heatmap = dashboard.survey_heatmap().unwrap();
    assert_eq!(heatmap.x, vec!["Oslo", "Prague"]);
    assert_eq!(heatmap.y, vec!["ELN", "FAIR", "Scripting"]);
    assert_eq!(heatmap.z, vec![vec![1, 1], vec![0, 1], vec![1, 0]]);
    assert_eq!(heatmap.tick_text, vec!["No", "Yes"]);

    let survey = dashboard.survey().unwrap();
    assert_eq!(survey.answer("FAIR", "Prague"), Some(YesNo::Yes));
}

#[test]
fn test_heatmap_without_survey() {
    let (_dir, mut config) = fixture();
    config.survey_path = None;
    let dashboard = Dashboard::open(config).unwrap();
    assert!(matches!(dashboard.survey_heatmap(), Err(Error::NotFound(_))));
}
