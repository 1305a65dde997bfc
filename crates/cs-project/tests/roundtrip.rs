use cs_chemistry::{CatalogPreset, ChemistryProfile};
use cs_project::{
    CatalogDef, CellDef, LayoutKind, Project, ProjectError, ValidationError, load, load_json,
    load_yaml, save, save_json, save_yaml,
};
use cs_sim::Mode;

fn mixed_project() -> Project {
    Project {
        version: 1,
        name: "Bench".to_string(),
        catalog: CatalogDef::preset(CatalogPreset::Reference),
        layout: LayoutKind::Tabs,
        cells: vec![
            CellDef::with_label("Cell 1"),
            CellDef {
                label: "Cell 2".to_string(),
                chemistry: "LFP".to_string(),
                series: 10,
                parallel: 5,
                mode: Mode::Discharging,
                duration_s: 100,
                speed_multiplier: 7,
            },
        ],
    }
}

#[test]
fn roundtrip_yaml() {
    let project = mixed_project();
    let path = std::env::temp_dir().join("cs_project_roundtrip.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_custom_catalog() {
    let mut project = Project::sidebar_default();
    project.catalog = CatalogDef::custom(vec![
        ChemistryProfile::new("Sodium-Ion", 3.1, 1.5, 0.9).unwrap(),
    ]);
    project.cells[0].chemistry = "Sodium-Ion".to_string();

    let path = std::env::temp_dir().join("cs_project_roundtrip.json");
    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn extension_selects_format() {
    let project = Project::tabbed_default();
    let path = std::env::temp_dir().join("cs_project_by_extension.json");
    save(&path, &project).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.trim_start().starts_with('{'));
    assert_eq!(load(&path).unwrap(), project);
}

#[test]
fn yaml_uses_defaults_for_optional_fields() {
    let yaml = r#"
version: 1
name: Minimal
cells:
  - label: Only
    chemistry: NMC
    series: 2
    parallel: 1
    duration_s: 30
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(project.layout, LayoutKind::Tabs);
    assert_eq!(project.catalog, CatalogDef::preset(CatalogPreset::Reference));
    assert_eq!(project.cells[0].mode, Mode::Charging);
    assert_eq!(project.cells[0].speed_multiplier, 1);
    cs_project::validate_project(&project).unwrap();
}

#[test]
fn yaml_catalog_and_layout_spelling() {
    let yaml = r#"
version: 1
name: Sidebar
catalog:
  type: preset
  preset: compact
layout: sidebar
cells:
  - label: Cell 1
    chemistry: NiMH
    series: 1
    parallel: 1
    mode: Discharging
    duration_s: 10
    speed_multiplier: 3
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(project.catalog, CatalogDef::preset(CatalogPreset::Compact));
    assert_eq!(project.layout, LayoutKind::Sidebar);
    assert_eq!(project.cells[0].mode, Mode::Discharging);
}

#[test]
fn invalid_project_is_not_written() {
    let mut project = mixed_project();
    project.cells[1].series = 0;
    let path = std::env::temp_dir().join("cs_project_invalid_not_written.yaml");
    let _ = std::fs::remove_file(&path);

    let err = save_yaml(&path, &project).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Validation(ValidationError::InvalidValue { .. })
    ));
    assert!(!path.exists());
}
