use cs_project::{CatalogDef, LayoutKind, load};
use std::path::PathBuf;

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

#[test]
fn eight_cells_demo_loads() {
    let project = load(&demos_dir().join("eight_cells.yaml")).unwrap();
    assert_eq!(project.layout, LayoutKind::Tabs);
    assert_eq!(project.cells.len(), 8);
    let catalog = project.build_catalog().unwrap();
    assert_eq!(catalog.len(), 8);
}

#[test]
fn sidebar_demo_loads() {
    let project = load(&demos_dir().join("sidebar.yaml")).unwrap();
    assert_eq!(project.layout, LayoutKind::Sidebar);
    assert_eq!(project.cells[0].speed_multiplier, 5);
    assert_eq!(project.build_catalog().unwrap().len(), 4);
}

#[test]
fn custom_catalog_demo_loads() {
    let project = load(&demos_dir().join("custom_catalog.json")).unwrap();
    assert!(matches!(project.catalog, CatalogDef::Custom { ref entries } if entries.len() == 2));
    assert_eq!(project.cells[1].chemistry, "LTO");
}
