//! End-to-end browsing scenarios against the built-in catalog.

use sunpower_catalog::{
    Catalog, CatalogError, CategoryFilter, ProductBrowser, ProductCategory, ProductRecord,
};

fn visible_ids(browser: &ProductBrowser) -> Vec<u32> {
    browser.visible().iter().map(|r| r.id).collect()
}

#[test]
fn mv_switchgear_cycle_and_jumps() {
    let mut browser = ProductBrowser::new(Catalog::builtin());
    assert_eq!(browser.catalog().len(), 26);

    browser.set_category("mv-switchgear").unwrap();
    assert_eq!(visible_ids(&browser), vec![10, 11, 12, 13, 14]);

    // next() four times from 0 lands on the last record, the fifth wraps home.
    for _ in 0..4 {
        browser.next();
    }
    assert_eq!(browser.active_index(), 4);
    browser.next();
    assert_eq!(browser.active_index(), 0);

    browser.jump_to(4).unwrap();
    browser.jump_to(0).unwrap();
    assert_eq!(browser.active_product().unwrap().id, 10);
}

#[test]
fn switching_from_all_at_index_ten_resets_to_first_drive() {
    let mut browser = ProductBrowser::new(Catalog::builtin());
    assert_eq!(browser.active_category(), CategoryFilter::All);
    assert_eq!(browser.visible().len(), 26);

    browser.jump_to(10).unwrap();
    assert_eq!(browser.active_product().unwrap().id, 11);

    browser.set_category("drives-automation").unwrap();
    assert_eq!(browser.visible().len(), 12);
    assert_eq!(visible_ids(&browser), (15..=26).collect::<Vec<_>>());
    assert_eq!(browser.active_index(), 0);
    assert_eq!(browser.active_product().unwrap().id, 15);
}

#[test]
fn category_switch_always_resets_from_every_position() {
    let catalog = Catalog::builtin();
    for from in CategoryFilter::all_filters() {
        for to in CategoryFilter::all_filters() {
            let mut browser = ProductBrowser::with_category(catalog.clone(), from);
            let last = browser.visible().len() - 1;
            browser.jump_to(last).unwrap();
            browser.set_category(to.id()).unwrap();
            assert_eq!(browser.active_index(), 0, "{} -> {}", from, to);
        }
    }
}

#[test]
fn open_modal_is_unaffected_by_category_change() {
    let mut browser = ProductBrowser::new(Catalog::builtin());
    browser.set_category("power-transfer").unwrap();
    browser.jump_to(2).unwrap();
    let opened = browser.open_active().unwrap();
    assert_eq!(opened.id, 3);

    browser.set_category("distribution").unwrap();
    browser.next();
    assert_eq!(browser.modal().selected().unwrap().id, 3);
    assert_eq!(browser.snapshot().modal.product.unwrap().name, "Furnace Transformers");
}

#[test]
fn reopening_shows_the_new_product() {
    let mut browser = ProductBrowser::new(Catalog::builtin());
    browser.open_product(4).unwrap();
    browser.close_modal();

    let closed = browser.snapshot();
    assert!(!closed.modal.is_open);
    assert!(closed.modal.product.is_none());

    browser.open_product(19).unwrap();
    let view = browser.snapshot();
    assert!(view.modal.is_open);
    assert_eq!(view.modal.product.unwrap().name, "Crushers");
}

#[test]
fn empty_category_renders_nothing() {
    let only_drives = Catalog::builtin()
        .records()
        .iter()
        .filter(|r| r.category == ProductCategory::DrivesAutomation)
        .map(|r| ProductRecord::clone(r))
        .collect();
    let catalog = Catalog::from_records(only_drives).unwrap();
    let mut browser = ProductBrowser::new(catalog);

    browser.set_category("distribution").unwrap();
    assert!(browser.visible().is_empty());
    assert_eq!(browser.next(), None);
    assert_eq!(browser.prev(), None);
    assert_eq!(browser.open_active().unwrap_err(), CatalogError::EmptyCatalogView);
    assert!(!browser.modal().is_open());

    let view = browser.snapshot();
    assert!(view.active_product.is_none());
    assert!(view.active_index.is_none());
    assert!(view.peer_tiles.is_empty());
    assert_eq!(view.counter_label, "");
}

#[test]
fn snapshot_serializes_for_the_frontend() {
    let mut browser = ProductBrowser::new(Catalog::builtin());
    browser.set_category("ehv-switchgear").unwrap();
    let json = serde_json::to_value(browser.snapshot()).unwrap();

    assert_eq!(json["activeCategory"], "ehv-switchgear");
    assert_eq!(json["viewMode"], "product");
    assert_eq!(json["activeProduct"]["category"], "ehv-switchgear");
    assert_eq!(json["activeProduct"]["categoryLabel"], "EHV Switchgear");
    assert_eq!(json["activeProduct"]["specs"][0]["label"], "Voltage");
    assert_eq!(json["position"]["current"], 1);
    assert_eq!(json["position"]["total"], 3);
    assert_eq!(json["modal"]["isOpen"], false);
}
