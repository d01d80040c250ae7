use super::*;
use crate::{Rgba8, template::dsl::TemplateBuilder};
use crate::layout::config::LayoutType;

fn tpl(id: &str) -> Template {
    TemplateBuilder::new(id, LayoutType::Single)
        .id(id)
        .background(Rgba8::BLACK)
        .build()
        .unwrap()
}

#[test]
fn save_inserts_replaces_and_activates() {
    let mut lib = TemplateLibrary::new();
    lib.save(tpl("a")).unwrap();
    lib.save(tpl("b")).unwrap();
    assert_eq!(lib.active().unwrap().id, "b");

    let mut renamed = tpl("a");
    renamed.name = "renamed".to_string();
    lib.save(renamed).unwrap();
    assert_eq!(lib.list().len(), 2);
    assert_eq!(lib.get("a").unwrap().name, "renamed");
    assert_eq!(lib.active().unwrap().id, "a");
}

#[test]
fn delete_keeps_active_snapshot() {
    let mut lib = TemplateLibrary::new();
    lib.save(tpl("a")).unwrap();
    assert!(lib.delete("a"));
    assert!(!lib.delete("a"));
    assert!(lib.list().is_empty());
    assert_eq!(lib.active().unwrap().id, "a");
}

#[test]
fn set_active_requires_known_id() {
    let mut lib = TemplateLibrary::new();
    lib.save(tpl("a")).unwrap();
    lib.save(tpl("b")).unwrap();
    assert_eq!(lib.set_active("a").unwrap().id, "a");
    assert!(lib.set_active("zzz").is_err());
}

#[test]
fn persisted_records_round_trip() {
    let mut lib = TemplateLibrary::new();
    lib.save(tpl("a")).unwrap();
    lib.save(tpl("b")).unwrap();
    let list = lib.templates_json().unwrap();
    let active = lib.active_json().unwrap();
    let back = TemplateLibrary::load(Some(&list), active.as_deref());
    assert_eq!(back, lib);
}

#[test]
fn corrupt_records_are_discarded_individually() {
    let good = tpl("ok").to_json().unwrap();
    let list = format!("[{good}, {{\"id\": \"broken\"}}, 17]");
    let lib = TemplateLibrary::load(Some(&list), Some("{not json"));
    assert_eq!(lib.list().len(), 1);
    assert_eq!(lib.list()[0].id, "ok");
    assert!(lib.active().is_none());
}

#[test]
fn active_record_failing_validation_is_discarded() {
    let mut t = tpl("a");
    t.id = String::new();
    let json = serde_json::to_string(&t).unwrap();
    assert!(parse_active_template(&json).is_none());
}
