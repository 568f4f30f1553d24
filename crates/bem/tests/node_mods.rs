//! Modifier helpers over the in-memory document

use std::cell::RefCell;
use std::rc::Rc;

use bem::dom::{Document, NodeId};
use bem::decl::DelegatedHandler;
use bem::{Bem, BemError, Event, ModValue, NodeQuery, PartialSyntax, Syntax};

fn menu_page() -> (Document, NodeId) {
    let mut doc = Document::new();
    let menu = doc
        .element(NodeId::ROOT, "div", "b-menu b-menu_open b-menu_theme_dark")
        .unwrap();
    (doc, menu)
}

#[test]
fn test_mods_projection() {
    let (doc, menu) = menu_page();
    let syntax = Syntax::default();

    let mods = bem::mods(&syntax, &doc, &menu);
    assert_eq!(mods.len(), 2);
    assert_eq!(mods["open"], ModValue::Flag);
    assert_eq!(mods["theme"], ModValue::from("dark"));

    assert!(bem::has_mod(&syntax, &doc, &menu, "theme", Some("dark")));
    assert!(!bem::has_mod(&syntax, &doc, &menu, "open", Some("yes")));
    assert_eq!(bem::get_mod(&syntax, &doc, &menu, "size"), None);
}

#[test]
fn test_set_mod_replaces_value() {
    let (mut doc, menu) = menu_page();
    let syntax = Syntax::default();

    bem::set_mod(&syntax, &mut doc, &menu, "theme", Some("light")).unwrap();

    assert_eq!(
        doc.read_class_list(&menu),
        vec!["b-menu", "b-menu_open", "b-menu_theme_light"]
    );
}

#[test]
fn test_set_mod_flag_and_twice() {
    let (mut doc, menu) = menu_page();
    let syntax = Syntax::default();

    bem::set_mod(&syntax, &mut doc, &menu, "disabled", None).unwrap();
    bem::set_mod(&syntax, &mut doc, &menu, "disabled", None).unwrap();

    let classes = doc.read_class_list(&menu);
    assert_eq!(classes.iter().filter(|c| *c == "b-menu_disabled").count(), 1);
}

#[test]
fn test_set_mod_targets_element_base() {
    let mut doc = Document::new();
    let item = doc.element(NodeId::ROOT, "li", "b-select__list-item").unwrap();
    let syntax = Syntax::default();

    bem::set_mod(&syntax, &mut doc, &item, "state", Some("hover")).unwrap();
    assert!(doc.has_class(item, "b-select__list-item_state_hover"));
}

#[test]
fn test_set_mod_without_base() {
    let mut doc = Document::new();
    let plain = doc.element(NodeId::ROOT, "div", "").unwrap();
    let syntax = Syntax::default();

    let err = bem::set_mod(&syntax, &mut doc, &plain, "open", None).unwrap_err();
    assert!(matches!(err, BemError::NoBase(_)));
}

#[test]
fn test_del_mod() {
    let (mut doc, menu) = menu_page();
    let syntax = Syntax::default();

    assert!(!bem::del_mod(&syntax, &mut doc, &menu, "theme", Some("light")));
    assert!(bem::has_mod(&syntax, &doc, &menu, "theme", None));

    assert!(bem::del_mod(&syntax, &mut doc, &menu, "theme", None));
    assert!(bem::del_mod(&syntax, &mut doc, &menu, "open", None));
    assert!(!bem::del_mod(&syntax, &mut doc, &menu, "open", None));
    assert_eq!(doc.read_class_list(&menu), vec!["b-menu"]);
}

#[test]
fn test_edits_emit_events() {
    let (mut doc, menu) = menu_page();
    let syntax = Syntax::default();
    let seen: Rc<RefCell<Vec<(String, Vec<String>)>>> = Rc::default();

    for event in ["setmod", "delmod"] {
        let sink = Rc::clone(&seen);
        let handler: DelegatedHandler<Document> =
            Rc::new(move |_: &mut Document, _: &NodeId, ev: &mut Event<NodeId>| {
                sink.borrow_mut().push((ev.name.clone(), ev.detail.clone()));
            });
        doc.delegate_on("document", event, ".b-menu", handler);
    }

    bem::set_mod(&syntax, &mut doc, &menu, "size", Some("l")).unwrap();
    bem::set_mod(&syntax, &mut doc, &menu, "focused", None).unwrap();
    bem::del_mod(&syntax, &mut doc, &menu, "size", Some("l"));
    bem::del_mod(&syntax, &mut doc, &menu, "missing", None);

    let strings = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_eq!(
        *seen.borrow(),
        vec![
            ("setmod".to_string(), strings(&["size", "l"])),
            ("setmod".to_string(), strings(&["focused", "true"])),
            ("delmod".to_string(), strings(&["size", "l"])),
        ]
    );
}

#[test]
fn test_by_mod_partitions_nodes() {
    let mut doc = Document::new();
    let list = doc.element(NodeId::ROOT, "ul", "b-list").unwrap();
    let a = doc.element(list, "li", "b-list__item b-list__item_checked").unwrap();
    let b = doc.element(list, "li", "b-list__item").unwrap();
    let c = doc.element(list, "li", "b-list__item b-list__item_checked_no").unwrap();
    let plain = doc.element(list, "li", "").unwrap();
    let syntax = Syntax::default();
    let nodes = [a, b, c, plain];

    assert_eq!(bem::by_mod(&syntax, &doc, &nodes, "checked", None), vec![a, c]);
    assert_eq!(bem::by_not_mod(&syntax, &doc, &nodes, "checked", None), vec![b, plain]);
    assert_eq!(bem::by_mod(&syntax, &doc, &nodes, "checked", Some("no")), vec![c]);
    assert_eq!(bem::by_not_mod(&syntax, &doc, &nodes, "checked", Some("no")), vec![a, b, plain]);
}

#[test]
fn test_find_elem_and_block() {
    let mut doc = Document::new();
    let select = doc.element(NodeId::ROOT, "div", "b-select b-select_open").unwrap();
    let list = doc.element(select, "ul", "b-select__list").unwrap();
    let first = doc.element(list, "li", "b-select__list-item").unwrap();
    let second = doc.element(list, "li", "b-select__list-item b-select__list-item_active").unwrap();
    let syntax = Syntax::default();

    assert_eq!(bem::find_elem(&syntax, &doc, &select, "listItem").unwrap(), vec![first, second]);
    assert_eq!(bem::find_elem(&syntax, &doc, &select, "list").unwrap(), vec![list]);
    assert!(bem::find_elem(&syntax, &doc, &first, "list").unwrap().is_empty());

    assert_eq!(bem::block(&syntax, &doc, &second), Some(select));
    assert_eq!(bem::block(&syntax, &doc, &select), Some(select));
    assert_eq!(bem::block(&syntax, &doc, &NodeId::ROOT), None);
}

#[test]
fn test_block_elem_reaches_siblings() {
    let mut doc = Document::new();
    let select = doc.element(NodeId::ROOT, "div", "b-select").unwrap();
    let text = doc.element(select, "span", "b-select__value-text").unwrap();
    let list = doc.element(select, "ul", "b-select__list").unwrap();
    let item = doc.element(list, "li", "b-select__list-item b-select__list-item_state_hover").unwrap();
    let outside = doc.element(NodeId::ROOT, "span", "b-select__value-text").unwrap();
    let syntax = Syntax::default();

    assert_eq!(bem::block_elem(&syntax, &doc, &item, "valueText").unwrap(), vec![text]);
    assert_eq!(bem::block_elem(&syntax, &doc, &select, "list").unwrap(), vec![list]);
    // detached from any block instance
    assert!(bem::block_elem(&syntax, &doc, &outside, "list").unwrap().is_empty());
    assert!(bem::block_elem(&syntax, &doc, &NodeId::ROOT, "list").unwrap().is_empty());
}

#[test]
fn test_find_elem_rejects_invalid_element() {
    let (doc, menu) = menu_page();
    let syntax = Syntax::default();

    assert!(matches!(
        bem::find_elem(&syntax, &doc, &menu, "bad item"),
        Err(BemError::Syntax(_))
    ));
}

#[test]
fn test_reconfigured_separator_isolates_old_names() {
    let (mut doc, menu) = menu_page();
    let mut bem: Bem<Document> = Bem::default();

    bem.configure(&PartialSyntax::new().modifier_separator("--")).unwrap();

    // old identifiers are no longer modifiers
    assert!(bem.mods(&doc, &menu).is_empty());

    bem.set_mod(&mut doc, &menu, "state", Some("open")).unwrap();
    assert!(doc.has_class(menu, "b-menu--state_open"));
    assert_eq!(bem.get_mod(&doc, &menu, "state"), Some(ModValue::from("open")));
}
