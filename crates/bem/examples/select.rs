//! Example: a select box driven by BEM declarations
//!
//! Run with `RUST_LOG=debug` to see bindings and modifier edits.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use bem::dom::{Document, NodeId};
use bem::{Bem, BemResult, Config, Declaration, Event, NodeQuery, SharedSyntax};
use tracing_subscriber::EnvFilter;

/// Shared scope for the select handlers
struct Select {
    syntax: SharedSyntax,
    value: RefCell<Option<String>>,
}

/// Handlers have nowhere to return errors to
fn report(result: BemResult<()>) {
    if let Err(e) = result {
        tracing::warn!("Modifier edit failed: {}", e);
    }
}

fn on_setmod(select: &Select, doc: &mut Document, node: &NodeId, ev: &mut Event<NodeId>) {
    if ev.detail == ["state", "active"] {
        let syntax = select.syntax.current();
        if let Ok(lists) = bem::find_elem(&syntax, &*doc, node, "list") {
            for list in lists {
                report(bem::set_mod(&syntax, doc, &list, "visible", None));
            }
        }
    }
}

fn on_delmod(select: &Select, doc: &mut Document, node: &NodeId, ev: &mut Event<NodeId>) {
    if ev.detail == ["state", "active"] {
        let syntax = select.syntax.current();
        if let Ok(lists) = bem::find_elem(&syntax, &*doc, node, "list") {
            for list in lists {
                bem::del_mod(&syntax, doc, &list, "visible", None);
            }
        }
    }
}

fn on_click(select: &Select, doc: &mut Document, node: &NodeId, _: &mut Event<NodeId>) {
    let syntax = select.syntax.current();
    if bem::has_mod(&syntax, &*doc, node, "state", None) {
        bem::del_mod(&syntax, doc, node, "state", Some("active"));
    } else {
        report(bem::set_mod(&syntax, doc, node, "state", Some("active")));
    }
}

fn on_item_click(select: &Select, doc: &mut Document, node: &NodeId, _: &mut Event<NodeId>) {
    let syntax = select.syntax.current();
    let text = doc.text_content(*node);

    match bem::block_elem(&syntax, &*doc, node, "valueText") {
        Ok(targets) => {
            for target in targets {
                if let Err(e) = doc.set_text_content(target, &text) {
                    tracing::warn!("Cannot show value: {}", e);
                }
            }
        }
        Err(e) => tracing::warn!("Cannot find value text: {}", e),
    }
    *select.value.borrow_mut() = Some(text);

    if let Some(block) = bem::block(&syntax, &*doc, node) {
        bem::del_mod(&syntax, doc, &block, "state", Some("active"));
    }
}

fn build_page(doc: &mut Document) -> anyhow::Result<(NodeId, NodeId, NodeId, Vec<NodeId>)> {
    let page = doc.element(NodeId::ROOT, "body", "b-page")?;
    let select = doc.element(page, "div", "b-select")?;
    let text = doc.element(select, "span", "b-select__value-text")?;
    let list = doc.element(select, "ul", "b-select__list")?;

    let mut items = Vec::new();
    for city in ["Moscow", "Paris", "Berlin"] {
        let item = doc.element(list, "li", "b-select__list-item")?;
        doc.text(item, city)?;
        items.push(item);
    }
    Ok((page, select, text, items))
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bem: Bem<Document> = Bem::new(Config::default())?;
    let mut doc = Document::new();
    let (page, select, text, items) = build_page(&mut doc)?;

    let scope = Rc::new(Select {
        syntax: bem.shared_syntax(),
        value: RefCell::new(None),
    });

    bem.declare(
        &mut doc,
        "b-select",
        Declaration::new()
            .on("onSetmod", on_setmod)
            .on("onDelmod", on_delmod)
            .on("onClick", on_click)
            .element(
                "listItem",
                Declaration::new()
                    .on("onClick", on_item_click)
                    .on("onMouseover", |s: &Select, doc: &mut Document, node: &NodeId, _: &mut Event<NodeId>| {
                        report(bem::set_mod(&s.syntax.current(), doc, node, "state", Some("hover")));
                    })
                    .on("onMouseout", |s: &Select, doc: &mut Document, node: &NodeId, _: &mut Event<NodeId>| {
                        bem::del_mod(&s.syntax.current(), doc, node, "state", Some("hover"));
                    }),
            ),
        Rc::clone(&scope),
    )
    .context("declaring b-select")?;

    bem.declare(
        &mut doc,
        "b-page",
        Declaration::new().on("onClick", |s: &Select, doc: &mut Document, _: &NodeId, ev: &mut Event<NodeId>| {
            if doc.closest(&ev.target, ".b-select").is_none() {
                let syntax = s.syntax.current();
                for select in doc.query_all(".b-select") {
                    bem::del_mod(&syntax, doc, &select, "state", Some("active"));
                }
            }
        }),
        Rc::clone(&scope),
    )
    .context("declaring b-page")?;

    println!("fOS BEM v{}", bem::VERSION);

    doc.dispatch(select, "click", &[]);
    println!("open:   {}", doc.class_list(select).map(|c| c.value()).unwrap_or_default());

    doc.dispatch(items[1], "mouseover", &[]);
    doc.dispatch(items[1], "click", &[]);
    doc.dispatch(items[1], "mouseout", &[]);
    println!("picked: {:?} (shown: {})", scope.value.borrow(), doc.text_content(text));
    println!("closed: {}", doc.class_list(select).map(|c| c.value()).unwrap_or_default());

    doc.dispatch(select, "click", &[]);
    doc.dispatch(page, "click", &[]);
    println!("page:   {}", doc.class_list(select).map(|c| c.value()).unwrap_or_default());

    Ok(())
}
