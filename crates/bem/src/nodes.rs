//! Node-level modifier helpers
//!
//! Thin wrappers that read a node's class list from a [`NodeQuery`] host,
//! run the modifier accessor over it and write edits back.

use bem_decl::{EmitTarget, NodeQuery};
use bem_syntax::{camel_to_element, ModValue, Modifiers, Syntax};

use crate::{BemError, BemResult};

/// Modifiers currently on `node`
pub fn mods<H: NodeQuery>(syntax: &Syntax, host: &H, node: &H::Node) -> Modifiers {
    syntax.extract_modifiers(&host.read_class_list(node))
}

pub fn get_mod<H: NodeQuery>(syntax: &Syntax, host: &H, node: &H::Node, key: &str) -> Option<ModValue> {
    syntax.get_modifier(&host.read_class_list(node), key)
}

pub fn has_mod<H: NodeQuery>(
    syntax: &Syntax,
    host: &H,
    node: &H::Node,
    key: &str,
    value: Option<&str>,
) -> bool {
    syntax.has_modifier(&host.read_class_list(node), key, value)
}

/// Set `key` (to `value`, or as a flag) on the node's base identifier and
/// emit `setmod` with `[key, value]`.
pub fn set_mod<H: NodeQuery>(
    syntax: &Syntax,
    host: &mut H,
    node: &H::Node,
    key: &str,
    value: Option<&str>,
) -> BemResult<()> {
    let mut classes = host.read_class_list(node);
    let base = syntax
        .base_identifier(&classes)
        .ok_or_else(|| BemError::NoBase(format!("{node:?}")))?
        .to_string();

    let edit = syntax.compute_set_edit(&classes, &base, key, value)?;
    tracing::debug!("setMod {:?}: -{:?} +{}", node, edit.remove, edit.add);
    edit.apply(&mut classes);
    host.write_class_list(node, classes);

    let detail = [key.to_string(), ModValue::from_option(value).to_string()];
    host.emit(EmitTarget::Node(node), "setmod", &detail);
    Ok(())
}

/// Remove `key` (only when it holds `value`, if given) and emit `delmod`.
/// Returns whether anything was removed.
pub fn del_mod<H: NodeQuery>(
    syntax: &Syntax,
    host: &mut H,
    node: &H::Node,
    key: &str,
    value: Option<&str>,
) -> bool {
    let mut classes = host.read_class_list(node);
    let Some(base) = syntax.base_identifier(&classes).map(str::to_string) else {
        return false;
    };
    let Some(edit) = syntax.compute_delete_edit(&classes, &base, key, value) else {
        return false;
    };

    tracing::debug!("delMod {:?}: -{}", node, edit.remove);
    edit.apply(&mut classes);
    host.write_class_list(node, classes);

    let mut detail = vec![key.to_string()];
    detail.extend(value.map(str::to_string));
    host.emit(EmitTarget::Node(node), "delmod", &detail);
    true
}

/// Nodes carrying the modifier
pub fn by_mod<H: NodeQuery>(
    syntax: &Syntax,
    host: &H,
    nodes: &[H::Node],
    key: &str,
    value: Option<&str>,
) -> Vec<H::Node> {
    filter(syntax, host, nodes, key, value, false)
}

/// Nodes not carrying the modifier
pub fn by_not_mod<H: NodeQuery>(
    syntax: &Syntax,
    host: &H,
    nodes: &[H::Node],
    key: &str,
    value: Option<&str>,
) -> Vec<H::Node> {
    filter(syntax, host, nodes, key, value, true)
}

fn filter<H: NodeQuery>(
    syntax: &Syntax,
    host: &H,
    nodes: &[H::Node],
    key: &str,
    value: Option<&str>,
    inverse: bool,
) -> Vec<H::Node> {
    nodes
        .iter()
        .filter(|node| {
            let classes = host.read_class_list(node);
            match syntax.base_identifier(&classes) {
                Some(base) => syntax.compute_filter(&classes, base, key, value, inverse),
                None => inverse,
            }
        })
        .cloned()
        .collect()
}

/// Descendants that are `element` of any block the node belongs to.
/// `element` may be given camel-cased (`listItem`).
pub fn find_elem<H: NodeQuery>(
    syntax: &Syntax,
    host: &H,
    node: &H::Node,
    element: &str,
) -> BemResult<Vec<H::Node>> {
    let element = camel_to_element(element);
    let mut found: Vec<H::Node> = Vec::new();

    for block in syntax.block_names(&host.read_class_list(node)) {
        let name = syntax.build_element_name(&block, &element)?;
        for hit in host.find_within(node, &format!(".{name}")) {
            if !found.contains(&hit) {
                found.push(hit);
            }
        }
    }

    Ok(found)
}

/// Closest ancestor-or-self carrying the block identifier of `node`
pub fn block<H: NodeQuery>(syntax: &Syntax, host: &H, node: &H::Node) -> Option<H::Node> {
    let classes = host.read_class_list(node);
    let block = syntax.block_of(syntax.base_identifier(&classes)?)?;
    host.closest(node, &format!(".{block}"))
}

/// `element` nodes of the block `node` belongs to, siblings included
pub fn block_elem<H: NodeQuery>(
    syntax: &Syntax,
    host: &H,
    node: &H::Node,
    element: &str,
) -> BemResult<Vec<H::Node>> {
    match block(syntax, host, node) {
        Some(block) => find_elem(syntax, host, &block, element),
        None => Ok(Vec::new()),
    }
}
