//! Modifier Store Accessor
//!
//! Reads modifiers out of a node's class list and computes the edits needed
//! to change them. Nothing here mutates the class list; callers apply the
//! returned edits.

use std::collections::HashMap;

use crate::{ModValue, NameKind, ParsedName, Syntax, SyntaxResult};

/// Modifier key -> value, projected fresh from a class list
pub type Modifiers = HashMap<String, ModValue>;

/// Edit setting a modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetEdit {
    /// Identifier carrying the previous value, if any
    pub remove: Option<String>,
    pub add: String,
}

/// Edit removing a modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEdit {
    pub remove: String,
}

impl SetEdit {
    /// Apply to a class list in place
    pub fn apply(&self, classes: &mut Vec<String>) {
        if let Some(remove) = &self.remove {
            classes.retain(|c| c != remove);
        }
        if !classes.iter().any(|c| c == &self.add) {
            classes.push(self.add.clone());
        }
    }
}

impl DeleteEdit {
    pub fn apply(&self, classes: &mut Vec<String>) {
        classes.retain(|c| c != &self.remove);
    }
}

impl Syntax {
    /// Every modifier in the set; when a key repeats the later identifier wins.
    pub fn extract_modifiers<S: AsRef<str>>(&self, identifiers: &[S]) -> Modifiers {
        let mut mods = Modifiers::new();

        for identifier in identifiers {
            if let ParsedName::Modifier { key, value, .. } = self.classify(identifier.as_ref()) {
                mods.insert(key, value);
            }
        }

        mods
    }

    pub fn get_modifier<S: AsRef<str>>(&self, identifiers: &[S], key: &str) -> Option<ModValue> {
        self.extract_modifiers(identifiers).remove(key)
    }

    /// Key present, and equal to `value` when one is given. Flags never
    /// match a non-empty value; an empty value asks for presence only.
    pub fn has_modifier<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        key: &str,
        value: Option<&str>,
    ) -> bool {
        match self.get_modifier(identifiers, key) {
            Some(stored) => stored_matches(&stored, value),
            None => false,
        }
    }

    /// Edit replacing the current value of `key` on `base` with `value`.
    pub fn compute_set_edit<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        base: &str,
        key: &str,
        value: Option<&str>,
    ) -> SyntaxResult<SetEdit> {
        let add = self.build_modifier_name(base, key, value)?;
        let remove = self
            .get_modifier(identifiers, key)
            .map(|stored| self.join_modifier(base, key, stored.as_str()));

        Ok(SetEdit { remove, add })
    }

    /// Edit removing `key` from `base`, or `None` when there is nothing to
    /// remove. With `value`, only a matching stored value is removed.
    pub fn compute_delete_edit<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        base: &str,
        key: &str,
        value: Option<&str>,
    ) -> Option<DeleteEdit> {
        let stored = self.get_modifier(identifiers, key)?;

        if !stored_matches(&stored, value) {
            return None;
        }

        Some(DeleteEdit {
            remove: self.join_modifier(base, key, stored.as_str()),
        })
    }

    /// Whether a node with these identifiers is kept by a modifier filter.
    /// `inverse` keeps exactly the nodes the plain filter drops.
    pub fn compute_filter<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        base: &str,
        key: &str,
        value: Option<&str>,
        inverse: bool,
    ) -> bool {
        let matched = match self.get_modifier(identifiers, key) {
            Some(stored) if stored_matches(&stored, value) => {
                let name = self.join_modifier(base, key, stored.as_str());
                identifiers.iter().any(|i| i.as_ref() == name)
            }
            _ => false,
        };

        matched != inverse
    }

    /// Last block or element identifier in the set: the base modifiers
    /// attach to.
    pub fn base_identifier<'a, S: AsRef<str>>(&self, identifiers: &'a [S]) -> Option<&'a str> {
        identifiers.iter().rev().map(|i| i.as_ref()).find(|i| {
            matches!(
                self.classify_kind(i),
                Some(NameKind::Block | NameKind::Element)
            )
        })
    }

    /// Blocks the identifiers belong to, in order, without duplicates.
    /// Modifier identifiers are skipped.
    pub fn block_names<S: AsRef<str>>(&self, identifiers: &[S]) -> Vec<String> {
        let mut blocks: Vec<String> = Vec::new();

        for identifier in identifiers {
            let block = match self.classify(identifier.as_ref()) {
                ParsedName::Block { block } | ParsedName::Element { block, .. } => block,
                _ => continue,
            };
            if !blocks.contains(&block) {
                blocks.push(block);
            }
        }

        blocks
    }
}

fn stored_matches(stored: &ModValue, value: Option<&str>) -> bool {
    match value.filter(|v| !v.is_empty()) {
        Some(wanted) => stored.as_str() == Some(wanted),
        None => true,
    }
}
