//! CSS Cascading — the style rule store and per-element resolution.
//! Spec: <https://www.w3.org/TR/css-cascade-4/> (author origin, specificity only)
//!
//! Rules are kept in the order their style blocks were added. Resolution walks the
//! store front to back and a declaration replaces an existing value only when its
//! rule is strictly more specific. Equal specificity therefore keeps the value that
//! was written first, which is the opposite of the usual "later rule wins" tie-break.

#![forbid(unsafe_code)]

use core::cmp::Ordering;
use std::collections::btree_map;

use css_selectors::{
    SelectorChain, Specificity, matches_chain, parse_selector_list, specificity_of_chain,
};
use css_syntax::{Declaration, parse_style_block};
use html::{Element, StyleEntry};
use log::{debug, trace};

/// Priority tuple used to order declarations competing for one property.
/// Spec: Section 6 — Sorting the cascade (specificity, then order of appearance)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadePriority {
    pub specificity: Specificity,
    /// Position of the rule in the store, increasing with appearance.
    pub source_order: u32,
}

impl CascadePriority {
    #[inline]
    pub const fn new(specificity: Specificity, source_order: u32) -> Self {
        Self {
            specificity,
            source_order,
        }
    }
}

/// Compare two priorities; `Ordering::Greater` means `left` wins over `right`.
///
/// Higher specificity wins. On equal specificity the earlier rule wins.
pub fn compare_priority(left: &CascadePriority, right: &CascadePriority) -> Ordering {
    left.specificity
        .cmp(&right.specificity)
        .then_with(|| right.source_order.cmp(&left.source_order))
}

/// One stored rule: a single selector chain and the declarations of its block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: SelectorChain,
    pub declarations: Vec<Declaration>,
    pub specificity: Specificity,
    pub source_order: u32,
}

impl StyleRule {
    #[inline]
    pub const fn priority(&self) -> CascadePriority {
        CascadePriority::new(self.specificity, self.source_order)
    }
}

/// Ordered store of every rule seen so far in a parse session.
#[derive(Clone, Debug, Default)]
pub struct RuleStore {
    rules: Vec<StyleRule>,
}

impl RuleStore {
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Parse a style block and append its rules in source order.
    ///
    /// A prelude listing several selectors (`a, b`) becomes one rule per selector.
    /// Rules whose prelude holds no usable selector are skipped.
    /// Returns the number of rules appended.
    pub fn add_rules(&mut self, css_text: &str) -> usize {
        let before = self.rules.len();
        for raw in parse_style_block(css_text).rules {
            let selectors = parse_selector_list(&raw.prelude);
            if selectors.is_empty() {
                debug!(target: "css::cascade", "skipping rule with empty prelude {:?}", raw.prelude);
                continue;
            }
            for selector in selectors {
                let source_order = u32::try_from(self.rules.len()).unwrap_or(u32::MAX);
                let specificity = specificity_of_chain(&selector);
                self.rules.push(StyleRule {
                    selector,
                    declarations: raw.declarations.clone(),
                    specificity,
                    source_order,
                });
            }
        }
        let added = self.rules.len().saturating_sub(before);
        debug!(target: "css::cascade", "added {added} rules ({} total)", self.rules.len());
        added
    }

    /// Apply every matching rule to `element`'s computed style.
    ///
    /// `ancestors` yields the element's ancestors nearest first; it is re-walked
    /// once per rule. Returns the number of rules that matched.
    pub fn resolve<'anc, I>(&self, element: &mut Element, ancestors: I) -> usize
    where
        I: IntoIterator<Item = &'anc Element>,
        I::IntoIter: Clone,
    {
        let ancestors = ancestors.into_iter();
        let mut matched = 0_usize;
        for rule in &self.rules {
            if !matches_chain(&*element, ancestors.clone(), &rule.selector) {
                continue;
            }
            matched = matched.saturating_add(1);
            trace!(
                target: "css::cascade",
                "<{}> matched rule #{} {}",
                element.tag_name,
                rule.source_order,
                rule.specificity
            );
            for declaration in &rule.declarations {
                apply_declaration(element, declaration, rule.priority());
            }
        }
        matched
    }

    #[inline]
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Write one declaration unless the property already holds a value whose rule
/// outranks `priority` under [`compare_priority`].
fn apply_declaration(element: &mut Element, declaration: &Declaration, priority: CascadePriority) {
    let incoming = StyleEntry {
        value: declaration.value.clone(),
        specificity: priority.specificity,
        source_order: priority.source_order,
    };
    match element.computed_style.entry(declaration.property.clone()) {
        btree_map::Entry::Vacant(slot) => {
            slot.insert(incoming);
        }
        btree_map::Entry::Occupied(mut slot) => {
            let current = CascadePriority::new(slot.get().specificity, slot.get().source_order);
            if compare_priority(&priority, &current) == Ordering::Greater {
                *slot.get_mut() = incoming;
            }
        }
    }
}
