//! Selector chain parsing.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! Only whitespace-separated simple selectors are understood. A component's
//! first character decides its kind: `#` id, `.` class, anything else type.

use crate::{SelectorChain, SimpleSelector};

/// Parse one simple selector component such as `div`, `.card` or `#main`.
/// Returns `None` for an empty component or a bare `#`/`.`.
/// Spec: Section 5–7
pub fn parse_simple_selector(component: &str) -> Option<SimpleSelector> {
    let component = component.trim();
    if let Some(id_name) = component.strip_prefix('#') {
        return (!id_name.is_empty()).then(|| SimpleSelector::IdSelector(id_name.to_owned()));
    }
    if let Some(class_name) = component.strip_prefix('.') {
        return (!class_name.is_empty()).then(|| SimpleSelector::Class(class_name.to_owned()));
    }
    (!component.is_empty()).then(|| SimpleSelector::Type(component.to_ascii_lowercase()))
}

/// Parse a whitespace separated chain of simple selectors.
/// Spec: Section 11 — Descendant combinator
pub fn parse_selector_chain(input: &str) -> SelectorChain {
    SelectorChain {
        components: input
            .split_ascii_whitespace()
            .filter_map(parse_simple_selector)
            .collect(),
    }
}

/// Parse a comma separated group of selector chains, dropping empty entries.
/// Spec: Section 4 — Groups of selectors
pub fn parse_selector_list(input: &str) -> Vec<SelectorChain> {
    input
        .split(',')
        .map(parse_selector_chain)
        .filter(|chain| !chain.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if component kinds are not recognised by their prefix.
    fn recognises_component_kinds() {
        let chain = parse_selector_chain("  DIV   .card\t#main ");
        assert_eq!(
            chain.components,
            vec![
                SimpleSelector::Type("div".into()),
                SimpleSelector::Class("card".into()),
                SimpleSelector::IdSelector("main".into()),
            ]
        );
        assert_eq!(
            chain.subject(),
            Some(&SimpleSelector::IdSelector("main".into()))
        );
    }

    #[test]
    /// # Panics
    /// Panics if bare prefixes are kept as components.
    fn drops_bare_prefixes() {
        assert_eq!(parse_simple_selector("#"), None);
        assert_eq!(parse_simple_selector("."), None);
        assert!(parse_selector_chain("   ").is_empty());
    }

    #[test]
    /// # Panics
    /// Panics if a selector group is not split on commas in order.
    fn splits_groups_in_order() {
        let list = parse_selector_list("h1, .title ,, div p");
        let lens: Vec<usize> = list.iter().map(|chain| chain.components.len()).collect();
        assert_eq!(lens, vec![1, 1, 2]);
    }
}
