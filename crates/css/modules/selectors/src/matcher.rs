//! Selector chain matching against an element and its ancestor chain.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use log::trace;

use crate::{ElementAdapter, SelectorChain, SimpleSelector};

/// Match a single simple selector against one element.
/// Spec: Section 5–7
pub fn matches_simple<A: ElementAdapter + ?Sized>(element: &A, simple: &SimpleSelector) -> bool {
    match simple {
        SimpleSelector::Type(type_name) => element.tag_name() == type_name.as_str(),
        SimpleSelector::Class(class_name) => element
            .class_attr()
            .is_some_and(|value| value == class_name.as_str()),
        SimpleSelector::IdSelector(id_value) => element
            .element_id()
            .is_some_and(|value| value == id_value.as_str()),
    }
}

/// Match a selector chain against `element`, given its ancestors nearest first.
///
/// The subject must match `element` itself. The ancestors are then scanned once,
/// advancing through the remaining components whenever the current ancestor matches
/// the next one; non-matching ancestors are skipped. The chain matches iff every
/// component was consumed.
/// Spec: Section 11 — Descendant combinator, right-to-left matching
pub fn matches_chain<'anc, A, I>(element: &A, ancestors: I, chain: &SelectorChain) -> bool
where
    A: ElementAdapter + ?Sized + 'anc,
    I: IntoIterator<Item = &'anc A>,
{
    let mut components = chain.matching_order().peekable();
    let Some(subject) = components.next() else {
        return false;
    };
    if !matches_simple(element, subject) {
        return false;
    }
    for ancestor in ancestors {
        let Some(&next) = components.peek() else {
            break;
        };
        if matches_simple(ancestor, next) {
            trace!(
                target: "css::selectors",
                "ancestor <{}> satisfied {:?}",
                ancestor.tag_name(),
                next
            );
            components.next();
        }
    }
    components.peek().is_none()
}
