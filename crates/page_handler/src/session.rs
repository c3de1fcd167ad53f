use anyhow::{Context as _, Result};
use css_cascade::RuleStore;
use html::{Diagnostic, Document, Element, Node, OpenElements, TreeHooks, parse_with_hooks};
use log::{debug, info};
use tracing::info_span;

use crate::config::PipelineConfig;
use crate::layout::layout_element;

/// Result of one parse session.
#[derive(Debug)]
pub struct ParsedPage {
    /// The styled and laid-out tree.
    pub document: Document,
    /// Recoverable tokenizer and tree-construction diagnostics, in input order.
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics beyond the configured cap that were counted but not kept.
    pub dropped_diagnostics: usize,
    /// Every style rule seen during the pass, in document order.
    pub rules: RuleStore,
}

/// Hooks that style each element on open and lay it out on close.
///
/// The rule store only grows as style elements close, so an element is styled
/// by the rules that precede it in the document and never restyled afterwards.
struct StyleSession<'cfg> {
    rules: RuleStore,
    style_tag: &'cfg str,
}

impl TreeHooks for StyleSession<'_> {
    fn element_opened(&mut self, element: &mut Element, open: &OpenElements) {
        self.rules.resolve(element, open.ancestors());
    }

    fn element_closed(&mut self, element: &mut Element) {
        if element.tag_name == self.style_tag {
            let added = self.rules.add_rules(&element.text_content());
            debug!(target: "page::session", "<{}> contributed {added} rules", element.tag_name);
        }
        layout_element(element);
    }
}

/// Parse `markup` into a styled, laid-out document.
///
/// # Errors
/// Returns an error when an end tag does not match the open element, or when
/// the configuration makes tokenizer diagnostics fatal and one occurs.
pub fn parse_document(markup: &str, config: &PipelineConfig) -> Result<ParsedPage> {
    let _span = info_span!("page.parse", bytes = markup.len()).entered();
    let session = StyleSession {
        rules: RuleStore::new(),
        style_tag: &config.style_tag,
    };
    let output = parse_with_hooks(markup, session, config.builder_options())
        .context("failed to build document tree")?;
    info!(
        target: "page::session",
        "parsed {} top-level nodes with {} rules and {} diagnostics",
        output.document.children.len(),
        output.hooks.rules.len(),
        output.diagnostics.total()
    );
    Ok(ParsedPage {
        document: output.document,
        diagnostics: output.diagnostics.recorded,
        dropped_diagnostics: output.diagnostics.dropped,
        rules: output.hooks.rules,
    })
}

/// Recompute all geometry: clear it, then lay out every element bottom-up.
pub fn relayout(document: &mut Document) {
    let _span = info_span!("page.relayout").entered();
    for node in &mut document.children {
        if let Node::Element(element) = node {
            relayout_element(element);
        }
    }
}

fn relayout_element(element: &mut Element) {
    element.geometry.clear();
    for child in element.element_children_mut() {
        relayout_element(child);
    }
    layout_element(element);
}

/// Re-resolve every element's style against `rules` top-down, then relayout.
///
/// Unlike the parse pass, every rule in the store applies to every element,
/// wherever its style element appeared.
pub fn restyle(document: &mut Document, rules: &RuleStore) {
    {
        let _span = info_span!("page.restyle", rules = rules.len()).entered();
        let mut ancestors: Vec<Element> = Vec::new();
        for node in &mut document.children {
            if let Node::Element(element) = node {
                restyle_element(element, rules, &mut ancestors);
            }
        }
    }
    relayout(document);
}

/// `ancestors` holds childless copies of the open ancestors, furthest first.
fn restyle_element(element: &mut Element, rules: &RuleStore, ancestors: &mut Vec<Element>) {
    element.computed_style.clear();
    rules.resolve(element, ancestors.iter().rev());
    ancestors.push(Element::new(
        element.tag_name.clone(),
        element.attributes.clone(),
    ));
    for child in element.element_children_mut() {
        restyle_element(child, rules, ancestors);
    }
    ancestors.pop();
}
