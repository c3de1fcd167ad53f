//! Page handler subsystem for the trellis engine.
//!
//! This crate runs one parse session over a complete markup string: the
//! tokenizer drives tree construction, every element's style is resolved when
//! its start tag is seen and every flex container is laid out when its end tag
//! is seen. It also offers whole-tree relayout and restyle passes and builds the
//! display list handed to a renderer.

pub mod config;
/// Display list generation from the laid-out tree
pub mod display_list;
/// Adapter between DOM elements and the flex layout engine
mod layout;
/// Parse session wiring tokenizer, style and layout
mod session;

pub use config::PipelineConfig;
pub use display_list::{DisplayItem, DisplayList, build_display_list};
pub use layout::layout_element;
pub use session::{ParsedPage, parse_document, relayout, restyle};
