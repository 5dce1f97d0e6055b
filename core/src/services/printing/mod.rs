//! Printable document rendering
//!
//! This module renders visitor ID cards as a self-contained printable HTML
//! document. Rendering is pure string building; what to do with the document
//! (hand it to a browser print dialog, archive it) is the caller's concern.

mod qr_cards;

pub use qr_cards::{render_card_document, CardLayout, PrintCardOptions, CARDS_PER_PAGE};
