//! LNNZHYZ Core Types and Definitions
//!
//! This crate provides the foundational types shared by the compiler and the
//! layout engine of the LNNZHYZ script renderer. It includes:
//!
//! - **Semantic**: The structured phonological model ([`semantic`] module)
//! - **Glyphs**: Static stroke fragment tables ([`glyph`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Stroke styling for the rendered path ([`draw`] module)
//! - **Notation**: Compact plain-text notation for the model ([`notation`] module)

pub mod color;
pub mod draw;
pub mod glyph;
pub mod notation;
pub mod semantic;
