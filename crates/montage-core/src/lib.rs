//! Montage Core Types and Definitions
//!
//! This crate provides the abstract syntax tree produced by the Montage
//! expression parser and consumed by rendering backends. It includes:
//!
//! - **Sources**: Where a layer's pixels come from ([`source::ImageNode`])
//! - **Colors**: Clamped RGBA colors and HSL conversion ([`color::Color`])
//! - **Lengths**: Unit-tagged, unresolved sizes ([`length::Length`])
//! - **Fonts**: Font family, size and style bitmask ([`font`] module)
//! - **Layout**: Alignment and additive positioning ([`layout`] module)
//! - **Text**: Text fitting constraints and options ([`text`] module)
//! - **Filters**: The closed set of filter nodes ([`filter`] module)
//! - **Pipeline**: Ordered layers of a single request ([`pipeline`] module)
//!
//! Every value in this crate is validated at construction time. Percentages
//! live in `[0, 1]`, color channels are saturated, and gradient stops are
//! sorted, so renderers can match exhaustively without re-checking input.

pub mod color;
pub mod filter;
pub mod font;
pub mod layout;
pub mod length;
pub mod pipeline;
pub mod source;
pub mod text;
