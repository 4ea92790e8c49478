//! # Tower Sizing
//!
//! Thermal selection of counterflow and crossflow cooling towers, built as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given design water and air temperatures and a fill's performance curve,
//! the engine finds the cold water temperature, the rated capacity, or the
//! circulating flow at which the transfer coefficient the duty requires
//! equals the one the fill delivers.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters for tower selection.
//! - [`support`]: Supporting utilities, including psychrometric properties.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
