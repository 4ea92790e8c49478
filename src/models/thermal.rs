//! Thermal systems models.
//!
//! This module contains models for heat rejection equipment.

pub mod cooling_tower;
