// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every view.

pub mod button;
pub mod container;
pub mod overlay;
pub mod text_input;
