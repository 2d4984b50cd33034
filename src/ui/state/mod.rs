// SPDX-License-Identifier: MPL-2.0
//! Reusable UI state management, separated from the widget tree.

pub mod transform;

pub use transform::Transform;
