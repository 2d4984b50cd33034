// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle()
//! method. The main component.rs orchestrates these sub-components.
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── pointer  - Raw pointer events -> semantic gesture effects
//!     ├── gesture  - Gesture/button transitions over the zoom/pan Transform
//!     └── drawer   - Thumbnail drawer visibility + page selection
//! ```

pub mod drawer;
pub mod gesture;
pub mod pointer;
