//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → Screen → render → ANSI Output + HitMap
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Wide / stacked geometry and scroll bounds
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`avatar`]: Initials boxes, badges and the placeholder art
//! - [`hitmap`]: Clickable regions of the last frame
//! - [`helpers`]: Styled line building and text fitting
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod avatar;
pub mod components;
pub mod helpers;
pub mod hitmap;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use hitmap::{HitMap, HitTarget};
pub use layout::{Layout, LayoutMode};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{DetailInfo, EmptyState, FooterInfo, HeaderInfo, PagerInfo, ReadyView, RowItem, Screen};
