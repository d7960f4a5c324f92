//! Animated terminal presentation for [`stepbar`] toolbars.

pub mod animation;
pub mod buffer;
pub mod color;
pub mod control;
pub mod event;
pub mod glyphs;
pub mod hit;
pub mod presence;
pub mod rect;
pub mod render;
pub mod spring;
pub mod terminal;
pub mod text;
pub mod view;

pub use animation::{AnimationHandle, Animator, SpringAnimator};
pub use buffer::{Buffer, Cell};
pub use color::Rgb;
pub use control::ControlRotation;
pub use event::{Input, Key, convert_event};
pub use glyphs::MaterialGlyphs;
pub use hit::{HitMap, Target};
pub use presence::{BatchFrame, BatchTransitions, Phase};
pub use rect::Rect;
pub use render::{RenderTheme, render_toolbar};
pub use spring::{Spring, SpringConfig};
pub use terminal::Terminal;
pub use view::{ControlFrame, ToolbarFrame, ToolbarView};
