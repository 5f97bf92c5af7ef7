#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use brush::{BrushConfig, LineColorMode, ToolKind};
pub use config::{CONFIG_FILE_NAME, PaintConfig, SuppressionPolicy};
pub use document::Document;
pub use error::ConfigError;
pub use input::{InputHandler, PointerFrame, PointerSample};
pub use renderer::Renderer;
pub use shape::{Circle, Line, Rectangle, Shape};
pub use state::EditorState;
pub use tools::{DragState, Tool, ToolType};
