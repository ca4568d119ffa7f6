#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use command::Command;
pub use config::SketchConfig;
pub use document::Document;
pub use element::{Drawable, DrawableId, ElementType};
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use geometry::Point;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::{EditorState, SketchSession};
pub use surface::{RecordingSurface, Surface};
pub use tools::Tool;
