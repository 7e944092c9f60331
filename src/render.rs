use std::io;
use std::path::PathBuf;

use crate::account::TradeRecord;

/// Everything a renderer gets to see about a step.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub current_step: usize,
    pub net_worth: f64,
    pub trades: &'a [TradeRecord],
    pub window_size: usize,
}

/// Render collaborator. Rendering lives outside the simulation core; a
/// failing renderer never aborts the stepping loop.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> io::Result<()>;

    /// Release any resources. Called from `TradingEnv::close`.
    fn close(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Forward the frame to the installed renderer, if any.
    Human,
    /// Append a plain-text account summary to the given file.
    File(PathBuf),
}
