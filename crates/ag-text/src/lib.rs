//! Text art for asciigen: FIGlet block letters with width wrapping.

pub mod catalog;
pub mod figlet;
pub mod wrap;

pub use figlet::FigletRenderer;
