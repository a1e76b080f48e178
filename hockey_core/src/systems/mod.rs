pub mod input;
pub mod mallets;
pub mod movement;
pub mod scoring;
pub mod speed;
pub mod walls;

pub use input::*;
pub use mallets::*;
pub use movement::*;
pub use scoring::*;
pub use speed::*;
pub use walls::*;
