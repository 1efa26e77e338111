pub mod collision;
pub mod input;
pub mod movement;
pub mod obstacles;
pub mod scoring;
pub mod spawn;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use obstacles::*;
pub use scoring::*;
pub use spawn::*;
