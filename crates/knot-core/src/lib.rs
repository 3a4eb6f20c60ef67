pub mod camera;
pub mod color;
pub mod constants;
pub mod error;
pub mod follower;
pub mod highlight;
pub mod light;
pub mod mesh;
pub mod picking;
pub mod pointer;
pub mod scene;
pub mod settings;

pub use camera::*;
pub use color::*;
pub use constants::*;
pub use error::*;
pub use follower::*;
pub use highlight::*;
pub use light::*;
pub use picking::*;
pub use pointer::*;
pub use scene::*;
pub use settings::*;
