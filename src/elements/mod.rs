//! Plate and beam element bases, materials and local systems

mod beam;
mod local_system;
mod material;
mod rectangle;

pub use beam::HermiteBeam;
pub use local_system::{AngleSystem, LocalSystem, PolarSystem};
pub use material::{LinearIsotropic, Material};
pub use rectangle::Rectangle;
