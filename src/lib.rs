//! Kirchhoff-Love plate integrands for finite element analysis
//!
//! This library provides the element-level physics of thin plate bending
//! (and its one-dimensional counterpart, the Euler-Bernoulli beam):
//! - Element stiffness, mass and load contributions per integration point
//! - Newmark effective matrices for linear dynamics
//! - Stress resultant (moment) recovery, optionally in a local system
//! - Energy norms, exact errors and effectivity of error estimates
//!
//! The assembly loop, quadrature and basis evaluation belong to the caller;
//! [`elements::Rectangle`] and [`elements::HermiteBeam`] provide ready-made
//! bases for rectangles and straight beams.
//!
//! ## Example
//! ```rust
//! use kirchhoff_plate::prelude::*;
//!
//! let steel = LinearIsotropic::steel();
//! let load = UniformPressure::new(-1000.0);
//!
//! let mut plate = KirchhoffLovePlate::new(2);
//! plate.set_thickness(0.01);
//! plate.set_material(&steel);
//! plate.set_pressure(&load);
//!
//! // Integrate one element
//! let element = Rectangle::new(0.0, 0.0, 1.0, 1.0);
//! let mut elm = plate.local_integral(4, false);
//! for point in element.gauss_points(2, 0).unwrap() {
//!     plate.eval_int(&mut elm, &point).unwrap();
//!     plate.eval_bou(&mut elm, &point, &Vec3::z()).unwrap();
//! }
//! assert_eq!(elm.a[0].shape(), (12, 12));
//! assert!((elm.b[0][0] + 250.0).abs() < 1e-9);
//! ```

pub mod analysis;
pub mod analytical;
pub mod elements;
pub mod error;
pub mod integrand;
pub mod loads;
pub mod math;
pub mod output;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{ElementConfig, NewmarkParams, SolutionMode, TimeDomain};
    pub use crate::analytical::{AnalyticalField, NavierPlate};
    pub use crate::elements::{
        AngleSystem, HermiteBeam, LinearIsotropic, LocalSystem, Material, PolarSystem, Rectangle,
    };
    pub use crate::error::{PlateError, PlateResult};
    pub use crate::integrand::{
        ElementMatrices, ElementNorm, Integrand, IntegrationPoint, KirchhoffLovePlate,
        KirchhoffLovePlateNorm, NormIntegrand,
    };
    pub use crate::loads::{PressureField, UniformPressure};
    pub use crate::math::Vec3;
    pub use crate::output::{JsonResultWriter, ResultWriter};
    pub use crate::results::{NormSummary, PressureValue, StressResultants};
}
