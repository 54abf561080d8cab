//! Solution modes, element configuration and time integration parameters

use serde::{Deserialize, Serialize};

use crate::error::{PlateError, PlateResult};

/// Which kind of element quantities the current assembly pass needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolutionMode {
    /// Linear static analysis: stiffness matrix and load vector
    #[default]
    Static,
    /// Linear dynamic analysis with Newmark time integration
    Dynamic,
    /// Free vibration (eigenvalue) analysis: stiffness and mass only
    Vibration,
    /// Load vector only, e.g. for a new load step with unchanged stiffness
    RhsOnly,
    /// Secondary solution recovery, no element matrices at all
    Recovery,
}

/// 1-based indices into the element matrices and vectors.
///
/// These are identical for all elements of a model, so they can be shared
/// by all worker threads. Zero signals that the quantity is not requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotHandles {
    /// Effective (Newton) matrix of a dynamic analysis
    pub effective: u16,
    /// Element stiffness matrix
    pub stiffness: u16,
    /// Element mass matrix
    pub mass: u16,
    /// Element load vector
    pub load: u16,
}

impl SlotHandles {
    /// Slot layout used for the given solution mode
    pub fn for_mode(mode: SolutionMode) -> Self {
        match mode {
            SolutionMode::Static => Self { effective: 0, stiffness: 1, mass: 0, load: 1 },
            SolutionMode::Dynamic => Self { effective: 1, stiffness: 2, mass: 3, load: 1 },
            SolutionMode::Vibration => Self { effective: 0, stiffness: 1, mass: 2, load: 0 },
            SolutionMode::RhsOnly => Self { effective: 0, stiffness: 0, mass: 0, load: 1 },
            SolutionMode::Recovery => Self::default(),
        }
    }

    /// Number of element matrices needed
    pub fn num_matrices(&self) -> usize {
        self.effective.max(self.stiffness).max(self.mass) as usize
    }

    /// Number of element vectors needed
    pub fn num_vectors(&self) -> usize {
        self.load as usize
    }
}

/// Newmark time integration parameters with Rayleigh damping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewmarkParams {
    /// Mass-proportional damping coefficient
    pub alpha1: f64,
    /// Stiffness-proportional damping coefficient
    pub alpha2: f64,
    /// Newmark beta
    pub beta: f64,
    /// Newmark gamma
    pub gamma: f64,
}

impl Default for NewmarkParams {
    /// Average acceleration (trapezoidal) rule without damping
    fn default() -> Self {
        Self {
            alpha1: 0.0,
            alpha2: 0.0,
            beta: 0.25,
            gamma: 0.5,
        }
    }
}

impl NewmarkParams {
    /// Returns the factors `(cK, cM)` of the effective matrix
    /// `cK*K + cM*M` for the time step size `dt`.
    pub fn effective_factors(&self, dt: f64) -> PlateResult<(f64, f64)> {
        let finite = [self.alpha1, self.alpha2, self.beta, self.gamma, dt]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(PlateError::Configuration(
                "non-finite time integration coefficients".to_string(),
            ));
        }
        if dt <= 0.0 {
            return Err(PlateError::Configuration(format!(
                "time step size must be positive, got {dt}"
            )));
        }
        if self.beta <= 0.0 {
            return Err(PlateError::Configuration(format!(
                "Newmark beta must be positive, got {}",
                self.beta
            )));
        }

        let bdt = self.beta * dt;
        let c_k = 1.0 + self.alpha2 * self.gamma / bdt;
        let c_m = 1.0 / (bdt * dt) + self.alpha1 * self.gamma / bdt;
        Ok((c_k, c_m))
    }
}

/// Time level of the current assembly pass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeDomain {
    /// Current time
    pub t: f64,
    /// Current time step size
    pub dt: f64,
}

impl TimeDomain {
    pub fn new(t: f64, dt: f64) -> Self {
        Self { t, dt }
    }
}

/// Element configuration shared by all elements of a model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementConfig {
    /// Plate thickness (beam height for `nsd == 1`)
    pub thickness: f64,
    /// Gravitation constant, acting in the deflection direction
    pub gravity: f64,
    /// Number of space dimensions (1 = beam, 2 = plate)
    pub nsd: usize,
    /// Include rotary inertia terms in the mass matrix
    pub rotary_inertia: bool,
    /// Current solution mode
    pub mode: SolutionMode,
    /// Slot handles derived from the solution mode
    #[serde(skip, default = "SlotHandles::default")]
    pub slots: SlotHandles,
    /// Time integration parameters for dynamic analysis
    pub newmark: NewmarkParams,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self::plate()
    }
}

impl ElementConfig {
    /// Configuration for a plate with unit thickness in static analysis
    pub fn plate() -> Self {
        Self {
            thickness: 1.0,
            gravity: 0.0,
            nsd: 2,
            rotary_inertia: false,
            mode: SolutionMode::Static,
            slots: SlotHandles::for_mode(SolutionMode::Static),
            newmark: NewmarkParams::default(),
        }
    }

    /// Configuration for a beam with unit height in static analysis
    pub fn beam() -> Self {
        Self {
            nsd: 1,
            ..Self::plate()
        }
    }

    /// Set thickness
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set gravitation constant
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Include rotary inertia in the mass matrix
    pub fn with_rotary_inertia(mut self) -> Self {
        self.rotary_inertia = true;
        self
    }

    /// Set solution mode (and the corresponding slot handles)
    pub fn with_mode(mut self, mode: SolutionMode) -> Self {
        self.mode = mode;
        self.slots = SlotHandles::for_mode(mode);
        self
    }

    /// Set Newmark parameters
    pub fn with_newmark(mut self, newmark: NewmarkParams) -> Self {
        self.newmark = newmark;
        self
    }

    /// Re-derives the slot handles, e.g. after deserialization
    pub fn refresh_slots(&mut self) {
        self.slots = SlotHandles::for_mode(self.mode);
    }

    /// Number of primary unknowns per node (deflection plus rotations)
    pub fn dofs_per_node(&self) -> usize {
        self.nsd + 1
    }

    /// Number of stress resultant components
    pub fn num_resultants(&self) -> usize {
        self.nsd * (self.nsd + 1) / 2
    }

    /// Bending rigidity factor `t^3/12`, validating the thickness
    pub fn rigidity_factor(&self) -> PlateResult<f64> {
        if !(self.thickness.is_finite() && self.thickness > 0.0) {
            return Err(PlateError::InvalidThickness(self.thickness));
        }
        Ok(self.thickness.powi(3) / 12.0)
    }
}
