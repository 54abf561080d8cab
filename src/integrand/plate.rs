//! Integrand of linear Kirchhoff-Love thin plate (and Euler-Bernoulli beam)
//! problems
//!
//! The formulation is based on Kirchhoff-Love plate theory and therefore
//! requires second derivatives of the basis functions. Nodal unknowns are
//! the deflection followed by `nsd` rotations.

use std::sync::OnceLock;

use crate::analysis::{ElementConfig, NewmarkParams, SolutionMode, TimeDomain};
use crate::analytical::AnalyticalField;
use crate::elements::{LocalSystem, Material};
use crate::error::{PlateError, PlateResult};
use crate::loads::PressureField;
use crate::math::{self, Mat, Vec as FEVec, Vec3};
use crate::output::ResultWriter;
use crate::results::PressureValue;

use super::{
    decorate, ElementMatrices, Integrand, IntegrandType, IntegrationPoint, NormIntegrand,
    KirchhoffLovePlateNorm,
};

const PRIMARY_NAMES: [&str; 3] = ["w", "theta_x", "theta_y"];
const BEAM_PRIMARY_NAMES: [&str; 2] = ["w", "theta"];
const SECONDARY_NAMES: [&str; 3] = ["M_xx", "M_yy", "M_xy"];

/// Index of the deflection among the nodal unknowns
const DEFLECTION: usize = 0;

/// Integrand of thin plate problems.
///
/// The material, pressure field and local system are borrowed; they must
/// outlive the integrand. All of them are `Sync`, so one integrand can be
/// shared by the worker threads of a parallel assembly.
pub struct KirchhoffLovePlate<'a> {
    config: ElementConfig,
    material: Option<&'a dyn Material>,
    pressure: Option<&'a dyn PressureField>,
    local_system: Option<&'a dyn LocalSystem>,
    pres_val: Vec<OnceLock<PressureValue>>,
}

impl Default for KirchhoffLovePlate<'_> {
    fn default() -> Self {
        Self::new(2)
    }
}

impl<'a> KirchhoffLovePlate<'a> {
    /// Create an integrand for `nsd` space dimensions (1 = beam, 2 = plate)
    pub fn new(nsd: usize) -> Self {
        let config = match nsd {
            1 => ElementConfig::beam(),
            _ => ElementConfig::plate(),
        };
        Self::with_config(config)
    }

    /// Create an integrand from a complete configuration
    pub fn with_config(mut config: ElementConfig) -> Self {
        config.refresh_slots();
        Self {
            config,
            material: None,
            pressure: None,
            local_system: None,
            pres_val: Vec::new(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &ElementConfig {
        &self.config
    }

    /// Logs the problem definition
    pub fn print_log(&self) {
        let kind = if self.config.nsd == 1 { "beam" } else { "plate" };
        log::info!(
            "KirchhoffLovePlate: {} with thickness = {}, gravity = {}",
            kind,
            self.config.thickness,
            self.config.gravity
        );
        if self.material.is_none() {
            log::warn!("KirchhoffLovePlate: no material defined");
        }
        if self.pressure.is_some() {
            log::info!("KirchhoffLovePlate: pressure field defined");
        }
        if self.config.rotary_inertia {
            log::info!("KirchhoffLovePlate: mass matrix includes rotary inertia");
        }
    }

    // ========================
    // Configuration
    // ========================

    /// Defines the solution mode before the element assembly is started
    pub fn set_mode(&mut self, mode: SolutionMode) {
        self.config = self.config.clone().with_mode(mode);
        if mode == SolutionMode::Recovery {
            self.pres_val.clear();
        }
    }

    /// Defines the plate thickness
    pub fn set_thickness(&mut self, thickness: f64) {
        self.config.thickness = thickness;
    }

    /// Defines the gravitation constant
    pub fn set_gravity(&mut self, gravity: f64) {
        self.config.gravity = gravity;
    }

    /// Defines the material properties
    pub fn set_material(&mut self, material: &'a dyn Material) {
        self.material = Some(material);
    }

    /// Defines the pressure field
    pub fn set_pressure(&mut self, pressure: &'a dyn PressureField) {
        self.pressure = Some(pressure);
    }

    /// Defines the local coordinate system for stress resultant output
    pub fn set_local_system(&mut self, local_system: &'a dyn LocalSystem) {
        self.local_system = Some(local_system);
    }

    /// Include or exclude rotary inertia in the mass matrix
    pub fn set_rotary_inertia(&mut self, on: bool) {
        self.config.rotary_inertia = on;
    }

    /// Defines the Newmark time integration parameters
    pub fn set_newmark(&mut self, newmark: NewmarkParams) {
        self.config.newmark = newmark;
    }

    /// Initializes a time integration parameter
    /// (0 = alpha1, 1 = alpha2, 2 = beta, 3 = gamma)
    pub fn set_integration_prm(&mut self, i: usize, prm: f64) {
        let nm = &mut self.config.newmark;
        match i {
            0 => nm.alpha1 = prm,
            1 => nm.alpha2 = prm,
            2 => nm.beta = prm,
            3 => nm.gamma = prm,
            _ => log::warn!("KirchhoffLovePlate: ignoring integration parameter {i}"),
        }
    }

    /// Returns a time integration parameter
    pub fn integration_prm(&self, i: usize) -> f64 {
        let nm = &self.config.newmark;
        match i {
            0 => nm.alpha1,
            1 => nm.alpha2,
            2 => nm.beta,
            3 => nm.gamma,
            _ => 0.0,
        }
    }

    /// Initializes the integrand with the number of integration points.
    ///
    /// The pressure buffer gets one slot per boundary point.
    pub fn init_integration(&mut self, _n_gp: usize, n_bp: usize) {
        self.pres_val = (0..n_bp).map(|_| OnceLock::new()).collect();
    }

    /// Returns the derivative order of the differential operator
    pub fn derivative_order(&self) -> usize {
        2
    }

    // ========================
    // Point quantities
    // ========================

    /// Evaluates the pressure field (if any) at the specified point
    pub fn pressure(&self, x: &Vec3) -> f64 {
        self.pressure.map_or(0.0, |p| p.value(x))
    }

    /// Returns whether an external load is defined
    pub fn have_loads(&self) -> bool {
        self.pressure.is_some() || self.config.gravity != 0.0
    }

    pub(crate) fn material(&self) -> PlateResult<&'a dyn Material> {
        self.material.ok_or_else(|| {
            log::error!("KirchhoffLovePlate: no material defined");
            PlateError::MissingMaterial
        })
    }

    /// Calculates the curvature-displacement matrix [B] at current point
    pub fn form_b_matrix(&self, fe: &IntegrationPoint) -> PlateResult<Mat> {
        let ndof = self.config.dofs_per_node() * fe.nen();
        if !fe.det_jxw.is_finite() {
            return Err(PlateError::DegenerateGeometry(format!(
                "non-finite integration point weight {}",
                fe.det_jxw
            )));
        }
        math::curvature_matrix(&fe.d2ndx2, self.config.nsd, ndof)
    }

    /// Sets up the constitutive matrix at current point.
    ///
    /// Returns the bending rigidity `C t³/12` as a `ncmp x ncmp` matrix, or
    /// its inverse if `inverse` is true. For beams the uniaxial modulus
    /// `1/S_11` of the compliance is used.
    pub fn form_c_matrix(&self, x: &Vec3, inverse: bool) -> PlateResult<Mat> {
        let material = self.material()?;
        let factor = self.config.rigidity_factor()?;
        let singular = || PlateError::SingularMaterial(x[0], x[1], x[2]);

        if self.config.nsd == 1 {
            let s11 = material.compliance(x).ok_or_else(singular)?[(0, 0)];
            if s11 <= 0.0 || !s11.is_finite() {
                return Err(singular());
            }
            let ei = factor / s11;
            let value = if inverse { 1.0 / ei } else { ei };
            return Ok(Mat::from_element(1, 1, value));
        }

        let c = if inverse {
            material.compliance(x).ok_or_else(singular)? / factor
        } else {
            material.constitutive(x) * factor
        };
        Ok(Mat::from_iterator(3, 3, c.iter().copied()))
    }

    /// Calculates integration point mass matrix contributions.
    ///
    /// The translational mass `rho t N^T N` goes to the deflection unknowns.
    /// With rotary inertia enabled, `rho t³/12 N^T N` is added to each
    /// rotation unknown as well.
    fn form_mass_matrix(&self, em: &mut Mat, fe: &IntegrationPoint) -> PlateResult<()> {
        let rho = self.material()?.mass_density(&fe.x);
        if rho == 0.0 {
            return Ok(());
        }

        let t = self.config.thickness;
        let npv = self.config.dofs_per_node();
        math::add_nn(em, &fe.n, npv, DEFLECTION, rho * t * fe.det_jxw);
        if self.config.rotary_inertia {
            let rot = rho * t.powi(3) / 12.0 * fe.det_jxw;
            for dof in 1..npv {
                math::add_nn(em, &fe.n, npv, dof, rot);
            }
        }
        Ok(())
    }

    /// Calculates integration point body force vector contributions
    fn form_body_force(&self, es: &mut FEVec, fe: &IntegrationPoint) -> PlateResult<()> {
        if self.config.gravity == 0.0 {
            return Ok(());
        }

        let rho = self.material()?.mass_density(&fe.x);
        let q = rho * self.config.thickness * self.config.gravity;
        let npv = self.config.dofs_per_node();
        math::add_n(es, &fe.n, npv, DEFLECTION, q * fe.det_jxw);
        Ok(())
    }

    // ========================
    // Secondary solution
    // ========================

    /// Evaluates the stress resultants from an element solution vector.
    ///
    /// # Arguments
    /// * `ev` - Element solution vector
    /// * `fe` - Finite element data at current point
    /// * `to_local` - Transform to the local coordinate system (if defined)
    pub fn eval_sol(&self, ev: &FEVec, fe: &IntegrationPoint, to_local: bool) -> PlateResult<FEVec> {
        let bmat = self.form_b_matrix(fe)?;
        if ev.len() != bmat.ncols() {
            return Err(PlateError::DimensionMismatch {
                expected: bmat.ncols(),
                actual: ev.len(),
            });
        }

        let kappa = &bmat * ev;
        let dmat = self.form_c_matrix(&fe.x, false)?;
        let mut s = dmat * kappa;

        if to_local && self.config.nsd == 2 {
            if let Some(sys) = self.local_system {
                let rotated = sys.transform(&fe.x) * Vec3::new(s[0], s[1], s[2]);
                s.copy_from_slice(rotated.as_slice());
            }
        }
        Ok(s)
    }

    /// Evaluates the stress resultants from a global solution vector,
    /// transformed to the local coordinate system (if defined).
    ///
    /// # Arguments
    /// * `sol` - Global solution vector, `npv` values per node
    /// * `fe` - Finite element data at current point
    /// * `mnpc` - Element-to-global node numbers (0-based)
    pub fn eval_sol_global(
        &self,
        sol: &FEVec,
        fe: &IntegrationPoint,
        mnpc: &[usize],
    ) -> PlateResult<FEVec> {
        let ev = math::gather(sol, mnpc, self.config.dofs_per_node())?;
        self.eval_sol(&ev, fe, true)
    }

    /// Deflection at the point, interpolated with the nodal basis values
    pub(crate) fn deflection(&self, ev: &FEVec, fe: &IntegrationPoint) -> f64 {
        let npv = self.config.dofs_per_node();
        fe.n.iter()
            .enumerate()
            .map(|(a, na)| na * ev.get(npv * a + DEFLECTION).copied().unwrap_or(0.0))
            .sum()
    }

    // ========================
    // Pressure output
    // ========================

    /// Returns whether there are any pressure values to write
    pub fn has_traction_values(&self) -> bool {
        self.pres_val.iter().any(|v| v.get().is_some())
    }

    /// Recorded pressure values, in integration point order
    pub fn pressure_values(&self) -> Vec<PressureValue> {
        self.pres_val.iter().filter_map(|v| v.get().copied()).collect()
    }

    /// Writes the surface pressure for a given time step.
    ///
    /// # Arguments
    /// * `writer` - The result writer receiving the pressure vectors
    /// * `i_step` - Load/time step identifier
    /// * `geo_blk` - Running geometry block counter
    /// * `n_block` - Running result block counter
    pub fn write_glv_t(
        &self,
        writer: &mut dyn ResultWriter,
        i_step: usize,
        geo_blk: &mut usize,
        n_block: &mut usize,
    ) -> PlateResult<()> {
        if !self.has_traction_values() {
            return Ok(());
        }

        let vectors: Vec<(Vec3, Vec3)> = self
            .pressure_values()
            .iter()
            .map(|pv| (pv.x, Vec3::new(0.0, 0.0, pv.pressure)))
            .collect();
        writer.write_vectors(&vectors, i_step, geo_blk, n_block, "Pressure")
    }

    // ========================
    // Field metadata
    // ========================

    /// Returns the name of a primary solution field component
    pub fn field1_name(&self, i: usize, prefix: Option<&str>) -> String {
        let names: &[&str] = if self.config.nsd == 1 {
            &BEAM_PRIMARY_NAMES
        } else {
            &PRIMARY_NAMES
        };
        names
            .get(i)
            .map_or_else(String::new, |name| decorate(name, prefix))
    }

    /// Returns the name of a secondary solution field component, or an
    /// empty string if `i` is out of range
    pub fn field2_name(&self, i: usize, prefix: Option<&str>) -> String {
        let ncmp = self.config.num_resultants().min(SECONDARY_NAMES.len());
        SECONDARY_NAMES[..ncmp]
            .get(i)
            .map_or_else(String::new, |name| decorate(name, prefix))
    }

    /// Checks that every accumulator in `elm` matches the point's node count
    fn check_local_size(&self, elm: &ElementMatrices, fe: &IntegrationPoint) -> PlateResult<()> {
        let ndof = self.config.dofs_per_node() * fe.nen();
        let sizes = elm
            .a
            .iter()
            .flat_map(|m| [m.nrows(), m.ncols()])
            .chain(elm.b.iter().map(|v| v.len()));
        for actual in sizes {
            if actual != ndof {
                return Err(PlateError::DimensionMismatch { expected: ndof, actual });
            }
        }
        Ok(())
    }

    /// Returns a norm integrand bound to this integrand.
    ///
    /// # Arguments
    /// * `anasol` - Analytical stress resultant field (optional)
    pub fn norm_integrand<'s>(
        &'s self,
        anasol: Option<&'s dyn AnalyticalField>,
    ) -> Box<dyn NormIntegrand + 's> {
        Box::new(KirchhoffLovePlateNorm::new(self, anasol))
    }
}

impl Integrand for KirchhoffLovePlate<'_> {
    type Local = ElementMatrices;

    fn integrand_type(&self) -> IntegrandType {
        IntegrandType::SECOND_DERIVATIVES
    }

    fn local_integral(&self, nen: usize, neumann: bool) -> ElementMatrices {
        let ndof = self.config.dofs_per_node() * nen;
        let slots = self.config.slots;
        if neumann {
            ElementMatrices::new(0, slots.num_vectors(), ndof)
        } else {
            ElementMatrices::new(slots.num_matrices(), slots.num_vectors(), ndof)
        }
    }

    fn eval_int(&self, elm: &mut ElementMatrices, fe: &IntegrationPoint) -> PlateResult<()> {
        self.check_local_size(elm, fe)?;
        let slots = self.config.slots;

        if let Some(ek) = elm.matrix_mut(slots.stiffness) {
            let bmat = self.form_b_matrix(fe)?;
            let dmat = self.form_c_matrix(&fe.x, false)?;
            math::add_btdb(ek, &bmat, &dmat, fe.det_jxw);
        }

        if let Some(em) = elm.matrix_mut(slots.mass) {
            self.form_mass_matrix(em, fe)?;
        }

        if let Some(es) = elm.vector_mut(slots.load) {
            self.form_body_force(es, fe)?;
        }

        Ok(())
    }

    fn eval_bou(
        &self,
        elm: &mut ElementMatrices,
        fe: &IntegrationPoint,
        _normal: &Vec3,
    ) -> PlateResult<()> {
        self.check_local_size(elm, fe)?;
        let p = self.pressure(&fe.x);

        if let Some(slot) = self.pres_val.get(fe.ip) {
            if slot.set(PressureValue::new(fe.x, p)).is_err() {
                log::trace!("pressure at point {} already recorded", fe.ip);
            }
        } else if !self.pres_val.is_empty() {
            log::trace!("pressure point {} outside buffer of {}", fe.ip, self.pres_val.len());
        }

        if p == 0.0 {
            return Ok(());
        }
        if let Some(es) = elm.vector_mut(self.config.slots.load) {
            let npv = self.config.dofs_per_node();
            math::add_n(es, &fe.n, npv, DEFLECTION, p * fe.det_jxw);
        }
        Ok(())
    }

    fn finalize_element(&self, elm: &mut ElementMatrices, time: &TimeDomain) -> PlateResult<()> {
        let slots = self.config.slots;
        if slots.effective == 0 {
            return Ok(());
        }

        let (c_k, c_m) = self.config.newmark.effective_factors(time.dt)?;
        let (Some(ek), Some(em)) = (elm.matrix(slots.stiffness), elm.matrix(slots.mass)) else {
            return Err(PlateError::Configuration(
                "effective matrix needs both stiffness and mass".to_string(),
            ));
        };
        let keff = ek * c_k + em * c_m;
        if let Some(ea) = elm.matrix_mut(slots.effective) {
            *ea = keff;
        }
        Ok(())
    }

    /// Returns the number of primary (`which == 1`) or secondary
    /// (otherwise) solution field components
    fn no_fields(&self, which: usize) -> usize {
        if which < 2 {
            self.config.dofs_per_node()
        } else {
            self.config.num_resultants()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{LinearIsotropic, Rectangle};
    use crate::loads::UniformPressure;
    use approx::assert_relative_eq;

    fn unit_points(ng: usize) -> Vec<IntegrationPoint> {
        Rectangle::unit().gauss_points(ng, 0).unwrap()
    }

    #[test]
    fn test_integrand_requires_second_derivatives() {
        let plate = KirchhoffLovePlate::new(2);
        assert!(plate.integrand_type().contains(IntegrandType::SECOND_DERIVATIVES));
        assert_eq!(plate.derivative_order(), 2);
    }

    #[test]
    fn test_field_metadata() {
        let plate = KirchhoffLovePlate::new(2);
        assert_eq!(plate.no_fields(1), 3);
        assert_eq!(plate.no_fields(2), 3);
        assert_eq!(plate.field1_name(0, None), "w");
        assert_eq!(plate.field2_name(2, Some("FE")), "FE M_xy");

        let beam = KirchhoffLovePlate::new(1);
        assert_eq!(beam.no_fields(1), 2);
        assert_eq!(beam.no_fields(2), 1);
        assert_eq!(beam.field1_name(1, None), "theta");
        assert_eq!(beam.field2_name(0, None), "M_xx");
    }

    #[test]
    fn test_field_names_out_of_range_are_empty() {
        let plate = KirchhoffLovePlate::new(2);
        assert_eq!(plate.field1_name(3, None), "");
        assert_eq!(plate.field2_name(3, Some("FE")), "");

        let beam = KirchhoffLovePlate::new(1);
        assert_eq!(beam.field1_name(2, None), "");
        assert_eq!(beam.field2_name(1, None), "");

        let empty = KirchhoffLovePlate::with_config(ElementConfig {
            nsd: 0,
            ..ElementConfig::plate()
        });
        assert_eq!(empty.no_fields(2), 0);
        assert_eq!(empty.field2_name(0, None), "");
    }

    #[test]
    fn test_accumulator_size_must_match_point() {
        let mat = LinearIsotropic::steel();
        let pressure = UniformPressure::new(1.0);
        let mut plate = KirchhoffLovePlate::new(2);
        plate.set_material(&mat);
        plate.set_pressure(&pressure);

        // Accumulator for three nodes, point with four
        let p = &unit_points(1)[0];
        let mut elm = plate.local_integral(3, false);
        assert!(matches!(
            plate.eval_int(&mut elm, p),
            Err(PlateError::DimensionMismatch { expected: 12, actual: 9 })
        ));
        assert!(matches!(
            plate.eval_bou(&mut elm, p, &Vec3::z()),
            Err(PlateError::DimensionMismatch { expected: 12, actual: 9 })
        ));
        assert!(elm.b[0].iter().all(|&v| v == 0.0));

        plate.set_mode(SolutionMode::Dynamic);
        let mut elm = plate.local_integral(4, false);
        elm.a[2] = Mat::zeros(8, 8);
        assert!(matches!(
            plate.eval_int(&mut elm, p),
            Err(PlateError::DimensionMismatch { expected: 12, actual: 8 })
        ));
    }

    #[test]
    fn test_local_integral_sizes() {
        let mut plate = KirchhoffLovePlate::new(2);
        let elm = plate.local_integral(4, false);
        assert_eq!(elm.a.len(), 1);
        assert_eq!(elm.b.len(), 1);
        assert_eq!(elm.a[0].shape(), (12, 12));

        let elm = plate.local_integral(4, true);
        assert!(elm.a.is_empty());
        assert_eq!(elm.b.len(), 1);

        plate.set_mode(SolutionMode::Dynamic);
        let elm = plate.local_integral(4, false);
        assert_eq!(elm.a.len(), 3);
    }

    #[test]
    fn test_b_matrix_dimensions() {
        let plate = KirchhoffLovePlate::new(2);
        for p in unit_points(2) {
            let b = plate.form_b_matrix(&p).unwrap();
            assert_eq!(b.shape(), (3, 3 * p.nen()));
        }
    }

    #[test]
    fn test_constitutive_direct_times_inverse() {
        let mat = LinearIsotropic::steel();
        let mut plate = KirchhoffLovePlate::new(2);
        plate.set_material(&mat);
        plate.set_thickness(0.05);
        let x = Vec3::new(0.5, 0.5, 0.0);
        let d = plate.form_c_matrix(&x, false).unwrap();
        let dinv = plate.form_c_matrix(&x, true).unwrap();
        assert_relative_eq!(d * dinv, Mat::identity(3, 3), epsilon = 1e-10);
    }

    #[test]
    fn test_beam_rigidity_is_ei() {
        let mat = LinearIsotropic::new(210e9, 0.3, 7850.0);
        let mut beam = KirchhoffLovePlate::new(1);
        beam.set_material(&mat);
        beam.set_thickness(0.2);
        let d = beam.form_c_matrix(&Vec3::zeros(), false).unwrap();
        assert_eq!(d.shape(), (1, 1));
        assert_relative_eq!(d[(0, 0)], 210e9 * 0.2_f64.powi(3) / 12.0, max_relative = 1e-12);
    }

    #[test]
    fn test_missing_material_is_reported() {
        let plate = KirchhoffLovePlate::new(2);
        let p = &unit_points(1)[0];
        let mut elm = plate.local_integral(4, false);
        assert!(matches!(
            plate.eval_int(&mut elm, p),
            Err(PlateError::MissingMaterial)
        ));
    }

    #[test]
    fn test_invalid_thickness_is_reported() {
        let mat = LinearIsotropic::steel();
        let mut plate = KirchhoffLovePlate::new(2);
        plate.set_material(&mat);
        plate.set_thickness(-0.1);
        let p = &unit_points(1)[0];
        let mut elm = plate.local_integral(4, false);
        assert!(matches!(
            plate.eval_int(&mut elm, p),
            Err(PlateError::InvalidThickness(_))
        ));
    }

    #[test]
    fn test_degenerate_point_is_rejected() {
        let mat = LinearIsotropic::steel();
        let mut plate = KirchhoffLovePlate::new(2);
        plate.set_material(&mat);
        let mut p = unit_points(1)[0].clone();
        for h in p.d2ndx2.iter_mut() {
            *h *= f64::NAN;
        }
        let mut elm = plate.local_integral(4, false);
        assert!(matches!(
            plate.eval_int(&mut elm, &p),
            Err(PlateError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_have_loads() {
        let pressure = UniformPressure::new(1.0);
        let mut plate = KirchhoffLovePlate::new(2);
        assert!(!plate.have_loads());
        plate.set_gravity(-9.81);
        assert!(plate.have_loads());
        plate.set_gravity(0.0);
        plate.set_pressure(&pressure);
        assert!(plate.have_loads());
        assert_eq!(plate.pressure(&Vec3::zeros()), 1.0);
    }

    #[test]
    fn test_integration_parameters() {
        let mut plate = KirchhoffLovePlate::new(2);
        plate.set_integration_prm(2, 0.3025);
        plate.set_integration_prm(3, 0.6);
        assert_relative_eq!(plate.integration_prm(2), 0.3025);
        assert_relative_eq!(plate.integration_prm(3), 0.6);
        assert_eq!(plate.integration_prm(9), 0.0);
    }

    #[test]
    fn test_pressure_buffer_is_write_once() {
        let pressure = UniformPressure::new(2.0);
        let mut plate = KirchhoffLovePlate::new(2);
        plate.set_pressure(&pressure);
        plate.init_integration(4, 2);
        assert!(!plate.has_traction_values());

        let p = unit_points(1)[0].clone().with_index(1);
        let mut elm = plate.local_integral(4, true);
        plate.eval_bou(&mut elm, &p, &Vec3::z()).unwrap();
        plate.eval_bou(&mut elm, &p, &Vec3::z()).unwrap();

        let values = plate.pressure_values();
        assert_eq!(values.len(), 1);
        assert_relative_eq!(values[0].pressure, 2.0);

        plate.set_mode(SolutionMode::Recovery);
        assert!(!plate.has_traction_values());
    }
}
