//! Material properties and constitutive relations

use serde::{Deserialize, Serialize};

use crate::math::{plane_stress_compliance, plane_stress_matrix, Mat3, Vec3};

/// Linear constitutive relation of the plate material.
///
/// Implementations are stateless functions of the position and must be
/// usable from several threads at once.
pub trait Material: Send + Sync {
    /// The symmetric 3x3 plane stress constitutive matrix at `x`
    fn constitutive(&self, x: &Vec3) -> Mat3;

    /// The inverse of [`Material::constitutive`] at `x`, or `None` if singular
    fn compliance(&self, x: &Vec3) -> Option<Mat3> {
        self.constitutive(x).try_inverse()
    }

    /// Mass density at `x`
    fn mass_density(&self, x: &Vec3) -> f64;
}

/// Linear elastic material, optionally with orthotropic stiffness modifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearIsotropic {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Density in kg/m³
    pub rho: f64,
    /// Local x stiffness modifier
    pub kx_mod: f64,
    /// Local y stiffness modifier
    pub ky_mod: f64,
}

impl LinearIsotropic {
    /// Create a new isotropic material from E and nu
    pub fn new(e: f64, nu: f64, rho: f64) -> Self {
        Self {
            e,
            nu,
            rho,
            kx_mod: 1.0,
            ky_mod: 1.0,
        }
    }

    /// Set stiffness modifiers
    pub fn with_modifiers(mut self, kx_mod: f64, ky_mod: f64) -> Self {
        self.kx_mod = kx_mod;
        self.ky_mod = ky_mod;
        self
    }

    /// Shear modulus G = E / (2 * (1 + nu))
    pub fn shear_modulus(&self) -> f64 {
        self.e / (2.0 * (1.0 + self.nu))
    }

    /// Bending rigidity E t³ / (12 (1 - nu²)) of an isotropic plate
    pub fn flexural_rigidity(&self, thickness: f64) -> f64 {
        self.e * thickness.powi(3) / (12.0 * (1.0 - self.nu * self.nu))
    }

    /// Create a standard steel material (A36)
    pub fn steel() -> Self {
        Self::new(200e9, 0.3, 7850.0)
    }

    /// Create a standard concrete material
    pub fn concrete(fc: f64) -> Self {
        // fc is compressive strength in Pa
        // E estimated using ACI formula: E = 4700 * sqrt(f'c in MPa) MPa
        let fc_mpa = fc / 1e6;
        let e = 4700.0 * fc_mpa.sqrt() * 1e6;
        Self::new(e, 0.2, 2400.0)
    }

    /// Create an aluminum material (6061-T6)
    pub fn aluminum() -> Self {
        Self::new(68.9e9, 0.33, 2700.0)
    }
}

impl Default for LinearIsotropic {
    fn default() -> Self {
        Self::steel()
    }
}

impl Material for LinearIsotropic {
    fn constitutive(&self, _x: &Vec3) -> Mat3 {
        plane_stress_matrix(self.e, self.nu, self.kx_mod, self.ky_mod)
    }

    fn compliance(&self, _x: &Vec3) -> Option<Mat3> {
        Some(plane_stress_compliance(self.e, self.nu, self.kx_mod, self.ky_mod))
    }

    fn mass_density(&self, _x: &Vec3) -> f64 {
        self.rho
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_isotropic_material() {
        let mat = LinearIsotropic::new(200e9, 0.3, 7850.0);
        let expected_g = 200e9 / (2.0 * 1.3);
        assert!((mat.shear_modulus() - expected_g).abs() < 1.0);
    }

    #[test]
    fn test_direct_times_inverse_is_identity() {
        let x = Vec3::new(0.3, 0.1, 0.0);
        for mat in [
            LinearIsotropic::steel(),
            LinearIsotropic::aluminum(),
            LinearIsotropic::concrete(30e6),
        ] {
            let c = mat.constitutive(&x);
            let s = mat.compliance(&x).unwrap();
            assert_relative_eq!(c * s, Mat3::identity(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_default_compliance_uses_inverse() {
        struct Fixed;
        impl Material for Fixed {
            fn constitutive(&self, _x: &Vec3) -> Mat3 {
                Mat3::new(4.0, 1.0, 0.0, 1.0, 4.0, 0.0, 0.0, 0.0, 2.0)
            }
            fn mass_density(&self, _x: &Vec3) -> f64 {
                1.0
            }
        }
        let x = Vec3::zeros();
        let s = Fixed.compliance(&x).unwrap();
        assert_relative_eq!(Fixed.constitutive(&x) * s, Mat3::identity(), epsilon = 1e-14);
    }

    #[test]
    fn test_flexural_rigidity_matches_matrix() {
        let mat = LinearIsotropic::steel();
        let c = mat.constitutive(&Vec3::zeros());
        let t: f64 = 0.02;
        assert_relative_eq!(
            c[(0, 0)] * t.powi(3) / 12.0,
            mat.flexural_rigidity(t),
            max_relative = 1e-12
        );
    }
}
