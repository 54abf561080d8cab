//! Plate Example - Simply Supported Navier Plate
//!
//! Interpolates the Navier solution on a uniform mesh of rectangles and
//! evaluates element matrices, stress resultants and the energy norms of
//! the interpolation error.
//!
//! Usage: `plate-example [config.json]`

use std::fs;

use anyhow::{Context, Result};
use kirchhoff_plate::integrand::norm::{EXACT_ENERGY, FE_ENERGY};
use kirchhoff_plate::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct ExampleConfig {
    /// Plate length in x direction
    a: f64,
    /// Plate length in y direction
    b: f64,
    /// Plate thickness
    thickness: f64,
    /// Load amplitude
    q0: f64,
    /// Number of elements in each direction
    divisions: usize,
    /// Gauss points in each direction
    gauss: usize,
    /// Material properties
    material: LinearIsotropic,
}

impl Default for ExampleConfig {
    fn default() -> Self {
        Self {
            a: 2.0,
            b: 1.0,
            thickness: 0.02,
            q0: -1000.0,
            divisions: 8,
            gauss: 3,
            material: LinearIsotropic::steel(),
        }
    }
}

fn load_config() -> Result<ExampleConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(ExampleConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cfg = load_config()?;
    println!("=== Plate Example: Simply Supported Navier Plate ===\n");
    println!("{}\n", serde_json::to_string_pretty(&cfg)?);

    let rigidity = cfg.material.flexural_rigidity(cfg.thickness);
    let navier = NavierPlate::new(cfg.a, cfg.b, cfg.q0, rigidity, cfg.material.nu);

    let mut plate = KirchhoffLovePlate::new(2);
    plate.set_thickness(cfg.thickness);
    plate.set_material(&cfg.material);
    plate.set_pressure(&navier);

    let n = cfg.divisions.max(1);
    let (dx, dy) = (cfg.a / n as f64, cfg.b / n as f64);
    let np = cfg.gauss * cfg.gauss;
    plate.init_integration(n * n * np, n * n * np);
    plate.print_log();

    // Element loop
    let mut summary = NormSummary::new();
    let mut max_moment = StressResultants::default();
    let mut total_load = 0.0;
    {
        let norm = plate.norm_integrand(Some(&navier));
        for j in 0..n {
            for i in 0..n {
                let elm = Rectangle::new(i as f64 * dx, j as f64 * dy, dx, dy);
                let points = elm.gauss_points(cfg.gauss, (j * n + i) * np)?;
                let ev = elm.interpolant(|x| navier.deflection(x));

                let mut em = plate.local_integral(4, false);
                let mut pnorm = norm.element_norm(ev.clone());
                for p in &points {
                    plate.eval_int(&mut em, p)?;
                    plate.eval_bou(&mut em, p, &Vec3::z())?;
                    norm.eval_int(&mut pnorm, p)?;
                    norm.eval_bou(&mut pnorm, p, &Vec3::z())?;

                    let m = StressResultants::from_vector(&plate.eval_sol(&ev, p, false)?);
                    if m.m1.abs().max(m.m2.abs()) > max_moment.m1.abs().max(max_moment.m2.abs()) {
                        max_moment = m;
                    }
                }
                norm.finalize_element(&mut pnorm, &TimeDomain::default())?;
                log::debug!(
                    "element ({i}, {j}): a(w^h,w^h) = {:.4e}, a(w,w) = {:.4e}",
                    pnorm.values[FE_ENERGY],
                    pnorm.values[EXACT_ENERGY]
                );

                total_load += em.b[0].iter().step_by(3).sum::<f64>();
                summary.add(&pnorm);
            }
        }

        println!("Energy norms:");
        for value in summary.named(&*norm, Some("Navier")) {
            println!("  {}: {:.6e}", value.name, value.value);
        }
    }

    println!("\nResultants:");
    println!(
        "  Max principal moment: {:.3} N·m/m (M_xx={:.3}, M_yy={:.3}, M_xy={:.3})",
        max_moment.m1.abs().max(max_moment.m2.abs()),
        max_moment.mxx,
        max_moment.myy,
        max_moment.mxy
    );
    println!(
        "  Max surface stress: {:.3} MPa",
        max_moment.surface_stress(cfg.thickness) / 1e6
    );
    println!("  Total applied load: {:.3} N", total_load);
    println!(
        "  Exact total load: {:.3} N",
        4.0 * cfg.q0 * cfg.a * cfg.b / (std::f64::consts::PI * std::f64::consts::PI)
    );

    if plate.has_traction_values() {
        println!("\nPressure at integration points:");
        let mut writer = JsonResultWriter::new(std::io::stdout().lock());
        let (mut geo_blk, mut n_block) = (0, 0);
        plate.write_glv_t(&mut writer, 1, &mut geo_blk, &mut n_block)?;
    }

    println!("\n=== Analysis Complete ===");
    Ok(())
}
