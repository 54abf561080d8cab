//! Writers for point-wise vector results

use std::io::Write;

use serde::Serialize;

use crate::error::PlateResult;
use crate::math::Vec3;

/// Sink for vector results attached to points, e.g. surface pressures
pub trait ResultWriter {
    /// Writes one block of `(point, vector)` pairs.
    ///
    /// # Arguments
    /// * `points` - Point coordinates and the vector value at each point
    /// * `i_step` - Load/time step identifier
    /// * `geo_blk` - Running geometry block counter, incremented per block
    /// * `n_block` - Running result block counter, incremented per block
    /// * `name` - Result name
    fn write_vectors(
        &mut self,
        points: &[(Vec3, Vec3)],
        i_step: usize,
        geo_blk: &mut usize,
        n_block: &mut usize,
        name: &str,
    ) -> PlateResult<()>;
}

#[derive(Serialize)]
struct VectorBlock<'a> {
    name: &'a str,
    step: usize,
    geometry_block: usize,
    result_block: usize,
    points: Vec<[f64; 3]>,
    vectors: Vec<[f64; 3]>,
}

/// Writes each block as one line of JSON
pub struct JsonResultWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonResultWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultWriter for JsonResultWriter<W> {
    fn write_vectors(
        &mut self,
        points: &[(Vec3, Vec3)],
        i_step: usize,
        geo_blk: &mut usize,
        n_block: &mut usize,
        name: &str,
    ) -> PlateResult<()> {
        *geo_blk += 1;
        *n_block += 1;

        let block = VectorBlock {
            name,
            step: i_step,
            geometry_block: *geo_blk,
            result_block: *n_block,
            points: points.iter().map(|(x, _)| [x[0], x[1], x[2]]).collect(),
            vectors: points.iter().map(|(_, v)| [v[0], v[1], v[2]]).collect(),
        };

        serde_json::to_writer(&mut self.out, &block)?;
        writeln!(self.out)?;
        log::debug!("wrote {} {} vectors for step {}", points.len(), name, i_step);
        Ok(())
    }
}
