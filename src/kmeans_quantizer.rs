use crate::{
    error::{QuantizeError, Result},
    swatch::Swatch,
};
use rand::Rng;

/// A k-means color quantizer over raw RGB samples.
///
/// The quantizer partitions the given samples into `cluster_count` clusters by
/// iterative centroid refinement and reports each cluster's mean color together
/// with its share of the samples. It accepts plain in-memory samples and has no
/// knowledge of where they came from.
///
/// Initial centroids are drawn independently and uniformly at random from the
/// samples, with replacement, so `cluster_count` may exceed the sample count;
/// duplicate seeds simply arise. The random source is passed in by the caller,
/// which makes runs reproducible with a seeded generator (see
/// [`crate::PaletteBuilder::seed`]).
///
/// The refinement loop always runs exactly `max_iterations` passes. There is no
/// early exit on stable assignments, so two runs with the same seed and the
/// same iteration budget produce identical results.
pub struct KMeansQuantizer {
    samples: Vec<(u8, u8, u8)>,
    cluster_count: usize,
    max_iterations: usize,
}

impl KMeansQuantizer {
    /// Create a quantizer over the given samples.
    ///
    /// Fails with [`QuantizeError::InvalidInput`] when `samples` is empty or
    /// when `cluster_count` or `max_iterations` is zero. No other failure is
    /// possible; the computation itself is pure arithmetic.
    pub fn new(samples: Vec<(u8, u8, u8)>, cluster_count: usize, max_iterations: usize) -> Result<Self> {
        if samples.is_empty() {
            return Err(QuantizeError::invalid_input("sample set is empty"));
        }

        if cluster_count < 1 {
            return Err(QuantizeError::invalid_input("cluster count must be at least 1"));
        }

        if max_iterations < 1 {
            return Err(QuantizeError::invalid_input("iteration count must be at least 1"));
        }

        Ok(Self {
            samples,
            cluster_count,
            max_iterations,
        })
    }

    /// Run the quantization and return one [`Swatch`] per cluster, in cluster
    /// index order.
    pub fn get_quantized_colors<R: Rng>(self, rng: &mut R) -> Vec<Swatch> {
        let centroids = self.seed_centroids(rng);
        self.run(centroids)
    }

    fn seed_centroids<R: Rng>(&self, rng: &mut R) -> Vec<(u8, u8, u8)> {
        // draw each initial centroid from the samples with replacement
        (0..self.cluster_count)
            .map(|_| self.samples[rng.gen_range(0..self.samples.len())])
            .collect()
    }

    fn run(self, mut centroids: Vec<(u8, u8, u8)>) -> Vec<Swatch> {
        let mut assignments = vec![0usize; self.samples.len()];

        for _ in 0..self.max_iterations {
            self.assign_samples(&centroids, &mut assignments);
            self.update_centroids(&assignments, &mut centroids);
        }

        // cluster populations come from the labels that produced the final
        // centroids, not from a fresh pass against them
        let mut counts = vec![0u32; self.cluster_count];
        for &cluster in &assignments {
            counts[cluster] += 1;
        }

        let total = self.samples.len() as f64;
        centroids
            .into_iter()
            .zip(counts)
            .map(|(rgb, count)| Swatch::new(rgb, count, 100.0 * count as f64 / total))
            .collect()
    }

    fn assign_samples(&self, centroids: &[(u8, u8, u8)], assignments: &mut [usize]) {
        for (sample, assignment) in self.samples.iter().zip(assignments.iter_mut()) {
            let mut min_distance = u32::MAX;
            let mut closest = 0;

            for (index, centroid) in centroids.iter().enumerate() {
                // squared distance orders the same as euclidean and keeps the
                // comparison in exact integers; ties go to the lowest index
                let distance = distance_squared(*sample, *centroid);

                if distance < min_distance {
                    min_distance = distance;
                    closest = index;
                }
            }

            *assignment = closest;
        }
    }

    fn update_centroids(&self, assignments: &[usize], centroids: &mut [(u8, u8, u8)]) {
        let mut sums = vec![(0u64, 0u64, 0u64); centroids.len()];
        let mut counts = vec![0u64; centroids.len()];

        for (&(r, g, b), &cluster) in self.samples.iter().zip(assignments) {
            let sum = &mut sums[cluster];
            sum.0 += r as u64;
            sum.1 += g as u64;
            sum.2 += b as u64;
            counts[cluster] += 1;
        }

        for (index, centroid) in centroids.iter_mut().enumerate() {
            let count = counts[index];

            // a cluster that lost all its samples keeps its previous position
            if count > 0 {
                let (r, g, b) = sums[index];
                *centroid = ((r / count) as u8, (g / count) as u8, (b / count) as u8);
            }
        }
    }
}

fn distance_squared((r1, g1, b1): (u8, u8, u8), (r2, g2, b2): (u8, u8, u8)) -> u32 {
    let dr = r1 as i32 - r2 as i32;
    let dg = g1 as i32 - g2 as i32;
    let db = b1 as i32 - b2 as i32;

    (dr * dr + dg * dg + db * db) as u32
}
