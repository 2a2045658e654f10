//! Trajectory container shared by all systems
//!
//! A trajectory is an ordered, finite sequence of samples. Order is
//! simulation time (or sweep order for the bifurcation diagram) and is
//! never rearranged. Renderers get a column layout through `to_array`.

use std::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Point of the Lorenz state space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LorenzPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &LorenzPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// One (r, x) sample of the bifurcation diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BifurcationPoint {
    /// Control parameter the sample was generated with
    pub r: f64,
    /// Logistic map value
    pub x: f64,
}

/// Ordered sequence of samples produced by one simulation call
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory<S> {
    samples: Vec<S>,
}

impl<S> Trajectory<S> {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { samples: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, sample: S) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[S] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.samples.iter()
    }

    pub fn last(&self) -> Option<&S> {
        self.samples.last()
    }

    pub fn into_vec(self) -> Vec<S> {
        self.samples
    }
}

impl<S> From<Vec<S>> for Trajectory<S> {
    fn from(samples: Vec<S>) -> Self {
        Self { samples }
    }
}

impl<S> FromIterator<S> for Trajectory<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}

impl<S> IntoIterator for Trajectory<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl<S> Index<usize> for Trajectory<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.samples[index]
    }
}

impl Trajectory<f64> {
    /// Column layout (index, value), one row per sample
    pub fn to_array(&self) -> Array2<f64> {
        let mut points = Array2::zeros((self.len(), 2));

        for (i, &value) in self.samples.iter().enumerate() {
            points[[i, 0]] = i as f64;
            points[[i, 1]] = value;
        }

        points
    }
}

impl Trajectory<LorenzPoint> {
    /// Column layout (x, y, z), one row per sample
    pub fn to_array(&self) -> Array2<f64> {
        let mut points = Array2::zeros((self.len(), 3));

        for (i, p) in self.samples.iter().enumerate() {
            points[[i, 0]] = p.x;
            points[[i, 1]] = p.y;
            points[[i, 2]] = p.z;
        }

        points
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.y).collect()
    }

    pub fn zs(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.z).collect()
    }
}

impl Trajectory<BifurcationPoint> {
    /// Column layout (r, x), one row per sample
    pub fn to_array(&self) -> Array2<f64> {
        let mut points = Array2::zeros((self.len(), 2));

        for (i, p) in self.samples.iter().enumerate() {
            points[[i, 0]] = p.r;
            points[[i, 1]] = p.x;
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_array_layout() {
        let trajectory = Trajectory::from(vec![0.25, 0.5, 0.75]);
        let points = trajectory.to_array();

        assert_eq!(points.dim(), (3, 2));
        assert_eq!(points[[2, 0]], 2.0);
        assert_eq!(points[[2, 1]], 0.75);
    }

    #[test]
    fn test_lorenz_columns() {
        let trajectory: Trajectory<LorenzPoint> = vec![
            LorenzPoint::new(1.0, 2.0, 3.0),
            LorenzPoint::new(4.0, 5.0, 6.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(trajectory.xs(), vec![1.0, 4.0]);
        assert_eq!(trajectory.ys(), vec![2.0, 5.0]);
        assert_eq!(trajectory.zs(), vec![3.0, 6.0]);

        let points = trajectory.to_array();
        assert_eq!(points.dim(), (2, 3));
        assert_eq!(points[[1, 2]], 6.0);
    }

    #[test]
    fn test_empty_trajectory_array() {
        let trajectory: Trajectory<BifurcationPoint> = Trajectory::new();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.to_array().dim(), (0, 2));
    }

    #[test]
    fn test_lorenz_point_distance() {
        let a = LorenzPoint::new(0.0, 0.0, 0.0);
        let b = LorenzPoint::new(3.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }
}
