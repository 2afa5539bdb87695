//! Force simulation over the connected nodes.
//!
//! Every pair of nodes repels with `ideal² / d`, every edge attracts its
//! endpoints with `d² / ideal`. Each step moves a node along its net force,
//! never further than the current temperature, and the temperature then cools
//! geometrically towards a floor.

use log::{debug, trace};

use erlay_core::geometry::Point;

use crate::config::ForceConfig;

/// Distance below which two centres count as coincident.
const DISTANCE_EPSILON: f64 = 0.1;

/// Net forces at or below this magnitude do not move a node.
const MIN_FORCE: f64 = 0.1;

/// Starting temperature, in ideal lengths.
const INITIAL_TEMPERATURE_FACTOR: f64 = 2.0;

/// A configured force simulation.
#[derive(Debug, Clone)]
pub struct Simulation<'a> {
    config: &'a ForceConfig,
    ideal: f64,
}

impl<'a> Simulation<'a> {
    pub fn new(config: &'a ForceConfig, ideal: f64) -> Self {
        Self { config, ideal }
    }

    /// Runs the configured number of steps.
    ///
    /// Only the `members` move, and pairwise repulsion is accumulated in
    /// `members` order. `edges` are node index pairs; self-edges and edges
    /// whose endpoints sit on the same spot exert no force. With fewer than
    /// two members nothing happens.
    pub fn run(&self, centers: &mut [Point], members: &[usize], edges: &[(usize, usize)]) {
        if members.len() < 2 {
            return;
        }

        let mut temperature = self.ideal * INITIAL_TEMPERATURE_FACTOR;
        let mut forces = vec![Point::default(); centers.len()];

        for step in 0..self.config.iterations() {
            for &node in members {
                forces[node] = Point::default();
            }

            self.accumulate_repulsion(centers, members, &mut forces);
            self.accumulate_attraction(centers, edges, &mut forces);
            let moved = Self::integrate(centers, members, &forces, temperature);

            trace!(step, temperature, moved; "Force simulation step");

            temperature =
                (temperature * self.config.cooling_rate()).max(self.config.min_temperature());
        }

        debug!(
            members = members.len(),
            iterations = self.config.iterations(),
            final_temperature = temperature;
            "Force simulation finished"
        );
    }

    fn accumulate_repulsion(&self, centers: &[Point], members: &[usize], forces: &mut [Point]) {
        let k_squared = self.ideal * self.ideal;

        for (i, &first) in members.iter().enumerate() {
            for &second in &members[i + 1..] {
                let delta = centers[first].sub_point(centers[second]);
                let distance = delta.hypot().max(DISTANCE_EPSILON);
                let magnitude = k_squared / distance * self.config.repulsion_strength();

                let force = delta.scale(magnitude / distance);
                forces[first] = forces[first].add_point(force);
                forces[second] = forces[second].sub_point(force);
            }
        }
    }

    fn accumulate_attraction(
        &self,
        centers: &[Point],
        edges: &[(usize, usize)],
        forces: &mut [Point],
    ) {
        for &(source, target) in edges {
            let delta = centers[target].sub_point(centers[source]);
            let distance = delta.hypot();
            if distance < DISTANCE_EPSILON {
                continue;
            }

            let magnitude = distance * distance / self.ideal * self.config.attraction_strength();

            // Pull the source towards the target and the target back.
            let force = delta.scale(magnitude / distance);
            forces[source] = forces[source].add_point(force);
            forces[target] = forces[target].sub_point(force);
        }
    }

    /// Moves every member along its force, capped at `temperature`.
    /// Returns the number of nodes that moved.
    fn integrate(
        centers: &mut [Point],
        members: &[usize],
        forces: &[Point],
        temperature: f64,
    ) -> usize {
        let mut moved = 0;
        for &node in members {
            let force = forces[node];
            let magnitude = force.hypot();
            if magnitude <= MIN_FORCE {
                continue;
            }

            let step = magnitude.min(temperature) / magnitude;
            centers[node] = centers[node].add_point(force.scale(step));
            moved += 1;
        }
        moved
    }
}
