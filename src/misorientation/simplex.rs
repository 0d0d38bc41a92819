use nalgebra::Vector3;

// Standard Nelder-Mead coefficients
const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

// Initial simplex: perturb one coordinate of the start point per vertex
const NONZERO_STEP: f64 = 0.05;
const ZERO_STEP: f64 = 0.00025;

/// Budget and convergence thresholds for a simplex search.
#[derive(Debug, Clone, Copy)]
pub struct SimplexOptions {
    /// Iteration budget for a single search.
    pub max_iterations: usize,
    /// Convergence threshold on the simplex extent.
    pub x_tolerance: f64,
    /// Convergence threshold on the objective spread across the simplex.
    pub f_tolerance: f64,
}

impl Default for SimplexOptions {
    fn default() -> Self {
        Self {
            max_iterations: 1500,
            x_tolerance: 1e-6,
            f_tolerance: 1e-10,
        }
    }
}

/// Outcome of a simplex search.
#[derive(Debug, Clone, Copy)]
pub struct SimplexResult {
    /// Best vertex found.
    pub x: Vector3<f64>,
    /// Objective value at the best vertex.
    pub f: f64,
    /// Iterations consumed.
    pub iterations: usize,
    /// Whether both tolerances were met within the budget.
    pub converged: bool,
}

/// Minimize a scalar function of three variables with the Nelder-Mead
/// downhill simplex method.
///
/// Derivative-free local search; returns the best vertex found even when the
/// tolerances were not reached within the iteration budget.
pub fn minimize<F>(mut objective: F, start: Vector3<f64>, options: &SimplexOptions) -> SimplexResult
where
    F: FnMut(&Vector3<f64>) -> f64,
{
    let mut vertices = vec![start];
    for axis in 0..3 {
        let mut vertex = start;
        if vertex[axis] != 0.0 {
            vertex[axis] *= 1.0 + NONZERO_STEP;
        } else {
            vertex[axis] = ZERO_STEP;
        }
        vertices.push(vertex);
    }
    let mut values: Vec<f64> = vertices.iter().map(&mut objective).collect();

    let mut iterations = 0;
    let mut converged = false;
    while iterations < options.max_iterations {
        sort_by_value(&mut vertices, &mut values);

        let extent = vertices[1..]
            .iter()
            .map(|v| (v - vertices[0]).amax())
            .fold(0.0, f64::max);
        let spread = values[1..]
            .iter()
            .map(|f| (f - values[0]).abs())
            .fold(0.0, f64::max);
        if extent <= options.x_tolerance && spread <= options.f_tolerance {
            converged = true;
            break;
        }

        let centroid = (vertices[0] + vertices[1] + vertices[2]) / 3.0;
        let worst = vertices[3];

        let reflected = centroid + REFLECTION * (centroid - worst);
        let f_reflected = objective(&reflected);

        if f_reflected < values[0] {
            let expanded = centroid + REFLECTION * EXPANSION * (centroid - worst);
            let f_expanded = objective(&expanded);
            if f_expanded < f_reflected {
                vertices[3] = expanded;
                values[3] = f_expanded;
            } else {
                vertices[3] = reflected;
                values[3] = f_reflected;
            }
        } else if f_reflected < values[2] {
            vertices[3] = reflected;
            values[3] = f_reflected;
        } else if f_reflected < values[3] {
            // outside contraction
            let contracted = centroid + CONTRACTION * REFLECTION * (centroid - worst);
            let f_contracted = objective(&contracted);
            if f_contracted <= f_reflected {
                vertices[3] = contracted;
                values[3] = f_contracted;
            } else {
                shrink(&mut vertices, &mut values, &mut objective);
            }
        } else {
            // inside contraction
            let contracted = centroid - CONTRACTION * (centroid - worst);
            let f_contracted = objective(&contracted);
            if f_contracted < values[3] {
                vertices[3] = contracted;
                values[3] = f_contracted;
            } else {
                shrink(&mut vertices, &mut values, &mut objective);
            }
        }

        iterations += 1;
    }

    sort_by_value(&mut vertices, &mut values);
    SimplexResult {
        x: vertices[0],
        f: values[0],
        iterations,
        converged,
    }
}

fn sort_by_value(vertices: &mut [Vector3<f64>], values: &mut [f64]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            vertices.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn shrink<F>(vertices: &mut [Vector3<f64>], values: &mut [f64], objective: &mut F)
where
    F: FnMut(&Vector3<f64>) -> f64,
{
    for i in 1..vertices.len() {
        vertices[i] = vertices[0] + SHRINK * (vertices[i] - vertices[0]);
        values[i] = objective(&vertices[i]);
    }
}
