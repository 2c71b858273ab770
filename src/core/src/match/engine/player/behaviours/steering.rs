use nalgebra::Vector2;

pub enum SteeringBehavior<'n> {
    /// Straight at the target with a fixed speed.
    Seek { target: Vector2<f32>, speed: f32 },
    /// Push away from every neighbour closer than `min_distance`, harder the
    /// closer it is: `(min_distance - distance) * strength` per neighbour.
    Separate {
        neighbours: &'n [Vector2<f32>],
        min_distance: f32,
        strength: f32,
    },
}

impl SteeringBehavior<'_> {
    pub fn calculate(&self, position: Vector2<f32>) -> SteeringOutput {
        match self {
            SteeringBehavior::Seek { target, speed } => {
                SteeringOutput::new(direction(position, *target) * *speed)
            }
            SteeringBehavior::Separate {
                neighbours,
                min_distance,
                strength,
            } => {
                let velocity = neighbours
                    .iter()
                    .map(|neighbour| {
                        let distance = (position - neighbour).norm();
                        if distance < *min_distance {
                            direction(*neighbour, position) * (min_distance - distance) * *strength
                        } else {
                            Vector2::zeros()
                        }
                    })
                    .fold(Vector2::zeros(), |acc, push| acc + push);

                SteeringOutput::new(velocity)
            }
        }
    }
}

/// Unit vector from `from` towards `to`, or zero when the points coincide.
pub fn direction(from: Vector2<f32>, to: Vector2<f32>) -> Vector2<f32> {
    let delta = to - from;
    let norm = delta.norm();

    if norm > 0.0 {
        delta / norm
    } else {
        Vector2::zeros()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SteeringOutput {
    pub velocity: Vector2<f32>,
}

impl SteeringOutput {
    pub fn new(velocity: Vector2<f32>) -> Self {
        SteeringOutput { velocity }
    }
}
