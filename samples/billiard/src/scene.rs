use nalgebra::{point, vector, Vector3};
use tessel::{
    shape::{Quad, UvSphere},
    Mesh,
};

use crate::cli::Divisions;

/// A directional light; only recorded, nothing is shaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub direction: Vector3<f64>,
}

/// The cue ball resting on the table and the cue lying behind it.
#[derive(Debug)]
pub struct Scene {
    pub ball: Mesh<f64>,
    pub ball_normals: Vec<Vector3<f64>>,
    pub cue: Mesh<f64>,
    pub light: DirectionalLight,
}

impl Scene {
    /// Height of the cue above the table.
    pub const CUE_HEIGHT: f64 = 0.1;

    #[tracing::instrument(level = "debug")]
    pub fn new(ball_radius: f64, divisions: Divisions) -> Result<Self, tessel::Error> {
        let sphere = UvSphere::new(
            point![0.0, 0.0, 0.0],
            ball_radius,
            divisions.polar,
            divisions.azimuthal,
        )?;
        // rest the ball on the table
        let ball: Mesh<f64> = sphere
            .build::<u32>()?
            .translated(&vector![0.0, ball_radius, 0.0]);

        let h = Self::CUE_HEIGHT;
        let cue: Mesh<f64> = Quad::new([
            point![-0.05, h, 0.0],
            point![0.05, h, 0.0],
            point![0.05, h, -1.0],
            point![-0.05, h, -1.0],
        ])?
        .build::<u32>()?;

        tracing::info!(
            ball.vertices = ball.vertex_count(),
            ball.triangles = ball.triangle_count(),
            cue.vertices = cue.vertex_count(),
            cue.triangles = cue.triangle_count(),
            "assembled scene"
        );

        Ok(Self {
            ball,
            ball_normals: sphere.normals(),
            cue,
            light: DirectionalLight {
                color: [1.0, 1.0, 1.0],
                direction: vector![-1.0, -1.0, -1.0],
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::Scene;
    use crate::cli::Divisions;

    #[test]
    fn ball_rests_on_table() {
        let scene = Scene::new(
            0.1,
            Divisions {
                polar: 16,
                azimuthal: 16,
            },
        )
        .unwrap();
        assert_eq!(scene.ball.vertex_count(), 17 * 17);
        assert_eq!(scene.ball_normals.len(), scene.ball.vertex_count());
        let b = scene.ball.bounds().unwrap();
        assert!((b.center() - point![0.0, 0.1, 0.0]).norm() < 1e-12);
        assert!(b.mins.y.abs() < 1e-12);

        assert_eq!(scene.cue.triangle_count(), 2);
        assert_eq!(scene.cue.indices(), &[0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn rejects_bad_ball() {
        let d = Divisions {
            polar: 16,
            azimuthal: 16,
        };
        assert!(Scene::new(0.0, d).is_err());
        assert!(Scene::new(
            0.1,
            Divisions {
                polar: 0,
                ..d
            }
        )
        .is_err());
    }
}
