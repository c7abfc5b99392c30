use glam::DVec3;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

pub type Vec3 = DVec3;
pub type Point3 = DVec3;
pub type Color = DVec3;

/// Normalises `v`. A zero-length input is a caller bug.
pub fn unit_vector(v: Vec3) -> Vec3 {
    let length = v.length();
    debug_assert!(length > 0.0, "cannot normalise a zero-length vector");
    return v / length;
}

pub fn random_vec3<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    return Vec3::new(rng.gen(), rng.gen(), rng.gen());
}

pub fn random_vec3_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Vec3 {
    let range = Uniform::new(min, max);
    return Vec3::new(range.sample(rng), range.sample(rng), range.sample(rng));
}

/// Rejection-samples a point strictly inside the unit ball.
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Normalised ball sample. Not uniform on the sphere surface, diffuse bounces rely on this exact bias.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    return unit_vector(random_in_unit_sphere(rng));
}

pub fn random_in_hemisphere<R: Rng + ?Sized>(rng: &mut R, normal: Vec3) -> Vec3 {
    let in_unit_sphere = random_in_unit_sphere(rng);
    return if in_unit_sphere.dot(normal) > 0.0 { in_unit_sphere } else { -in_unit_sphere };
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn unit_vector_has_length_one() {
        let v = unit_vector(Vec3::new(3.0, -4.0, 12.0));
        assert!(approx_eq(v.length(), 1.0));
        assert!(approx_eq(v.x, 3.0 / 13.0));
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(a.length_squared(), 14.0);
    }

    #[test]
    fn random_vec3_stays_in_unit_cube() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_vec3(&mut rng);
            assert!(v.cmpge(Vec3::ZERO).all() && v.cmplt(Vec3::ONE).all());
        }
    }

    #[test]
    fn random_vec3_range_respects_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..1000 {
            let v = random_vec3_range(&mut rng, -2.0, 0.5);
            assert!(v.cmpge(Vec3::splat(-2.0)).all() && v.cmplt(Vec3::splat(0.5)).all());
        }
    }

    #[test]
    fn unit_sphere_samples_are_inside_the_ball() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn unit_vectors_are_normalised() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..1000 {
            assert!((random_unit_vector(&mut rng).length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn hemisphere_samples_face_the_normal() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        for _ in 0..1000 {
            assert!(random_in_hemisphere(&mut rng, normal).dot(normal) >= 0.0);
        }
    }

    #[test]
    fn same_seed_same_samples() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(random_unit_vector(&mut a), random_unit_vector(&mut b));
        }
    }
}
