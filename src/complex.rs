use num::complex::Complex64;
use quat_utils_base::Real;

use crate::Quaternion;

/// `x + yi` becomes `(x, y, 0, 0)`.
impl From<Complex64> for Quaternion {
    fn from(value: Complex64) -> Self {
        Self::new(value.re, value.im, Real::ZERO, Real::ZERO)
    }
}

impl From<(Complex64, Complex64)> for Quaternion {
    fn from((z1, z2): (Complex64, Complex64)) -> Self {
        Self::from_complex_pair(z1, z2)
    }
}

impl Quaternion {
    /// `(z1.re, z1.im, z2.re, z2.im)`, the inverse of
    /// [`Quaternion::complex_pair`].
    pub fn from_complex_pair(z1: Complex64, z2: Complex64) -> Self {
        Self::new(z1.re, z1.im, z2.re, z2.im)
    }

    /// Cayley-Dickson decomposition `(a + bi, c + di)`.
    pub fn complex_pair(&self) -> (Complex64, Complex64) {
        let [a, b, c, d] = self.components().map(Real::to_f64);
        (Complex64::new(a, b), Complex64::new(c, d))
    }

    /// Row-major 2x2 complex matrix of left multiplication by `self`:
    ///
    /// ```text
    /// [  a+bi   c+di ]
    /// [ -c+di   a-bi ]
    /// ```
    ///
    /// The second row is the complex pair of `(-c, d, a, -b)`.
    pub fn matrix(&self) -> [[Complex64; 2]; 2] {
        let (z1, z2) = self.complex_pair();
        let (w1, w2) =
            Quaternion::new(-self.jmag(), self.kmag(), self.real(), -self.imag()).complex_pair();
        [[z1, z2], [w1, w2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn complex_becomes_float_real_and_imag() {
        let q = Quaternion::from(c(1.0, 2.0));
        assert_eq!(q.to_string(), "(1.0+2.0i+0j+0k)");
    }

    #[test]
    fn complex_pair_splits_quaternion() {
        let q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(q.complex_pair(), (c(1.0, 2.0), c(3.0, 4.0)));
        assert_eq!(Quaternion::from(q.complex_pair()), q);
        assert_eq!(
            Quaternion::from_complex_pair(c(1.0, -1.0), c(0.5, 2.0)).to_string(),
            "(1.0-1.0i+0.5j+2.0k)"
        );
    }

    #[test]
    fn matrix_embeds_quaternion() {
        let m = Quaternion::new(1, 2, 3, 4).matrix();
        assert_eq!(m.len(), 2);
        assert!(m.iter().all(|row| row.len() == 2));
        assert_eq!(
            m,
            [[c(1.0, 2.0), c(3.0, 4.0)], [c(-3.0, 4.0), c(1.0, -2.0)]]
        );
    }

    #[test]
    fn matrix_rows_follow_conjugate_symmetry() {
        let q = Quaternion::new(0.5, -1.5, 2.0, 7.25);
        let [[z1, z2], [w1, w2]] = q.matrix();
        assert_eq!(w1, -z2.conj());
        assert_eq!(w2, z1.conj());
    }

    #[test]
    fn matrix_product_matches_quaternion_product() {
        let p = Quaternion::new(1, 2, 3, 4);
        let q = Quaternion::new(5, -6, 7, 8);
        let (a, b) = (p.matrix(), q.matrix());
        let mut product = [[c(0.0, 0.0); 2]; 2];
        for (i, row) in product.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = a[i][0] * b[0][j] + a[i][1] * b[1][j];
            }
        }
        assert_eq!(product, (p * q).matrix());
    }
}
