use std::cmp::Ordering;

/// Sign of a number where zeros keep their sign: `+0` is `Greater`, `-0` is
/// `Less`. Only NaN reports `Equal`.
pub trait SignStrict {
    fn sign_strict(&self) -> Ordering;
}

pub trait ExtendedNumber: SignStrict {
    fn is_nan(&self) -> bool;
    fn is_infinite(&self) -> bool;
    fn is_zero(&self) -> bool;
    fn is_finite(&self) -> bool {
        !self.is_nan() & !self.is_infinite()
    }
    fn is_sign_positive(&self) -> bool {
        !self.is_nan() & self.sign_strict().is_gt()
    }
    fn is_sign_negative(&self) -> bool {
        !self.is_nan() & self.sign_strict().is_lt()
    }
}

impl SignStrict for f64 {
    fn sign_strict(&self) -> Ordering {
        use Ordering::*;
        if f64::is_nan(*self) {
            Equal
        } else if f64::is_sign_negative(*self) {
            Less
        } else {
            Greater
        }
    }
}

impl ExtendedNumber for f64 {
    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }

    fn is_infinite(&self) -> bool {
        f64::is_infinite(*self)
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}
