use rand::Rng;

use crate::error::GrainError;

/// Largest seed value accepted anywhere in the host ecosystem.
pub const SEED_MAX: u64 = u32::MAX as u64;

/// Largest accepted noise amount. At this value the noise uses the full
/// 127.5 scaling factor; at 0 the field collapses to flat mid-gray.
pub const AMOUNT_MAX: u32 = 800;

/// Largest accepted Gaussian blur radius.
pub const BLUR_MAX: f32 = 100.0;

/// Validated configuration for one noise layer.
///
/// Two independent instances exist per invocation. Construction is the only
/// range check in the crate; it stands in for the host's schema layer, so the
/// compositor itself can treat the ranges as preconditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseLayerSpec {
    amount: u32,
    seed: Option<u64>,
    blur_radius: f32,
}

impl NoiseLayerSpec {
    pub fn new(amount: u32, seed: Option<u64>, blur_radius: f32) -> Result<Self, GrainError> {
        if amount > AMOUNT_MAX {
            return Err(GrainError::InvalidParameter(format!(
                "noise amount {amount} exceeds maximum {AMOUNT_MAX}"
            )));
        }
        if let Some(seed) = seed {
            if seed > SEED_MAX {
                return Err(GrainError::InvalidParameter(format!(
                    "seed {seed} exceeds maximum {SEED_MAX}"
                )));
            }
        }
        if !blur_radius.is_finite() || !(0.0..=BLUR_MAX).contains(&blur_radius) {
            return Err(GrainError::InvalidParameter(format!(
                "blur radius {blur_radius} is outside 0..={BLUR_MAX}"
            )));
        }
        Ok(Self {
            amount,
            seed,
            blur_radius,
        })
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn blur_radius(&self) -> f32 {
        self.blur_radius
    }

    /// The explicit seed if one was supplied, otherwise a fresh uniform draw
    /// from `[0, SEED_MAX]`. Resolved exactly once per layer per invocation.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(random_seed)
    }
}

/// Draws a seed from the process RNG. Never fails; an entropy source is
/// always available at call time.
pub fn random_seed() -> u64 {
    rand::thread_rng().gen_range(0..=SEED_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_ranges() {
        assert!(NoiseLayerSpec::new(0, None, 0.0).is_ok());
        assert!(NoiseLayerSpec::new(AMOUNT_MAX, Some(SEED_MAX), BLUR_MAX).is_ok());
    }

    #[test]
    fn rejects_amount_above_max() {
        let err = NoiseLayerSpec::new(801, None, 0.0).unwrap_err();
        assert!(matches!(err, GrainError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_seed_above_max() {
        let err = NoiseLayerSpec::new(0, Some(SEED_MAX + 1), 0.0).unwrap_err();
        assert!(matches!(err, GrainError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_bad_blur() {
        for blur in [-1.0, 100.5, f32::NAN, f32::INFINITY] {
            let err = NoiseLayerSpec::new(0, None, blur).unwrap_err();
            assert!(matches!(err, GrainError::InvalidParameter(_)));
        }
    }

    #[test]
    fn explicit_seed_resolves_to_itself() {
        let spec = NoiseLayerSpec::new(100, Some(42), 0.0).unwrap();
        assert_eq!(spec.resolve_seed(), 42);
        assert_eq!(spec.resolve_seed(), 42);
    }

    #[test]
    fn random_seed_stays_in_range() {
        for _ in 0..1000 {
            assert!(random_seed() <= SEED_MAX);
        }
    }
}
