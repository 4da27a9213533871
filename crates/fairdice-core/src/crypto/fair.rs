//! Unbiased fair-value generation for the commit-reveal protocol.

use rand::rngs::OsRng;
use rand::RngCore;

use super::{CommitKey, Commitment};
use crate::error::{Error, Result};

/// Width of one generator draw: 2^32 values.
const DRAW_WIDTH: u64 = 1 << 32;

/// Uniform integer in `[0, range)` with no modulo bias.
///
/// Draws a 32-bit word and discards draws at or beyond the largest multiple
/// of `range` that fits the draw width; taking a naive modulo over the full
/// width would skew residues for ranges that do not divide 2^32.
pub fn uniform_int<R: RngCore>(rng: &mut R, range: u64) -> Result<u64> {
    if range == 0 || range > DRAW_WIDTH {
        return Err(Error::InvalidRange);
    }
    let cutoff = DRAW_WIDTH - DRAW_WIDTH % range;
    loop {
        let draw = u64::from(rng.next_u32());
        if draw < cutoff {
            return Ok(draw % range);
        }
    }
}

/// Combine two contributions into one fair value: `(a + b) mod modulus`.
///
/// If either contribution is uniform over `[0, modulus)` and was fixed
/// independently of the other, the result is uniform no matter how the
/// other contribution was chosen.
pub fn combine(a: u64, b: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(Error::InvalidRange);
    }
    // Residues can each reach modulus - 1, so the sum is taken in u128
    // to stay exact for moduli above 2^63.
    let m = u128::from(modulus);
    Ok(((u128::from(a) % m + u128::from(b) % m) % m) as u64)
}

/// One committed leg of the fair-value protocol.
///
/// Bundles a secret drawn uniformly over `[0, modulus)` with the key and
/// digest binding it. The digest is published first; the other party
/// contributes its value; only then does `reveal` surrender the key and
/// secret for mandatory verification.
#[derive(Debug)]
pub struct FairRound {
    secret: u64,
    modulus: u64,
    key: CommitKey,
    commitment: Commitment,
}

impl FairRound {
    /// Open a round using the OS-backed secure source.
    pub fn open(modulus: u64) -> Result<Self> {
        Self::open_with(&mut OsRng, modulus)
    }

    /// Open a round drawing the secret from the given generator.
    pub fn open_with<R: RngCore>(rng: &mut R, modulus: u64) -> Result<Self> {
        let secret = uniform_int(rng, modulus)?;
        let key = CommitKey::generate();
        let commitment = Commitment::commit(&key, secret);
        Ok(Self {
            secret,
            modulus,
            key,
            commitment,
        })
    }

    /// The digest safe to publish before the other party contributes.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// The modulus this round was opened over.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Consume the round, surrendering the key and secret so a verifier can
    /// recompute the digest.
    pub fn reveal(self) -> (CommitKey, u64) {
        (self.key, self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_uniform_int_rejects_zero_range() {
        assert!(matches!(
            uniform_int(&mut OsRng, 0),
            Err(Error::InvalidRange)
        ));
    }

    #[test]
    fn test_uniform_int_rejects_oversized_range() {
        assert!(matches!(
            uniform_int(&mut OsRng, DRAW_WIDTH + 1),
            Err(Error::InvalidRange)
        ));
    }

    #[test]
    fn test_uniform_int_stays_in_range() {
        for _ in 0..1000 {
            let v = uniform_int(&mut OsRng, 6).unwrap();
            assert!(v < 6);
        }
    }

    #[test]
    fn test_uniform_int_discards_biased_draws() {
        // 2^32 mod 6 == 4, so the last four draw values would fold unevenly
        // onto residues 0..4. A generator stuck in that tail must be skipped
        // until it leaves it.
        let cutoff = DRAW_WIDTH - DRAW_WIDTH % 6;
        let mut rng = StepRng::new(cutoff, 1);
        let v = uniform_int(&mut rng, 6).unwrap();
        // First four draws rejected; the fifth wraps to draw value 0.
        assert_eq!(v, 0);
    }

    #[test]
    fn test_combine_wraps_modulus() {
        assert_eq!(combine(3, 4, 6).unwrap(), 1);
        assert_eq!(combine(0, 0, 2).unwrap(), 0);
        assert_eq!(combine(1, 1, 2).unwrap(), 0);
        assert_eq!(combine(5, 5, 6).unwrap(), 4);
    }

    #[test]
    fn test_combine_handles_moduli_above_half_range() {
        // Residues near u64::MAX must not wrap when summed.
        let m = (1u64 << 63) + 1;
        assert_eq!(combine(1 << 63, 1 << 63, m).unwrap(), m - 2);
        assert_eq!(combine(u64::MAX, u64::MAX, u64::MAX).unwrap(), 0);
        assert_eq!(combine(u64::MAX - 1, u64::MAX - 1, u64::MAX).unwrap(), u64::MAX - 2);
    }

    #[test]
    fn test_combine_rejects_zero_modulus() {
        assert!(matches!(combine(1, 2, 0), Err(Error::InvalidRange)));
    }

    #[test]
    fn test_combine_is_bijective_in_each_argument() {
        // For any adversarially fixed `a`, the map b -> combine(a, b, m) is
        // a bijection on [0, m), so a uniform `b` yields a uniform result.
        for a in 0..6 {
            let mut seen = [false; 6];
            for b in 0..6 {
                seen[combine(a, b, 6).unwrap() as usize] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_fair_round_reveal_verifies() {
        let round = FairRound::open(6).unwrap();
        let digest = *round.commitment();
        let modulus = round.modulus();
        let (key, secret) = round.reveal();

        assert!(secret < modulus);
        assert!(digest.verify(&key, secret));
    }

    #[test]
    fn test_fair_round_tampered_secret_fails() {
        let round = FairRound::open(6).unwrap();
        let digest = *round.commitment();
        let (key, secret) = round.reveal();

        assert!(!digest.verify(&key, (secret + 1) % 6));
    }

    #[test]
    fn test_fair_round_deterministic_with_seeded_rng() {
        let mut rng = StepRng::new(0, 1);
        let round = FairRound::open_with(&mut rng, 6).unwrap();
        let (_, secret) = round.reveal();
        assert_eq!(secret, 0);
    }
}
