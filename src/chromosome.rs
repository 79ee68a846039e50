//! # Chromosome
//!
//! A `Chromosome` is the genotype of an individual: a fixed-length sequence of
//! bits. Its phenotype is the unsigned integer those bits spell out, most
//! significant bit first, so a chromosome of length `L` covers `[0, 2^L - 1]`
//! and the mapping between the two is a bijection.
//!
//! ## Example
//!
//! ```rust
//! use nichealg::chromosome::Chromosome;
//! use nichealg::rng::RandomNumberGenerator;
//!
//! let chromosome: Chromosome = "10110".parse().unwrap();
//! assert_eq!(chromosome.decode(), 22);
//! assert_eq!(chromosome.to_string(), "10110");
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let random = Chromosome::random(8, &mut rng);
//! assert_eq!(random.len(), 8);
//! assert!(random.decode() <= 255);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// The decoded value of a chromosome.
pub type Phenotype = u64;

/// Widest chromosome whose phenotype still fits in a [`Phenotype`].
pub const MAX_CHROMOSOME_LENGTH: usize = Phenotype::BITS as usize;

/// A fixed-length bit string, most significant bit first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome of `length` bits, each drawn independently and uniformly.
    pub fn random(length: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            bits: (0..length).map(|_| rng.gen_bit()).collect(),
        }
    }

    /// Wraps an existing bit sequence.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidChromosome` error if the sequence is empty or longer
    /// than [`MAX_CHROMOSOME_LENGTH`].
    pub fn from_bits(bits: Vec<bool>) -> Result<Self> {
        check_bit_count(bits.len())?;
        Ok(Self { bits })
    }

    /// This chromosome's bits up to `point`, followed by `other`'s bits from `point` on.
    pub(crate) fn splice(&self, other: &Chromosome, point: usize) -> Chromosome {
        Self {
            bits: [&self.bits[..point], &other.bits[point..]].concat(),
        }
    }

    /// Encodes `value` as its standard `length`-bit binary representation.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `length` is zero or wider than
    /// [`MAX_CHROMOSOME_LENGTH`], or if `value` needs more than `length` bits.
    pub fn from_value(value: Phenotype, length: usize) -> Result<Self> {
        check_length(length)?;

        if length < MAX_CHROMOSOME_LENGTH && value >> length != 0 {
            return Err(GeneticError::Configuration(format!(
                "Value {} does not fit in {} bits",
                value, length
            )));
        }

        let bits = (0..length)
            .rev()
            .map(|shift| (value >> shift) & 1 == 1)
            .collect();

        Ok(Self { bits })
    }

    /// Decodes the bits as an unsigned integer, bit 0 being the most significant.
    pub fn decode(&self) -> Phenotype {
        self.bits
            .iter()
            .fold(0, |value, &bit| (value << 1) | Phenotype::from(bit))
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Flips the bit at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn flip(&mut self, position: usize) {
        self.bits[position] = !self.bits[position];
    }

    /// Largest phenotype a chromosome of this length can express.
    pub fn max_phenotype(&self) -> Phenotype {
        max_phenotype(self.len())
    }
}

/// Largest phenotype representable with `length` bits.
pub fn max_phenotype(length: usize) -> Phenotype {
    if length >= MAX_CHROMOSOME_LENGTH {
        Phenotype::MAX
    } else {
        (1 << length) - 1
    }
}

pub(crate) fn check_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(GeneticError::Configuration(
            "Chromosome length cannot be zero".to_string(),
        ));
    }
    if length > MAX_CHROMOSOME_LENGTH {
        return Err(GeneticError::Configuration(format!(
            "Chromosome length {} exceeds the maximum of {} bits",
            length, MAX_CHROMOSOME_LENGTH
        )));
    }
    Ok(())
}

fn check_bit_count(count: usize) -> Result<()> {
    check_length(count).map_err(|e| match e {
        GeneticError::Configuration(msg) => GeneticError::InvalidChromosome(msg),
        other => other,
    })
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GeneticError::InvalidChromosome(format!(
                    "unexpected character {:?} in {:?}",
                    other, s
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;

        Self::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_is_msb_first() {
        let chromosome: Chromosome = "00001".parse().unwrap();
        assert_eq!(chromosome.decode(), 1);

        let chromosome: Chromosome = "10000".parse().unwrap();
        assert_eq!(chromosome.decode(), 16);

        let chromosome: Chromosome = "11111111".parse().unwrap();
        assert_eq!(chromosome.decode(), 255);
    }

    #[test]
    fn test_encoding_bijection() {
        for length in [1, 5, 8] {
            for value in 0..=max_phenotype(length) {
                let chromosome = Chromosome::from_value(value, length).unwrap();
                assert_eq!(chromosome.len(), length);
                assert_eq!(chromosome.decode(), value);
            }
        }
    }

    #[test]
    fn test_full_width_chromosome() {
        let chromosome = Chromosome::from_value(u64::MAX, 64).unwrap();
        assert_eq!(chromosome.decode(), u64::MAX);
        assert_eq!(chromosome.max_phenotype(), u64::MAX);

        let chromosome = Chromosome::from_value(1u64 << 63, 64).unwrap();
        assert!(chromosome.bits()[0]);
        assert_eq!(chromosome.decode(), 1u64 << 63);
    }

    #[test]
    fn test_from_value_rejects_wide_values() {
        let result = Chromosome::from_value(32, 5);
        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("does not fit")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_from_value_rejects_bad_lengths() {
        assert!(Chromosome::from_value(0, 0).is_err());
        assert!(Chromosome::from_value(0, 65).is_err());
    }

    #[test]
    fn test_random_length_and_range() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        for _ in 0..100 {
            let chromosome = Chromosome::random(5, &mut rng);
            assert_eq!(chromosome.len(), 5);
            assert!(chromosome.decode() <= 31);
        }
    }

    #[test]
    fn test_random_covers_both_bit_values() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let chromosome = Chromosome::random(64, &mut rng);
        assert!(chromosome.bits().iter().any(|&b| b));
        assert!(chromosome.bits().iter().any(|&b| !b));
    }

    #[test]
    fn test_flip() {
        let mut chromosome: Chromosome = "0000".parse().unwrap();
        chromosome.flip(0);
        assert_eq!(chromosome.to_string(), "1000");
        chromosome.flip(0);
        assert_eq!(chromosome.to_string(), "0000");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "10a1".parse::<Chromosome>(),
            Err(GeneticError::InvalidChromosome(_))
        ));
        assert!(matches!(
            "".parse::<Chromosome>(),
            Err(GeneticError::InvalidChromosome(_))
        ));
    }

    #[test]
    fn test_parse_rejects_too_wide_bit_strings() {
        let wide = format!("1{}", "0".repeat(64));
        match wide.parse::<Chromosome>() {
            Err(GeneticError::InvalidChromosome(msg)) => assert!(msg.contains("exceeds")),
            _ => panic!("Expected InvalidChromosome error"),
        }

        let full: Chromosome = format!("1{}", "0".repeat(63)).parse().unwrap();
        assert_eq!(full.decode(), 1u64 << 63);
    }

    #[test]
    fn test_from_bits_checks_length() {
        assert!(matches!(
            Chromosome::from_bits(vec![]),
            Err(GeneticError::InvalidChromosome(_))
        ));
        assert!(matches!(
            Chromosome::from_bits(vec![true; 65]),
            Err(GeneticError::InvalidChromosome(_))
        ));

        let chromosome = Chromosome::from_bits(vec![true, false, true]).unwrap();
        assert_eq!(chromosome.decode(), 5);
    }

    #[test]
    fn test_splice() {
        let ones: Chromosome = "1111".parse().unwrap();
        let zeros: Chromosome = "0000".parse().unwrap();
        assert_eq!(ones.splice(&zeros, 1).to_string(), "1000");
        assert_eq!(zeros.splice(&ones, 3).to_string(), "0001");
    }

    #[test]
    fn test_display_round_trip() {
        let chromosome = Chromosome::from_value(0b1011_0010, 8).unwrap();
        assert_eq!(chromosome.to_string(), "10110010");
        assert_eq!(
            chromosome.to_string().parse::<Chromosome>().unwrap(),
            chromosome
        );
    }
}
