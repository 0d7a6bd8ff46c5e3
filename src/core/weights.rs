//! Scoring weights
//!
//! A `WeightProfile` linearly combines a word's five component scores into a
//! single ranking value. One profile is kept per information level.

use super::{ALPHABET_SIZE, letter_index};
use std::fmt;

/// Number of information levels a weight table covers (knownScore 0-11)
pub const KNOWN_SCORE_LEVELS: usize = 12;

/// Standard English letter frequencies, indexed A=0..Z=25
///
/// Values sum to ~1.0. Being a compile-time table it is ready before any
/// component reads it and is shared read-only by every worker.
pub const ENGLISH_LETTER_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.084966, // A
    0.020720, // B
    0.045388, // C
    0.033844, // D
    0.111607, // E
    0.018121, // F
    0.024705, // G
    0.030034, // H
    0.075448, // I
    0.001965, // J
    0.011016, // K
    0.054893, // L
    0.030129, // M
    0.066544, // N
    0.071635, // O
    0.031671, // P
    0.001962, // Q
    0.075809, // R
    0.057351, // S
    0.069509, // T
    0.036308, // U
    0.010074, // V
    0.012899, // W
    0.002902, // X
    0.017779, // Y
    0.002722, // Z
];

/// English frequency of an uppercase ASCII letter
#[inline]
#[must_use]
pub fn english_frequency(letter: u8) -> f64 {
    ENGLISH_LETTER_FREQUENCIES[letter_index(letter)]
}

/// The five per-word inputs a `WeightProfile` combines
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComponentScores {
    /// Letter frequency including repeated letters
    pub repeat_letter: f64,
    /// Letter frequency counting each distinct letter once
    pub single_letter: f64,
    /// Frequency of letters at their positions
    pub letter_placement: f64,
    /// Usage frequency of the word itself
    pub word_frequency: f64,
    /// Sum of standard English letter frequencies
    pub raw_letter_frequency: f64,
}

/// Linear coefficients for ranking candidate words
///
/// Immutable once built; the evolver creates new profiles rather than
/// adjusting existing ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightProfile {
    double_letter: f64,
    single_letter: f64,
    letter_placement: f64,
    word_frequency: f64,
    raw_letter_frequency: f64,
}

impl WeightProfile {
    /// Number of coefficients in a profile
    pub const COEFFICIENTS: usize = 5;

    /// Create a profile from its five coefficients
    ///
    /// Coefficients are expected to be non-negative.
    #[must_use]
    pub const fn new(
        double_letter: f64,
        single_letter: f64,
        letter_placement: f64,
        word_frequency: f64,
        raw_letter_frequency: f64,
    ) -> Self {
        Self {
            double_letter,
            single_letter,
            letter_placement,
            word_frequency,
            raw_letter_frequency,
        }
    }

    /// Build a profile from coefficients in declaration order
    #[must_use]
    pub const fn from_coefficients(c: [f64; Self::COEFFICIENTS]) -> Self {
        Self::new(c[0], c[1], c[2], c[3], c[4])
    }

    /// Coefficients in declaration order
    #[must_use]
    pub const fn coefficients(&self) -> [f64; Self::COEFFICIENTS] {
        [
            self.double_letter,
            self.single_letter,
            self.letter_placement,
            self.word_frequency,
            self.raw_letter_frequency,
        ]
    }

    #[must_use]
    pub const fn double_letter(&self) -> f64 {
        self.double_letter
    }

    #[must_use]
    pub const fn single_letter(&self) -> f64 {
        self.single_letter
    }

    #[must_use]
    pub const fn letter_placement(&self) -> f64 {
        self.letter_placement
    }

    #[must_use]
    pub const fn word_frequency(&self) -> f64 {
        self.word_frequency
    }

    #[must_use]
    pub const fn raw_letter_frequency(&self) -> f64 {
        self.raw_letter_frequency
    }

    /// Weighted sum of a word's component scores
    #[inline]
    #[must_use]
    pub fn combine(&self, scores: &ComponentScores) -> f64 {
        self.double_letter * scores.repeat_letter
            + self.single_letter * scores.single_letter
            + self.letter_placement * scores.letter_placement
            + self.word_frequency * scores.word_frequency
            + self.raw_letter_frequency * scores.raw_letter_frequency
    }

    /// The same profile replicated for every information level
    #[must_use]
    pub fn uniform_table(self, levels: usize) -> Vec<Self> {
        vec![self; levels]
    }

    /// Pre-tuned weights, one per knownScore level
    #[must_use]
    pub fn best() -> Vec<Self> {
        vec![
            Self::new(0.115_824_338_691_740_48, 0.789_490_790_620_792_9, 0.122_453_492_591_127_78, 0.00, 0.00),
            Self::new(0.111_320_833_266_241_18, 0.784_970_886_962_072_7, 0.153_975_076_556_229_86, 0.024_411_558_257_636_766, 0.0001),
            Self::new(0.104_396_275_616_439_92, 0.715_994_529_036_028_4, 0.122_570_520_210_156_63, 0.020_831_268_296_576_968, 0.0001),
            Self::new(0.140_124_005_825_001_7, 0.796_319_079_881_702_3, 0.113_227_359_312_505_24, 0.005_980_434_312_752_06, 0.0001),
            Self::new(0.107_409_268_196_234_17, 0.793_917_165_172_879, 0.118_994_280_819_958_83, 0.007_518_081_426_898_169, 0.0001),
            Self::new(0.177_211_169_402_765_85, 0.786_979_116_345_163_3, 0.120_773_062_368_100_15, 0.151_934_768_344_493_34, 0.0001),
            Self::new(0.114_419_180_070_647_47, 0.788_159_113_273_814_9, 0.127_006_498_303_376_32, 0.208_299_656_654_929_18, 0.0001),
            Self::new(0.107_779_544_038_994_65, 0.788_735_763_475_601_9, 0.110_786_201_119_576_89, 0.211_029_013_881_750_26, 0.0001),
            Self::new(0.121_207_495_846_866_64, 0.761_844_590_060_243_3, 0.118_702_810_942_999_63, 0.208_388_444_837_592_3, 0.0001),
            Self::new(0.116_521_403_510_539_18, 0.777_971_793_241_270_9, 0.145_011_612_698_437_85, 0.210_604_868_498_450_3, 0.0001),
            Self::new(0.106_711_173_853_117_82, 0.787_118_329_852_786_1, 0.110_426_494_124_907_43, 0.218_027_065_827_884_55, 0.0001),
            Self::new(0.119_654_365_288_828_04, 0.759_458_416_986_794_7, 0.177_421_390_608_507_17, 0.222_337_805_493_446_96, 0.0001),
        ]
    }
}

impl fmt::Display for WeightProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.double_letter,
            self.single_letter,
            self.letter_placement,
            self.word_frequency,
            self.raw_letter_frequency
        )
    }
}
