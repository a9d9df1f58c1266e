//! Generates typed test arrays with a controllable shape and value range.
//!
//! Values are drawn uniformly from `[min, max]`, optionally collapsed towards one repeated value
//! by the similarity transform, and then arranged by an [`ArrayShape`]:
//!
//! ```text
//! random         sorted        nearly_sorted   reversed      few_unique
//!     .              .:           .  :         :.             . .  .
//! : . : :          .:::         .::.::         :::.          :: :..:
//! :.:::.::       .:::::       .:::::::         :::::.        ::::::::
//! ```

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::array::{ArrayShape, TypedArray};
use crate::config::{random_init_seed, MAX_CAPACITY, MAX_SIMILARITY, MIN_SIMILARITY};
use crate::element::Element;
use crate::error::{Error, Result};

// --- Public ---

/// Parameters of one generated array.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GenerationParameters<T> {
    /// Number of elements, within `[1, MAX_CAPACITY]`.
    pub size: usize,
    /// Inclusive lower bound, strictly below `max`.
    pub min: T,
    /// Inclusive upper bound.
    pub max: T,
    /// Fraction in (0.1, 1.0] of elements forced to one repeated value.
    pub similarity: Option<f64>,
}

impl<T: Element> GenerationParameters<T> {
    pub fn new(size: usize, min: T, max: T) -> Self {
        Self {
            size,
            min,
            max,
            similarity: None,
        }
    }

    pub fn with_similarity(mut self, similarity: f64) -> Self {
        self.similarity = Some(similarity);
        self
    }

    /// Builds parameters from wide integer bounds, reporting [`Error::Overflow`] when a bound
    /// can't be represented by `T`.
    pub fn from_wide(size: usize, min: i128, max: i128, similarity: Option<f64>) -> Result<Self> {
        match (T::from_i128(min), T::from_i128(max)) {
            (Some(min), Some(max)) => Ok(Self {
                size,
                min,
                max,
                similarity,
            }),
            _ => Err(overflow_error::<T>()),
        }
    }

    /// Checks every parameter, in the order size, range, representable bounds, similarity.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_CAPACITY {
            return Err(Error::InvalidSize {
                size: self.size,
                max: MAX_CAPACITY,
            });
        }

        if self.min.is_nan() || self.max.is_nan() {
            return Err(Error::NotANumber);
        }

        if self.min.total_cmp(&self.max).is_ge() {
            return Err(Error::InvalidRange {
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }

        if self.min.total_cmp(&T::MIN).is_lt() || self.max.total_cmp(&T::MAX).is_gt() {
            return Err(overflow_error::<T>());
        }

        if let Some(similarity) = self.similarity {
            validate_similarity(similarity)?;
        }

        Ok(())
    }
}

/// Owns the random state used to build arrays. Independent generators never share state.
#[derive(Clone, Debug)]
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::with_seed(random_init_seed())
    }
}

impl Generator {
    /// Seeded from the process seed, see [`crate::config::random_init_seed`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Validates `params` and builds the array. Nothing is allocated if validation fails.
    pub fn generate<T: Element>(
        &mut self,
        params: &GenerationParameters<T>,
        shape: ArrayShape,
    ) -> Result<TypedArray<T>> {
        params.validate()?;

        debug!(
            "generate {} x{} in [{}, {}] similarity={:?} shape={shape}",
            T::KIND,
            params.size,
            params.min,
            params.max,
            params.similarity
        );

        let mut values = self.random_values(params.size, params.min, params.max);

        if let Some(similarity) = params.similarity {
            apply_similarity(&mut values, &mut self.rng, similarity)?;
        }

        apply_shape(&mut values, &mut self.rng, shape);

        Ok(TypedArray::new(values, shape))
    }

    /// Uniform values in `[min, max]` without validation.
    pub(crate) fn random_values<T: Element>(&mut self, size: usize, min: T, max: T) -> Vec<T> {
        (0..size).map(|_| T::sample(&mut self.rng, min, max)).collect()
    }
}

/// One-shot generation with a fresh [`Generator`].
pub fn generate<T: Element>(
    size: usize,
    min: T,
    max: T,
    similarity: Option<f64>,
    shape: ArrayShape,
) -> Result<TypedArray<T>> {
    let params = GenerationParameters {
        size,
        min,
        max,
        similarity,
    };

    Generator::new().generate(&params, shape)
}

/// Rearranges `v` according to `shape`.
pub fn apply_shape<T: Element, R: Rng + ?Sized>(v: &mut [T], rng: &mut R, shape: ArrayShape) {
    match shape {
        ArrayShape::Random | ArrayShape::Other => {}
        ArrayShape::Sorted => v.sort_by(T::total_cmp),
        ArrayShape::NearlySorted => nearly_sorted(v, rng),
        ArrayShape::Reversed => {
            v.sort_by(T::total_cmp);
            v.reverse();
        }
        ArrayShape::FewUnique => few_unique(v),
    }
}

/// Picks one element as target and overwrites every `floor(1 / similarity)`-th slot with it,
/// until the target occurs `floor(len * similarity)` times or that many slots were visited.
pub fn apply_similarity<T: Element, R: Rng + ?Sized>(
    v: &mut [T],
    rng: &mut R,
    similarity: f64,
) -> Result<()> {
    validate_similarity(similarity)?;

    let len = v.len();
    if len == 0 {
        return Ok(());
    }

    let target = v[rng.gen_range(0..len)];
    let to_copy = (len as f64 * similarity).floor() as usize;
    let stride = ((1.0 / similarity).floor() as usize).max(1);

    let mut occurrences = v.iter().filter(|&&val| val == target).count();
    let mut visited = 0;

    for slot in v.iter_mut().step_by(stride) {
        if occurrences >= to_copy || visited >= to_copy {
            break;
        }

        if *slot != target {
            *slot = target;
            occurrences += 1;
        }
        visited += 1;
    }

    trace!("similarity {similarity}: target {target} occurs {occurrences} times in {len}");

    Ok(())
}

// --- Private ---

fn validate_similarity(similarity: f64) -> Result<()> {
    // Written so NaN fails as well.
    if similarity > MIN_SIMILARITY && similarity <= MAX_SIMILARITY {
        Ok(())
    } else {
        Err(Error::InvalidSimilarity(similarity))
    }
}

fn overflow_error<T: Element>() -> Error {
    let (min, max) = T::KIND.bounds();
    Error::Overflow {
        kind: T::KIND,
        min: min.to_owned(),
        max: max.to_owned(),
    }
}

fn ceil_sqrt(len: usize) -> usize {
    (len as f64).sqrt().ceil() as usize
}

fn nearly_sorted<T: Element, R: Rng + ?Sized>(v: &mut [T], rng: &mut R) {
    //     .  :
    //   .::.::
    // .:::::::
    // Sorted, then ceil(sqrt(len)) exchanges between the lower and the upper half.

    v.sort_by(T::total_cmp);

    let len = v.len();
    if len < 3 {
        // No disjoint halves to exchange between.
        return;
    }

    let half = len / 2;
    for _ in 0..ceil_sqrt(len) {
        let a = rng.gen_range(0..half);
        let b = rng.gen_range((half + 1)..len);
        if v[a] != v[b] {
            v.swap(a, b);
        }
    }
}

fn few_unique<T: Element>(v: &mut [T]) {
    // . .  .
    // :: :..:
    // ::::::::
    // Palette of the first ceil(sqrt(len)) distinct values, every element snapped to the closest.

    let len = v.len();
    if len <= 2 {
        return;
    }

    let palette_len = ceil_sqrt(len);
    let mut palette: Vec<T> = Vec::with_capacity(palette_len);
    for &val in v.iter() {
        if palette.len() == palette_len {
            break;
        }
        if !palette.contains(&val) {
            palette.push(val);
        }
    }

    trace!("few_unique: palette of {} for {len} elements", palette.len());

    for val in v.iter_mut() {
        let mut closest = palette[0];
        let mut closest_distance = val.distance(&closest);

        // Strictly closer only, ties keep the earlier palette entry.
        for candidate in &palette[1..] {
            let distance = val.distance(candidate);
            if distance < closest_distance {
                closest = *candidate;
                closest_distance = distance;
            }
        }

        *val = closest;
    }
}
