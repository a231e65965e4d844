//! Flat feature tensors and their named segments.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An owned feature tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }
}

/// A named, shaped window into a flat tensor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    /// Start of the segment in the flat tensor.
    pub offset: usize,
    /// One dimension for vectors, two for `rows × columns` grids.
    pub shape: SmallVec<[usize; 2]>,
}

impl Segment {
    #[must_use]
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len()
    }

    /// Rows in a 2-D segment; 1 for vectors.
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.shape.len() > 1 {
            self.shape[0]
        } else {
            1
        }
    }

    #[must_use]
    pub fn row_len(&self) -> usize {
        self.shape.last().copied().unwrap_or(0)
    }

    /// Flat tensor index of `(row, col)`.
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows() && col < self.row_len());
        self.offset + row * self.row_len() + col
    }

    /// View of this segment within `tensor`.
    #[must_use]
    pub fn view<'a>(&self, tensor: &'a [f32]) -> &'a [f32] {
        &tensor[self.range()]
    }
}

/// Ordered segments laid end to end over one flat buffer.
#[derive(Clone, Debug, Default)]
pub struct TensorLayout {
    segments: Vec<Segment>,
    by_name: FxHashMap<String, usize>,
    size: usize,
}

impl TensorLayout {
    /// Append a segment and return it.
    pub fn push(&mut self, name: &str, shape: &[usize]) -> Segment {
        let segment = Segment {
            name: name.to_string(),
            offset: self.size,
            shape: SmallVec::from_slice(shape),
        };
        self.size += segment.len();
        self.by_name.insert(segment.name.clone(), self.segments.len());
        self.segments.push(segment.clone());
        segment
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Segment> {
        self.by_name.get(name).map(|&i| &self.segments[i])
    }

    /// Total length of the flat buffer.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Segments in buffer order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
