use crate::errors::{PointSortError, Result};

/// Default number of points per leaf node of the tree the sorted points feed into.
pub const DEFAULT_MAX_POINTS_IN_LEAF_NODE: usize = 512;

/// Maximum number of dimensions a point may carry.
pub const MAX_DIMS: usize = 16;

/// Maximum number of dimensions that take part in ordering.
pub const MAX_INDEX_DIMS: usize = 8;

/// Shape of the points being sorted.
///
/// `num_index_dims` leading dimensions are compared; any remaining dimensions are payload and
/// only move along with their point. Construct through [`BkdConfig::new`], which rejects
/// invalid shapes up front so nothing is validated deep inside the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BkdConfig {
    num_dims: usize,
    num_index_dims: usize,
    bytes_per_dim: usize,
    max_points_in_leaf_node: usize,
    disable_sort_doc_id: bool,
}

impl BkdConfig {
    pub fn new(
        num_dims: usize,
        num_index_dims: usize,
        bytes_per_dim: usize,
        max_points_in_leaf_node: usize,
        disable_sort_doc_id: bool,
    ) -> Result<Self> {
        if num_dims < 1 || num_dims > MAX_DIMS {
            return Err(PointSortError::invalid_config(
                "num_dims",
                format!("must be 1..={}, got {}", MAX_DIMS, num_dims),
            ));
        }

        if num_index_dims < 1 || num_index_dims > MAX_INDEX_DIMS {
            return Err(PointSortError::invalid_config(
                "num_index_dims",
                format!("must be 1..={}, got {}", MAX_INDEX_DIMS, num_index_dims),
            ));
        }

        if num_index_dims > num_dims {
            return Err(PointSortError::invalid_config(
                "num_index_dims",
                format!(
                    "must be <= num_dims ({}), got {}",
                    num_dims, num_index_dims
                ),
            ));
        }

        if bytes_per_dim == 0 {
            return Err(PointSortError::invalid_config(
                "bytes_per_dim",
                "must be > 0, got 0",
            ));
        }

        if max_points_in_leaf_node == 0 {
            return Err(PointSortError::invalid_config(
                "max_points_in_leaf_node",
                "must be > 0, got 0",
            ));
        }

        if num_dims.checked_mul(bytes_per_dim).is_none() {
            return Err(PointSortError::invalid_config(
                "bytes_per_dim",
                format!("{} dimensions of {} bytes overflow", num_dims, bytes_per_dim),
            ));
        }

        Ok(Self {
            num_dims,
            num_index_dims,
            bytes_per_dim,
            max_points_in_leaf_node,
            disable_sort_doc_id,
        })
    }

    /// Default leaf size with the doc id tie-break enabled.
    pub fn with_defaults(
        num_dims: usize,
        num_index_dims: usize,
        bytes_per_dim: usize,
    ) -> Result<Self> {
        Self::new(
            num_dims,
            num_index_dims,
            bytes_per_dim,
            DEFAULT_MAX_POINTS_IN_LEAF_NODE,
            false,
        )
    }

    #[inline]
    pub fn num_dims(&self) -> usize {
        self.num_dims
    }

    #[inline]
    pub fn num_index_dims(&self) -> usize {
        self.num_index_dims
    }

    #[inline]
    pub fn bytes_per_dim(&self) -> usize {
        self.bytes_per_dim
    }

    #[inline]
    pub fn max_points_in_leaf_node(&self) -> usize {
        self.max_points_in_leaf_node
    }

    /// When set, points with equal index-dimension bytes are not ordered by doc id.
    #[inline]
    pub fn disable_sort_doc_id(&self) -> bool {
        self.disable_sort_doc_id
    }

    /// Length of a full packed value, payload dimensions included.
    #[inline]
    pub fn packed_bytes_length(&self) -> usize {
        self.num_dims * self.bytes_per_dim
    }

    /// Length of the compared prefix of a packed value.
    #[inline]
    pub fn packed_index_bytes_length(&self) -> usize {
        self.num_index_dims * self.bytes_per_dim
    }

    /// Bytes needed to store one point: its packed value plus a 32 bit doc id.
    #[inline]
    pub fn bytes_per_doc(&self) -> usize {
        self.packed_bytes_length() + std::mem::size_of::<u32>()
    }
}
