/// Position of a single cell, counted row by row from zero.
pub type CellIndex = u16;

/// Count type used for grid sizes, mine counts and scores.
pub type CellCount = u16;

pub trait ToSliceIndex {
    fn to_slice_index(self) -> usize;
}

impl ToSliceIndex for CellIndex {
    fn to_slice_index(self) -> usize {
        self.into()
    }
}
