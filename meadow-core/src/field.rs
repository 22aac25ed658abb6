use meadow_types::{AnimalId, Location};

/// Offsets to the four adjacent cells, in the fixed enumeration order:
/// north, east, south, west. Every adjacency query walks them in this
/// order, which makes birth placement and fallback movement deterministic
/// for a given occupancy.
const ADJACENT_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Occupancy registry for the rectangular field. Cells hold animal ids,
/// never animal references; animals hold only their own coordinate.
#[derive(Debug, Clone)]
pub(crate) struct Field {
    width: i32,
    depth: i32,
    occupancy: Vec<Option<AnimalId>>,
}

impl Field {
    pub(crate) fn new(width: u32, depth: u32) -> Self {
        Self {
            width: width as i32,
            depth: depth as i32,
            occupancy: vec![None; width as usize * depth as usize],
        }
    }

    pub(crate) fn width(&self) -> i32 {
        self.width
    }

    pub(crate) fn depth(&self) -> i32 {
        self.depth
    }

    pub(crate) fn in_bounds(&self, location: Location) -> bool {
        location.row >= 0
            && location.col >= 0
            && location.row < self.depth
            && location.col < self.width
    }

    fn cell_index(&self, location: Location) -> Option<usize> {
        if !self.in_bounds(location) {
            return None;
        }
        Some(location.row as usize * self.width as usize + location.col as usize)
    }

    /// Vacate a cell. No-op when the cell is already empty.
    pub(crate) fn clear(&mut self, location: Location) {
        if let Some(idx) = self.cell_index(location) {
            self.occupancy[idx] = None;
        }
    }

    /// Assign a cell to `id`. Callers verify vacancy first; the old cell, if
    /// any, must already have been cleared.
    pub(crate) fn place(&mut self, id: AnimalId, location: Location) {
        let idx = self
            .cell_index(location)
            .expect("placement target must be in bounds");
        debug_assert!(
            self.occupancy[idx].is_none(),
            "cell must be vacant before placement",
        );
        self.occupancy[idx] = Some(id);
    }

    pub(crate) fn occupant_at(&self, location: Location) -> Option<AnimalId> {
        let idx = self.cell_index(location)?;
        self.occupancy[idx]
    }

    /// In-bounds neighbors of `location`, in enumeration order.
    pub(crate) fn adjacent_locations(
        &self,
        location: Location,
    ) -> impl Iterator<Item = Location> + '_ {
        ADJACENT_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let next = Location {
                row: location.row + dr,
                col: location.col + dc,
            };
            self.in_bounds(next).then_some(next)
        })
    }

    /// Currently-unoccupied neighbors of `location`, in enumeration order.
    pub(crate) fn free_adjacent_locations(&self, location: Location) -> Vec<Location> {
        self.adjacent_locations(location)
            .filter(|next| self.occupant_at(*next).is_none())
            .collect()
    }

    /// First unoccupied neighbor of `location`, or none.
    pub(crate) fn free_adjacent_location(&self, location: Location) -> Option<Location> {
        self.adjacent_locations(location)
            .find(|next| self.occupant_at(*next).is_none())
    }

    pub(crate) fn occupied_cells(&self) -> impl Iterator<Item = (Location, AnimalId)> + '_ {
        self.occupancy
            .iter()
            .enumerate()
            .filter_map(move |(idx, maybe_id)| {
                maybe_id.map(|id| {
                    let location = Location {
                        row: (idx / self.width as usize) as i32,
                        col: (idx % self.width as usize) as i32,
                    };
                    (location, id)
                })
            })
    }

    pub(crate) fn occupied_count(&self) -> usize {
        self.occupancy.iter().flatten().count()
    }

    pub(crate) fn reset(&mut self) {
        self.occupancy.fill(None);
    }
}
