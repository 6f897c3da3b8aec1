/// A rectangle in terminal cells, recorded by the renderer for hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        u32::from(column) >= u32::from(self.x)
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) >= u32::from(self.y)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}
