use crate::components::Side;

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Winner once either side reaches `win_score`; `0` means play forever
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if win_score == 0 {
            None
        } else if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Collisions that occurred during the last physics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub puck_hit_wall: bool,
    pub puck_hit_mallet_left: bool,
    pub puck_hit_mallet_right: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.puck_hit_wall = false;
        self.puck_hit_mallet_left = false;
        self.puck_hit_mallet_right = false;
    }

    pub fn mallet_hits(&self) -> u32 {
        self.puck_hit_mallet_left as u32 + self.puck_hit_mallet_right as u32
    }

    pub(crate) fn mark_mallet(&mut self, side: Side) {
        match side {
            Side::Left => self.puck_hit_mallet_left = true,
            Side::Right => self.puck_hit_mallet_right = true,
        }
    }
}
