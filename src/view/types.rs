#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub delta: f64,
    pub direction: Direction,
    pub start_position: f64,
    pub width: f64,
    pub hole: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeltaBars {
    pub player_name: String,
    pub final_delta: f64,
    pub bars: Vec<Bar>,
}
