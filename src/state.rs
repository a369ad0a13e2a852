#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Running,
    Stopped,
}
