/// Alias for `Result<T, WqError>`.
pub type WqResult<T> = Result<T, WqError>;

/// Errors that can occur when decoding or restoring a world.
///
/// Everything a player can do wrong in the game itself is narrated instead;
/// these are faults in the data handed to the engine.
#[derive(Debug, thiserror::Error)]
pub enum WqError {
    /// The snapshot text is not a well-formed snapshot document.
    #[error("snapshot decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A room name does not match any room in the world.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(String),

    /// A direction key is not one of north, south, east, or west.
    #[error("unknown direction: \"{0}\"")]
    UnknownDirection(String),

    /// An item location is neither a room, the inventory, nor unplaced.
    #[error("invalid item location: \"{0}\"")]
    InvalidLocation(String),

    /// The snapshot parsed but contains values the world cannot hold.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
