pub mod d100_trend;
