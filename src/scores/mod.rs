pub mod pathway;

pub use pathway::{
    DISPLAY_MAX, DISPLAY_MIN, PathwayScore, PathwayScoreMatrix, SCORE_OFFSET, ScoreStatus,
    score_pathways,
};
