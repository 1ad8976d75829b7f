pub use errors::{ Error, ErrorKind, Result, ResultExt };
pub use models::*;
pub use input::{ read_prediction, read_reference };
pub use canonicalization::canonicalize_reference;
pub use similarity::{ TypeSimilarity, ArgSimilarity, RelationSimilarity };
pub use evaluation_metrics::{ Pair, BaseScores, IEScores, MatchThreshold, CoupleMode, CouplePolicy };
pub use evaluation::{ evaluate, Evaluation };
pub use settings::{ Settings, EvalSettings };
pub use utils::Timer;
