pub mod redundancy;
pub mod pairing;
pub mod scoring;
pub mod couples;

pub use self::redundancy::{ pred_redundant, filter_redundant };
pub use self::pairing::{ Pair, optimal_pairs };
pub use self::scoring::{ MatchThreshold, BaseScores, IEScores, harmonic_mean };
pub use self::couples::{ Couple, CoupleContext, CouplePolicy, CoupleMode, NoCouples, SymmetricArguments, SameFact, find_couples };
