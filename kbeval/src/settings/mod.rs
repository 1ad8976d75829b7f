use std::fmt;
use std::fs::File;
use std::path::Path;
use serde_yaml;

use errors::*;
use similarity::{ TypeSimilarity, ArgSimilarity, RelationSimilarity };
use evaluation_metrics::{ MatchThreshold, CoupleMode };

/// How predictions are compared with the reference
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EvalSettings {
    pub type_similarity: TypeSimilarity,
    pub arg_similarity: ArgSimilarity,
    pub match_threshold: MatchThreshold,
    pub couples: CoupleMode
}

impl Default for EvalSettings {
    fn default() -> EvalSettings {
        EvalSettings {
            type_similarity: TypeSimilarity::Strict,
            arg_similarity: ArgSimilarity::Strict,
            match_threshold: MatchThreshold::Auto,
            couples: CoupleMode::SameFact
        }
    }
}

impl EvalSettings {
    pub fn strict() -> EvalSettings {
        EvalSettings::default()
    }

    pub fn relaxed() -> EvalSettings {
        EvalSettings {
            type_similarity: TypeSimilarity::Relaxed,
            arg_similarity: ArgSimilarity::Relaxed,
            ..EvalSettings::default()
        }
    }

    #[inline]
    pub fn similarity(&self) -> RelationSimilarity {
        RelationSimilarity::new(self.type_similarity, self.arg_similarity)
    }

    /// The match threshold, with `Auto` resolved
    pub fn threshold(&self) -> MatchThreshold {
        self.match_threshold.resolve(&self.similarity())
    }
}

impl fmt::Debug for EvalSettings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
    type_similarity : {:?}
    arg_similarity  : {:?}
    match_threshold : {:?} ({:?})
    couples         : {:?}"#,
        self.type_similarity,
        self.arg_similarity,
        self.match_threshold,
        self.threshold(),
        self.couples
        )
    }
}

#[derive(Clone, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub evaluation: EvalSettings
}

impl Settings {
    pub fn from_file(fpath: &Path) -> Result<Settings> {
        let file = File::open(fpath)
            .chain_err(|| ErrorKind::InputMissing(fpath.display().to_string()))?;
        let settings: Settings = serde_yaml::from_reader(file)
            .chain_err(|| format!("invalid settings file {}", fpath.display()))?;

        Ok(settings)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
****************************** SETTINGS ******************************
evaluation: {:?}
**********************************************************************
"#,
    self.evaluation)
    }
}
