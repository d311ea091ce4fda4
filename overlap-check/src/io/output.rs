use rect_overlap::io::ext_repr::{ExtPairResult, ExtScene};
use serde::{Deserialize, Serialize};

use crate::config::OverlapConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct OverlapOutput {
    #[serde(flatten)]
    pub scene: ExtScene,
    pub results: Vec<ExtPairResult>,
    pub config: OverlapConfig,
}
