use serde::{Deserialize, Serialize};

use crate::config::BLFConfig;
use sheetnest::io::ext_repr::{ExtInstance, ExtSolution};

#[derive(Serialize, Deserialize, Clone)]
pub struct NestOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: BLFConfig,
}
