use serde::{Deserialize, Serialize};

/// How multi-channel inputs feed the accumulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPolicy {
    /// Every channel is transformed and summed into the one shared accumulator.
    #[default]
    Accumulate,
    /// Channels are collapsed to one BT.601 luma plane before transforming.
    Luma,
}

/// Which accumulator cells enter the per-band variance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellSupport {
    /// Zero cells are excluded from count, sum and sum of squares.
    #[default]
    NonZero,
    /// Every cell of the band is counted, zeros included.
    All,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorParams {
    pub cell_support: CellSupport,
    /// Width of one candidate band in degrees; must divide 90.
    pub angle_step_deg: u32,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            cell_support: CellSupport::NonZero,
            angle_step_deg: 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub channel_policy: ChannelPolicy,
    pub estimator: EstimatorParams,
}
