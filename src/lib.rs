pub mod cli;
pub mod error;
pub mod estimator;
pub mod interface;
pub mod models;
pub mod sampler;
pub mod signup;
pub mod storage;

pub use error::{FootprintError, Result};
pub use estimator::{compute, generate_tips};
pub use models::{AdvisoryTip, EmissionsBreakdown, SurveyResponse};
