use serde::Serialize;

/// A static recommendation shown alongside results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvisoryTip {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}
