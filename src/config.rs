use serde::{Deserialize, Serialize};

use crate::{
    numeric::Step,
    producer::{Generator, step_sequence},
    util::Result,
};

/// Serializable description of an inclusive step sequence
///
/// ```ignore
/// let range: StepRange<i64> = StepRange::from_json(r#"{"start": 10, "end": 0, "step": 5}"#)?;
/// assert_eq!(range.build()?.to_vec().into_result()?, vec![10, 5, 0]);
/// ```
///
/// A missing `step` means a step of one. Validation happens in `build()`, so
/// a description with a zero step parses fine and fails there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRange<T> {
    pub start: T,
    pub end: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<T>,
}

impl<T: Step> StepRange<T> {
    pub fn new(start: T, end: T) -> Self {
        StepRange {
            start,
            end,
            step: None,
        }
    }

    pub fn with_step(mut self, step: T) -> Self {
        self.step = Some(step);
        self
    }

    /// Step used when building; the sign is corrected by the sequence itself
    pub fn effective_step(&self) -> T {
        self.step.unwrap_or_else(T::one)
    }

    pub fn build(&self) -> Result<Generator<impl FnMut(usize, usize) -> T + use<T>>> {
        step_sequence(self.start, self.end, self.effective_step())
    }
}

impl<T> StepRange<T>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
