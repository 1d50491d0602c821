//! Macros for ergonomic step sequence construction.

/// Build a `Vec<StepId>` from string literals or any `Into<StepId>` values.
///
/// # Example
///
/// ```
/// use stepsync::core::StepId;
/// use stepsync::steps;
///
/// let sequence = steps!["intro", "agenda", String::from("outro")];
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence[2], StepId::new("outro"));
/// ```
#[macro_export]
macro_rules! steps {
    ($($id:expr),* $(,)?) => {
        vec![$($crate::core::StepId::from($id)),*]
    };
}
