use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitViewError {
    #[error("a comparison needs exactly 2 layers, {0} selected")]
    NeedTwo(usize),

    #[error("two layers are already selected")]
    TooMany,

    #[error("a comparison is already running")]
    AlreadyComparing,

    #[error("no comparison is running")]
    NotComparing,
}
