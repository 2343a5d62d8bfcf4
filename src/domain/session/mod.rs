//! Session domain module

mod state;

pub use state::{
    AnalysisStatus, InvalidStateTransition, SessionState, SubmitRejection,
    ANALYSIS_FAILED_MESSAGE,
};
