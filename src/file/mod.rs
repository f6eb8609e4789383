pub mod operations;
pub mod section_replace;

pub use operations::{run_job, JobReport, RunOptions};
pub use section_replace::{
    locate_section, replace_section, SectionMarkers, Splice, SpliceOutcome,
};
