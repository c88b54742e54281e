pub(crate) mod failure_analysis;
pub(crate) mod test_generation;

pub(crate) use failure_analysis::build_failure_analysis_prompt;
pub(crate) use test_generation::build_test_generation_prompt;
