pub mod list_jobs;

pub use list_jobs::{JobDto, JobStatusCountDto, ListJobsCommand, ListJobsResponse, ListJobsUseCase};
