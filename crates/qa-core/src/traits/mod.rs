//! Traits (ports) implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    RepoResult, ReputationRepository, TargetRepository, VoteQuery, VoteRepository,
};
