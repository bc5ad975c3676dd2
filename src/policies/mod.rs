//! Built-in request policies.
//!
//! Each policy follows the same [`RequestPolicy`](crate::pipeline::RequestPolicy)
//! contract as user-written ones and comes with a factory function:
//!
//! - [`user_agent_policy`] - tags requests with a `User-Agent` header
//! - [`log_policy`] - logs requests and outcomes through tracing
//! - [`timeout_policy`] - bounds the rest of the chain with a deadline

pub mod log;
pub mod timeout;
pub mod user_agent;

pub use log::{log_policy, LogPolicy, LogPolicyFactory};
pub use timeout::{timeout_policy, TimeoutPolicy, TimeoutPolicyFactory};
pub use user_agent::{
    default_user_agent, user_agent_policy, UserAgentPolicy, UserAgentPolicyFactory,
    USER_AGENT_HEADER,
};
