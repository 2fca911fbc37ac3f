// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use failure::Failure;
pub use live_query::{LiveQuery, LiveQuerySink, Teardown};
pub use progress_state::ProgressState;
pub use user_id::UserId;

mod failure;
mod live_query;
mod progress_state;
mod user_id;
