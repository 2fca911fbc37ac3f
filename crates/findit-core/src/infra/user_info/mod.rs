// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use document_user_profile_repository::DocumentUserProfileRepository;

mod document_user_profile_repository;
