// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_language_repository::InMemoryLanguageRepository;

mod in_memory_language_repository;
