// findit-core/findit-utils
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
