// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use findit_utils::id_string;

id_string!(
    /// Points to an image picked by the user, e.g. a file path.
    ImageReference
);
